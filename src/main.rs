use anyhow::Result;
use clap::{crate_version, App as Cli, Arg};
use portfolio_tui::app::{App, LaunchOptions};
use portfolio_tui::config::Config;
use portfolio_tui::content::SectionId;
use portfolio_tui::state::StateError;

#[tokio::main]
async fn main() -> Result<()> {
    let matches = Cli::new("portfolio-tui")
        .version(crate_version!())
        .about("A terminal rendition of a developer portfolio")
        .arg(
            Arg::with_name("config")
                .short("c")
                .long("config")
                .value_name("DIR")
                .help("Directory holding config.yml")
                .takes_value(true),
        )
        .arg(
            Arg::with_name("endpoint")
                .short("e")
                .long("endpoint")
                .value_name("URL")
                .help("Form relay endpoint for the contact form")
                .takes_value(true),
        )
        .arg(
            Arg::with_name("section")
                .short("s")
                .long("section")
                .value_name("ID")
                .help("Section to open on start (home, about, skills, experience, projects, why, contact)")
                .takes_value(true),
        )
        .get_matches();

    let mut config = Config::new();
    config.load(matches.value_of("config"))?;
    if let Some(endpoint) = matches.value_of("endpoint") {
        config.relay_endpoint = endpoint.to_string();
    }

    let start_section = match matches.value_of("section") {
        Some(id) if SectionId::parse(id).is_none() => {
            return Err(StateError::UnknownSection(id.to_string()).into());
        }
        other => other.map(str::to_string),
    };

    App::start(config, LaunchOptions { start_section }).await
}
