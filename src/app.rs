use crate::config::Config;
use crate::content::SectionId;
use crate::events::network::{Event as NetworkEvent, Handler as NetworkEventHandler};
use crate::events::terminal::Handler as TerminalEventHandler;
use crate::logger;
use crate::relay::Relay;
use crate::state::State;
use crate::ui::Theme;
use anyhow::{anyhow, Result};
use crossterm::{
    event::{DisableMouseCapture, EnableMouseCapture},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use log::*;
use ratatui::{backend::CrosstermBackend, Terminal};
use std::io::{self, stdout};
use std::sync::{mpsc, Arc};
use std::time::Instant;
use tokio::sync::Mutex;

pub type NetworkEventSender = std::sync::mpsc::Sender<NetworkEvent>;
type NetworkEventReceiver = std::sync::mpsc::Receiver<NetworkEvent>;
type LogReceiver = std::sync::mpsc::Receiver<String>;

/// Options given on the command line that override configuration.
///
#[derive(Debug, Default, Clone)]
pub struct LaunchOptions {
    pub start_section: Option<String>,
}

/// Oversees event processing, state management, and terminal output.
///
pub struct App {
    relay_endpoint: String,
    state: Arc<Mutex<State>>,
}

impl App {
    /// Start a new application according to the given configuration. Returns
    /// the result of the application execution.
    ///
    pub async fn start(config: Config, options: LaunchOptions) -> Result<()> {
        let log_receiver = logger::init(LevelFilter::Debug)?;

        info!("Starting application...");
        let theme = Theme::from_name(&config.theme_name).unwrap_or_else(|| {
            warn!(
                "Unknown theme '{}', expected one of {:?}.",
                config.theme_name,
                Theme::available_themes()
            );
            Theme::default()
        });
        let (tx, rx) = mpsc::channel::<NetworkEvent>();
        let state = State::new(tx, config.state_settings(), theme, Instant::now());
        let app = App {
            relay_endpoint: config.relay_endpoint.clone(),
            state: Arc::new(Mutex::new(state)),
        };
        app.start_network(rx)?;
        app.start_ui(log_receiver, options).await?;

        info!("Exiting application...");
        Ok(())
    }

    /// Start a separate thread for asynchronous relay requests.
    ///
    fn start_network(&self, net_receiver: NetworkEventReceiver) -> Result<()> {
        debug!("Creating new thread for asynchronous networking...");
        let cloned_state = Arc::clone(&self.state);
        let endpoint = self.relay_endpoint.to_owned();
        let runtime = tokio::runtime::Builder::new_multi_thread()
            .enable_all()
            .build()
            .map_err(|e| anyhow!("Failed to create network runtime: {}", e))?;
        std::thread::spawn(move || {
            runtime.block_on(async {
                let relay = Relay::new(&endpoint);
                let mut network_event_handler = NetworkEventHandler::new(&cloned_state, &relay);
                while let Ok(network_event) = net_receiver.recv() {
                    match network_event_handler.handle(network_event).await {
                        Ok(_) => (),
                        Err(e) => error!("Failed to handle network event: {}", e),
                    }
                }
            })
        });
        Ok(())
    }

    /// Begin the terminal event poll on a separate thread before starting the
    /// render loop on the main thread. Return the result following an exit
    /// request or unrecoverable error.
    ///
    async fn start_ui(&self, log_receiver: LogReceiver, options: LaunchOptions) -> Result<()> {
        debug!("Starting user interface on main thread...");
        let mut stdout = stdout();
        execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
        enable_raw_mode()?;

        let mut terminal = Terminal::new(CrosstermBackend::new(stdout))?;
        terminal.hide_cursor()?;

        let result = self.run_loop(&mut terminal, log_receiver, options).await;

        self.state.lock().await.teardown();
        disable_raw_mode()?;
        let mut stdout = io::stdout();
        execute!(stdout, LeaveAlternateScreen, DisableMouseCapture)?;
        terminal.show_cursor()?;

        result
    }

    async fn run_loop(
        &self,
        terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
        log_receiver: LogReceiver,
        options: LaunchOptions,
    ) -> Result<()> {
        let terminal_event_handler = TerminalEventHandler::new();
        let mut pending_section = options.start_section;
        loop {
            let mut state = self.state.lock().await;
            while let Ok(entry) = log_receiver.try_recv() {
                state.add_log_entry(entry);
            }
            if let Ok(size) = terminal.size() {
                state.set_terminal_size(size);
            };
            terminal.draw(|frame| crate::ui::render(frame, &mut state))?;

            // The start section can only be reached once the page is laid out.
            if let Some(id) = pending_section.take() {
                if let Err(e) = state.navigate_to_id(&id, Instant::now()) {
                    warn!("Cannot open section '{}': {}. Try one of {:?}.", id, e, section_ids());
                }
            }

            if !terminal_event_handler.handle_next(&mut state)? {
                debug!("Received application exit request.");
                break;
            }
        }
        Ok(())
    }
}

fn section_ids() -> Vec<&'static str> {
    SectionId::ALL.iter().map(|id| id.as_str()).collect()
}
