use super::page::PageBuilder;
use crate::content::{self, SectionId};
use crate::state::RevealKey;
use crate::ui::widgets::styling;
use ratatui::text::Span;

/// Render the about section.
///
pub fn about(page: &mut PageBuilder) {
    let theme = page.theme;
    let language = page.language;

    page.reveal(RevealKey::header(SectionId::About));
    page.push(vec![Span::styled(
        content::ABOUT_TITLE.get(language).to_string(),
        styling::heading_style(theme),
    )]);
    page.plain();
    page.blank();

    page.reveal(RevealKey::item(SectionId::About, 0));
    for row in content::PORTRAIT {
        page.push(vec![Span::styled(row.to_string(), styling::accent_style(theme))]);
    }
    page.push(vec![
        Span::styled(
            format!("⌖ {}  ", content::ABOUT_LOCATION),
            styling::muted_text_style(theme),
        ),
        Span::styled(
            content::ABOUT_STATUS.get(language).to_string(),
            styling::success_style(theme),
        ),
    ]);
    page.plain();
    page.blank();

    page.reveal(RevealKey::item(SectionId::About, 1));
    page.push(vec![Span::styled("$ whoami", styling::warning_style(theme))]);
    page.wrapped(
        content::ABOUT_WHOAMI.get(language),
        styling::normal_text_style(theme),
        2,
    );
    page.plain();
    page.blank();

    page.reveal(RevealKey::item(SectionId::About, 2));
    page.push(vec![Span::styled(
        "$ cat mission.txt",
        styling::warning_style(theme),
    )]);
    page.wrapped(
        content::ABOUT_MISSION.get(language),
        styling::normal_text_style(theme),
        2,
    );
    page.plain();
    page.blank();

    page.reveal(RevealKey::item(SectionId::About, 3));
    let mut spans = vec![];
    for (i, stat) in content::ABOUT_STATS.iter().enumerate() {
        if i > 0 {
            spans.push(Span::styled(" │ ", styling::muted_text_style(theme)));
        }
        spans.push(Span::styled(
            format!("{} ", stat.label.get(language)),
            styling::muted_text_style(theme),
        ));
        spans.push(Span::styled(
            stat.value.get(language).to_string(),
            styling::active_list_item_style(theme),
        ));
    }
    let stats_width: usize = spans.iter().map(|s| s.content.chars().count()).sum();
    if stats_width <= page.width() {
        page.push(spans);
    } else {
        for stat in content::ABOUT_STATS.iter() {
            page.push(vec![
                Span::styled(
                    format!("{:<14}", stat.label.get(language)),
                    styling::muted_text_style(theme),
                ),
                Span::styled(
                    stat.value.get(language).to_string(),
                    styling::active_list_item_style(theme),
                ),
            ]);
        }
    }
    page.plain();
}
