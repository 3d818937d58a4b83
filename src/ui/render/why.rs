use super::page::PageBuilder;
use crate::content::{self, SectionId};
use crate::state::RevealKey;
use crate::ui::widgets::styling;
use ratatui::text::Span;

/// Render the reasons to work together as a markdown file.
///
pub fn why(page: &mut PageBuilder) {
    let theme = page.theme;
    let language = page.language;

    page.reveal(RevealKey::header(SectionId::Why));
    page.push(vec![
        Span::styled("$ cat ", styling::muted_text_style(theme)),
        Span::styled(
            content::WHY_FILE.get(language).to_string(),
            styling::heading_style(theme),
        ),
    ]);
    page.plain();
    page.blank();

    for (i, feature) in content::FEATURES.iter().enumerate() {
        page.reveal(RevealKey::item(SectionId::Why, i));
        page.push(vec![
            Span::styled("## ", styling::muted_text_style(theme)),
            Span::styled(
                feature.title.get(language).to_string(),
                styling::success_style(theme),
            ),
        ]);
        page.wrapped(
            feature.description.get(language),
            styling::secondary_text_style(theme),
            3,
        );
        page.plain();
        page.blank();
    }
}
