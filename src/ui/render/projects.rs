use super::page::PageBuilder;
use crate::content::{self, SectionId};
use crate::state::RevealKey;
use crate::ui::widgets::styling;
use ratatui::{style::Modifier, text::Span};

/// Render pinned projects.
///
pub fn projects(page: &mut PageBuilder) {
    let theme = page.theme;
    let language = page.language;

    page.reveal(RevealKey::header(SectionId::Projects));
    page.push(vec![Span::styled(
        content::PROJECTS_TITLE.get(language).to_string(),
        styling::heading_style(theme),
    )]);
    page.plain();
    page.blank();

    for (i, project) in content::PROJECTS.iter().enumerate() {
        page.reveal(RevealKey::item(SectionId::Projects, i));
        page.push(vec![
            Span::styled("▸ ", styling::accent_style(theme)),
            Span::styled(
                project.name.to_string(),
                styling::active_list_item_style(theme),
            ),
        ]);
        page.push(vec![
            Span::raw("  "),
            Span::styled(
                project.url.to_string(),
                styling::muted_text_style(theme).add_modifier(Modifier::UNDERLINED),
            ),
        ]);
        page.wrapped(
            project.description.get(language),
            styling::secondary_text_style(theme),
            2,
        );
        page.tags(project.tags, 2);
        page.push(vec![
            Span::raw("  "),
            Span::styled("● ", styling::warning_style(theme)),
            Span::styled(
                format!("{}   ★ {}   ⑂ {}", project.language, project.stars, project.forks),
                styling::muted_text_style(theme),
            ),
        ]);
        page.plain();
        page.blank();
    }
}
