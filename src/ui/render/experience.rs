use super::page::PageBuilder;
use crate::content::{self, SectionId};
use crate::state::RevealKey;
use crate::ui::widgets::styling;
use ratatui::text::Span;

/// Render experience as a commit log, newest first.
///
pub fn experience(page: &mut PageBuilder) {
    let theme = page.theme;
    let language = page.language;

    page.reveal(RevealKey::header(SectionId::Experience));
    page.push(vec![Span::styled(
        content::EXPERIENCE_TITLE.get(language).to_string(),
        styling::heading_style(theme),
    )]);
    page.plain();
    page.blank();

    for (i, commit) in content::EXPERIENCE.iter().enumerate() {
        page.reveal(RevealKey::item(SectionId::Experience, i));
        page.push(vec![
            Span::styled(
                format!("commit {} ", commit.id),
                styling::warning_style(theme),
            ),
            Span::styled(
                format!("({})", commit.branch),
                styling::accent_style(theme),
            ),
        ]);
        page.push(vec![
            Span::styled(
                commit.company.to_string(),
                styling::active_list_item_style(theme),
            ),
            Span::styled(" · ", styling::muted_text_style(theme)),
            Span::styled(
                commit.title.get(language).to_string(),
                styling::normal_text_style(theme),
            ),
        ]);
        page.push(vec![Span::styled(
            format!("Date: {}", commit.period.get(language)),
            styling::muted_text_style(theme),
        )]);
        page.wrapped(
            commit.description.get(language),
            styling::secondary_text_style(theme),
            4,
        );
        page.tags(commit.tags, 4);
        page.push(vec![
            Span::styled(
                format!(" {} files changed, ", commit.files_changed),
                styling::muted_text_style(theme),
            ),
            Span::styled(
                format!("{} insertions(+)", commit.insertions),
                styling::success_style(theme),
            ),
            Span::styled(", ", styling::muted_text_style(theme)),
            Span::styled(
                format!("{} deletions(-)", commit.deletions),
                styling::error_style(theme),
            ),
        ]);
        page.plain();
        page.blank();
    }
}
