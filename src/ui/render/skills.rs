use super::page::PageBuilder;
use crate::content::{self, SectionId};
use crate::state::RevealKey;
use crate::ui::widgets::styling;
use ratatui::text::Span;

const BAR_CELLS: u8 = 10;

/// Return a coverage bar such as `[██████░░░░]` for a score out of ten.
///
pub fn coverage_bar(score: u8) -> String {
    let filled = score.min(BAR_CELLS) as usize;
    format!(
        "[{}{}]",
        "█".repeat(filled),
        "░".repeat(BAR_CELLS as usize - filled)
    )
}

/// Render the skills scan.
///
pub fn skills(page: &mut PageBuilder) {
    let theme = page.theme;
    let language = page.language;

    page.reveal(RevealKey::header(SectionId::Skills));
    page.push(vec![Span::styled(
        content::SKILLS_TITLE.get(language).to_string(),
        styling::heading_style(theme),
    )]);
    page.push(vec![Span::styled(
        content::SKILLS_COMMAND.get(language).to_string(),
        styling::muted_text_style(theme),
    )]);
    page.plain();
    page.blank();

    for (i, module) in content::SKILL_MODULES.iter().enumerate() {
        page.reveal(RevealKey::item(SectionId::Skills, i));
        page.push(vec![
            Span::styled(
                format!("{:02} ", i + 1),
                styling::muted_text_style(theme),
            ),
            Span::styled(
                module.label.get(language).to_string(),
                styling::active_list_item_style(theme),
            ),
        ]);
        page.push(vec![
            Span::raw("   "),
            Span::styled(coverage_bar(module.score), styling::success_style(theme)),
            Span::styled(
                format!(
                    " {}% {}",
                    module.score as u32 * 10,
                    content::SKILLS_COVERAGE.get(language)
                ),
                styling::muted_text_style(theme),
            ),
        ]);
        page.tags(module.items, 3);
        page.wrapped(
            module.description.get(language),
            styling::secondary_text_style(theme),
            3,
        );
        page.plain();
        page.blank();
    }
}
