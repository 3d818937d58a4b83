use super::page::PageBuilder;
use crate::content::{self, SectionId};
use crate::state::{RevealKey, State};
use crate::ui::theme::Theme;
use crate::ui::widgets::styling;
use crate::utils::highlight::{highlighter, TokenKind};
use crate::utils::text;
use ratatui::{
    style::{Modifier, Style},
    text::Span,
};

const CARET: &str = "▌";
const CODE_FILE_NAME: &str = "Portfolio.tsx";
const MAX_CODE_WIDTH: usize = 60;

/// Render the hero section: greeting, loaded modules, the typed code window
/// and the export status line.
///
pub fn hero(page: &mut PageBuilder, state: &State) {
    let theme = page.theme;
    let language = page.language;

    page.blank();
    page.reveal(RevealKey::header(SectionId::Home));
    page.push(vec![Span::styled(
        content::HERO_GREETING.get(language).to_string(),
        styling::muted_text_style(theme),
    )]);
    page.push(vec![Span::styled(
        content::OWNER.to_string(),
        styling::heading_style(theme).add_modifier(Modifier::UNDERLINED),
    )]);
    page.wrapped(
        content::HERO_ROLE.get(language),
        styling::secondary_text_style(theme),
        0,
    );
    page.plain();
    page.blank();

    page.reveal(RevealKey::item(SectionId::Home, 0));
    page.push(vec![Span::styled(
        content::HERO_LOADED_MODULES.get(language).to_string(),
        styling::accent_style(theme),
    )]);
    page.tags(&content::HERO_MODULES, 0);
    page.plain();
    page.blank();

    page.reveal(RevealKey::item(SectionId::Home, 1));
    code_window(page, state);
    page.plain();
    page.blank();

    page.reveal(RevealKey::item(SectionId::Home, 2));
    let status = state.get_status_typewriter();
    let mut spans = vec![
        Span::styled(
            format!("[ {} ]", content::HERO_EXPORT_FILE.get(language)),
            styling::active_list_item_style(theme),
        ),
        Span::raw("  "),
        Span::styled(
            status.revealed_text().to_string(),
            styling::success_style(theme),
        ),
        Span::styled(
            status.ellipsis().to_string(),
            styling::success_style(theme),
        ),
    ];
    if status.caret_visible() {
        spans.push(Span::styled(CARET, styling::success_style(theme)));
    }
    page.push(spans);
    page.plain();
}

fn code_window(page: &mut PageBuilder, state: &State) {
    let theme = page.theme;
    let inner = page.width().min(MAX_CODE_WIDTH).saturating_sub(2);
    let border = styling::normal_block_border_style(theme);
    let title = format!("─ {} ", CODE_FILE_NAME);
    let fill = inner.saturating_sub(title.chars().count());
    page.push(vec![
        Span::styled("┌", border),
        Span::styled(title, border),
        Span::styled("─".repeat(fill), border),
        Span::styled("┐", border),
    ]);

    let typewriter = state.get_code_typewriter();
    let revealed: Vec<&str> = typewriter.revealed_text().split('\n').collect();
    let last = revealed.len() - 1;
    for row in 0..content::HERO_CODE_ROWS {
        let number = format!("{:>2} ", row + 1);
        let code_width = inner.saturating_sub(number.chars().count() + 1);
        let mut spans = vec![
            Span::styled("│", border),
            Span::styled(number, styling::muted_text_style(theme)),
        ];
        let mut used = 0;
        if let Some(source) = revealed.get(row) {
            let source = text::truncate(source, code_width);
            used = source.chars().count();
            spans.extend(highlighted(&source, theme));
            if row == last && typewriter.caret_visible() && used < code_width {
                spans.push(Span::styled(CARET, styling::normal_text_style(theme)));
                used += 1;
            }
        }
        spans.push(Span::raw(" ".repeat(code_width.saturating_sub(used) + 1)));
        spans.push(Span::styled("│", border));
        page.push(spans);
    }

    page.push(vec![
        Span::styled("└", border),
        Span::styled("─".repeat(inner), border),
        Span::styled("┘", border),
    ]);
}

fn highlighted(source: &str, theme: &Theme) -> Vec<Span<'static>> {
    let Some(highlighter) = highlighter() else {
        return vec![Span::styled(
            source.to_string(),
            styling::normal_text_style(theme),
        )];
    };
    highlighter
        .tokenize(source)
        .into_iter()
        .map(|token| {
            let style = match token.kind {
                TokenKind::Comment => styling::muted_text_style(theme).add_modifier(Modifier::ITALIC),
                TokenKind::String => Style::default().fg(theme.info.to_color()),
                TokenKind::Keyword => Style::default().fg(theme.error.to_color()),
                TokenKind::Tag => styling::success_style(theme),
                TokenKind::Attribute => styling::accent_style(theme),
                TokenKind::Punctuation => styling::secondary_text_style(theme),
                TokenKind::Plain => styling::normal_text_style(theme),
            };
            Span::styled(token.text.to_string(), style)
        })
        .collect()
}
