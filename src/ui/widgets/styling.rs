use crate::ui::theme::Theme;
use ratatui::style::{Modifier, Style};

/// Return the border style for active blocks.
///
pub fn active_block_border_style(theme: &Theme) -> Style {
    Style::default().fg(theme.border_active.to_color())
}

/// Return the border style for normal blocks.
///
pub fn normal_block_border_style(theme: &Theme) -> Style {
    Style::default().fg(theme.border_normal.to_color())
}

pub fn active_block_title_style() -> Style {
    Style::default().add_modifier(Modifier::BOLD)
}

/// Return the base style of the page: text on the canvas color.
///
pub fn page_style(theme: &Theme) -> Style {
    Style::default()
        .fg(theme.text.to_color())
        .bg(theme.background.to_color())
}

pub fn normal_text_style(theme: &Theme) -> Style {
    Style::default().fg(theme.text.to_color())
}

pub fn secondary_text_style(theme: &Theme) -> Style {
    Style::default().fg(theme.text_secondary.to_color())
}

pub fn muted_text_style(theme: &Theme) -> Style {
    Style::default().fg(theme.text_muted.to_color())
}

/// Return the style for section headings.
///
pub fn heading_style(theme: &Theme) -> Style {
    Style::default()
        .fg(theme.primary.to_color())
        .add_modifier(Modifier::BOLD)
}

pub fn accent_style(theme: &Theme) -> Style {
    Style::default().fg(theme.accent.to_color())
}

pub fn tag_style(theme: &Theme) -> Style {
    Style::default()
        .fg(theme.info.to_color())
        .bg(theme.surface.to_color())
}

pub fn success_style(theme: &Theme) -> Style {
    Style::default().fg(theme.success.to_color())
}

pub fn warning_style(theme: &Theme) -> Style {
    Style::default().fg(theme.warning.to_color())
}

pub fn error_style(theme: &Theme) -> Style {
    Style::default().fg(theme.error.to_color())
}

/// Return the style for the active navigation control.
///
pub fn active_list_item_style(theme: &Theme) -> Style {
    Style::default()
        .fg(theme.primary.to_color())
        .add_modifier(Modifier::BOLD)
}

/// Return the style for the control under the keyboard cursor.
///
pub fn selected_list_item_style(theme: &Theme) -> Style {
    Style::default()
        .fg(theme.highlight_fg.to_color())
        .bg(theme.highlight_bg.to_color())
}

/// Return the style for the bars at the top and bottom of the screen.
///
pub fn bar_style(theme: &Theme) -> Style {
    Style::default()
        .fg(theme.text_secondary.to_color())
        .bg(theme.surface.to_color())
}
