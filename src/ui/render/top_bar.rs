use super::Frame;
use crate::content::{self, Language};
use crate::state::State;
use crate::ui::widgets::styling;
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::Modifier,
    text::{Line, Span},
    widgets::Paragraph,
};

/// Render the top bar: workspace path on the left, language and sound
/// toggles on the right.
///
pub fn top_bar(frame: &mut Frame, size: Rect, state: &State) {
    let theme = state.get_theme();
    let columns = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Min(10), Constraint::Length(24)])
        .split(size);

    let path = Line::from(vec![
        Span::styled(" ● ", styling::error_style(theme)),
        Span::styled(
            content::WORKSPACE_PATH,
            styling::bar_style(theme).add_modifier(Modifier::BOLD),
        ),
        Span::styled(
            format!("  #{}", state.active_section()),
            styling::muted_text_style(theme),
        ),
    ]);
    frame.render_widget(
        Paragraph::new(path).style(styling::bar_style(theme)),
        columns[0],
    );

    let language_span = |language: Language| {
        let style = if state.get_language() == language {
            styling::selected_list_item_style(theme)
        } else {
            styling::bar_style(theme)
        };
        Span::styled(format!(" {} ", language.code().to_uppercase()), style)
    };
    let sound = if state.is_sound_enabled() { "♪ on " } else { "♪ off" };
    let toggles = Line::from(vec![
        language_span(Language::En),
        language_span(Language::Pl),
        Span::styled("  ", styling::bar_style(theme)),
        Span::styled(sound, styling::bar_style(theme)),
        Span::styled(" ", styling::bar_style(theme)),
    ]);
    frame.render_widget(
        Paragraph::new(toggles)
            .alignment(Alignment::Right)
            .style(styling::bar_style(theme)),
        columns[1],
    );
}
