use super::Frame;
use crate::content;
use crate::state::State;
use crate::ui::widgets::styling;
use chrono::Datelike;
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::Modifier,
    text::{Line, Span},
    widgets::Paragraph,
};

const PAGE_HINTS: &str = " j/k: scroll  1-7: jump  [/]: rail  l: lang  s: sound  i: contact  y: email  c: cv  d: log  q: quit";

/// Render footer widget: key hints on the left, owner credit on the right.
///
pub fn footer(frame: &mut Frame, size: Rect, state: &State) {
    let theme = state.get_theme();
    let hints = if state.is_form_input_mode() {
        format!(" {}", content::CONTACT_FORM_HINT.get(state.get_language()))
    } else {
        PAGE_HINTS.to_string()
    };
    let credit = format!(
        "© {} {} · {} ",
        chrono::Local::now().year(),
        content::OWNER,
        content::FOOTER_ROLE
    );

    let columns = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Min(10),
            Constraint::Length(credit.chars().count() as u16),
        ])
        .split(size);

    frame.render_widget(
        Paragraph::new(Line::from(vec![Span::styled(
            hints,
            styling::bar_style(theme),
        )]))
        .style(styling::bar_style(theme)),
        columns[0],
    );
    frame.render_widget(
        Paragraph::new(Line::from(vec![Span::styled(
            credit,
            styling::bar_style(theme).add_modifier(Modifier::DIM),
        )]))
        .alignment(Alignment::Right)
        .style(styling::bar_style(theme)),
        columns[1],
    );
}
