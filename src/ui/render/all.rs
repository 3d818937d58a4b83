use super::{footer, log, page, rail, top_bar, Frame};
use crate::state::State;
use ratatui::layout::{Constraint, Direction, Layout};

const RAIL_WIDTH: u16 = 18;
const LOG_HEIGHT: u16 = 8;

/// Render all widgets according to state.
///
pub fn all(frame: &mut Frame, state: &mut State) {
    let mut constraints = vec![Constraint::Length(1), Constraint::Min(3)];
    if state.is_log_visible() {
        constraints.push(Constraint::Length(LOG_HEIGHT));
    }
    constraints.push(Constraint::Length(1));
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints(constraints)
        .split(frame.size());

    top_bar(frame, rows[0], state);

    let body = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Min(20), Constraint::Length(RAIL_WIDTH)])
        .split(rows[1]);
    page(frame, body[0], state);
    rail(frame, body[1], state);

    if state.is_log_visible() {
        log(frame, rows[2], state);
    }
    footer(frame, rows[rows.len() - 1], state);
}
