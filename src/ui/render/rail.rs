use super::Frame;
use crate::state::State;
use crate::ui::widgets::styling;
use ratatui::{
    layout::Rect,
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem},
};

const BLOCK_TITLE: &str = "nav";

/// Render the navigation rail: one control per section with the active one
/// marked. Records the drawn area so clicks can be mapped back to controls.
///
pub fn rail(frame: &mut Frame, size: Rect, state: &mut State) {
    state.set_rail_area(size);
    let theme = state.get_theme();
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(styling::active_block_border_style(theme))
        .title(Span::styled(BLOCK_TITLE, styling::active_block_title_style()));

    let items: Vec<ListItem> = state
        .nav_controls()
        .into_iter()
        .enumerate()
        .map(|(i, control)| {
            let marker = if control.active { "●" } else { "○" };
            let style = if control.selected {
                styling::selected_list_item_style(theme)
            } else if control.active {
                styling::active_list_item_style(theme)
            } else {
                styling::muted_text_style(theme)
            };
            ListItem::new(Line::from(vec![Span::styled(
                format!("{} {} {}", marker, i + 1, control.label),
                style,
            )]))
        })
        .collect();

    frame.render_widget(
        List::new(items)
            .block(block)
            .style(styling::page_style(theme)),
        size,
    );
}
