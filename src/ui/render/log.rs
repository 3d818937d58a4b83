use super::Frame;
use crate::state::State;
use crate::ui::widgets::styling;
use ratatui::{
    layout::Rect,
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem},
};

/// Render log widget according to state. The newest entries are kept in view.
///
pub fn log(frame: &mut Frame, size: Rect, state: &State) {
    let theme = state.get_theme();
    let block = Block::default()
        .title("Log (d: hide)")
        .borders(Borders::ALL)
        .border_style(styling::normal_block_border_style(theme));

    let rows = size.height.saturating_sub(2) as usize;
    let entries = state.get_log_entries();
    let items: Vec<ListItem> = entries
        .iter()
        .skip(entries.len().saturating_sub(rows))
        .map(|entry| {
            ListItem::new(Line::from(vec![Span::styled(
                entry.clone(),
                styling::secondary_text_style(theme),
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
