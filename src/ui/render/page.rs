//! The scrolling page.
//!
//! Every section is laid out into rows up front. The row ranges become the
//! section bounds and reveal targets handed back to state, and the rows inside
//! the viewport are drawn with their reveal appearance applied.

use super::{about, contact, experience, hero, projects, skills, why};
use super::Frame;
use crate::content::{Language, SectionId};
use crate::state::{Appearance, RevealKey, RevealTarget, SectionBounds, State, REVEAL_OFFSET_COLUMNS};
use crate::ui::theme::Theme;
use crate::ui::widgets::styling;
use crate::utils::text;
use ratatui::{
    layout::Rect,
    style::{Color, Style},
    text::{Line, Span},
    widgets::{Paragraph, Scrollbar, ScrollbarOrientation, ScrollbarState},
};
use std::time::Instant;

/// Columns kept free on the left of every row.
const MARGIN: u16 = 2;

/// One laid-out row and the reveal target it belongs to.
///
#[derive(Debug, Clone)]
pub struct PageLine {
    pub line: Line<'static>,
    pub reveal: Option<RevealKey>,
}

/// The fully laid-out page.
///
#[derive(Debug, Clone, Default)]
pub struct Page {
    pub lines: Vec<PageLine>,
    pub sections: Vec<SectionBounds>,
    pub targets: Vec<RevealTarget>,
}

/// Accumulates rows section by section.
///
pub struct PageBuilder<'a> {
    pub theme: &'a Theme,
    pub language: Language,
    width: usize,
    lines: Vec<PageLine>,
    sections: Vec<SectionBounds>,
    current: Option<(SectionId, u32)>,
    reveal: Option<RevealKey>,
}

impl<'a> PageBuilder<'a> {
    /// Return a builder for content `width` columns wide.
    ///
    pub fn new(theme: &'a Theme, language: Language, width: u16) -> Self {
        PageBuilder {
            theme,
            language,
            width: width.saturating_sub(MARGIN * 2 + REVEAL_OFFSET_COLUMNS).max(10) as usize,
            lines: vec![],
            sections: vec![],
            current: None,
            reveal: None,
        }
    }

    /// Usable text width in chars.
    ///
    pub fn width(&self) -> usize {
        self.width
    }

    fn row(&self) -> u32 {
        self.lines.len() as u32
    }

    /// Close the open section, if any, and start `id` at the next row.
    ///
    pub fn begin_section(&mut self, id: SectionId) {
        self.close_section();
        self.reveal = None;
        self.current = Some((id, self.row()));
    }

    fn close_section(&mut self) {
        if let Some((id, top)) = self.current.take() {
            let height = self.row() - top;
            self.sections.push(SectionBounds::new(id, top, height));
        }
    }

    /// Tag the following rows with `key` until the next call.
    ///
    pub fn reveal(&mut self, key: RevealKey) {
        self.reveal = Some(key);
    }

    /// Stop tagging rows.
    ///
    pub fn plain(&mut self) {
        self.reveal = None;
    }

    pub fn push(&mut self, spans: Vec<Span<'static>>) {
        let mut indented = vec![Span::raw(" ".repeat(MARGIN as usize))];
        indented.extend(spans);
        self.lines.push(PageLine {
            line: Line::from(indented),
            reveal: self.reveal,
        });
    }

    pub fn blank(&mut self) {
        self.lines.push(PageLine {
            line: Line::default(),
            reveal: None,
        });
    }

    /// Push `value` word-wrapped to the builder width after `indent` spaces.
    ///
    pub fn wrapped(&mut self, value: &str, style: Style, indent: usize) {
        let width = self.width.saturating_sub(indent);
        for row in text::wrap(value, width) {
            self.push(vec![Span::raw(" ".repeat(indent)), Span::styled(row, style)]);
        }
    }

    /// Push a list of tags, wrapping onto further rows when needed.
    ///
    pub fn tags(&mut self, tags: &[&str], indent: usize) {
        let style = styling::tag_style(self.theme);
        let mut spans: Vec<Span<'static>> = vec![Span::raw(" ".repeat(indent))];
        let mut used = indent;
        for tag in tags {
            let label = format!(" {} ", tag);
            let len = label.chars().count() + 1;
            if used + len > self.width && used > indent {
                self.push(std::mem::take(&mut spans));
                spans.push(Span::raw(" ".repeat(indent)));
                used = indent;
            }
            spans.push(Span::styled(label, style));
            spans.push(Span::raw(" "));
            used += len;
        }
        if used > indent {
            self.push(spans);
        }
    }

    /// Finish the page. The last section is padded to at least
    /// `min_last_height` rows so scrolling to the bottom can activate it.
    ///
    pub fn finish(mut self, min_last_height: u32) -> Page {
        if let Some((_, top)) = self.current {
            while self.row() - top < min_last_height {
                self.blank();
            }
        }
        self.close_section();
        let targets = collect_targets(&self.lines);
        Page {
            lines: self.lines,
            sections: self.sections,
            targets,
        }
    }
}

fn collect_targets(lines: &[PageLine]) -> Vec<RevealTarget> {
    let mut targets: Vec<RevealTarget> = vec![];
    for (row, line) in lines.iter().enumerate() {
        let Some(key) = line.reveal else {
            continue;
        };
        let row = row as u32;
        match targets.iter_mut().find(|t| t.key == key) {
            Some(target) => target.height = row + 1 - target.offset_top,
            None => targets.push(RevealTarget {
                key,
                offset_top: row,
                height: 1,
            }),
        }
    }
    targets
}

/// Lay out the whole page for a content area of the given size.
///
pub fn build(state: &State, width: u16, viewport_height: u32) -> Page {
    let mut page = PageBuilder::new(state.get_theme(), state.get_language(), width);
    for id in SectionId::ALL {
        page.begin_section(id);
        match id {
            SectionId::Home => hero::hero(&mut page, state),
            SectionId::About => about::about(&mut page),
            SectionId::Skills => skills::skills(&mut page),
            SectionId::Experience => experience::experience(&mut page),
            SectionId::Projects => projects::projects(&mut page),
            SectionId::Why => why::why(&mut page),
            SectionId::Contact => contact::contact(&mut page, state),
        }
        page.blank();
    }
    page.finish(viewport_height)
}

/// Apply a reveal appearance to a row: colors blend in from the background
/// and the row slides in from the right.
///
pub fn fade(line: &Line<'static>, appearance: Appearance, theme: &Theme) -> Line<'static> {
    if appearance.opacity >= 1.0 && appearance.offset == 0 {
        return line.clone();
    }
    let background = theme.background;
    let mut spans = vec![Span::raw(" ".repeat(appearance.offset as usize))];
    for span in &line.spans {
        let fg = match span.style.fg {
            Some(Color::Rgb(r, g, b)) => {
                let target = crate::ui::ColorSpec { r, g, b };
                background.blend(&target, appearance.opacity)
            }
            _ => background.blend(&theme.text, appearance.opacity),
        };
        let mut style = span.style.fg(fg.to_color());
        if span.style.bg.is_some() {
            let bg = match span.style.bg {
                Some(Color::Rgb(r, g, b)) => {
                    background.blend(&crate::ui::ColorSpec { r, g, b }, appearance.opacity)
                }
                _ => background,
            };
            style = style.bg(bg.to_color());
        }
        spans.push(Span::styled(span.content.clone(), style));
    }
    Line::from(spans)
}

/// Render page widget according to state.
///
pub fn render(frame: &mut Frame, size: Rect, state: &mut State) {
    let now = Instant::now();
    let viewport_height = size.height as u32;
    let Page {
        lines,
        sections,
        targets,
    } = build(state, size.width.saturating_sub(1), viewport_height);
    state.sync_layout(sections, targets, viewport_height, now);

    let theme = state.get_theme();
    let offset = state.get_scroll_offset() as usize;
    let visible: Vec<Line> = lines
        .iter()
        .skip(offset)
        .take(size.height as usize)
        .map(|row| match &row.reveal {
            Some(key) => fade(&row.line, state.appearance(key, now), theme),
            None => row.line.clone(),
        })
        .collect();
    frame.render_widget(
        Paragraph::new(visible).style(styling::page_style(theme)),
        size,
    );

    let max_scroll = state.max_scroll() as usize;
    if max_scroll > 0 {
        let mut scrollbar_state = ScrollbarState::new(max_scroll).position(offset);
        frame.render_stateful_widget(
            Scrollbar::new(ScrollbarOrientation::VerticalRight)
                .style(styling::muted_text_style(theme))
                .begin_symbol(None)
                .end_symbol(None),
            size,
            &mut scrollbar_state,
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sections_are_contiguous_and_ordered() {
        let state = State::default();
        let page = build(&state, 80, 24);
        assert_eq!(page.sections.len(), SectionId::ALL.len());
        let mut expected_top = 0;
        for (bounds, id) in page.sections.iter().zip(SectionId::ALL) {
            assert_eq!(bounds.id, id);
            assert_eq!(bounds.offset_top, expected_top);
            assert!(bounds.height > 0);
            expected_top += bounds.height;
        }
        assert_eq!(expected_top as usize, page.lines.len());
    }

    #[test]
    fn test_last_section_fills_viewport() {
        let state = State::default();
        let page = build(&state, 80, 400);
        let last = page.sections.last().unwrap();
        assert_eq!(last.id, SectionId::Contact);
        assert!(last.height >= 400);
    }

    #[test]
    fn test_layout_is_stable_while_typing() {
        let state = State::default();
        let mut state = state;
        let first = build(&state, 80, 24);
        state.tick(Instant::now() + std::time::Duration::from_secs(5));
        let later = build(&state, 80, 24);
        assert_eq!(first.sections, later.sections);
    }

    #[test]
    fn test_every_section_has_a_header_target() {
        let state = State::default();
        let page = build(&state, 100, 24);
        for id in SectionId::ALL {
            let header = page
                .targets
                .iter()
                .find(|t| t.key == RevealKey::header(id))
                .unwrap_or_else(|| panic!("missing header for {}", id));
            let bounds = page.sections.iter().find(|s| s.id == id).unwrap();
            assert!(bounds.contains(header.offset_top));
        }
    }

    #[test]
    fn test_narrow_page_wraps_instead_of_truncating() {
        let state = State::default();
        let wide = build(&state, 120, 24);
        let narrow = build(&state, 40, 24);
        assert!(narrow.lines.len() > wide.lines.len());
    }

    #[test]
    fn test_fade_blends_from_background() {
        let theme = Theme::default();
        let line = Line::from(vec![Span::styled(
            "x".to_string(),
            Style::default().fg(theme.text.to_color()),
        )]);
        let hidden = fade(&line, Appearance::HIDDEN, &theme);
        assert_eq!(hidden.spans[0].content, " ".repeat(REVEAL_OFFSET_COLUMNS as usize));
        assert_eq!(hidden.spans[1].style.fg, Some(theme.background.to_color()));
        let shown = fade(&line, Appearance::SHOWN, &theme);
        assert_eq!(shown, line);
    }
}
