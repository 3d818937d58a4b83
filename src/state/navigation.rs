//! Navigation-related state types.
//!
//! This module contains the focus type, the navigation rail and the smooth
//! scroll animation issued when a rail control is activated.

use crate::content::{Language, SectionId};
use crate::state::tracker::{SectionBounds, VisibilityTracker};
use log::*;
use std::time::{Duration, Instant};

/// Duration of a scroll-to-section animation.
pub const SMOOTH_SCROLL_DURATION: Duration = Duration::from_millis(450);

/// Specifying the contact form fields.
///
#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub enum FormField {
    Name,
    Email,
    Message,
}

impl FormField {
    pub fn next(self) -> FormField {
        match self {
            FormField::Name => FormField::Email,
            FormField::Email => FormField::Message,
            FormField::Message => FormField::Name,
        }
    }

    pub fn prev(self) -> FormField {
        match self {
            FormField::Name => FormField::Message,
            FormField::Email => FormField::Name,
            FormField::Message => FormField::Email,
        }
    }
}

/// Specifying where keyboard input goes.
///
#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub enum Focus {
    Page,
    Form(FormField),
}

/// One control of the navigation rail.
///
#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub struct NavControl {
    pub id: SectionId,
    pub label: &'static str,
    pub active: bool,
    pub selected: bool,
}

/// Instruction to move the viewport so that a row aligns with its top.
///
#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub struct ScrollCommand {
    pub target: SectionId,
    pub offset: u32,
}

/// In-flight smooth scroll between two offsets.
///
#[derive(Debug, Clone, Copy)]
pub struct SmoothScroll {
    from: u32,
    to: u32,
    started: Instant,
    duration: Duration,
}

impl SmoothScroll {
    pub fn new(from: u32, to: u32, started: Instant, duration: Duration) -> Self {
        SmoothScroll {
            from,
            to,
            started,
            duration,
        }
    }

    /// Return the offset at `now` using an ease-out cubic curve.
    ///
    pub fn offset_at(&self, now: Instant) -> u32 {
        let t = if self.duration.is_zero() {
            1.0
        } else {
            (now.saturating_duration_since(self.started).as_secs_f64()
                / self.duration.as_secs_f64())
            .min(1.0)
        };
        let eased = 1.0 - (1.0 - t).powi(3);
        let from = self.from as f64;
        let to = self.to as f64;
        (from + (to - from) * eased).round() as u32
    }

    pub fn is_finished(&self, now: Instant) -> bool {
        now.saturating_duration_since(self.started) >= self.duration
    }

    pub fn target(&self) -> u32 {
        self.to
    }
}

/// Persistent navigation affordance: one control per section, keyboard cursor
/// and scroll-to-section commands. The active control mirrors the tracker and
/// is never written here.
///
#[derive(Debug, Default, Clone)]
pub struct NavigationIndicator {
    cursor: usize,
}

impl NavigationIndicator {
    /// Return the controls in declared order with the active one marked.
    ///
    pub fn controls(&self, tracker: &VisibilityTracker, language: Language) -> Vec<NavControl> {
        let active = tracker.current();
        SectionId::ALL
            .iter()
            .enumerate()
            .map(|(i, id)| NavControl {
                id: *id,
                label: id.label(language),
                active: active == Some(*id),
                selected: i == self.cursor,
            })
            .collect()
    }

    pub fn cursor(&self) -> SectionId {
        SectionId::from_index(self.cursor).unwrap_or(SectionId::Home)
    }

    pub fn next(&mut self) {
        self.cursor = (self.cursor + 1) % SectionId::ALL.len();
    }

    pub fn prev(&mut self) {
        self.cursor = (self.cursor + SectionId::ALL.len() - 1) % SectionId::ALL.len();
    }

    /// Build the command that brings `target` to the top of the viewport, or
    /// none if the section has not been laid out.
    ///
    pub fn scroll_to(
        &mut self,
        target: SectionId,
        sections: &[SectionBounds],
        max_offset: u32,
    ) -> Option<ScrollCommand> {
        self.cursor = target.index();
        let Some(bounds) = sections.iter().find(|s| s.id == target) else {
            debug!("Skipping scroll to unknown section '{}'.", target);
            return None;
        };
        Some(ScrollCommand {
            target,
            offset: bounds.offset_top.min(max_offset),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sections() -> Vec<SectionBounds> {
        vec![
            SectionBounds::new(SectionId::Home, 0, 30),
            SectionBounds::new(SectionId::About, 30, 40),
            SectionBounds::new(SectionId::Contact, 70, 20),
        ]
    }

    #[test]
    fn test_no_active_control_before_tracker_runs() {
        let nav = NavigationIndicator::default();
        let tracker = VisibilityTracker::default();
        let controls = nav.controls(&tracker, Language::En);
        assert_eq!(controls.len(), 7);
        assert!(controls.iter().all(|c| !c.active));
    }

    #[test]
    fn test_exactly_one_active_control() {
        let nav = NavigationIndicator::default();
        let mut tracker = VisibilityTracker::default();
        tracker.update(35, 9, &sections());
        let controls = nav.controls(&tracker, Language::Pl);
        let active: Vec<_> = controls.iter().filter(|c| c.active).collect();
        assert_eq!(active.len(), 1);
        assert_eq!(active[0].id, SectionId::About);
        assert_eq!(active[0].label, "o mnie");
    }

    #[test]
    fn test_scroll_to_aligns_section_top() {
        let mut nav = NavigationIndicator::default();
        let command = nav.scroll_to(SectionId::About, &sections(), 1000);
        assert_eq!(
            command,
            Some(ScrollCommand {
                target: SectionId::About,
                offset: 30
            })
        );
        assert_eq!(nav.cursor(), SectionId::About);
    }

    #[test]
    fn test_scroll_to_clamps_to_page_end() {
        let mut nav = NavigationIndicator::default();
        let command = nav.scroll_to(SectionId::Contact, &sections(), 60);
        assert_eq!(command.map(|c| c.offset), Some(60));
    }

    #[test]
    fn test_scroll_to_missing_section_is_noop() {
        let mut nav = NavigationIndicator::default();
        assert_eq!(nav.scroll_to(SectionId::Projects, &sections(), 1000), None);
    }

    #[test]
    fn test_cursor_wraps() {
        let mut nav = NavigationIndicator::default();
        nav.prev();
        assert_eq!(nav.cursor(), SectionId::Contact);
        nav.next();
        assert_eq!(nav.cursor(), SectionId::Home);
    }

    #[test]
    fn test_smooth_scroll_reaches_target() {
        let now = Instant::now();
        let scroll = SmoothScroll::new(0, 100, now, SMOOTH_SCROLL_DURATION);
        assert_eq!(scroll.offset_at(now), 0);
        let midway = scroll.offset_at(now + SMOOTH_SCROLL_DURATION / 2);
        assert!(midway > 50 && midway < 100);
        assert_eq!(scroll.offset_at(now + SMOOTH_SCROLL_DURATION), 100);
        assert!(scroll.is_finished(now + SMOOTH_SCROLL_DURATION));
    }

    #[test]
    fn test_smooth_scroll_upwards() {
        let now = Instant::now();
        let scroll = SmoothScroll::new(80, 20, now, SMOOTH_SCROLL_DURATION);
        assert_eq!(scroll.offset_at(now + Duration::from_secs(1)), 20);
        assert_eq!(scroll.target(), 20);
    }

    #[test]
    fn test_form_field_cycle() {
        assert_eq!(FormField::Name.next(), FormField::Email);
        assert_eq!(FormField::Message.next(), FormField::Name);
        assert_eq!(FormField::Name.prev(), FormField::Message);
    }
}
