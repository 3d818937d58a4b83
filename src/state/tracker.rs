//! Scroll-synchronised active section tracking.

use crate::content::SectionId;

/// Default divisor applied to the viewport height to place the probe point.
pub const DEFAULT_PROBE_DIVISOR: u32 = 3;

/// Laid-out position of a section on the page, in rows.
///
#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub struct SectionBounds {
    pub id: SectionId,
    pub offset_top: u32,
    pub height: u32,
}

impl SectionBounds {
    pub fn new(id: SectionId, offset_top: u32, height: u32) -> Self {
        SectionBounds {
            id,
            offset_top,
            height,
        }
    }

    /// Return true if the row lies in `[offset_top, offset_top + height)`.
    ///
    pub fn contains(&self, row: u32) -> bool {
        row >= self.offset_top && row < self.offset_top.saturating_add(self.height)
    }
}

/// Derives the single active section from the scroll offset.
///
/// The active id always names exactly one section. When the probe point falls
/// outside every section the previous id is kept.
///
#[derive(Debug, Clone)]
pub struct VisibilityTracker {
    active: SectionId,
    probe_divisor: u32,
    has_run: bool,
}

impl Default for VisibilityTracker {
    fn default() -> Self {
        VisibilityTracker::new(DEFAULT_PROBE_DIVISOR)
    }
}

impl VisibilityTracker {
    pub fn new(probe_divisor: u32) -> Self {
        VisibilityTracker {
            active: SectionId::Home,
            probe_divisor: probe_divisor.max(1),
            has_run: false,
        }
    }

    /// Return the row used to decide which section is in focus.
    ///
    pub fn probe_point(&self, scroll_offset: u32, viewport_height: u32) -> u32 {
        scroll_offset.saturating_add(viewport_height / self.probe_divisor)
    }

    /// Recompute the active section for the given scroll position. Sections
    /// are checked in the order given and the first match wins.
    ///
    pub fn update(
        &mut self,
        scroll_offset: u32,
        viewport_height: u32,
        sections: &[SectionBounds],
    ) -> SectionId {
        let probe = self.probe_point(scroll_offset, viewport_height);
        if let Some(section) = sections.iter().find(|s| s.contains(probe)) {
            self.active = section.id;
        }
        self.has_run = true;
        self.active
    }

    pub fn active(&self) -> SectionId {
        self.active
    }

    /// Return the active section, or none before the first update.
    ///
    pub fn current(&self) -> Option<SectionId> {
        self.has_run.then_some(self.active)
    }

    pub fn probe_divisor(&self) -> u32 {
        self.probe_divisor
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Lay out every section back to back with the given heights.
    fn contiguous(heights: &[u32]) -> Vec<SectionBounds> {
        let mut offset = 0;
        SectionId::ALL
            .iter()
            .zip(heights)
            .map(|(id, height)| {
                let bounds = SectionBounds::new(*id, offset, *height);
                offset += height;
                bounds
            })
            .collect()
    }

    #[test]
    fn test_defaults_to_home_before_first_run() {
        let tracker = VisibilityTracker::default();
        assert_eq!(tracker.active(), SectionId::Home);
        assert_eq!(tracker.current(), None);
    }

    #[test]
    fn test_projects_midpoint_scenario() {
        let sections = vec![
            SectionBounds::new(SectionId::Experience, 2800, 1200),
            SectionBounds::new(SectionId::Projects, 4000, 1200),
            SectionBounds::new(SectionId::Why, 5200, 900),
        ];
        let mut tracker = VisibilityTracker::default();
        assert_eq!(tracker.probe_point(4000, 900), 4300);
        assert_eq!(tracker.update(4000, 900, &sections), SectionId::Projects);
        assert_eq!(tracker.current(), Some(SectionId::Projects));
    }

    #[test]
    fn test_probe_above_first_section_keeps_previous() {
        let sections = vec![
            SectionBounds::new(SectionId::Home, 100, 50),
            SectionBounds::new(SectionId::About, 150, 50),
        ];
        let mut tracker = VisibilityTracker::default();
        assert_eq!(tracker.update(160, 30, &sections), SectionId::About);
        assert_eq!(tracker.update(0, 30, &sections), SectionId::About);
    }

    #[test]
    fn test_first_match_wins_on_overlap() {
        let sections = vec![
            SectionBounds::new(SectionId::Skills, 0, 100),
            SectionBounds::new(SectionId::Experience, 50, 100),
        ];
        let mut tracker = VisibilityTracker::default();
        assert_eq!(tracker.update(60, 0, &sections), SectionId::Skills);
    }

    #[test]
    fn test_section_end_is_exclusive() {
        let sections = contiguous(&[10, 10, 10, 10, 10, 10, 10]);
        let mut tracker = VisibilityTracker::new(1);
        assert_eq!(tracker.update(10, 0, &sections), SectionId::About);
        assert_eq!(tracker.update(9, 0, &sections), SectionId::Home);
    }

    #[test]
    fn test_exactly_one_active_for_all_offsets() {
        let sections = contiguous(&[40, 35, 60, 45, 70, 30, 50]);
        let page_height: u32 = sections.iter().map(|s| s.height).sum();
        let mut tracker = VisibilityTracker::default();
        for offset in 0..page_height + 20 {
            let active = tracker.update(offset, 24, &sections);
            assert!(SectionId::ALL.contains(&active));
            assert_eq!(tracker.current(), Some(active));
        }
    }

    #[test]
    fn test_monotonic_scroll_visits_sections_in_order() {
        let sections = contiguous(&[40, 35, 60, 45, 70, 30, 50]);
        let page_height: u32 = sections.iter().map(|s| s.height).sum();
        let mut tracker = VisibilityTracker::default();
        let mut visited: Vec<SectionId> = Vec::new();
        for offset in 0..page_height {
            let active = tracker.update(offset, 24, &sections);
            if visited.last() != Some(&active) {
                visited.push(active);
            }
        }
        assert_eq!(visited, SectionId::ALL.to_vec());
    }

    #[test]
    fn test_configurable_divisor() {
        let tracker = VisibilityTracker::new(2);
        assert_eq!(tracker.probe_point(100, 40), 120);
        let tracker = VisibilityTracker::new(0);
        assert_eq!(tracker.probe_divisor(), 1);
    }
}
