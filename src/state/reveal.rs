//! One-shot staged reveal animations.
//!
//! Every section header and every list item owns its own animator. An
//! animator starts hidden, flips to revealed the first time its rows
//! intersect the viewport by at least its threshold, and never goes back.

use crate::content::SectionId;
use std::collections::HashMap;
use std::time::{Duration, Instant};

/// Default transition length once an animator has been triggered.
pub const DEFAULT_REVEAL_DURATION: Duration = Duration::from_millis(600);

/// Columns a hidden target is shifted right by before sliding into place.
pub const REVEAL_OFFSET_COLUMNS: u16 = 4;

/// Return the stagger delay of the item at `index`.
///
pub fn stagger_delay(index: usize, step: Duration) -> Duration {
    step * index as u32
}

/// Return the per-item stagger step used by a section's list.
///
pub fn stagger_step(section: SectionId) -> Duration {
    match section {
        SectionId::Home => Duration::from_millis(80),
        SectionId::About => Duration::from_millis(100),
        SectionId::Skills => Duration::from_millis(80),
        SectionId::Experience => Duration::from_millis(120),
        SectionId::Projects => Duration::from_millis(80),
        SectionId::Why => Duration::from_millis(100),
        SectionId::Contact => Duration::ZERO,
    }
}

/// Return the visible fraction a section's targets need before revealing.
///
pub fn reveal_threshold(section: SectionId) -> f32 {
    match section {
        SectionId::Skills => 0.35,
        _ => 0.0,
    }
}

/// Return the fraction of `[top, top + height)` covered by the viewport.
///
pub fn intersection_ratio(top: u32, height: u32, view_top: u32, view_height: u32) -> f32 {
    if height == 0 {
        return 0.0;
    }
    let start = top.max(view_top);
    let end = (top + height).min(view_top + view_height);
    if end <= start {
        return 0.0;
    }
    (end - start) as f32 / height as f32
}

/// Identifies a reveal target: a section header or one item of its list.
///
#[derive(Debug, PartialEq, Eq, Hash, Clone, Copy)]
pub struct RevealKey {
    pub section: SectionId,
    pub item: Option<usize>,
}

impl RevealKey {
    pub fn header(section: SectionId) -> Self {
        RevealKey {
            section,
            item: None,
        }
    }

    pub fn item(section: SectionId, index: usize) -> Self {
        RevealKey {
            section,
            item: Some(index),
        }
    }

    fn delay(&self) -> Duration {
        match self.item {
            Some(index) => stagger_delay(index, stagger_step(self.section)),
            None => Duration::ZERO,
        }
    }
}

/// Laid-out rows of a reveal target.
///
#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub struct RevealTarget {
    pub key: RevealKey,
    pub offset_top: u32,
    pub height: u32,
}

#[derive(Debug, PartialEq, Eq, Clone, Copy)]
enum Phase {
    Hidden,
    Revealed { at: Instant },
}

/// Visual state of a target at an instant.
///
#[derive(Debug, PartialEq, Clone, Copy)]
pub struct Appearance {
    /// 0.0 is invisible, 1.0 is fully drawn.
    pub opacity: f32,
    /// Columns still to slide left.
    pub offset: u16,
}

impl Appearance {
    pub const HIDDEN: Appearance = Appearance {
        opacity: 0.0,
        offset: REVEAL_OFFSET_COLUMNS,
    };
    pub const SHOWN: Appearance = Appearance {
        opacity: 1.0,
        offset: 0,
    };
}

/// Hidden → Revealed animator for a single target.
///
#[derive(Debug, Clone)]
pub struct RevealAnimator {
    phase: Phase,
    threshold: f32,
    delay: Duration,
    duration: Duration,
}

impl RevealAnimator {
    pub fn new(threshold: f32, delay: Duration, duration: Duration) -> Self {
        RevealAnimator {
            phase: Phase::Hidden,
            threshold: threshold.clamp(0.0, 1.0),
            delay,
            duration,
        }
    }

    /// Feed the currently visible fraction. Returns true if this call
    /// triggered the reveal.
    ///
    pub fn observe(&mut self, visible_ratio: f32, now: Instant) -> bool {
        if self.is_revealed() {
            return false;
        }
        let triggered = if self.threshold <= 0.0 {
            visible_ratio > 0.0
        } else {
            visible_ratio >= self.threshold
        };
        if triggered {
            self.phase = Phase::Revealed { at: now };
        }
        triggered
    }

    pub fn is_revealed(&self) -> bool {
        matches!(self.phase, Phase::Revealed { .. })
    }

    /// Return the interpolated appearance at `now`.
    ///
    pub fn appearance(&self, now: Instant) -> Appearance {
        let Phase::Revealed { at } = self.phase else {
            return Appearance::HIDDEN;
        };
        let start = at + self.delay;
        if now < start {
            return Appearance::HIDDEN;
        }
        if self.duration.is_zero() {
            return Appearance::SHOWN;
        }
        let t = (now.duration_since(start).as_secs_f32() / self.duration.as_secs_f32()).min(1.0);
        let eased = 1.0 - (1.0 - t) * (1.0 - t);
        Appearance {
            opacity: eased,
            offset: ((1.0 - eased) * REVEAL_OFFSET_COLUMNS as f32).round() as u16,
        }
    }

    /// Return true while the transition still changes the drawn frame.
    ///
    pub fn is_animating(&self, now: Instant) -> bool {
        match self.phase {
            Phase::Hidden => false,
            Phase::Revealed { at } => now < at + self.delay + self.duration,
        }
    }
}

/// Animators for every mounted reveal target, created on first sight.
///
#[derive(Debug, Clone)]
pub struct RevealRegistry {
    animators: HashMap<RevealKey, RevealAnimator>,
    duration: Duration,
}

impl Default for RevealRegistry {
    fn default() -> Self {
        RevealRegistry::new(DEFAULT_REVEAL_DURATION)
    }
}

impl RevealRegistry {
    pub fn new(duration: Duration) -> Self {
        RevealRegistry {
            animators: HashMap::new(),
            duration,
        }
    }

    /// Observe every target against the viewport. Returns the number of
    /// targets revealed by this call.
    ///
    pub fn observe(
        &mut self,
        targets: &[RevealTarget],
        view_top: u32,
        view_height: u32,
        now: Instant,
    ) -> usize {
        let duration = self.duration;
        targets
            .iter()
            .filter(|target| {
                let animator = self.animators.entry(target.key).or_insert_with(|| {
                    RevealAnimator::new(
                        reveal_threshold(target.key.section),
                        target.key.delay(),
                        duration,
                    )
                });
                let ratio =
                    intersection_ratio(target.offset_top, target.height, view_top, view_height);
                animator.observe(ratio, now)
            })
            .count()
    }

    pub fn appearance(&self, key: &RevealKey, now: Instant) -> Appearance {
        self.animators
            .get(key)
            .map(|a| a.appearance(now))
            .unwrap_or(Appearance::HIDDEN)
    }

    pub fn is_revealed(&self, key: &RevealKey) -> bool {
        self.animators.get(key).is_some_and(|a| a.is_revealed())
    }

    pub fn is_animating(&self, now: Instant) -> bool {
        self.animators.values().any(|a| a.is_animating(now))
    }
}
