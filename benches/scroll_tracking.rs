//! Benchmarks for per-frame scroll tracking.
//!
//! Tracking and reveal observation run on every frame, so they are measured
//! over a page laid out the way the renderer lays it out.

use criterion::{black_box, criterion_group, criterion_main, Criterion};
use portfolio_tui::content::SectionId;
use portfolio_tui::state::{RevealKey, RevealRegistry, RevealTarget, SectionBounds, VisibilityTracker};
use std::time::Instant;

fn sections() -> Vec<SectionBounds> {
    SectionId::ALL
        .iter()
        .enumerate()
        .map(|(i, id)| SectionBounds::new(*id, i as u32 * 60, 60))
        .collect()
}

fn targets() -> Vec<RevealTarget> {
    let mut targets = vec![];
    for (i, id) in SectionId::ALL.iter().enumerate() {
        let top = i as u32 * 60;
        targets.push(RevealTarget {
            key: RevealKey::header(*id),
            offset_top: top,
            height: 2,
        });
        for item in 0..6 {
            targets.push(RevealTarget {
                key: RevealKey::item(*id, item),
                offset_top: top + 4 + item as u32 * 9,
                height: 8,
            });
        }
    }
    targets
}

fn bench_tracker_update(c: &mut Criterion) {
    let sections = sections();
    let mut tracker = VisibilityTracker::default();
    c.bench_function("tracker_update_full_scroll", |b| {
        b.iter(|| {
            for scroll in (0..400).step_by(3) {
                black_box(tracker.update(black_box(scroll), 40, &sections));
            }
        })
    });
}

fn bench_reveal_observe(c: &mut Criterion) {
    let targets = targets();
    let now = Instant::now();
    c.bench_function("reveal_observe_full_scroll", |b| {
        b.iter(|| {
            let mut registry = RevealRegistry::default();
            for scroll in (0..400).step_by(3) {
                black_box(registry.observe(&targets, black_box(scroll), 40, now));
            }
        })
    });
}

criterion_group!(benches, bench_tracker_update, bench_reveal_observe);
criterion_main!(benches);
