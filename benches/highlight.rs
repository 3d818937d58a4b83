//! Benchmarks for hero code highlighting.
//!
//! The code window is re-highlighted on every frame while it types out.

use criterion::{black_box, criterion_group, criterion_main, Criterion};
use portfolio_tui::content::{hero_code, Language};
use portfolio_tui::utils::highlight::Highlighter;
use portfolio_tui::utils::text::wrap;

fn bench_highlighter_compile(c: &mut Criterion) {
    c.bench_function("highlighter_compile", |b| b.iter(|| black_box(Highlighter::new())));
}

fn bench_tokenize_hero_code(c: &mut Criterion) {
    let highlighter = Highlighter::new().unwrap();
    let code = hero_code(Language::En);
    c.bench_function("tokenize_hero_code", |b| {
        b.iter(|| {
            for line in black_box(&code).lines() {
                black_box(highlighter.tokenize(line));
            }
        })
    });
}

fn bench_wrap_prose(c: &mut Criterion) {
    let text = "Computer Science student at the University of Łódź and aspiring Full-Stack Developer focused on building practical software.";
    c.bench_function("wrap_prose_40_columns", |b| {
        b.iter(|| wrap(black_box(text), 40))
    });
}

criterion_group!(
    benches,
    bench_highlighter_compile,
    bench_tokenize_hero_code,
    bench_wrap_prose
);
criterion_main!(benches);
