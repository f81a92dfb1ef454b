//! Reveal tick and layout benchmarks.
//!
//! A host calls `update` once per frame, so a tick has to stay far below a
//! frame budget even for long texts with many subscribers.
//!
//! Run with: cargo bench --bench tick_benchmark

#![allow(missing_docs)] // criterion macros generate undocumented items

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use typewriter::config::TypewriterSettings;
use typewriter::layout::Typewriter;
use typewriter::model::PanelMetrics;
use typewriter::reveal::{NoHook, RevealEngine};

fn sample_text(paragraphs: usize) -> String {
    (0..paragraphs)
        .map(|i| {
            format!(
                "Paragraph {i}: the quick brown fox jumps over the lazy dog while \
                 the typewriter keeps pace, one glyph at a time."
            )
        })
        .collect::<Vec<_>>()
        .join("\n")
}

/// Raw engine tick, restarted whenever the panel fills up.
fn benchmark_engine_tick(c: &mut Criterion) {
    let mut engine = RevealEngine::new(PanelMetrics::new(1920.0, 1080.0, 40.0, 1000.0));
    engine.start(true).expect("valid panel");

    c.bench_function("engine_tick", |b| {
        b.iter(|| {
            if engine.is_complete() {
                engine.start(true).expect("valid panel");
            }
            black_box(engine.tick(black_box(1.0 / 60.0), &mut NoHook))
        })
    });
}

/// Coordinator tick including the last-line check.
fn benchmark_typewriter_update(c: &mut Criterion) {
    let mut group = c.benchmark_group("typewriter_update");

    for paragraphs in [10, 100, 1_000] {
        let mut typewriter =
            Typewriter::from_settings(&TypewriterSettings::terminal(40.0), 80.0, 24.0);
        typewriter.text_mut().set_content(sample_text(paragraphs));
        typewriter.commit_config();
        typewriter.start(true).expect("valid settings");

        group.bench_with_input(
            BenchmarkId::from_parameter(paragraphs),
            &paragraphs,
            |b, _| {
                b.iter(|| {
                    if typewriter.engine().is_complete() {
                        typewriter.start(true).expect("valid settings");
                    }
                    black_box(typewriter.update(black_box(1.0 / 60.0)))
                })
            },
        );
    }

    group.finish();
}

/// Re-wrapping the whole text, as happens on every terminal resize.
fn benchmark_commit_config(c: &mut Criterion) {
    let mut group = c.benchmark_group("commit_config");

    for paragraphs in [10, 100, 1_000] {
        let mut typewriter =
            Typewriter::from_settings(&TypewriterSettings::terminal(40.0), 80.0, 24.0);
        typewriter.text_mut().set_content(sample_text(paragraphs));

        group.bench_with_input(
            BenchmarkId::from_parameter(paragraphs),
            &paragraphs,
            |b, _| b.iter(|| typewriter.commit_config()),
        );
    }

    group.finish();
}

criterion_group!(
    benches,
    benchmark_engine_tick,
    benchmark_typewriter_update,
    benchmark_commit_config
);
criterion_main!(benches);
