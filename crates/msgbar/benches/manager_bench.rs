//! Benchmarks for the presentation queue.
//!
//! Run with: cargo bench -p msgbar

use std::hint::black_box;
use std::time::Duration;

use criterion::{BenchmarkId, Criterion, criterion_group, criterion_main};
use msgbar::{HeadlessSurface, Message, MessageBarManager};

const TICK: Duration = Duration::from_millis(16);

fn manager(bounce: bool) -> MessageBarManager {
    let surface = HeadlessSurface::new(320.0);
    MessageBarManager::new(move || Box::new(surface.clone())).bounce(bounce)
}

fn drain(manager: &mut MessageBarManager) {
    while manager.is_message_visible() || manager.queued_len() > 0 {
        manager.tick(TICK);
    }
}

// ============================================================================
// Steady-state tick
// ============================================================================

fn bench_tick_visible(c: &mut Criterion) {
    let mut group = c.benchmark_group("manager/tick");

    for bounce in [false, true] {
        let mut manager = manager(bounce);
        manager.show(Message::info("Title", "Body text that wraps a little.").duration(Duration::from_secs(3600)));
        // Settle into the visible phase so the bench measures steady state.
        for _ in 0..100 {
            manager.tick(TICK);
        }

        let name = if bounce { "bounce" } else { "slide" };
        group.bench_with_input(BenchmarkId::new("visible", name), &(), |b, _| {
            b.iter(|| {
                manager.tick(black_box(TICK));
                black_box(manager.is_message_visible());
            })
        });
    }
    group.finish();
}

// ============================================================================
// Full present/dismiss cycles
// ============================================================================

fn bench_full_cycle(c: &mut Criterion) {
    let mut group = c.benchmark_group("manager/cycle");

    for count in [1usize, 8, 64] {
        group.bench_with_input(BenchmarkId::new("drain", count), &count, |b, &count| {
            b.iter(|| {
                let mut manager = manager(false);
                for i in 0..count {
                    manager.show(
                        Message::success(format!("message {i}"), "done")
                            .duration(Duration::from_millis(50)),
                    );
                }
                drain(&mut manager);
                black_box(manager.queued_len());
            })
        });
    }
    group.finish();
}

// ============================================================================
// hide_all on a deep queue
// ============================================================================

fn bench_hide_all(c: &mut Criterion) {
    let mut group = c.benchmark_group("manager/hide_all");

    group.bench_function("deep_queue", |b| {
        b.iter(|| {
            let mut manager = manager(false);
            for i in 0..256 {
                manager.show(Message::error(format!("e{i}"), "details"));
            }
            manager.hide_all(false);
            black_box(manager.is_message_visible());
        })
    });
    group.finish();
}

criterion_group!(benches, bench_tick_visible, bench_full_cycle, bench_hide_all);
criterion_main!(benches);
