// SPDX-License-Identifier: MPL-2.0
use criterion::{criterion_group, criterion_main, Criterion};
use iced_toast::test_utils::Harness;
use iced_toast::ui::notifications::{NotificationSpec, Timeline, VisualFrame};
use std::hint::black_box;
use std::time::{Duration, Instant};

fn timeline_benchmark(c: &mut Criterion) {
    let mut group = c.benchmark_group("timeline");

    group.bench_function("visual_frame_sweep", |b| {
        b.iter(|| {
            for step in 0..=100 {
                let _ = black_box(VisualFrame::at(step as f32 / 100.0));
            }
        });
    });

    group.bench_function("timeline_forward_run", |b| {
        let start = Instant::now();
        b.iter(|| {
            let mut timeline = Timeline::new(Duration::from_millis(500));
            timeline.forward(start);
            for frame in 1..=32u64 {
                let _ = black_box(timeline.advance(start + Duration::from_millis(frame * 16)));
            }
        });
    });

    // A full show-to-removal cycle at 60 fps over a synthetic clock.
    group.bench_function("toast_lifecycle", |b| {
        b.iter(|| {
            let mut harness = Harness::default();
            harness.show(NotificationSpec::success("Saved"));
            harness.run_until_idle(Duration::from_secs(10));
            black_box(harness.observations().len())
        });
    });

    group.finish();
}

criterion_group!(benches, timeline_benchmark);
criterion_main!(benches);
