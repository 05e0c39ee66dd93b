use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use ratatui::buffer::Buffer;
use ratatui::crossterm::event::KeyCode;
use ratatui::layout::Rect;
use splitpane::layout::plan_split;
use splitpane::render::render;
use splitpane::{painter, InputEvent, Region, SplitAxis, SplitSpec};

fn screen() -> Rect {
    Rect {
        x: 0,
        y: 0,
        width: 240,
        height: 80,
    }
}

fn build_tree(region: &mut Region, depth: u32, axis: SplitAxis) {
    if depth == 0 {
        region
            .set_painter(painter(|pane, event| {
                let label = format!("{:?} {}", event.code(), pane.area());
                for row in 0..pane.height() {
                    pane.write(row, 0, &label);
                }
                Ok(())
            }))
            .expect("leaf accepts a painter");
        return;
    }
    let next = match axis {
        SplitAxis::Stacked => SplitAxis::SideBySide,
        SplitAxis::SideBySide => SplitAxis::Stacked,
    };
    let (first, second) = region
        .split(SplitSpec::new(axis))
        .expect("halving split never fails");
    build_tree(first, depth - 1, next);
    build_tree(second, depth - 1, next);
}

fn bench_render_depth(c: &mut Criterion) {
    let mut group = c.benchmark_group("render_tree");
    group.sample_size(50);

    for depth in [0u32, 2, 4, 6, 8] {
        let mut root = Region::new(screen());
        build_tree(&mut root, depth, SplitAxis::SideBySide);
        let mut buffer = Buffer::empty(screen());
        let event = InputEvent::key(KeyCode::Char('j'));

        group.bench_with_input(
            BenchmarkId::new("leaves", 1u32 << depth),
            &depth,
            |b, _| {
                b.iter(|| black_box(render(&mut root, &mut buffer, black_box(&event))));
            },
        );
    }

    group.finish();
}

fn bench_plan_split(c: &mut Criterion) {
    c.bench_function("plan_split_halving", |b| {
        b.iter(|| {
            black_box(plan_split(
                black_box(screen()),
                SplitAxis::Stacked,
                black_box(None),
            ))
        });
    });
}

criterion_group!(benches, bench_render_depth, bench_plan_split);
criterion_main!(benches);
