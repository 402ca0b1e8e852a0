use canny_edge::edges::{smooth, track_sweep, track_worklist, BorderMode, HysteresisStrategy};
use canny_edge::{CannyDetector, CannyParams, SampleGrid};
use criterion::{black_box, criterion_group, criterion_main, Criterion};

fn textured_grid(width: usize, height: usize) -> SampleGrid {
    let mut data = Vec::with_capacity(width * height);
    for y in 0..height {
        for x in 0..width {
            let block = ((x / 16) + (y / 16)) % 2;
            let noise = ((x * 31 + y * 17) % 23) as f32;
            data.push(if block == 0 { 40.0 } else { 200.0 } + noise);
        }
    }
    SampleGrid::from_vec(width, height, data).expect("valid grid")
}

fn bench_smooth(c: &mut Criterion) {
    let grid = textured_grid(1280, 1024);
    c.bench_function("smooth_sigma1.4_1280x1024", |b| {
        b.iter(|| {
            let out = smooth(black_box(&grid), 1.4, BorderMode::Zero);
            black_box(out);
        });
    });
}

fn bench_detect(c: &mut Criterion) {
    let grid = textured_grid(1280, 1024);
    let detector = CannyDetector::new(CannyParams::new(1.0, 31.0, 91.0));
    c.bench_function("canny_detect_1280x1024", |b| {
        b.iter(|| {
            let mask = detector.detect(black_box(&grid)).expect("valid parameters");
            black_box(mask);
        });
    });
}

fn bench_hysteresis(c: &mut Criterion) {
    let grid = textured_grid(1280, 1024);
    let params = CannyParams::new(1.0, 20.0, 120.0).with_hysteresis(HysteresisStrategy::Worklist);
    let out = CannyDetector::new(params).run(&grid).expect("valid parameters");

    c.bench_function("hysteresis_worklist_1280x1024", |b| {
        b.iter(|| black_box(track_worklist(black_box(&out.classes))));
    });
    c.bench_function("hysteresis_sweep_1280x1024", |b| {
        b.iter(|| black_box(track_sweep(black_box(&out.classes))));
    });
}

criterion_group!(benches, bench_smooth, bench_detect, bench_hysteresis);
criterion_main!(benches);
