use criterion::{Criterion, black_box, criterion_group, criterion_main};
use fractalscope::{FractalKind, RenderRequest, TargetFunction, render_frame};

fn bench_escape_time(c: &mut Criterion) {
    let request = RenderRequest::new(FractalKind::Mandelbrot, 256, 256);

    c.bench_function("mandelbrot_256x256_cap100", |b| {
        b.iter(|| render_frame(black_box(&request)))
    });
}

fn bench_root_finding(c: &mut Criterion) {
    let request = RenderRequest::new(
        FractalKind::Newton {
            target: TargetFunction::CubeRootsOfUnity,
        },
        256,
        256,
    );

    c.bench_function("newton_256x256_cap100", |b| {
        b.iter(|| render_frame(black_box(&request)))
    });
}

fn bench_attractor(c: &mut Criterion) {
    let request = RenderRequest::new(FractalKind::BarnsleyFern, 256, 256);

    c.bench_function("barnsley_256x256_cap10k", |b| {
        b.iter(|| render_frame(black_box(&request)))
    });
}

criterion_group!(
    benches,
    bench_escape_time,
    bench_root_finding,
    bench_attractor
);
criterion_main!(benches);
