use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use digilets_pipeline::{augment, resample, scan_blob, BlobProcessor, PreprocessConfig};

fn build_blob(trajectories: usize, points: usize) -> String {
    let mut lines = Vec::with_capacity(trajectories);
    for t in 0..trajectories {
        let mut tokens = Vec::with_capacity(points);
        for p in 0..points {
            let x = (t + p) as f32 * 0.25;
            let y = (p as f32 * 0.5).sin();
            tokens.push(format!("{} {} 0.5 1 {}", x, y, p));
        }
        lines.push(tokens.join(" "));
    }
    lines.join("\n")
}

fn bench_process_blob(c: &mut Criterion) {
    let mut group = c.benchmark_group("preprocess_blob");
    let processor = BlobProcessor::new(PreprocessConfig::default()).unwrap();

    // 310 trajectories is one full participant file (62 symbols x 5)
    for &n in &[10usize, 50usize, 310usize] {
        let blob = build_blob(n, 40);
        group.throughput(Throughput::Elements(n as u64));
        group.bench_with_input(BenchmarkId::new("trajectories", n), &blob, |b, blob| {
            b.iter(|| processor.process_blob(blob));
        });
    }

    group.finish();
}

fn bench_augment_resample(c: &mut Criterion) {
    let mut group = c.benchmark_group("augment_resample");

    for &len in &[25usize, 100usize, 250usize] {
        let blob = build_blob(1, len);
        let raw = scan_blob(&blob).trajectories.remove(0);
        group.throughput(Throughput::Elements(len as u64));
        group.bench_with_input(BenchmarkId::new("points", len), &raw, |b, raw| {
            b.iter(|| resample(&augment(raw), 100));
        });
    }

    group.finish();
}

criterion_group!(benches, bench_process_blob, bench_augment_resample);
criterion_main!(benches);
