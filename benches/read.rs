use criterion::{black_box, BenchmarkId, Criterion};
use criterion::{criterion_group, criterion_main};

use tschunk::{ChunkOps, Direction, Sample, UncompressedChunk};

fn full_chunk(capacity: usize) -> UncompressedChunk {
    let mut chunk = UncompressedChunk::new(capacity).expect("chunk");
    for ts in 0..capacity as u64 {
        let _ = chunk.append(Sample::new(ts, ts as f64));
    }
    chunk
}

fn bench_read(c: &mut Criterion) {
    let mut group = c.benchmark_group("read");
    for &capacity in &[360_usize, 4096] {
        let chunk = full_chunk(capacity);
        for direction in [Direction::Forward, Direction::Reverse] {
            let id = format!("{direction:?}/{capacity}");
            group.bench_with_input(BenchmarkId::from_parameter(id), &chunk, |b, chunk| {
                b.iter(|| {
                    let mut sum = 0.0_f64;
                    for sample in chunk.iter(direction) {
                        sum += black_box(sample.value);
                    }
                    sum
                });
            });
        }
    }
    group.finish();
}

criterion_group!(benches, bench_read);
criterion_main!(benches);
