//! Rendering throughput benchmarks.

use criterion::{black_box, criterion_group, criterion_main, Criterion, Throughput};

use mathtext_parser::Segmenter;
use mathtext_render::Renderer;

const PARAGRAPH: &str = "The velocity after time $t$ is $v = u + at$, so for \
$u = 0$ and $a = 9.8$ m/s² we get\n$$v = 9.8 \\times 4 = 39.2 \\text{ m/s}$$\n\
A ticket costs $100$ and a book costs \\$45 <cheap>.\n";

fn document(paragraphs: usize) -> String {
    PARAGRAPH.repeat(paragraphs)
}

fn bench_segment(c: &mut Criterion) {
    let input = document(100);
    let segmenter = Segmenter::new();

    let mut group = c.benchmark_group("segment");
    group.throughput(Throughput::Bytes(input.len() as u64));
    group.bench_function("100 paragraphs", |b| b.iter(|| segmenter.segment(black_box(&input))));
    group.finish();
}

fn bench_render(c: &mut Criterion) {
    let renderer = Renderer::default();

    let mut group = c.benchmark_group("render");
    for paragraphs in [1, 10, 100] {
        let input = document(paragraphs);
        group.throughput(Throughput::Bytes(input.len() as u64));
        group.bench_function(format!("{} paragraphs", paragraphs), |b| {
            b.iter(|| renderer.render(black_box(&input)))
        });
    }
    group.finish();
}

criterion_group!(benches, bench_segment, bench_render);
criterion_main!(benches);
