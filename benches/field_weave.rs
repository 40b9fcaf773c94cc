use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use field_combiner_rs::video_pipeline::{
    ChromaFormat, FieldWeaver, Picture, VideoFormat, WeaverConfig,
};
use std::time::Duration;

fn generate_mock_field(format: &VideoFormat, seed: u8) -> Picture {
    let mut picture = Picture::new(format.clone()).unwrap();
    for plane in picture.planes_mut() {
        for (i, byte) in plane.as_mut_slice().iter_mut().enumerate() {
            *byte = (i as u8).wrapping_add(seed);
        }
    }
    picture
}

fn benchmark_pair_by_height(c: &mut Criterion) {
    let mut group = c.benchmark_group("weave_pair_by_height");

    let sizes = vec![
        (1920, 540, "1080i"),
        (720, 288, "576i"),
        (720, 280, "480i"),
    ];

    for (width, lines, label) in sizes {
        let format = VideoFormat::new(ChromaFormat::I420, width, lines);
        let first = generate_mock_field(&format, 0);
        let second = generate_mock_field(&format, 1).with_date(Duration::from_millis(20));

        group.bench_with_input(
            BenchmarkId::from_parameter(label),
            &(first, second),
            |b, (first, second)| {
                let mut weaver = FieldWeaver::new(WeaverConfig::default(), &format).unwrap();

                b.iter(|| {
                    weaver.accept(black_box(first.clone())).unwrap();
                    black_box(weaver.accept(black_box(second.clone())).unwrap());
                });
            },
        );
    }

    group.finish();
}

fn benchmark_pass_through(c: &mut Criterion) {
    let field = VideoFormat::new(ChromaFormat::I420, 1920, 540);
    let progressive = generate_mock_field(&VideoFormat::new(ChromaFormat::I420, 1280, 720), 0);

    c.bench_function("pass_through_720p", |b| {
        let mut weaver = FieldWeaver::new(WeaverConfig::default(), &field).unwrap();

        b.iter(|| {
            black_box(weaver.accept(black_box(progressive.clone())).unwrap());
        });
    });
}

criterion_group!(benches, benchmark_pair_by_height, benchmark_pass_through);
criterion_main!(benches);
