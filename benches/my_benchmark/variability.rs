use banner_variability::{
    analysis::variability::analyze_group,
    api::{builtin_samples::TOP_DECOR_SAMPLES, sample_set::SampleSet},
    report::builder::build_report,
};
use criterion::{black_box, Criterion};

fn generate_samples(sample_count: usize, width: usize) -> Vec<String> {
    let palette = [' ', '.', '\'', '*'];
    (0..sample_count)
        .map(|row| {
            (0..width)
                .map(|column| palette[(row * 7 + column * 3) % palette.len()])
                .collect()
        })
        .collect()
}

pub fn bench_analyze_group(c: &mut Criterion) {
    let mut group = c.benchmark_group("analyze_group");

    group.bench_function("builtin_top_decor", |b| {
        b.iter(|| analyze_group(black_box(&TOP_DECOR_SAMPLES)))
    });

    let wide = generate_samples(32, 240);
    group.bench_function("32_samples_240_columns", |b| {
        b.iter(|| analyze_group(black_box(&wide)))
    });

    group.finish();
}

pub fn bench_build_report(c: &mut Criterion) {
    let sample_set = SampleSet::builtin();
    c.bench_function("build_report_builtin", |b| {
        b.iter(|| build_report(black_box(&sample_set)))
    });
}
