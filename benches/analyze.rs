use criterion::{Criterion, criterion_group, criterion_main};
use std::hint::black_box;
use textutils_domain::analyze;
use textutils_ports::clock::FixedClock;
use textutils_usecase::ReportExporter;

fn sample(paragraphs: usize) -> String {
    let para = "The quick brown fox jumps over the lazy dog. Pack my box with five dozen liquor jugs!\n\
                How vexingly quick daft zebras jump? Sphinx of black quartz, judge my vow.";
    vec![para; paragraphs].join("\n\n")
}

fn benchmark_analyze(c: &mut Criterion) {
    let small = sample(1);
    let large = sample(500);
    c.bench_function("analyze_small", |b| b.iter(|| black_box(analyze(black_box(&small)))));
    c.bench_function("analyze_large", |b| b.iter(|| black_box(analyze(black_box(&large)))));
}

fn benchmark_export(c: &mut Criterion) {
    let text = sample(50);
    let clock = FixedClock(chrono::DateTime::UNIX_EPOCH);
    let exporter = ReportExporter::new(&clock);
    c.bench_function("structured_payload", |b| {
        b.iter(|| {
            let payload = exporter.to_structured_payload(black_box(&text)).unwrap();
            black_box(payload);
        })
    });
}

criterion_group!(benches, benchmark_analyze, benchmark_export);
criterion_main!(benches);
