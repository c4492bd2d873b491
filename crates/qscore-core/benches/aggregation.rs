use criterion::{black_box, criterion_group, criterion_main, Criterion};

use qscore_core::model::{CategoryFilter, QuestionRecord, ScoreCategory};
use qscore_core::statistics::{categorize, filter_by_category, summarize};

fn make_records(n: usize) -> Vec<QuestionRecord> {
    (0..n)
        .map(|i| QuestionRecord {
            question: format!("Question {i}"),
            your_answer: String::new(),
            feedback: String::new(),
            score: (i * 37 % 101) as i64,
            time_taken: (i % 120) as u64,
        })
        .collect()
}

fn bench_categorize(c: &mut Criterion) {
    c.bench_function("categorize", |b| {
        b.iter(|| {
            for score in -10..=110 {
                black_box(categorize(black_box(score)));
            }
        })
    });
}

fn bench_summarize(c: &mut Criterion) {
    let mut group = c.benchmark_group("summarize");

    for n in [10, 1_000, 100_000] {
        let records = make_records(n);
        group.bench_function(format!("n={n}"), |b| {
            b.iter(|| summarize(black_box(&records)))
        });
    }

    group.finish();
}

fn bench_filter(c: &mut Criterion) {
    let mut group = c.benchmark_group("filter_by_category");
    let records = make_records(10_000);

    group.bench_function("all", |b| {
        b.iter(|| filter_by_category(black_box(&records), CategoryFilter::All))
    });

    group.bench_function("excellent", |b| {
        b.iter(|| {
            filter_by_category(
                black_box(&records),
                CategoryFilter::Only(ScoreCategory::Excellent),
            )
        })
    });

    group.finish();
}

criterion_group!(benches, bench_categorize, bench_summarize, bench_filter);
criterion_main!(benches);
