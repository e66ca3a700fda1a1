use criterion::{black_box, criterion_group, criterion_main, Criterion};
use insight_lexicon::LexiconScorer;

fn bench_score(c: &mut Criterion) {
    let scorer = LexiconScorer::default();
    let text = "El profesor domina la materia y explica bien, aunque los exámenes \
                son difíciles y algo estricto con las fechas. Muy amable y accesible.";

    c.bench_function("lexicon_score_single", |b| {
        b.iter(|| scorer.score(black_box(text)))
    });

    let batch: Vec<String> = (0..256).map(|i| format!("{text} #{i}")).collect();
    c.bench_function("lexicon_score_batch_256", |b| {
        b.iter(|| scorer.score_batch(black_box(&batch)))
    });
}

criterion_group!(benches, bench_score);
criterion_main!(benches);
