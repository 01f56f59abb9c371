// Criterion benchmarks for Tutor Discovery

use criterion::{black_box, criterion_group, criterion_main, Criterion, BenchmarkId};
use tutor_discovery::core::{compute_visible, EnvelopeChain, FilterDraft};
use tutor_discovery::models::{FilterCriteria, SubjectField, TutorRecord};

const SUBJECTS: &[&str] = &["Mathematics", "Physics", "Chemistry", "English Literature", "History", "Music"];

fn create_tutor(id: usize) -> TutorRecord {
    TutorRecord::new(id.to_string(), format!("Tutor {}", id))
        .with_subject(SubjectField::One(SUBJECTS[id % SUBJECTS.len()].to_string()))
        .with_hourly_rate(10.0 + (id % 200) as f64)
        .with_rating((id % 50) as f64 / 10.0)
        .with_subjects_taught([SUBJECTS[(id + 1) % SUBJECTS.len()]])
        .with_bio(format!("Teaching for {} years", id % 30))
}

fn create_catalog(size: usize) -> Vec<TutorRecord> {
    (0..size).map(create_tutor).collect()
}

fn create_committed() -> FilterCriteria {
    let mut draft = FilterDraft::new();
    draft.toggle_subject("math");
    draft.set_price_max(120.0).unwrap();
    draft.set_rating(3).unwrap();
    draft.criteria().clone()
}

fn bench_unrestricted(c: &mut Criterion) {
    let catalog = create_catalog(1000);
    let committed = FilterCriteria::unrestricted();

    c.bench_function("compute_visible_unrestricted_1000", |b| {
        b.iter(|| compute_visible(black_box(&catalog), black_box(""), black_box(&committed)));
    });
}

fn bench_filtered(c: &mut Criterion) {
    let mut group = c.benchmark_group("compute_visible_filtered");
    let committed = create_committed();

    for size in [100, 1000, 10000].iter() {
        let catalog = create_catalog(*size);

        group.bench_with_input(BenchmarkId::from_parameter(size), size, |b, _| {
            b.iter(|| compute_visible(black_box(&catalog), black_box("tutor"), black_box(&committed)));
        });
    }

    group.finish();
}

fn bench_envelope_unwrap(c: &mut Criterion) {
    let docs: Vec<serde_json::Value> = create_catalog(1000)
        .iter()
        .map(|t| serde_json::to_value(t).unwrap())
        .collect();
    let body = serde_json::json!({"data": {"docs": docs}});
    let chain = EnvelopeChain::default();

    c.bench_function("envelope_unwrap_1000", |b| {
        b.iter(|| chain.into_records(black_box(body.clone())));
    });
}

criterion_group!(
    benches,
    bench_unrestricted,
    bench_filtered,
    bench_envelope_unwrap,
);

criterion_main!(benches);
