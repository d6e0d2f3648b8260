// SPDX-License-Identifier: Apache-2.0

use criterion::{black_box, criterion_group, criterion_main, Criterion};
use dose_certa_model::{Dataset, VaccinationRecord, VaccinationStatus};
use dose_certa_query::{
    filter_records, sort_records, QueryLimits, SearchTerm, Selector, SortKey, VaccinationFilter,
};

fn scaled_records(copies: usize) -> Vec<VaccinationRecord> {
    let dataset =
        Dataset::from_json(include_str!("../../../fixtures/demo.json")).expect("demo dataset");
    dataset
        .vaccinations
        .iter()
        .cycle()
        .take(dataset.vaccinations.len() * copies)
        .cloned()
        .collect()
}

fn bench_record_filters(c: &mut Criterion) {
    let records = scaled_records(2_000);
    let limits = QueryLimits::default();

    c.bench_function("vaccination_search_substring", |b| {
        let filter = VaccinationFilter {
            search: SearchTerm::parse("centro", &limits).expect("term"),
            ..VaccinationFilter::default()
        };
        b.iter(|| black_box(filter_records(&records, &filter)));
    });

    c.bench_function("vaccination_status_selector", |b| {
        let filter = VaccinationFilter {
            status: Selector::Only(VaccinationStatus::Overdue),
            ..VaccinationFilter::default()
        };
        b.iter(|| black_box(filter_records(&records, &filter)));
    });

    c.bench_function("vaccination_sort_title_asc", |b| {
        b.iter(|| black_box(sort_records(records.clone(), SortKey::TitleAsc)));
    });
}

criterion_group!(benches, bench_record_filters);
criterion_main!(benches);
