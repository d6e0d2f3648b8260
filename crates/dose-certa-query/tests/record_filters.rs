// SPDX-License-Identifier: Apache-2.0

use chrono::NaiveDate;
use dose_certa_core::RecordId;
use dose_certa_model::{
    CampaignStatus, Dataset, ExamCategory, PatientStatus, StockStatus, VaccinationRecord,
    VaccinationStatus,
};
use dose_certa_query::{
    filter_records, related_campaigns, sort_records, vaccine_catalog, CampaignFilter, DateRange,
    ExamFilter, HealthPostFilter, NewsFilter, PatientFilter, QueryLimits, ScheduleFilter,
    SearchTerm, Selector, SortKey, VaccinationFilter,
};
use proptest::prelude::*;

fn dataset() -> Dataset {
    Dataset::from_json(include_str!("../../../fixtures/demo.json")).expect("demo dataset")
}

fn term(raw: &str) -> SearchTerm {
    SearchTerm::parse(raw, &QueryLimits::default()).expect("term")
}

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).expect("date")
}

#[test]
fn vaccination_search_spans_optional_fields() {
    let data = dataset();
    let by_manufacturer = VaccinationFilter {
        search: term("butantan"),
        ..VaccinationFilter::default()
    };
    let found = filter_records(&data.vaccinations, &by_manufacturer);
    assert_eq!(found.len(), 1);
    assert_eq!(found[0].vaccine, "Influenza 2024");

    let overdue = VaccinationFilter {
        status: Selector::Only(VaccinationStatus::Overdue),
        ..VaccinationFilter::default()
    };
    let found = filter_records(&data.vaccinations, &overdue);
    assert!(found.iter().all(|r| r.status == VaccinationStatus::Overdue));
    assert_eq!(found.len(), 1);
}

#[test]
fn criteria_combine_with_and() {
    let data = dataset();
    let filter = VaccinationFilter {
        search: term("ubs centro"),
        status: Selector::Only(VaccinationStatus::Completed),
        dates: DateRange::new(Some(date(2024, 1, 1)), None).expect("range"),
    };
    let found = filter_records(&data.vaccinations, &filter);
    let ids: Vec<&str> = found.iter().map(|r| r.id.as_str()).collect();
    assert_eq!(ids, vec!["vac-1"]);
}

#[test]
fn exam_filter_and_sort_follow_the_list_page() {
    let data = dataset();
    let all = filter_records(&data.exams, &ExamFilter::default());
    let newest_first = sort_records(all.clone(), SortKey::DateDesc);
    assert_eq!(newest_first[0].id.as_str(), "exam-2");
    let by_title = sort_records(all, SortKey::TitleAsc);
    assert_eq!(by_title[0].title, "Hemograma Completo");

    let blood = ExamFilter {
        category: Selector::Only(ExamCategory::Blood),
        ..ExamFilter::default()
    };
    assert_eq!(filter_records(&data.exams, &blood).len(), 1);

    let by_doctor = ExamFilter {
        search: term("PAULO"),
        ..ExamFilter::default()
    };
    assert_eq!(filter_records(&data.exams, &by_doctor)[0].id.as_str(), "exam-2");
}

#[test]
fn health_posts_filter_by_vaccine_and_availability() {
    let data = dataset();
    let low = HealthPostFilter {
        availability: Selector::Only(StockStatus::Low),
        ..HealthPostFilter::default()
    };
    let found = filter_records(&data.health_posts, &low);
    assert_eq!(found.len(), 1);
    assert_eq!(found[0].name, "UBS Centro");

    let offering = HealthPostFilter {
        vaccine: Selector::Only("Influenza".to_string()),
        ..HealthPostFilter::default()
    };
    assert_eq!(filter_records(&data.health_posts, &offering).len(), 2);

    let by_address = HealthPostFilter {
        search: term("augusta"),
        ..HealthPostFilter::default()
    };
    assert_eq!(filter_records(&data.health_posts, &by_address).len(), 1);
}

#[test]
fn vaccine_catalog_is_sorted_and_unique() {
    let data = dataset();
    let catalog = vaccine_catalog(&data.health_posts);
    assert_eq!(
        catalog,
        vec!["COVID-19", "Hepatite B", "Influenza", "Tétano e Difteria (dT)"]
    );
}

#[test]
fn campaigns_news_patients_and_schedule_filters() {
    let data = dataset();
    let active = CampaignFilter {
        status: Selector::Only(CampaignStatus::Active),
        ..CampaignFilter::default()
    };
    assert_eq!(filter_records(&data.campaigns, &active).len(), 2);

    let audience = CampaignFilter {
        search: term("adolescentes"),
        ..CampaignFilter::default()
    };
    assert_eq!(filter_records(&data.campaigns, &audience)[0].id.as_str(), "camp-3");

    let tagged = NewsFilter {
        search: term("dengue"),
        ..NewsFilter::default()
    };
    assert_eq!(filter_records(&data.news, &tagged).len(), 1);

    let by_cpf = PatientFilter {
        search: term("987.654"),
        status: Selector::Only(PatientStatus::UpToDate),
    };
    assert_eq!(filter_records(&data.patients, &by_cpf)[0].name, "João Santos");

    let overdue = ScheduleFilter {
        status: Selector::parse("overdue").expect("selector"),
    };
    assert_eq!(filter_records(&data.schedule, &overdue).len(), 1);
}

#[test]
fn related_campaigns_match_by_substring_both_ways() {
    let data = dataset();
    let related = related_campaigns(&data.campaigns, &data.schedule);
    let ids: Vec<&str> = related.iter().map(|c| c.id.as_str()).collect();
    // "Influenza" is contained in "Influenza (Gripe)"; HPV matches exactly.
    assert_eq!(ids, vec!["camp-1", "camp-3"]);
}

fn record(index: usize, day: u32) -> VaccinationRecord {
    VaccinationRecord {
        id: RecordId::new(format!("vac-{index}")).expect("id"),
        vaccine: format!("Vacina {index}"),
        date: date(2024, 1, 1) + chrono::Days::new(u64::from(day)),
        location: "UBS".to_string(),
        batch: "B".to_string(),
        status: VaccinationStatus::Completed,
        next_dose: None,
        dose_number: None,
        total_doses: None,
        manufacturer: None,
        health_professional: None,
        notes: None,
    }
}

proptest! {
    #[test]
    fn date_orders_are_exact_reverses_on_distinct_dates(
        days in proptest::collection::btree_set(0u32..2000, 0..40)
    ) {
        let records: Vec<VaccinationRecord> = days
            .iter()
            .rev()
            .enumerate()
            .map(|(i, d)| record(i, *d))
            .collect();
        let desc = sort_records(records.clone(), SortKey::DateDesc);
        let mut asc = sort_records(records, SortKey::DateAsc);
        asc.reverse();
        prop_assert_eq!(desc, asc);
    }

    #[test]
    fn select_all_is_the_identity(days in proptest::collection::vec(0u32..400, 0..40)) {
        let records: Vec<VaccinationRecord> = days
            .iter()
            .enumerate()
            .map(|(i, d)| record(i, *d))
            .collect();
        let filter = VaccinationFilter {
            status: Selector::parse("all").expect("all"),
            ..VaccinationFilter::default()
        };
        prop_assert_eq!(filter_records(&records, &filter), records);
    }
}
