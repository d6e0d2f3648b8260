// SPDX-License-Identifier: Apache-2.0

use chrono::{Days, NaiveDate};
use dose_certa_core::RecordId;
use dose_certa_model::{AlertKind, Dataset, Priority, VaccinationRecord, VaccinationStatus};
use dose_certa_insights::{
    campaign_progress, citizen_summary, generate_record_alerts, health_post_summary,
    professional_summary, stock_summary, vaccination_alerts, AlertFeed, AlertRules,
    InsightError, NotificationSettings,
};
use proptest::prelude::*;

fn dataset() -> Dataset {
    Dataset::from_json(include_str!("../../../fixtures/demo.json")).expect("demo dataset")
}

fn today() -> NaiveDate {
    NaiveDate::from_ymd_opt(2024, 10, 10).expect("date")
}

#[test]
fn demo_alerts_rank_overdue_first_and_keep_adhoc_order() {
    let data = dataset();
    let alerts = vaccination_alerts(&data.vaccinations, &data.alerts, today(), &AlertRules::default())
        .expect("alerts");
    let ids: Vec<&str> = alerts.iter().map(|a| a.id.as_str()).collect();
    assert_eq!(
        ids,
        vec![
            "overdue-vac-3",
            "upcoming-vac-1",
            "upcoming-vac-3",
            "allergy-egg",
            "campaign-flu"
        ]
    );
    assert_eq!(alerts[0].priority, Priority::High);
    assert!(!alerts[0].dismissible);
}

#[test]
fn feed_tracks_read_and_dismissed_alerts() {
    let data = dataset();
    let alerts = vaccination_alerts(&data.vaccinations, &data.alerts, today(), &AlertRules::default())
        .expect("alerts");
    let mut feed = AlertFeed::new(alerts);
    assert_eq!(feed.unread_count(), 5);

    feed.mark_read("upcoming-vac-1").expect("mark read");
    assert_eq!(feed.unread_count(), 4);

    let err = feed.dismiss("overdue-vac-3").expect_err("not dismissible");
    assert_eq!(err, InsightError::NotDismissible("overdue-vac-3".to_string()));
    feed.dismiss("campaign-flu").expect("dismiss");
    assert!(matches!(feed.dismiss("campaign-flu"), Err(InsightError::UnknownAlert(_))));

    let mut settings = NotificationSettings::default();
    settings.allergy_warnings = false;
    assert!(feed
        .visible(&settings)
        .iter()
        .all(|a| a.kind != AlertKind::Allergy));

    feed.mark_all_read();
    assert_eq!(feed.unread_count(), 0);
}

#[test]
fn campaign_coverage_example() {
    let data = dataset();
    let flu = data
        .campaigns
        .iter()
        .find(|c| c.id.as_str() == "camp-1")
        .expect("campaign");
    assert_eq!(campaign_progress(flu).percentage, 60);
    let hpv = data
        .campaigns
        .iter()
        .find(|c| c.id.as_str() == "camp-3")
        .expect("campaign");
    assert_eq!(campaign_progress(hpv).percentage, 0);
}

#[test]
fn dashboards_aggregate_the_demo_data() {
    let data = dataset();
    let citizen = citizen_summary(&data.vaccinations, &data.campaigns, &data.exams);
    assert_eq!(citizen.overdue_doses, 1);
    assert_eq!(citizen.upcoming_doses, 1);
    assert_eq!(citizen.completed_vaccines, 3);
    assert_eq!(citizen.vaccination_progress, 60);
    assert_eq!(citizen.eligible_campaigns, 1);
    assert_eq!(citizen.active_campaigns, 2);
    assert_eq!(citizen.exams, 2);

    let professional =
        professional_summary(&data.patients, &data.stock, &data.campaign_targets, today());
    assert_eq!(professional.total_patients, 3);
    assert_eq!(professional.overdue_patients, 1);
    assert_eq!(professional.low_stock_items, 1);
    assert_eq!(professional.active_campaigns, 2);
    assert_eq!(professional.campaigns[0].progress.percentage, 65);
    assert_eq!(professional.campaigns[1].progress.percentage, 84);
    assert_eq!(professional.campaigns[2].progress.percentage, 90);

    let stock = stock_summary(&data.stock, today());
    assert_eq!(stock.items, 4);
    assert_eq!(stock.low, 1);
    assert_eq!(stock.unavailable, 1);
    assert_eq!(stock.total_units, 85);

    let centro = health_post_summary(&data.health_posts[0]);
    assert_eq!((centro.available, centro.low), (2, 1));
}

fn record(index: usize, status: VaccinationStatus, next: Option<NaiveDate>) -> VaccinationRecord {
    VaccinationRecord {
        id: RecordId::new(format!("vac-{index}")).expect("id"),
        vaccine: "Influenza".to_string(),
        date: NaiveDate::from_ymd_opt(2024, 1, 1).expect("date"),
        location: "UBS".to_string(),
        batch: "B".to_string(),
        status,
        next_dose: next,
        dose_number: None,
        total_doses: None,
        manufacturer: None,
        health_professional: None,
        notes: None,
    }
}

proptest! {
    #[test]
    fn alert_counts_follow_status_and_window(
        rows in proptest::collection::vec((0u8..3, proptest::option::of(0u64..120)), 0..30)
    ) {
        let base = NaiveDate::from_ymd_opt(2024, 9, 1).expect("date");
        let today = base + Days::new(45);
        let records: Vec<VaccinationRecord> = rows
            .iter()
            .enumerate()
            .map(|(i, (status, offset))| {
                let status = match status {
                    0 => VaccinationStatus::Completed,
                    1 => VaccinationStatus::Pending,
                    _ => VaccinationStatus::Overdue,
                };
                record(i, status, offset.map(|d| base + Days::new(d)))
            })
            .collect();

        let alerts = generate_record_alerts(&records, today, &AlertRules::default()).expect("alerts");
        for record in &records {
            let overdue_id = format!("overdue-{}", record.id);
            let upcoming_id = format!("upcoming-{}", record.id);
            let overdue = alerts.iter().filter(|a| a.id.as_str() == overdue_id).count();
            let upcoming = alerts.iter().filter(|a| a.id.as_str() == upcoming_id).count();

            prop_assert_eq!(overdue, usize::from(record.status == VaccinationStatus::Overdue));
            let in_window = record
                .next_dose
                .is_some_and(|d| d >= today && d <= today + Days::new(30));
            prop_assert_eq!(upcoming, usize::from(in_window));
        }
        prop_assert!(alerts
            .iter()
            .filter(|a| a.kind == AlertKind::Overdue)
            .all(|a| !a.dismissible && a.priority == Priority::High));
    }
}
