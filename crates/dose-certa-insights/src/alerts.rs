// SPDX-License-Identifier: Apache-2.0

use chrono::{Days, NaiveDate};
use dose_certa_core::{IdPrefix, RecordId};
use dose_certa_model::{Alert, AlertKind, Priority, VaccinationRecord, VaccinationStatus};
use serde::{Deserialize, Serialize};

use crate::error::InsightError;

pub const DEFAULT_UPCOMING_WINDOW_DAYS: u64 = 30;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct AlertRules {
    pub upcoming_window_days: u64,
}

impl Default for AlertRules {
    fn default() -> Self {
        Self {
            upcoming_window_days: DEFAULT_UPCOMING_WINDOW_DAYS,
        }
    }
}

impl AlertRules {
    /// True when `today <= due <= today + window`.
    #[must_use]
    pub fn is_upcoming(&self, due: NaiveDate, today: NaiveDate) -> bool {
        let horizon = today
            .checked_add_days(Days::new(self.upcoming_window_days))
            .unwrap_or(NaiveDate::MAX);
        due >= today && due <= horizon
    }
}

/// Overdue alerts first, then upcoming ones, each in record order.
pub fn generate_record_alerts(
    records: &[VaccinationRecord],
    today: NaiveDate,
    rules: &AlertRules,
) -> Result<Vec<Alert>, InsightError> {
    let mut alerts = Vec::new();

    for record in records
        .iter()
        .filter(|r| r.status == VaccinationStatus::Overdue)
    {
        let since = record.next_dose.unwrap_or(record.date);
        alerts.push(Alert {
            id: RecordId::prefixed(IdPrefix::OverdueAlert, record.id.as_str())?,
            kind: AlertKind::Overdue,
            title: "Overdue vaccine".to_string(),
            message: format!("Your {} dose has been overdue since {since}", record.vaccine),
            vaccine: Some(record.vaccine.clone()),
            due_date: record.next_dose,
            priority: Priority::High,
            action_label: Some("Schedule now".to_string()),
            dismissible: false,
            read: false,
            issued_at: None,
        });
    }

    for record in records {
        let Some(due) = record.next_dose else {
            continue;
        };
        if !rules.is_upcoming(due, today) {
            continue;
        }
        alerts.push(Alert {
            id: RecordId::prefixed(IdPrefix::UpcomingAlert, record.id.as_str())?,
            kind: AlertKind::Upcoming,
            title: "Upcoming vaccine".to_string(),
            message: format!("Your next {} dose is scheduled for {due}", record.vaccine),
            vaccine: Some(record.vaccine.clone()),
            due_date: Some(due),
            priority: Priority::Medium,
            action_label: Some("View details".to_string()),
            dismissible: true,
            read: false,
            issued_at: None,
        });
    }

    Ok(alerts)
}

/// Generated alerts, then ad-hoc ones, stably ordered high > medium > low.
#[must_use]
pub fn rank_alerts(generated: Vec<Alert>, adhoc: &[Alert]) -> Vec<Alert> {
    let mut all = generated;
    all.extend(adhoc.iter().cloned());
    all.sort_by_key(|alert| std::cmp::Reverse(alert.priority.rank()));
    all
}

pub fn vaccination_alerts(
    records: &[VaccinationRecord],
    adhoc: &[Alert],
    today: NaiveDate,
    rules: &AlertRules,
) -> Result<Vec<Alert>, InsightError> {
    if let Some(clash) = adhoc.iter().find(|a| a.id.is_derived_alert()) {
        return Err(InsightError::Validation(format!(
            "ad-hoc alert `{}` uses an id reserved for derived alerts",
            clash.id
        )));
    }
    let generated = generate_record_alerts(records, today, rules)?;
    Ok(rank_alerts(generated, adhoc))
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum NotificationCategory {
    VaccineReminders,
    CampaignAlerts,
    AllergyWarnings,
    LocationAlerts,
}

impl NotificationCategory {
    pub const ALL: [Self; 4] = [
        Self::VaccineReminders,
        Self::CampaignAlerts,
        Self::AllergyWarnings,
        Self::LocationAlerts,
    ];

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::VaccineReminders => "vaccine-reminders",
            Self::CampaignAlerts => "campaign-alerts",
            Self::AllergyWarnings => "allergy-warnings",
            Self::LocationAlerts => "location-alerts",
        }
    }

    pub fn parse(raw: &str) -> Result<Self, InsightError> {
        let needle = raw.trim();
        Self::ALL
            .into_iter()
            .find(|c| c.as_str().eq_ignore_ascii_case(needle))
            .ok_or_else(|| {
                InsightError::Validation(format!("unknown notification category `{needle}`"))
            })
    }

    /// Category an alert kind is governed by; `info` alerts are always shown.
    #[must_use]
    pub const fn for_kind(kind: AlertKind) -> Option<Self> {
        match kind {
            AlertKind::Overdue | AlertKind::Upcoming | AlertKind::Reminder => {
                Some(Self::VaccineReminders)
            }
            AlertKind::Campaign => Some(Self::CampaignAlerts),
            AlertKind::Allergy => Some(Self::AllergyWarnings),
            AlertKind::Location => Some(Self::LocationAlerts),
            AlertKind::Info => None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NotificationSettings {
    pub vaccine_reminders: bool,
    pub campaign_alerts: bool,
    pub allergy_warnings: bool,
    pub location_alerts: bool,
}

impl Default for NotificationSettings {
    fn default() -> Self {
        Self {
            vaccine_reminders: true,
            campaign_alerts: true,
            allergy_warnings: true,
            location_alerts: false,
        }
    }
}

impl NotificationSettings {
    fn slot(&mut self, category: NotificationCategory) -> &mut bool {
        match category {
            NotificationCategory::VaccineReminders => &mut self.vaccine_reminders,
            NotificationCategory::CampaignAlerts => &mut self.campaign_alerts,
            NotificationCategory::AllergyWarnings => &mut self.allergy_warnings,
            NotificationCategory::LocationAlerts => &mut self.location_alerts,
        }
    }

    /// Flips one category and returns its new state.
    pub fn toggle(&mut self, category: NotificationCategory) -> bool {
        let slot = self.slot(category);
        *slot = !*slot;
        *slot
    }

    #[must_use]
    pub fn enabled(&self, category: NotificationCategory) -> bool {
        match category {
            NotificationCategory::VaccineReminders => self.vaccine_reminders,
            NotificationCategory::CampaignAlerts => self.campaign_alerts,
            NotificationCategory::AllergyWarnings => self.allergy_warnings,
            NotificationCategory::LocationAlerts => self.location_alerts,
        }
    }

    #[must_use]
    pub fn shows(&self, kind: AlertKind) -> bool {
        NotificationCategory::for_kind(kind).map_or(true, |c| self.enabled(c))
    }
}

/// Ranked alerts with read and dismissed state for an alert center.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AlertFeed {
    alerts: Vec<Alert>,
}

impl AlertFeed {
    #[must_use]
    pub fn new(alerts: Vec<Alert>) -> Self {
        Self { alerts }
    }

    #[must_use]
    pub fn alerts(&self) -> &[Alert] {
        &self.alerts
    }

    #[must_use]
    pub fn unread_count(&self) -> usize {
        self.alerts.iter().filter(|a| !a.read).count()
    }

    pub fn mark_read(&mut self, id: &str) -> Result<(), InsightError> {
        let alert = self.find_mut(id)?;
        alert.read = true;
        Ok(())
    }

    pub fn mark_all_read(&mut self) {
        for alert in &mut self.alerts {
            alert.read = true;
        }
    }

    /// Removes a dismissible alert and returns it.
    pub fn dismiss(&mut self, id: &str) -> Result<Alert, InsightError> {
        let index = self
            .alerts
            .iter()
            .position(|a| a.id.as_str() == id)
            .ok_or_else(|| InsightError::UnknownAlert(id.to_string()))?;
        if !self.alerts[index].dismissible {
            return Err(InsightError::NotDismissible(id.to_string()));
        }
        Ok(self.alerts.remove(index))
    }

    #[must_use]
    pub fn visible(&self, settings: &NotificationSettings) -> Vec<&Alert> {
        self.alerts
            .iter()
            .filter(|a| settings.shows(a.kind))
            .collect()
    }

    fn find_mut(&mut self, id: &str) -> Result<&mut Alert, InsightError> {
        self.alerts
            .iter_mut()
            .find(|a| a.id.as_str() == id)
            .ok_or_else(|| InsightError::UnknownAlert(id.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).expect("date")
    }

    fn record(id: &str, status: VaccinationStatus, next: Option<NaiveDate>) -> VaccinationRecord {
        VaccinationRecord {
            id: RecordId::new(id).expect("id"),
            vaccine: "Hepatite B".to_string(),
            date: date(2024, 3, 15),
            location: "UBS Centro".to_string(),
            batch: "HB1".to_string(),
            status,
            next_dose: next,
            dose_number: None,
            total_doses: None,
            manufacturer: None,
            health_professional: None,
            notes: None,
        }
    }

    #[test]
    fn overdue_record_yields_high_priority_non_dismissible_alert() {
        let records = [record("vac-3", VaccinationStatus::Overdue, Some(date(2024, 10, 20)))];
        let alerts =
            generate_record_alerts(&records, date(2024, 12, 1), &AlertRules::default())
                .expect("alerts");
        assert_eq!(alerts.len(), 1);
        assert_eq!(alerts[0].id.as_str(), "overdue-vac-3");
        assert_eq!(alerts[0].kind, AlertKind::Overdue);
        assert_eq!(alerts[0].priority, Priority::High);
        assert!(!alerts[0].dismissible);
        assert!(alerts[0].message.contains("2024-10-20"));
    }

    #[test]
    fn overdue_without_next_dose_references_record_date() {
        let records = [record("vac-9", VaccinationStatus::Overdue, None)];
        let alerts =
            generate_record_alerts(&records, date(2024, 12, 1), &AlertRules::default())
                .expect("alerts");
        assert!(alerts[0].message.contains("2024-03-15"));
        assert_eq!(alerts[0].due_date, None);
    }

    #[test]
    fn upcoming_window_is_inclusive() {
        let today = date(2024, 10, 1);
        let rules = AlertRules::default();
        assert!(rules.is_upcoming(today, today));
        assert!(rules.is_upcoming(date(2024, 10, 31), today));
        assert!(!rules.is_upcoming(date(2024, 11, 1), today));
        assert!(!rules.is_upcoming(date(2024, 9, 30), today));
    }

    #[test]
    fn overdue_record_in_window_yields_both_alerts() {
        let records = [record("vac-3", VaccinationStatus::Overdue, Some(date(2024, 10, 20)))];
        let alerts = generate_record_alerts(&records, date(2024, 10, 10), &AlertRules::default())
            .expect("alerts");
        let kinds: Vec<AlertKind> = alerts.iter().map(|a| a.kind).collect();
        assert_eq!(kinds, vec![AlertKind::Overdue, AlertKind::Upcoming]);
    }

    #[test]
    fn ranking_is_stable_within_a_priority() {
        let low = |id: &str| Alert {
            id: RecordId::new(id).expect("id"),
            kind: AlertKind::Info,
            title: id.to_string(),
            message: String::new(),
            vaccine: None,
            due_date: None,
            priority: Priority::Low,
            action_label: None,
            dismissible: true,
            read: false,
            issued_at: None,
        };
        let mut high = low("h1");
        high.priority = Priority::High;
        let ranked = rank_alerts(vec![low("g1"), low("g2")], &[low("a1"), high]);
        let ids: Vec<&str> = ranked.iter().map(|a| a.id.as_str()).collect();
        assert_eq!(ids, vec!["h1", "g1", "g2", "a1"]);
    }

    #[test]
    fn ad_hoc_alert_cannot_shadow_a_derived_id() {
        let records = [record("vac-3", VaccinationStatus::Overdue, Some(date(2024, 10, 20)))];
        let rules = AlertRules::default();
        let today = date(2024, 10, 10);
        let generated = generate_record_alerts(&records, today, &rules).expect("alerts");
        let mut shadow = generated[0].clone();
        shadow.dismissible = true;
        let err = vaccination_alerts(&records, &[shadow], today, &rules).expect_err("clash");
        assert!(matches!(err, InsightError::Validation(msg) if msg.contains("overdue-vac-3")));
    }

    #[test]
    fn settings_toggle_and_filter_kinds() {
        let mut settings = NotificationSettings::default();
        assert!(!settings.shows(AlertKind::Location));
        assert!(settings.toggle(NotificationCategory::LocationAlerts));
        assert!(settings.shows(AlertKind::Location));
        assert!(!settings.toggle(NotificationCategory::VaccineReminders));
        assert!(!settings.shows(AlertKind::Upcoming));
        assert!(settings.shows(AlertKind::Info));
        assert_eq!(
            NotificationCategory::parse("campaign-alerts").expect("category"),
            NotificationCategory::CampaignAlerts
        );
    }
}
