// SPDX-License-Identifier: Apache-2.0

use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

use crate::alert::Alert;
use crate::campaign::VaccinationCampaign;
use crate::exam::ExamRecord;
use crate::health_post::{HealthPost, VaccineStock};
use crate::news::NewsArticle;
use crate::patient::{CampaignTarget, PatientSummary};
use crate::schedule::ScheduleEntry;
use crate::user::{normalize_email, UserAccount};
use crate::vaccination::VaccinationRecord;
use crate::validation::ValidationError;

/// Everything one deployment serves, as loaded from a dataset file.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Dataset {
    pub users: Vec<UserAccount>,
    pub vaccinations: Vec<VaccinationRecord>,
    pub exams: Vec<ExamRecord>,
    pub campaigns: Vec<VaccinationCampaign>,
    pub health_posts: Vec<HealthPost>,
    pub stock: Vec<VaccineStock>,
    pub news: Vec<NewsArticle>,
    pub patients: Vec<PatientSummary>,
    pub campaign_targets: Vec<CampaignTarget>,
    pub schedule: Vec<ScheduleEntry>,
    pub alerts: Vec<Alert>,
}

impl Dataset {
    /// Parses and validates a dataset document.
    pub fn from_json(raw: &str) -> Result<Self, ValidationError> {
        let dataset: Self = serde_json::from_str(raw)
            .map_err(|err| ValidationError(format!("dataset is not valid JSON: {err}")))?;
        dataset.validate()?;
        Ok(dataset)
    }

    pub fn validate(&self) -> Result<(), ValidationError> {
        let mut emails = BTreeSet::new();
        let mut user_ids = BTreeSet::new();
        for account in &self.users {
            if !emails.insert(normalize_email(&account.user.email)) {
                return Err(ValidationError(format!(
                    "duplicate user email `{}`",
                    account.user.email
                )));
            }
            if !user_ids.insert(account.user.id.as_str()) {
                return Err(ValidationError(format!("duplicate user id `{}`", account.user.id)));
            }
        }

        for record in &self.vaccinations {
            record.validate()?;
        }
        for exam in &self.exams {
            exam.validate()?;
        }
        for campaign in &self.campaigns {
            campaign.validate()?;
        }
        for post in &self.health_posts {
            post.validate()?;
        }
        for item in &self.stock {
            item.validate()?;
        }
        for article in &self.news {
            article.validate()?;
        }
        for patient in &self.patients {
            patient.validate()?;
        }
        for target in &self.campaign_targets {
            target.validate()?;
        }
        for entry in &self.schedule {
            entry.validate()?;
        }
        for alert in &self.alerts {
            alert.validate()?;
            if alert.id.is_derived_alert() {
                return Err(ValidationError(format!(
                    "alert id `{}` is reserved for alerts derived from vaccination records",
                    alert.id
                )));
            }
        }

        unique_ids("vaccination", self.vaccinations.iter().map(|r| r.id.as_str()))?;
        unique_ids("exam", self.exams.iter().map(|r| r.id.as_str()))?;
        unique_ids("campaign", self.campaigns.iter().map(|r| r.id.as_str()))?;
        unique_ids("health post", self.health_posts.iter().map(|r| r.id.as_str()))?;
        unique_ids("stock", self.stock.iter().map(|r| r.id.as_str()))?;
        unique_ids("news", self.news.iter().map(|r| r.id.as_str()))?;
        unique_ids("patient", self.patients.iter().map(|r| r.id.as_str()))?;
        unique_ids("campaign target", self.campaign_targets.iter().map(|r| r.id.as_str()))?;
        unique_ids("schedule", self.schedule.iter().map(|r| r.id.as_str()))?;
        unique_ids("alert", self.alerts.iter().map(|r| r.id.as_str()))?;

        let posts: BTreeSet<&str> = self.health_posts.iter().map(|p| p.id.as_str()).collect();
        if let Some(orphan) = self
            .stock
            .iter()
            .find(|item| !posts.contains(item.post_id.as_str()))
        {
            return Err(ValidationError(format!(
                "stock {} refers to unknown health post `{}`",
                orphan.id, orphan.post_id
            )));
        }
        Ok(())
    }
}

fn unique_ids<'a>(
    kind: &str,
    ids: impl Iterator<Item = &'a str>,
) -> Result<(), ValidationError> {
    let mut seen = BTreeSet::new();
    for id in ids {
        if !seen.insert(id) {
            return Err(ValidationError(format!("duplicate {kind} id `{id}`")));
        }
    }
    Ok(())
}
