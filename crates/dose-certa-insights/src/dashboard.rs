// SPDX-License-Identifier: Apache-2.0

use chrono::NaiveDate;
use dose_certa_model::{
    CampaignStatus, CampaignTarget, ExamRecord, HealthPost, PatientStatus, PatientSummary,
    StockStatus, VaccinationCampaign, VaccinationRecord, VaccinationStatus, VaccineStock,
};
use serde::Serialize;

use crate::progress::{percentage, target_progress, CampaignProgress};
use crate::stock::status_on;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CitizenSummary {
    pub overdue_doses: usize,
    /// Completed records that still carry a next dose.
    pub upcoming_doses: usize,
    pub completed_vaccines: usize,
    pub vaccination_progress: u64,
    pub eligible_campaigns: usize,
    pub active_campaigns: usize,
    pub exams: usize,
}

#[must_use]
pub fn citizen_summary(
    vaccinations: &[VaccinationRecord],
    campaigns: &[VaccinationCampaign],
    exams: &[ExamRecord],
) -> CitizenSummary {
    let count = |status: VaccinationStatus| {
        vaccinations
            .iter()
            .filter(|r| r.status == status)
            .count()
    };
    let completed = count(VaccinationStatus::Completed);
    CitizenSummary {
        overdue_doses: count(VaccinationStatus::Overdue),
        upcoming_doses: vaccinations
            .iter()
            .filter(|r| r.next_dose.is_some() && r.status == VaccinationStatus::Completed)
            .count(),
        completed_vaccines: completed,
        vaccination_progress: percentage(completed as u64, vaccinations.len() as u64),
        eligible_campaigns: campaigns.iter().filter(|c| c.open_for_user()).count(),
        active_campaigns: campaigns
            .iter()
            .filter(|c| c.status == CampaignStatus::Active)
            .count(),
        exams: exams.len(),
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TargetProgress {
    pub status: CampaignStatus,
    #[serde(flatten)]
    pub progress: CampaignProgress,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ProfessionalSummary {
    pub total_patients: usize,
    pub overdue_patients: usize,
    pub low_stock_items: usize,
    pub active_campaigns: usize,
    pub campaigns: Vec<TargetProgress>,
}

#[must_use]
pub fn professional_summary(
    patients: &[PatientSummary],
    stock: &[VaccineStock],
    targets: &[CampaignTarget],
    today: NaiveDate,
) -> ProfessionalSummary {
    ProfessionalSummary {
        total_patients: patients.len(),
        overdue_patients: patients
            .iter()
            .filter(|p| p.status == PatientStatus::Overdue)
            .count(),
        low_stock_items: stock
            .iter()
            .filter(|s| status_on(s, today) == StockStatus::Low)
            .count(),
        active_campaigns: targets
            .iter()
            .filter(|t| t.status == CampaignStatus::Active)
            .count(),
        campaigns: targets
            .iter()
            .map(|t| TargetProgress {
                status: t.status,
                progress: target_progress(t),
            })
            .collect(),
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct HealthPostSummary {
    pub available: usize,
    pub low: usize,
}

#[must_use]
pub fn health_post_summary(post: &HealthPost) -> HealthPostSummary {
    let count = |status: StockStatus| {
        post.available_vaccines
            .iter()
            .filter(|v| v.status == status)
            .count()
    };
    HealthPostSummary {
        available: count(StockStatus::Available),
        low: count(StockStatus::Low),
    }
}
