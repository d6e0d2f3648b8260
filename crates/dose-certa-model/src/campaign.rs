// SPDX-License-Identifier: Apache-2.0

use chrono::NaiveDate;
use dose_certa_core::RecordId;
use serde::{Deserialize, Serialize};

use crate::alert::Priority;
use crate::validation::{require_text, ValidationError};

labeled_enum! {
    pub enum CampaignStatus ("campaign status") {
        Active => "active",
        Upcoming => "upcoming",
        Ended => "ended",
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VaccinationCampaign {
    pub id: RecordId,
    pub title: String,
    pub description: String,
    pub vaccine: String,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    #[serde(default)]
    pub target_audience: Vec<String>,
    pub age_range: String,
    pub priority: Priority,
    pub status: CampaignStatus,
    #[serde(default)]
    pub locations: Vec<String>,
    #[serde(default)]
    pub eligibility_check: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub user_eligible: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub completed_by_user: Option<bool>,
    pub estimated_coverage: u64,
    pub current_coverage: u64,
}

impl VaccinationCampaign {
    pub fn validate(&self) -> Result<(), ValidationError> {
        require_text("campaign title", &self.title)?;
        require_text("campaign vaccine", &self.vaccine)?;
        if self.end_date < self.start_date {
            return Err(ValidationError(format!(
                "campaign {}: end date {} precedes start date {}",
                self.id, self.end_date, self.start_date
            )));
        }
        Ok(())
    }

    /// Active, the user is eligible, and has not yet taken part.
    #[must_use]
    pub fn open_for_user(&self) -> bool {
        self.status == CampaignStatus::Active
            && self.user_eligible.unwrap_or(false)
            && !self.completed_by_user.unwrap_or(false)
    }
}
