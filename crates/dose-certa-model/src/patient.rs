// SPDX-License-Identifier: Apache-2.0

use chrono::NaiveDate;
use dose_certa_core::RecordId;
use serde::{Deserialize, Serialize};

use crate::alert::Priority;
use crate::campaign::CampaignStatus;
use crate::validation::{require_text, ValidationError};

labeled_enum! {
    pub enum PatientStatus ("patient status") {
        UpToDate => "up-to-date",
        Overdue => "overdue",
        Upcoming => "upcoming",
    }
}

/// Row of a professional's patient list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PatientSummary {
    pub id: RecordId,
    pub name: String,
    pub cpf: String,
    pub last_vaccination: NaiveDate,
    pub vaccine: String,
    pub next_due: NaiveDate,
    pub status: PatientStatus,
}

impl PatientSummary {
    pub fn validate(&self) -> Result<(), ValidationError> {
        require_text("patient name", &self.name)?;
        let digits = self.cpf.chars().filter(char::is_ascii_digit).count();
        if digits != 11 {
            return Err(ValidationError(format!(
                "patient {}: CPF must have 11 digits",
                self.id
            )));
        }
        Ok(())
    }
}

/// Dose target tracked by a health post for one campaign.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CampaignTarget {
    pub id: RecordId,
    pub name: String,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    pub target: u64,
    pub completed: u64,
    pub status: CampaignStatus,
    pub priority: Priority,
}

impl CampaignTarget {
    pub fn validate(&self) -> Result<(), ValidationError> {
        require_text("campaign target name", &self.name)?;
        if self.end_date < self.start_date {
            return Err(ValidationError(format!(
                "campaign target {}: end date {} precedes start date {}",
                self.id, self.end_date, self.start_date
            )));
        }
        Ok(())
    }
}
