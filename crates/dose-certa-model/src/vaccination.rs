// SPDX-License-Identifier: Apache-2.0

use chrono::NaiveDate;
use dose_certa_core::RecordId;
use serde::{Deserialize, Serialize};

use crate::validation::{require_text, ValidationError};

labeled_enum! {
    pub enum VaccinationStatus ("vaccination status") {
        Completed => "completed",
        Pending => "pending",
        Overdue => "overdue",
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VaccinationRecord {
    pub id: RecordId,
    pub vaccine: String,
    pub date: NaiveDate,
    pub location: String,
    pub batch: String,
    pub status: VaccinationStatus,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub next_dose: Option<NaiveDate>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub dose_number: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub total_doses: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub manufacturer: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub health_professional: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
}

impl VaccinationRecord {
    pub fn validate(&self) -> Result<(), ValidationError> {
        require_text("vaccine", &self.vaccine)?;
        if let Some(dose) = self.dose_number {
            if dose == 0 {
                return Err(ValidationError(format!(
                    "vaccination {}: dose number starts at 1",
                    self.id
                )));
            }
            if let Some(total) = self.total_doses {
                if dose > total {
                    return Err(ValidationError(format!(
                        "vaccination {}: dose {dose} exceeds total doses {total}",
                        self.id
                    )));
                }
            }
        }
        Ok(())
    }
}
