// SPDX-License-Identifier: Apache-2.0

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::validation::{require_text, ValidationError};

labeled_enum! {
    pub enum ScheduleStatus ("schedule status") {
        Completed => "completed",
        Pending => "pending",
        Overdue => "overdue",
        NotApplicable => "not_applicable",
    }
}

/// Entry of the national immunization calendar, annotated for one user.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScheduleEntry {
    pub id: String,
    pub vaccine: String,
    pub age_group: String,
    pub recommended_age: String,
    pub doses: u32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub interval: Option<String>,
    #[serde(default)]
    pub notes: String,
    pub user_status: ScheduleStatus,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub user_last_dose: Option<NaiveDate>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub user_next_due: Option<NaiveDate>,
}

impl ScheduleEntry {
    pub fn validate(&self) -> Result<(), ValidationError> {
        require_text("schedule id", &self.id)?;
        require_text("schedule vaccine", &self.vaccine)?;
        if self.doses == 0 {
            return Err(ValidationError(format!(
                "schedule {}: a calendar entry needs at least one dose",
                self.id
            )));
        }
        if let (Some(last), Some(next)) = (self.user_last_dose, self.user_next_due) {
            if next < last {
                return Err(ValidationError(format!(
                    "schedule {}: next due {next} precedes last dose {last}",
                    self.id
                )));
            }
        }
        Ok(())
    }
}

