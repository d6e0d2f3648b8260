// SPDX-License-Identifier: Apache-2.0

use chrono::{DateTime, NaiveDate, Utc};
use dose_certa_core::RecordId;
use serde::{Deserialize, Serialize};

use crate::validation::{require_text, ValidationError};

labeled_enum! {
    pub enum Priority ("priority") {
        High => "high",
        Medium => "medium",
        Low => "low",
    }
}

impl Priority {
    /// Larger is more urgent.
    #[must_use]
    pub const fn rank(self) -> u8 {
        match self {
            Self::High => 3,
            Self::Medium => 2,
            Self::Low => 1,
        }
    }
}

labeled_enum! {
    pub enum AlertKind ("alert kind") {
        Overdue => "overdue",
        Upcoming => "upcoming",
        Reminder => "reminder",
        Campaign => "campaign",
        Allergy => "allergy",
        Location => "location",
        Info => "info",
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Alert {
    pub id: RecordId,
    pub kind: AlertKind,
    pub title: String,
    pub message: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub vaccine: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub due_date: Option<NaiveDate>,
    pub priority: Priority,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub action_label: Option<String>,
    #[serde(default)]
    pub dismissible: bool,
    #[serde(default)]
    pub read: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub issued_at: Option<DateTime<Utc>>,
}

impl Alert {
    pub fn validate(&self) -> Result<(), ValidationError> {
        require_text("alert title", &self.title)?;
        require_text("alert message", &self.message)
    }
}
