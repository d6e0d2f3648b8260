// SPDX-License-Identifier: Apache-2.0

use chrono::{DateTime, Utc};
use dose_certa_core::RecordId;
use serde::{Deserialize, Serialize};

use crate::validation::{require_text, ValidationError};

labeled_enum! {
    pub enum NewsCategory ("news category") {
        Epidemic => "epidemic",
        Vaccination => "vaccination",
        Health => "health",
        Alert => "alert",
    }
}

labeled_enum! {
    pub enum NewsPriority ("news priority") {
        Low => "low",
        Medium => "medium",
        High => "high",
        Urgent => "urgent",
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewsArticle {
    pub id: RecordId,
    pub title: String,
    pub summary: String,
    pub content: String,
    pub source: String,
    pub author: String,
    pub published_at: DateTime<Utc>,
    pub category: NewsCategory,
    pub priority: NewsPriority,
    #[serde(default)]
    pub tags: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image_url: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub external_url: Option<String>,
    /// Minutes.
    pub read_time: u32,
    #[serde(default)]
    pub views: u64,
}

impl NewsArticle {
    pub fn validate(&self) -> Result<(), ValidationError> {
        require_text("news title", &self.title)?;
        require_text("news source", &self.source)
    }
}
