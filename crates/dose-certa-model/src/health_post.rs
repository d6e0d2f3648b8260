// SPDX-License-Identifier: Apache-2.0

use chrono::{DateTime, NaiveDate, Utc};
use dose_certa_core::RecordId;
use serde::{Deserialize, Serialize};

use crate::validation::{require_text, ValidationError};

labeled_enum! {
    pub enum StockStatus ("stock status") {
        Available => "available",
        Low => "low",
        Expired => "expired",
        Unavailable => "unavailable",
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OpeningHours {
    pub weekdays: String,
    pub weekends: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Coordinates {
    pub lat: f64,
    pub lng: f64,
}

/// A vaccine as listed on a health post card.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PostVaccine {
    pub name: String,
    pub stock: u32,
    pub status: StockStatus,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HealthPost {
    pub id: RecordId,
    pub name: String,
    pub address: String,
    pub phone: String,
    pub distance_km: f64,
    pub opening_hours: OpeningHours,
    #[serde(default)]
    pub available_vaccines: Vec<PostVaccine>,
    pub rating: f64,
    pub wait_time: String,
    pub coordinates: Coordinates,
}

impl HealthPost {
    pub fn validate(&self) -> Result<(), ValidationError> {
        require_text("health post name", &self.name)?;
        if !(0.0..=5.0).contains(&self.rating) {
            return Err(ValidationError(format!(
                "health post {}: rating {} outside 0..=5",
                self.id, self.rating
            )));
        }
        Ok(())
    }

    #[must_use]
    pub fn offers(&self, vaccine: &str) -> bool {
        self.available_vaccines.iter().any(|v| v.name == vaccine)
    }

    #[must_use]
    pub fn has_vaccine_with_status(&self, status: StockStatus) -> bool {
        self.available_vaccines.iter().any(|v| v.status == status)
    }
}

/// Inventory line managed by a professional at one health post.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VaccineStock {
    pub id: RecordId,
    pub post_id: RecordId,
    pub name: String,
    pub current_stock: u32,
    pub min_stock: u32,
    pub max_stock: u32,
    pub expiry_date: NaiveDate,
    pub batch_number: String,
    pub status: StockStatus,
    pub last_updated: DateTime<Utc>,
}

impl VaccineStock {
    pub fn validate(&self) -> Result<(), ValidationError> {
        require_text("stock vaccine name", &self.name)?;
        if self.min_stock > self.max_stock {
            return Err(ValidationError(format!(
                "stock {}: min stock {} exceeds max stock {}",
                self.id, self.min_stock, self.max_stock
            )));
        }
        Ok(())
    }
}
