// SPDX-License-Identifier: Apache-2.0

use chrono::{DateTime, NaiveDate, Utc};
use dose_certa_model::{StockStatus, VaccineStock};
use serde::Serialize;
use tracing::info;

use crate::error::InsightError;
use crate::progress::capped_percentage;

/// `unavailable` at zero, `low` up to and including the minimum, else `available`.
#[must_use]
pub fn derive_status(current: u32, min: u32) -> StockStatus {
    if current == 0 {
        StockStatus::Unavailable
    } else if current <= min {
        StockStatus::Low
    } else {
        StockStatus::Available
    }
}

/// Derived status on a given day; stock past its expiry date reports `expired`.
#[must_use]
pub fn status_on(stock: &VaccineStock, today: NaiveDate) -> StockStatus {
    if stock.current_stock > 0 && stock.expiry_date < today {
        return StockStatus::Expired;
    }
    derive_status(stock.current_stock, stock.min_stock)
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct StockAdjustment {
    pub stock_id: String,
    pub post_id: String,
    pub vaccine: String,
    pub old_stock: u32,
    pub new_stock: u32,
    pub adjustment: i64,
    pub reason: String,
    pub status: StockStatus,
    pub timestamp: DateTime<Utc>,
}

/// Applies a signed adjustment, flooring at zero, and re-derives the status.
pub fn adjust_stock(
    stock: &mut VaccineStock,
    adjustment: i64,
    reason: &str,
    at: DateTime<Utc>,
) -> Result<StockAdjustment, InsightError> {
    let reason = reason.trim();
    if adjustment == 0 {
        return Err(InsightError::Validation(
            "stock adjustment must be non-zero".to_string(),
        ));
    }
    if reason.is_empty() {
        return Err(InsightError::Validation(
            "stock adjustment requires a reason".to_string(),
        ));
    }

    let old_stock = stock.current_stock;
    let target = i64::from(old_stock).saturating_add(adjustment).max(0);
    let new_stock = u32::try_from(target).unwrap_or(u32::MAX);

    stock.current_stock = new_stock;
    stock.status = derive_status(new_stock, stock.min_stock);
    stock.last_updated = at;

    let event = StockAdjustment {
        stock_id: stock.id.to_string(),
        post_id: stock.post_id.to_string(),
        vaccine: stock.name.clone(),
        old_stock,
        new_stock,
        adjustment,
        reason: reason.to_string(),
        status: stock.status,
        timestamp: at,
    };
    info!(
        stock_id = %event.stock_id,
        post_id = %event.post_id,
        old_stock,
        new_stock,
        adjustment,
        reason = %event.reason,
        status = %event.status,
        "stock adjusted"
    );
    Ok(event)
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct StockSummary {
    pub items: usize,
    pub low: usize,
    pub unavailable: usize,
    pub expired: usize,
    pub total_units: u64,
}

#[must_use]
pub fn stock_summary(stock: &[VaccineStock], today: NaiveDate) -> StockSummary {
    stock.iter().fold(
        StockSummary {
            items: stock.len(),
            ..StockSummary::default()
        },
        |mut acc, item| {
            match status_on(item, today) {
                StockStatus::Low => acc.low += 1,
                StockStatus::Unavailable => acc.unavailable += 1,
                StockStatus::Expired => acc.expired += 1,
                StockStatus::Available => {}
            }
            acc.total_units += u64::from(item.current_stock);
            acc
        },
    )
}

/// Fill level against `maxStock`, capped at 100.
#[must_use]
pub fn fill_percentage(stock: &VaccineStock) -> u64 {
    capped_percentage(u64::from(stock.current_stock), u64::from(stock.max_stock))
}
