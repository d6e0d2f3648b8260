// SPDX-License-Identifier: Apache-2.0

#![forbid(unsafe_code)]
//! Derived views over Dose Certa records: alerts, progress percentages,
//! stock status and dashboard aggregates.

mod alerts;
mod dashboard;
mod error;
mod format;
mod progress;
mod stock;

pub use alerts::{
    generate_record_alerts, rank_alerts, vaccination_alerts, AlertFeed, AlertRules,
    NotificationCategory, NotificationSettings, DEFAULT_UPCOMING_WINDOW_DAYS,
};
pub use dashboard::{
    citizen_summary, health_post_summary, professional_summary, CitizenSummary,
    HealthPostSummary, ProfessionalSummary, TargetProgress,
};
pub use error::InsightError;
pub use format::format_file_size;
pub use progress::{
    campaign_progress, capped_percentage, percentage, target_progress, CampaignProgress,
};
pub use stock::{
    adjust_stock, derive_status, fill_percentage, status_on, stock_summary, StockAdjustment,
    StockSummary,
};

pub const CRATE_NAME: &str = "dose-certa-insights";
