// SPDX-License-Identifier: Apache-2.0

#![forbid(unsafe_code)]
//! Filtering, searching and ordering over Dose Certa record lists.
//!
//! Every filter returns the subsequence of its input that matches all of its
//! criteria, in input order. Ordering is a separate, stable step.

mod catalog;
mod filters;
mod limits;
mod normalize;
mod query_error;
mod selector;
mod sort;

pub use catalog::{related_campaigns, vaccine_catalog};
pub use filters::{
    filter_records, CampaignFilter, ExamFilter, HealthPostFilter, NewsFilter, PatientFilter,
    RecordFilter, ScheduleFilter, VaccinationFilter,
};
pub use limits::QueryLimits;
pub use normalize::{normalize_search, SearchTerm};
pub use query_error::{QueryError, QueryErrorCode};
pub use selector::{DateRange, Selector};
pub use sort::{sort_records, Dated, SortKey, Titled};

pub const CRATE_NAME: &str = "dose-certa-query";
