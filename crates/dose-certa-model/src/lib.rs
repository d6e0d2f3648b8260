// SPDX-License-Identifier: Apache-2.0

#![forbid(unsafe_code)]
//! Dose Certa record model.
//!
//! Every entity serializes with the camelCase field names used by dataset
//! files, and every enum parses from the same label it serializes to.

#[macro_use]
mod labels;

mod alert;
mod campaign;
mod dataset;
mod exam;
mod health_post;
mod news;
mod patient;
mod schedule;
mod user;
mod vaccination;
mod validation;

pub use alert::{Alert, AlertKind, Priority};
pub use campaign::{CampaignStatus, VaccinationCampaign};
pub use dataset::Dataset;
pub use exam::{
    ExamCategory, ExamFile, ExamFileDraft, ExamMimeType, ExamRecord, ExamUpload,
    MAX_EXAM_FILE_BYTES,
};
pub use health_post::{
    Coordinates, HealthPost, OpeningHours, PostVaccine, StockStatus, VaccineStock,
};
pub use news::{NewsArticle, NewsCategory, NewsPriority};
pub use patient::{CampaignTarget, PatientStatus, PatientSummary};
pub use schedule::{ScheduleEntry, ScheduleStatus};
pub use user::{
    normalize_email, NotificationPreferences, PasswordHash, Registration, User, UserAccount,
    UserKind, MIN_PASSWORD_LEN,
};
pub use vaccination::{VaccinationRecord, VaccinationStatus};
pub use validation::ValidationError;

pub const CRATE_NAME: &str = "dose-certa-model";
