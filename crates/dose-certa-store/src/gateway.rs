// SPDX-License-Identifier: Apache-2.0

use async_trait::async_trait;
use dose_certa_model::{
    Alert, CampaignTarget, ExamRecord, ExamUpload, HealthPost, NewsArticle, PatientSummary,
    ScheduleEntry, UserAccount, VaccinationCampaign, VaccinationRecord, VaccineStock,
};

use crate::error::StoreError;

/// Read and write access to the record collections.
#[async_trait]
pub trait RecordGateway: Send + Sync {
    async fn fetch_vaccinations(&self) -> Result<Vec<VaccinationRecord>, StoreError>;
    async fn fetch_exams(&self) -> Result<Vec<ExamRecord>, StoreError>;
    async fn fetch_campaigns(&self) -> Result<Vec<VaccinationCampaign>, StoreError>;
    async fn fetch_health_posts(&self) -> Result<Vec<HealthPost>, StoreError>;
    async fn fetch_stock(&self) -> Result<Vec<VaccineStock>, StoreError>;
    async fn fetch_news(&self) -> Result<Vec<NewsArticle>, StoreError>;
    async fn fetch_patients(&self) -> Result<Vec<PatientSummary>, StoreError>;
    async fn fetch_campaign_targets(&self) -> Result<Vec<CampaignTarget>, StoreError>;
    async fn fetch_schedule(&self) -> Result<Vec<ScheduleEntry>, StoreError>;
    async fn fetch_alerts(&self) -> Result<Vec<Alert>, StoreError>;

    /// Validates the upload and stores it with fresh ids and an upload time.
    async fn upload_exam(&self, upload: ExamUpload) -> Result<ExamRecord, StoreError>;

    /// Replaces the stock line with the same id.
    async fn save_stock(&self, item: VaccineStock) -> Result<(), StoreError>;
}

/// User accounts keyed by normalized email.
#[async_trait]
pub trait UserDirectory: Send + Sync {
    async fn find_by_email(&self, email: &str) -> Result<Option<UserAccount>, StoreError>;

    /// Fails with `Conflict` when the email is taken; the existing entry is untouched.
    async fn insert(&self, account: UserAccount) -> Result<(), StoreError>;
}
