// SPDX-License-Identifier: Apache-2.0

use std::path::Path;
use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use dose_certa_core::{ClockPort, IdPrefix, IdSource, RecordId};
use dose_certa_model::{
    normalize_email, Alert, CampaignTarget, Dataset, ExamFile, ExamRecord, ExamUpload,
    HealthPost, NewsArticle, PatientSummary, ScheduleEntry, UserAccount, VaccinationCampaign,
    VaccinationRecord, VaccineStock,
};
use tokio::sync::RwLock;
use tracing::{debug, info, instrument};

use crate::error::{StoreError, StoreErrorCode};
use crate::files::read_dataset;
use crate::gateway::{RecordGateway, UserDirectory};

/// Gateway and directory over one in-memory [`Dataset`].
pub struct InMemoryGateway {
    data: RwLock<Dataset>,
    ids: Arc<dyn IdSource>,
    clock: Arc<dyn ClockPort>,
    latency: Duration,
}

impl InMemoryGateway {
    #[must_use]
    pub fn new(dataset: Dataset, ids: Arc<dyn IdSource>, clock: Arc<dyn ClockPort>) -> Self {
        Self {
            data: RwLock::new(dataset),
            ids,
            clock,
            latency: Duration::ZERO,
        }
    }

    pub fn from_file(
        path: &Path,
        ids: Arc<dyn IdSource>,
        clock: Arc<dyn ClockPort>,
    ) -> Result<Self, StoreError> {
        let dataset = read_dataset(path)?;
        info!(path = %path.display(), users = dataset.users.len(), "dataset loaded");
        Ok(Self::new(dataset, ids, clock))
    }

    /// Delay applied before every gateway or directory call.
    #[must_use]
    pub fn with_latency(mut self, latency: Duration) -> Self {
        self.latency = latency;
        self
    }

    pub async fn snapshot(&self) -> Dataset {
        self.data.read().await.clone()
    }

    async fn enter(&self) {
        if !self.latency.is_zero() {
            tokio::time::sleep(self.latency).await;
        }
    }

    async fn read<T>(&self, pick: impl FnOnce(&Dataset) -> T) -> T {
        self.enter().await;
        pick(&*self.data.read().await)
    }

    fn new_record_id(&self, prefix: IdPrefix) -> Result<RecordId, StoreError> {
        Ok(RecordId::mint(prefix, &*self.ids)?)
    }
}

#[async_trait]
impl RecordGateway for InMemoryGateway {
    async fn fetch_vaccinations(&self) -> Result<Vec<VaccinationRecord>, StoreError> {
        Ok(self.read(|d| d.vaccinations.clone()).await)
    }

    async fn fetch_exams(&self) -> Result<Vec<ExamRecord>, StoreError> {
        Ok(self.read(|d| d.exams.clone()).await)
    }

    async fn fetch_campaigns(&self) -> Result<Vec<VaccinationCampaign>, StoreError> {
        Ok(self.read(|d| d.campaigns.clone()).await)
    }

    async fn fetch_health_posts(&self) -> Result<Vec<HealthPost>, StoreError> {
        Ok(self.read(|d| d.health_posts.clone()).await)
    }

    async fn fetch_stock(&self) -> Result<Vec<VaccineStock>, StoreError> {
        Ok(self.read(|d| d.stock.clone()).await)
    }

    async fn fetch_news(&self) -> Result<Vec<NewsArticle>, StoreError> {
        Ok(self.read(|d| d.news.clone()).await)
    }

    async fn fetch_patients(&self) -> Result<Vec<PatientSummary>, StoreError> {
        Ok(self.read(|d| d.patients.clone()).await)
    }

    async fn fetch_campaign_targets(&self) -> Result<Vec<CampaignTarget>, StoreError> {
        Ok(self.read(|d| d.campaign_targets.clone()).await)
    }

    async fn fetch_schedule(&self) -> Result<Vec<ScheduleEntry>, StoreError> {
        Ok(self.read(|d| d.schedule.clone()).await)
    }

    async fn fetch_alerts(&self) -> Result<Vec<Alert>, StoreError> {
        Ok(self.read(|d| d.alerts.clone()).await)
    }

    #[instrument(skip(self, upload), fields(title = %upload.title, files = upload.files.len()))]
    async fn upload_exam(&self, upload: ExamUpload) -> Result<ExamRecord, StoreError> {
        self.enter().await;
        let (category, date, types) = upload.validate()?;

        let mut files = Vec::with_capacity(upload.files.len());
        for (draft, mime_type) in upload.files.into_iter().zip(types) {
            files.push(ExamFile {
                id: self.new_record_id(IdPrefix::ExamFile)?,
                name: draft.name,
                size: draft.size,
                mime_type,
                url: draft.url,
            });
        }
        let record = ExamRecord {
            id: self.new_record_id(IdPrefix::Exam)?,
            title: upload.title.trim().to_string(),
            category,
            date,
            doctor: upload.doctor.filter(|d| !d.trim().is_empty()),
            notes: upload.notes.filter(|n| !n.trim().is_empty()),
            files,
            upload_date: self.clock.now(),
        };

        self.data.write().await.exams.insert(0, record.clone());
        info!(exam_id = %record.id, "exam uploaded");
        Ok(record)
    }

    #[instrument(skip(self, item), fields(stock_id = %item.id))]
    async fn save_stock(&self, item: VaccineStock) -> Result<(), StoreError> {
        self.enter().await;
        let mut data = self.data.write().await;
        let slot = data
            .stock
            .iter_mut()
            .find(|s| s.id == item.id)
            .ok_or_else(|| {
                StoreError::new(
                    StoreErrorCode::NotFound,
                    format!("no stock line with id `{}`", item.id),
                )
            })?;
        *slot = item;
        debug!("stock line replaced");
        Ok(())
    }
}

#[async_trait]
impl UserDirectory for InMemoryGateway {
    async fn find_by_email(&self, email: &str) -> Result<Option<UserAccount>, StoreError> {
        let needle = normalize_email(email);
        Ok(self
            .read(|d| {
                d.users
                    .iter()
                    .find(|a| normalize_email(&a.user.email) == needle)
                    .cloned()
            })
            .await)
    }

    #[instrument(skip(self, account), fields(user_id = %account.user.id))]
    async fn insert(&self, account: UserAccount) -> Result<(), StoreError> {
        self.enter().await;
        let needle = normalize_email(&account.user.email);
        let mut data = self.data.write().await;
        if data
            .users
            .iter()
            .any(|a| normalize_email(&a.user.email) == needle)
        {
            return Err(StoreError::new(
                StoreErrorCode::Conflict,
                format!("email `{needle}` is already registered"),
            ));
        }
        data.users.push(account);
        info!("user registered");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use dose_certa_core::{FixedClock, SequenceIdSource};
    use dose_certa_model::{ExamCategory, ExamFileDraft};

    fn gateway() -> InMemoryGateway {
        let clock = FixedClock::at_date(chrono::NaiveDate::from_ymd_opt(2024, 10, 10).expect("date"));
        InMemoryGateway::new(
            Dataset::default(),
            Arc::new(SequenceIdSource::new("t")),
            Arc::new(clock),
        )
    }

    #[tokio::test]
    async fn upload_assigns_ids_and_prepends() {
        let gateway = gateway();
        let upload = ExamUpload {
            title: " Glicemia ".to_string(),
            category: Some(ExamCategory::Blood),
            date: chrono::NaiveDate::from_ymd_opt(2024, 10, 1),
            doctor: Some(String::new()),
            notes: None,
            files: vec![ExamFileDraft {
                name: "glicemia.pdf".to_string(),
                size: 1000,
                mime_type: "application/pdf".to_string(),
                url: "file:///glicemia.pdf".to_string(),
            }],
        };
        let record = gateway.upload_exam(upload).await.expect("upload");
        assert_eq!(record.files[0].id.as_str(), "file-t-1");
        assert_eq!(record.id.as_str(), "exam-t-2");
        assert_eq!(record.title, "Glicemia");
        assert_eq!(record.doctor, None);
        assert_eq!(gateway.fetch_exams().await.expect("exams")[0], record);
    }

    #[tokio::test]
    async fn invalid_upload_changes_nothing() {
        let gateway = gateway();
        let err = gateway
            .upload_exam(ExamUpload::default())
            .await
            .expect_err("no files");
        assert_eq!(err.code, StoreErrorCode::Validation);
        assert!(gateway.fetch_exams().await.expect("exams").is_empty());
    }
}
