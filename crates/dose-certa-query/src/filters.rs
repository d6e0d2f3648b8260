// SPDX-License-Identifier: Apache-2.0

use dose_certa_model::{
    CampaignStatus, ExamCategory, ExamRecord, HealthPost, NewsArticle, NewsCategory,
    NewsPriority, PatientStatus, PatientSummary, Priority, ScheduleEntry, ScheduleStatus,
    StockStatus, VaccinationCampaign, VaccinationRecord, VaccinationStatus,
};

use crate::normalize::SearchTerm;
use crate::selector::{DateRange, Selector};

pub trait RecordFilter<T> {
    fn matches(&self, record: &T) -> bool;
}

/// Keeps every record the filter accepts, in input order.
#[must_use]
pub fn filter_records<T: Clone, F: RecordFilter<T>>(records: &[T], filter: &F) -> Vec<T> {
    records
        .iter()
        .filter(|record| filter.matches(record))
        .cloned()
        .collect()
}

#[derive(Debug, Clone, Default)]
pub struct VaccinationFilter {
    pub search: SearchTerm,
    pub status: Selector<VaccinationStatus>,
    pub dates: DateRange,
}

impl RecordFilter<VaccinationRecord> for VaccinationFilter {
    fn matches(&self, record: &VaccinationRecord) -> bool {
        self.status.accepts(&record.status)
            && self.dates.contains(record.date)
            && self.search.matches_any(
                [
                    Some(record.vaccine.as_str()),
                    Some(record.location.as_str()),
                    Some(record.batch.as_str()),
                    record.notes.as_deref(),
                    record.manufacturer.as_deref(),
                    record.health_professional.as_deref(),
                ]
                .into_iter()
                .flatten(),
            )
    }
}

#[derive(Debug, Clone, Default)]
pub struct ExamFilter {
    pub search: SearchTerm,
    pub category: Selector<ExamCategory>,
    pub dates: DateRange,
}

impl RecordFilter<ExamRecord> for ExamFilter {
    fn matches(&self, record: &ExamRecord) -> bool {
        self.category.accepts(&record.category)
            && self.dates.contains(record.date)
            && self.search.matches_any(
                [
                    Some(record.title.as_str()),
                    record.doctor.as_deref(),
                    record.notes.as_deref(),
                ]
                .into_iter()
                .flatten(),
            )
    }
}

#[derive(Debug, Clone, Default)]
pub struct CampaignFilter {
    pub search: SearchTerm,
    pub status: Selector<CampaignStatus>,
    pub priority: Selector<Priority>,
    /// Campaigns whose running period overlaps the range.
    pub dates: DateRange,
}

impl RecordFilter<VaccinationCampaign> for CampaignFilter {
    fn matches(&self, record: &VaccinationCampaign) -> bool {
        let overlaps = self.dates.from.map_or(true, |from| record.end_date >= from)
            && self.dates.to.map_or(true, |to| record.start_date <= to);
        self.status.accepts(&record.status)
            && self.priority.accepts(&record.priority)
            && overlaps
            && self.search.matches_any(
                [
                    record.title.as_str(),
                    record.description.as_str(),
                    record.vaccine.as_str(),
                ]
                .into_iter()
                .chain(record.target_audience.iter().map(String::as_str)),
            )
    }
}

#[derive(Debug, Clone, Default)]
pub struct NewsFilter {
    pub search: SearchTerm,
    pub category: Selector<NewsCategory>,
    pub priority: Selector<NewsPriority>,
    pub dates: DateRange,
}

impl RecordFilter<NewsArticle> for NewsFilter {
    fn matches(&self, record: &NewsArticle) -> bool {
        self.category.accepts(&record.category)
            && self.priority.accepts(&record.priority)
            && self.dates.contains(record.published_at.date_naive())
            && self.search.matches_any(
                [record.title.as_str(), record.summary.as_str()]
                    .into_iter()
                    .chain(record.tags.iter().map(String::as_str)),
            )
    }
}

#[derive(Debug, Clone, Default)]
pub struct HealthPostFilter {
    pub search: SearchTerm,
    /// Exact vaccine name offered by the post.
    pub vaccine: Selector<String>,
    /// At least one offered vaccine has this stock status.
    pub availability: Selector<StockStatus>,
}

impl RecordFilter<HealthPost> for HealthPostFilter {
    fn matches(&self, record: &HealthPost) -> bool {
        self.vaccine.accepts_with(|name| record.offers(name))
            && self
                .availability
                .accepts_with(|status| record.has_vaccine_with_status(*status))
            && self
                .search
                .matches_any([record.name.as_str(), record.address.as_str()])
    }
}

#[derive(Debug, Clone, Default)]
pub struct PatientFilter {
    pub search: SearchTerm,
    pub status: Selector<PatientStatus>,
}

impl RecordFilter<PatientSummary> for PatientFilter {
    fn matches(&self, record: &PatientSummary) -> bool {
        self.status.accepts(&record.status)
            && self.search.matches_any([
                record.name.as_str(),
                record.cpf.as_str(),
                record.vaccine.as_str(),
            ])
    }
}

#[derive(Debug, Clone, Default)]
pub struct ScheduleFilter {
    pub status: Selector<ScheduleStatus>,
}

impl RecordFilter<ScheduleEntry> for ScheduleFilter {
    fn matches(&self, record: &ScheduleEntry) -> bool {
        self.status.accepts(&record.user_status)
    }
}
