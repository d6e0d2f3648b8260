// SPDX-License-Identifier: Apache-2.0

use std::cmp::Ordering;

use chrono::NaiveDate;
use dose_certa_model::{ExamRecord, NewsArticle, VaccinationCampaign, VaccinationRecord};

use crate::normalize::normalize_search;
use crate::query_error::QueryError;

pub trait Dated {
    fn record_date(&self) -> NaiveDate;
}

pub trait Titled {
    fn record_title(&self) -> &str;
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum SortKey {
    #[default]
    DateDesc,
    DateAsc,
    TitleAsc,
    TitleDesc,
}

impl SortKey {
    pub const ALL: [Self; 4] = [Self::DateDesc, Self::DateAsc, Self::TitleAsc, Self::TitleDesc];

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::DateDesc => "date-desc",
            Self::DateAsc => "date-asc",
            Self::TitleAsc => "title-asc",
            Self::TitleDesc => "title-desc",
        }
    }

    pub fn parse(raw: &str) -> Result<Self, QueryError> {
        let needle = raw.trim();
        Self::ALL
            .into_iter()
            .find(|key| key.as_str().eq_ignore_ascii_case(needle))
            .ok_or_else(|| {
                QueryError::validation(format!(
                    "unknown sort key `{needle}`; expected one of: date-desc, date-asc, title-asc, title-desc"
                ))
            })
    }

    fn compare<T: Dated + Titled>(self, a: &T, b: &T) -> Ordering {
        match self {
            Self::DateDesc => b.record_date().cmp(&a.record_date()),
            Self::DateAsc => a.record_date().cmp(&b.record_date()),
            Self::TitleAsc => compare_titles(a.record_title(), b.record_title()),
            Self::TitleDesc => compare_titles(b.record_title(), a.record_title()),
        }
    }
}

impl std::str::FromStr for SortKey {
    type Err = QueryError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

fn compare_titles(a: &str, b: &str) -> Ordering {
    normalize_search(a)
        .cmp(&normalize_search(b))
        .then_with(|| a.cmp(b))
}

/// Stable: records with equal keys keep their relative order.
#[must_use]
pub fn sort_records<T: Dated + Titled>(mut records: Vec<T>, key: SortKey) -> Vec<T> {
    records.sort_by(|a, b| key.compare(a, b));
    records
}

impl Dated for VaccinationRecord {
    fn record_date(&self) -> NaiveDate {
        self.date
    }
}

impl Titled for VaccinationRecord {
    fn record_title(&self) -> &str {
        &self.vaccine
    }
}

impl Dated for ExamRecord {
    fn record_date(&self) -> NaiveDate {
        self.date
    }
}

impl Titled for ExamRecord {
    fn record_title(&self) -> &str {
        &self.title
    }
}

impl Dated for VaccinationCampaign {
    fn record_date(&self) -> NaiveDate {
        self.start_date
    }
}

impl Titled for VaccinationCampaign {
    fn record_title(&self) -> &str {
        &self.title
    }
}

impl Dated for NewsArticle {
    fn record_date(&self) -> NaiveDate {
        self.published_at.date_naive()
    }
}

impl Titled for NewsArticle {
    fn record_title(&self) -> &str {
        &self.title
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, Clone, PartialEq)]
    struct Row(&'static str, u32);

    impl Dated for Row {
        fn record_date(&self) -> NaiveDate {
            NaiveDate::from_ymd_opt(2024, 1, self.1).expect("date")
        }
    }

    impl Titled for Row {
        fn record_title(&self) -> &str {
            self.0
        }
    }

    #[test]
    fn sort_key_parsing_rejects_unknown_values() {
        assert_eq!(SortKey::parse("title-asc").expect("key"), SortKey::TitleAsc);
        assert!(SortKey::parse("newest").is_err());
    }

    #[test]
    fn title_sort_ignores_case() {
        let rows = vec![Row("beta", 1), Row("Alpha", 2), Row("alpha", 3)];
        let sorted = sort_records(rows, SortKey::TitleAsc);
        assert_eq!(sorted[0], Row("Alpha", 2));
        assert_eq!(sorted[1], Row("alpha", 3));
        assert_eq!(sorted[2], Row("beta", 1));
    }

    #[test]
    fn equal_dates_keep_input_order() {
        let rows = vec![Row("a", 5), Row("b", 5), Row("c", 9)];
        let sorted = sort_records(rows, SortKey::DateDesc);
        assert_eq!(sorted, vec![Row("c", 9), Row("a", 5), Row("b", 5)]);
    }
}
