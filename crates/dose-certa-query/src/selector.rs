// SPDX-License-Identifier: Apache-2.0

use std::str::FromStr;

use chrono::NaiveDate;

use crate::query_error::QueryError;

/// `All` is the identity filter; `Only` keeps records equal to the value.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum Selector<T> {
    #[default]
    All,
    Only(T),
}

impl<T> Selector<T> {
    #[must_use]
    pub fn accepts_with(&self, check: impl FnOnce(&T) -> bool) -> bool {
        match self {
            Self::All => true,
            Self::Only(value) => check(value),
        }
    }
}

impl<T: PartialEq> Selector<T> {
    #[must_use]
    pub fn accepts(&self, value: &T) -> bool {
        self.accepts_with(|wanted| wanted == value)
    }
}

impl<T> Selector<T>
where
    T: FromStr,
    T::Err: std::fmt::Display,
{
    /// `"all"` (any case) or a blank string selects everything.
    pub fn parse(raw: &str) -> Result<Self, QueryError> {
        let trimmed = raw.trim();
        if trimmed.is_empty() || trimmed.eq_ignore_ascii_case("all") {
            return Ok(Self::All);
        }
        trimmed
            .parse::<T>()
            .map(Self::Only)
            .map_err(|err| QueryError::validation(err.to_string()))
    }
}

/// Inclusive on both ends; a missing bound is open.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DateRange {
    pub from: Option<NaiveDate>,
    pub to: Option<NaiveDate>,
}

impl DateRange {
    pub fn new(from: Option<NaiveDate>, to: Option<NaiveDate>) -> Result<Self, QueryError> {
        if let (Some(from), Some(to)) = (from, to) {
            if from > to {
                return Err(QueryError::validation(format!(
                    "date range starts at {from} after it ends at {to}"
                )));
            }
        }
        Ok(Self { from, to })
    }

    #[must_use]
    pub fn contains(&self, date: NaiveDate) -> bool {
        self.from.map_or(true, |from| date >= from) && self.to.map_or(true, |to| date <= to)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use dose_certa_model::VaccinationStatus;

    fn day(d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 10, d).expect("date")
    }

    #[test]
    fn selector_parses_all_and_values() {
        assert_eq!(Selector::<VaccinationStatus>::parse("ALL").expect("all"), Selector::All);
        assert_eq!(
            Selector::<VaccinationStatus>::parse("overdue").expect("value"),
            Selector::Only(VaccinationStatus::Overdue)
        );
        assert!(Selector::<VaccinationStatus>::parse("late").is_err());
    }

    #[test]
    fn date_range_is_inclusive() {
        let range = DateRange::new(Some(day(10)), Some(day(20))).expect("range");
        assert!(range.contains(day(10)));
        assert!(range.contains(day(20)));
        assert!(!range.contains(day(21)));
        assert!(DateRange::default().contains(day(1)));
        assert!(DateRange::new(Some(day(20)), Some(day(10))).is_err());
    }
}
