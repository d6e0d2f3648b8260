// SPDX-License-Identifier: Apache-2.0

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::errors::{Error, IdKind, Result};
use crate::ports::boundary::IdSource;

pub const ID_MAX_LEN: usize = 64;

/// Leading segment of every identifier the workspace derives or mints itself.
/// Dataset authors pick their own ids but must not claim a derived-alert prefix.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum IdPrefix {
    User,
    Exam,
    ExamFile,
    OverdueAlert,
    UpcomingAlert,
}

impl IdPrefix {
    pub const DERIVED_ALERTS: [Self; 2] = [Self::OverdueAlert, Self::UpcomingAlert];

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::User => "user",
            Self::Exam => "exam",
            Self::ExamFile => "file",
            Self::OverdueAlert => "overdue",
            Self::UpcomingAlert => "upcoming",
        }
    }

    fn join(self, suffix: &str) -> String {
        format!("{}-{suffix}", self.as_str())
    }

    fn leads(self, value: &str) -> bool {
        value
            .strip_prefix(self.as_str())
            .is_some_and(|rest| rest.starts_with('-'))
    }
}

/// Identifier of any stored record (vaccination, exam, campaign, post, ...).
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct RecordId(String);

/// Directory identifier; minted ids always carry the `user-` prefix.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct UserId(String);

impl RecordId {
    pub fn new(value: impl Into<String>) -> Result<Self> {
        let value = value.into();
        validate_id(IdKind::Record, &value)?;
        Ok(Self(value))
    }

    /// `<prefix>-<suffix>`, e.g. the `overdue-vac-3` alert derived from `vac-3`.
    pub fn prefixed(prefix: IdPrefix, suffix: &str) -> Result<Self> {
        Self::new(prefix.join(suffix))
    }

    /// A fresh id for a record created in this process.
    pub fn mint(prefix: IdPrefix, ids: &dyn IdSource) -> Result<Self> {
        Self::prefixed(prefix, &ids.next_id())
    }

    #[must_use]
    pub fn has_prefix(&self, prefix: IdPrefix) -> bool {
        prefix.leads(&self.0)
    }

    /// True for ids in the namespace reserved for generated alerts.
    #[must_use]
    pub fn is_derived_alert(&self) -> bool {
        IdPrefix::DERIVED_ALERTS.iter().any(|p| self.has_prefix(*p))
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl UserId {
    pub fn new(value: impl Into<String>) -> Result<Self> {
        let value = value.into();
        validate_id(IdKind::User, &value)?;
        Ok(Self(value))
    }

    pub fn mint(ids: &dyn IdSource) -> Result<Self> {
        Self::new(IdPrefix::User.join(&ids.next_id()))
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

fn validate_id(kind: IdKind, value: &str) -> Result<()> {
    let reject = |reason: &'static str| {
        Err(Error::InvalidIdentifier {
            kind,
            value: value.to_owned(),
            reason,
        })
    };
    if value.is_empty() {
        return reject("must not be empty");
    }
    if value.len() > ID_MAX_LEN {
        return reject("must be at most 64 characters");
    }
    if !value
        .chars()
        .all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '_')
    {
        return reject("must contain only [A-Za-z0-9_-]");
    }
    if value.ends_with('-') {
        return reject("must not end with a separator");
    }
    Ok(())
}

macro_rules! impl_id_traits {
    ($name:ident) => {
        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(&self.0)
            }
        }

        impl From<$name> for String {
            fn from(value: $name) -> Self {
                value.0
            }
        }

        impl TryFrom<String> for $name {
            type Error = Error;

            fn try_from(value: String) -> Result<Self> {
                Self::new(value)
            }
        }

        impl FromStr for $name {
            type Err = Error;

            fn from_str(s: &str) -> Result<Self> {
                Self::new(s)
            }
        }
    };
}

impl_id_traits!(RecordId);
impl_id_traits!(UserId);

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ports::boundary::SequenceIdSource;

    #[test]
    fn minted_ids_carry_their_prefix() {
        let ids = SequenceIdSource::new("n");
        assert_eq!(UserId::mint(&ids).expect("user").as_str(), "user-n-1");
        let exam = RecordId::mint(IdPrefix::Exam, &ids).expect("exam");
        assert_eq!(exam.as_str(), "exam-n-2");
        assert!(exam.has_prefix(IdPrefix::Exam));
        assert!(!exam.has_prefix(IdPrefix::ExamFile));
    }

    #[test]
    fn derived_alert_namespace_needs_the_separator() {
        let derived = RecordId::prefixed(IdPrefix::OverdueAlert, "vac-3").expect("id");
        assert_eq!(derived.as_str(), "overdue-vac-3");
        assert!(derived.is_derived_alert());
        assert!(RecordId::new("upcoming-vac-1")
            .expect("id")
            .is_derived_alert());
        assert!(!RecordId::new("upcomingflu").expect("id").is_derived_alert());
        assert!(!RecordId::new("campaign-flu").expect("id").is_derived_alert());
    }

    #[test]
    fn trailing_separator_is_rejected() {
        let err = RecordId::new("vac-").expect_err("trailing dash");
        assert!(err.to_string().contains("record id"));
    }
}
