// SPDX-License-Identifier: Apache-2.0

use std::fmt;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InsightError {
    Validation(String),
    UnknownAlert(String),
    NotDismissible(String),
}

impl fmt::Display for InsightError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Validation(msg) => write!(f, "{msg}"),
            Self::UnknownAlert(id) => write!(f, "no alert with id `{id}`"),
            Self::NotDismissible(id) => write!(f, "alert `{id}` cannot be dismissed"),
        }
    }
}

impl std::error::Error for InsightError {}

impl From<dose_certa_core::Error> for InsightError {
    fn from(value: dose_certa_core::Error) -> Self {
        Self::Validation(value.to_string())
    }
}
