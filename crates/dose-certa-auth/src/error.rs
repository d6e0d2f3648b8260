// SPDX-License-Identifier: Apache-2.0

use std::fmt;

use dose_certa_model::UserKind;
use dose_certa_store::{StoreError, StoreErrorCode};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AuthError {
    Validation(String),
    InvalidCredentials,
    EmailAlreadyRegistered(String),
    NotLoggedIn,
    Forbidden { required: UserKind, actual: UserKind },
    Storage(StoreError),
}

impl fmt::Display for AuthError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Validation(msg) => write!(f, "{msg}"),
            Self::InvalidCredentials => write!(f, "invalid credentials"),
            Self::EmailAlreadyRegistered(email) => {
                write!(f, "email `{email}` is already registered")
            }
            Self::NotLoggedIn => write!(f, "no user is logged in"),
            Self::Forbidden { required, actual } => write!(
                f,
                "this operation requires a {required} account; the current user is a {actual}"
            ),
            Self::Storage(err) => write!(f, "session storage failed: {err}"),
        }
    }
}

impl std::error::Error for AuthError {}

impl From<StoreError> for AuthError {
    fn from(value: StoreError) -> Self {
        match value.code {
            StoreErrorCode::Validation => Self::Validation(value.message),
            _ => Self::Storage(value),
        }
    }
}

impl From<dose_certa_model::ValidationError> for AuthError {
    fn from(value: dose_certa_model::ValidationError) -> Self {
        Self::Validation(value.0)
    }
}

impl From<dose_certa_core::Error> for AuthError {
    fn from(value: dose_certa_core::Error) -> Self {
        Self::Validation(value.to_string())
    }
}
