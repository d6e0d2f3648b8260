// SPDX-License-Identifier: Apache-2.0

use dose_certa_core::UserId;
use serde::{Deserialize, Serialize};

use crate::validation::{require_text, ValidationError};

pub const MIN_PASSWORD_LEN: usize = 6;

labeled_enum! {
    /// Which portal a user signs into.
    pub enum UserKind ("user type") {
        Citizen => "citizen" | "cidadao",
        Professional => "professional" | "profissional",
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct NotificationPreferences {
    pub email: bool,
    pub sms: bool,
    pub push: bool,
}

impl Default for NotificationPreferences {
    fn default() -> Self {
        Self {
            email: true,
            sms: false,
            push: true,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    pub id: UserId,
    pub name: String,
    pub email: String,
    #[serde(rename = "type")]
    pub kind: UserKind,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub address: Option<String>,
    #[serde(default)]
    pub notifications: NotificationPreferences,
}

/// Salted credential digest, both halves base64 encoded.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PasswordHash {
    pub salt: String,
    pub digest: String,
}

/// Directory entry: the public user plus its credential, if one was set.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserAccount {
    #[serde(flatten)]
    pub user: User,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub password: Option<PasswordHash>,
}

/// Sign-up form as submitted; the password is never serialized.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Registration {
    pub name: String,
    pub email: String,
    pub password: String,
    pub confirm_password: String,
    pub kind: UserKind,
    pub phone: Option<String>,
    pub address: Option<String>,
}

impl Registration {
    pub fn validate(&self, min_password_len: usize) -> Result<(), ValidationError> {
        require_text("name", &self.name)?;
        validate_email(&self.email)?;
        if self.password != self.confirm_password {
            return Err(ValidationError::new("passwords do not match"));
        }
        if self.password.chars().count() < min_password_len {
            return Err(ValidationError(format!(
                "password must have at least {min_password_len} characters"
            )));
        }
        Ok(())
    }
}

/// Canonical email used for directory lookups.
#[must_use]
pub fn normalize_email(raw: &str) -> String {
    raw.trim().to_lowercase()
}

fn validate_email(raw: &str) -> Result<(), ValidationError> {
    let email = raw.trim();
    require_text("email", email)?;
    match email.split_once('@') {
        Some((local, domain)) if !local.is_empty() && !domain.is_empty() && !domain.contains('@') => {
            Ok(())
        }
        _ => Err(ValidationError(format!("email `{email}` is not a valid address"))),
    }
}
