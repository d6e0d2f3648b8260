// SPDX-License-Identifier: Apache-2.0

use std::time::Duration;

use dose_certa_model::MIN_PASSWORD_LEN;

use crate::error::AuthError;

/// How `login` treats the submitted password.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum CredentialPolicy {
    /// The password must verify against the stored salted hash.
    #[default]
    Verified,
    /// Email and user type are enough; the password is ignored.
    IdentityOnly,
}

impl CredentialPolicy {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Verified => "verified",
            Self::IdentityOnly => "identity-only",
        }
    }

    pub fn parse(raw: &str) -> Result<Self, AuthError> {
        match raw.trim().to_ascii_lowercase().as_str() {
            "verified" => Ok(Self::Verified),
            "identity-only" | "identity_only" => Ok(Self::IdentityOnly),
            other => Err(AuthError::Validation(format!(
                "unknown credential policy `{other}`; expected verified or identity-only"
            ))),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AuthConfig {
    pub credential_policy: CredentialPolicy,
    pub min_password_len: usize,
    /// Delay applied to login and register, mimicking a remote call.
    pub simulated_latency: Duration,
}

impl Default for AuthConfig {
    fn default() -> Self {
        Self {
            credential_policy: CredentialPolicy::Verified,
            min_password_len: MIN_PASSWORD_LEN,
            simulated_latency: Duration::ZERO,
        }
    }
}
