// SPDX-License-Identifier: Apache-2.0

#![forbid(unsafe_code)]
//! Session service: sign-in, sign-up, sign-out, restore and role checks.

mod config;
mod credentials;
mod error;
mod service;

pub use config::{AuthConfig, CredentialPolicy};
pub use credentials::{hash_password, new_salt, verify_password, SALT_LEN};
pub use error::AuthError;
pub use service::{Session, SessionOrigin, SessionService};

pub const CRATE_NAME: &str = "dose-certa-auth";
