// SPDX-License-Identifier: Apache-2.0

#![forbid(unsafe_code)]
//! Record access for Dose Certa: gateway and directory traits, an in-memory
//! implementation loaded from a dataset file, and session persistence.

mod error;
mod files;
mod gateway;
mod memory;
mod session;

pub use error::{StoreError, StoreErrorCode};
pub use files::{read_dataset, write_atomic, write_dataset};
pub use gateway::{RecordGateway, UserDirectory};
pub use memory::InMemoryGateway;
pub use session::{FileSessionStore, MemorySessionStore, SessionStore, SESSION_FILE_NAME};

pub const CRATE_NAME: &str = "dose-certa-store";
