// SPDX-License-Identifier: Apache-2.0

#![forbid(unsafe_code)]
//! Shared kernel for the Dose Certa workspace: error and exit-code model,
//! validated identifiers, clock and id ports, and path resolution.

pub mod domain;
pub mod errors;
pub mod ports;
pub mod types;

pub use domain::config::{resolve_cache_dir, resolve_session_dir};
pub use errors::{Error, ErrorCode, ExitCode, IdKind, MachineError, Result};
pub use ports::boundary::{
    ClockPort, FixedClock, IdSource, SequenceIdSource, SystemClock, UuidIdSource,
};
pub use types::ids::{IdPrefix, RecordId, UserId};

pub const CRATE_NAME: &str = "dose-certa-core";

pub const ENV_DOSE_CERTA_LOG_LEVEL: &str = "DOSE_CERTA_LOG_LEVEL";
pub const ENV_DOSE_CERTA_CACHE_DIR: &str = "DOSE_CERTA_CACHE_DIR";
pub const ENV_DOSE_CERTA_SESSION_DIR: &str = "DOSE_CERTA_SESSION_DIR";
