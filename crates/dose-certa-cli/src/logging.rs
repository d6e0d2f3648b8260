// SPDX-License-Identifier: Apache-2.0

use dose_certa_core::ENV_DOSE_CERTA_LOG_LEVEL;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::LogFlags;

const DEFAULT_LOG_LEVEL: &str = "warn";

/// Flags win over `DOSE_CERTA_LOG_LEVEL`, which wins over `RUST_LOG`.
fn log_filter(flags: LogFlags) -> EnvFilter {
    if flags.quiet {
        return EnvFilter::new("error");
    }
    match flags.verbose {
        0 => {}
        1 => return EnvFilter::new("info"),
        _ => return EnvFilter::new("debug"),
    }
    if let Ok(level) = std::env::var(ENV_DOSE_CERTA_LOG_LEVEL) {
        if !level.trim().is_empty() {
            return EnvFilter::new(level.trim());
        }
    }
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOG_LEVEL))
}

pub(crate) fn init_tracing(flags: LogFlags, log_json: bool) {
    let filter = log_filter(flags);
    let result = if log_json {
        tracing_subscriber::registry()
            .with(filter)
            .with(
                tracing_subscriber::fmt::layer()
                    .json()
                    .with_writer(std::io::stderr),
            )
            .try_init()
    } else {
        tracing_subscriber::registry()
            .with(filter)
            .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
            .try_init()
    };
    if result.is_err() {
        tracing::debug!("tracing subscriber already installed");
    }
}
