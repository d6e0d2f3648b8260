// SPDX-License-Identifier: Apache-2.0

use std::env;
use std::path::PathBuf;
use std::time::Duration;

use dose_certa_auth::{AuthConfig, CredentialPolicy};
use dose_certa_insights::{AlertRules, DEFAULT_UPCOMING_WINDOW_DAYS};

pub const ENV_DOSE_CERTA_DATA: &str = "DOSE_CERTA_DATA";
pub const ENV_DOSE_CERTA_LATENCY_MS: &str = "DOSE_CERTA_LATENCY_MS";
pub const ENV_DOSE_CERTA_CREDENTIAL_POLICY: &str = "DOSE_CERTA_CREDENTIAL_POLICY";
pub const ENV_DOSE_CERTA_UPCOMING_WINDOW_DAYS: &str = "DOSE_CERTA_UPCOMING_WINDOW_DAYS";
pub const ENV_DOSE_CERTA_LOG_JSON: &str = "DOSE_CERTA_LOG_JSON";

const DATASET_FILE_NAME: &str = "dataset.json";
const MAX_UPCOMING_WINDOW_DAYS: u64 = 3650;
const MAX_LATENCY: Duration = Duration::from_secs(30);

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    pub data_path: PathBuf,
    pub session_dir: PathBuf,
    pub latency: Duration,
    pub credential_policy: CredentialPolicy,
    pub upcoming_window_days: u64,
    pub log_json: bool,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            data_path: dose_certa_core::resolve_cache_dir().join(DATASET_FILE_NAME),
            session_dir: dose_certa_core::resolve_session_dir(),
            latency: Duration::ZERO,
            credential_policy: CredentialPolicy::default(),
            upcoming_window_days: DEFAULT_UPCOMING_WINDOW_DAYS,
            log_json: false,
        }
    }
}

impl AppConfig {
    /// Defaults overlaid with `DOSE_CERTA_*` variables.
    pub fn from_env() -> Result<Self, String> {
        let defaults = Self::default();
        let credential_policy = match env::var(ENV_DOSE_CERTA_CREDENTIAL_POLICY) {
            Ok(raw) if !raw.trim().is_empty() => {
                CredentialPolicy::parse(&raw).map_err(|e| e.to_string())?
            }
            _ => defaults.credential_policy,
        };
        Ok(Self {
            data_path: env_path(ENV_DOSE_CERTA_DATA).unwrap_or(defaults.data_path),
            session_dir: defaults.session_dir,
            latency: env_duration_ms(ENV_DOSE_CERTA_LATENCY_MS, 0),
            credential_policy,
            upcoming_window_days: env_u64(
                ENV_DOSE_CERTA_UPCOMING_WINDOW_DAYS,
                defaults.upcoming_window_days,
            ),
            log_json: env_bool(ENV_DOSE_CERTA_LOG_JSON, defaults.log_json),
        })
    }

    #[must_use]
    pub fn auth(&self) -> AuthConfig {
        AuthConfig {
            credential_policy: self.credential_policy,
            simulated_latency: self.latency,
            ..AuthConfig::default()
        }
    }

    #[must_use]
    pub fn alert_rules(&self) -> AlertRules {
        AlertRules {
            upcoming_window_days: self.upcoming_window_days,
        }
    }
}

pub fn validate_startup_config(config: &AppConfig) -> Result<(), String> {
    if config.data_path.as_os_str().is_empty() {
        return Err("dataset path must not be empty".to_string());
    }
    if config.session_dir.as_os_str().is_empty() {
        return Err("session directory must not be empty".to_string());
    }
    if config.upcoming_window_days == 0 || config.upcoming_window_days > MAX_UPCOMING_WINDOW_DAYS {
        return Err(format!(
            "upcoming window must be between 1 and {MAX_UPCOMING_WINDOW_DAYS} days"
        ));
    }
    if config.latency > MAX_LATENCY {
        return Err(format!(
            "simulated latency must not exceed {}ms",
            MAX_LATENCY.as_millis()
        ));
    }
    Ok(())
}

fn env_path(name: &str) -> Option<PathBuf> {
    env::var(name)
        .ok()
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
        .map(PathBuf::from)
}

fn env_bool(name: &str, default: bool) -> bool {
    env::var(name)
        .ok()
        .and_then(|v| match v.as_str() {
            "1" | "true" | "TRUE" | "yes" | "YES" => Some(true),
            "0" | "false" | "FALSE" | "no" | "NO" => Some(false),
            _ => None,
        })
        .unwrap_or(default)
}

fn env_u64(name: &str, default: u64) -> u64 {
    env::var(name)
        .ok()
        .and_then(|v| v.parse::<u64>().ok())
        .unwrap_or(default)
}

fn env_duration_ms(name: &str, default_ms: u64) -> Duration {
    Duration::from_millis(env_u64(name, default_ms))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config() -> AppConfig {
        AppConfig {
            data_path: PathBuf::from("fixtures/demo.json"),
            session_dir: PathBuf::from("/tmp/dose-certa"),
            ..AppConfig::default()
        }
    }

    #[test]
    fn default_config_passes_startup_checks() {
        assert_eq!(validate_startup_config(&config()), Ok(()));
        assert_eq!(config().alert_rules().upcoming_window_days, 30);
        assert_eq!(
            config().auth().credential_policy,
            CredentialPolicy::Verified
        );
    }

    #[test]
    fn startup_checks_reject_out_of_range_values() {
        let mut zero_window = config();
        zero_window.upcoming_window_days = 0;
        assert!(validate_startup_config(&zero_window).is_err());

        let mut slow = config();
        slow.latency = Duration::from_secs(60);
        assert!(validate_startup_config(&slow)
            .expect_err("latency")
            .contains("latency"));

        let mut no_data = config();
        no_data.data_path = PathBuf::new();
        assert!(validate_startup_config(&no_data).is_err());
    }

    #[test]
    fn auth_config_carries_policy_and_latency() {
        let mut cfg = config();
        cfg.credential_policy = CredentialPolicy::IdentityOnly;
        cfg.latency = Duration::from_millis(5);
        let auth = cfg.auth();
        assert_eq!(auth.credential_policy, CredentialPolicy::IdentityOnly);
        assert_eq!(auth.simulated_latency, Duration::from_millis(5));
        assert_eq!(auth.min_password_len, dose_certa_model::MIN_PASSWORD_LEN);
    }
}
