// SPDX-License-Identifier: Apache-2.0

use std::path::PathBuf;

fn env_path(name: &str) -> Option<PathBuf> {
    let value = std::env::var(name).ok()?;
    let trimmed = value.trim();
    if trimmed.is_empty() {
        None
    } else {
        Some(PathBuf::from(trimmed))
    }
}

#[must_use]
pub fn resolve_cache_dir() -> PathBuf {
    if let Some(explicit) = env_path(crate::ENV_DOSE_CERTA_CACHE_DIR) {
        return explicit;
    }
    if let Some(xdg_cache_home) = env_path("XDG_CACHE_HOME") {
        return xdg_cache_home.join("dose-certa");
    }
    if let Some(home) = env_path("HOME") {
        return home.join(".cache").join("dose-certa");
    }
    PathBuf::from(".dose-certa").join("cache")
}

/// Directory holding the persisted session; defaults to the cache dir.
#[must_use]
pub fn resolve_session_dir() -> PathBuf {
    env_path(crate::ENV_DOSE_CERTA_SESSION_DIR).unwrap_or_else(resolve_cache_dir)
}
