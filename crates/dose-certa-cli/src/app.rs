// SPDX-License-Identifier: Apache-2.0

use std::sync::Arc;

use chrono::NaiveDate;
use dose_certa_auth::SessionService;
use dose_certa_core::{ClockPort, FixedClock, IdSource, SystemClock, UuidIdSource};
use dose_certa_insights::AlertRules;
use dose_certa_query::QueryLimits;
use dose_certa_store::{
    write_dataset, FileSessionStore, InMemoryGateway, RecordGateway, SessionStore, UserDirectory,
};
use tracing::debug;

use crate::config::AppConfig;
use crate::errors::CliError;

/// Everything one command needs: the loaded dataset, the restored session and
/// the clock and id authorities.
pub(crate) struct App {
    config: AppConfig,
    pub(crate) clock: Arc<dyn ClockPort>,
    pub(crate) ids: Arc<dyn IdSource>,
    gateway: Arc<InMemoryGateway>,
    pub(crate) sessions: SessionService,
    pub(crate) limits: QueryLimits,
}

impl App {
    pub(crate) fn open(config: AppConfig, today: Option<NaiveDate>) -> Result<Self, CliError> {
        let clock: Arc<dyn ClockPort> = match today {
            Some(date) => Arc::new(FixedClock::at_date(date)),
            None => Arc::new(SystemClock),
        };
        let ids: Arc<dyn IdSource> = Arc::new(UuidIdSource);

        let gateway = InMemoryGateway::from_file(&config.data_path, ids.clone(), clock.clone())
            .map_err(|err| {
                CliError::dependency(format!("failed to load dataset: {}", err.message))
                    .with_detail("path", &config.data_path.display().to_string())
            })?
            .with_latency(config.latency);
        let gateway = Arc::new(gateway);

        let storage: Arc<dyn SessionStore> = Arc::new(FileSessionStore::new(&config.session_dir));
        let directory: Arc<dyn UserDirectory> = gateway.clone();
        let mut sessions = SessionService::new(directory, storage, ids.clone(), config.auth());
        sessions.restore()?;

        Ok(Self {
            config,
            clock,
            ids,
            gateway,
            sessions,
            limits: QueryLimits::default(),
        })
    }

    pub(crate) fn records(&self) -> &dyn RecordGateway {
        self.gateway.as_ref()
    }

    pub(crate) fn today(&self) -> NaiveDate {
        self.clock.today()
    }

    pub(crate) fn alert_rules(&self) -> AlertRules {
        self.config.alert_rules()
    }

    /// Writes the gateway's current dataset back to the dataset file.
    pub(crate) async fn persist(&self) -> Result<(), CliError> {
        let snapshot = self.gateway.snapshot().await;
        write_dataset(&self.config.data_path, &snapshot)?;
        debug!(path = %self.config.data_path.display(), "dataset written");
        Ok(())
    }
}
