// SPDX-License-Identifier: Apache-2.0

use std::sync::Arc;

use dose_certa_core::{IdSource, UserId};
use dose_certa_model::{
    normalize_email, NotificationPreferences, Registration, User, UserAccount, UserKind,
};
use dose_certa_store::{SessionStore, StoreErrorCode, UserDirectory};
use tracing::{debug, info, instrument, warn};

use crate::config::{AuthConfig, CredentialPolicy};
use crate::credentials::{hash_password, new_salt, verify_password};
use crate::error::AuthError;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionOrigin {
    Login,
    Registration,
    Restored,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Session {
    pub user: User,
    pub origin: SessionOrigin,
}

/// Owns the current session and keeps session storage in step with it.
pub struct SessionService {
    directory: Arc<dyn UserDirectory>,
    storage: Arc<dyn SessionStore>,
    ids: Arc<dyn IdSource>,
    config: AuthConfig,
    session: Option<Session>,
}

impl SessionService {
    #[must_use]
    pub fn new(
        directory: Arc<dyn UserDirectory>,
        storage: Arc<dyn SessionStore>,
        ids: Arc<dyn IdSource>,
        config: AuthConfig,
    ) -> Self {
        Self {
            directory,
            storage,
            ids,
            config,
            session: None,
        }
    }

    #[must_use]
    pub fn current(&self) -> Option<&Session> {
        self.session.as_ref()
    }

    #[must_use]
    pub fn config(&self) -> &AuthConfig {
        &self.config
    }

    /// Loads the persisted user. An unreadable payload is removed and treated
    /// as signed out.
    pub fn restore(&mut self) -> Result<Option<&Session>, AuthError> {
        match self.storage.load() {
            Ok(Some(user)) => {
                debug!(user_id = %user.id, "session restored");
                self.session = Some(Session {
                    user,
                    origin: SessionOrigin::Restored,
                });
            }
            Ok(None) => self.session = None,
            Err(err) if err.code == StoreErrorCode::Corrupt => {
                warn!(error = %err, "discarding corrupt session");
                self.storage.clear()?;
                self.session = None;
            }
            Err(err) => return Err(err.into()),
        }
        Ok(self.session.as_ref())
    }

    #[instrument(skip(self, password))]
    pub async fn login(
        &mut self,
        email: &str,
        password: &str,
        kind: UserKind,
    ) -> Result<&Session, AuthError> {
        self.simulate_latency().await;

        let account = self
            .directory
            .find_by_email(email)
            .await?
            .filter(|account| account.user.kind == kind)
            .ok_or(AuthError::InvalidCredentials)?;

        if self.config.credential_policy == CredentialPolicy::Verified {
            let verified = account
                .password
                .as_ref()
                .is_some_and(|stored| verify_password(password, stored));
            if !verified {
                warn!("password rejected");
                return Err(AuthError::InvalidCredentials);
            }
        }

        info!(user_id = %account.user.id, "logged in");
        self.start(account.user, SessionOrigin::Login)
    }

    #[instrument(skip(self, registration), fields(kind = %registration.kind))]
    pub async fn register(&mut self, registration: Registration) -> Result<&Session, AuthError> {
        registration.validate(self.config.min_password_len)?;
        self.simulate_latency().await;

        let email = normalize_email(&registration.email);
        if self.directory.find_by_email(&email).await?.is_some() {
            return Err(AuthError::EmailAlreadyRegistered(email));
        }

        let user = User {
            id: UserId::mint(&*self.ids)?,
            name: registration.name.trim().to_string(),
            email: email.clone(),
            kind: registration.kind,
            phone: registration.phone.filter(|p| !p.trim().is_empty()),
            address: registration.address.filter(|a| !a.trim().is_empty()),
            notifications: NotificationPreferences::default(),
        };
        let account = UserAccount {
            user: user.clone(),
            password: Some(hash_password(&registration.password, &new_salt())?),
        };
        self.directory.insert(account).await.map_err(|err| {
            if err.code == StoreErrorCode::Conflict {
                AuthError::EmailAlreadyRegistered(email)
            } else {
                err.into()
            }
        })?;

        info!(user_id = %user.id, "registered");
        self.start(user, SessionOrigin::Registration)
    }

    pub fn logout(&mut self) -> Result<(), AuthError> {
        if let Some(session) = self.session.take() {
            info!(user_id = %session.user.id, "logged out");
        }
        self.storage.clear()?;
        Ok(())
    }

    /// The signed-in user, provided their type is `kind`.
    pub fn require_kind(&self, kind: UserKind) -> Result<&User, AuthError> {
        let session = self.session.as_ref().ok_or(AuthError::NotLoggedIn)?;
        if session.user.kind != kind {
            return Err(AuthError::Forbidden {
                required: kind,
                actual: session.user.kind,
            });
        }
        Ok(&session.user)
    }

    pub fn require_user(&self) -> Result<&User, AuthError> {
        self.session
            .as_ref()
            .map(|s| &s.user)
            .ok_or(AuthError::NotLoggedIn)
    }

    fn start(&mut self, user: User, origin: SessionOrigin) -> Result<&Session, AuthError> {
        self.storage.save(&user)?;
        Ok(self.session.insert(Session { user, origin }))
    }

    async fn simulate_latency(&self) {
        if !self.config.simulated_latency.is_zero() {
            tokio::time::sleep(self.config.simulated_latency).await;
        }
    }
}
