// SPDX-License-Identifier: Apache-2.0

use dose_certa_auth::AuthError;
use dose_certa_core::{ErrorCode, ExitCode, MachineError};
use dose_certa_insights::InsightError;
use dose_certa_model::ValidationError;
use dose_certa_query::QueryError;
use dose_certa_store::{StoreError, StoreErrorCode};

#[derive(Debug)]
pub(crate) struct CliError {
    pub(crate) exit_code: ExitCode,
    pub(crate) machine: MachineError,
}

impl CliError {
    pub(crate) fn coded(code: ErrorCode, message: &str) -> Self {
        Self {
            exit_code: code.exit_code(),
            machine: MachineError::new(code, message),
        }
    }

    pub(crate) fn usage(message: &str) -> Self {
        Self::coded(ErrorCode::Usage, message)
    }

    pub(crate) fn validation(message: &str) -> Self {
        Self::coded(ErrorCode::Validation, message)
    }

    pub(crate) fn internal(message: String) -> Self {
        Self::coded(ErrorCode::Internal, &message)
    }

    pub(crate) fn dependency(message: String) -> Self {
        Self::coded(ErrorCode::DependencyFailure, &message)
    }
}

impl From<ValidationError> for CliError {
    fn from(value: ValidationError) -> Self {
        Self::validation(&value.0)
    }
}

impl From<QueryError> for CliError {
    fn from(value: QueryError) -> Self {
        Self::validation(&value.message).with_detail("query_code", value.code.as_str())
    }
}

impl From<InsightError> for CliError {
    fn from(value: InsightError) -> Self {
        match &value {
            InsightError::Validation(msg) => Self::validation(msg),
            InsightError::UnknownAlert(id) => {
                Self::coded(ErrorCode::NotFound, &value.to_string()).with_detail("alert_id", id)
            }
            InsightError::NotDismissible(id) => {
                Self::coded(ErrorCode::NotDismissible, &value.to_string())
                    .with_detail("alert_id", id)
            }
        }
    }
}

impl From<StoreError> for CliError {
    fn from(value: StoreError) -> Self {
        let message = value.to_string();
        match value.code {
            StoreErrorCode::Validation => Self::validation(&value.message),
            StoreErrorCode::NotFound => Self::coded(ErrorCode::NotFound, &message),
            StoreErrorCode::Conflict => Self::coded(ErrorCode::Conflict, &message),
            _ => Self::dependency(message).with_detail("store_code", value.code.as_str()),
        }
    }
}

impl From<AuthError> for CliError {
    fn from(value: AuthError) -> Self {
        let message = value.to_string();
        match value {
            AuthError::Validation(msg) => Self::validation(&msg),
            AuthError::InvalidCredentials => Self::coded(ErrorCode::InvalidCredentials, &message),
            AuthError::EmailAlreadyRegistered(email) => {
                Self::coded(ErrorCode::EmailAlreadyRegistered, &message)
                    .with_detail("email", &email)
            }
            AuthError::NotLoggedIn => Self::coded(ErrorCode::NotLoggedIn, &message),
            AuthError::Forbidden { required, actual } => {
                Self::coded(ErrorCode::Forbidden, &message)
                    .with_detail("required", required.as_str())
                    .with_detail("actual", actual.as_str())
            }
            AuthError::Storage(err) => Self::from(err),
        }
    }
}

impl CliError {
    pub(crate) fn with_detail(mut self, key: &str, value: &str) -> Self {
        self.machine = self.machine.with_detail(key, value);
        self
    }
}

pub(crate) fn emit_error(error: &CliError, machine_json: bool) {
    if machine_json {
        match serde_json::to_string(&error.machine) {
            Ok(payload) => eprintln!("{payload}"),
            Err(_) => eprintln!(
                "{{\"code\":\"internal_error\",\"message\":\"failed to encode structured error\",\"details\":{{}}}}"
            ),
        }
    } else {
        eprintln!("{}", error.machine.message);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use dose_certa_model::UserKind;

    #[test]
    fn auth_failures_map_to_validation_exit_code() {
        let err = CliError::from(AuthError::Forbidden {
            required: UserKind::Professional,
            actual: UserKind::Citizen,
        });
        assert_eq!(err.exit_code as u8, 3);
        assert_eq!(err.machine.code, "forbidden");
        assert_eq!(err.machine.details["required"], "professional");
    }

    #[test]
    fn storage_io_maps_to_dependency_failure() {
        let err = CliError::from(StoreError::new(StoreErrorCode::Io, "disk full"));
        assert_eq!(err.exit_code as u8, 4);
        assert_eq!(err.machine.details["store_code"], "io");

        let wrapped = CliError::from(AuthError::Storage(StoreError::new(
            StoreErrorCode::Corrupt,
            "bad json",
        )));
        assert_eq!(wrapped.exit_code as u8, 4);
    }

    #[test]
    fn query_errors_carry_their_code() {
        let err = CliError::from(QueryError::validation("bad sort"));
        assert_eq!(err.machine.code, "validation_error");
        assert_eq!(err.machine.details["query_code"], "query_validation");
    }
}
