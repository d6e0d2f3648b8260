// SPDX-License-Identifier: Apache-2.0

use dose_certa_model::Registration;
use serde_json::{json, Value};

use super::user_kind;
use crate::app::App;
use crate::commands::AuthCommand;
use crate::errors::CliError;

pub(crate) async fn run(app: &mut App, command: AuthCommand) -> Result<Value, CliError> {
    match command {
        AuthCommand::Login {
            email,
            password,
            kind,
        } => {
            let kind = user_kind(&kind)?;
            let session = app.sessions.login(&email, &password, kind).await?;
            Ok(json!({
                "command": "auth login",
                "status": "ok",
                "user": session.user,
            }))
        }
        AuthCommand::Register {
            name,
            email,
            password,
            confirm_password,
            kind,
            phone,
            address,
        } => {
            let registration = Registration {
                name,
                email,
                confirm_password: confirm_password.unwrap_or_else(|| password.clone()),
                password,
                kind: user_kind(&kind)?,
                phone,
                address,
            };
            let user = app.sessions.register(registration).await?.user.clone();
            if let Err(err) = app.persist().await {
                app.sessions.logout()?;
                return Err(err);
            }
            Ok(json!({
                "command": "auth register",
                "status": "ok",
                "user": user,
            }))
        }
        AuthCommand::Logout => {
            let email = app.sessions.current().map(|s| s.user.email.clone());
            app.sessions.logout()?;
            Ok(json!({
                "command": "auth logout",
                "status": "ok",
                "email": email,
            }))
        }
        AuthCommand::Whoami => {
            let user = app.sessions.require_user()?;
            Ok(json!({
                "command": "auth whoami",
                "user": user,
            }))
        }
    }
}
