// SPDX-License-Identifier: Apache-2.0

use dose_certa_insights::{citizen_summary, professional_summary, vaccination_alerts};
use dose_certa_model::UserKind;
use dose_certa_query::{sort_records, SortKey};
use serde_json::{json, Value};

use crate::app::App;
use crate::errors::CliError;

const VERIFICATION_CODE_LEN: usize = 9;

pub(crate) async fn dashboard(app: &App) -> Result<Value, CliError> {
    let user = app.sessions.require_user()?;
    let gateway = app.records();
    match user.kind {
        UserKind::Citizen => {
            let vaccinations = gateway.fetch_vaccinations().await?;
            let campaigns = gateway.fetch_campaigns().await?;
            let exams = gateway.fetch_exams().await?;
            let alerts = vaccination_alerts(&vaccinations, &[], app.today(), &app.alert_rules())?;
            Ok(json!({
                "command": "dashboard",
                "user": user,
                "summary": citizen_summary(&vaccinations, &campaigns, &exams),
                "vaccineAlerts": alerts.len(),
            }))
        }
        UserKind::Professional => {
            let patients = gateway.fetch_patients().await?;
            let stock = gateway.fetch_stock().await?;
            let targets = gateway.fetch_campaign_targets().await?;
            Ok(json!({
                "command": "dashboard",
                "user": user,
                "summary": professional_summary(&patients, &stock, &targets, app.today()),
            }))
        }
    }
}

/// Upper-cased prefix of a fresh id, printed on the certificate.
fn verification_code(raw: &str) -> String {
    raw.chars()
        .filter(char::is_ascii_alphanumeric)
        .take(VERIFICATION_CODE_LEN)
        .collect::<String>()
        .to_ascii_uppercase()
}

pub(crate) async fn certificate(app: &App) -> Result<Value, CliError> {
    let holder = app.sessions.require_kind(UserKind::Citizen)?;
    let records = sort_records(
        app.records().fetch_vaccinations().await?,
        SortKey::DateDesc,
    );
    let code = verification_code(&app.ids.next_id());
    if code.len() != VERIFICATION_CODE_LEN {
        return Err(CliError::internal(format!(
            "id source produced a verification code shorter than {VERIFICATION_CODE_LEN} characters"
        )));
    }
    Ok(json!({
        "command": "certificate",
        "holder": {
            "name": holder.name,
            "email": holder.email,
        },
        "generatedAt": app.clock.now(),
        "verificationCode": code,
        "records": records,
    }))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn verification_code_is_nine_uppercase_characters() {
        let code = verification_code("3f2a9c1e-77b0-4d4b-9a61-0c2e8f7d1b55");
        assert_eq!(code, "3F2A9C1E7");
        assert_eq!(code.len(), VERIFICATION_CODE_LEN);
    }

    #[test]
    fn verification_code_keeps_short_ids_short() {
        assert_eq!(verification_code("user-1"), "USER1");
    }
}
