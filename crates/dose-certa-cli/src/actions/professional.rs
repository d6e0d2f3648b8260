// SPDX-License-Identifier: Apache-2.0

use dose_certa_insights::{
    adjust_stock as apply_adjustment, fill_percentage, status_on, stock_summary,
};
use dose_certa_model::UserKind;
use dose_certa_query::{filter_records, PatientFilter, Selector};
use serde_json::{json, Value};

use super::search_term;
use crate::app::App;
use crate::commands::PatientArgs;
use crate::errors::CliError;

pub(crate) async fn list_stock(app: &App) -> Result<Value, CliError> {
    app.sessions.require_kind(UserKind::Professional)?;
    let today = app.today();
    let stock = app.records().fetch_stock().await?;
    let records = stock
        .iter()
        .map(|item| {
            json!({
                "item": item,
                "statusToday": status_on(item, today),
                "fillPercentage": fill_percentage(item),
            })
        })
        .collect::<Vec<_>>();
    Ok(json!({
        "command": "stock list",
        "today": today,
        "summary": stock_summary(&stock, today),
        "records": records,
    }))
}

pub(crate) async fn adjust_stock(
    app: &App,
    id: &str,
    by: i64,
    reason: &str,
) -> Result<Value, CliError> {
    app.sessions.require_kind(UserKind::Professional)?;
    let mut item = app
        .records()
        .fetch_stock()
        .await?
        .into_iter()
        .find(|s| s.id.as_str() == id)
        .ok_or_else(|| {
            CliError::validation(&format!("no stock line with id `{id}`"))
                .with_detail("stock_id", id)
        })?;
    let event = apply_adjustment(&mut item, by, reason, app.clock.now())?;
    app.records().save_stock(item.clone()).await?;
    app.persist().await?;
    Ok(json!({
        "command": "stock adjust",
        "status": "ok",
        "adjustment": event,
        "item": item,
    }))
}

pub(crate) async fn patients(app: &App, args: PatientArgs) -> Result<Value, CliError> {
    app.sessions.require_kind(UserKind::Professional)?;
    let filter = PatientFilter {
        search: search_term(app, &args.search)?,
        status: Selector::parse(&args.status)?,
    };
    let patients = app.records().fetch_patients().await?;
    let matched = filter_records(&patients, &filter);
    Ok(json!({
        "command": "patients",
        "total": patients.len(),
        "count": matched.len(),
        "records": matched,
    }))
}
