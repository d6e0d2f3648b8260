// SPDX-License-Identifier: Apache-2.0

pub(crate) mod auth;
pub(crate) mod dashboard;
pub(crate) mod professional;
pub(crate) mod records;

use dose_certa_model::UserKind;
use dose_certa_query::{sort_records, DateRange, Dated, SearchTerm, SortKey, Titled};

use crate::app::App;
use crate::commands::{PeriodArgs, SearchArgs};
use crate::errors::CliError;

fn search_term(app: &App, args: &SearchArgs) -> Result<SearchTerm, CliError> {
    Ok(SearchTerm::parse(&args.search, &app.limits)?)
}

fn period(args: &PeriodArgs) -> Result<(DateRange, Option<SortKey>), CliError> {
    let dates = DateRange::new(args.from, args.to)?;
    let sort = args.sort.as_deref().map(SortKey::parse).transpose()?;
    Ok((dates, sort))
}

fn ordered<T: Dated + Titled>(records: Vec<T>, sort: Option<SortKey>) -> Vec<T> {
    match sort {
        Some(key) => sort_records(records, key),
        None => records,
    }
}

fn user_kind(raw: &str) -> Result<UserKind, CliError> {
    Ok(UserKind::parse(raw)?)
}
