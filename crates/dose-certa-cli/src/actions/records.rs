// SPDX-License-Identifier: Apache-2.0

use std::path::Path;

use dose_certa_insights::{
    campaign_progress as coverage, format_file_size, health_post_summary, vaccination_alerts,
    AlertFeed, NotificationCategory, NotificationSettings,
};
use dose_certa_model::{ExamCategory, ExamFileDraft, ExamMimeType, ExamUpload, UserKind};
use dose_certa_query::{
    filter_records, related_campaigns, vaccine_catalog, CampaignFilter, ExamFilter,
    HealthPostFilter, NewsFilter, ScheduleFilter, Selector, SortKey, VaccinationFilter,
};
use serde_json::{json, Value};
use tracing::debug;

use super::{ordered, period, search_term};
use crate::app::App;
use crate::commands::{
    AlertArgs, ExamUploadArgs, NewsArgs, PeriodArgs, PostArgs, ScheduleArgs, SearchArgs,
    VaccinationArgs,
};
use crate::errors::CliError;

pub(crate) async fn vaccinations(app: &App, args: VaccinationArgs) -> Result<Value, CliError> {
    app.sessions.require_kind(UserKind::Citizen)?;
    let (dates, sort) = period(&args.period)?;
    let filter = VaccinationFilter {
        search: search_term(app, &args.search)?,
        status: Selector::parse(&args.status)?,
        dates,
    };
    let records = app.records().fetch_vaccinations().await?;
    let matched = ordered(filter_records(&records, &filter), sort);
    Ok(json!({
        "command": "vaccinations",
        "total": records.len(),
        "count": matched.len(),
        "sort": sort.map(SortKey::as_str),
        "records": matched,
    }))
}

pub(crate) async fn alerts(app: &App, args: AlertArgs) -> Result<Value, CliError> {
    app.sessions.require_kind(UserKind::Citizen)?;
    let records = app.records().fetch_vaccinations().await?;
    let adhoc = app.records().fetch_alerts().await?;
    let ranked = vaccination_alerts(&records, &adhoc, app.today(), &app.alert_rules())?;
    let mut feed = AlertFeed::new(ranked);

    let mut settings = NotificationSettings::default();
    for (raw, wanted) in args
        .muted
        .iter()
        .map(|raw| (raw, false))
        .chain(args.shown.iter().map(|raw| (raw, true)))
    {
        let category = NotificationCategory::parse(raw)?;
        if settings.enabled(category) != wanted {
            settings.toggle(category);
        }
    }

    for id in &args.mark_read {
        feed.mark_read(id)?;
    }
    if args.mark_all_read {
        feed.mark_all_read();
    }
    let mut dismissed = Vec::with_capacity(args.dismiss.len());
    for id in &args.dismiss {
        dismissed.push(feed.dismiss(id)?.id);
    }

    let visible = feed.visible(&settings);
    debug!(total = feed.alerts().len(), visible = visible.len(), "alerts ranked");
    Ok(json!({
        "command": "alerts",
        "today": app.today(),
        "unread": feed.unread_count(),
        "dismissed": dismissed,
        "settings": settings,
        "alerts": visible,
    }))
}

pub(crate) async fn list_exams(
    app: &App,
    search: &SearchArgs,
    category: &str,
    period_args: &PeriodArgs,
) -> Result<Value, CliError> {
    app.sessions.require_kind(UserKind::Citizen)?;
    let (dates, sort) = period(period_args)?;
    let filter = ExamFilter {
        search: search_term(app, search)?,
        category: Selector::parse(category)?,
        dates,
    };
    let exams = app.records().fetch_exams().await?;
    let matched = ordered(filter_records(&exams, &filter), sort);
    let records = matched
        .iter()
        .map(|exam| {
            let bytes: u64 = exam.files.iter().map(|f| f.size).sum();
            let mut entry = json!(exam);
            if let Some(fields) = entry.as_object_mut() {
                fields.insert("totalSize".to_string(), json!(format_file_size(bytes)));
            }
            entry
        })
        .collect::<Vec<_>>();
    Ok(json!({
        "command": "exams list",
        "total": exams.len(),
        "count": records.len(),
        "sort": sort.map(SortKey::as_str),
        "records": records,
    }))
}

fn draft_from_path(path: &Path) -> Result<ExamFileDraft, CliError> {
    let meta = std::fs::metadata(path).map_err(|e| {
        CliError::validation(&format!("cannot read exam file {}: {e}", path.display()))
    })?;
    let name = path
        .file_name()
        .map_or_else(|| path.display().to_string(), |n| n.to_string_lossy().into_owned());
    let mime_type = ExamMimeType::from_file_name(&name).map_or_else(
        || "application/octet-stream".to_string(),
        |mime| mime.as_str().to_string(),
    );
    Ok(ExamFileDraft {
        name,
        size: meta.len(),
        mime_type,
        url: format!("file://{}", path.display()),
    })
}

pub(crate) async fn upload_exam(app: &App, args: ExamUploadArgs) -> Result<Value, CliError> {
    app.sessions.require_kind(UserKind::Citizen)?;
    let upload = ExamUpload {
        title: args.title,
        category: args
            .category
            .as_deref()
            .map(ExamCategory::parse)
            .transpose()?,
        date: args.date,
        doctor: args.doctor,
        notes: args.notes,
        files: args
            .files
            .iter()
            .map(|path| draft_from_path(path))
            .collect::<Result<Vec<_>, _>>()?,
    };
    let record = app.records().upload_exam(upload).await?;
    app.persist().await?;
    Ok(json!({
        "command": "exams upload",
        "status": "ok",
        "record": record,
    }))
}

pub(crate) async fn list_campaigns(
    app: &App,
    search: &SearchArgs,
    status: &str,
    priority: &str,
    period_args: &PeriodArgs,
) -> Result<Value, CliError> {
    let (dates, sort) = period(period_args)?;
    let filter = CampaignFilter {
        search: search_term(app, search)?,
        status: Selector::parse(status)?,
        priority: Selector::parse(priority)?,
        dates,
    };
    let campaigns = app.records().fetch_campaigns().await?;
    let matched = ordered(filter_records(&campaigns, &filter), sort);
    Ok(json!({
        "command": "campaigns list",
        "total": campaigns.len(),
        "count": matched.len(),
        "eligible": matched.iter().filter(|c| c.open_for_user()).count(),
        "sort": sort.map(SortKey::as_str),
        "records": matched,
    }))
}

pub(crate) async fn campaign_progress(app: &App) -> Result<Value, CliError> {
    let campaigns = app.records().fetch_campaigns().await?;
    let progress = campaigns.iter().map(coverage).collect::<Vec<_>>();
    Ok(json!({
        "command": "campaigns progress",
        "campaigns": progress,
    }))
}

pub(crate) async fn posts(app: &App, args: PostArgs) -> Result<Value, CliError> {
    let filter = HealthPostFilter {
        search: search_term(app, &args.search)?,
        vaccine: Selector::parse(&args.vaccine)?,
        availability: Selector::parse(&args.availability)?,
    };
    let posts = app.records().fetch_health_posts().await?;
    let matched = filter_records(&posts, &filter);
    let records = matched
        .iter()
        .map(|post| json!({ "post": post, "summary": health_post_summary(post) }))
        .collect::<Vec<_>>();
    Ok(json!({
        "command": "posts",
        "total": posts.len(),
        "count": records.len(),
        "vaccines": vaccine_catalog(&posts),
        "records": records,
    }))
}

pub(crate) async fn news(app: &App, args: NewsArgs) -> Result<Value, CliError> {
    let (dates, sort) = period(&args.period)?;
    let filter = NewsFilter {
        search: search_term(app, &args.search)?,
        category: Selector::parse(&args.category)?,
        priority: Selector::parse(&args.priority)?,
        dates,
    };
    let articles = app.records().fetch_news().await?;
    let matched = ordered(filter_records(&articles, &filter), sort);
    Ok(json!({
        "command": "news",
        "total": articles.len(),
        "count": matched.len(),
        "sort": sort.map(SortKey::as_str),
        "records": matched,
    }))
}

pub(crate) async fn schedule(app: &App, args: ScheduleArgs) -> Result<Value, CliError> {
    let filter = ScheduleFilter {
        status: Selector::parse(&args.status)?,
    };
    let entries = app.records().fetch_schedule().await?;
    let matched = filter_records(&entries, &filter);
    let campaigns = app.records().fetch_campaigns().await?;
    let related = related_campaigns(&campaigns, &matched);
    Ok(json!({
        "command": "schedule",
        "total": entries.len(),
        "count": matched.len(),
        "records": matched,
        "relatedCampaigns": related,
    }))
}
