// SPDX-License-Identifier: Apache-2.0

use std::path::PathBuf;

use chrono::NaiveDate;
use clap::{Args, Subcommand};

#[derive(Subcommand)]
pub(crate) enum AuthCommand {
    /// Sign in and persist the session.
    Login {
        #[arg(long)]
        email: String,
        #[arg(long)]
        password: String,
        #[arg(long = "type", default_value = "citizen")]
        kind: String,
    },
    /// Create an account and sign in.
    Register {
        #[arg(long)]
        name: String,
        #[arg(long)]
        email: String,
        #[arg(long)]
        password: String,
        /// Defaults to `--password`.
        #[arg(long)]
        confirm_password: Option<String>,
        #[arg(long = "type", default_value = "citizen")]
        kind: String,
        #[arg(long)]
        phone: Option<String>,
        #[arg(long)]
        address: Option<String>,
    },
    Logout,
    Whoami,
}

#[derive(Args)]
pub(crate) struct SearchArgs {
    /// Case-insensitive substring; empty matches everything.
    #[arg(long, default_value = "")]
    pub(crate) search: String,
}

#[derive(Args)]
pub(crate) struct PeriodArgs {
    #[arg(long)]
    pub(crate) from: Option<NaiveDate>,
    #[arg(long)]
    pub(crate) to: Option<NaiveDate>,
    /// date-desc, date-asc, title-asc or title-desc; stored order when omitted.
    #[arg(long)]
    pub(crate) sort: Option<String>,
}

#[derive(Args)]
pub(crate) struct VaccinationArgs {
    #[command(flatten)]
    pub(crate) search: SearchArgs,
    #[arg(long, default_value = "all")]
    pub(crate) status: String,
    #[command(flatten)]
    pub(crate) period: PeriodArgs,
}

#[derive(Args)]
pub(crate) struct AlertArgs {
    /// Notification category to hide (vaccine-reminders, campaign-alerts,
    /// allergy-warnings, location-alerts).
    #[arg(long = "mute")]
    pub(crate) muted: Vec<String>,
    /// Notification category to show; location alerts start hidden.
    #[arg(long = "show")]
    pub(crate) shown: Vec<String>,
    #[arg(long = "mark-read")]
    pub(crate) mark_read: Vec<String>,
    #[arg(long, default_value_t = false)]
    pub(crate) mark_all_read: bool,
    #[arg(long)]
    pub(crate) dismiss: Vec<String>,
}

#[derive(Subcommand)]
pub(crate) enum ExamCommand {
    List {
        #[command(flatten)]
        search: SearchArgs,
        #[arg(long, default_value = "all")]
        category: String,
        #[command(flatten)]
        period: PeriodArgs,
    },
    Upload(ExamUploadArgs),
}

#[derive(Args)]
pub(crate) struct ExamUploadArgs {
    #[arg(long, default_value = "")]
    pub(crate) title: String,
    #[arg(long)]
    pub(crate) category: Option<String>,
    #[arg(long)]
    pub(crate) date: Option<NaiveDate>,
    #[arg(long)]
    pub(crate) doctor: Option<String>,
    #[arg(long)]
    pub(crate) notes: Option<String>,
    #[arg(long = "file")]
    pub(crate) files: Vec<PathBuf>,
}

#[derive(Subcommand)]
pub(crate) enum CampaignCommand {
    List {
        #[command(flatten)]
        search: SearchArgs,
        #[arg(long, default_value = "all")]
        status: String,
        #[arg(long, default_value = "all")]
        priority: String,
        #[command(flatten)]
        period: PeriodArgs,
    },
    /// Coverage progress of every campaign.
    Progress,
}

#[derive(Args)]
pub(crate) struct PostArgs {
    #[command(flatten)]
    pub(crate) search: SearchArgs,
    /// Exact vaccine name offered by the post.
    #[arg(long, default_value = "all")]
    pub(crate) vaccine: String,
    #[arg(long, default_value = "all")]
    pub(crate) availability: String,
}

#[derive(Subcommand)]
pub(crate) enum StockCommand {
    List,
    Adjust {
        #[arg(long)]
        id: String,
        /// Signed number of units to add or remove.
        #[arg(long, allow_hyphen_values = true)]
        by: i64,
        #[arg(long)]
        reason: String,
    },
}

#[derive(Args)]
pub(crate) struct NewsArgs {
    #[command(flatten)]
    pub(crate) search: SearchArgs,
    #[arg(long, default_value = "all")]
    pub(crate) category: String,
    #[arg(long, default_value = "all")]
    pub(crate) priority: String,
    #[command(flatten)]
    pub(crate) period: PeriodArgs,
}

#[derive(Args)]
pub(crate) struct PatientArgs {
    #[command(flatten)]
    pub(crate) search: SearchArgs,
    #[arg(long, default_value = "all")]
    pub(crate) status: String,
}

#[derive(Args)]
pub(crate) struct ScheduleArgs {
    #[arg(long, default_value = "all")]
    pub(crate) status: String,
}
