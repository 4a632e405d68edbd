// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

mod args;

use crate::colors;
use crate::help;
use clap::{Parser, Subcommand, ValueEnum};
use clap_complete::Shell;
use nv_core::{ApplicantId, ReScheduleId, ScheduleStatus};

pub use args::{ApplicantFieldArgs, PageArgs};

/// Parse a string that must not be empty or whitespace-only.
fn non_empty_string(s: &str) -> Result<String, String> {
    if s.trim().is_empty() {
        Err("cannot be empty".to_string())
    } else {
        Ok(s.to_string())
    }
}

/// Parse an entity id; ids are positive.
fn entity_id(s: &str) -> Result<i64, String> {
    match s.trim().parse::<i64>() {
        Ok(id) if id > 0 => Ok(id),
        _ => Err(format!("'{s}' is not a valid id (expected a positive number)")),
    }
}

fn schedule_status(s: &str) -> Result<ScheduleStatus, String> {
    match s.parse::<ScheduleStatus>() {
        Ok(status) if !status.is_unknown() => Ok(status),
        _ => Err(format!(
            "unknown status '{s}' (expected one of: {})",
            ScheduleStatus::KNOWN
                .iter()
                .map(ScheduleStatus::as_str)
                .collect::<Vec<_>>()
                .join(", ")
        )),
    }
}

/// Output format for commands supporting structured output.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

#[derive(Parser)]
#[command(name = "nextvisa")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(disable_version_flag = true)]
#[command(about = "Admin console for the visa appointment re-scheduling service")]
#[command(
    long_about = "Admin console for the visa appointment re-scheduling service.\n\n\
    Manage applicants and their re-schedule attempts, follow attempts while the \
    automation works on them, and adjust the automation's settings."
)]
#[command(help_template = help::template())]
#[command(before_help = help::commands())]
#[command(after_help = help::quickstart())]
#[command(styles = help::styles())]
#[allow(clippy::manual_non_exhaustive)]
pub struct Cli {
    /// Output format (text, json)
    #[arg(long = "output", short = 'o', global = true, value_enum, default_value = "text")]
    pub output: OutputFormat,

    /// Base URL of the API (overrides configuration)
    #[arg(long, global = true, value_name = "URL")]
    pub api_url: Option<String>,

    /// Show debug logs (repeat for trace)
    #[arg(short = 'v', long = "verbose", global = true, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Print version
    #[arg(short = 'V', long = "version", action = clap::ArgAction::Version)]
    version: (),

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand)]
pub enum Command {
    /// Manage applicants
    #[command(subcommand)]
    Applicant(ApplicantCommand),

    /// Manage re-schedule attempts
    #[command(subcommand)]
    Reschedule(RescheduleCommand),

    /// Follow an applicant's attempts until none may change
    #[command(
        arg_required_else_help = true,
        after_help = colors::examples("\
Examples:
  nextvisa watch 7                 Poll every configured interval
  nextvisa watch 7 --interval 2    Poll every two seconds")
    )]
    Watch {
        /// Applicant ID
        #[arg(value_parser = entity_id)]
        applicant: ApplicantId,

        /// Seconds between polls (overrides configuration)
        #[arg(long, value_name = "SECS", value_parser = clap::value_parser!(u64).range(1..))]
        interval: Option<u64>,

        /// Only follow the most recent attempts
        #[arg(short = 'n', long)]
        limit: Option<u32>,
    },

    /// Show or change the automation settings stored in the backend
    #[command(subcommand)]
    Settings(SettingsCommand),

    /// Store a bearer token issued by the sign-in provider
    #[command(after_help = colors::examples("\
Examples:
  nextvisa login --token <token>    Store the token in the console home"))]
    Login {
        /// Bearer token
        #[arg(long, value_parser = non_empty_string)]
        token: String,
    },

    /// Forget the stored token
    Logout,

    /// Show the status badges and what each one means
    Statuses,

    /// Manage this console's local configuration
    #[command(subcommand)]
    ConsoleConfig(ConsoleConfigCommand),

    /// Generate shell completions
    #[command(
        arg_required_else_help = true,
        after_help = colors::examples("\
Examples:
  nextvisa completion bash > ~/.local/share/bash-completion/completions/nextvisa
  nextvisa completion zsh > ~/.zfunc/_nextvisa")
    )]
    Completion {
        /// Shell to generate completions for
        #[arg(value_enum)]
        shell: Shell,
    },
}

#[derive(Subcommand)]
pub enum ApplicantCommand {
    /// List applicants
    #[command(after_help = colors::examples("\
Examples:
  nextvisa applicant list              List applicants
  nextvisa applicant list -n 20        First twenty applicants
  nextvisa applicant list -s diaz      Match name, last name or e-mail
  nextvisa applicant list -o json      Output as JSON"))]
    List {
        /// Case-insensitive filter on name, last name and e-mail
        #[arg(long, short)]
        search: Option<String>,

        #[command(flatten)]
        page: PageArgs,
    },

    /// Show an applicant and their latest attempts
    #[command(arg_required_else_help = true)]
    Show {
        /// Applicant ID
        #[arg(value_parser = entity_id)]
        id: ApplicantId,
    },

    /// Register a new applicant
    #[command(
        arg_required_else_help = true,
        after_help = colors::examples("\
Examples:
  nextvisa applicant new Ana Diaz ana@x.com <password>
  nextvisa applicant new Ana Diaz ana@x.com <password> --min-date 2026-03-01")
    )]
    New {
        /// First name
        #[arg(value_parser = non_empty_string)]
        name: String,

        /// Last name
        #[arg(value_parser = non_empty_string)]
        last_name: String,

        /// Login e-mail on the appointment portal
        email: String,

        /// Login password on the appointment portal
        #[arg(value_parser = non_empty_string)]
        password: String,

        #[command(flatten)]
        fields: ApplicantFieldArgs,
    },

    /// Change an applicant's details
    #[command(
        arg_required_else_help = true,
        after_help = colors::examples("\
Examples:
  nextvisa applicant edit 7 --email ana@y.com       Change the e-mail
  nextvisa applicant edit 7 --max-date 2026-06-30   Widen the window")
    )]
    Edit {
        /// Applicant ID
        #[arg(value_parser = entity_id)]
        id: ApplicantId,

        #[arg(long)]
        name: Option<String>,

        #[arg(long)]
        last_name: Option<String>,

        #[arg(long)]
        email: Option<String>,

        #[arg(long)]
        password: Option<String>,

        #[command(flatten)]
        fields: ApplicantFieldArgs,
    },

    /// Delete an applicant
    #[command(arg_required_else_help = true)]
    Delete {
        /// Applicant ID
        #[arg(value_parser = entity_id)]
        id: ApplicantId,
    },

    /// Check the applicant's portal credentials
    #[command(arg_required_else_help = true)]
    TestCredentials {
        /// Applicant ID
        #[arg(value_parser = entity_id)]
        id: ApplicantId,
    },
}

#[derive(Subcommand)]
pub enum RescheduleCommand {
    /// List re-schedule attempts
    #[command(after_help = colors::examples("\
Examples:
  nextvisa reschedule list                 All attempts
  nextvisa reschedule list --applicant 7   Attempts for one applicant"))]
    List {
        /// Only attempts for this applicant
        #[arg(long, value_parser = entity_id)]
        applicant: Option<ApplicantId>,

        #[command(flatten)]
        page: PageArgs,
    },

    /// Show one attempt
    #[command(arg_required_else_help = true)]
    Show {
        /// Re-schedule ID
        #[arg(value_parser = entity_id)]
        id: ReScheduleId,
    },

    /// Request a new appointment inside a date window
    #[command(
        arg_required_else_help = true,
        after_help = colors::examples("\
Examples:
  nextvisa reschedule new 7 --start 2026-03-01 --end 2026-03-31
  nextvisa reschedule new 7 --start \"2026-03-01 09:00\" --end 2026-03-02")
    )]
    New {
        /// Applicant ID
        #[arg(value_parser = entity_id)]
        applicant: ApplicantId,

        /// Start of the window
        #[arg(long, value_name = "WHEN")]
        start: String,

        /// End of the window
        #[arg(long, value_name = "WHEN")]
        end: String,

        /// Initial status (defaults to the backend's choice)
        #[arg(long, value_parser = schedule_status)]
        status: Option<ScheduleStatus>,
    },

    /// Change an attempt
    #[command(arg_required_else_help = true)]
    Edit {
        /// Re-schedule ID
        #[arg(value_parser = entity_id)]
        id: ReScheduleId,

        #[arg(long, value_name = "WHEN")]
        start: Option<String>,

        #[arg(long, value_name = "WHEN")]
        end: Option<String>,

        #[arg(long, value_parser = schedule_status)]
        status: Option<ScheduleStatus>,

        /// Error message recorded on the attempt
        #[arg(long)]
        error: Option<String>,
    },

    /// Delete an attempt
    #[command(arg_required_else_help = true)]
    Delete {
        /// Re-schedule ID
        #[arg(value_parser = entity_id)]
        id: ReScheduleId,
    },
}

/// Automation settings stored in the backend.
#[derive(Subcommand)]
pub enum SettingsCommand {
    /// Show the current settings
    Show,

    /// Change one setting
    #[command(
        arg_required_else_help = true,
        after_help = colors::examples("\
Examples:
  nextvisa settings set sleep_time 20       Wait twenty seconds between attempts
  nextvisa settings set push_user <user>    Change the notification user

Fields: base_url, hub_address, sleep_time, push_token, push_user, df_msg")
    )]
    Set {
        /// Field name
        field: String,

        /// New value
        value: String,
    },
}

/// Local console configuration.
#[derive(Subcommand)]
pub enum ConsoleConfigCommand {
    /// Show the effective configuration
    Show,

    /// Print the configuration file path
    Path,

    /// Set a configuration key
    #[command(
        arg_required_else_help = true,
        after_help = colors::examples("\
Examples:
  nextvisa console-config set api_url https://api.example.com
  nextvisa console-config set watch.interval_secs 10")
    )]
    Set {
        /// Key, e.g. api_url or cache.retry.max_retries
        key: String,

        /// New value
        value: String,
    },
}
