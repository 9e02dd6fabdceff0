//! Command-line surface.
//!
//! One-shot commands run a single use case and exit. `shell` keeps the
//! process (and with it the reminder timers and the undo slot) alive and
//! reads the same commands from stdin.

mod commands;
mod render;
mod shell;

use std::path::PathBuf;

use anyhow::Context;
use chrono::NaiveDate;
use clap::{Args, Parser, Subcommand, ValueEnum};

use fz_core::label::{SheetLayout, DEFAULT_LABEL_BATCH};
use fz_core::{ReminderFilter, ReminderRequest, SettingsChange, TimeOfDay};

pub use commands::run_command;
pub use shell::{read_eval_loop, run_shell};

#[derive(Parser, Debug)]
#[command(
    name = "freezr",
    version,
    about = "Keep track of labeled containers in the freezer"
)]
pub struct Cli {
    /// Config file (default: freezr.toml in the app data directory)
    #[arg(long, global = true, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// SQLite database file, overrides the config
    #[arg(long, global = true, value_name = "PATH")]
    pub database: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug, Clone, PartialEq)]
pub enum Command {
    /// Look up a scanned code and say what can be done with it
    Scan {
        /// Raw scanned text, with or without the FREEZR: prefix
        code: String,
        #[arg(long)]
        json: bool,
    },
    /// Name a printed label that has not been used yet
    Claim {
        code: String,
        #[command(flatten)]
        item: ItemArgs,
    },
    /// Start tracking a code that was never printed here
    Create {
        code: String,
        #[command(flatten)]
        item: ItemArgs,
    },
    /// Put a new item on a used or deleted label
    Reuse {
        code: String,
        #[command(flatten)]
        item: ItemArgs,
    },
    /// Show one container
    Show {
        id: i64,
        #[arg(long)]
        json: bool,
    },
    /// List containers using the stored sort order
    List {
        /// none, soon or expired
        #[arg(long, default_value = "none")]
        filter: ReminderFilter,
        #[arg(long)]
        json: bool,
    },
    /// Mark a container as used up
    Use { id: i64 },
    /// Delete a container (undo restores it)
    Delete { id: i64 },
    /// Restore the container deleted last in this session
    Undo,
    /// Set the shelf life in days; omit DAYS to use the default again
    ShelfLife { id: i64, days: Option<i32> },
    /// Set or replace the reminder of an active container
    Remind {
        id: i64,
        #[command(flatten)]
        when: ReminderArgs,
    },
    /// Push the reminder of an active container out by the snooze length
    Snooze { id: i64 },
    /// Generate a batch of label codes
    PrintLabels {
        #[arg(default_value_t = DEFAULT_LABEL_BATCH)]
        count: u32,
        /// Record the labels as unused placeholders
        #[arg(long)]
        register: bool,
        #[arg(long, value_enum, default_value_t = Sheet::A4)]
        sheet: Sheet,
        #[arg(long)]
        json: bool,
    },
    /// Show or change settings
    Settings {
        #[command(subcommand)]
        action: Option<SettingsAction>,
    },
    /// Interactive session with live reminders
    Shell,
}

impl Command {
    pub fn name(&self) -> &'static str {
        match self {
            Command::Scan { .. } => "scan",
            Command::Claim { .. } => "claim",
            Command::Create { .. } => "create",
            Command::Reuse { .. } => "reuse",
            Command::Show { .. } => "show",
            Command::List { .. } => "list",
            Command::Use { .. } => "use",
            Command::Delete { .. } => "delete",
            Command::Undo => "undo",
            Command::ShelfLife { .. } => "shelf-life",
            Command::Remind { .. } => "remind",
            Command::Snooze { .. } => "snooze",
            Command::PrintLabels { .. } => "print-labels",
            Command::Settings { .. } => "settings",
            Command::Shell => "shell",
        }
    }
}

/// Item details entered after a scan.
#[derive(Args, Debug, Clone, PartialEq, Default)]
pub struct ItemArgs {
    /// Item name (blank keeps the old name when reusing)
    #[arg(long, short, default_value = "")]
    pub name: String,

    #[arg(long, short, default_value_t = 1)]
    pub quantity: i32,

    /// Shelf life in days
    #[arg(long = "shelf-life", value_name = "DAYS")]
    pub shelf_life_days: Option<i32>,

    #[command(flatten)]
    pub when: ReminderArgs,
}

#[derive(Args, Debug, Clone, PartialEq, Default)]
pub struct ReminderArgs {
    /// Remind this many days from today
    #[arg(long = "in", value_name = "DAYS", conflicts_with = "on")]
    pub in_days: Option<i32>,

    /// Remind on this date
    #[arg(long, value_name = "YYYY-MM-DD")]
    pub on: Option<NaiveDate>,

    /// Time of day for --in/--on (default from config)
    #[arg(long, value_name = "HH:MM")]
    pub at: Option<TimeOfDay>,
}

impl ReminderArgs {
    pub fn request(&self, default_time: TimeOfDay) -> Option<ReminderRequest> {
        let time = self.at.unwrap_or(default_time);
        match (self.in_days, self.on) {
            (Some(days), _) => Some(ReminderRequest::InDays { days, time }),
            (None, Some(date)) => Some(ReminderRequest::On { date, time }),
            (None, None) => None,
        }
    }
}

#[derive(Subcommand, Debug, Clone, PartialEq)]
pub enum SettingsAction {
    Show {
        #[arg(long)]
        json: bool,
    },
    Set {
        #[arg(value_enum)]
        key: SettingKey,
        value: String,
    },
}

#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum SettingKey {
    SortOrder,
    ShowUsed,
    DefaultReminderDays,
    ExpiringSoonDays,
    CriticalDays,
}

impl SettingKey {
    pub fn change(self, value: &str) -> anyhow::Result<SettingsChange> {
        let days = || {
            value
                .trim()
                .parse::<i32>()
                .with_context(|| format!("expected a number of days, got {value:?}"))
        };
        Ok(match self {
            SettingKey::SortOrder => SettingsChange::SortOrder(value.parse()?),
            SettingKey::ShowUsed => SettingsChange::ShowUsed(
                value
                    .trim()
                    .parse()
                    .with_context(|| format!("expected true or false, got {value:?}"))?,
            ),
            SettingKey::DefaultReminderDays => SettingsChange::DefaultReminderDays(days()?),
            SettingKey::ExpiringSoonDays => SettingsChange::ExpiringSoonDays(days()?),
            SettingKey::CriticalDays => SettingsChange::CriticalDays(days()?),
        })
    }
}

#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum Sheet {
    A4,
    Letter,
}

impl Sheet {
    pub fn layout(self) -> SheetLayout {
        match self {
            Sheet::A4 => SheetLayout::a4(),
            Sheet::Letter => SheetLayout::letter(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use fz_core::SortOrder;

    #[test]
    fn parses_global_flags_after_subcommand() {
        let cli = Cli::try_parse_from(["freezr", "list", "--database", "/tmp/x.db"]).unwrap();
        assert_eq!(cli.database, Some(PathBuf::from("/tmp/x.db")));
        assert_eq!(
            cli.command,
            Command::List {
                filter: ReminderFilter::None,
                json: false
            }
        );
    }

    #[test]
    fn claim_collects_item_details() {
        let cli = Cli::try_parse_from([
            "freezr",
            "claim",
            "FREEZR:abc",
            "--name",
            "Beef stew",
            "-q",
            "2",
            "--shelf-life",
            "90",
            "--in",
            "30",
            "--at",
            "18:00",
        ])
        .unwrap();

        let Command::Claim { code, item } = cli.command else {
            panic!("expected claim");
        };
        assert_eq!(code, "FREEZR:abc");
        assert_eq!(item.name, "Beef stew");
        assert_eq!(item.quantity, 2);
        assert_eq!(item.shelf_life_days, Some(90));
        assert_eq!(
            item.when.request(TimeOfDay::DEFAULT),
            Some(ReminderRequest::InDays {
                days: 30,
                time: TimeOfDay::new(18, 0).unwrap()
            })
        );
    }

    #[test]
    fn in_and_on_are_exclusive() {
        let result = Cli::try_parse_from(["freezr", "remind", "3", "--in", "2", "--on", "2030-01-01"]);
        assert!(result.is_err());
    }

    #[test]
    fn reminder_date_uses_default_time() {
        let when = ReminderArgs {
            on: NaiveDate::from_ymd_opt(2030, 1, 1),
            ..Default::default()
        };
        assert_eq!(
            when.request(TimeOfDay::DEFAULT),
            Some(ReminderRequest::On {
                date: NaiveDate::from_ymd_opt(2030, 1, 1).unwrap(),
                time: TimeOfDay::DEFAULT
            })
        );
        assert_eq!(ReminderArgs::default().request(TimeOfDay::DEFAULT), None);
    }

    #[test]
    fn setting_values_are_parsed_per_key() {
        assert_eq!(
            SettingKey::SortOrder.change("name-asc").unwrap(),
            SettingsChange::SortOrder(SortOrder::NameAsc)
        );
        assert_eq!(
            SettingKey::ShowUsed.change("true").unwrap(),
            SettingsChange::ShowUsed(true)
        );
        assert_eq!(
            SettingKey::CriticalDays.change(" 3 ").unwrap(),
            SettingsChange::CriticalDays(3)
        );
        assert!(SettingKey::ExpiringSoonDays.change("soon").is_err());
        assert!(SettingKey::SortOrder.change("random").is_err());
    }

    #[test]
    fn setting_keys_use_kebab_case() {
        let cli =
            Cli::try_parse_from(["freezr", "settings", "set", "default-reminder-days", "30"]).unwrap();
        assert_eq!(
            cli.command,
            Command::Settings {
                action: Some(SettingsAction::Set {
                    key: SettingKey::DefaultReminderDays,
                    value: "30".to_string()
                })
            }
        );
    }
}
