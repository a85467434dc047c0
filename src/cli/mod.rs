use chrono::NaiveDate;
use clap::{Parser, Subcommand};
use std::str::FromStr;

use crate::constants::{APP_DESCRIPTION, APP_NAME, DATE_FORMAT_COMPACT};

/// Parses a date in YYYY-MM-DD or YYYYMMDD format.
pub fn parse_date(date_str: &str) -> Result<NaiveDate, chrono::ParseError> {
    // Try parsing in YYYY-MM-DD format first
    NaiveDate::from_str(date_str)
        // Try parsing in YYYYMMDD format if the first format failed
        .or_else(|_| NaiveDate::parse_from_str(date_str, DATE_FORMAT_COMPACT))
}

/// A daily journaling tool with mood and habit insights
#[derive(Parser, Debug)]
#[clap(name = APP_NAME, about = APP_DESCRIPTION)]
#[clap(author, version, long_about = None)]
pub struct CliArgs {
    #[clap(subcommand)]
    pub command: Command,

    /// Print verbose output
    #[clap(short = 'v', long, global = true)]
    pub verbose: bool,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Create a new account
    Register {
        /// Username (3-20 characters, letters and digits only)
        #[clap(long)]
        username: String,

        /// Email address
        #[clap(long)]
        email: String,

        /// Password (min 8 chars with an uppercase letter, a digit and a symbol)
        #[clap(long)]
        password: String,
    },

    /// Log in and save the session
    Login {
        #[clap(long)]
        username: String,

        #[clap(long)]
        password: String,
    },

    /// Log out and clear the session
    Logout,

    /// Show the currently logged in user
    Whoami,

    /// Write or update the entry for a day (one entry per day)
    Write {
        /// Entry date (YYYY-MM-DD or YYYYMMDD, defaults to today)
        #[clap(short = 'd', long)]
        date: Option<String>,

        /// Entry title
        #[clap(short = 't', long, default_value = "")]
        title: String,

        /// Primary mood (Positive, Neutral or Negative; defaults to Neutral)
        #[clap(short = 'm', long, default_value = "")]
        mood: String,

        /// Secondary moods, comma-separated
        #[clap(long, default_value = "")]
        secondary_moods: String,

        /// Tags, comma-separated
        #[clap(long, default_value = "")]
        tags: String,

        /// Entry text. Read from stdin when omitted.
        #[clap(short = 'c', long)]
        content: Option<String>,
    },

    /// Show the entry for a day
    Show {
        /// Entry date (YYYY-MM-DD or YYYYMMDD, defaults to today)
        #[clap(short = 'd', long)]
        date: Option<String>,
    },

    /// List entries in a date range
    List {
        /// Start date (defaults to 30 days before the end date)
        #[clap(long)]
        from: Option<String>,

        /// End date (defaults to today)
        #[clap(long)]
        to: Option<String>,
    },

    /// Delete the entry for a day
    Delete {
        /// Entry date (YYYY-MM-DD or YYYYMMDD)
        #[clap(short = 'd', long)]
        date: String,
    },

    /// Compute journaling insights over a date range
    Insights {
        /// Start date (defaults to 30 days before the end date)
        #[clap(long)]
        from: Option<String>,

        /// End date (defaults to today)
        #[clap(long)]
        to: Option<String>,

        /// Emit the full report as JSON instead of text
        #[clap(long)]
        json: bool,
    },
}

impl CliArgs {
    /// Parse command-line arguments
    pub fn parse() -> Self {
        CliArgs::parse_from(std::env::args())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Datelike;

    #[test]
    fn test_parse_date_iso() {
        let date = parse_date("2023-01-15").unwrap();
        assert_eq!(date.year(), 2023);
        assert_eq!(date.month(), 1);
        assert_eq!(date.day(), 15);
    }

    #[test]
    fn test_parse_date_compact() {
        let date = parse_date("20230115").unwrap();
        assert_eq!(date, NaiveDate::from_ymd_opt(2023, 1, 15).unwrap());
    }

    #[test]
    fn test_parse_date_invalid() {
        assert!(parse_date("not-a-date").is_err());
        assert!(parse_date("2023-13-40").is_err());
    }

    #[test]
    fn test_register_command() {
        let args = CliArgs::parse_from(vec![
            "daybook", "register", "--username", "alice", "--email", "a@example.com",
            "--password", "Secret123!",
        ]);
        match args.command {
            Command::Register {
                username,
                email,
                password,
            } => {
                assert_eq!(username, "alice");
                assert_eq!(email, "a@example.com");
                assert_eq!(password, "Secret123!");
            }
            _ => panic!("Expected register command"),
        }
    }

    #[test]
    fn test_write_command_defaults() {
        let args = CliArgs::parse_from(vec!["daybook", "write", "--content", "hello"]);
        match args.command {
            Command::Write {
                date,
                title,
                mood,
                secondary_moods,
                tags,
                content,
            } => {
                assert!(date.is_none());
                assert_eq!(title, "");
                assert_eq!(mood, "");
                assert_eq!(secondary_moods, "");
                assert_eq!(tags, "");
                assert_eq!(content, Some("hello".to_string()));
            }
            _ => panic!("Expected write command"),
        }
    }

    #[test]
    fn test_write_command_full() {
        let args = CliArgs::parse_from(vec![
            "daybook",
            "write",
            "-d",
            "2024-06-01",
            "-t",
            "Big day",
            "-m",
            "positive",
            "--tags",
            "Work, Yoga",
            "-c",
            "Shipped it.",
        ]);
        match args.command {
            Command::Write {
                date, title, mood, tags, ..
            } => {
                assert_eq!(date, Some("2024-06-01".to_string()));
                assert_eq!(title, "Big day");
                assert_eq!(mood, "positive");
                assert_eq!(tags, "Work, Yoga");
            }
            _ => panic!("Expected write command"),
        }
    }

    #[test]
    fn test_insights_command() {
        let args = CliArgs::parse_from(vec![
            "daybook",
            "insights",
            "--from",
            "2024-01-01",
            "--to",
            "2024-01-31",
            "--json",
        ]);
        match args.command {
            Command::Insights { from, to, json } => {
                assert_eq!(from, Some("2024-01-01".to_string()));
                assert_eq!(to, Some("2024-01-31".to_string()));
                assert!(json);
            }
            _ => panic!("Expected insights command"),
        }
    }

    #[test]
    fn test_verbose_flag_is_global() {
        let args = CliArgs::parse_from(vec!["daybook", "whoami", "--verbose"]);
        assert!(args.verbose);
        assert!(matches!(args.command, Command::Whoami));
    }
}
