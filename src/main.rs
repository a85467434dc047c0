/*!
# Daybook - A Daily Journaling Tool

Daybook is a command-line tool for keeping a daily journal with moods and
tags, and for computing insights over it: mood distribution, writing streaks,
missed days, top tags, a category breakdown, and a word-count trend.

Each user has at most one entry per calendar date; writing to a date that
already has an entry edits it in place.

## Usage

```text
daybook <COMMAND>

Commands:
  register  Create a new account
  login     Log in and save the session
  logout    Log out and clear the session
  whoami    Show the currently logged in user
  write     Write or update the entry for a day (one entry per day)
  show      Show the entry for a day
  list      List entries in a date range
  delete    Delete the entry for a day
  insights  Compute journaling insights over a date range
```

## Configuration

The application can be configured with the following environment variables:
- `DAYBOOK_DIR`: The data directory for the database and session file
  (defaults to "~/.daybook")
- `DAYBOOK_LOG`: Log filter for the tracing subscriber (e.g. "debug")
*/

use std::io::Read;

use chrono::{Local, NaiveDate};
use tracing::{debug, info};
use tracing_subscriber::EnvFilter;

use daybook::cli::{self, CliArgs, Command};
use daybook::config::Config;
use daybook::constants::ENV_VAR_DAYBOOK_LOG;
use daybook::db::Database;
use daybook::errors::{AppError, AppResult};
use daybook::ops;
use daybook::session::Session;

fn parse_date_arg(date_str: &str) -> AppResult<NaiveDate> {
    cli::parse_date(date_str).map_err(|e| AppError::Journal(format!("Invalid date format: {}", e)))
}

fn parse_optional_date(date_str: Option<&str>) -> AppResult<Option<NaiveDate>> {
    date_str.map(parse_date_arg).transpose()
}

/// Reads entry content from stdin when `--content` was not given.
fn resolve_content(content: Option<String>) -> AppResult<String> {
    match content {
        Some(text) => Ok(text),
        None => {
            let mut text = String::new();
            std::io::stdin().read_to_string(&mut text)?;
            Ok(text.trim_end().to_string())
        }
    }
}

/// The main entry point for the daybook application.
///
/// Coordinates the overall application flow:
/// 1. Initializes logging
/// 2. Parses command-line arguments
/// 3. Loads and validates configuration
/// 4. Ensures the data directory exists and opens the database
/// 5. Dispatches to the requested operation
///
/// # Errors
///
/// Returns configuration, database, session, validation, or journal errors
/// from any step of the flow.
fn main() -> AppResult<()> {
    let args = CliArgs::parse();

    let default_filter = if args.verbose { "debug" } else { "warn" };
    let filter = EnvFilter::try_from_env(ENV_VAR_DAYBOOK_LOG)
        .unwrap_or_else(|_| EnvFilter::new(default_filter));
    tracing_subscriber::fmt().with_env_filter(filter).init();

    info!("Starting daybook");

    let today = Local::now().naive_local().date();

    let config = Config::load()?;
    config.validate()?;
    config.ensure_data_dir()?;

    debug!("Opening database");
    let db = Database::open(&config.db_path())?;
    db.initialize_schema()?;

    let session_path = config.session_path();

    match args.command {
        Command::Register {
            username,
            email,
            password,
        } => {
            ops::register(&db, &username, &email, &password)?;
            println!("Account '{}' created. You can now log in.", username);
        }

        Command::Login { username, password } => {
            let session = ops::login(&db, &session_path, &username, &password)?;
            println!("Logged in as '{}'.", session.username);
        }

        Command::Logout => {
            ops::logout(&session_path)?;
            println!("Logged out.");
        }

        Command::Whoami => {
            let user = ops::whoami(&db, &session_path)?;
            println!("{} <{}>", user.username, user.email);
        }

        Command::Write {
            date,
            title,
            mood,
            secondary_moods,
            tags,
            content,
        } => {
            let session = Session::load(&session_path)?;
            let entry_date = parse_optional_date(date.as_deref())?.unwrap_or(today);
            let content = resolve_content(content)?;

            ops::write_entry(
                &db,
                session.user_id,
                entry_date,
                &title,
                &content,
                &mood,
                &secondary_moods,
                &tags,
            )?;
            println!("Saved entry for {}.", entry_date);
        }

        Command::Show { date } => {
            let session = Session::load(&session_path)?;
            let entry_date = parse_optional_date(date.as_deref())?.unwrap_or(today);

            let entry = ops::show_entry(&db, session.user_id, entry_date)?;
            println!("{}  {}", entry.entry_date, entry.title);
            if !entry.mood.is_empty() {
                println!("Mood: {}", entry.mood);
            }
            if !entry.secondary_moods_csv.is_empty() {
                println!("Also feeling: {}", entry.secondary_moods_csv);
            }
            if !entry.tags_csv.is_empty() {
                println!("Tags: {}", entry.tags_csv);
            }
            println!();
            println!("{}", entry.content);
        }

        Command::List { from, to } => {
            let session = Session::load(&session_path)?;
            let from = parse_optional_date(from.as_deref())?;
            let to = parse_optional_date(to.as_deref())?;
            let (from, to) = ops::resolve_range(from, to, today);

            let entries = ops::list_entries(&db, session.user_id, from, to)?;
            if entries.is_empty() {
                println!("No entries between {} and {}.", from, to);
            }
            for entry in entries {
                println!(
                    "{}  [{}] {}",
                    entry.entry_date,
                    entry.mood,
                    entry.title
                );
            }
        }

        Command::Delete { date } => {
            let session = Session::load(&session_path)?;
            let entry_date = parse_date_arg(&date)?;

            ops::delete_entry(&db, session.user_id, entry_date)?;
            println!("Deleted entry for {}.", entry_date);
        }

        Command::Insights { from, to, json } => {
            let session = Session::load(&session_path)?;
            let from = parse_optional_date(from.as_deref())?;
            let to = parse_optional_date(to.as_deref())?;
            let (from, to) = ops::resolve_range(from, to, today);

            let result = ops::compute_insights(&db, session.user_id, from, to)?;
            if json {
                let rendered = serde_json::to_string_pretty(&result)
                    .map_err(|e| AppError::Journal(format!("Failed to encode report: {}", e)))?;
                println!("{}", rendered);
            } else {
                print!("{}", ops::render_text_report(&result));
            }
        }
    }

    Ok(())
}
