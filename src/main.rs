//! pocketbin — imports a Pocket CSV bookmark export into a Feedbin account.
//!
//! Usage: `pocketbin <pocket-export.csv>`
//!
//! Credentials are taken from `FEEDBIN_EMAIL`/`FEEDBIN_PASSWORD` when both
//! are set, otherwise collected interactively. Exit code is 0 only when
//! every bookmark imported.

use std::env;
use std::io::{self, BufRead, Write};
use std::path::{Path, PathBuf};
use std::process::ExitCode;

use tracing_subscriber::EnvFilter;

use pocketbin::app::{ImportSession, StartOutcome};
use pocketbin::importer::csv_validator;
use pocketbin::services::csv_source;
use pocketbin::services::settings_engine::{SettingsEngine, SettingsEngineTrait};
use pocketbin::types::status::{ImportPhase, ImportStatus};

#[tokio::main]
async fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("pocketbin=info")),
        )
        .init();

    let Some(csv_path) = env::args().nth(1).map(PathBuf::from) else {
        eprintln!("Usage: pocketbin <pocket-export.csv>");
        return ExitCode::FAILURE;
    };

    match run(&csv_path).await {
        Ok(status) => report(&status),
        Err(err) => {
            eprintln!("{}", err);
            ExitCode::FAILURE
        }
    }
}

/// Parses and validates the export, then drives the import, pausing for
/// credentials when the gate asks for them.
async fn run(csv_path: &Path) -> Result<ImportStatus, Box<dyn std::error::Error>> {
    let mut engine = SettingsEngine::new(None);
    let settings = engine.load()?;

    let rows = csv_source::read_rows_from_path(csv_path)?;
    let table = csv_validator::validate(&rows)?;
    println!(
        "Parsed {} bookmark(s) from {}",
        table.len(),
        csv_path.display()
    );

    let mut session = ImportSession::with_feedbin(&settings)?;
    let mut env_credentials = credentials_from_env();

    loop {
        match session.start_import(table.records()).await {
            StartOutcome::Ran(status) => return Ok(status),
            StartOutcome::CredentialsRequested => {
                let (email, password) = match env_credentials.take() {
                    Some(pair) => pair,
                    None => prompt_credentials()?,
                };
                if let Err(err) = session.provide_credentials(&email, &password) {
                    eprintln!("{}", err);
                }
            }
        }
    }
}

/// Prints the final summary. Items confirmed imported stay reported as
/// imported even when a later item halted the run.
fn report(status: &ImportStatus) -> ExitCode {
    for warning in &status.warnings {
        println!("warning: item {}: {}", warning.index + 1, warning.message);
    }

    match status.phase {
        ImportPhase::Completed => {
            println!(
                "Imported {} of {} bookmark(s).",
                status.succeeded.len(),
                status.total
            );
            ExitCode::SUCCESS
        }
        ImportPhase::Failed => {
            println!(
                "Import stopped at item {} of {}: {}",
                status.cursor + 1,
                status.total,
                status.last_error.as_deref().unwrap_or("unknown error")
            );
            println!(
                "{} bookmark(s) were imported before the failure.",
                status.succeeded.len()
            );
            ExitCode::FAILURE
        }
        ImportPhase::Idle | ImportPhase::Importing => ExitCode::FAILURE,
    }
}

fn credentials_from_env() -> Option<(String, String)> {
    match (env::var("FEEDBIN_EMAIL"), env::var("FEEDBIN_PASSWORD")) {
        (Ok(email), Ok(password)) => Some((email, password)),
        _ => None,
    }
}

fn prompt_credentials() -> io::Result<(String, String)> {
    let email = prompt_line("Feedbin email: ")?;
    let password = prompt_line("Feedbin password: ")?;
    Ok((email, password))
}

fn prompt_line(label: &str) -> io::Result<String> {
    print!("{}", label);
    io::stdout().flush()?;
    let mut line = String::new();
    io::stdin().lock().read_line(&mut line)?;
    Ok(line.trim_end_matches(['\r', '\n']).to_string())
}
