//! CLI entry point for customs.
//!
//! This module is intentionally thin: it handles logging, environment, config
//! file loading, printing, and exit codes. All business logic lives in the
//! `customs-app` crate.

use anyhow::Context;
use clap::Parser;
use customs_app::{InspectionInput, format_outcome, run_inspection, summary_exit_code};
use customs_settings::{CustomsConfigV1, DEFAULT_CONFIG_PATH, ENV_CONFIG, Overrides};
use std::io::ErrorKind;
use tracing_subscriber::EnvFilter;

const ENV_LOG: &str = "CUSTOMS_LOG";

/// Inspect every passenger in the configured manifest and print one line each.
///
/// Configuration comes from `customs.toml` (or `$CUSTOMS_CONFIG`) and the
/// `CUSTOMS_*` environment variables. Exit codes: 0 all passengers as
/// expected, 2 at least one mismatch, 1 error.
#[derive(Parser, Debug)]
#[command(name = "customs", version, about = "Customs inspection over a passenger manifest")]
struct Cli {}

fn main() -> anyhow::Result<()> {
    let _cli = Cli::parse();
    init_logging();

    match run() {
        Ok(code) => {
            if code != 0 {
                std::process::exit(code);
            }
            Ok(())
        }
        Err(err) => {
            eprintln!("customs error: {err:#}");
            std::process::exit(1);
        }
    }
}

fn init_logging() {
    let filter = EnvFilter::try_from_env(ENV_LOG).unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn run() -> anyhow::Result<i32> {
    let vars = env_vars();

    let cfg = load_config(&vars)?;
    let overrides = Overrides::from_env_vars(vars);
    let resolved = customs_settings::resolve_config(cfg, overrides).context("resolve config")?;
    tracing::debug!(?resolved, "configuration resolved");

    let output = run_inspection(InspectionInput { config: &resolved })?;
    for outcome in &output.outcomes {
        println!("{}", format_outcome(outcome));
    }

    Ok(summary_exit_code(&output.summary))
}

/// Non-UTF-8 variables cannot carry our settings, so they are skipped.
fn env_vars() -> Vec<(String, String)> {
    std::env::vars_os()
        .filter_map(|(k, v)| Some((k.into_string().ok()?, v.into_string().ok()?)))
        .collect()
}

/// The default config path may be absent (defaults apply); an explicit one must exist.
fn load_config(vars: &[(String, String)]) -> anyhow::Result<CustomsConfigV1> {
    let explicit = vars
        .iter()
        .find(|(k, v)| k == ENV_CONFIG && !v.trim().is_empty())
        .map(|(_, v)| v.clone());
    let path = explicit.clone().unwrap_or_else(|| DEFAULT_CONFIG_PATH.to_string());

    let text = match std::fs::read_to_string(&path) {
        Ok(text) => text,
        Err(err) if err.kind() == ErrorKind::NotFound && explicit.is_none() => String::new(),
        Err(err) => return Err(err).with_context(|| format!("read config {path}")),
    };

    if text.trim().is_empty() {
        return Ok(CustomsConfigV1::default());
    }
    customs_settings::parse_config_toml(&text).with_context(|| format!("parse config {path}"))
}
