mod analyze;
mod cache;
mod cli;
mod config;
mod error;
mod repl;
mod report;
mod scan;
mod types;

use crate::error::{AuditError, Result};
use crate::types::config::{AuditConfig, AuditSettings, MatchMode};
use clap::Parser;
use std::path::Path;
use tracing::info;
use tracing_subscriber::EnvFilter;

pub mod exit_code {
    pub const SUCCESS: i32 = 0;
    pub const WARNINGS: i32 = 1;
    pub const HIGH_RISK: i32 = 2;
    pub const RUNTIME_FAILURE: i32 = 3;
}

fn init_tracing(verbose: u8, quiet: bool) {
    let default_level = if quiet {
        "error"
    } else {
        match verbose {
            0 => "warn",
            1 => "info",
            _ => "debug",
        }
    };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init();
}

/// Layers command-line flags over the config files found for `dir`.
fn resolve_settings(dir: &Path, args: &cli::ScanArgs) -> Result<(AuditConfig, AuditSettings)> {
    let loaded = config::load_config(dir)?;
    let mut settings = loaded.settings();
    if let Some(max_pages) = args.max_pages {
        if max_pages == 0 {
            return Err(AuditError::ConfigParse(
                "--max-pages must be greater than 0".to_string(),
            ));
        }
        settings.max_pages = max_pages;
    }
    if let Some(mode) = args.mode {
        settings.mode = match mode {
            cli::ModeArg::Permissive => MatchMode::Permissive,
            cli::ModeArg::Strict => MatchMode::Strict,
        };
    }
    Ok((loaded, settings))
}

fn run() -> Result<i32> {
    let cli = cli::Cli::parse();
    init_tracing(cli.verbose, cli.quiet);
    info!("greenaudit v{}", env!("CARGO_PKG_VERSION"));

    match cli.command {
        cli::Commands::Audit(cmd) => {
            let (loaded, settings) = resolve_settings(&cmd.path, &cmd.scan)?;
            let fail_above = cmd.fail_above.or(loaded.fail_above());
            if let Some(threshold) = fail_above {
                if !(0.0..=100.0).contains(&threshold) {
                    return Err(AuditError::ConfigParse(
                        "--fail-above must be between 0.0 and 100.0".to_string(),
                    ));
                }
            }

            let results = scan::run_batch(&cmd.path, &settings);
            let output_format = match cmd.format {
                cli::ReportFormat::Json => report::OutputFormat::Json,
                cli::ReportFormat::Md => report::OutputFormat::Md,
                cli::ReportFormat::Csv => report::OutputFormat::Csv,
                cli::ReportFormat::Scatter => report::OutputFormat::Scatter,
            };
            let rendered = report::render(&results, output_format)?;
            match &cmd.output {
                Some(path) => {
                    std::fs::write(path, &rendered)?;
                    println!("report file: {}", path.display());
                }
                None => println!("{rendered}"),
            }

            if results.is_empty() {
                eprintln!("warning: no documents scored in {}", cmd.path.display());
                return Ok(exit_code::WARNINGS);
            }

            match (fail_above, results.max_risk()) {
                (Some(threshold), Some(max_risk)) if max_risk >= threshold => {
                    eprintln!("risk threshold exceeded: {max_risk:.1} >= {threshold:.1}");
                    Ok(exit_code::HIGH_RISK)
                }
                _ => Ok(exit_code::SUCCESS),
            }
        }
        cli::Commands::Show(cmd) => {
            let (_, settings) = resolve_settings(&cmd.path, &cmd.scan)?;
            let results = scan::run_batch(&cmd.path, &settings);
            let record = results
                .find(&cmd.company)
                .ok_or_else(|| AuditError::CompanyNotFound(cmd.company.clone()))?;
            print!("{}", report::md::evidence_section(record));
            Ok(exit_code::SUCCESS)
        }
        cli::Commands::Explore(cmd) => {
            let (_, settings) = resolve_settings(&cmd.path, &cmd.scan)?;
            repl::run_session(&cmd.path, settings)?;
            Ok(exit_code::SUCCESS)
        }
    }
}

fn main() {
    match run() {
        Ok(code) => {
            if code != 0 {
                std::process::exit(code);
            }
        }
        Err(e) => {
            eprintln!("error: {}", e);
            std::process::exit(exit_code::RUNTIME_FAILURE);
        }
    }
}
