mod output;

use std::path::{Path, PathBuf};
use std::process::ExitCode;

use clap::{Parser, Subcommand};
use colored::Colorize;
use serde_json::Value;
use stratus_lib::{ClientOptions, Stratus, StratusError};
use thiserror::Error;
use tracing_subscriber::{filter::EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

/// Materialize service clients from API descriptions at run time.
///
/// Examples:
///   stratus inspect dynamodb.api.json               # List operations and error classes
///   stratus inspect dynamodb.api.json --json        # Same, as JSON
///   stratus check dynamodb.api.json --region us-east-1
///   stratus check s3.api.json --set endpoint=http://localhost:9000
#[derive(Debug, Parser)]
#[command(name = "stratus")]
#[command(version)]
#[command(about = "Materialize service clients from API descriptions at run time")]
struct Cli {
    /// Increase log verbosity (-v info, -vv debug, -vvv trace).
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Show the operations and error classes a schema produces.
    Inspect {
        /// Path to the JSON API description.
        #[arg(value_name = "SCHEMA")]
        schema: PathBuf,

        /// Service name (defaults to the schema file name).
        #[arg(long)]
        name: Option<String>,

        /// Output as JSON instead of terminal format.
        #[arg(long)]
        json: bool,
    },

    /// Run the configuration gate a client constructor would run.
    ///
    /// Defaults are read from STRATUS_REGION, STRATUS_ACCESS_KEY_ID,
    /// STRATUS_SECRET_ACCESS_KEY and STRATUS_SESSION_TOKEN.
    Check {
        /// Path to the JSON API description.
        #[arg(value_name = "SCHEMA")]
        schema: PathBuf,

        /// Service name (defaults to the schema file name).
        #[arg(long)]
        name: Option<String>,

        /// Region for the client.
        #[arg(long)]
        region: Option<String>,

        /// Extra client option; the value is parsed as JSON, falling back to a string.
        #[arg(long = "set", value_name = "KEY=VALUE", value_parser = parse_setting)]
        settings: Vec<(String, Value)>,
    },
}

#[derive(Debug, Error)]
enum CliError {
    #[error(transparent)]
    Stratus(#[from] StratusError),

    #[error("cannot derive a service name from {0}; pass --name")]
    NoServiceName(PathBuf),

    #[error("failed to encode output: {0}")]
    Json(#[from] serde_json::Error),
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    match run(cli.command) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("{} {e}", "error:".red().bold());
            ExitCode::FAILURE
        }
    }
}

fn init_tracing(verbose: u8) {
    let base_filter = match std::env::var("RUST_LOG") {
        Ok(filter) => filter,
        Err(_) => match verbose {
            0 => "warn".to_string(),
            1 => "warn,stratus_lib=info".to_string(),
            2 => "info,stratus_lib=debug".to_string(),
            _ => "debug,stratus_lib=trace".to_string(),
        },
    };

    let filter = EnvFilter::try_new(&base_filter).unwrap_or_else(|_| EnvFilter::new("warn"));

    tracing_subscriber::registry()
        .with(filter)
        .with(
            fmt::layer()
                .with_target(verbose >= 2)
                .with_writer(std::io::stderr)
                .compact(),
        )
        .init();
}

fn run(command: Command) -> Result<(), CliError> {
    match command {
        Command::Inspect { schema, name, json } => {
            let stratus = Stratus::global();
            let name = service_name(&schema, name)?;
            let service = stratus.add_service(&name, schema.as_path())?;

            if json {
                println!("{}", serde_json::to_string_pretty(&output::inspect_json(&service))?);
            } else {
                print!("{}", output::inspect_text(&service));
            }
            Ok(())
        }
        Command::Check {
            schema,
            name,
            region,
            settings,
        } => {
            let stratus = Stratus::global();
            let name = service_name(&schema, name)?;
            let service = stratus.add_service(&name, schema.as_path())?;

            let mut options = ClientOptions::new();
            if let Some(region) = region {
                options = options.region(region);
            }
            for (key, value) in settings {
                options = options.option(key, value);
            }

            let client = service.new_client(options)?;
            print!("{}", output::config_text(service.name().as_str(), client.config()));
            Ok(())
        }
    }
}

/// Picks the service name: `--name`, else the schema file name up to its first dot.
fn service_name(schema: &Path, explicit: Option<String>) -> Result<String, CliError> {
    if let Some(name) = explicit {
        return Ok(name);
    }

    let stem = schema
        .file_name()
        .and_then(|f| f.to_str())
        .and_then(|f| f.split('.').next())
        .filter(|s| !s.is_empty())
        .ok_or_else(|| CliError::NoServiceName(schema.to_path_buf()))?;

    let mut chars = stem.chars();
    let name = match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect::<String>(),
        None => return Err(CliError::NoServiceName(schema.to_path_buf())),
    };
    Ok(name.replace('-', "_"))
}

/// Parses `KEY=VALUE`, reading the value as JSON when it parses.
fn parse_setting(raw: &str) -> Result<(String, Value), String> {
    let (key, value) = raw
        .split_once('=')
        .ok_or_else(|| format!("expected KEY=VALUE, got '{raw}'"))?;
    if key.is_empty() {
        return Err("setting key must not be empty".to_string());
    }
    let value = serde_json::from_str(value).unwrap_or_else(|_| Value::String(value.to_string()));
    Ok((key.to_string(), value))
}
