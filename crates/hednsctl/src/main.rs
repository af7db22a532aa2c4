// # hednsctl - Hurricane Electric DNS CLI
//
// Thin command-line shell over `hedns-core` and `hedns-console`. It parses
// arguments, prompts for whatever credentials are missing, runs exactly one
// command against one console session and maps the result to an exit code.
// Record logic (existence checks, confirmation gating, batch accounting)
// lives in the libraries.
//
// ## Configuration
//
// Credentials come from flags, the environment, or an interactive prompt:
// - `HEDNS_USERNAME` / `-u`: account e-mail
// - `HEDNS_PASSWORD` / `-p`: account password (prompted without echo if unset)
// - `HEDNS_LOG_LEVEL` / `--log-level`: trace, debug, info, warn, error
//
// The console client itself reads:
// - `HEDNS_BASE_URL`: console address (default `https://dns.he.net`)
// - `HEDNS_HTTP_TIMEOUT_SECS`: per-request timeout (default 30)
// - `HEDNS_USER_AGENT`: User-Agent header override
//
// ## Example
//
// ```bash
// hednsctl -u admin@example.com list-zones
// hednsctl --domain example.com add-subdomain www api --content 192.0.2.10
// hednsctl --domain example.com --force-delete delete-subdomain old --type AAAA
// ```

mod prompt;

use anyhow::{Result, bail};
use clap::{CommandFactory, Parser, Subcommand};
use hedns_console::HeConsole;
use hedns_core::batch::{add_subdomains, delete_subdomains};
use hedns_core::model::DEFAULT_TTL;
use hedns_core::{
    BatchReport, Confirmation, ConsoleConfig, Credentials, DnsConsole, RecordType, Zone, ZoneRef,
};
use prompt::TerminalConfirmation;
use serde::Serialize;
use std::process::ExitCode;
use tracing::{Level, debug, error};
use tracing_subscriber::FmtSubscriber;

/// Exit codes
///
/// - 0: every requested item succeeded
/// - 1: fatal error, invalid usage, or a partially failed batch
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum HednsExitCode {
    Success = 0,
    Failure = 1,
}

impl From<HednsExitCode> for ExitCode {
    fn from(code: HednsExitCode) -> Self {
        ExitCode::from(code as u8)
    }
}

#[derive(Debug, Parser)]
#[command(author, version, about = "Hurricane Electric DNS management CLI", long_about = None)]
struct Cli {
    /// Hurricane Electric username/email
    #[arg(short, long, env = "HEDNS_USERNAME", global = true)]
    username: Option<String>,

    /// Hurricane Electric password
    #[arg(
        short,
        long,
        env = "HEDNS_PASSWORD",
        hide_env_values = true,
        global = true
    )]
    password: Option<String>,

    /// Enable debug output
    #[arg(short, long, global = true)]
    debug: bool,

    /// Domain name to operate on (e.g., example.com)
    #[arg(long, global = true)]
    domain: Option<String>,

    /// Zone ID to operate on (alternative to --domain)
    #[arg(long, global = true)]
    zone: Option<String>,

    /// Delete records without confirmation
    #[arg(long, global = true)]
    force_delete: bool,

    /// Log level (trace, debug, info, warn, error)
    #[arg(long, default_value = "info", env = "HEDNS_LOG_LEVEL", global = true)]
    log_level: String,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// List all zones
    ListZones,
    /// List all records for a zone
    ListRecords,
    /// Add one or more subdomains
    AddSubdomain {
        /// One or more subdomains to add (e.g., test.example.com)
        #[arg(required = true)]
        subdomains: Vec<String>,

        /// IP address content
        #[arg(long)]
        content: Option<String>,

        /// Record type
        #[arg(long = "type", default_value = "A", value_parser = parse_record_type)]
        record_type: RecordType,

        /// TTL in seconds
        #[arg(long, default_value_t = DEFAULT_TTL)]
        ttl: u32,
    },
    /// Delete one or more subdomains
    DeleteSubdomain {
        /// One or more subdomains to delete (e.g., test.example.com)
        #[arg(required = true)]
        subdomains: Vec<String>,

        /// Record type
        #[arg(long = "type", default_value = "A", value_parser = parse_record_type)]
        record_type: RecordType,
    },
}

fn parse_record_type(value: &str) -> std::result::Result<RecordType, String> {
    value.parse().map_err(|e: hedns_core::Error| e.to_string())
}

fn parse_log_level(value: &str) -> Result<Level> {
    Ok(match value.to_lowercase().as_str() {
        "trace" => Level::TRACE,
        "debug" => Level::DEBUG,
        "info" => Level::INFO,
        "warn" => Level::WARN,
        "error" => Level::ERROR,
        _ => bail!(
            "Log level '{}' is not valid. Valid levels: trace, debug, info, warn, error",
            value
        ),
    })
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    let log_level = if cli.debug {
        Level::DEBUG
    } else {
        match parse_log_level(&cli.log_level) {
            Ok(level) => level,
            Err(e) => {
                eprintln!("Configuration error: {}", e);
                return HednsExitCode::Failure.into();
            }
        }
    };

    // Stdout carries command output; diagnostics go to stderr
    let subscriber = FmtSubscriber::builder()
        .with_max_level(log_level)
        .with_writer(std::io::stderr)
        .finish();

    if let Err(e) = tracing::subscriber::set_global_default(subscriber) {
        eprintln!("Failed to set tracing subscriber: {}", e);
        return HednsExitCode::Failure.into();
    }

    let Some(command) = &cli.command else {
        if let Err(e) = Cli::command().print_help() {
            eprintln!("Failed to print help: {}", e);
            return HednsExitCode::Failure.into();
        }
        return HednsExitCode::Success.into();
    };

    let console = match connect(&cli) {
        Ok(console) => console,
        Err(e) => {
            eprintln!("Error: {:#}", e);
            return HednsExitCode::Failure.into();
        }
    };

    let rt = match tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()
    {
        Ok(runtime) => runtime,
        Err(e) => {
            error!("Failed to create tokio runtime: {}", e);
            return HednsExitCode::Failure.into();
        }
    };

    let code = rt.block_on(async {
        match run(&cli, command, &console).await {
            Ok(code) => code,
            Err(e) => {
                eprintln!("Error: {:#}", e);
                HednsExitCode::Failure
            }
        }
    });

    code.into()
}

/// Gather credentials and build the console client
fn connect(cli: &Cli) -> Result<HeConsole> {
    let username = match &cli.username {
        Some(username) => username.clone(),
        None => prompt::read_username()?,
    };
    let password = match &cli.password {
        Some(password) => password.clone(),
        None => prompt::read_password()?,
    };

    let config = ConsoleConfig::from_env()?;
    debug!("Using console at {}", config.base_url);

    Ok(HeConsole::new(&config, Credentials::new(username, password)?)?)
}

/// Execute one command
async fn run(cli: &Cli, command: &Commands, console: &HeConsole) -> Result<HednsExitCode> {
    let zone = match &cli.domain {
        Some(domain) => {
            let zone = console.find_zone(domain).await?;
            println!("Working with domain: {} (Zone ID: {})", domain, zone.id);
            Some(zone)
        }
        None => None,
    };

    match command {
        Commands::ListZones => {
            let zones = console.list_zones().await?;
            println!("\nZones:");
            print_json(&zones)?;
            Ok(HednsExitCode::Success)
        }

        Commands::ListRecords => {
            let target = list_target(cli.zone.as_deref(), zone.as_ref())?;
            let records = console.list_records(&target).await?;
            println!("\nRecords:");
            print_json(&records)?;
            Ok(HednsExitCode::Success)
        }

        Commands::AddSubdomain {
            subdomains,
            content,
            record_type,
            ttl,
        } => {
            let Some(zone) = zone else {
                bail!("For adding subdomains, you must provide --domain");
            };
            let Some(content) = content else {
                bail!("For adding subdomains, you must provide --content (IP address)");
            };

            let report =
                add_subdomains(console, &zone, subdomains, content, *record_type, *ttl).await?;
            print_json(&report)?;
            Ok(summarize(&report, "added", "Added"))
        }

        Commands::DeleteSubdomain {
            subdomains,
            record_type,
        } => {
            let Some(zone) = zone else {
                bail!("For deleting subdomains, you must provide --domain");
            };

            let terminal = TerminalConfirmation;
            let confirmation = if cli.force_delete {
                Confirmation::Forced
            } else {
                Confirmation::Ask(&terminal)
            };

            let report =
                delete_subdomains(console, &zone, subdomains, *record_type, confirmation).await?;
            print_json(&report)?;
            Ok(summarize(&report, "deleted", "Deleted"))
        }
    }
}

/// `--zone` wins over the zone resolved from `--domain`
fn list_target(zone_arg: Option<&str>, resolved: Option<&Zone>) -> Result<ZoneRef> {
    match (zone_arg, resolved) {
        (Some(zone), _) => Ok(ZoneRef::parse(zone)),
        (None, Some(zone)) => Ok(ZoneRef::from(zone)),
        (None, None) => bail!("You must specify either --domain or --zone"),
    }
}

fn print_json<T: Serialize + ?Sized>(value: &T) -> Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

fn summarize(report: &BatchReport, verb: &str, heading: &str) -> HednsExitCode {
    if report.all_succeeded() {
        println!("All {} subdomains {} successfully", report.succeeded(), verb);
        HednsExitCode::Success
    } else {
        println!(
            "{} {} out of {} subdomains",
            heading,
            report.succeeded(),
            report.total()
        );
        HednsExitCode::Failure
    }
}
