use clap::Parser;
use serde::Serialize;
use simatic_address::{
    validate_channels, AddressSpec, AddressValidator, ChannelOutcome, ValidationReport,
};
use simatic_common::{constants::DEFAULT_CONFIG_FILE_NAME, Logger, Settings};
use simatic_error::{SimaticError, SimaticResult};
use std::{env::current_dir, path::PathBuf, process::ExitCode};
use tracing::{info, Level};

/// Simatic Check - validate S7 channel address configuration
///
/// Loads the `[[channels]]` of a configuration file and checks every state
/// and command address against the grammar of the channel type, before any
/// connection to a PLC is made.
#[derive(Parser)]
#[command(name = "simatic-check")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "Validate Siemens S7 channel addresses", long_about = None)]
struct Cli {
    /// Sets a custom config file with full path
    ///
    /// If not specified, 'simatic.toml' in the current working directory is
    /// used when present.
    #[arg(short, long, env = "SIMATIC_CONFIG")]
    config: Option<PathBuf>,

    /// Validate a single address, given as `<channel-type>=<address>`
    /// (e.g. `chNumber=DB1.DBD0F`). May be repeated.
    #[arg(short, long = "address", value_name = "TYPE=ADDRESS")]
    addresses: Vec<String>,

    /// Overrides `general.log_level`
    #[arg(long)]
    log_level: Option<Level>,

    /// Print the result as JSON
    #[arg(long)]
    json: bool,
}

/// Result of an ad-hoc `--address` check.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct AddressOutcome {
    input: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    spec: Option<AddressSpec>,
    #[serde(skip_serializing_if = "Option::is_none")]
    error: Option<String>,
}

#[derive(Debug, Serialize)]
struct Output<'a> {
    channels: &'a ValidationReport,
    addresses: &'a [AddressOutcome],
}

fn main() -> SimaticResult<ExitCode> {
    let cli = Cli::parse();

    let config_path = match cli.config {
        Some(p) => p,
        None => current_dir()?.join(DEFAULT_CONFIG_FILE_NAME),
    };
    let settings = Settings::new(&config_path.to_string_lossy())?;

    let level = match cli.log_level {
        Some(level) => level,
        None => settings.general.level()?,
    };
    let mut logger = Logger::new(Some(level));
    if let Some(dir) = &settings.log.dir {
        logger = logger.with_file(dir, settings.log.file_name.as_str());
    }
    logger.initialize()?;

    info!(config = %config_path.display(), channels = settings.channels.len(), "validating channel addresses");

    let report = validate_channels(&settings.channels);
    let addresses = cli
        .addresses
        .iter()
        .map(|input| check_address(input))
        .collect::<Vec<_>>();

    if cli.json {
        let output = Output {
            channels: &report,
            addresses: &addresses,
        };
        println!("{}", serde_json::to_string_pretty(&output)?);
    } else {
        print_text(&report, &addresses);
    }

    Ok(exit_code(&report, &addresses))
}

/// Failure as soon as one channel or one ad-hoc address was rejected.
fn exit_code(report: &ValidationReport, addresses: &[AddressOutcome]) -> ExitCode {
    let clean = report.is_clean() && addresses.iter().all(|a| a.error.is_none());
    if clean {
        ExitCode::SUCCESS
    } else {
        ExitCode::FAILURE
    }
}

fn check_address(input: &str) -> AddressOutcome {
    let result = match input.split_once('=') {
        Some((type_id, address)) => AddressValidator
            .validate_type_id(type_id.trim(), address)
            .map_err(|e| SimaticError::from(e).to_string()),
        None => Err(format!(
            "expected <channel-type>=<address>, got '{input}'"
        )),
    };
    match result {
        Ok(spec) => AddressOutcome {
            input: input.to_string(),
            spec: Some(spec),
            error: None,
        },
        Err(error) => AddressOutcome {
            input: input.to_string(),
            spec: None,
            error: Some(error),
        },
    }
}

fn print_text(report: &ValidationReport, addresses: &[AddressOutcome]) {
    for outcome in &report.outcomes {
        match outcome {
            ChannelOutcome::Accepted(channel) => {
                let mut line = format!("OK    {} ({})", channel.channel_id, channel.kind);
                if let Some(state) = &channel.state {
                    line.push_str(&format!(" state={state}"));
                }
                if let Some(command) = &channel.command {
                    line.push_str(&format!(" command={command}"));
                }
                println!("{line}");
            }
            ChannelOutcome::Rejected { channel, error } => {
                println!("FAIL  {channel}: {error}");
            }
        }
    }
    for outcome in addresses {
        match (&outcome.spec, &outcome.error) {
            (Some(spec), _) => println!(
                "OK    {} -> {spec} ({} byte(s))",
                outcome.input,
                spec.byte_len()
            ),
            (None, Some(error)) => println!("FAIL  {}: {error}", outcome.input),
            (None, None) => {}
        }
    }
    println!(
        "{} channel(s) accepted, {} rejected",
        report.accepted(),
        report.rejected()
    );
}
