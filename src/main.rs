use anyhow::Context;
use anyhow::Result;
use clap::Parser;
use std::fs::read_to_string;
use std::io::Read;
use std::process::ExitCode;

use scanlist::ScanlistLogger;
use scanlist::format_validation_errors;
use scanlist::validate_targets;

/// Checks a list of scan targets before it is handed to a scanner.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// Input from list of hosts/networks (same as nmap -iL parameter),
    /// reads stdin when empty
    #[arg(long, default_value = "")]
    filename: String,

    /// Print the failure list as JSON
    #[arg(long, default_value_t = false)]
    json: bool,

    /// Show debug logs
    #[arg(long, default_value_t = false)]
    debug: bool,
}

fn read_targets(filename: &str) -> Result<String> {
    if filename.is_empty() {
        let mut targets = String::new();
        std::io::stdin()
            .read_to_string(&mut targets)
            .context("can not read stdin")?;
        Ok(targets)
    } else {
        read_to_string(filename).with_context(|| format!("can not open file [{}]", filename))
    }
}

fn main() -> Result<ExitCode> {
    let args = Args::parse();
    let logger = if args.debug {
        ScanlistLogger::Debug
    } else {
        ScanlistLogger::Warn
    };
    logger.init()?;

    let targets = read_targets(&args.filename)?;
    let failures = validate_targets(&targets);

    if args.json {
        println!("{}", serde_json::to_string_pretty(&failures)?);
    } else if failures.is_empty() {
        let total = targets
            .split('\n')
            .map(str::trim)
            .filter(|line| !line.is_empty() && !line.starts_with('#'))
            .count();
        println!("{} targets ok", total);
    } else {
        eprintln!("{}", format_validation_errors(&failures));
    }

    if failures.is_empty() {
        Ok(ExitCode::SUCCESS)
    } else {
        Ok(ExitCode::FAILURE)
    }
}
