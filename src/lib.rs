//! Validation for user-supplied lists of network scan targets.
//!
//! Input is free-form multi-line text where every line names one target
//! as an IPv4 address, an IPv4 CIDR block, an IPv4 range or a domain
//! name, optionally suffixed with a `:port`. Blank lines and `#`
//! comments are passed over. Each offending line yields exactly one
//! diagnostic with its 1-based line number, suitable for showing to the
//! user before the list is handed to a scanner.
//!
//! Nothing here resolves names or touches the network, the checks are
//! pure functions over the input text.
//!
//! ```rust
//! use scanlist::{format_validation_errors, validate_targets};
//!
//! let input = "10.0.0.1\n192.168.1.0/24\n#comment\n10.0.0.400\nexample.com";
//! let failures = validate_targets(input);
//! assert_eq!(failures.len(), 1);
//! assert_eq!(failures[0].line, 4);
//! println!("{}", format_validation_errors(&failures));
//! ```
use anyhow::Result;
use anyhow::anyhow;
use serde::Serialize;
use serde::Serializer;
use std::fmt;
use tracing::Level;

mod batch;
mod error;
mod report;
mod target;

pub use batch::validate_targets;
pub use error::TargetError;
pub use report::format_validation_errors;
pub use target::validate_single_target;

/// One invalid line of a target list.
///
/// Serializes with the rendered diagnostic text as `message`, matching
/// the `{line, target, message}` shape consumed by frontends.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ValidationFailure {
    /// 1-based line number in the original input.
    pub line: usize,
    /// The trimmed target text of that line.
    pub target: String,
    /// What is wrong with it.
    #[serde(serialize_with = "message_text")]
    pub message: TargetError,
}

fn message_text<S>(message: &TargetError, serializer: S) -> Result<S::Ok, S::Error>
where
    S: Serializer,
{
    serializer.collect_str(message)
}

impl fmt::Display for ValidationFailure {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "line {} '{}': {}", self.line, self.target, self.message)
    }
}

/// Log level switch for the library.
#[derive(Debug, Clone, Copy)]
pub enum ScanlistLogger {
    None,
    Debug,
    Info,
    Warn,
}

impl ScanlistLogger {
    /// Installs a global `tracing` subscriber at the chosen level.
    /// `None` leaves logging untouched. Fails when a subscriber is
    /// already installed.
    pub fn init(self) -> Result<()> {
        let level = match self {
            ScanlistLogger::None => return Ok(()),
            ScanlistLogger::Debug => Level::DEBUG,
            ScanlistLogger::Info => Level::INFO,
            ScanlistLogger::Warn => Level::WARN,
        };
        tracing_subscriber::fmt()
            .with_max_level(level)
            .without_time()
            .try_init()
            .map_err(|e| anyhow!("install tracing subscriber failed: {}", e))?;
        Ok(())
    }
}
