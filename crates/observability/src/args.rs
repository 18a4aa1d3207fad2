//! Logging CLI arguments.

use clap::Args;
use serde::{Deserialize, Serialize};

/// Logging configuration.
#[derive(Debug, Args, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[command(next_help_heading = "Logging")]
#[serde(default)]
pub struct LogArgs {
    /// Silence all output except errors.
    #[arg(short, long)]
    pub quiet: bool,

    /// Verbose mode (-v, -vv, etc.).
    #[arg(short, long, action = clap::ArgAction::Count)]
    #[serde(skip)] // CLI-only, count action doesn't make sense in config
    pub verbosity: u8,

    /// Log filter directive (e.g., "waypoint=debug,libp2p=info").
    #[arg(long = "log.filter", value_name = "DIRECTIVE")]
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub filter: Option<String>,

    /// Use JSON format for log output.
    #[arg(long = "log.json")]
    pub json: bool,
}

impl LogArgs {
    /// Level used when `RUST_LOG` is not set.
    pub fn base_level(&self) -> &'static str {
        match self.verbosity {
            0 => "info",
            1 => "debug",
            _ => "trace",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;

    #[derive(Debug, Parser)]
    struct Cli {
        #[command(flatten)]
        log: LogArgs,
    }

    #[test]
    fn parses_flags() {
        let cli = Cli::try_parse_from(["waypoint", "-vv", "--log.filter", "libp2p=warn", "--log.json"])
            .unwrap();

        assert_eq!(cli.log.verbosity, 2);
        assert_eq!(cli.log.base_level(), "trace");
        assert_eq!(cli.log.filter.as_deref(), Some("libp2p=warn"));
        assert!(cli.log.json);
        assert!(!cli.log.quiet);
    }

    #[test]
    fn defaults() {
        let cli = Cli::try_parse_from(["waypoint"]).unwrap();
        assert_eq!(cli.log, LogArgs::default());
        assert_eq!(cli.log.base_level(), "info");
    }
}
