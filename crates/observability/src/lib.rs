//! Logging setup shared by Waypoint binaries and tests.
//!
//! [`LogArgs`] can be flattened into a clap parser or read from the `[log]`
//! table of an [`ObservabilityConfig`]; [`init_logging`] installs the global
//! tracing subscriber from it.

mod args;
mod config;
mod logging;

pub use args::LogArgs;
pub use config::ObservabilityConfig;
pub use logging::init_logging;
