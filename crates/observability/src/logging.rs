//! Tracing subscriber setup.

use eyre::Result;
use tracing_subscriber::EnvFilter;

use crate::args::LogArgs;

impl LogArgs {
    /// Build the log filter.
    ///
    /// Precedence:
    /// 1. If `quiet` is set, only errors are shown
    /// 2. Otherwise, start with `RUST_LOG` if set, or the verbosity level
    /// 3. Apply any custom directives from `filter`
    pub fn env_filter(&self) -> EnvFilter {
        build_filter(self, std::env::var(EnvFilter::DEFAULT_ENV).ok().as_deref())
    }
}

fn build_filter(args: &LogArgs, env: Option<&str>) -> EnvFilter {
    if args.quiet {
        return EnvFilter::new("error");
    }

    let mut filter = env
        .and_then(|directives| EnvFilter::try_new(directives).ok())
        .unwrap_or_else(|| EnvFilter::new(args.base_level()));

    if let Some(custom_filter) = &args.filter {
        for directive in custom_filter.split(',') {
            if let Ok(d) = directive.parse() {
                filter = filter.add_directive(d);
            }
        }
    }

    filter
}

/// Install the global tracing subscriber.
///
/// Fails if a global subscriber is already set.
pub fn init_logging(args: &LogArgs) -> Result<()> {
    let builder = tracing_subscriber::fmt()
        .with_env_filter(args.env_filter())
        .with_target(true);

    if args.json {
        builder.json().try_init().map_err(|e| eyre::eyre!(e))?;
    } else {
        builder.without_time().try_init().map_err(|e| eyre::eyre!(e))?;
    }

    tracing::debug!(json = args.json, "logging initialized");
    Ok(())
}
