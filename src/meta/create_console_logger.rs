use anyhow::{Result, anyhow};
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

/// Installs the global log subscriber, writing to stdout.
///
/// Everything from `DEBUG` up is shown unless `RUST_LOG` asks for something
/// else. Only one subscriber can be installed per process; later calls fail.
pub fn create_console_logger() -> Result<()> {
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("debug"));
    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(std::io::stdout))
        .with(env_filter)
        .try_init()
        .map_err(|err| anyhow!("create_console_logger::AlreadyInitialized({err})"))
}
