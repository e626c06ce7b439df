//! Logging setup for the command line tool.

use std::{env, error::Error, panic};
use tracing::error;
use tracing_subscriber::{
    fmt::{self, time::uptime},
    prelude::*,
    EnvFilter, Registry,
};

/// Our crates log at info, everything else only warns.
const DEFAULT_FILTER: &str = "warn,circlesim=info,circlesim_core=info";

/// Install a `tracing` subscriber writing compact lines to stderr.
///
/// Each `-v` raises our crates one level (debug, then trace). `RUST_LOG`
/// directives are appended last and win over both.
pub fn init_logging(verbose: u8) -> Result<(), Box<dyn Error>> {
    let mut filter = DEFAULT_FILTER.to_owned();
    match verbose {
        0 => {}
        1 => filter.push_str(",circlesim=debug,circlesim_core=debug"),
        _ => filter.push_str(",circlesim=trace,circlesim_core=trace"),
    }
    if let Ok(env_filter) = env::var(EnvFilter::DEFAULT_ENV) {
        filter.push(',');
        filter.push_str(&env_filter);
    }

    let format = fmt::format()
        .compact()
        .with_timer(uptime())
        .with_line_number(true);
    let stderr_log = fmt::layer()
        .event_format(format)
        .with_writer(std::io::stderr);

    let subscriber = Registry::default()
        .with(EnvFilter::try_new(filter)?)
        .with(stderr_log);
    tracing::subscriber::set_global_default(subscriber)?;

    // route panics through the log so they land next to the frame traces
    panic::set_hook(Box::new(|info| {
        error!("{}", info);
    }));
    Ok(())
}
