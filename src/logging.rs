use tracing_subscriber::EnvFilter;

/// Level used when `RUST_LOG` is unset: `-q` gives warn, default info,
/// `-v` debug, `-vv` and beyond trace.
pub fn level_for(verbose: u8, quiet: bool) -> &'static str {
    if quiet {
        return "warn";
    }
    match verbose {
        0 => "info",
        1 => "debug",
        _ => "trace",
    }
}

/// Installs the stderr subscriber. Safe to call more than once; later calls
/// leave the first subscriber in place.
pub fn init_logging(verbose: u8, quiet: bool) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(format!("kira_sigcut={}", level_for(verbose, quiet))));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}
