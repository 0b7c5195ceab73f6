use log::LevelFilter;
use simple_logger::SimpleLogger;

/// Install the logger and set the initial level.
///
/// The logger itself accepts everything; the level is enforced by the `log` max level so it
/// can be lowered or raised once the configuration has been read.
pub fn init_logging(debug: bool) -> LevelFilter {
    let log_level = if debug {
        LevelFilter::Debug
    } else {
        LevelFilter::Info
    };

    if let Err(e) = SimpleLogger::new().with_level(LevelFilter::Trace).init() {
        eprintln!("Failed to initialize logging: {}", e);
    }
    log::set_max_level(log_level);

    log_level
}

/// Set the log level for the application
pub fn set_log_level(level: LevelFilter) {
    log::set_max_level(level);
}

/// Level named by the configuration, unless debug output was requested on the command line
pub fn configured_level(debug: bool, configured: &str) -> LevelFilter {
    if debug {
        return LevelFilter::Debug;
    }
    configured.parse().unwrap_or(LevelFilter::Info)
}

/// Configure backtrace if trace is enabled
pub fn configure_backtrace(trace: bool) {
    if trace {
        std::env::set_var("RUST_BACKTRACE", "1");
    }
}
