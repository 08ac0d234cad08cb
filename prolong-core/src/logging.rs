//! Terminal logging for the demo binaries.

use simplelog::{ColorChoice, CombinedLogger, Config, LevelFilter, TermLogger, TerminalMode};

/// The environment variable that sets the log level.
pub const LOG_ENV: &str = "PROLONG_LOG";

/// Parses a log level name. Unknown names return [`None`].
pub fn parse_level(level: &str) -> Option<LevelFilter> {
    match level.trim().to_ascii_lowercase().as_str() {
        "off" => Some(LevelFilter::Off),
        "error" => Some(LevelFilter::Error),
        "warn" => Some(LevelFilter::Warn),
        "info" => Some(LevelFilter::Info),
        "debug" => Some(LevelFilter::Debug),
        "trace" => Some(LevelFilter::Trace),
        _ => None,
    }
}

/// Installs a terminal logger. The level is read from the [`LOG_ENV`] environment variable and
/// defaults to `info`.
///
/// Failing to install the logger (for example, because one is already installed) is reported on
/// stderr, and the program continues without it.
pub fn init_logger() {
    let level = match std::env::var(LOG_ENV) {
        Ok(name) => parse_level(&name).unwrap_or_else(|| {
            eprintln!("unknown log level `{}` in {}, using info", name, LOG_ENV);
            LevelFilter::Info
        }),
        Err(_) => LevelFilter::Info,
    };

    let logger_instance = CombinedLogger::init(vec![TermLogger::new(
        level,
        Config::default(),
        TerminalMode::Mixed,
        ColorChoice::Auto,
    )]);

    match logger_instance {
        Ok(()) => (),
        Err(err) => eprintln!("could not install logger: {}", err),
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use super::*;

    #[test]
    fn levels() {
        assert_eq!(parse_level("debug"), Some(LevelFilter::Debug));
        assert_eq!(parse_level(" Trace\n"), Some(LevelFilter::Trace));
        assert_eq!(parse_level("loud"), None);
    }
}
