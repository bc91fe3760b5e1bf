//! Logger setup.
//!
//! Everything goes through the [`log`] facade. [`init_logging`] installs a [`fern`] dispatcher
//! that writes timestamped lines to stderr.

use log::LevelFilter;

/// Formats one log line.
fn format_line(time: &str, level: log::Level, target: &str, message: &std::fmt::Arguments) -> String {
    format!("[{} {:<5} {}] {}", time, level, target, message)
}

/// Installs the global logger. Later calls leave the first logger in place.
pub fn init_logging(level: LevelFilter) {
    let result = fern::Dispatch::new()
        .format(|out, message, record| {
            let time = chrono::Local::now().format("%H:%M:%S%.3f").to_string();
            out.finish(format_args!(
                "{}",
                format_line(&time, record.level(), record.target(), message)
            ))
        })
        .level(level)
        .chain(std::io::stderr())
        .apply();

    if result.is_ok() {
        log::debug!("Logging initialized at {}", level);
    }
}
