use std::sync::atomic::{AtomicU8, Ordering};

use colored::Colorize;

static VERBOSITY: AtomicU8 = AtomicU8::new(0);

#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord)]
pub enum Level {
    Error,
    Warn,
    Info,
    Debug,
}

impl Level {
    fn label(self) -> &'static str {
        match self {
            Level::Error => "ERR",
            Level::Warn => "WRN",
            Level::Info => "INF",
            Level::Debug => "DBG",
        }
    }
}

/// 0 = errors and warnings, 1 (`-v`) adds info, 2+ (`-vv`) adds debug.
pub fn set_verbosity(level: u8) {
    VERBOSITY.store(level, Ordering::Relaxed);
}

pub fn set_color(enabled: bool) {
    if !enabled {
        colored::control::set_override(false);
    }
}

pub fn enabled(level: Level) -> bool {
    let v = VERBOSITY.load(Ordering::Relaxed);
    match level {
        Level::Error | Level::Warn => true,
        Level::Info => v >= 1,
        Level::Debug => v >= 2,
    }
}

pub fn format_line(level: Level, message: &str) -> String {
    let label = match level {
        Level::Error => level.label().bold().red(),
        Level::Warn => level.label().bold().yellow(),
        Level::Info => level.label().bold().blue(),
        Level::Debug => level.label().dimmed(),
    };
    format!("{}{}{} {}", "[".bold().white(), label, "]".bold().white(), message)
}

// Everything goes to stderr; stdout carries the rendered grid.
pub fn log(level: Level, message: &str) {
    if enabled(level) {
        eprintln!("{}", format_line(level, message));
    }
}

pub fn error(message: &str) {
    log(Level::Error, message);
}

pub fn warn(message: &str) {
    log(Level::Warn, message);
}

pub fn info(message: &str) {
    log(Level::Info, message);
}

pub fn debug(message: &str) {
    log(Level::Debug, message);
}

pub fn format_kv_line(label: &str, value: &str) -> String {
    format!(":: {:<10}: {}", label, value)
}
