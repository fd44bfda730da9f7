// Fri Oct 16 2026 - Alex

use colored::*;
use log::{Level, LevelFilter};
use std::io::Write;

pub fn level_from_verbosity(verbosity: u8) -> LevelFilter {
    match verbosity {
        0 => LevelFilter::Warn,
        1 => LevelFilter::Info,
        2 => LevelFilter::Debug,
        _ => LevelFilter::Trace,
    }
}

fn format_level(level: Level) -> ColoredString {
    match level {
        Level::Error => "ERROR".red().bold(),
        Level::Warn => "WARN ".yellow().bold(),
        Level::Info => "INFO ".green().bold(),
        Level::Debug => "DEBUG".blue().bold(),
        Level::Trace => "TRACE".magenta().bold(),
    }
}

/// Installs env_logger on stderr. `RUST_LOG` takes precedence over `-v`.
pub fn init_logger(verbosity: u8, use_color: bool) {
    let mut builder = env_logger::Builder::new();
    builder.filter_level(level_from_verbosity(verbosity)).format_timestamp(None);

    if let Ok(filters) = std::env::var("RUST_LOG") {
        builder.parse_filters(&filters);
    }

    builder.format(move |buf, record| {
        let level = if use_color {
            format_level(record.level()).to_string()
        } else {
            format!("{:5}", record.level())
        };
        writeln!(buf, "{} [{}] {}", level, record.target(), record.args())
    });

    builder.try_init().ok();
}
