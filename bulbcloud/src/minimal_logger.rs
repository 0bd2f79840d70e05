use std::io::Write;

use colored::Colorize;
use log::{Level, Metadata, Record};

pub struct MinimalLogger;

impl log::Log for MinimalLogger {
    fn enabled(&self, metadata: &Metadata) -> bool {
        metadata.level() <= log::max_level()
    }

    fn log(&self, record: &Record) {
        if !self.enabled(record.metadata()) {
            return;
        }

        let level = match record.level() {
            Level::Error => "ERROR".red(),
            Level::Warn => "WARN".yellow(),
            Level::Info => "INFO".cyan(),
            Level::Debug => "DEBUG".purple(),
            Level::Trace => "TRACE".normal(),
        };

        if record.level() == Level::Error {
            eprintln!("{:<5} {}", level, record.args());
        } else {
            println!("{:<5} {}", level, record.args());
        }
    }

    fn flush(&self) {
        std::mem::drop(std::io::stdout().flush());
        std::mem::drop(std::io::stderr().flush());
    }
}
