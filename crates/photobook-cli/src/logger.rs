use chrono::Local;
use log::{Level, LevelFilter, Metadata, Record};
use std::io::Write;

/// Writes `LEVEL: message` lines to stderr
pub struct CliLogger {
    level: LevelFilter,
    timestamps: bool,
}

impl CliLogger {
    pub fn new(level: LevelFilter, timestamps: bool) -> Self {
        Self { level, timestamps }
    }

    pub fn init(self) -> Result<(), log::SetLoggerError> {
        let level = self.level;
        log::set_boxed_logger(Box::new(self))?;
        log::set_max_level(level);
        Ok(())
    }

    fn format(&self, record: &Record) -> String {
        let level = level_name(record.level());
        if self.timestamps {
            format!(
                "{} {}: {}",
                Local::now().format("%H:%M:%S%.3f"),
                level,
                record.args()
            )
        } else {
            format!("{}: {}", level, record.args())
        }
    }
}

fn level_name(level: Level) -> &'static str {
    match level {
        Level::Error => "ERROR",
        Level::Warn => "WARNING",
        Level::Info => "INFO",
        Level::Debug => "DEBUG",
        Level::Trace => "TRACE",
    }
}

impl log::Log for CliLogger {
    fn enabled(&self, metadata: &Metadata) -> bool {
        metadata.level() <= self.level
    }

    fn log(&self, record: &Record) {
        if self.enabled(record.metadata()) {
            let line = self.format(record);
            // Nothing sensible to do if stderr is gone
            let _ = writeln!(std::io::stderr().lock(), "{}", line);
        }
    }

    fn flush(&self) {
        let _ = std::io::stderr().flush();
    }
}
