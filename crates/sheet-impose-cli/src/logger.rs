use chrono::Local;
use log::{Level, LevelFilter, Metadata, Record};
use std::io::Write;

/// Writes log records to stderr so they never mix with command output
pub struct CliLogger {
    level: LevelFilter,
}

impl CliLogger {
    /// Map a `-v` count to a level: none is warnings only
    pub fn from_verbosity(verbose: u8) -> Self {
        let level = match verbose {
            0 => LevelFilter::Warn,
            1 => LevelFilter::Info,
            2 => LevelFilter::Debug,
            _ => LevelFilter::Trace,
        };
        Self { level }
    }

    pub fn init(self) -> Result<(), log::SetLoggerError> {
        let level = self.level;
        log::set_boxed_logger(Box::new(self))?;
        log::set_max_level(level);
        Ok(())
    }
}

impl log::Log for CliLogger {
    fn enabled(&self, metadata: &Metadata) -> bool {
        metadata.level() <= self.level
    }

    fn log(&self, record: &Record) {
        if !self.enabled(record.metadata()) {
            return;
        }

        let tag = match record.level() {
            Level::Error => "ERROR",
            Level::Warn => "WARN ",
            Level::Info => "INFO ",
            Level::Debug => "DEBUG",
            Level::Trace => "TRACE",
        };

        let mut stderr = std::io::stderr().lock();
        // Nowhere left to report a failed write to stderr
        let _ = writeln!(
            stderr,
            "{} {} [{}] {}",
            Local::now().format("%H:%M:%S%.3f"),
            tag,
            record.target(),
            record.args()
        );
    }

    fn flush(&self) {
        let _ = std::io::stderr().flush();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use log::Log;

    #[test]
    fn test_verbosity_levels() {
        assert_eq!(CliLogger::from_verbosity(0).level, LevelFilter::Warn);
        assert_eq!(CliLogger::from_verbosity(1).level, LevelFilter::Info);
        assert_eq!(CliLogger::from_verbosity(2).level, LevelFilter::Debug);
        assert_eq!(CliLogger::from_verbosity(9).level, LevelFilter::Trace);
    }

    #[test]
    fn test_enabled_respects_level() {
        let logger = CliLogger::from_verbosity(1);
        let info = Metadata::builder().level(Level::Info).build();
        let debug = Metadata::builder().level(Level::Debug).build();
        assert!(logger.enabled(&info));
        assert!(!logger.enabled(&debug));
    }
}
