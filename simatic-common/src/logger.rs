use simatic_error::{SimaticError, SimaticResult};
use std::{
    path::PathBuf,
    sync::{Arc, Mutex, MutexGuard},
};
use tracing::{subscriber::set_global_default, Level};
use tracing_appender::{non_blocking::WorkerGuard, rolling};
use tracing_subscriber::{
    filter::DynFilterFn,
    fmt::{self},
    layer::SubscriberExt,
    Layer, Registry,
};

pub struct Logger {
    level: Arc<Mutex<Level>>,
    file: Option<(PathBuf, String)>,
    _file_guard: Option<WorkerGuard>,
}

impl Logger {
    pub fn new(level: Option<Level>) -> Self {
        Logger {
            level: Arc::new(Mutex::new(level.unwrap_or(Level::INFO))),
            file: None,
            _file_guard: None,
        }
    }

    /// Also write logs to a daily rolling file `<dir>/<file_name>.<date>`.
    pub fn with_file(mut self, dir: impl Into<PathBuf>, file_name: impl Into<String>) -> Self {
        self.file = Some((dir.into(), file_name.into()));
        self
    }

    #[inline]
    /// Sets the new logging level.
    pub fn set_level(&self, new_level: Level) {
        *lock(&self.level) = new_level;
    }

    #[inline]
    /// Retrieves the current log level.
    pub fn get_level(&self) -> Level {
        *lock(&self.level)
    }

    /// Installs the global subscriber.
    ///
    /// Console output goes to stderr so that report output on stdout stays
    /// machine readable. Both layers follow the level set through
    /// [`Logger::set_level`].
    pub fn initialize(&mut self) -> SimaticResult<()> {
        let console_layer = {
            let level = Arc::clone(&self.level);
            let filter =
                DynFilterFn::new(move |metadata, _| metadata.level() <= &*lock(&level));

            #[cfg(debug_assertions)]
            let layer = fmt::layer()
                .with_writer(std::io::stderr)
                .with_file(true)
                .with_line_number(true);

            #[cfg(not(debug_assertions))]
            let layer = fmt::layer()
                .with_writer(std::io::stderr)
                .with_file(false)
                .with_line_number(false);

            layer.with_filter(filter)
        };

        let file_layer = match &self.file {
            Some((dir, file_name)) => {
                let file_appender = rolling::daily(dir, file_name);
                let (non_blocking, guard) = tracing_appender::non_blocking(file_appender);
                self._file_guard = Some(guard);

                let level = Arc::clone(&self.level);
                let filter =
                    DynFilterFn::new(move |metadata, _| metadata.level() <= &*lock(&level));
                Some(
                    fmt::layer()
                        .with_writer(non_blocking)
                        .with_ansi(false)
                        .with_filter(filter),
                )
            }
            None => None,
        };

        let subscriber = Registry::default().with(console_layer).with(file_layer);

        set_global_default(subscriber)
            .map_err(|e| SimaticError::LoggerError(format!("Failed to set logger: {e}")))?;
        Ok(())
    }
}

/// A poisoned level lock still holds a valid `Level`.
#[inline]
fn lock(level: &Mutex<Level>) -> MutexGuard<'_, Level> {
    level.lock().unwrap_or_else(|e| e.into_inner())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_level_round_trip() {
        let logger = Logger::new(None);
        assert_eq!(logger.get_level(), Level::INFO);
        logger.set_level(Level::TRACE);
        assert_eq!(logger.get_level(), Level::TRACE);
    }

    #[test]
    fn test_file_target_is_recorded() {
        let logger = Logger::new(Some(Level::WARN)).with_file("logs", "x.log");
        assert_eq!(logger.get_level(), Level::WARN);
        assert_eq!(
            logger.file,
            Some((PathBuf::from("logs"), "x.log".to_string()))
        );
    }
}
