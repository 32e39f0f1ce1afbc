use std::{path::Path, sync::LazyLock};

use anyhow::Result;
use tracing::{level_filters::LevelFilter, warn};
use tracing_appender::rolling::{RollingFileAppender, Rotation};
use tracing_subscriber::fmt::{
    format::FmtSpan,
    writer::{BoxMakeWriter, MakeWriterExt},
};

pub const CLI_PREFIX: &str = "cli";

/// Logs go into daily rolling files inside `application_state_path`. `show_std` mirrors them onto
/// stderr, so that they don't get mixed into the printed reports. Without a usable state
/// directory only stderr is left.
pub fn enable_logging(
    prefix: &str,
    application_state_path: Option<&Path>,
    log_level: Option<LevelFilter>,
    show_std: bool,
) -> Result<()> {
    let (appender, fallback_reason) =
        match application_state_path.map(|path| file_appender(prefix, path)) {
            Some(Ok(appender)) => (Some(appender), None),
            Some(Err(e)) => (None, Some(format!("can't write log files: {e}"))),
            None => (None, Some("no state directory".to_string())),
        };

    let stderr = std::io::stderr.with_filter(move |_| show_std);
    let writer = match appender {
        Some(appender) => BoxMakeWriter::new(stderr.and(appender)),
        None => BoxMakeWriter::new(stderr),
    };

    let level = log_level
        .map(|v| v.to_string())
        .unwrap_or_else(|| std::env::var("RUST_LOG").unwrap_or_else(|_| "info".into()));

    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::new(format!(
            "{}={level}",
            env!("CARGO_PKG_NAME").replace("-", "_"),
        )))
        .with_span_events(FmtSpan::CLOSE)
        .with_writer(writer)
        .with_ansi(false)
        .init();

    if let Some(reason) = fallback_reason {
        warn!("Logging to stderr only, {reason}");
    }
    Ok(())
}

fn file_appender(prefix: &str, application_state_path: &Path) -> Result<RollingFileAppender> {
    Ok(tracing_appender::rolling::Builder::new()
        .rotation(Rotation::DAILY)
        .max_log_files(5)
        .filename_prefix(prefix)
        .build(application_state_path.join("logs"))?)
}

pub static TEST_LOGGING: LazyLock<()> = LazyLock::new(|| {
    let _ = tracing_subscriber::fmt()
        .with_max_level(LevelFilter::TRACE)
        .with_test_writer()
        .pretty()
        .try_init();
});

#[cfg(test)]
mod tests {
    use anyhow::Result;
    use tempfile::{tempdir, NamedTempFile};

    use super::{file_appender, CLI_PREFIX};

    #[test]
    fn test_file_appender_creates_log_dir() -> Result<()> {
        let dir = tempdir()?;
        file_appender(CLI_PREFIX, dir.path())?;
        assert!(dir.path().join("logs").is_dir());
        Ok(())
    }

    #[test]
    fn test_file_appender_fails_on_unusable_dir() -> Result<()> {
        // A regular file can't hold a logs directory.
        let file = NamedTempFile::new()?;
        assert!(file_appender(CLI_PREFIX, file.path()).is_err());
        Ok(())
    }
}
