use std::io;
use std::path::Path;
use chrono::Local;
use tracing::Level;
use tracing_subscriber::fmt::format::FmtSpan;
use tracing_subscriber::{ fmt, prelude::*, EnvFilter, filter::LevelFilter };
use tracing_appender::rolling::{ RollingFileAppender, Rotation };
use tracing_appender::non_blocking::WorkerGuard;

use crate::config::{ LogConfig, LogRotation };

/// Keeps the non-blocking writers flushing. Hold it until the process exits;
/// dropping it stops the background writer threads.
pub struct LogGuards {
    _file_guard: WorkerGuard,
    _console_guard: Option<WorkerGuard>,
}

/// Log file name for the current day, e.g. `hop_arb_20261017.log`
pub fn log_filename(prefix: &str) -> String {
    format!("{}_{}.log", prefix, Local::now().format("%Y%m%d"))
}

/// Initialize non-blocking file logging, plus a pretty console layer in debug mode
pub fn init_logging(level: Level, debug: bool, log_config: &LogConfig) -> io::Result<LogGuards> {
    if !log_config.directory.exists() {
        std::fs::create_dir_all(&log_config.directory)?;
    }

    let rotation = match log_config.rotation {
        LogRotation::Hourly => Rotation::HOURLY,
        LogRotation::Daily => Rotation::DAILY,
        LogRotation::Never => Rotation::NEVER,
    };

    let file_appender = RollingFileAppender::new(
        rotation,
        log_config.directory.clone(),
        log_filename(&log_config.filename_prefix)
    );
    let (file_writer, file_guard) = tracing_appender::non_blocking(file_appender);

    let file_layer = fmt
        ::layer()
        .with_writer(file_writer)
        .with_ansi(false)
        .with_file(true)
        .with_line_number(true)
        .with_thread_ids(true)
        .with_span_events(FmtSpan::CLOSE);

    let filter = EnvFilter::from_default_env().add_directive(LevelFilter::from_level(level).into());

    let console_guard = if debug {
        let (console_writer, console_guard) = tracing_appender::non_blocking(io::stdout());

        let console_layer = fmt
            ::layer()
            .with_writer(console_writer)
            .with_ansi(true)
            .with_target(true)
            .pretty();

        tracing_subscriber::registry().with(filter).with(file_layer).with(console_layer).init();
        Some(console_guard)
    } else {
        tracing_subscriber::registry().with(filter).with(file_layer).init();
        None
    };

    if let Some(max_files) = log_config.max_files {
        if let Err(e) = cleanup_old_logs(&log_config.directory, &log_config.filename_prefix, max_files) {
            // not fatal, the run can continue
            eprintln!("Failed to clean up old log files: {}", e);
        }
    }

    tracing::info!(
        log_dir = %log_config.directory.display(),
        log_prefix = %log_config.filename_prefix,
        "Logging initialized at level: {:?}",
        level
    );

    Ok(LogGuards {
        _file_guard: file_guard,
        _console_guard: console_guard,
    })
}

/// Keep only the `max_files` most recently modified logs with the given prefix
pub fn cleanup_old_logs(log_dir: &Path, prefix: &str, max_files: usize) -> io::Result<()> {
    let mut entries = std::fs
        ::read_dir(log_dir)?
        .filter_map(|entry| {
            let entry = entry.ok()?;
            let path = entry.path();

            if path.is_file() && path.file_name()?.to_string_lossy().starts_with(prefix) {
                let modified = entry.metadata().ok()?.modified().ok()?;
                return Some((path, modified));
            }
            None
        })
        .collect::<Vec<_>>();

    if entries.len() <= max_files {
        return Ok(());
    }

    // newest first
    entries.sort_by(|a, b| b.1.cmp(&a.1));
    for (path, _) in entries.iter().skip(max_files) {
        std::fs::remove_file(path)?;
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs::{ self, File };
    use std::time::{ Duration, SystemTime };

    #[test]
    fn test_log_filename_has_prefix_and_date() {
        let name = log_filename("hop_arb");
        assert!(name.starts_with("hop_arb_"));
        assert!(name.ends_with(".log"));
        assert_eq!(name.len(), "hop_arb_".len() + 8 + ".log".len());
    }

    #[test]
    fn test_cleanup_keeps_newest() {
        let dir = tempfile::tempdir().unwrap();
        let base = SystemTime::now() - Duration::from_secs(3600);

        for i in 0..4u64 {
            let path = dir.path().join(format!("hop_arb_{}.log", i));
            let file = File::create(&path).unwrap();
            file.set_modified(base + Duration::from_secs(i * 60)).unwrap();
        }
        File::create(dir.path().join("other.log")).unwrap();

        cleanup_old_logs(dir.path(), "hop_arb", 2).unwrap();

        let mut left: Vec<String> = fs
            ::read_dir(dir.path())
            .unwrap()
            .map(|e| e.unwrap().file_name().to_string_lossy().into_owned())
            .collect();
        left.sort();
        assert_eq!(left, vec!["hop_arb_2.log", "hop_arb_3.log", "other.log"]);
    }

    #[test]
    fn test_cleanup_noop_under_limit() {
        let dir = tempfile::tempdir().unwrap();
        File::create(dir.path().join("hop_arb_a.log")).unwrap();
        cleanup_old_logs(dir.path(), "hop_arb", 5).unwrap();
        assert!(dir.path().join("hop_arb_a.log").exists());
    }
}
