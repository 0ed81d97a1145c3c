use anyhow::{Context, Result};
use std::env;
use std::path::{Path, PathBuf};

/// Environment variable overriding the debug log directory
pub const LOG_DIR_ENV: &str = "ENTKIT_LOG_DIR";

/// Determine where debug logs go
///
/// Environment variables checked:
/// - ENTKIT_LOG_DIR: explicit directory (ignored when blank)
///
/// Otherwise falls back to `~/.entkit`.
pub fn log_dir() -> Result<PathBuf> {
    if let Ok(dir) = env::var(LOG_DIR_ENV) {
        if !dir.trim().is_empty() {
            return Ok(PathBuf::from(dir));
        }
    }

    Ok(dirs::home_dir()
        .context("Could not determine home directory")?
        .join(".entkit"))
}

/// Install a file logger writing to `<dir>/debug.log`
///
/// Returns the path of the log file.
pub fn setup_debug_logging(dir: &Path) -> Result<PathBuf> {
    std::fs::create_dir_all(dir)
        .context("Failed to create log directory")?;

    let log_file = dir.join("debug.log");

    fern::Dispatch::new()
        .format(|out, message, record| {
            out.finish(format_args!(
                "[{}] {} - {}",
                chrono::Utc::now().format("%Y-%m-%d %H:%M:%S UTC"),
                record.level(),
                message
            ))
        })
        .level(log::LevelFilter::Debug)
        .chain(std::fs::OpenOptions::new()
            .create(true)
            .append(true)
            .open(&log_file)
            .context("Failed to open log file")?)
        .apply()
        .context("Failed to initialize logger")?;

    Ok(log_file)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;

    #[test]
    #[serial]
    fn test_log_dir_from_env() {
        env::set_var(LOG_DIR_ENV, "/tmp/entkit-logs");
        assert_eq!(log_dir().unwrap(), PathBuf::from("/tmp/entkit-logs"));
        env::remove_var(LOG_DIR_ENV);
    }

    #[test]
    #[serial]
    fn test_blank_log_dir_falls_back_to_home() {
        env::set_var(LOG_DIR_ENV, "   ");
        if let Some(home) = dirs::home_dir() {
            assert_eq!(log_dir().unwrap(), home.join(".entkit"));
        }
        env::remove_var(LOG_DIR_ENV);
    }

    #[test]
    #[serial]
    fn test_setup_debug_logging_writes_file() {
        let temp = tempfile::TempDir::new().unwrap();
        let dir = temp.path().join("nested");

        let log_file = setup_debug_logging(&dir).unwrap();
        log::info!("logger installed");
        log::logger().flush();

        assert_eq!(log_file, dir.join("debug.log"));
        let content = std::fs::read_to_string(&log_file).unwrap();
        assert!(content.contains("INFO - logger installed"), "got: {}", content);
    }
}
