//! Logging setup for pathpick.

use std::fs::OpenOptions;
use std::path::Path;
use std::sync::Mutex;

use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::error::{PickerError, Result};

/// Build the filter: an explicit level wins, then `RUST_LOG`, then info.
fn filter(level: Option<&str>) -> EnvFilter {
    match level {
        Some(level) => EnvFilter::new(format!("pathpick={level}")),
        None => EnvFilter::try_from_default_env()
            .unwrap_or_else(|_| EnvFilter::new("pathpick=info")),
    }
}

/// Initialize logging for pathpick.
///
/// Logs go to stderr, or are appended to `log_file` when given (the
/// terminal UI owns the screen, so it only logs to a file). Calling this
/// more than once keeps the first subscriber.
pub fn init(level: Option<&str>, log_file: Option<&Path>) -> Result<()> {
    let file_layer = match log_file {
        Some(path) => {
            let file = OpenOptions::new()
                .create(true)
                .append(true)
                .open(path)
                .map_err(|source| PickerError::Io {
                    path: path.to_path_buf(),
                    source,
                })?;
            Some(fmt::layer().with_ansi(false).with_writer(Mutex::new(file)))
        }
        None => None,
    };
    let stderr_layer = file_layer
        .is_none()
        .then(|| fmt::layer().with_writer(std::io::stderr));

    // Fails only if a global subscriber is already set.
    let _ = tracing_subscriber::registry()
        .with(filter(level))
        .with(file_layer)
        .with(stderr_layer)
        .try_init();
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_init_with_file_is_repeatable() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("pathpick.log");

        init(Some("debug"), Some(&path)).unwrap();
        init(Some("debug"), Some(&path)).unwrap();
        assert!(path.exists());
    }

    #[test]
    fn test_init_unwritable_file() {
        let err = init(None, Some(Path::new("/no/such/dir/pathpick.log"))).unwrap_err();
        assert!(matches!(err, PickerError::Io { .. }));
    }
}
