//! File-only logging.
//!
//! The game owns the terminal, so log lines never go to stdout or stderr. With no log
//! path configured nothing is installed and the `log` macros are no-ops.

use std::fs::OpenOptions;
use std::io::Write;
use std::path::Path;

use anyhow::{Context, Result};
use env_logger::{Builder, Target};

/// Install `env_logger` appending to `path`, filtered by `filter` (`RUST_LOG` syntax).
///
/// Returns `Ok(false)` if a logger was already installed.
pub fn init_file_logger(path: &Path, filter: &str) -> Result<bool> {
    let file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(path)
        .with_context(|| format!("failed to open log file {}", path.display()))?;

    let installed = Builder::new()
        .parse_filters(filter)
        .target(Target::Pipe(Box::new(file)))
        .format(|buf, record| {
            writeln!(
                buf,
                "{} {:<5} {}: {}",
                buf.timestamp_millis(),
                record.level(),
                record.target(),
                record.args()
            )
        })
        .try_init()
        .is_ok();
    Ok(installed)
}

/// Install the logger when a path is configured. Returns whether logging is active.
pub fn init(path: Option<&Path>, filter: &str) -> Result<bool> {
    match path {
        Some(p) => init_file_logger(p, filter),
        None => Ok(false),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_no_path_installs_nothing() {
        assert!(!init(None, "debug").unwrap());
    }

    #[test]
    fn test_unopenable_path_is_an_error() {
        let path = std::env::temp_dir()
            .join("tui-2048-no-such-dir")
            .join("nested")
            .join("game.log");
        let err = init(Some(path.as_path()), "info").unwrap_err();
        assert!(format!("{err:#}").contains("failed to open log file"));
    }
}
