//! Runtime configuration, read from `TUI_2048_*` environment variables.
//!
//! | Variable | Meaning | Default |
//! |----------|---------|---------|
//! | `TUI_2048_SIZE` | initial board size, clamped to `[3, 20]` | `4` |
//! | `TUI_2048_SEED` | RNG seed | wall clock |
//! | `TUI_2048_SPAWN` | `on-change` or `always` | `on-change` |
//! | `TUI_2048_BEST_PATH` | best-score file | `$HOME/.tui-2048-best` |
//! | `TUI_2048_LOG_PATH` | log file, logging off when unset | unset |
//! | `TUI_2048_LOG` | `env_logger` filter | `info` |
//!
//! Unparseable values fall back to the default instead of failing startup.

use std::env;
use std::path::PathBuf;
use std::time::{SystemTime, UNIX_EPOCH};

use crate::types::{SpawnPolicy, DEFAULT_BOARD_SIZE, MAX_BOARD_SIZE, MIN_BOARD_SIZE};

/// File name of the persisted best score.
pub const BEST_FILE_NAME: &str = ".tui-2048-best";

pub const DEFAULT_LOG_FILTER: &str = "info";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameConfig {
    pub size: usize,
    pub seed: u32,
    pub spawn_policy: SpawnPolicy,
    pub best_path: PathBuf,
    pub log_path: Option<PathBuf>,
    pub log_filter: String,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            size: DEFAULT_BOARD_SIZE,
            seed: clock_seed(),
            spawn_policy: SpawnPolicy::default(),
            best_path: default_best_path(env::var_os("HOME").map(PathBuf::from)),
            log_path: None,
            log_filter: DEFAULT_LOG_FILTER.to_string(),
        }
    }
}

impl GameConfig {
    /// Create from the process environment.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Create from any key lookup; `from_env` passes `std::env::var`.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let var = |key: &str| {
            lookup(key)
                .map(|s| s.trim().to_string())
                .filter(|s| !s.is_empty())
        };

        let size = var("TUI_2048_SIZE")
            .and_then(|s| s.parse::<usize>().ok())
            .map(|n| n.clamp(MIN_BOARD_SIZE, MAX_BOARD_SIZE))
            .unwrap_or(DEFAULT_BOARD_SIZE);

        let seed = var("TUI_2048_SEED")
            .and_then(|s| s.parse().ok())
            .unwrap_or_else(clock_seed);

        let spawn_policy = var("TUI_2048_SPAWN")
            .and_then(|s| SpawnPolicy::from_str(&s))
            .unwrap_or_default();

        let best_path = var("TUI_2048_BEST_PATH")
            .map(PathBuf::from)
            .unwrap_or_else(|| default_best_path(var("HOME").map(PathBuf::from)));

        let log_path = var("TUI_2048_LOG_PATH").map(PathBuf::from);

        let log_filter = var("TUI_2048_LOG").unwrap_or_else(|| DEFAULT_LOG_FILTER.to_string());

        Self {
            size,
            seed,
            spawn_policy,
            best_path,
            log_path,
            log_filter,
        }
    }
}

fn default_best_path(home: Option<PathBuf>) -> PathBuf {
    home.unwrap_or_else(|| PathBuf::from(".")).join(BEST_FILE_NAME)
}

fn clock_seed() -> u32 {
    let nanos = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_nanos())
        .unwrap_or(0);
    // Fold the high bits in so consecutive launches differ.
    (nanos ^ (nanos >> 32)) as u32
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn config(pairs: &[(&str, &str)]) -> GameConfig {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        GameConfig::from_lookup(|key| map.get(key).cloned())
    }

    #[test]
    fn test_defaults_when_unset() {
        let c = config(&[("HOME", "/home/player")]);
        assert_eq!(c.size, DEFAULT_BOARD_SIZE);
        assert_eq!(c.spawn_policy, SpawnPolicy::OnChange);
        assert_eq!(c.best_path, PathBuf::from("/home/player/.tui-2048-best"));
        assert_eq!(c.log_path, None);
        assert_eq!(c.log_filter, "info");
    }

    #[test]
    fn test_no_home_falls_back_to_cwd() {
        let c = config(&[]);
        assert_eq!(c.best_path, PathBuf::from("./.tui-2048-best"));
    }

    #[test]
    fn test_size_is_clamped() {
        assert_eq!(config(&[("TUI_2048_SIZE", "1")]).size, MIN_BOARD_SIZE);
        assert_eq!(config(&[("TUI_2048_SIZE", "99")]).size, MAX_BOARD_SIZE);
        assert_eq!(config(&[("TUI_2048_SIZE", " 6 ")]).size, 6);
        assert_eq!(config(&[("TUI_2048_SIZE", "six")]).size, DEFAULT_BOARD_SIZE);
    }

    #[test]
    fn test_explicit_values() {
        let c = config(&[
            ("TUI_2048_SEED", "42"),
            ("TUI_2048_SPAWN", "always"),
            ("TUI_2048_BEST_PATH", "/tmp/best"),
            ("TUI_2048_LOG_PATH", "/tmp/2048.log"),
            ("TUI_2048_LOG", "debug"),
        ]);
        assert_eq!(c.seed, 42);
        assert_eq!(c.spawn_policy, SpawnPolicy::Always);
        assert_eq!(c.best_path, PathBuf::from("/tmp/best"));
        assert_eq!(c.log_path, Some(PathBuf::from("/tmp/2048.log")));
        assert_eq!(c.log_filter, "debug");
    }

    #[test]
    fn test_blank_log_path_disables_logging() {
        assert_eq!(config(&[("TUI_2048_LOG_PATH", "   ")]).log_path, None);
    }

    #[test]
    fn test_unknown_spawn_policy_uses_default() {
        let c = config(&[("TUI_2048_SPAWN", "sometimes")]);
        assert_eq!(c.spawn_policy, SpawnPolicy::OnChange);
    }
}
