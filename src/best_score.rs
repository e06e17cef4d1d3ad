//! Best-score persistence.
//!
//! The store holds one value: the best score as a decimal integer string. A missing or
//! empty store reads as 0. Anything else that does not parse is an error for the caller
//! to report.

use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};

pub trait BestScoreStore {
    fn load(&mut self) -> Result<u64>;
    fn save(&mut self, best: u64) -> Result<()>;
}

/// Best score kept in a single file.
#[derive(Debug, Clone)]
pub struct FileBestScore {
    path: PathBuf,
}

impl FileBestScore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl BestScoreStore for FileBestScore {
    fn load(&mut self) -> Result<u64> {
        let text = match fs::read_to_string(&self.path) {
            Ok(text) => text,
            Err(e) if e.kind() == ErrorKind::NotFound => return Ok(0),
            Err(e) => {
                return Err(e)
                    .with_context(|| format!("failed to read {}", self.path.display()));
            }
        };
        parse_best(&text).with_context(|| format!("corrupt best score in {}", self.path.display()))
    }

    fn save(&mut self, best: u64) -> Result<()> {
        fs::write(&self.path, best.to_string())
            .with_context(|| format!("failed to write {}", self.path.display()))
    }
}

/// In-memory store for tests and headless hosts.
#[derive(Debug, Clone, Default)]
pub struct MemoryBestScore {
    pub value: Option<String>,
    pub saves: u32,
}

impl BestScoreStore for MemoryBestScore {
    fn load(&mut self) -> Result<u64> {
        match &self.value {
            Some(text) => parse_best(text),
            None => Ok(0),
        }
    }

    fn save(&mut self, best: u64) -> Result<()> {
        self.value = Some(best.to_string());
        self.saves += 1;
        Ok(())
    }
}

/// Parse stored contents; blank means no best yet.
pub fn parse_best(text: &str) -> Result<u64> {
    let trimmed = text.trim();
    if trimmed.is_empty() {
        return Ok(0);
    }
    trimmed
        .parse()
        .with_context(|| format!("not a decimal score: {trimmed:?}"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_best() {
        assert_eq!(parse_best("").unwrap(), 0);
        assert_eq!(parse_best("  \n").unwrap(), 0);
        assert_eq!(parse_best("2048\n").unwrap(), 2048);
        assert!(parse_best("abc").is_err());
        assert!(parse_best("-4").is_err());
    }

    #[test]
    fn test_memory_store_counts_saves() {
        let mut store = MemoryBestScore::default();
        assert_eq!(store.load().unwrap(), 0);
        store.save(128).unwrap();
        assert_eq!(store.load().unwrap(), 128);
        assert_eq!(store.saves, 1);
    }
}
