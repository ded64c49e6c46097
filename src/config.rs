use anyhow::Result;
use std::{env, fs, path::PathBuf};

/// Key under which the whole idea collection is stored.
pub(crate) const IDEAS_KEY: &str = "ideas";

pub(crate) const HOME_ENV: &str = "CLIPNEST_HOME";
pub(crate) const LOG_ENV: &str = "CLIPNEST_LOG";
pub(crate) const DEFAULT_LOG_FILTER: &str = "warn";

pub(crate) fn data_dir() -> PathBuf {
    if let Ok(dir) = env::var(HOME_ENV) {
        if !dir.trim().is_empty() {
            return PathBuf::from(dir);
        }
    }
    let home = env::var("HOME").unwrap_or_else(|_| ".".to_string());
    PathBuf::from(home).join(".clipnest")
}

pub(crate) fn db_path() -> Result<PathBuf> {
    let dir = data_dir();
    fs::create_dir_all(&dir)?;
    Ok(dir.join("clipnest.db"))
}
