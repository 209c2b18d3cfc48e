use std::fs;
use std::path::PathBuf;

use color_eyre::eyre::{Result, eyre};

pub fn get_log_dir() -> Result<PathBuf> {
    let cache_base = dirs::cache_dir().ok_or_else(|| eyre!("Could not find cache directory"))?;
    let log_dir = cache_base.join("itinera").join("logs");

    if !log_dir.exists() {
        fs::create_dir_all(&log_dir)?;
    }

    Ok(log_dir)
}
