use std::env;
use std::path::PathBuf;

use anyhow::{anyhow, Context, Result};

use folio::config::{read_config, Config};

use crate::CFG_FILE_NAME;

fn get_config_path() -> Option<PathBuf> {
    let mut candidates = vec![];
    if let Some(exe_dir) = env::current_exe().ok().and_then(|p| p.parent().map(|d| d.to_path_buf())) {
        candidates.push(exe_dir.join(CFG_FILE_NAME));
    }
    if let Ok(cur_dir) = env::current_dir() {
        candidates.push(cur_dir.join(CFG_FILE_NAME));
    }
    if let Some(cfg_dir) = dirs::config_dir() {
        candidates.push(cfg_dir.join("folio").join(CFG_FILE_NAME));
    }

    candidates.into_iter().find(|path| path.exists())
}

pub(crate) fn open_config(cfg_path: Option<PathBuf>) -> Result<(PathBuf, Config)> {
    let config_path = match cfg_path {
        Some(path) => path,
        None => get_config_path().ok_or_else(|| anyhow!("Could not find {} (run folio init to create one)", CFG_FILE_NAME))?,
    };

    let config = read_config(&config_path)
        .with_context(|| format!("Reading config from {}", config_path.display()))?;

    Ok((config_path, config))
}

/// Where `folio init` writes when no path is given.
pub(crate) fn default_config_path() -> Result<PathBuf> {
    let cur_dir = env::current_dir().context("Could not read the current directory")?;
    Ok(cur_dir.join(CFG_FILE_NAME))
}
