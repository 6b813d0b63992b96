//! Config path resolution.

use std::path::PathBuf;

use anyhow::anyhow;

const CONFIG_RELATIVE: &str = "hypr/hyprpaper.conf";

fn config_home() -> anyhow::Result<PathBuf> {
    if let Some(v) = std::env::var_os("XDG_CONFIG_HOME").filter(|v| !v.is_empty()) {
        return Ok(PathBuf::from(v));
    }
    let home = std::env::var_os("HOME").ok_or_else(|| anyhow!("HOME not set"))?;
    Ok(PathBuf::from(home).join(".config"))
}

/// `$XDG_CONFIG_HOME/hypr/hyprpaper.conf`, else `~/.config/hypr/hyprpaper.conf`.
pub fn default_config_path() -> anyhow::Result<PathBuf> {
    Ok(config_home()?.join(CONFIG_RELATIVE))
}
