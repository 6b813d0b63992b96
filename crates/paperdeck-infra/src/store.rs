//! hyprpaper.conf on disk.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use paperdeck_core::config::{Config, ParsedConfig};
use paperdeck_core::error::ConfigError;

/// Read and parse the config at `path`.
pub fn load(path: &Path) -> Result<ParsedConfig, ConfigError> {
    let text = fs::read_to_string(path).map_err(|source| {
        if source.kind() == io::ErrorKind::NotFound {
            ConfigError::NotFound {
                path: path.to_path_buf(),
            }
        } else {
            ConfigError::Read {
                path: path.to_path_buf(),
                source,
            }
        }
    })?;

    let parsed = Config::parse(&text);
    if !parsed.skipped.is_empty() {
        tracing::debug!(
            path = %path.display(),
            skipped = parsed.skipped.len(),
            "ignored config lines"
        );
    }
    Ok(parsed)
}

/// Like [`load`], but a missing file means "nothing configured yet".
pub fn load_or_default(path: &Path) -> Result<ParsedConfig, ConfigError> {
    match load(path) {
        Err(err) if err.is_not_found() => {
            tracing::info!(path = %path.display(), "no config yet, starting empty");
            Ok(ParsedConfig::default())
        }
        other => other,
    }
}

/// Regenerate the whole file from `config`.
pub fn save(path: &Path, config: &Config) -> Result<(), ConfigError> {
    atomic_write(path, config.render().as_bytes()).map_err(|source| ConfigError::Write {
        path: path.to_path_buf(),
        source,
    })?;
    tracing::debug!(path = %path.display(), entries = config.wallpapers().len(), "config saved");
    Ok(())
}

fn atomic_write(path: &Path, bytes: &[u8]) -> io::Result<()> {
    // Replace the file behind any symlink, never the link itself.
    let target = resolve_link(path);
    let dir = match target.parent() {
        Some(d) if !d.as_os_str().is_empty() => d,
        _ => Path::new("."),
    };
    fs::create_dir_all(dir)?;

    let tmp = dir.join(format!(
        ".{}.tmp",
        target
            .file_name()
            .and_then(|s| s.to_str())
            .unwrap_or("hyprpaper.conf")
    ));
    fs::write(&tmp, bytes)?;

    let result = match fs::metadata(&target) {
        Ok(meta) => fs::set_permissions(&tmp, meta.permissions()),
        Err(_) => Ok(()),
    }
    .and_then(|()| fs::rename(&tmp, &target));

    if result.is_err() {
        let _ = fs::remove_file(&tmp);
    }
    result
}

/// Final file behind `path`; dangling links resolve to where they point.
fn resolve_link(path: &Path) -> PathBuf {
    if let Ok(real) = fs::canonicalize(path) {
        return real;
    }
    match fs::read_link(path) {
        Ok(dest) => path.parent().unwrap_or(Path::new(".")).join(dest),
        Err(_) => path.to_path_buf(),
    }
}
