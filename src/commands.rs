//! Subcommand implementations.

use std::io::Write;
use std::path::{Path, PathBuf};

use anyhow::{anyhow, Context};

use paperdeck_core::image::is_supported_image;
use paperdeck_core::monitor::MonitorTarget;
use paperdeck_core::state::{BrowserState, FolderChoice};
use paperdeck_infra::apply::apply;
use paperdeck_infra::browse::BrowseSession;
use paperdeck_infra::hyprctl::Hyprctl;
use paperdeck_infra::scanner::list_images;
use paperdeck_infra::store;

pub fn set(config_path: &Path, monitor: Option<String>, image: PathBuf) -> anyhow::Result<()> {
    let cwd = if image.is_absolute() {
        PathBuf::new()
    } else {
        std::env::current_dir().context("cwd")?
    };
    let image = resolve_image(&image, &cwd)?;
    let target = monitor_target(monitor.as_deref());

    let mut config = store::load_or_default(config_path)
        .context("load hyprpaper config")?
        .config;
    let report = apply(
        config_path,
        &mut config,
        &target,
        &image,
        &mut Hyprctl::from_env(),
    )?;

    let failed = report.failures().count();
    if failed > 0 {
        eprintln!(
            "warning: {failed} hyprpaper command(s) failed; config saved to {}",
            config_path.display()
        );
    }
    Ok(())
}

/// Absolute, existing, supported image path; relative paths are taken from `cwd`.
fn resolve_image(image: &Path, cwd: &Path) -> anyhow::Result<String> {
    let abs = if image.is_absolute() {
        image.to_path_buf()
    } else {
        cwd.join(image)
    };

    if !abs.is_file() {
        return Err(anyhow!("image path does not exist")).with_context(|| format!("{abs:?}"));
    }
    if !is_supported_image(&abs) {
        return Err(anyhow!("unsupported image type (png, jpg, jpeg, jxl, webp)"))
            .with_context(|| format!("{abs:?}"));
    }
    abs.into_os_string()
        .into_string()
        .map_err(|_| anyhow!("path is not valid UTF-8"))
}

/// `--monitor` value; absent means every monitor.
fn monitor_target(flag: Option<&str>) -> MonitorTarget {
    flag.map(MonitorTarget::from_user_str).unwrap_or_default()
}

pub fn list(config_path: &Path, dir: Option<PathBuf>) -> anyhow::Result<()> {
    let dir = match dir {
        Some(d) => d,
        None => starting_folder(config_path)?
            .ok_or_else(|| anyhow!("no folder given and no wallpaper configured"))?,
    };

    let mut out = std::io::stdout().lock();
    for path in list_images(&dir) {
        writeln!(out, "{}", path.display())?;
    }
    Ok(())
}

pub fn monitors() -> anyhow::Result<()> {
    let monitors = Hyprctl::from_env()
        .list_monitors()
        .context("list monitors")?;
    for name in monitors {
        println!("{name}");
    }
    Ok(())
}

pub fn show(config_path: &Path) -> anyhow::Result<()> {
    let parsed = store::load_or_default(config_path).context("load hyprpaper config")?;
    let cfg = &parsed.config;

    let mut out = std::io::stdout().lock();
    writeln!(out, "config: {}", config_path.display())?;
    if cfg.is_empty() {
        writeln!(out, "no wallpapers configured")?;
    }
    for w in cfg.wallpapers() {
        let monitor = if w.is_all_monitors() { "*" } else { w.monitor.as_str() };
        writeln!(out, "{monitor:<12} {}", w.path)?;
    }
    writeln!(out, "splash: {}", if cfg.splash() { "on" } else { "off" })?;
    writeln!(out, "ipc: {}", if cfg.ipc_off() { "off" } else { "on" })?;
    for s in &parsed.skipped {
        writeln!(out, "skipped line {}: {}", s.line_no, s.reason)?;
    }
    Ok(())
}

pub fn browse(config_path: &Path, dir: Option<PathBuf>) -> anyhow::Result<()> {
    let config = store::load_or_default(config_path)
        .context("load hyprpaper config")?
        .config;

    let daemon = Hyprctl::from_env();
    let monitors = daemon.list_monitors().unwrap_or_else(|err| {
        tracing::warn!(error = %format!("{err:#}"), "cannot list monitors, continuing without");
        Vec::new()
    });

    let mut session = BrowseSession::new(
        BrowserState::new(config, monitors),
        config_path.to_path_buf(),
        daemon,
    );
    if let Some(dir) = dir {
        session.choose_folder(FolderChoice::Selected(dir));
    }

    session.run(std::io::stdin().lock(), std::io::stdout().lock())
}

fn starting_folder(config_path: &Path) -> anyhow::Result<Option<PathBuf>> {
    let config = store::load_or_default(config_path)
        .context("load hyprpaper config")?
        .config;
    Ok(BrowserState::new(config, Vec::new()).starting_folder())
}
