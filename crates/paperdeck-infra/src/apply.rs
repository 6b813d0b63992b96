//! Assign, persist, then notify the daemon.

use std::path::Path;

use anyhow::Context;

use paperdeck_core::config::Config;
use paperdeck_core::monitor::MonitorTarget;

use crate::hyprctl::{notify, DaemonControl, NotifyReport};
use crate::store;

/// Apply one wallpaper choice end to end.
///
/// A failed save is returned as an error (the in-memory config has already
/// changed). Daemon failures only show up in the report.
pub fn apply<D: DaemonControl + ?Sized>(
    config_path: &Path,
    config: &mut Config,
    target: &MonitorTarget,
    image: &str,
    daemon: &mut D,
) -> anyhow::Result<NotifyReport> {
    let assignment = config.assign(target, image);
    tracing::info!(monitor = %target, image, "wallpaper assigned");

    store::save(config_path, config).context("save hyprpaper config")?;

    Ok(notify(daemon, assignment.had_multiple(), target, image))
}
