//! Wallpaper assignment policy.

use crate::config::{Config, WallpaperEntry};
use crate::monitor::MonitorTarget;

/// What [`Config::assign`] saw before mutating.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Assignment {
    pub previous_entries: usize,
}

impl Assignment {
    pub fn had_multiple(&self) -> bool {
        self.previous_entries > 1
    }
}

impl Config {
    /// Point `target` at `path`.
    ///
    /// `All` replaces every entry. A named monitor replaces its own entry and
    /// any all-monitors entry, leaving other monitors alone. Preloads are
    /// rebuilt from the wallpaper list afterwards (duplicates kept). Monitor
    /// names are not validated against live outputs.
    pub fn assign(&mut self, target: &MonitorTarget, path: &str) -> Assignment {
        let previous_entries = self.wallpapers().len();

        let wallpapers = self.wallpapers_mut();
        match target {
            MonitorTarget::All => wallpapers.clear(),
            MonitorTarget::Named(name) => {
                wallpapers.retain(|w| w.monitor != *name && !w.is_all_monitors())
            }
        }
        wallpapers.push(WallpaperEntry::new(target.as_config_str(), path));

        self.rebuild_preloads();

        Assignment { previous_entries }
    }
}
