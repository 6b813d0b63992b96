//! Browser state: loaded config, live monitors, selection and the image grid.
//!
//! Owned by whichever front end drives it and passed by `&mut` into each
//! handler; there is no process-wide instance.

use std::path::{Path, PathBuf};

use crate::config::Config;
use crate::monitor::MonitorTarget;

/// One cell of the image grid.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImageItem {
    pub path: PathBuf,
    pub name: String,
}

impl ImageItem {
    pub fn from_path(path: PathBuf) -> Self {
        let name = path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_default();
        Self { path, name }
    }
}

/// Outcome of the folder picker, delivered when the user answers it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FolderChoice {
    Selected(PathBuf),
    Cancelled,
}

#[derive(Debug, Clone)]
pub struct BrowserState {
    config: Config,
    monitors: Vec<String>,
    selected: MonitorTarget,
    folder: Option<PathBuf>,
    images: Vec<ImageItem>,
}

impl BrowserState {
    pub fn new(config: Config, monitors: Vec<String>) -> Self {
        let selected = initial_selection(&config, &monitors);
        Self {
            config,
            monitors,
            selected,
            folder: None,
            images: Vec::new(),
        }
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    pub fn monitors(&self) -> &[String] {
        &self.monitors
    }

    /// A single output leaves nothing to choose between.
    pub fn shows_monitor_picker(&self) -> bool {
        self.monitors.len() > 1
    }

    pub fn selected(&self) -> &MonitorTarget {
        &self.selected
    }

    pub fn select_monitor(&mut self, target: MonitorTarget) {
        self.selected = target;
    }

    pub fn is_live_monitor(&self, name: &str) -> bool {
        self.monitors.iter().any(|m| m == name)
    }

    /// Directory of the first configured wallpaper, if any.
    pub fn starting_folder(&self) -> Option<PathBuf> {
        let first = self.config.wallpapers().first()?;
        let parent = Path::new(&first.path)
            .parent()
            .filter(|p| !p.as_os_str().is_empty())
            .map(Path::to_path_buf)
            .unwrap_or_else(|| PathBuf::from("/"));
        Some(parent)
    }

    pub fn folder(&self) -> Option<&Path> {
        self.folder.as_deref()
    }

    pub fn images(&self) -> &[ImageItem] {
        &self.images
    }

    /// 1-based lookup, matching how the grid is numbered for the user.
    pub fn image(&self, number: usize) -> Option<&ImageItem> {
        number.checked_sub(1).and_then(|i| self.images.get(i))
    }

    /// Resume after the folder picker. Returns the folder to scan, or `None`
    /// when the pick was cancelled and the current grid stays as is.
    pub fn resume_folder_choice(&self, choice: FolderChoice) -> Option<PathBuf> {
        match choice {
            FolderChoice::Selected(path) => Some(path),
            FolderChoice::Cancelled => None,
        }
    }

    pub fn set_images(&mut self, folder: PathBuf, images: Vec<ImageItem>) {
        self.folder = Some(folder);
        self.images = images;
    }

    pub fn config_mut(&mut self) -> &mut Config {
        &mut self.config
    }
}

fn initial_selection(config: &Config, monitors: &[String]) -> MonitorTarget {
    if monitors.len() <= 1 {
        return MonitorTarget::All;
    }
    monitors
        .iter()
        .find(|m| config.entry_for(m).is_some())
        .map(|m| MonitorTarget::Named(m.clone()))
        .unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::WallpaperEntry;

    fn monitors(names: &[&str]) -> Vec<String> {
        names.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn selection_starts_on_first_configured_live_monitor() {
        let cfg = Config::from_entries(
            vec![
                WallpaperEntry::new("HDMI-A-1", "/w/a.png"),
                WallpaperEntry::new("DP-1", "/w/b.png"),
            ],
            false,
            false,
        );
        let st = BrowserState::new(cfg, monitors(&["DP-1", "HDMI-A-1"]));
        assert_eq!(st.selected(), &MonitorTarget::Named("DP-1".into()));
        assert!(st.shows_monitor_picker());
    }

    #[test]
    fn selection_defaults_to_all() {
        let cfg = Config::from_entries(vec![WallpaperEntry::new("", "/w/a.png")], false, false);
        let st = BrowserState::new(cfg, monitors(&["DP-1", "DP-2"]));
        assert!(st.selected().is_all());

        let single = BrowserState::new(
            Config::from_entries(vec![WallpaperEntry::new("DP-1", "/w/a.png")], false, false),
            monitors(&["DP-1"]),
        );
        assert!(single.selected().is_all());
        assert!(!single.shows_monitor_picker());
    }

    #[test]
    fn starting_folder_is_parent_of_first_wallpaper() {
        let cfg = Config::from_entries(
            vec![
                WallpaperEntry::new("DP-1", "/home/u/walls/a.png"),
                WallpaperEntry::new("DP-2", "/srv/b.png"),
            ],
            false,
            false,
        );
        let st = BrowserState::new(cfg, Vec::new());
        assert_eq!(st.starting_folder(), Some(PathBuf::from("/home/u/walls")));

        let bare = Config::from_entries(vec![WallpaperEntry::new("", "a.png")], false, false);
        assert_eq!(
            BrowserState::new(bare, Vec::new()).starting_folder(),
            Some(PathBuf::from("/"))
        );

        assert_eq!(
            BrowserState::new(Config::default(), Vec::new()).starting_folder(),
            None
        );
    }

    #[test]
    fn cancelled_folder_choice_keeps_grid() {
        let mut st = BrowserState::new(Config::default(), Vec::new());
        st.set_images(
            PathBuf::from("/w"),
            vec![ImageItem::from_path(PathBuf::from("/w/a.png"))],
        );

        assert_eq!(st.resume_folder_choice(FolderChoice::Cancelled), None);
        assert_eq!(st.folder(), Some(Path::new("/w")));
        assert_eq!(st.images().len(), 1);

        let next = st.resume_folder_choice(FolderChoice::Selected(PathBuf::from("/x")));
        assert_eq!(next, Some(PathBuf::from("/x")));
    }

    #[test]
    fn images_are_numbered_from_one() {
        let mut st = BrowserState::new(Config::default(), Vec::new());
        st.set_images(
            PathBuf::from("/w"),
            vec![
                ImageItem::from_path(PathBuf::from("/w/a.png")),
                ImageItem::from_path(PathBuf::from("/w/b.png")),
            ],
        );
        assert_eq!(st.image(0), None);
        assert_eq!(st.image(1).map(|i| i.name.as_str()), Some("a.png"));
        assert_eq!(st.image(2).map(|i| i.name.as_str()), Some("b.png"));
        assert_eq!(st.image(3), None);
    }

    #[test]
    fn selected_target_drives_assignment() {
        let mut st = BrowserState::new(Config::default(), monitors(&["DP-1", "DP-2"]));
        st.select_monitor(MonitorTarget::Named("DP-2".into()));
        let target = st.selected().clone();
        let a = st.config_mut().assign(&target, "/w/a.png");

        assert_eq!(a.previous_entries, 0);
        assert_eq!(
            st.config().wallpapers(),
            [WallpaperEntry::new("DP-2", "/w/a.png")]
        );
    }
}
