//! hyprpaper config model, line parser and renderer.
//!
//! The on-disk format is line based: `key = value`, blank lines and `#`
//! comments ignored. Rendering is a full regeneration, so comments and
//! unknown keys do not survive a save.

use std::fmt;

/// One `wallpaper = <monitor>,<path>` line. An empty monitor means all outputs.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WallpaperEntry {
    pub monitor: String,
    pub path: String,
}

impl WallpaperEntry {
    pub fn new(monitor: impl Into<String>, path: impl Into<String>) -> Self {
        Self {
            monitor: monitor.into(),
            path: path.into(),
        }
    }

    pub fn is_all_monitors(&self) -> bool {
        self.monitor.is_empty()
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Config {
    preloads: Vec<String>,
    wallpapers: Vec<WallpaperEntry>,
    splash: bool,
    ipc_off: bool,
}

impl Config {
    /// Build a config from wallpaper entries; preloads are derived from them.
    pub fn from_entries(wallpapers: Vec<WallpaperEntry>, splash: bool, ipc_off: bool) -> Self {
        let mut cfg = Self {
            preloads: Vec::new(),
            wallpapers,
            splash,
            ipc_off,
        };
        cfg.rebuild_preloads();
        cfg
    }

    pub fn preloads(&self) -> &[String] {
        &self.preloads
    }

    pub fn wallpapers(&self) -> &[WallpaperEntry] {
        &self.wallpapers
    }

    pub fn splash(&self) -> bool {
        self.splash
    }

    pub fn ipc_off(&self) -> bool {
        self.ipc_off
    }

    pub fn set_splash(&mut self, on: bool) {
        self.splash = on;
    }

    pub fn set_ipc_off(&mut self, off: bool) {
        self.ipc_off = off;
    }

    pub fn is_empty(&self) -> bool {
        self.wallpapers.is_empty()
    }

    pub fn entry_for(&self, monitor: &str) -> Option<&WallpaperEntry> {
        self.wallpapers.iter().find(|w| w.monitor == monitor)
    }

    pub(crate) fn wallpapers_mut(&mut self) -> &mut Vec<WallpaperEntry> {
        &mut self.wallpapers
    }

    pub(crate) fn rebuild_preloads(&mut self) {
        self.preloads = self.wallpapers.iter().map(|w| w.path.clone()).collect();
    }

    /// Parse config text. Never fails; irregular lines are reported, not fatal.
    pub fn parse(text: &str) -> ParsedConfig {
        let mut config = Self::default();
        let mut skipped = Vec::new();

        for (idx, raw) in text.lines().enumerate() {
            let line = raw.trim();
            if line.is_empty() || line.starts_with('#') {
                continue;
            }

            let line_no = idx + 1;
            let Some((key, value)) = line.split_once('=') else {
                skipped.push(SkippedLine::new(line_no, SkipReason::MissingEquals));
                continue;
            };
            let key = key.trim();
            let value = value.trim();

            match key {
                "preload" => {
                    if value.is_empty() {
                        skipped.push(SkippedLine::new(line_no, SkipReason::EmptyValue));
                    } else {
                        config.preloads.push(value.to_string());
                    }
                }
                "wallpaper" => match value.split_once(',') {
                    Some((monitor, path)) => config
                        .wallpapers
                        .push(WallpaperEntry::new(monitor.trim(), path.trim())),
                    None => skipped.push(SkippedLine::new(line_no, SkipReason::MissingComma)),
                },
                "splash" => config.splash = value.eq_ignore_ascii_case("true"),
                "ipc" => config.ipc_off = value.eq_ignore_ascii_case("off"),
                other => skipped.push(SkippedLine::new(
                    line_no,
                    SkipReason::UnknownKey(other.to_string()),
                )),
            }
        }

        ParsedConfig { config, skipped }
    }

    /// Serialize in fixed order: preloads, wallpapers, splash, ipc.
    pub fn render(&self) -> String {
        self.to_string()
    }
}

impl fmt::Display for Config {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for p in &self.preloads {
            writeln!(f, "preload = {p}")?;
        }
        for w in &self.wallpapers {
            writeln!(f, "wallpaper = {},{}", w.monitor, w.path)?;
        }
        if self.splash {
            writeln!(f, "splash = true")?;
        }
        if self.ipc_off {
            writeln!(f, "ipc = off")?;
        }
        Ok(())
    }
}

/// Result of [`Config::parse`]: the config plus every line that was ignored.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ParsedConfig {
    pub config: Config,
    pub skipped: Vec<SkippedLine>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SkippedLine {
    /// 1-based.
    pub line_no: usize,
    pub reason: SkipReason,
}

impl SkippedLine {
    fn new(line_no: usize, reason: SkipReason) -> Self {
        Self { line_no, reason }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SkipReason {
    MissingEquals,
    MissingComma,
    EmptyValue,
    UnknownKey(String),
}

impl fmt::Display for SkipReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::MissingEquals => f.write_str("missing `=`"),
            Self::MissingComma => f.write_str("wallpaper value needs `<monitor>,<path>`"),
            Self::EmptyValue => f.write_str("empty value"),
            Self::UnknownKey(key) => write!(f, "unknown key `{key}`"),
        }
    }
}
