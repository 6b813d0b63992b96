//! Monitor targets and `hyprctl monitors` output parsing.

use std::fmt;

/// Which outputs a wallpaper applies to.
///
/// hyprpaper spells "every output" as an empty monitor name; this type keeps
/// that sentinel at the config boundary.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub enum MonitorTarget {
    #[default]
    All,
    Named(String),
}

impl MonitorTarget {
    pub fn from_config_str(s: &str) -> Self {
        let s = s.trim();
        if s.is_empty() {
            Self::All
        } else {
            Self::Named(s.to_string())
        }
    }

    /// Parse a user-facing name: `all`/`*`/empty select every output.
    pub fn from_user_str(s: &str) -> Self {
        let s = s.trim();
        if s.is_empty() || s == "*" || s.eq_ignore_ascii_case("all") {
            Self::All
        } else {
            Self::Named(s.to_string())
        }
    }

    pub fn as_config_str(&self) -> &str {
        match self {
            Self::All => "",
            Self::Named(name) => name,
        }
    }

    pub fn is_all(&self) -> bool {
        matches!(self, Self::All)
    }
}

impl fmt::Display for MonitorTarget {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::All => f.write_str("all"),
            Self::Named(name) => f.write_str(name),
        }
    }
}

/// Extract monitor names from plain `hyprctl monitors` output.
///
/// Each output block starts with `Monitor <name> (ID n):`.
pub fn parse_monitor_list(text: &str) -> Vec<String> {
    text.lines()
        .filter(|line| line.contains("Monitor"))
        .filter_map(|line| line.split_whitespace().nth(1))
        .map(str::to_string)
        .collect()
}
