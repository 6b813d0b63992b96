//! hyprpaper control commands and the plan for applying a change.

use std::fmt;

use crate::monitor::MonitorTarget;

pub const DAEMON_NAME: &str = "hyprpaper";

/// Which external program a command is sent through.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Program {
    Hyprctl,
    Pkill,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DaemonCommand {
    Kill,
    Relaunch,
    Preload { path: String },
    Wallpaper { monitor: MonitorTarget, path: String },
    UnloadUnused,
}

impl DaemonCommand {
    pub fn program(&self) -> Program {
        match self {
            Self::Kill => Program::Pkill,
            _ => Program::Hyprctl,
        }
    }

    /// Argument vector, without the program name.
    pub fn args(&self) -> Vec<String> {
        match self {
            Self::Kill => owned(&[DAEMON_NAME]),
            Self::Relaunch => owned(&["dispatch", "exec", DAEMON_NAME]),
            Self::Preload { path } => owned(&[DAEMON_NAME, "preload", path.as_str()]),
            Self::Wallpaper { monitor, path } => {
                let arg = format!("{},{path}", monitor.as_config_str());
                owned(&[DAEMON_NAME, "wallpaper", arg.as_str()])
            }
            Self::UnloadUnused => owned(&[DAEMON_NAME, "unload", "unused"]),
        }
    }
}

fn owned(xs: &[&str]) -> Vec<String> {
    xs.iter().map(|s| s.to_string()).collect()
}

impl fmt::Display for DaemonCommand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let program = match self.program() {
            Program::Hyprctl => "hyprctl",
            Program::Pkill => "pkill",
        };
        write!(f, "{program} {}", self.args().join(" "))
    }
}

/// Commands that bring a running daemon in line with a new assignment.
///
/// Switching to all-monitors from several entries restarts the daemon, since
/// per-output state would otherwise linger. Everything else is an
/// incremental preload + wallpaper. Unused images are always unloaded last.
pub fn plan(had_multiple: bool, target: &MonitorTarget, path: &str) -> Vec<DaemonCommand> {
    let mut cmds = if target.is_all() && had_multiple {
        vec![DaemonCommand::Kill, DaemonCommand::Relaunch]
    } else {
        vec![
            DaemonCommand::Preload {
                path: path.to_string(),
            },
            DaemonCommand::Wallpaper {
                monitor: target.clone(),
                path: path.to_string(),
            },
        ]
    };
    cmds.push(DaemonCommand::UnloadUnused);
    cmds
}
