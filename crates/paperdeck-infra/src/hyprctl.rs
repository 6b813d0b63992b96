//! hyprpaper control through `hyprctl` (and `pkill` for restarts).

use std::ffi::OsString;

use anyhow::{anyhow, Context};

use paperdeck_core::monitor::{parse_monitor_list, MonitorTarget};
use paperdeck_core::protocol::{plan, DaemonCommand, Program};

use crate::process_runner::{self, CommandOutcome};

/// Something that can execute daemon commands.
pub trait DaemonControl {
    fn run(&mut self, cmd: &DaemonCommand) -> CommandOutcome;
}

#[derive(Debug, Clone)]
pub struct Hyprctl {
    hyprctl: OsString,
    pkill: OsString,
}

impl Hyprctl {
    /// Binaries from `PAPERDECK_HYPRCTL_BIN` / `PAPERDECK_PKILL_BIN`, else `$PATH`.
    pub fn from_env() -> Self {
        Self {
            hyprctl: std::env::var_os("PAPERDECK_HYPRCTL_BIN").unwrap_or_else(|| "hyprctl".into()),
            pkill: std::env::var_os("PAPERDECK_PKILL_BIN").unwrap_or_else(|| "pkill".into()),
        }
    }

    pub fn with_bins(hyprctl: impl Into<OsString>, pkill: impl Into<OsString>) -> Self {
        Self {
            hyprctl: hyprctl.into(),
            pkill: pkill.into(),
        }
    }

    /// Names of the outputs Hyprland currently knows about.
    pub fn list_monitors(&self) -> anyhow::Result<Vec<String>> {
        let out = process_runner::run(&self.hyprctl, ["monitors"]);
        if !out.success {
            return Err(anyhow!("hyprctl monitors failed")).with_context(|| match out.exit_code {
                Some(code) => format!("exit={code} {}", out.stderr),
                None => out.stderr.clone(),
            });
        }
        Ok(parse_monitor_list(&out.stdout))
    }
}

impl DaemonControl for Hyprctl {
    fn run(&mut self, cmd: &DaemonCommand) -> CommandOutcome {
        let program = match cmd.program() {
            Program::Hyprctl => &self.hyprctl,
            Program::Pkill => &self.pkill,
        };
        process_runner::run(program, cmd.args())
    }
}

/// Every command sent for one change, with its outcome.
#[derive(Debug, Clone, Default)]
pub struct NotifyReport {
    pub steps: Vec<(DaemonCommand, CommandOutcome)>,
}

impl NotifyReport {
    pub fn all_ok(&self) -> bool {
        self.steps.iter().all(|(_, out)| out.success)
    }

    pub fn failures(&self) -> impl Iterator<Item = &(DaemonCommand, CommandOutcome)> {
        self.steps.iter().filter(|(_, out)| !out.success)
    }
}

/// Tell the running daemon about a new assignment. Never fails: a command
/// that does not succeed is logged and reported, and the rest still run.
pub fn notify<D: DaemonControl + ?Sized>(
    daemon: &mut D,
    had_multiple: bool,
    target: &MonitorTarget,
    path: &str,
) -> NotifyReport {
    let mut report = NotifyReport::default();
    for cmd in plan(had_multiple, target, path) {
        let out = daemon.run(&cmd);
        if out.success {
            tracing::debug!(command = %cmd, "daemon command ok");
        } else {
            tracing::warn!(
                command = %cmd,
                exit_code = ?out.exit_code,
                stderr = %out.stderr,
                "daemon command failed"
            );
        }
        report.steps.push((cmd, out));
    }
    report
}
