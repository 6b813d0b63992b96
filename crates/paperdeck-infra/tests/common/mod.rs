#![allow(dead_code)]

use std::os::unix::fs::PermissionsExt;
use std::path::{Path, PathBuf};

use paperdeck_infra::hyprctl::Hyprctl;

pub fn write_exe(path: &Path, body: &str) {
    std::fs::write(path, body).unwrap();
    let mut perm = std::fs::metadata(path).unwrap().permissions();
    perm.set_mode(0o755);
    std::fs::set_permissions(path, perm).unwrap();
}

/// Fake `hyprctl` + `pkill` that append their argv to `calls.log`.
pub struct FakeDaemon {
    pub log: PathBuf,
    pub hyprctl: PathBuf,
    pub pkill: PathBuf,
}

impl FakeDaemon {
    pub fn new(dir: &Path) -> Self {
        Self::with_hyprctl_exit(dir, 0)
    }

    pub fn with_hyprctl_exit(dir: &Path, code: i32) -> Self {
        let log = dir.join("calls.log");
        let hyprctl = dir.join("hyprctl");
        let pkill = dir.join("pkill");

        write_exe(
            &hyprctl,
            &format!(
                "#!/bin/sh\n\n# fake hyprctl\necho \"hyprctl $*\" >> '{}'\n\
                 if [ \"$1\" = monitors ]; then\n\
                 printf 'Monitor DP-1 (ID 0):\\n\\tfocused: yes\\n\\nMonitor HDMI-A-1 (ID 1):\\n\\tfocused: no\\n'\n\
                 fi\n\
                 [ {code} -ne 0 ] && echo 'no daemon' 1>&2\n\
                 exit {code}\n",
                log.display()
            ),
        );
        write_exe(
            &pkill,
            &format!(
                "#!/bin/sh\n\n# fake pkill\necho \"pkill $*\" >> '{}'\nexit 0\n",
                log.display()
            ),
        );

        Self { log, hyprctl, pkill }
    }

    pub fn control(&self) -> Hyprctl {
        Hyprctl::with_bins(&self.hyprctl, &self.pkill)
    }

    pub fn calls(&self) -> Vec<String> {
        std::fs::read_to_string(&self.log)
            .unwrap_or_default()
            .lines()
            .map(str::to_string)
            .collect()
    }
}
