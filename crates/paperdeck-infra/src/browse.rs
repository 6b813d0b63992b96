//! Interactive browse session over a line-oriented terminal.

use std::io::{BufRead, Write};
use std::path::PathBuf;

use anyhow::{anyhow, Context};

use paperdeck_core::monitor::MonitorTarget;
use paperdeck_core::state::{BrowserState, FolderChoice, ImageItem};

use crate::apply::apply;
use crate::hyprctl::{DaemonControl, NotifyReport};
use crate::scanner::list_images;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SessionCommand {
    Cd(FolderChoice),
    Ls,
    Monitors,
    Monitor(MonitorTarget),
    Pick(usize),
    Help,
    Quit,
}

impl SessionCommand {
    pub fn parse_line(line: &str) -> anyhow::Result<Self> {
        let line = line.trim();
        let (word, rest) = match line.split_once(char::is_whitespace) {
            Some((w, r)) => (w, r.trim()),
            None => (line, ""),
        };

        match word {
            "cd" => {
                if rest.is_empty() || rest == "cancel" {
                    Ok(Self::Cd(FolderChoice::Cancelled))
                } else {
                    Ok(Self::Cd(FolderChoice::Selected(PathBuf::from(rest))))
                }
            }
            "ls" => Ok(Self::Ls),
            "monitors" => Ok(Self::Monitors),
            "monitor" => {
                if rest.is_empty() {
                    return Err(anyhow!("monitor requires a name or `all`"));
                }
                Ok(Self::Monitor(MonitorTarget::from_user_str(rest)))
            }
            "pick" => {
                let n = rest
                    .parse::<usize>()
                    .map_err(|_| anyhow!("pick requires an image number"))?;
                Ok(Self::Pick(n))
            }
            "help" | "?" => Ok(Self::Help),
            "quit" | "exit" | "q" => Ok(Self::Quit),
            _ => Err(anyhow!("unknown command `{word}` (try `help`)")),
        }
    }
}

const HELP: &str = "\
commands:
  cd <dir>          open a folder (`cd` alone cancels)
  ls                list images in the current folder
  monitors          list monitors; `*` marks the selection
  monitor <name>    select a monitor, or `all`
  pick <n>          set image <n> as wallpaper
  quit
";

pub struct BrowseSession<D> {
    state: BrowserState,
    config_path: PathBuf,
    daemon: D,
}

impl<D: DaemonControl> BrowseSession<D> {
    pub fn new(state: BrowserState, config_path: PathBuf, daemon: D) -> Self {
        Self {
            state,
            config_path,
            daemon,
        }
    }

    pub fn state(&self) -> &BrowserState {
        &self.state
    }

    /// Resume point for the folder picker.
    pub fn choose_folder(&mut self, choice: FolderChoice) -> bool {
        let Some(folder) = self.state.resume_folder_choice(choice) else {
            return false;
        };
        let items = list_images(&folder)
            .into_iter()
            .map(ImageItem::from_path)
            .collect();
        self.state.set_images(folder, items);
        true
    }

    /// Set grid image `number` (1-based) on the selected monitor.
    pub fn pick(&mut self, number: usize) -> anyhow::Result<(ImageItem, NotifyReport)> {
        let item = self
            .state
            .image(number)
            .cloned()
            .ok_or_else(|| anyhow!("no image #{number}"))?;
        let path = item
            .path
            .to_str()
            .ok_or_else(|| anyhow!("path is not valid UTF-8"))?
            .to_string();

        let target = self.state.selected().clone();
        let report = apply(
            &self.config_path,
            self.state.config_mut(),
            &target,
            &path,
            &mut self.daemon,
        )?;
        Ok((item, report))
    }

    /// Drive the session until `quit` or end of input.
    pub fn run<R: BufRead, W: Write>(&mut self, input: R, mut out: W) -> anyhow::Result<()> {
        if self.state.folder().is_none() {
            if let Some(start) = self.state.starting_folder() {
                self.choose_folder(FolderChoice::Selected(start));
            }
        }
        self.print_grid(&mut out)?;
        if self.state.shows_monitor_picker() {
            self.print_monitors(&mut out)?;
        }

        for line in input.lines() {
            let line = line.context("read input")?;
            if line.trim().is_empty() {
                continue;
            }

            let cmd = match SessionCommand::parse_line(&line) {
                Ok(cmd) => cmd,
                Err(err) => {
                    writeln!(out, "{err}")?;
                    continue;
                }
            };

            match cmd {
                SessionCommand::Cd(choice) => {
                    if self.choose_folder(choice) {
                        self.print_grid(&mut out)?;
                    } else {
                        writeln!(out, "folder unchanged")?;
                    }
                }
                SessionCommand::Ls => self.print_grid(&mut out)?,
                SessionCommand::Monitors => self.print_monitors(&mut out)?,
                SessionCommand::Monitor(target) => {
                    if let MonitorTarget::Named(name) = &target {
                        if !self.state.is_live_monitor(name) {
                            writeln!(out, "note: {name} is not a connected monitor")?;
                        }
                    }
                    writeln!(out, "monitor: {target}")?;
                    self.state.select_monitor(target);
                }
                SessionCommand::Pick(n) => match self.pick(n) {
                    Ok((item, report)) => {
                        writeln!(out, "set {} on {}", item.name, self.state.selected())?;
                        for (cmd, outcome) in report.failures() {
                            writeln!(out, "warning: `{cmd}` failed: {}", outcome.stderr)?;
                        }
                    }
                    Err(err) => writeln!(out, "error: {err:#}")?,
                },
                SessionCommand::Help => out.write_all(HELP.as_bytes())?,
                SessionCommand::Quit => break,
            }
            out.flush()?;
        }

        Ok(())
    }

    fn print_grid<W: Write>(&self, out: &mut W) -> anyhow::Result<()> {
        let Some(folder) = self.state.folder() else {
            writeln!(out, "no folder yet; use `cd <dir>`")?;
            return Ok(());
        };
        let images = self.state.images();
        writeln!(out, "folder: {} ({} images)", folder.display(), images.len())?;
        for (i, item) in images.iter().enumerate() {
            writeln!(out, "{:>4}  {}", i + 1, item.name)?;
        }
        Ok(())
    }

    fn print_monitors<W: Write>(&self, out: &mut W) -> anyhow::Result<()> {
        let selected = self.state.selected();
        let mark = |t: &MonitorTarget| if t == selected { '*' } else { ' ' };

        writeln!(out, "{} all", mark(&MonitorTarget::All))?;
        for name in self.state.monitors() {
            let target = MonitorTarget::Named(name.clone());
            writeln!(out, "{} {name}", mark(&target))?;
        }
        Ok(())
    }
}
