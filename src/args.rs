//! CLI argument definitions.

use std::path::PathBuf;

use clap::{Parser, Subcommand};

#[derive(Debug, Parser)]
#[command(name = "paperdeck")]
#[command(about = "Pick hyprpaper wallpapers per monitor", long_about = None)]
pub struct Cli {
    /// hyprpaper config file (default: $XDG_CONFIG_HOME/hypr/hyprpaper.conf).
    #[arg(long, global = true, env = "PAPERDECK_CONFIG")]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub cmd: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Set an image as wallpaper and apply it to the running daemon.
    Set {
        /// Monitor name; omit to use the image on every monitor.
        #[arg(short, long)]
        monitor: Option<String>,

        /// Absolute or relative path to an image file.
        image: PathBuf,
    },

    /// List supported images in a folder.
    List {
        /// Defaults to the folder of the first configured wallpaper.
        dir: Option<PathBuf>,
    },

    /// List connected monitors.
    Monitors,

    /// Show the current wallpaper configuration.
    Show,

    /// Browse a folder interactively and pick wallpapers.
    Browse {
        /// Defaults to the folder of the first configured wallpaper.
        dir: Option<PathBuf>,
    },
}
