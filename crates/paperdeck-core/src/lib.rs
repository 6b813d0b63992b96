//! paperdeck-core: hyprpaper config model and wallpaper policy (no I/O).

pub mod assign;
pub mod config;
pub mod error;
pub mod image;
pub mod monitor;
pub mod protocol;
pub mod state;
