//! paperdeck-infra: OS adapters (config file I/O, hyprctl, directory scanning).

pub mod apply;
pub mod browse;
pub mod hyprctl;
pub mod paths;
pub mod process_runner;
pub mod scanner;
pub mod store;
