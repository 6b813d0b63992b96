mod args;
mod commands;
mod output;

use std::path::PathBuf;

fn main() {
    output::init_logging();
    if let Err(err) = real_main() {
        output::print_error(&err);
        std::process::exit(1);
    }
}

fn real_main() -> anyhow::Result<()> {
    use clap::Parser as _;
    let cli = args::Cli::parse();
    let config = cli.config;
    match cli.cmd {
        args::Command::Set { monitor, image } => {
            commands::set(&config_path(config)?, monitor, image)
        }
        args::Command::List { dir } => commands::list(&config_path(config)?, dir),
        args::Command::Monitors => commands::monitors(),
        args::Command::Show => commands::show(&config_path(config)?),
        args::Command::Browse { dir } => commands::browse(&config_path(config)?, dir),
    }
}

/// `--config` / `PAPERDECK_CONFIG`, else the hyprpaper default under `$HOME`.
fn config_path(explicit: Option<PathBuf>) -> anyhow::Result<PathBuf> {
    match explicit {
        Some(path) => Ok(path),
        None => paperdeck_infra::paths::default_config_path(),
    }
}
