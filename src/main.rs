//! leadboard - A keyboard-driven terminal dashboard for lead tracking
//!
//! This is the binary entry point. All logic lives in the library crates.

use std::path::PathBuf;

use clap::{Parser, ValueEnum};
use leadboard_core::theme::ThemeMode;
use leadboard_tui::RunOptions;

/// leadboard - A keyboard-driven terminal dashboard for lead tracking
#[derive(Parser, Debug)]
#[command(name = "lboard")]
#[command(about = "A keyboard-driven terminal dashboard for lead tracking", long_about = None)]
struct Args {
    /// Override the configuration directory
    #[arg(long, value_name = "DIR")]
    config_dir: Option<PathBuf>,

    /// Force the color theme for this session
    #[arg(long, value_enum)]
    theme: Option<ThemeArg>,

    /// Force plain Unicode icons (no Nerd Font glyphs)
    #[arg(long)]
    ascii: bool,
}

#[derive(Debug, Clone, Copy, ValueEnum)]
enum ThemeArg {
    Light,
    Dark,
}

impl From<ThemeArg> for ThemeMode {
    fn from(arg: ThemeArg) -> Self {
        match arg {
            ThemeArg::Light => ThemeMode::Light,
            ThemeArg::Dark => ThemeMode::Dark,
        }
    }
}

fn main() -> color_eyre::Result<()> {
    color_eyre::install()?;
    let args = Args::parse();

    leadboard_core::logging::init()?;

    leadboard_tui::run(RunOptions {
        config_dir: args.config_dir,
        theme_override: args.theme.map(ThemeMode::from),
        ascii_icons: args.ascii,
    })?;

    Ok(())
}
