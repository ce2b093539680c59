mod cli;
mod cli_modes;
mod render;

use anyhow::Result;
use cli::{Cli, Style};
use cli_modes::{CliModeResult, edit_mode, fav_mode, feed_mode, use_color, write_mode};
use jot_core::{Config, JsonStore};
use render::{RenderOptions, Renderer};
use std::process::ExitCode;

fn main() -> ExitCode {
    match run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("jot: {e}");
            ExitCode::FAILURE
        }
    }
}

fn run() -> Result<()> {
    let cli = Cli::new();
    let config = Config::load()?;
    let store = JsonStore::new(&config)?;

    let renderer = Renderer::new(Some(RenderOptions {
        date_format: config.date_format.to_string(),
        use_color: use_color(&cli),
        short_mode: matches!(cli.style, Style::Short),
    }));

    if cli.path {
        renderer.print_info(&format!("{}", store.path().display()));
        return Ok(());
    }

    if let CliModeResult::Finish = fav_mode(&cli, &renderer, &store)? {
        return Ok(());
    }

    if let CliModeResult::Finish = edit_mode(&cli, &renderer, &store, &config)? {
        return Ok(());
    }

    if let CliModeResult::Finish = write_mode(&cli, &renderer, &store, &config)? {
        return Ok(());
    }

    // No other mode claimed the invocation: show the feed.
    feed_mode(&cli, &renderer, &store, &config)?;
    Ok(())
}
