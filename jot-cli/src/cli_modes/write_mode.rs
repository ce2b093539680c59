use super::{
    CliModeResult,
    editor_utils::{create_editor_buffer, resolve_editor},
};
use crate::{cli::Cli, render::Renderer};
use anyhow::Result;
use jot_core::entry::{EntryView, NewEntry};
use jot_core::{Config, JsonStore};

pub fn write_mode(
    cli: &Cli,
    renderer: &Renderer,
    store: &JsonStore,
    config: &Config,
) -> Result<CliModeResult> {
    let text = if !cli.text.is_empty() {
        cli.text.join(" ")
    } else if cli.new {
        let editor = resolve_editor(&config.editor)?;
        let input = create_editor_buffer(&editor, "")?;
        let trimmed = input.trim().to_string();
        if trimmed.is_empty() {
            renderer.print_info("No entry to save, because no text was received.");
            return Ok(CliModeResult::Finish);
        }
        trimmed
    } else {
        return Ok(CliModeResult::NothingToDo);
    };

    let new_entry = store.create_entry(NewEntry::from_text(&text))?;
    let view = EntryView::from_stored(&new_entry)?;
    renderer.print_info(&format!("Added new entry to {}", store.path().display()));
    renderer.print_entry_line(&view);
    Ok(CliModeResult::Finish)
}
