use super::{
    CliModeResult,
    editor_utils::{create_editor_buffer, resolve_editor},
    id_lookup::{IdMatch, resolve_id},
};
use crate::{cli::Cli, render::Renderer};
use anyhow::Result;
use jot_core::entry::NewEntry;
use jot_core::{Config, EntryStore, JsonStore};

pub fn edit_mode(
    cli: &Cli,
    renderer: &Renderer,
    store: &JsonStore,
    config: &Config,
) -> Result<CliModeResult> {
    if let Some(wanted) = &cli.edit {
        let entries = store.all_entries()?;
        let id = match resolve_id(entries.iter().map(|e| e.id.as_str()), wanted) {
            IdMatch::One(id) => id,
            IdMatch::None => {
                renderer.print_info(&format!("No entry found with id '{wanted}'."));
                return Ok(CliModeResult::Finish);
            }
            IdMatch::Ambiguous(n) => {
                renderer.print_info(&format!(
                    "Id '{wanted}' matches {n} entries, give a few more characters."
                ));
                return Ok(CliModeResult::Finish);
            }
        };
        let Some(entry) = entries.iter().find(|e| e.id == id) else {
            renderer.print_info(&format!("No entry found with id '{wanted}'."));
            return Ok(CliModeResult::Finish);
        };

        let editor = resolve_editor(&config.editor)?;
        let seed = if entry.body.is_empty() {
            format!("{}\n", entry.title)
        } else {
            format!("{}\n\n{}\n", entry.title, entry.body)
        };
        let input = create_editor_buffer(&editor, &seed)?;
        let trimmed = input.trim();
        if trimmed.is_empty() {
            renderer.print_info("Nothing saved, the entry was left as it was.");
            return Ok(CliModeResult::Finish);
        }

        let draft = NewEntry::from_text(trimmed);
        let updated = store.update_entry(&id, &draft.title, &draft.body)?;
        renderer.print_info(&format!("Updated entry '{}'", updated.title));
        return Ok(CliModeResult::Finish);
    }
    Ok(CliModeResult::NothingToDo)
}
