use super::{
    CliModeResult,
    id_lookup::{IdMatch, resolve_id},
};
use crate::{cli::Cli, render::Renderer};
use anyhow::Result;
use jot_core::feed::Phase;
use jot_core::{EntryFeed, JsonStore};
use std::time::{Duration, Instant};

/// Toggles the favorite mark of one entry. The toggle goes through the feed
/// so the outcome is reported the same way the feed reports everything else.
pub fn fav_mode(cli: &Cli, renderer: &Renderer, store: &JsonStore) -> Result<CliModeResult> {
    if let Some(wanted) = &cli.fav {
        let mut feed = EntryFeed::mount(store, Duration::ZERO);
        let now = Instant::now();
        feed.load(now);
        feed.tick(now, renderer);
        if feed.phase() == Phase::Error {
            return Ok(CliModeResult::Finish);
        }

        let ids = feed.state().entries().iter().map(|e| e.id.as_str());
        match resolve_id(ids, wanted) {
            IdMatch::One(id) => feed.toggle_favorite(&id, renderer),
            IdMatch::None => {
                renderer.print_info(&format!("No entry found with id '{wanted}'."));
            }
            IdMatch::Ambiguous(n) => {
                renderer.print_info(&format!(
                    "Id '{wanted}' matches {n} entries, give a few more characters."
                ));
            }
        }
        feed.teardown();
        return Ok(CliModeResult::Finish);
    }
    Ok(CliModeResult::NothingToDo)
}
