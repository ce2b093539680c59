use super::CliModeResult;
use crate::{cli::Cli, render::Renderer};
use anyhow::Result;
use jot_core::feed::{PLACEHOLDER_COUNT, Phase};
use jot_core::notify::{Notice, NotificationSink};
use jot_core::{Config, EntryFeed, JsonStore};
use std::cell::RefCell;
use std::io::{self, IsTerminal};
use std::thread;
use std::time::{Duration, Instant};

/// How often the pending load is polled while the skeletons are up.
const TICK_EVERY: Duration = Duration::from_millis(15);

/// Notices raised while the skeletons are up. The erase assumes the
/// skeleton rows are the last lines printed, so delivery waits for it.
#[derive(Default)]
struct HeldNotices {
    queue: RefCell<Vec<Notice>>,
}

impl HeldNotices {
    fn replay(self, sink: &dyn NotificationSink) {
        for notice in self.queue.into_inner() {
            sink.notify(notice);
        }
    }
}

impl NotificationSink for HeldNotices {
    fn notify(&self, notice: Notice) {
        self.queue.borrow_mut().push(notice);
    }
}

/// The default mode: renders the journal feed.
pub fn feed_mode(
    cli: &Cli,
    renderer: &Renderer,
    store: &JsonStore,
    config: &Config,
) -> Result<CliModeResult> {
    if cli.favorites {
        return favorites_mode(renderer, store);
    }

    // Skeletons only make sense on a live terminal. A redirected feed
    // loads immediately and prints the final sequence once.
    let animate = io::stdout().is_terminal() && !config.load_delay.is_zero();
    let delay = if animate { config.load_delay } else { Duration::ZERO };

    let mut feed = EntryFeed::mount(store, delay);
    feed.load(Instant::now());

    if animate {
        renderer.print_feed(&feed.render_sequence());
        let held = HeldNotices::default();
        while !feed.tick(Instant::now(), &held) {
            thread::sleep(TICK_EVERY);
        }
        renderer.erase_lines(PLACEHOLDER_COUNT as u16)?;
        held.replay(renderer);
    } else {
        feed.tick(Instant::now(), renderer);
    }

    renderer.print_feed(&feed.render_sequence());
    feed.teardown();
    Ok(CliModeResult::Finish)
}

fn favorites_mode(renderer: &Renderer, store: &JsonStore) -> Result<CliModeResult> {
    let mut feed = EntryFeed::mount(store, Duration::ZERO);
    let now = Instant::now();
    feed.load(now);
    feed.tick(now, renderer);
    if feed.phase() == Phase::Error {
        return Ok(CliModeResult::Finish);
    }

    let favorites: Vec<_> = feed
        .state()
        .entries()
        .iter()
        .filter(|e| e.favorite)
        .collect();
    if favorites.is_empty() {
        renderer.print_info("No favorite entries yet.");
        return Ok(CliModeResult::Finish);
    }

    renderer.print_info(&format!("{} favorite entries.", favorites.len()));
    for entry in favorites {
        renderer.print_entry_line(entry);
    }
    Ok(CliModeResult::Finish)
}

#[cfg(test)]
mod tests {
    use super::*;
    use jot_core::entry::StoredEntry;
    use jot_core::store::{EntryStore, StoreError};

    struct OfflineStore;

    impl EntryStore for OfflineStore {
        fn all_entries(&self) -> Result<Vec<StoredEntry>, StoreError> {
            Err(StoreError::Io(std::io::Error::other("disk offline")))
        }

        fn toggle_favorite(&self, id: &str) -> Result<bool, StoreError> {
            Err(StoreError::UnknownEntry(id.to_string()))
        }
    }

    #[test]
    fn a_failing_load_keeps_its_notice_until_after_the_redraw() {
        let held = HeldNotices::default();
        let mut feed = EntryFeed::mount(OfflineStore, Duration::ZERO);
        feed.load(Instant::now());
        assert!(feed.tick(Instant::now(), &held));

        let queue = held.queue.into_inner();
        assert_eq!(queue.len(), 1);
        assert_eq!(queue[0].title, "Error");
        assert_eq!(queue[0].description, "Failed to load journal entries");
    }

    #[test]
    fn held_notices_replay_in_order() {
        let held = HeldNotices::default();
        held.notify(Notice::destructive("Error", "Failed to load journal entries"));
        held.notify(Notice::new("Added to favorites", "Entry added to your favorites"));

        let target = HeldNotices::default();
        held.replay(&target);

        let replayed = target.queue.into_inner();
        let titles: Vec<&str> = replayed.iter().map(|n| n.title.as_str()).collect();
        assert_eq!(titles, ["Error", "Added to favorites"]);
    }
}
