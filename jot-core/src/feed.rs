//! The entry feed: the view-model behind the journal's home view.
//!
//! The feed owns everything the presentation layer shows (loading
//! skeletons, the empty-state marker, entries and the promo cards
//! interleaved between them) and the transitions between those states.
//! It reaches persistence only through [`EntryStore`] and reports outcomes
//! through [`NotificationSink`]; no failure escapes it.

use crate::entry::EntryView;
use crate::notify::{Notice, NotificationSink};
use crate::promo::{PromoCard, Promos};
use crate::store::EntryStore;
use std::time::{Duration, Instant};
use thiserror::Error;

/// How many skeleton cards the loading state shows.
pub const PLACEHOLDER_COUNT: usize = 3;
/// A promo card follows every `PROMO_INTERVAL`-th entry, except the last.
pub const PROMO_INTERVAL: usize = 3;

/// Macro states of a mounted feed. `Populated` and `Error` only go back to
/// `Loading` on a remount; favorite toggles stay inside `Populated`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    Idle,
    Loading,
    Populated,
    Error,
}

/// Why a feed operation fell back to its recovery path.
///
/// Failures are recorded here and surfaced once through the sink; the view
/// stays interactive after any of them.
#[derive(Debug, Error)]
pub enum FeedError {
    #[error("could not load journal entries: {0}")]
    LoadFailure(String),
    #[error("could not update favorite for '{id}': {reason}")]
    ToggleFailure { id: String, reason: String },
}

/// What the feed currently shows: the ordered entry views plus the loading
/// flag. Mutated only by a completed load and by toggle reconciliation.
#[derive(Debug)]
pub struct ViewState {
    entries: Vec<EntryView>,
    loading: bool,
}

impl ViewState {
    pub fn entries(&self) -> &[EntryView] {
        &self.entries
    }

    pub fn is_loading(&self) -> bool {
        self.loading
    }
}

/// One element of the rendered sequence.
#[derive(Debug, Clone, PartialEq)]
pub enum FeedItem<'a> {
    /// Loading stand-in rendered before real data arrives.
    Placeholder,
    /// The single marker rendered when the journal has no entries.
    EmptyNotice,
    Entry(&'a EntryView),
    Promo(PromoCard),
}

/// The entry feed. One instance per mount.
pub struct EntryFeed<S> {
    store: S,
    state: ViewState,
    phase: Phase,
    delay: Duration,
    deadline: Option<Instant>,
    mounted: bool,
    last_error: Option<FeedError>,
}

impl<S: EntryStore> EntryFeed<S> {
    /// Mounts a feed over `store`, in a loading view state so the first
    /// render shows skeletons rather than a false empty journal.
    ///
    /// `delay` is the minimum time a load stays pending; it keeps fast
    /// stores from flashing the skeletons away.
    pub fn mount(store: S, delay: Duration) -> Self {
        Self {
            store,
            state: ViewState {
                entries: Vec::new(),
                loading: true,
            },
            phase: Phase::Idle,
            delay,
            deadline: None,
            mounted: true,
            last_error: None,
        }
    }

    /// Starts the load. Called once per mount, right after
    /// [`mount`](Self::mount); the pending read is applied by
    /// [`tick`](Self::tick) once the delay has elapsed.
    pub fn load(&mut self, now: Instant) {
        if !self.mounted {
            return;
        }
        self.state.loading = true;
        self.phase = Phase::Loading;
        self.deadline = Some(now + self.delay);
    }

    /// Drives the pending load. Returns `true` when the load was applied on
    /// this call. Before the deadline, without a pending load, or after
    /// [`teardown`](Self::teardown) this is a no-op, so the update is
    /// applied at most once and never on a dead view.
    pub fn tick(&mut self, now: Instant, sink: &dyn NotificationSink) -> bool {
        if !self.mounted {
            return false;
        }
        let Some(deadline) = self.deadline else {
            return false;
        };
        if now < deadline {
            return false;
        }
        self.deadline = None;

        match self.read_views() {
            Ok(views) => {
                self.state.entries = views;
                self.phase = Phase::Populated;
                self.last_error = None;
            }
            Err(err) => {
                self.state.entries.clear();
                self.phase = Phase::Error;
                self.last_error = Some(err);
                sink.notify(Notice::destructive(
                    "Error",
                    "Failed to load journal entries",
                ));
            }
        }
        self.state.loading = false;
        true
    }

    /// Cancels any pending load; no state update can be applied afterwards.
    /// The equivalent of clearing the timer when the view unmounts.
    pub fn teardown(&mut self) {
        self.mounted = false;
        self.deadline = None;
    }

    /// Relays a favorite toggle to the store and reconciles the result.
    ///
    /// The store's returned flag is authoritative, never an assumed local
    /// flip. Only the matching entry is touched and order is preserved. An
    /// id not present in the view is a complete no-op; a store failure
    /// leaves the view unchanged.
    pub fn toggle_favorite(&mut self, id: &str, sink: &dyn NotificationSink) {
        if !self.state.entries.iter().any(|e| e.id == id) {
            return;
        }
        match self.store.toggle_favorite(id) {
            Ok(favorite) => {
                for entry in &mut self.state.entries {
                    if entry.id == id {
                        entry.favorite = favorite;
                    }
                }
                self.last_error = None;
                let notice = if favorite {
                    Notice::new("Added to favorites", "Entry added to your favorites")
                } else {
                    Notice::new("Removed from favorites", "Entry removed from your favorites")
                };
                sink.notify(notice);
            }
            Err(err) => {
                self.last_error = Some(FeedError::ToggleFailure {
                    id: id.to_string(),
                    reason: err.to_string(),
                });
                sink.notify(Notice::destructive("Error", "Failed to update favorite"));
            }
        }
    }

    /// Renders the current view state as a presentation sequence.
    ///
    /// Loading shows exactly [`PLACEHOLDER_COUNT`] skeletons no matter how
    /// many entries exist. An empty journal shows one
    /// [`FeedItem::EmptyNotice`]. Otherwise entries appear in view order
    /// with a promo card after every [`PROMO_INTERVAL`]-th entry. No card
    /// follows the last entry, and none appear until the journal holds at
    /// least [`PROMO_INTERVAL`] entries.
    pub fn render_sequence(&self) -> Vec<FeedItem<'_>> {
        if self.state.loading {
            return vec![FeedItem::Placeholder; PLACEHOLDER_COUNT];
        }
        if self.state.entries.is_empty() {
            return vec![FeedItem::EmptyNotice];
        }

        let total = self.state.entries.len();
        let show_promos = total >= PROMO_INTERVAL;
        let mut items = Vec::with_capacity(total + total / PROMO_INTERVAL);
        let mut slot = 0;
        for (index, entry) in self.state.entries.iter().enumerate() {
            items.push(FeedItem::Entry(entry));
            let position = index + 1;
            if show_promos && position % PROMO_INTERVAL == 0 && position != total {
                items.push(FeedItem::Promo(Promos::pick(slot)));
                slot += 1;
            }
        }
        items
    }

    /// Reads the store and converts every entry for display. All-or-nothing:
    /// one bad timestamp fails the whole load.
    fn read_views(&self) -> Result<Vec<EntryView>, FeedError> {
        let stored = self
            .store
            .all_entries()
            .map_err(|e| FeedError::LoadFailure(e.to_string()))?;
        stored
            .iter()
            .map(|s| {
                EntryView::from_stored(s)
                    .map_err(|e| FeedError::LoadFailure(format!("entry '{}': {e}", s.id)))
            })
            .collect()
    }

    pub fn state(&self) -> &ViewState {
        &self.state
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn last_error(&self) -> Option<&FeedError> {
        self.last_error.as_ref()
    }
}
