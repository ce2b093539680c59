use chrono::{DateTime, Local};
use serde::{Deserialize, Serialize};

/// A journal entry exactly as the entry store persists it.
///
/// `created_at` keeps the RFC 3339 string it was written with; use
/// [`EntryView::from_stored`] to obtain a structured timestamp for display.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StoredEntry {
    pub id: String,
    pub title: String,
    pub body: String,
    pub created_at: String,
    /// Older journal files predate favorites, so the flag defaults to off.
    #[serde(default)]
    pub favorite: bool,
}

/// Properties to create a new entry. The store fills in the id and timestamp.
#[derive(Debug, Clone)]
pub struct NewEntry {
    pub title: String,
    pub body: String,
}

impl NewEntry {
    /// Splits free text into a title and a body.
    ///
    /// The first line wins; in single-line input the first sentence does
    /// (e.g. `"Morning pages. Slept well."` gives the title `Morning pages`).
    pub fn from_text(input: &str) -> Self {
        let text = input.trim();
        if let Some((first, rest)) = text.split_once('\n') {
            return Self {
                title: first.trim().trim_end_matches('.').to_string(),
                body: rest.trim().to_string(),
            };
        }
        match text.split_once(". ") {
            Some((title, body)) => Self {
                title: title.trim().to_string(),
                body: body.trim().to_string(),
            },
            None => Self {
                title: text.trim_end_matches('.').to_string(),
                body: String::new(),
            },
        }
    }
}

/// A display-ready projection of a [`StoredEntry`].
///
/// Derived fresh on every load; one view per stored entry, same id, same
/// favorite flag until the next toggle round-trip completes.
#[derive(Debug, Clone, PartialEq)]
pub struct EntryView {
    pub id: String,
    pub title: String,
    pub body: String,
    pub created_at: DateTime<Local>,
    pub favorite: bool,
}

impl EntryView {
    /// Converts a persisted entry, parsing its RFC 3339 timestamp.
    pub fn from_stored(stored: &StoredEntry) -> Result<Self, chrono::ParseError> {
        let created_at = DateTime::parse_from_rfc3339(&stored.created_at)?.with_timezone(&Local);
        Ok(Self {
            id: stored.id.clone(),
            title: stored.title.clone(),
            body: stored.body.clone(),
            created_at,
            favorite: stored.favorite,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Datelike;

    #[test]
    fn from_text_prefers_the_first_line() {
        let entry = NewEntry::from_text("Quiet morning.\nCoffee on the balcony.\nNo plans.");
        assert_eq!(entry.title, "Quiet morning");
        assert_eq!(entry.body, "Coffee on the balcony.\nNo plans.");
    }

    #[test]
    fn from_text_splits_on_the_first_sentence() {
        let entry = NewEntry::from_text("Morning pages. Slept well, woke early.");
        assert_eq!(entry.title, "Morning pages");
        assert_eq!(entry.body, "Slept well, woke early.");
    }

    #[test]
    fn from_text_without_body() {
        let entry = NewEntry::from_text("Just a title.");
        assert_eq!(entry.title, "Just a title");
        assert!(entry.body.is_empty());
    }

    #[test]
    fn from_stored_parses_rfc3339() {
        let stored = StoredEntry {
            id: "e1".into(),
            title: "Walk by the river".into(),
            body: String::new(),
            created_at: "2026-08-20T18:05:00Z".into(),
            favorite: true,
        };
        let view = EntryView::from_stored(&stored).unwrap();
        assert_eq!(view.id, "e1");
        assert!(view.favorite);
        assert_eq!(view.created_at.year(), 2026);
    }

    #[test]
    fn from_stored_rejects_malformed_timestamps() {
        let stored = StoredEntry {
            id: "e1".into(),
            title: "Bad clock".into(),
            body: String::new(),
            created_at: "not a timestamp".into(),
            favorite: false,
        };
        assert!(EntryView::from_stored(&stored).is_err());
    }

    #[test]
    fn favorite_flag_defaults_off_in_old_files() {
        let json = r#"{"id":"e1","title":"t","body":"","created_at":"2026-01-01T09:00:00Z"}"#;
        let stored: StoredEntry = serde_json::from_str(json).unwrap();
        assert!(!stored.favorite);
    }
}
