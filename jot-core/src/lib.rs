pub mod config;
pub mod entry;
pub mod feed;
pub mod notify;
pub mod promo;
pub mod store;

pub use config::Config;
pub use feed::{EntryFeed, FeedItem};
pub use store::{EntryStore, JsonStore};
