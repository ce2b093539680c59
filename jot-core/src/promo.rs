use once_cell::sync::Lazy;
use std::sync::RwLock;

/// A promotional card interleaved into the entry feed.
///
/// Cards are a distinct item kind so the presentation layer can style them
/// apart from real entries.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PromoCard {
    pub headline: String,
    pub blurb: String,
}

impl PromoCard {
    pub fn new(headline: impl Into<String>, blurb: impl Into<String>) -> Self {
        Self {
            headline: headline.into(),
            blurb: blurb.into(),
        }
    }
}

pub struct Promos;

impl Promos {
    /// Returns the **global promo inventory**.
    ///
    /// The inventory is:
    /// - **Initialized once** on first access (via [`once_cell::sync::Lazy`]).
    /// - **Thread-safe** (wrapped in [`RwLock`]): many readers or one writer.
    /// - **Never empty**: it is seeded with the built-in cards, and
    ///   [`extend`](Self::extend) only appends.
    ///
    /// You normally don't call this directly; `Config::load()` appends any
    /// `[[promos]]` tables from the config file via [`extend`](Self::extend),
    /// and the feed draws cards with [`pick`](Self::pick).
    fn inventory() -> &'static RwLock<Vec<PromoCard>> {
        static INVENTORY: Lazy<RwLock<Vec<PromoCard>>> = Lazy::new(|| {
            RwLock::new(vec![
                PromoCard::new(
                    "jot sync",
                    "Keep your journal on every device. Coming soon.",
                ),
                PromoCard::new(
                    "Back up your words",
                    "Your journal is one plain file. Copy it somewhere safe today.",
                ),
                PromoCard::new(
                    "Support jot",
                    "Enjoying the quiet? Star the project or tell a friend.",
                ),
            ])
        });
        &INVENTORY
    }

    /// Appends user-supplied cards to the inventory, skipping duplicates.
    ///
    /// Typical call site: `Config::load()`, after reading `[[promos]]`
    /// tables from `config.toml`:
    ///
    /// ```toml
    /// [[promos]]
    /// headline = "Write every day"
    /// blurb = "A streak needs one sentence."
    /// ```
    pub fn extend(cards: &[PromoCard]) {
        let mut inventory = Self::inventory().write().unwrap();
        for card in cards {
            if !inventory.contains(card) {
                inventory.push(card.clone());
            }
        }
    }

    /// Picks the card for the `slot`-th promo position, cycling the
    /// inventory so the same view state always renders the same sequence.
    pub fn pick(slot: usize) -> PromoCard {
        let inventory = Self::inventory().read().unwrap();
        inventory[slot % inventory.len()].clone()
    }

    /// Number of cards currently in the inventory.
    pub fn count() -> usize {
        Self::inventory().read().unwrap().len()
    }
}

#[cfg(test)]
pub mod tests {
    use super::*;

    /// How many times `card` appears in the inventory.
    ///
    /// Parallel tests share the global inventory, so totals are unstable
    /// between reads; the slot a card landed in is not.
    pub(crate) fn copies_of(card: &PromoCard) -> usize {
        (0..Promos::count())
            .filter(|&slot| Promos::pick(slot) == *card)
            .count()
    }

    #[test]
    fn extending_twice_adds_the_card_once() {
        let card = PromoCard::new("Write every day", "A streak needs one sentence.");
        Promos::extend(std::slice::from_ref(&card));
        Promos::extend(std::slice::from_ref(&card));
        assert_eq!(copies_of(&card), 1);
    }

    #[test]
    fn seeded_cards_keep_the_front_slots() {
        // extend only appends, so the built-in cards own the first slots.
        assert_eq!(Promos::pick(0).headline, "jot sync");
        assert_eq!(Promos::pick(1).headline, "Back up your words");
        assert_eq!(Promos::pick(2).headline, "Support jot");
    }

    #[test]
    fn out_of_range_slots_wrap_into_the_inventory() {
        let card = Promos::pick(1000);
        assert!(copies_of(&card) >= 1);
    }
}
