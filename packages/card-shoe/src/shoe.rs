use crate::card::{standard_deck, Card};
use crate::error::ShoeError;
use rand::seq::SliceRandom;
use rand_chacha::rand_core::SeedableRng;
use rand_chacha::ChaCha8Rng;
use std::collections::VecDeque;

/// A multi-deck shoe. Cards leave from the front; the only way to add cards
/// back is a full reshuffle.
#[derive(Debug, Clone)]
pub struct Shoe {
    cards: VecDeque<Card>,
    deck_count: u8,
    rng: ChaCha8Rng,
}

impl Shoe {
    /// Builds a freshly shuffled shoe seeded from the thread RNG.
    pub fn new(deck_count: u8) -> Self {
        Self::seeded(deck_count, rand::random())
    }

    /// Builds a freshly shuffled shoe with a reproducible shuffle order.
    pub fn seeded(deck_count: u8, seed: u64) -> Self {
        assert!(deck_count > 0, "A shoe needs at least one deck");
        let mut shoe = Self {
            cards: VecDeque::new(),
            deck_count,
            rng: ChaCha8Rng::seed_from_u64(seed),
        };
        shoe.refill();
        shoe
    }

    /// A shoe that deals `cards` in the given order. Reshuffling it yields a
    /// normal shuffled shoe of `deck_count` decks.
    pub fn stacked(deck_count: u8, cards: impl IntoIterator<Item = Card>) -> Self {
        assert!(deck_count > 0, "A shoe needs at least one deck");
        Self {
            cards: cards.into_iter().collect(),
            deck_count,
            rng: ChaCha8Rng::seed_from_u64(0),
        }
    }

    pub fn deck_count(&self) -> u8 {
        self.deck_count
    }

    /// Number of cards in a full shoe.
    pub fn capacity(&self) -> usize {
        self.deck_count as usize * 52
    }

    pub fn remaining(&self) -> usize {
        self.cards.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    pub fn needs_reshuffle(&self, threshold: usize) -> bool {
        self.remaining() < threshold
    }

    /// Removes and returns the top card.
    pub fn draw(&mut self) -> Result<Card, ShoeError> {
        let card = self.cards.pop_front().ok_or(ShoeError::Empty {
            deck_count: self.deck_count,
        })?;
        log::trace!("drew {card}, {} left", self.cards.len());
        Ok(card)
    }

    /// Discards whatever is left and replaces it with a full shuffled shoe.
    pub fn reshuffle(&mut self) {
        log::info!(
            "Reshuffling {}-deck shoe ({} cards were left)",
            self.deck_count,
            self.cards.len()
        );
        self.refill();
    }

    fn refill(&mut self) {
        let mut cards: Vec<Card> = (0..self.deck_count).flat_map(|_| standard_deck()).collect();
        cards.shuffle(&mut self.rng);
        self.cards = cards.into();
    }
}
