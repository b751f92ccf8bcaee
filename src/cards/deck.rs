use super::card::Card;
use super::hand::Hand;
use super::hole::Hole;
use rand::seq::SliceRandom;

/// The pool of cards not yet seen.
///
/// Wraps a [`Hand`] of the remaining cards, so removing a known card is a
/// single bit operation keyed on its canonical identifier rather than a
/// search. Supports random dealing for simulations and the CLI.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Deck(Hand);

impl Default for Deck {
    fn default() -> Self {
        Self::new()
    }
}

impl Deck {
    /// Creates a fresh 52-card deck.
    pub fn new() -> Self {
        Self(Hand::full())
    }
    /// Tests whether a card is still in the deck.
    pub fn contains(&self, card: &Card) -> bool {
        self.0.contains(card)
    }
    /// Number of cards left.
    pub fn size(&self) -> usize {
        self.0.size()
    }
    /// Removes a known card. Fails if the card was already taken out,
    /// which means the caller passed it twice.
    pub fn remove(&mut self, card: Card) -> anyhow::Result<()> {
        match self.contains(&card) {
            true => Ok(self.0.remove(card)),
            false => Err(anyhow::anyhow!("card not found in deck: {}", card)),
        }
    }
    /// Removes every card of a hand, failing on the first missing one.
    pub fn strip(&mut self, hand: Hand) -> anyhow::Result<()> {
        hand.into_iter().try_for_each(|card| self.remove(card))
    }
    /// The remaining cards in random order.
    ///
    /// Enumeration downstream is exhaustive, so order never changes
    /// an estimate. Useful to show that it doesn't.
    pub fn shuffled(&self) -> Vec<Card> {
        let mut cards = Vec::<Card>::from(*self);
        cards.shuffle(&mut rand::rng());
        cards
    }
    /// Draws and removes a uniformly random card from the deck.
    pub fn draw(&mut self) -> Card {
        debug_assert!(self.0.size() > 0);
        let n = self.0.size();
        let i = rand::random_range(0..n);
        let card = self.0.into_iter().nth(i).expect("index below deck size");
        self.0.remove(card);
        card
    }
    /// Deals `n` random cards as one set.
    pub fn deal(&mut self, n: usize) -> Hand {
        (0..n)
            .map(|_| self.draw())
            .map(Hand::from)
            .fold(Hand::empty(), Hand::add)
    }
    /// Deals two cards as a player's hole cards.
    pub fn hole(&mut self) -> Hole {
        let a = self.draw();
        let b = self.draw();
        Hole::from((a, b))
    }
}

impl From<Deck> for Hand {
    fn from(deck: Deck) -> Self {
        deck.0
    }
}
impl From<Hand> for Deck {
    fn from(hand: Hand) -> Self {
        Self(hand)
    }
}
/// canonical-order pool
impl From<Deck> for Vec<Card> {
    fn from(deck: Deck) -> Self {
        Vec::<Card>::from(deck.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn fresh_deck_is_unique() {
        let cards = Vec::<Card>::from(Deck::new());
        let unique = cards.iter().copied().collect::<HashSet<Card>>();
        assert_eq!(cards.len(), crate::DECK_SIZE);
        assert_eq!(unique.len(), crate::DECK_SIZE);
    }

    #[test]
    fn remove_known_card() {
        let mut deck = Deck::new();
        let card = Card::try_from("Ah").unwrap();
        assert!(deck.remove(card).is_ok());
        assert!(!deck.contains(&card));
        assert_eq!(deck.size(), 51);
    }

    #[test]
    fn remove_missing_card() {
        let mut deck = Deck::new();
        let card = Card::try_from("Ah").unwrap();
        deck.remove(card).unwrap();
        let err = deck.remove(card).unwrap_err();
        assert!(err.to_string().contains("card not found"));
        assert_eq!(deck.size(), 51);
    }

    #[test]
    fn strip_overlap_fails() {
        let mut deck = Deck::new();
        deck.strip(Hand::try_from("Ah Ks").unwrap()).unwrap();
        assert!(deck.strip(Hand::try_from("2c Ah").unwrap()).is_err());
    }

    #[test]
    fn shuffled_is_a_permutation() {
        let deck = Deck::new();
        let mut shuffled = deck.shuffled();
        shuffled.sort();
        assert_eq!(shuffled, Vec::<Card>::from(deck));
    }

    #[test]
    fn draws_are_distinct() {
        let mut deck = Deck::new();
        let dealt = deck.deal(7);
        assert_eq!(dealt.size(), 7);
        assert_eq!(deck.size(), 45);
        assert!(dealt.into_iter().all(|c| !deck.contains(&c)));
    }

    #[test]
    fn hole_is_two_cards() {
        let mut deck = Deck::new();
        let hole = deck.hole();
        assert_eq!(Hand::from(hole).size(), 2);
        assert_eq!(deck.size(), 50);
    }
}
