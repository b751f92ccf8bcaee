use super::card::Card;
use super::rank::Rank;

/// An unordered set of Cards stored as a 52-bit mask.
///
/// Each bit is one canonical card identifier, so membership, insertion and
/// removal are single bitwise operations and no heap allocation is needed
/// regardless of size. Iteration always yields cards in canonical order.
#[derive(Debug, Default, Clone, Copy, Hash, PartialEq, Eq, PartialOrd, Ord)]
pub struct Hand(u64);

impl Hand {
    pub const fn empty() -> Self {
        Self(0)
    }
    /// Every card in the deck.
    pub const fn full() -> Self {
        Self(Self::mask())
    }
    /// Disjoint union. Overlapping hands are a caller bug.
    pub fn add(lhs: Self, rhs: Self) -> Self {
        debug_assert!(lhs.0 & rhs.0 == 0);
        Self(lhs.0 | rhs.0)
    }
    pub fn complement(&self) -> Self {
        Self(self.0 ^ Self::mask())
    }
    pub fn size(&self) -> usize {
        self.0.count_ones() as usize
    }
    pub fn contains(&self, card: &Card) -> bool {
        self.0 & u64::from(*card) != 0
    }
    /// Number of cards of the given rank, 0..=4.
    pub fn rank_count(&self, rank: Rank) -> usize {
        (self.0 & u64::from(rank)).count_ones() as usize
    }
    pub fn remove(&mut self, card: Card) {
        self.0 &= !u64::from(card);
    }
    pub const fn mask() -> u64 {
        0x000FFFFFFFFFFFFF
    }
}

/// we can empty a hand from low to high
/// by removing the lowest card until the hand is empty
impl Iterator for Hand {
    type Item = Card;
    fn next(&mut self) -> Option<Self::Item> {
        if self.0 == 0 {
            None
        } else {
            let card = Card::from(self.0.trailing_zeros() as u8);
            self.remove(card);
            Some(card)
        }
    }
    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.size(), Some(self.size()))
    }
}

/// u64 isomorphism
/// we OR the cards to get the bitstring
/// [Ad, Ac, 2h]
/// xxxxxxxxxxxx 0000000000000000000000000000000000000000000001000011
impl From<u64> for Hand {
    fn from(n: u64) -> Self {
        Self(n & Self::mask())
    }
}
impl From<Hand> for u64 {
    fn from(h: Hand) -> Self {
        h.0
    }
}

impl From<Card> for Hand {
    fn from(card: Card) -> Self {
        Self(u64::from(card))
    }
}

/// Vec<Card> isomorphism (up to Vec permutation, this always comes out sorted)
/// duplicate cards collapse into one bit
impl From<Hand> for Vec<Card> {
    fn from(h: Hand) -> Self {
        h.into_iter().collect()
    }
}
impl From<&[Card]> for Hand {
    fn from(cards: &[Card]) -> Self {
        Self(
            cards
                .iter()
                .copied()
                .map(u64::from)
                .fold(0u64, |a, b| a | b),
        )
    }
}
impl From<Vec<Card>> for Hand {
    fn from(cards: Vec<Card>) -> Self {
        Self::from(cards.as_slice())
    }
}

/// str isomorphism
/// this follows from Vec<Card> isomorphism
impl TryFrom<&str> for Hand {
    type Error = String;
    fn try_from(s: &str) -> Result<Self, Self::Error> {
        Card::parse(s).map(Self::from)
    }
}

impl std::fmt::Display for Hand {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        f.pad(
            &self
                .into_iter()
                .map(|c| c.to_string())
                .collect::<Vec<String>>()
                .join(" "),
        )
    }
}

impl crate::Arbitrary for Hand {
    fn random() -> Self {
        Self::from(rand::random::<u64>())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Arbitrary;
    use crate::cards::suit::Suit;

    #[test]
    fn bijective_u64() {
        let hand = Hand::random();
        assert_eq!(hand, Hand::from(u64::from(hand)));
    }

    #[test]
    fn card_iteration() {
        let mut iter = Hand::try_from("Kh Ac 2h Ad").unwrap().into_iter();
        assert_eq!(iter.next(), Some(Card::try_from("Ad").unwrap()));
        assert_eq!(iter.next(), Some(Card::try_from("Ac").unwrap()));
        assert_eq!(iter.next(), Some(Card::try_from("2h").unwrap()));
        assert_eq!(iter.next(), Some(Card::try_from("Kh").unwrap()));
        assert_eq!(iter.next(), None);
    }

    #[test]
    fn canonical_bits() {
        let hand = Hand::try_from("Ad Ac 2h").unwrap();
        assert_eq!(u64::from(hand), 0b1000011);
    }

    #[test]
    fn rank_counts() {
        let hand = Hand::try_from("Ah As Kd 5c 5h 5s 5d").unwrap();
        assert_eq!(hand.rank_count(Rank::Ace), 2);
        assert_eq!(hand.rank_count(Rank::King), 1);
        assert_eq!(hand.rank_count(Rank::Five), 4);
        assert_eq!(hand.rank_count(Rank::Two), 0);
    }

    #[test]
    fn display_honors_width() {
        let hand = Hand::try_from("Ad Ac").unwrap();
        assert_eq!(format!("{:<8}|", hand), "Ad Ac   |");
        assert_eq!(format!("{:>8}|", hand), "   Ad Ac|");
    }

    #[test]
    fn membership() {
        let mut hand = Hand::try_from("Ah Ks").unwrap();
        let ah = Card::from((Rank::Ace, Suit::H));
        assert!(hand.contains(&ah));
        hand.remove(ah);
        assert!(!hand.contains(&ah));
        assert_eq!(hand.size(), 1);
    }

    #[test]
    fn duplicates_collapse() {
        let cards = Card::parse("Ah Ah").unwrap();
        assert_eq!(Hand::from(cards).size(), 1);
    }

    #[test]
    fn complement_partitions_deck() {
        let hand = Hand::random();
        assert_eq!(hand.size() + hand.complement().size(), crate::DECK_SIZE);
        assert_eq!(Hand::add(hand, hand.complement()), Hand::full());
    }
}
