use super::rank::Rank;
use super::suit::Suit;

/// A playing card encoded as a single byte.
///
/// The 52 cards are bijectively mapped to `0..52` where the encoding is
/// `(rank - 1) * 4 + suit`. Two cards are equal iff rank and suit match,
/// which is exactly equality of the byte.
///
/// # Representations
///
/// - `u8`: Canonical index `0..52`, used for set membership and removal
/// - `u64`: Single-bit representation for membership in [`Hand`]
///
/// # Parsing
///
/// Cards can be parsed from two-character strings like `"As"` (ace of spades)
/// or `"Tc"` (ten of clubs). Use [`Card::parse`] for multiple cards.
///
/// [`Hand`]: super::hand::Hand
#[derive(Debug, Clone, Copy, Hash, PartialEq, Eq, PartialOrd, Ord)]
pub struct Card(u8);

impl Card {
    /// Extracts the rank component (Ace through King).
    pub fn rank(&self) -> Rank {
        Rank::all()[(self.0 / 4) as usize]
    }
    /// Extracts the suit component.
    pub fn suit(&self) -> Suit {
        Suit::from(self.0 % 4)
    }
    /// Parses a string of concatenated card notations into a vector of cards.
    ///
    /// Whitespace is ignored. Each card is two characters: rank then suit.
    /// Returns an error if any card fails to parse.
    pub fn parse(s: &str) -> Result<Vec<Self>, String> {
        s.replace(char::is_whitespace, "")
            .chars()
            .collect::<Vec<_>>()
            .chunks(2)
            .map(|pair| pair.iter().collect::<String>())
            .map(|pair| Self::try_from(pair.as_str()))
            .collect::<Result<Vec<Self>, _>>()
    }
}

/// (Rank, Suit) isomorphism
impl From<(Rank, Suit)> for Card {
    fn from((r, s): (Rank, Suit)) -> Self {
        Self(r.index() * 4 + u8::from(s))
    }
}
impl From<Card> for (Rank, Suit) {
    fn from(c: Card) -> Self {
        (c.rank(), c.suit())
    }
}

/// u8 isomorphism
/// each card is mapped to its location in a sorted deck 0..52
/// Kh
/// 50
/// 0b00110010
impl From<Card> for u8 {
    fn from(c: Card) -> u8 {
        c.0
    }
}
impl From<u8> for Card {
    fn from(n: u8) -> Self {
        debug_assert!(n < 52);
        Self(n)
    }
}

/// u64 representation
/// each card is just one bit turned on. this is a one-way morphism
/// Kh
/// xxxxxxxxxxxx 0100000000000000000000000000000000000000000000000000
impl From<Card> for u64 {
    fn from(c: Card) -> u64 {
        1 << u8::from(c)
    }
}

/// str isomorphism
impl TryFrom<&str> for Card {
    type Error = String;
    fn try_from(s: &str) -> Result<Self, Self::Error> {
        let s = s.trim();
        match s.chars().count() {
            2 => {
                let mut chars = s.chars();
                let rank = chars.next().map(String::from).unwrap_or_default();
                let suit = chars.next().map(String::from).unwrap_or_default();
                let rank = Rank::try_from(rank.as_str())?;
                let suit = Suit::try_from(suit.as_str())?;
                Ok(Card::from((rank, suit)))
            }
            _ => Err(format!("card must be 2 characters: {}", s)),
        }
    }
}

impl std::fmt::Display for Card {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "{}{}", self.rank(), self.suit())
    }
}

impl crate::Arbitrary for Card {
    fn random() -> Self {
        Self(rand::random_range(0..crate::DECK_SIZE as u8))
    }
}
