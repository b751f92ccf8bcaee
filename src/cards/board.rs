use super::card::Card;
use super::hand::Hand;

/// The community cards revealed so far.
///
/// Holds 0 to 5 distinct cards. The cards still to come are what the
/// estimator enumerates, see [`Board::remaining`].
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Board(Hand);

impl Board {
    /// Creates an empty board (preflop state).
    pub fn empty() -> Self {
        Self(Hand::empty())
    }
    /// Number of community cards still to be dealt.
    pub fn remaining(&self) -> usize {
        crate::FLOP_SIZE - self.0.size()
    }
    pub fn size(&self) -> usize {
        self.0.size()
    }
}

impl From<Board> for Hand {
    fn from(board: Board) -> Self {
        board.0
    }
}

impl TryFrom<Hand> for Board {
    type Error = String;
    fn try_from(hand: Hand) -> Result<Self, Self::Error> {
        match hand.size() {
            n if n > crate::FLOP_SIZE => Err(format!(
                "board holds at most {} cards, got {}",
                crate::FLOP_SIZE,
                n
            )),
            _ => Ok(Self(hand)),
        }
    }
}

impl TryFrom<Vec<Card>> for Board {
    type Error = String;
    fn try_from(cards: Vec<Card>) -> Result<Self, Self::Error> {
        let hand = Hand::from(cards.as_slice());
        match hand.size() == cards.len() {
            true => Self::try_from(hand),
            false => Err(format!("board contains a duplicate card: {}", hand)),
        }
    }
}

impl TryFrom<&str> for Board {
    type Error = String;
    fn try_from(s: &str) -> Result<Self, Self::Error> {
        Self::try_from(Card::parse(s)?)
    }
}

impl std::fmt::Display for Board {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn remaining_cards() {
        assert_eq!(Board::empty().remaining(), 5);
        assert_eq!(Board::try_from("2c 6s 3s").unwrap().remaining(), 2);
        assert_eq!(Board::try_from("2c 6s As 5d").unwrap().remaining(), 1);
        assert_eq!(Board::try_from("2c 6s As 5d 5h").unwrap().remaining(), 0);
    }

    #[test]
    fn empty_text_is_preflop() {
        assert_eq!(Board::try_from("").unwrap(), Board::empty());
    }

    #[test]
    fn reject_oversized() {
        assert!(Board::try_from("2c 6s As 5d 5h 9c").is_err());
    }

    #[test]
    fn reject_duplicate() {
        assert!(Board::try_from("2c 2c").is_err());
    }
}
