use super::card::Card;
use super::hand::Hand;

/// A player's two private hole cards.
///
/// Wraps a [`Hand`] with the constraint that exactly two distinct cards
/// are present. Always supplied by the caller; the estimator never
/// generates one.
#[derive(Debug, Clone, Copy, Hash, Eq, PartialEq, PartialOrd, Ord)]
pub struct Hole(Hand);

impl std::fmt::Display for Hole {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<Hole> for Hand {
    fn from(hole: Hole) -> Self {
        hole.0
    }
}

impl From<(Card, Card)> for Hole {
    fn from(cards: (Card, Card)) -> Self {
        let a = u64::from(cards.0);
        let b = u64::from(cards.1);
        debug_assert!(a != b);
        Self(Hand::from(a | b))
    }
}

impl TryFrom<Vec<Card>> for Hole {
    type Error = String;
    fn try_from(cards: Vec<Card>) -> Result<Self, Self::Error> {
        let hand = Hand::from(cards.as_slice());
        match (cards.len(), hand.size()) {
            (n, _) if n != crate::HOLE_SIZE => Err(format!(
                "hole must contain exactly {} cards, got {}",
                crate::HOLE_SIZE,
                n
            )),
            (n, m) if n != m => Err(format!("hole contains a duplicate card: {}", hand)),
            _ => Ok(Self(hand)),
        }
    }
}

impl TryFrom<&str> for Hole {
    type Error = String;
    fn try_from(s: &str) -> Result<Self, Self::Error> {
        Self::try_from(Card::parse(s)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_two_cards() {
        let hole = Hole::try_from("Ah Ks").unwrap();
        assert_eq!(Hand::from(hole).size(), 2);
        assert_eq!(hole.to_string(), "Ah Ks");
    }

    #[test]
    fn reject_wrong_size() {
        assert!(Hole::try_from("Ah").is_err());
        assert!(Hole::try_from("Ah Ks Qd").is_err());
    }

    #[test]
    fn reject_duplicate() {
        assert!(Hole::try_from("Ah Ah").is_err());
    }
}
