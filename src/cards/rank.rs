/// Card rank, Ace (1) low through King (13).
///
/// Only rank frequency matters to the category detectors, so ranks carry
/// no ordering semantics beyond their numeric value. There is no Ace-high
/// special case.
#[derive(Debug, Default, Clone, Copy, Hash, Eq, PartialEq, Ord, PartialOrd)]
pub enum Rank {
    #[default]
    Ace = 1,
    Two = 2,
    Three = 3,
    Four = 4,
    Five = 5,
    Six = 6,
    Seven = 7,
    Eight = 8,
    Nine = 9,
    Ten = 10,
    Jack = 11,
    Queen = 12,
    King = 13,
}

impl Rank {
    /// All thirteen ranks from Ace to King.
    pub const fn all() -> [Rank; 13] {
        [
            Rank::Ace,
            Rank::Two,
            Rank::Three,
            Rank::Four,
            Rank::Five,
            Rank::Six,
            Rank::Seven,
            Rank::Eight,
            Rank::Nine,
            Rank::Ten,
            Rank::Jack,
            Rank::Queen,
            Rank::King,
        ]
    }
    /// Zero-based position of this rank, used for card encoding.
    pub const fn index(&self) -> u8 {
        *self as u8 - 1
    }
}

/// u8 isomorphism over the numeric rank 1..=13
impl TryFrom<u8> for Rank {
    type Error = String;
    fn try_from(n: u8) -> Result<Self, Self::Error> {
        Rank::all()
            .into_iter()
            .find(|r| u8::from(*r) == n)
            .ok_or_else(|| format!("invalid rank u8: {}", n))
    }
}
impl From<Rank> for u8 {
    fn from(r: Rank) -> u8 {
        r as u8
    }
}

/// u64 injection
/// the four card bits of this rank inside a Hand
impl From<Rank> for u64 {
    fn from(r: Rank) -> u64 {
        0xF << (r.index() * 4)
    }
}

/// str isomorphism
impl TryFrom<&str> for Rank {
    type Error = String;
    fn try_from(s: &str) -> Result<Self, Self::Error> {
        match s.trim().to_uppercase().as_str() {
            "A" | "1" => Ok(Rank::Ace),
            "2" => Ok(Rank::Two),
            "3" => Ok(Rank::Three),
            "4" => Ok(Rank::Four),
            "5" => Ok(Rank::Five),
            "6" => Ok(Rank::Six),
            "7" => Ok(Rank::Seven),
            "8" => Ok(Rank::Eight),
            "9" => Ok(Rank::Nine),
            "T" => Ok(Rank::Ten),
            "J" => Ok(Rank::Jack),
            "Q" => Ok(Rank::Queen),
            "K" => Ok(Rank::King),
            _ => Err(format!("invalid rank str: {}", s)),
        }
    }
}

impl std::fmt::Display for Rank {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(
            f,
            "{}",
            match self {
                Rank::Ace => "A",
                Rank::Two => "2",
                Rank::Three => "3",
                Rank::Four => "4",
                Rank::Five => "5",
                Rank::Six => "6",
                Rank::Seven => "7",
                Rank::Eight => "8",
                Rank::Nine => "9",
                Rank::Ten => "T",
                Rank::Jack => "J",
                Rank::Queen => "Q",
                Rank::King => "K",
            }
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bijective_u8() {
        Rank::all()
            .into_iter()
            .for_each(|rank| assert_eq!(Rank::try_from(u8::from(rank)), Ok(rank)));
    }

    #[test]
    fn numeric_range() {
        assert_eq!(u8::from(Rank::Ace), 1);
        assert_eq!(u8::from(Rank::King), 13);
        assert!(Rank::try_from(0u8).is_err());
        assert!(Rank::try_from(14u8).is_err());
    }

    #[test]
    fn bijective_str() {
        Rank::all()
            .into_iter()
            .for_each(|rank| assert_eq!(Rank::try_from(rank.to_string().as_str()), Ok(rank)));
        assert_eq!(Rank::try_from("1"), Ok(Rank::Ace));
    }

    #[test]
    fn injective_u64() {
        assert!(u64::from(Rank::Ace) == 0b1111);
        assert!(u64::from(Rank::Five) == 0b1111_0000_0000_0000_0000);
    }
}
