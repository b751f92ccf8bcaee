use crate::cards::Card;
use crate::cards::Hand;
use crate::cards::Rank;

/// The multiset of rank-group sizes in a set of cards.
///
/// Cards are grouped by rank and only the size of each group is kept:
/// `self.0[n]` is how many ranks appear exactly `n` times. Which ranks
/// they are is thrown away, since every detector only looks at counts.
///
/// "A A K 5 5 5 2" becomes one group of 2, one of 3 and two of 1.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Groups([u8; 5]);

impl Groups {
    /// Number of ranks appearing exactly `size` times.
    pub fn of(&self, size: usize) -> u8 {
        self.0.get(size).copied().unwrap_or(0)
    }
    /// One pair and nothing bigger. Two pair is not a pair here.
    pub fn is_pair(&self) -> bool {
        self.of(2) == 1 && self.of(3) == 0 && self.of(4) == 0
    }
    /// One or two triples; seven cards can hold two.
    pub fn is_triple(&self) -> bool {
        self.of(3) == 1 || self.of(3) == 2
    }
    pub fn is_quad(&self) -> bool {
        self.of(4) == 1
    }
    /// Two pairs without a triple, or three pairs.
    /// Only presence is flagged; the best two are never picked.
    pub fn is_two_pair(&self) -> bool {
        (self.of(2) == 2 && self.of(3) == 0) || self.of(2) == 3
    }
}

impl From<Hand> for Groups {
    fn from(hand: Hand) -> Self {
        let mut groups = [0u8; 5];
        Rank::all()
            .into_iter()
            .map(|rank| hand.rank_count(rank))
            .filter(|&n| n > 0)
            .for_each(|n| groups[n] += 1);
        Self(groups)
    }
}

impl From<&[Card]> for Groups {
    fn from(cards: &[Card]) -> Self {
        Self::from(Hand::from(cards))
    }
}

/// explicit counts: sizes[i] is the size of one rank-group
impl From<&[usize]> for Groups {
    fn from(sizes: &[usize]) -> Self {
        let mut groups = [0u8; 5];
        sizes
            .iter()
            .filter(|&&n| n > 0)
            .inspect(|&&n| debug_assert!(n <= 4, "rank-group of {} cards", n))
            .for_each(|&n| groups[n] += 1);
        Self(groups)
    }
}

impl std::fmt::Display for Groups {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(
            f,
            "{}",
            (1..5)
                .rev()
                .flat_map(|n| std::iter::repeat(n).take(self.of(n) as usize))
                .map(|n| n.to_string())
                .collect::<Vec<String>>()
                .join("+")
        )
    }
}
