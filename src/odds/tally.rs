use super::category::Category;
use super::groups::Groups;
use super::outcome::Odds;
use super::outcome::Outcome;
use crate::Probability;

/// Raw occurrence counts across every enumerated board.
///
/// `hits[c]` counts boards where category `c` was detected and `total`
/// counts boards enumerated, so `hits[c] <= total` always holds.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct Tally {
    hits: [u64; 4],
    total: u64,
}

impl Tally {
    /// Record one enumerated board.
    pub fn witness(&mut self, groups: &Groups) {
        self.total += 1;
        Category::all()
            .into_iter()
            .filter(|c| c.detect(groups))
            .for_each(|c| self.hits[usize::from(c)] += 1);
    }
    pub fn hits(&self, category: Category) -> u64 {
        self.hits[usize::from(category)]
    }
    pub fn total(&self) -> u64 {
        self.total
    }
    /// Share of boards in the category. Zero boards yields 0.0.
    pub fn probability(&self, category: Category) -> Probability {
        match self.total {
            0 => 0.0,
            n => self.hits(category) as Probability / n as Probability,
        }
    }
    /// Render into raw counts or probabilities.
    pub fn odds(&self, reveal: bool) -> Odds {
        if self.total == 0 {
            log::warn!("no boards enumerated, reporting zero for every category");
        }
        Category::all()
            .into_iter()
            .map(|c| match reveal {
                true => (c, Outcome::Count { hits: self.hits(c), total: self.total }),
                false => (c, Outcome::Probability(self.probability(c))),
            })
            .collect()
    }
}
