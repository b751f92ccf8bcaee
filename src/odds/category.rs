use super::groups::Groups;

/// The rank-frequency patterns the estimator counts.
///
/// Declared order is the reporting order. Each variant maps to one
/// predicate on [`Groups`]. Predicates are checked independently, so one
/// set of cards may land in several categories or in none.
#[derive(Debug, Clone, Copy, Hash, PartialEq, Eq, PartialOrd, Ord, serde::Serialize)]
pub enum Category {
    #[serde(rename = "Pair")]
    Pair,
    #[serde(rename = "Triple")]
    Triple,
    #[serde(rename = "Quad")]
    Quad,
    #[serde(rename = "Two Pair")]
    TwoPair,
}

impl Category {
    pub const fn all() -> [Self; 4] {
        [Self::Pair, Self::Triple, Self::Quad, Self::TwoPair]
    }
    pub fn detect(&self, groups: &Groups) -> bool {
        match self {
            Self::Pair => groups.is_pair(),
            Self::Triple => groups.is_triple(),
            Self::Quad => groups.is_quad(),
            Self::TwoPair => groups.is_two_pair(),
        }
    }
    pub const fn name(&self) -> &'static str {
        match self {
            Self::Pair => "Pair",
            Self::Triple => "Triple",
            Self::Quad => "Quad",
            Self::TwoPair => "Two Pair",
        }
    }
}

/// usize isomorphism, position in declared order
impl From<Category> for usize {
    fn from(c: Category) -> usize {
        c as usize
    }
}

impl std::fmt::Display for Category {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "{}", self.name())
    }
}
