use super::category::Category;
use crate::Probability;
use std::collections::BTreeMap;

/// How one category is reported.
#[derive(Debug, Clone, Copy, PartialEq, serde::Serialize)]
#[serde(untagged)]
pub enum Outcome {
    /// Boards hitting the category out of boards enumerated.
    Count { hits: u64, total: u64 },
    Probability(Probability),
}

impl std::fmt::Display for Outcome {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match self {
            Self::Count { hits, total } => write!(f, "{} in {}", hits, total),
            Self::Probability(p) => write!(f, "{}", p),
        }
    }
}

/// Outcome of every category, keyed and ordered by [`Category`].
#[derive(Debug, Default, Clone, PartialEq, serde::Serialize)]
#[serde(transparent)]
pub struct Odds(BTreeMap<Category, Outcome>);

impl Odds {
    pub fn get(&self, category: Category) -> Option<&Outcome> {
        self.0.get(&category)
    }
    pub fn iter(&self) -> impl Iterator<Item = (&Category, &Outcome)> {
        self.0.iter()
    }
    pub fn len(&self) -> usize {
        self.0.len()
    }
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl FromIterator<(Category, Outcome)> for Odds {
    fn from_iter<I: IntoIterator<Item = (Category, Outcome)>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

/// one "Name: outcome" line per category
impl std::fmt::Display for Odds {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        self.iter()
            .try_for_each(|(category, outcome)| writeln!(f, "{}: {}", category, outcome))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn render_count() {
        let outcome = Outcome::Count { hits: 103, total: 990 };
        assert_eq!(outcome.to_string(), "103 in 990");
    }

    #[test]
    fn render_probability() {
        assert_eq!(Outcome::Probability(0.42).to_string(), "0.42");
    }

    #[test]
    fn render_lines_in_declared_order() {
        let odds = Category::all()
            .into_iter()
            .rev()
            .map(|c| (c, Outcome::Count { hits: 1, total: 2 }))
            .collect::<Odds>();
        assert_eq!(
            odds.to_string(),
            "Pair: 1 in 2\nTriple: 1 in 2\nQuad: 1 in 2\nTwo Pair: 1 in 2\n"
        );
    }

    #[test]
    fn serialize_json() {
        let odds = [
            (Category::Pair, Outcome::Probability(0.5)),
            (Category::TwoPair, Outcome::Count { hits: 3, total: 4 }),
        ]
        .into_iter()
        .collect::<Odds>();
        let json = serde_json::to_string(&odds).unwrap();
        assert_eq!(json, r#"{"Pair":0.5,"Two Pair":{"hits":3,"total":4}}"#);
    }
}
