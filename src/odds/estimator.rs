use super::groups::Groups;
use super::interrupt::Interrupt;
use super::outcome::Odds;
use super::tally::Tally;
use crate::cards::Board;
use crate::cards::Card;
use crate::cards::Combinations;
use crate::cards::Deck;
use crate::cards::Hand;
use crate::cards::Hole;

/// Exhaustive category odds for a hole and a partial board.
///
/// Every completion of the board from the unseen cards is enumerated once
/// and every category is checked against hole + board + completion. A
/// complete board counts as exactly one (empty) completion.
#[derive(Debug, Default, Clone)]
pub struct Estimator {
    reveal: bool,
    interrupt: Interrupt,
}

impl Estimator {
    /// Report raw "hits in total" counts instead of probabilities.
    pub fn reveal(mut self, reveal: bool) -> Self {
        self.reveal = reveal;
        self
    }
    /// Stop early, with an error, when this handle trips.
    pub fn interrupt(mut self, interrupt: Interrupt) -> Self {
        self.interrupt = interrupt;
        self
    }

    pub fn estimate(&self, hole: Hole, board: Board) -> anyhow::Result<Odds> {
        Ok(self.tally(hole, board)?.odds(self.reveal))
    }

    pub fn tally(&self, hole: Hole, board: Board) -> anyhow::Result<Tally> {
        let mut deck = Deck::new();
        deck.strip(Hand::from(hole))?;
        deck.strip(Hand::from(board))?;
        let known = Hand::add(Hand::from(hole), Hand::from(board));
        let draw = board.remaining();
        log::debug!("{:<32}{:<16}{}", "estimating", known, draw);
        let tally = match draw {
            0 => {
                let mut tally = Tally::default();
                tally.witness(&Groups::from(known));
                tally
            }
            n => self.exhaust(known, &Vec::<Card>::from(deck), n)?,
        };
        log::info!("{:<32}{:<16}{}", "enumerated boards", known, tally.total());
        Ok(tally)
    }

    fn exhaust(&self, known: Hand, pool: &[Card], draw: usize) -> anyhow::Result<Tally> {
        let mut tally = Tally::default();
        for (i, completion) in Combinations::new(pool, draw)?.enumerate() {
            if i % crate::INTERRUPT_INTERVAL == 0 && self.interrupt.interrupted() {
                log::warn!("interrupted after {} boards", i);
                anyhow::bail!("estimate interrupted after {} boards", i);
            }
            let drawn = Hand::from(completion);
            tally.witness(&Groups::from(Hand::add(known, drawn)));
        }
        Ok(tally)
    }
}

/// Category odds for a hole and board, as probabilities or as raw counts.
pub fn estimate_odds(hole: Hole, board: Board, reveal_counts: bool) -> anyhow::Result<Odds> {
    Estimator::default().reveal(reveal_counts).estimate(hole, board)
}
