//! Command-line front end for the estimator.
//!
//! Parses the hole and board, runs one estimate, and prints it either as
//! one "Name: value" line per category or as JSON.
use crate::cards::*;
use crate::odds::*;
use clap::Parser;

/// Brute-force odds of landing a pair, two pair, triple, or quad by the river.
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct Args {
    /// Hole cards, e.g. "Ah Ks". Dealt at random with --deal, else "Ah Ks".
    #[arg(long)]
    pub hole: Option<String>,
    /// Known community cards, e.g. "2c 6s 3s".
    #[arg(long)]
    pub board: Option<String>,
    /// Deal a random hole and this many board cards instead.
    #[arg(long, value_parser = clap::value_parser!(u8).range(0..=5), conflicts_with_all = ["hole", "board"])]
    pub deal: Option<u8>,
    /// Print "hits in total" counts instead of probabilities.
    #[arg(long)]
    pub counts: bool,
    /// Print the result as JSON.
    #[arg(long)]
    pub json: bool,
    /// Give up after this long, e.g. "30s", "5m".
    #[arg(long, env = "ODDS_TIMEOUT", value_parser = duration)]
    pub timeout: Option<std::time::Duration>,
    /// Log enumeration details.
    #[arg(long, short)]
    pub verbose: bool,
    /// Also write a debug log to this file.
    #[arg(long)]
    pub log_file: Option<std::path::PathBuf>,
}

fn duration(s: &str) -> Result<std::time::Duration, String> {
    crate::parse_duration(s).ok_or_else(|| format!("invalid duration: {}", s))
}

impl Args {
    /// The hole and board this run is about.
    pub fn deal(&self) -> anyhow::Result<(Hole, Board)> {
        match self.deal {
            Some(n) => {
                let mut deck = Deck::new();
                let hole = deck.hole();
                let board = Board::try_from(deck.deal(n as usize)).map_err(anyhow::Error::msg)?;
                Ok((hole, board))
            }
            None => {
                let hole = self.hole.as_deref().unwrap_or("Ah Ks");
                let board = self.board.as_deref().unwrap_or("");
                let hole = Hole::try_from(hole).map_err(anyhow::Error::msg)?;
                let board = Board::try_from(board).map_err(anyhow::Error::msg)?;
                Ok((hole, board))
            }
        }
    }

    pub fn estimator(&self) -> Estimator {
        let interrupt = match self.timeout {
            Some(timeout) => Interrupt::after(timeout),
            None => Interrupt::default(),
        };
        Estimator::default()
            .reveal(self.counts)
            .interrupt(interrupt)
    }

    pub fn run(&self) -> anyhow::Result<()> {
        let (hole, board) = self.deal()?;
        log::info!("{:<32}{} ~ {}", "hole ~ board", hole, board);
        let odds = self.estimator().estimate(hole, board)?;
        match self.json {
            true => println!("{}", serde_json::to_string_pretty(&odds)?),
            false => print!("{}", odds),
        }
        Ok(())
    }
}
