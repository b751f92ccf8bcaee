//! Odds Binary
//!
//! Enumerates every completion of a board and prints category odds.
//!
//! Options: --hole, --board, --deal, --counts, --json, --timeout, --verbose

use clap::Parser;

fn main() -> anyhow::Result<()> {
    let args = handodds::cli::Args::parse();
    handodds::log(args.verbose, args.log_file.as_deref())?;
    args.run()
}
