// Copyright 2022-2023 Sean Gillespie.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

use anyhow::{anyhow, bail};
use chessvar::{core::Square, Game};
use structopt::StructOpt;
use tracing_subscriber::filter::LevelFilter;

/// Plays a fixed sequence of moves from the starting position and prints where the game ended up.
#[derive(Debug, StructOpt)]
struct Options {
    /// Moves to play, each written as two squares run together, e.g. `a2a4 h7h5`.
    #[structopt(name = "MOVES")]
    moves: Vec<String>,

    /// Stop at the first illegal move instead of skipping it.
    #[structopt(long)]
    strict: bool,

    /// Print the final report as JSON.
    #[structopt(long)]
    json: bool,

    /// Maximum level of log messages to print, unless overridden by CHESSVAR_LOG.
    #[structopt(long, default_value = "info")]
    log_level: LevelFilter,
}

fn parse_move(mov: &str) -> anyhow::Result<(Square, Square)> {
    if mov.len() != 4 || !mov.is_ascii() {
        return Err(anyhow!("expected a move like a2a4, got {}", mov));
    }

    let (from, to) = mov.split_at(2);
    Ok((from.parse()?, to.parse()?))
}

fn main() -> anyhow::Result<()> {
    let args = Options::from_args();
    chessvar::log::init(args.log_level);

    let mut game = Game::new();
    for mov in &args.moves {
        let (start, end) = parse_move(mov)?;
        if let Err(rejection) = game.try_play(start, end) {
            if args.strict {
                bail!("illegal move {}: {}", mov, rejection);
            }

            println!("{:<20} {} ({})", "Skipped:", mov, rejection);
        }
    }

    if args.json {
        println!("{}", serde_json::to_string_pretty(&game.report())?);
        return Ok(());
    }

    println!("===========================");
    print!("{}", game.board());
    println!("===========================");
    println!("{:<20} {}", "State:", game.state());
    println!("{:<20} {}", "Turn:", game.turn());
    println!("{:<20} {:?}", "White captured:", game.white_captures());
    println!("{:<20} {:?}", "Black captured:", game.black_captures());
    Ok(())
}
