// Copyright 2021-2023 Sean Gillespie.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! A line-oriented command loop for playing a game at a terminal.
//!
//! Commands are `<from> <to>` (or `move <from> <to>`), `board`, `status`, `captures`, `reset`, and `quit`.

use std::io::{self, BufRead, Write};

use anyhow::anyhow;

use crate::{core::Square, Game};

/// How results are printed after each command.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum OutputFormat {
    Text,
    Json,
}

pub fn run(format: OutputFormat) -> anyhow::Result<()> {
    let stdin = io::stdin();
    let stdout = io::stdout();
    run_with(stdin.lock(), &mut stdout.lock(), format)
}

/// Runs the command loop over arbitrary input and output, until `quit` or the end of input.
pub fn run_with<R, W>(input: R, out: &mut W, format: OutputFormat) -> anyhow::Result<()>
where
    R: BufRead,
    W: Write,
{
    let mut game = Game::new();
    for maybe_line in input.lines() {
        let line = maybe_line?;
        let components: Vec<_> = line.split_whitespace().collect();
        let (&command, arguments) = components.split_first().unwrap_or((&"", &[]));
        let result = match (command, arguments) {
            ("", []) => Ok(()),
            ("quit", []) => break,
            ("board", []) => write!(out, "{}", game.board()).map_err(Into::into),
            ("status", []) => write_status(out, &game, format),
            ("captures", []) => write_captures(out, &game),
            ("reset", []) => {
                game.reset();
                write_status(out, &game, format)
            }
            ("move", [from, to]) => handle_move(out, &mut game, from, to, format),
            (from, [to]) => handle_move(out, &mut game, from, to, format),
            _ => Err(anyhow!("unrecognized command: {} {:?}", command, arguments)),
        };

        if let Err(e) = result {
            writeln!(out, "error: {}", e)?;
        }
    }

    Ok(())
}

fn handle_move<W: Write>(
    out: &mut W,
    game: &mut Game,
    from: &str,
    to: &str,
    format: OutputFormat,
) -> anyhow::Result<()> {
    let start: Square = from.parse()?;
    let end: Square = to.parse()?;
    match game.try_play(start, end) {
        Ok(Some(captured)) if format == OutputFormat::Text => {
            writeln!(out, "ok, captured {}", captured)?;
        }
        Ok(_) if format == OutputFormat::Text => writeln!(out, "ok")?,
        Ok(_) => {}
        Err(rejection) => writeln!(out, "illegal move: {}", rejection)?,
    }

    write_status(out, game, format)
}

fn write_status<W: Write>(out: &mut W, game: &Game, format: OutputFormat) -> anyhow::Result<()> {
    match format {
        OutputFormat::Json => writeln!(out, "{}", serde_json::to_string(&game.report())?)?,
        OutputFormat::Text if game.state().is_over() => writeln!(out, "{}", game.state())?,
        OutputFormat::Text => writeln!(out, "{} to move", game.turn())?,
    }

    Ok(())
}

fn write_captures<W: Write>(out: &mut W, game: &Game) -> anyhow::Result<()> {
    writeln!(out, "{:<16} {:?}", "White captured:", game.white_captures())?;
    writeln!(out, "{:<16} {:?}", "Black captured:", game.black_captures())?;
    Ok(())
}
