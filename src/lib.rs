// Copyright 2017-2023 Sean Gillespie.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! `chessvar` is a rules engine for a chess variant played without check, checkmate, castling, en passant, or
//! promotion. Pieces move as in standard chess, and a side wins immediately upon capturing every opposing piece of
//! one kind: both knights, both bishops, both rooks, the queen, the king, or all eight pawns.
//!
//! ```
//! use chessvar::{Game, GameState};
//!
//! let mut game = Game::new();
//! assert_eq!(Ok(true), game.make_move("a2", "a4"));
//! assert_eq!(Ok(false), game.make_move("h7", "h4"));
//! assert_eq!(GameState::InProgress, game.state());
//! ```

pub mod board;
pub mod cli;
pub mod core;
pub mod game;
pub mod log;

pub use crate::board::Board;
pub use crate::game::{CaptureLedger, Game, GameReport, GameState, Rejection};
