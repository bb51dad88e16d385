// Copyright 2017-2023 Sean Gillespie.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! The game controller: turn order, move validation, captures, and the capture-based victory condition.
//!
//! A side wins the moment it has captured every opposing piece of one kind: both knights, both bishops, both rooks,
//! the queen, the king, or all eight pawns. There is no check, no checkmate, and no castling, en-passant, or
//! promotion.

use std::fmt;

use serde::Serialize;
use thiserror::Error;

use crate::{
    board::Board,
    core::{Color, Piece, PieceKind, Square, SquareParseError},
};

mod ledger;

pub use ledger::CaptureLedger;

/// Whether the game is still being played, and if not, who won it.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, Serialize)]
pub enum GameState {
    #[serde(rename = "UNFINISHED")]
    InProgress,
    #[serde(rename = "WHITE_WON")]
    WhiteWon,
    #[serde(rename = "BLACK_WON")]
    BlackWon,
}

impl GameState {
    pub fn won_by(color: Color) -> GameState {
        match color {
            Color::White => GameState::WhiteWon,
            Color::Black => GameState::BlackWon,
        }
    }

    pub fn winner(self) -> Option<Color> {
        match self {
            GameState::InProgress => None,
            GameState::WhiteWon => Some(Color::White),
            GameState::BlackWon => Some(Color::Black),
        }
    }

    pub fn is_over(self) -> bool {
        self != GameState::InProgress
    }
}

impl fmt::Display for GameState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            GameState::InProgress => "UNFINISHED",
            GameState::WhiteWon => "WHITE_WON",
            GameState::BlackWon => "BLACK_WON",
        };

        write!(f, "{}", s)
    }
}

/// Reasons a move request can be turned down. A rejected move leaves the game exactly as it was.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum Rejection {
    #[error("the game is over: {0}")]
    GameOver(GameState),
    #[error("no piece on {0}")]
    EmptySource(Square),
    #[error("{piece} on {square} belongs to the side not on move")]
    WrongTurn { piece: Piece, square: Square },
    #[error("{0} is occupied by a friendly piece")]
    FriendlyDestination(Square),
    #[error("{piece} cannot move from {start} to {end}")]
    IllegalGeometry {
        piece: Piece,
        start: Square,
        end: Square,
    },
    #[error("path from {start} to {end} is obstructed")]
    Obstructed { start: Square, end: Square },
}

/// A point-in-time summary of a game, suitable for serializing.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct GameReport {
    pub turn: Color,
    pub state: GameState,
    pub white_captures: Vec<String>,
    pub black_captures: Vec<String>,
}

/// A game in progress (or finished). Owns the board and both sides' capture ledgers.
#[derive(Clone, Debug)]
pub struct Game {
    board: Board,
    side_to_move: Color,
    state: GameState,
    /// Pieces captured by White.
    white_captures: CaptureLedger,
    /// Pieces captured by Black.
    black_captures: CaptureLedger,
}

impl Game {
    pub fn new() -> Game {
        Game::from_board(Board::from_start_position(), Color::White)
    }

    /// Starts a game from an arbitrary board, with `side_to_move` to play first.
    pub fn from_board(board: Board, side_to_move: Color) -> Game {
        Game {
            board,
            side_to_move,
            state: GameState::InProgress,
            white_captures: CaptureLedger::new(),
            black_captures: CaptureLedger::new(),
        }
    }

    pub fn turn(&self) -> Color {
        self.side_to_move
    }

    pub fn state(&self) -> GameState {
        self.state
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    /// The kind and color of whatever stands on `square`.
    pub fn piece_at(&self, square: Square) -> Option<(PieceKind, Color)> {
        self.board
            .piece_at(square)
            .map(|piece| (piece.kind, piece.color))
    }

    /// The ledger of pieces captured *by* `color`.
    pub fn captured_by(&self, color: Color) -> &CaptureLedger {
        match color {
            Color::White => &self.white_captures,
            Color::Black => &self.black_captures,
        }
    }

    fn captured_by_mut(&mut self, color: Color) -> &mut CaptureLedger {
        match color {
            Color::White => &mut self.white_captures,
            Color::Black => &mut self.black_captures,
        }
    }

    /// Shorthand names of the pieces White has captured, oldest first.
    pub fn white_captures(&self) -> Vec<String> {
        self.white_captures.shorthands()
    }

    /// Shorthand names of the pieces Black has captured, oldest first.
    pub fn black_captures(&self) -> Vec<String> {
        self.black_captures.shorthands()
    }

    pub fn report(&self) -> GameReport {
        GameReport {
            turn: self.side_to_move,
            state: self.state,
            white_captures: self.white_captures(),
            black_captures: self.black_captures(),
        }
    }

    /// Discards the board and both ledgers and sets up a fresh game with White to move.
    pub fn reset(&mut self) {
        let _span = tracing::debug_span!("reset").entered();
        *self = Game::new();
        tracing::info!("game reset");
    }
}

//
// Move validation and application.
//
// Every check runs before anything is touched, so a move is either rejected with the game unchanged or applied in
// full.
//

impl Game {
    /// Makes a move given as two coordinate tokens, such as `make_move("a2", "a4")`.
    ///
    /// Malformed tokens are an error. Otherwise, returns whether the move was legal and therefore played.
    pub fn make_move(&mut self, start: &str, end: &str) -> Result<bool, SquareParseError> {
        let start = Square::parse(start)?;
        let end = Square::parse(end)?;
        Ok(self.play(start, end))
    }

    /// Plays a move if it is legal, returning whether it was.
    pub fn play(&mut self, start: Square, end: Square) -> bool {
        self.try_play(start, end).is_ok()
    }

    /// Plays a move if it is legal, returning the piece it captured (if any), or why it was not legal.
    pub fn try_play(&mut self, start: Square, end: Square) -> Result<Option<Piece>, Rejection> {
        let _span = tracing::debug_span!("play", %start, %end).entered();
        match self.validate(start, end) {
            Ok(take) => {
                let captured = self.commit(start, end, take);
                tracing::debug!(turn = %self.side_to_move, "move accepted");
                Ok(captured)
            }
            Err(rejection) => {
                tracing::debug!(%rejection, "move rejected");
                Err(rejection)
            }
        }
    }

    /// Checks a move against the rules without playing it. On success, returns whether the move is a capture.
    pub fn validate(&self, start: Square, end: Square) -> Result<bool, Rejection> {
        if self.state.is_over() {
            return Err(Rejection::GameOver(self.state));
        }

        let piece = match self.board.piece_at(start) {
            Some(piece) => piece,
            None => return Err(Rejection::EmptySource(start)),
        };

        if piece.color != self.side_to_move {
            return Err(Rejection::WrongTurn {
                piece: *piece,
                square: start,
            });
        }

        let take = match self.board.piece_at(end) {
            Some(target) if target.color == self.side_to_move => {
                return Err(Rejection::FriendlyDestination(end));
            }
            Some(_) => true,
            None => false,
        };

        if !piece.can_reach(start, end, take) {
            return Err(Rejection::IllegalGeometry {
                piece: *piece,
                start,
                end,
            });
        }

        if piece.kind.is_sliding() && !self.board.is_path_clear(start, end) {
            return Err(Rejection::Obstructed { start, end });
        }

        Ok(take)
    }

    fn commit(&mut self, start: Square, end: Square, take: bool) -> Option<Piece> {
        let captured = if take { Some(self.capture(end)) } else { None };
        let mut piece = self
            .board
            .vacate(start)
            .expect("invalid move: no piece at source square");
        piece.location = end;
        piece.has_moved = true;
        self.board.place(end, piece);

        // The turn still passes after a winning capture; the finished state is what stops further play.
        self.side_to_move = self.side_to_move.toggle();
        captured
    }

    /// Moves the piece on `target` into the ledger of the side to move and checks whether that side has now won.
    fn capture(&mut self, target: Square) -> Piece {
        let captured = self
            .board
            .vacate(target)
            .expect("invalid move: no piece at capture target");
        let us = self.side_to_move;
        let ledger = self.captured_by_mut(us);
        ledger.record(captured);
        let completed = ledger.completed_kind();
        tracing::info!(side = %us, piece = %captured, "piece captured");
        if let Some(kind) = completed {
            self.state = GameState::won_by(us);
            tracing::info!(side = %us, %kind, state = %self.state, "all opposing pieces of a kind captured");
        }

        captured
    }
}

impl Default for Game {
    fn default() -> Self {
        Game::new()
    }
}
