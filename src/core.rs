// Copyright 2021 Sean Gillespie.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! Module `core` contains core datatypes used pervasively throughout `chessvar`: squares, pieces, and the movement
//! geometry of each kind of piece.

mod geometry;
mod types;

pub use types::{
    colors, files, piece_kinds, ranks, squares, AllFiles, AllRanks, AllSquares, Color, Direction,
    File, FileParseError, Piece, PieceKind, Rank, RankParseError, Square, SquareParseError,
};

pub use types::{FILE_A, FILE_B, FILE_C, FILE_D, FILE_E, FILE_F, FILE_G, FILE_H};
pub use types::{RANK_1, RANK_2, RANK_3, RANK_4, RANK_5, RANK_6, RANK_7, RANK_8};
