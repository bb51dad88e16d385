// Copyright 2017-2023 Sean Gillespie.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

use std::fmt;

use lazy_static::lazy_static;

use crate::core::{self, *};

mod path;

pub use path::Ray;

/// Major and minor pieces in file order, as they stand on each side's back rank.
const BACK_RANK: [PieceKind; 8] = [
    PieceKind::Rook,
    PieceKind::Knight,
    PieceKind::Bishop,
    PieceKind::Queen,
    PieceKind::King,
    PieceKind::Bishop,
    PieceKind::Knight,
    PieceKind::Rook,
];

lazy_static! {
    static ref START_POSITION: Board = Board::build_start_position();
}

/// An 8x8 board, owning every piece currently standing on it.
///
/// The board does no legality checking of its own. Callers are trusted to only place pieces where the rules allow.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Board {
    squares: [Option<Piece>; 64],
}

impl Board {
    pub fn empty() -> Board {
        Board {
            squares: [None; 64],
        }
    }

    /// The standard starting position: White on ranks 1 and 2, Black on ranks 7 and 8.
    pub fn from_start_position() -> Board {
        START_POSITION.clone()
    }

    fn build_start_position() -> Board {
        let mut board = Board::empty();
        for color in core::colors() {
            for (file, &kind) in core::files().zip(BACK_RANK.iter()) {
                let back = Square::of(color.back_rank(), file);
                board.place(back, Piece::new(kind, color, back));
                let front = Square::of(color.pawn_rank(), file);
                board.place(front, Piece::new(PieceKind::Pawn, color, front));
            }
        }

        board
    }

    pub fn piece_at(&self, square: Square) -> Option<&Piece> {
        self.squares[square.index()].as_ref()
    }

    pub fn is_occupied(&self, square: Square) -> bool {
        self.squares[square.index()].is_some()
    }

    /// Puts a piece on a square, handing back whatever stood there before.
    pub fn place(&mut self, square: Square, piece: Piece) -> Option<Piece> {
        self.squares[square.index()].replace(piece)
    }

    /// Removes and returns the piece on a square, if any.
    pub fn vacate(&mut self, square: Square) -> Option<Piece> {
        self.squares[square.index()].take()
    }

    pub fn pieces(&self) -> impl Iterator<Item = &Piece> + '_ {
        self.squares.iter().flatten()
    }

    pub fn pieces_of(&self, color: Color) -> impl Iterator<Item = &Piece> + '_ {
        self.pieces().filter(move |piece| piece.color == color)
    }

    pub fn len(&self) -> usize {
        self.pieces().count()
    }

    pub fn is_empty(&self) -> bool {
        self.pieces().next().is_none()
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        for rank in core::ranks().rev() {
            write!(f, "{} |", rank)?;
            for file in core::files() {
                let sq = Square::of(rank, file);
                if let Some(piece) = self.piece_at(sq) {
                    write!(f, " {} ", piece)?;
                } else {
                    write!(f, " ... ")?;
                }
            }

            writeln!(f)?;
        }

        write!(f, "   ")?;
        for _ in core::files() {
            write!(f, "-----")?;
        }

        writeln!(f)?;
        write!(f, "   ")?;
        for file in core::files() {
            write!(f, "  {}  ", file)?;
        }

        writeln!(f)?;
        Ok(())
    }
}

impl Default for Board {
    fn default() -> Self {
        Board::empty()
    }
}

#[cfg(test)]
mod tests {
    use crate::board::Board;
    use crate::core::*;

    fn sq(name: &str) -> Square {
        Square::parse(name).unwrap()
    }

    mod start_position {
        use super::*;

        #[test]
        fn thirty_two_pieces() {
            let board = Board::from_start_position();
            assert_eq!(32, board.len());
            assert_eq!(16, board.pieces_of(Color::White).count());
            assert_eq!(16, board.pieces_of(Color::Black).count());
        }

        #[test]
        fn standard_kind_distribution() {
            let board = Board::from_start_position();
            for color in colors() {
                for kind in piece_kinds() {
                    let count = board
                        .pieces_of(color)
                        .filter(|piece| piece.kind == kind)
                        .count();
                    assert_eq!(kind.starting_count(), count, "{} {}", color, kind);
                }
            }
        }

        #[test]
        fn back_ranks() {
            let board = Board::from_start_position();
            let check_square = |square: &str, kind: PieceKind, color: Color| {
                let piece = board.piece_at(sq(square)).unwrap();
                assert_eq!(kind, piece.kind, "{}", square);
                assert_eq!(color, piece.color, "{}", square);
                assert_eq!(sq(square), piece.location);
                assert!(!piece.has_moved);
            };

            check_square("a1", PieceKind::Rook, Color::White);
            check_square("b1", PieceKind::Knight, Color::White);
            check_square("c1", PieceKind::Bishop, Color::White);
            check_square("d1", PieceKind::Queen, Color::White);
            check_square("e1", PieceKind::King, Color::White);
            check_square("f1", PieceKind::Bishop, Color::White);
            check_square("g1", PieceKind::Knight, Color::White);
            check_square("h1", PieceKind::Rook, Color::White);
            check_square("a8", PieceKind::Rook, Color::Black);
            check_square("b8", PieceKind::Knight, Color::Black);
            check_square("c8", PieceKind::Bishop, Color::Black);
            check_square("d8", PieceKind::Queen, Color::Black);
            check_square("e8", PieceKind::King, Color::Black);
            check_square("f8", PieceKind::Bishop, Color::Black);
            check_square("g8", PieceKind::Knight, Color::Black);
            check_square("h8", PieceKind::Rook, Color::Black);
            for file in files() {
                let white = Square::of(RANK_2, file).to_string();
                let black = Square::of(RANK_7, file).to_string();
                check_square(&white, PieceKind::Pawn, Color::White);
                check_square(&black, PieceKind::Pawn, Color::Black);
            }
        }

        #[test]
        fn middle_is_vacant() {
            let board = Board::from_start_position();
            for rank in [RANK_3, RANK_4, RANK_5, RANK_6] {
                for file in files() {
                    assert!(board.piece_at(Square::of(rank, file)).is_none());
                }
            }
        }
    }

    #[test]
    fn place_and_vacate() {
        let mut board = Board::empty();
        assert!(board.is_empty());
        let rook = Piece::new(PieceKind::Rook, Color::White, sq("d4"));
        assert_eq!(None, board.place(sq("d4"), rook));
        assert!(board.is_occupied(sq("d4")));
        assert_eq!(Some(&rook), board.piece_at(sq("d4")));
        assert_eq!(Some(rook), board.vacate(sq("d4")));
        assert_eq!(None, board.vacate(sq("d4")));
        assert!(board.is_empty());
    }

    #[test]
    fn place_returns_displaced_piece() {
        let mut board = Board::from_start_position();
        let queen = Piece::new(PieceKind::Queen, Color::Black, sq("a2"));
        let displaced = board.place(sq("a2"), queen).unwrap();
        assert_eq!(PieceKind::Pawn, displaced.kind);
        assert_eq!(Color::White, displaced.color);
        assert_eq!(32, board.len());
    }

    #[test]
    fn display_smoke() {
        let rendered = Board::from_start_position().to_string();
        let lines: Vec<_> = rendered.lines().collect();
        assert_eq!(10, lines.len());
        assert!(lines[0].starts_with("8 | BRo  BKn  BBi  BQu  BKi"));
        assert!(lines[4].contains("..."));
        assert!(lines[7].starts_with("1 | WRo  WKn  WBi  WQu  WKi"));
    }
}
