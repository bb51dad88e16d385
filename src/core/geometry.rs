// Copyright 2017-2023 Sean Gillespie.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! Movement geometry for each kind of piece.
//!
//! Geometry answers whether a destination has the right *shape* relative to the start square for a given piece. It
//! knows nothing about the rest of the board: whether a slider's path is clear is the board's business, and whether
//! a move is a capture is passed in by the caller.

use crate::core::*;

impl Piece {
    /// Returns true if this piece's shape of movement carries it from `start` to `end`.
    ///
    /// `take` says whether `end` holds an enemy piece; only pawns care, since they move straight but capture
    /// diagonally. A `start` that is not this piece's own location never matches.
    pub fn can_reach(&self, start: Square, end: Square, take: bool) -> bool {
        if start != self.location || start == end {
            return false;
        }

        let files = start.file().distance_to(end.file());
        let ranks = start.rank().distance_to(end.rank());
        match self.kind {
            PieceKind::King => files.abs() <= 1 && ranks.abs() <= 1,
            PieceKind::Queen => files == 0 || ranks == 0 || files.abs() == ranks.abs(),
            PieceKind::Rook => files == 0 || ranks == 0,
            PieceKind::Bishop => files.abs() == ranks.abs(),
            PieceKind::Knight => matches!((files.abs(), ranks.abs()), (1, 2) | (2, 1)),
            PieceKind::Pawn => pawn_reaches(self.color, self.has_moved, files, ranks, take),
        }
    }
}

fn pawn_reaches(color: Color, has_moved: bool, files: i8, ranks: i8, take: bool) -> bool {
    let forward = ranks * color.forward();
    if take {
        return files.abs() == 1 && forward == 1;
    }

    files == 0 && (forward == 1 || (forward == 2 && !has_moved))
}

#[cfg(test)]
mod tests {
    use crate::core::*;

    fn sq(name: &str) -> Square {
        Square::parse(name).unwrap()
    }

    fn piece(kind: PieceKind, color: Color, at: &str) -> Piece {
        Piece::new(kind, color, sq(at))
    }

    fn reaches(piece: &Piece, end: &str) -> bool {
        piece.can_reach(piece.location, sq(end), false)
    }

    mod king {
        use super::*;

        #[test]
        fn one_step_any_direction() {
            let king = piece(PieceKind::King, Color::White, "e4");
            for end in ["d3", "d4", "d5", "e3", "e5", "f3", "f4", "f5"] {
                assert!(reaches(&king, end), "king should reach {}", end);
            }
        }

        #[test]
        fn not_two_steps() {
            let king = piece(PieceKind::King, Color::Black, "e4");
            assert!(!reaches(&king, "e6"));
            assert!(!reaches(&king, "g4"));
            assert!(!reaches(&king, "c2"));
        }

        #[test]
        fn not_own_square() {
            let king = piece(PieceKind::King, Color::White, "e1");
            assert!(!reaches(&king, "e1"));
        }
    }

    mod sliders {
        use super::*;

        #[test]
        fn queen_lines_and_diagonals() {
            let queen = piece(PieceKind::Queen, Color::White, "d1");
            assert!(reaches(&queen, "d8"));
            assert!(reaches(&queen, "a1"));
            assert!(reaches(&queen, "h5"));
            assert!(reaches(&queen, "a4"));
            assert!(!reaches(&queen, "e3"));
            assert!(!reaches(&queen, "h4"));
        }

        #[test]
        fn rook_lines_only() {
            let rook = piece(PieceKind::Rook, Color::Black, "a8");
            assert!(reaches(&rook, "a1"));
            assert!(reaches(&rook, "h8"));
            assert!(!reaches(&rook, "b7"));
        }

        #[test]
        fn bishop_diagonals_only() {
            let bishop = piece(PieceKind::Bishop, Color::White, "c1");
            assert!(reaches(&bishop, "h6"));
            assert!(reaches(&bishop, "a3"));
            assert!(!reaches(&bishop, "c4"));
            assert!(!reaches(&bishop, "d3"));
        }

        #[test]
        fn geometry_ignores_occupancy() {
            // A bishop on its home square "reaches" h6 even though, on a real board, a pawn sits on d2.
            let bishop = piece(PieceKind::Bishop, Color::White, "c1");
            assert!(bishop.can_reach(sq("c1"), sq("h6"), true));
        }
    }

    mod knight {
        use super::*;

        #[test]
        fn all_eight_jumps() {
            let knight = piece(PieceKind::Knight, Color::White, "d4");
            for end in ["b3", "b5", "c2", "c6", "e2", "e6", "f3", "f5"] {
                assert!(reaches(&knight, end), "knight should reach {}", end);
            }
        }

        #[test]
        fn no_straight_or_diagonal() {
            let knight = piece(PieceKind::Knight, Color::Black, "d4");
            assert!(!reaches(&knight, "d6"));
            assert!(!reaches(&knight, "f6"));
            assert!(!reaches(&knight, "d5"));
        }
    }

    mod pawn {
        use super::*;

        #[test]
        fn white_advances_up_the_board() {
            let pawn = piece(PieceKind::Pawn, Color::White, "a2");
            assert!(reaches(&pawn, "a3"));
            assert!(reaches(&pawn, "a4"));
            assert!(!reaches(&pawn, "a5"));
            assert!(!reaches(&pawn, "a1"));
        }

        #[test]
        fn black_advances_down_the_board() {
            let pawn = piece(PieceKind::Pawn, Color::Black, "h7");
            assert!(reaches(&pawn, "h6"));
            assert!(reaches(&pawn, "h5"));
            assert!(!reaches(&pawn, "h4"));
            assert!(!reaches(&pawn, "h8"));
        }

        #[test]
        fn double_step_only_before_first_move() {
            let mut pawn = piece(PieceKind::Pawn, Color::White, "c3");
            pawn.has_moved = true;
            assert!(reaches(&pawn, "c4"));
            assert!(!reaches(&pawn, "c5"));
        }

        #[test]
        fn quiet_moves_stay_on_file() {
            let pawn = piece(PieceKind::Pawn, Color::White, "e2");
            assert!(!reaches(&pawn, "d3"));
            assert!(!reaches(&pawn, "f3"));
        }

        #[test]
        fn captures_one_diagonal_forward() {
            let white = piece(PieceKind::Pawn, Color::White, "e4");
            assert!(white.can_reach(sq("e4"), sq("d5"), true));
            assert!(white.can_reach(sq("e4"), sq("f5"), true));
            assert!(!white.can_reach(sq("e4"), sq("e5"), true));
            assert!(!white.can_reach(sq("e4"), sq("d3"), true));
            assert!(!white.can_reach(sq("e4"), sq("c6"), true));

            let black = piece(PieceKind::Pawn, Color::Black, "e5");
            assert!(black.can_reach(sq("e5"), sq("d4"), true));
            assert!(!black.can_reach(sq("e5"), sq("d6"), true));
        }

        #[test]
        fn no_double_step_capture() {
            let pawn = piece(PieceKind::Pawn, Color::Black, "b7");
            assert!(!pawn.can_reach(sq("b7"), sq("c5"), true));
        }
    }

    #[test]
    fn start_must_match_location() {
        let rook = piece(PieceKind::Rook, Color::White, "a1");
        assert!(!rook.can_reach(sq("a2"), sq("a3"), false));
        let knight = piece(PieceKind::Knight, Color::White, "b1");
        assert!(!knight.can_reach(sq("g1"), sq("f3"), false));
    }
}
