// Copyright 2017-2023 Sean Gillespie.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

use std::{convert::TryFrom, fmt, str::FromStr};

use serde::Serialize;
use thiserror::Error;

/// Errors arising from parsing a two-character coordinate such as `a2` or `H7`.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum SquareParseError {
    #[error("square index out of range: {0}")]
    OutOfRange(u8),
    #[error("expected a two-character square, got {0} characters")]
    WrongLength(usize),
    #[error("invalid file: {0}")]
    InvalidFile(char),
    #[error("invalid rank: {0}")]
    InvalidRank(char),
}

#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum RankParseError {
    #[error("invalid char: {0}")]
    InvalidChar(char),
}

#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum FileParseError {
    #[error("invalid char: {0}")]
    InvalidChar(char),
}

/// A square on the chessboard.
///
/// Squares are only ever produced by parsing or by stepping within the board, so a `Square` is always on the board.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub struct Square(u8);

impl Square {
    /// The rank this square sits on.
    pub const fn rank(self) -> Rank {
        Rank(self.0 >> 3)
    }

    /// The file this square sits on.
    pub const fn file(self) -> File {
        File(self.0 & 7)
    }

    /// The square where `rank` and `file` cross.
    pub const fn of(rank: Rank, file: File) -> Square {
        Square(rank.0 * 8 + file.0)
    }

    /// Parses a coordinate token: a file letter `a`-`h` in either case, followed by a rank digit `1`-`8`.
    pub fn parse(token: &str) -> Result<Square, SquareParseError> {
        token.parse()
    }

    /// Returns the square `files` files and `ranks` ranks away from this one, or `None` if that lands off of the
    /// board.
    pub fn offset(self, files: i8, ranks: i8) -> Option<Square> {
        let file = self.file().offset(files)?;
        let rank = self.rank().offset(ranks)?;
        Some(Square::of(rank, file))
    }

    /// Returns the closest square in the given direction, or `None` if that square is off of the board.
    pub fn towards(self, dir: Direction) -> Option<Square> {
        let (files, ranks) = dir.as_vector();
        self.offset(files, ranks)
    }

    pub const fn as_u8(self) -> u8 {
        self.0
    }

    pub(crate) const fn index(self) -> usize {
        self.0 as usize
    }
}

impl TryFrom<u8> for Square {
    type Error = SquareParseError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        if value >= 64 {
            return Err(SquareParseError::OutOfRange(value));
        }

        Ok(Square(value))
    }
}

impl FromStr for Square {
    type Err = SquareParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut chars = s.chars();
        let (file_c, rank_c) = match (chars.next(), chars.next(), chars.next()) {
            (Some(f), Some(r), None) => (f, r),
            _ => return Err(SquareParseError::WrongLength(s.chars().count())),
        };

        let file = File::try_from(file_c).map_err(|_| SquareParseError::InvalidFile(file_c))?;
        let rank = Rank::try_from(rank_c).map_err(|_| SquareParseError::InvalidRank(rank_c))?;
        Ok(Square::of(rank, file))
    }
}

impl fmt::Display for Square {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.file(), self.rank())
    }
}

/// Moves a 0-based rank or file index by `delta`, staying within the eight lines of the board.
fn step(index: u8, delta: i8) -> Option<u8> {
    let value = index as i8 + delta;
    if !(0..8).contains(&value) {
        return None;
    }

    Some(value as u8)
}

const fn distance(from: u8, to: u8) -> i8 {
    to as i8 - from as i8
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Rank(u8);

impl Rank {
    /// The rank as it is written on the board, 1 through 8.
    pub const fn number(self) -> u8 {
        self.0 + 1
    }

    pub fn offset(self, delta: i8) -> Option<Rank> {
        step(self.0, delta).map(Rank)
    }

    /// Signed distance from this rank to `other`, positive when `other` is closer to rank 8.
    pub const fn distance_to(self, other: Rank) -> i8 {
        distance(self.0, other.0)
    }
}

impl TryFrom<char> for Rank {
    type Error = RankParseError;

    fn try_from(value: char) -> Result<Self, Self::Error> {
        match value {
            '1'..='8' => Ok(Rank(value as u8 - b'1')),
            c => Err(RankParseError::InvalidChar(c)),
        }
    }
}

impl fmt::Display for Rank {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.number())
    }
}

pub const RANK_1: Rank = Rank(0);
pub const RANK_2: Rank = Rank(1);
pub const RANK_3: Rank = Rank(2);
pub const RANK_4: Rank = Rank(3);
pub const RANK_5: Rank = Rank(4);
pub const RANK_6: Rank = Rank(5);
pub const RANK_7: Rank = Rank(6);
pub const RANK_8: Rank = Rank(7);

#[derive(Copy, Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct File(u8);

impl File {
    /// The file as a number, 1 for the `a` file through 8 for the `h` file.
    pub const fn number(self) -> u8 {
        self.0 + 1
    }

    pub fn offset(self, delta: i8) -> Option<File> {
        step(self.0, delta).map(File)
    }

    /// Signed distance from this file to `other`, positive when `other` is closer to the `h` file.
    pub const fn distance_to(self, other: File) -> i8 {
        distance(self.0, other.0)
    }
}

impl TryFrom<char> for File {
    type Error = FileParseError;

    fn try_from(value: char) -> Result<Self, Self::Error> {
        match value.to_ascii_lowercase() {
            c @ 'a'..='h' => Ok(File(c as u8 - b'a')),
            _ => Err(FileParseError::InvalidChar(value)),
        }
    }
}

impl fmt::Display for File {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", (b'a' + self.0) as char)
    }
}

pub const FILE_A: File = File(0);
pub const FILE_B: File = File(1);
pub const FILE_C: File = File(2);
pub const FILE_D: File = File(3);
pub const FILE_E: File = File(4);
pub const FILE_F: File = File(5);
pub const FILE_G: File = File(6);
pub const FILE_H: File = File(7);

#[repr(u8)]
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, Serialize)]
pub enum Color {
    White,
    Black,
}

impl Color {
    pub fn toggle(self) -> Color {
        match self {
            Color::White => Color::Black,
            Color::Black => Color::White,
        }
    }

    /// The sign of a forward step in rank for this side's pawns.
    pub const fn forward(self) -> i8 {
        match self {
            Color::White => 1,
            Color::Black => -1,
        }
    }

    /// The rank this side's major and minor pieces start on.
    pub const fn back_rank(self) -> Rank {
        match self {
            Color::White => RANK_1,
            Color::Black => RANK_8,
        }
    }

    /// The rank this side's pawns start on.
    pub const fn pawn_rank(self) -> Rank {
        match self {
            Color::White => RANK_2,
            Color::Black => RANK_7,
        }
    }

    pub const fn initial(self) -> char {
        match self {
            Color::White => 'W',
            Color::Black => 'B',
        }
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Color::White => "White",
            Color::Black => "Black",
        };

        write!(f, "{}", name)
    }
}

#[repr(u8)]
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, Serialize)]
pub enum PieceKind {
    Pawn,
    Knight,
    Bishop,
    Rook,
    Queen,
    King,
}

impl PieceKind {
    pub const fn name(self) -> &'static str {
        match self {
            PieceKind::Pawn => "Pawn",
            PieceKind::Knight => "Knight",
            PieceKind::Bishop => "Bishop",
            PieceKind::Rook => "Rook",
            PieceKind::Queen => "Queen",
            PieceKind::King => "King",
        }
    }

    /// How many pieces of this kind each side starts with. Capturing that many wins the game.
    pub const fn starting_count(self) -> usize {
        match self {
            PieceKind::Pawn => 8,
            PieceKind::Knight | PieceKind::Bishop | PieceKind::Rook => 2,
            PieceKind::Queen | PieceKind::King => 1,
        }
    }

    /// Sliding pieces are stopped by anything standing between their start and end squares.
    pub const fn is_sliding(self) -> bool {
        matches!(self, PieceKind::Bishop | PieceKind::Rook | PieceKind::Queen)
    }
}

impl fmt::Display for PieceKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

/// A piece on (or captured from) the board.
///
/// A piece remembers where it stands so its movement can be checked against the square a caller claims it is moving
/// from. `has_moved` is kept for every piece but only pawns consult it, to allow the two-square opening advance.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct Piece {
    pub kind: PieceKind,
    pub color: Color,
    pub location: Square,
    pub has_moved: bool,
}

impl Piece {
    pub const fn new(kind: PieceKind, color: Color, location: Square) -> Piece {
        Piece {
            kind,
            color,
            location,
            has_moved: false,
        }
    }

    /// The three-letter name used in capture reports and board printouts, e.g. `WRo` for a white rook.
    pub fn shorthand(&self) -> String {
        format!("{}{}", self.color.initial(), &self.kind.name()[..2])
    }
}

impl fmt::Display for Piece {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.shorthand())
    }
}

#[repr(u8)]
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Direction {
    North,
    NorthEast,
    East,
    SouthEast,
    South,
    SouthWest,
    West,
    NorthWest,
}

impl Direction {
    /// The unit step of this direction as a (file, rank) pair.
    pub const fn as_vector(self) -> (i8, i8) {
        match self {
            Direction::North => (0, 1),
            Direction::NorthEast => (1, 1),
            Direction::East => (1, 0),
            Direction::SouthEast => (1, -1),
            Direction::South => (0, -1),
            Direction::SouthWest => (-1, -1),
            Direction::West => (-1, 0),
            Direction::NorthWest => (-1, 1),
        }
    }

    /// The direction leading from `start` to `end`, if the two squares share a file, rank, or diagonal.
    pub fn between(start: Square, end: Square) -> Option<Direction> {
        let files = start.file().distance_to(end.file());
        let ranks = start.rank().distance_to(end.rank());
        if files != 0 && ranks != 0 && files.abs() != ranks.abs() {
            return None;
        }

        let dir = match (files.signum(), ranks.signum()) {
            (0, 1) => Direction::North,
            (1, 1) => Direction::NorthEast,
            (1, 0) => Direction::East,
            (1, -1) => Direction::SouthEast,
            (0, -1) => Direction::South,
            (-1, -1) => Direction::SouthWest,
            (-1, 0) => Direction::West,
            (-1, 1) => Direction::NorthWest,
            _ => return None,
        };

        Some(dir)
    }
}

macro_rules! type_iterator {
    ($name:ident, $type:ident, $max:expr) => {
        pub struct $name(u8, u8);

        impl Iterator for $name {
            type Item = $type;

            fn next(&mut self) -> Option<Self::Item> {
                if self.0 >= self.1 {
                    None
                } else {
                    let next = self.0;
                    self.0 += 1;
                    Some($type(next))
                }
            }
        }

        impl ::std::iter::DoubleEndedIterator for $name {
            fn next_back(&mut self) -> Option<Self::Item> {
                if self.1 <= self.0 {
                    None
                } else {
                    self.1 -= 1;
                    Some($type(self.1))
                }
            }
        }

        impl Default for $name {
            fn default() -> Self {
                $name(0, $max)
            }
        }
    };
}

type_iterator!(AllSquares, Square, 64);
type_iterator!(AllRanks, Rank, 8);
type_iterator!(AllFiles, File, 8);

pub fn squares() -> AllSquares {
    AllSquares::default()
}

pub fn ranks() -> AllRanks {
    AllRanks::default()
}

pub fn files() -> AllFiles {
    AllFiles::default()
}

pub fn piece_kinds() -> impl Iterator<Item = PieceKind> {
    [
        PieceKind::Pawn,
        PieceKind::Knight,
        PieceKind::Bishop,
        PieceKind::Rook,
        PieceKind::Queen,
        PieceKind::King,
    ]
    .into_iter()
}

pub fn colors() -> impl Iterator<Item = Color> {
    [Color::White, Color::Black].into_iter()
}
