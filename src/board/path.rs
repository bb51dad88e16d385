// Copyright 2017-2023 Sean Gillespie.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! Line-of-sight checks for sliding pieces.

use crate::board::Board;
use crate::core::{Direction, Square};

/// The squares strictly between two squares that share a file, rank, or diagonal, walked from the start outwards.
///
/// Adjacent squares have nothing between them, so their ray is empty. A ray visits at most six squares.
#[derive(Clone, Debug)]
pub struct Ray {
    next: Option<Square>,
    end: Square,
    dir: Direction,
}

impl Ray {
    /// Returns `None` if `start` and `end` are the same square or are not aligned.
    pub fn between(start: Square, end: Square) -> Option<Ray> {
        let dir = Direction::between(start, end)?;
        Some(Ray {
            next: start.towards(dir),
            end,
            dir,
        })
    }
}

impl Iterator for Ray {
    type Item = Square;

    fn next(&mut self) -> Option<Square> {
        let sq = self.next?;
        if sq == self.end {
            self.next = None;
            return None;
        }

        self.next = sq.towards(self.dir);
        Some(sq)
    }
}

impl Board {
    /// Returns true if no piece stands strictly between `start` and `end`.
    ///
    /// The squares must share a file, rank, or diagonal; anything else has no line to walk and is reported blocked.
    pub fn is_path_clear(&self, start: Square, end: Square) -> bool {
        match Ray::between(start, end) {
            Some(mut ray) => ray.all(|sq| !self.is_occupied(sq)),
            None => false,
        }
    }
}
