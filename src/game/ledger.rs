// Copyright 2023 Sean Gillespie.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

use crate::core::{self, Piece, PieceKind};

/// The pieces one side has captured, in the order it captured them.
///
/// Captured pieces keep the attributes they had when they were taken, including the square they were taken on.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct CaptureLedger {
    pieces: Vec<Piece>,
}

impl CaptureLedger {
    pub fn new() -> CaptureLedger {
        CaptureLedger::default()
    }

    pub fn record(&mut self, piece: Piece) {
        self.pieces.push(piece);
    }

    pub fn pieces(&self) -> &[Piece] {
        &self.pieces
    }

    pub fn count(&self, kind: PieceKind) -> usize {
        self.pieces.iter().filter(|piece| piece.kind == kind).count()
    }

    /// The first kind, in pawn-to-king order, of which every opposing piece has been captured.
    ///
    /// Every kind is checked on every call, so the answer depends only on the ledger's contents and not on the order
    /// in which the pieces were captured.
    pub fn completed_kind(&self) -> Option<PieceKind> {
        core::piece_kinds().find(|&kind| self.count(kind) >= kind.starting_count())
    }

    pub fn is_winning(&self) -> bool {
        self.completed_kind().is_some()
    }

    pub fn shorthands(&self) -> Vec<String> {
        self.pieces.iter().map(Piece::shorthand).collect()
    }

    pub fn len(&self) -> usize {
        self.pieces.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pieces.is_empty()
    }
}
