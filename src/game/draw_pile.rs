//! The draw pile: an ordered queue plus one exposed card.
//!
//! Cards cycle rather than vanish: advancing pushes the exposed card back
//! onto the far end of the queue face-down and pops the next one face-up.
//! The one exception is a retired exposed card, which is discarded instead
//! of recycled — once matched it never re-enters the cycle.

use std::collections::VecDeque;

use serde::{Deserialize, Serialize};

use crate::cards::Card;

/// The draw pile.
///
/// ## Invariant
///
/// Exactly one card is exposed as `current` from construction onward; every
/// other undealt card sits in the queue. The back of the queue is the draw
/// end, the front receives recycled cards.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct DrawPile {
    queue: VecDeque<Card>,
    current: Option<Card>,
}

impl DrawPile {
    /// Build a draw pile from the cards left after the board deal and
    /// expose the first card.
    ///
    /// Panics on an empty deck. That is a programmer error: with a fixed
    /// 52-card deck and a 28-card board there are always 24 cards here.
    #[must_use]
    pub fn new(deck: Vec<Card>) -> Self {
        assert!(!deck.is_empty(), "draw pile initialized from an empty deck");

        let mut pile = Self {
            queue: deck.into(),
            current: None,
        };
        pile.advance();
        pile
    }

    /// Cycle to the next card.
    ///
    /// A non-retired exposed card flips face-down and rejoins the front of
    /// the queue; a retired one is dropped. The next card pops from the
    /// back and flips face-up.
    pub fn advance(&mut self) {
        if let Some(mut prev) = self.current.take() {
            if !prev.is_retired() {
                prev.set_face_up(false);
                self.queue.push_front(prev);
            }
        }

        let mut next = self
            .queue
            .pop_back()
            .expect("draw pile exhausted: no card left to expose");
        next.set_face_up(true);
        self.current = Some(next);
    }

    /// The exposed card.
    #[must_use]
    pub fn current(&self) -> &Card {
        self.current
            .as_ref()
            .expect("draw pile has no exposed card before initialization")
    }

    /// Mutable access to the exposed card.
    pub fn current_mut(&mut self) -> &mut Card {
        self.current
            .as_mut()
            .expect("draw pile has no exposed card before initialization")
    }

    /// Cards waiting in the queue (excludes the exposed card).
    #[must_use]
    pub fn remaining(&self) -> usize {
        self.queue.len()
    }

    /// Iterate over every held card, exposed card first.
    pub fn cards(&self) -> impl Iterator<Item = &Card> {
        self.current.iter().chain(self.queue.iter())
    }
}
