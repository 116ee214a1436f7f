//! The game session: command intake, coordinate resolution, matching rule.
//!
//! A session owns one draw pile and one board for its whole lifetime and
//! drives every state transition through [`GameSession::apply`]. The
//! presentation layer parses raw text into a [`Command`] and renders the
//! [`TurnOutcome`]; nothing else crosses the boundary.
//!
//! ## Coordinate addressing
//!
//! `0.0` addresses the draw pile's exposed card; `r.c` with `1 <= r <= 7`
//! and `1 <= c <= r` addresses a board cell. Anything else resolves to no
//! card, and a match naming an unresolvable card is silently ignored.

use serde::{Deserialize, Serialize};

use crate::cards::{standard_deck, Card, Coord, DECK_SIZE};
use crate::core::rng::GameRng;

use super::board::Board;
use super::draw_pile::DrawPile;

/// A parsed player command.
///
/// The presentation layer owns turning raw text into one of these;
/// unrecognized input never becomes a `Command`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Command {
    /// Advance the draw pile (empty input).
    Draw,
    /// Cheat: force the win screen.
    Winnow,
    /// Reshuffle and redeal.
    Restart,
    /// Terminate the process.
    Exit,
    /// Show the rules text.
    Rules,
    /// Attempt a match between two addressed cards.
    Match(Coord, Coord),
}

/// What the presentation layer should do after a command.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TurnOutcome {
    /// The turn ended; re-run reveal propagation and re-render.
    Advanced,
    /// Display the rules text, then prompt again within the same turn.
    ShowRules,
    /// No-op (unresolvable coordinates); prompt again.
    Ignored,
    /// The player asked to leave.
    Exit,
}

/// Internal handle into the unified addressable-card space.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Slot {
    /// The draw pile's exposed card.
    Current,
    /// A board cell, 1-indexed.
    Cell(Coord),
}

/// One game of pyramid solitaire.
///
/// Owns the draw pile and board exclusively; restart discards both and
/// deals fresh ones from the next shuffle of the session's RNG stream.
#[derive(Clone, Debug)]
pub struct GameSession {
    board: Board,
    draw_pile: DrawPile,
    revealed_all: bool,
    rng: GameRng,
}

impl GameSession {
    /// Start a session with a fixed seed.
    #[must_use]
    pub fn new(seed: u64) -> Self {
        Self::from_rng(GameRng::new(seed))
    }

    /// Start a session from an existing RNG.
    #[must_use]
    pub fn from_rng(mut rng: GameRng) -> Self {
        let deck = standard_deck(&mut rng);
        Self::with_deck(deck, rng)
    }

    /// Start a session from a pre-shuffled full deck.
    ///
    /// Card order is the caller's responsibility; the RNG is only used for
    /// later restarts. Panics unless the deck holds exactly
    /// [`DECK_SIZE`] cards.
    #[must_use]
    pub fn with_deck(mut deck: Vec<Card>, rng: GameRng) -> Self {
        assert_eq!(
            deck.len(),
            DECK_SIZE,
            "session requires a full {DECK_SIZE}-card deck"
        );

        let board = Board::generate(&mut deck);
        let draw_pile = DrawPile::new(deck);
        log::info!("dealt a new game (seed {})", rng.seed());

        Self {
            board,
            draw_pile,
            revealed_all: false,
            rng,
        }
    }

    /// Discard the current deal and start over from a fresh shuffle.
    pub fn restart(&mut self) {
        let mut deck = standard_deck(&mut self.rng);
        self.board = Board::generate(&mut deck);
        self.draw_pile = DrawPile::new(deck);
        self.revealed_all = false;
        log::info!("session restarted");
    }

    /// Recompute board face-up states. Call once per turn, before rendering.
    pub fn update(&mut self) {
        self.board.update();
    }

    /// Has the game been won (apex retired, or the cheat flag set)?
    #[must_use]
    pub fn is_won(&self) -> bool {
        self.revealed_all || self.board.is_cleared()
    }

    #[must_use]
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Mutable board access, for scripted setups and tests.
    pub fn board_mut(&mut self) -> &mut Board {
        &mut self.board
    }

    #[must_use]
    pub fn draw_pile(&self) -> &DrawPile {
        &self.draw_pile
    }

    /// Apply one parsed command. The single state-transition entry point.
    pub fn apply(&mut self, command: Command) -> TurnOutcome {
        match command {
            Command::Draw => {
                self.draw_pile.advance();
                TurnOutcome::Advanced
            }
            Command::Winnow => {
                log::info!("winnow: forcing the win screen");
                self.revealed_all = true;
                TurnOutcome::Advanced
            }
            Command::Restart => {
                self.restart();
                TurnOutcome::Advanced
            }
            Command::Exit => TurnOutcome::Exit,
            Command::Rules => TurnOutcome::ShowRules,
            Command::Match(a, b) => match (self.resolve(a), self.resolve(b)) {
                (Some(x), Some(y)) => {
                    self.try_match(x, y);
                    TurnOutcome::Advanced
                }
                _ => {
                    log::debug!("ignored match with unresolvable coordinates {a} {b}");
                    TurnOutcome::Ignored
                }
            },
        }
    }

    /// Resolve a coordinate over the unified addressable-card space.
    fn resolve(&self, coord: Coord) -> Option<Slot> {
        if coord.is_draw_pile() {
            Some(Slot::Current)
        } else {
            self.board.card(coord).map(|_| Slot::Cell(coord))
        }
    }

    fn card(&self, slot: Slot) -> &Card {
        match slot {
            Slot::Current => self.draw_pile.current(),
            Slot::Cell(coord) => self
                .board
                .card(coord)
                .expect("resolved slot must stay addressable"),
        }
    }

    fn retire(&mut self, slot: Slot) {
        match slot {
            Slot::Current => self.draw_pile.current_mut().retire(),
            Slot::Cell(coord) => self
                .board
                .card_mut(coord)
                .expect("resolved slot must stay addressable")
                .retire(),
        }
    }

    /// The matching rule: a single atomic check-and-retire.
    ///
    /// Both cards must be face-up and unretired, and their ranks must pair
    /// under the weight rule. Both slots naming the same card is legal —
    /// that is how a lone king retires itself. On failure nothing changes.
    fn try_match(&mut self, a: Slot, b: Slot) -> bool {
        let (ca, cb) = (self.card(a), self.card(b));

        let matched = ca.is_face_up()
            && cb.is_face_up()
            && !ca.is_retired()
            && !cb.is_retired()
            && ca.rank().pairs_with(cb.rank());

        if matched {
            log::debug!("retired {} and {}", ca.coord(), cb.coord());
            self.retire(a);
            self.retire(b);
        }
        matched
    }
}
