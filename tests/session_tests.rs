//! End-to-end session tests.
//!
//! These drive a whole game through the public `Command`/`TurnOutcome`
//! boundary, the way the terminal front end does.

use pyramid_solitaire::cards::{ordered_deck, Rank};
use pyramid_solitaire::game::{Command, GameSession, TurnOutcome, BOARD_ROWS};
use pyramid_solitaire::{Coord, Face, GameRng, DECK_SIZE};

/// Fresh game: after the first update the bottom row is open, everything
/// above is hidden, and the draw pile exposes exactly one card.
#[test]
fn test_opening_position() {
    let mut session = GameSession::new(42);
    session.update();

    for (i, row) in session.board().rows().iter().enumerate() {
        for card in row {
            assert_eq!(card.is_face_up(), i == BOARD_ROWS - 1);
            assert!(!card.is_retired());
        }
    }

    assert!(session.draw_pile().current().is_face_up());
    assert_eq!(session.draw_pile().remaining(), 23);
    assert!(!session.is_won());
}

/// Advancing the draw pile hides the previous card and recycles it.
#[test]
fn test_first_draw() {
    let mut session = GameSession::new(42);
    session.update();
    let first_rank = session.draw_pile().current().rank();

    assert_eq!(session.apply(Command::Draw), TurnOutcome::Advanced);

    assert!(session.draw_pile().current().is_face_up());
    assert_eq!(session.draw_pile().remaining(), 23);

    // The previous card rejoined the queue face-down; exactly one card in
    // the whole pile shows its face
    let face_up = session.draw_pile().cards().filter(|c| c.is_face_up()).count();
    assert_eq!(face_up, 1);
    let hidden_copy = session
        .draw_pile()
        .cards()
        .any(|c| c.rank() == first_rank && !c.is_face_up());
    assert!(hidden_copy);
}

/// Board and draw pile always hold the full deck between them, four
/// copies of every rank, until a match retires something out of the cycle.
#[test]
fn test_deck_integrity_across_seeds() {
    for seed in [0, 1, 42, 1234567890] {
        let session = GameSession::new(seed);

        let total = session.board().cards().count() + session.draw_pile().cards().count();
        assert_eq!(total, DECK_SIZE);
        assert_eq!(session.board().cards().count(), 28);
        assert_eq!(session.draw_pile().cards().count(), 24);

        for rank in Rank::ALL {
            let copies = session
                .board()
                .cards()
                .chain(session.draw_pile().cards())
                .filter(|c| c.rank() == rank)
                .count();
            assert_eq!(copies, 4, "seed {seed}: expected 4 copies of {rank}");
        }
    }
}

/// Retiring both supports of a cell opens it on the next update, and the
/// opened cell renders as face content.
#[test]
fn test_reveal_propagation_through_commands() {
    // Ordered deck: bottom row is 9 9 9 8 8 8 8, and the draw pile yields
    // fives (pairing the eights) and fours (pairing the nines) on the way
    // down its ordered queue.
    let mut session = GameSession::with_deck(ordered_deck(), GameRng::new(0));
    session.update();

    // Current: 7; three more 7s, four 6s, then the first 5
    for _ in 0..8 {
        session.apply(Command::Draw);
    }
    assert_eq!(session.draw_pile().current().rank(), Rank::Five);
    session.apply(Command::Match(Coord::DRAW_PILE, Coord::new(7, 4)));

    // Next 5 pairs the eight at 7.5
    session.apply(Command::Draw);
    assert_eq!(session.draw_pile().current().rank(), Rank::Five);
    session.apply(Command::Match(Coord::DRAW_PILE, Coord::new(7, 5)));

    session.update();
    let opened = session.board().card(Coord::new(6, 4)).unwrap();
    assert!(opened.is_face_up());
    assert!(matches!(opened.face(), Face::Revealed { .. }));

    // 6.5 is supported by 7.5 and 7.6; 7.6 still stands
    assert!(!session.board().card(Coord::new(6, 5)).unwrap().is_face_up());
}

/// The winnow cheat ends the game without touching the board.
#[test]
fn test_winnow_is_a_pure_flag() {
    let mut session = GameSession::new(7);
    session.update();
    let board = session.board().clone();

    session.apply(Command::Winnow);
    assert!(session.is_won());
    assert_eq!(*session.board(), board);
}

/// Restart deals a fresh full game and drops the old one.
#[test]
fn test_restart_deals_fresh_game() {
    let mut session = GameSession::new(7);
    session.update();
    session.apply(Command::Draw);
    session.apply(Command::Winnow);

    session.apply(Command::Restart);

    assert!(!session.is_won());
    let total = session.board().cards().count() + session.draw_pile().cards().count();
    assert_eq!(total, DECK_SIZE);
    assert!(session.board().cards().all(|c| !c.is_retired()));
}

/// A scripted endgame: once the apex's supports are gone it opens, and a
/// genuine ace/dame match through the apex wins the game.
#[test]
fn test_win_by_clearing_the_apex() {
    let mut session = GameSession::with_deck(ordered_deck(), GameRng::new(0));
    session.update();

    // Ordered deck: the apex 1.1 is an ace and 4.3 is a dame. Clear every
    // other cell in rows 2..7 out of band, then let reveal propagation
    // open both survivors.
    for row in 2..=BOARD_ROWS as u32 {
        for col in 1..=row {
            if (row, col) == (4, 3) {
                continue;
            }
            session.board_mut().card_mut(Coord::new(row, col)).unwrap().retire();
        }
    }
    session.update();

    let apex = session.board().card(Coord::new(1, 1)).unwrap();
    let dame = session.board().card(Coord::new(4, 3)).unwrap();
    assert!(apex.is_face_up());
    assert_eq!(dame.rank(), Rank::Dame);
    assert!(dame.is_face_up());
    assert!(!session.is_won());

    // Ace (1) + dame (12) hit the target
    let outcome = session.apply(Command::Match(Coord::new(1, 1), Coord::new(4, 3)));
    assert_eq!(outcome, TurnOutcome::Advanced);
    assert!(session.board().card(Coord::new(1, 1)).unwrap().is_retired());
    assert!(session.is_won());
}
