//! Tests for session turn arbitration.

use strictly_grid::{Cell, Mark, Player, WinDirection, WinState};
use strictly_grid_play::{GameSession, GameSettings, PlayMode, PlayOutcome, ScheduledMove};

fn session_with(first: Player, mode: PlayMode) -> GameSession {
    let mut settings = GameSettings::new();
    settings.set_first_player(first);
    settings.set_mode(mode);
    GameSession::new(settings).unwrap()
}

#[test]
fn test_second_player_first_wins_as_player_two() {
    let mut session = session_with(Player::PlayerTwo, PlayMode::TwoPlayer);
    let moves = [(0, 0), (1, 1), (0, 1), (1, 0)];
    for (row, col) in moves {
        assert!(matches!(
            session.play(Cell::new(row, col)),
            PlayOutcome::Continue { .. }
        ));
    }
    assert_eq!(
        session.play(Cell::new(0, 2)),
        PlayOutcome::Won {
            winner: Player::PlayerTwo,
            direction: WinDirection::Row,
            cell: Cell::new(0, 0),
        }
    );
    assert_eq!(session.state(), WinState::PlayerTwoWins);
}

#[test]
fn test_draw_ends_game() {
    let mut session = session_with(Player::PlayerOne, PlayMode::TwoPlayer);
    let moves = [(0, 0), (0, 1), (0, 2), (1, 1), (1, 0), (2, 0), (2, 1), (1, 2)];
    for (row, col) in moves {
        session.play(Cell::new(row, col));
    }
    assert_eq!(session.play(Cell::new(2, 2)), PlayOutcome::Draw);
    assert!(session.is_game_over());
    assert!(!session.is_automated_turn());
}

#[test]
fn test_generation_changes_when_game_ends() {
    let mut session = session_with(Player::PlayerOne, PlayMode::SinglePlayer);
    let start = session.generation();
    for (row, col) in [(0, 0), (1, 1), (0, 1), (1, 0)] {
        session.play(Cell::new(row, col));
    }
    assert_eq!(session.generation(), start);
    session.play(Cell::new(0, 2));
    assert_ne!(session.generation(), start);
}

#[test]
fn test_automated_move_is_legal() {
    let mut session = session_with(Player::PlayerOne, PlayMode::SinglePlayer);
    session.play(Cell::new(0, 0));
    assert!(session.is_automated_turn());
    let cell = session.automated_move().unwrap();
    assert!(!session.engine().moves().contains(&cell));
    assert!(matches!(session.play(cell), PlayOutcome::Continue { .. }));
}

#[test]
fn test_restart_applies_new_settings() {
    let mut session = session_with(Player::PlayerOne, PlayMode::TwoPlayer);
    session.play(Cell::new(0, 0));

    let mut settings = session.settings().clone();
    settings.set_dimension(4);
    settings.set_first_player(Player::PlayerTwo);
    settings.set_player_one_mark(Mark::O);
    session.update_settings(settings);
    session.restart().unwrap();

    assert_eq!(session.engine().dimension(), 4);
    assert_eq!(session.current_player(), Player::PlayerTwo);
    assert_eq!(session.mark_at(0), Mark::X);
}

#[test]
fn test_invalid_dimension_rejected() {
    let mut settings = GameSettings::new();
    settings.set_dimension(2);
    assert!(GameSession::new(settings).is_err());
}

#[test]
fn test_scheduled_move_stale_after_game_ends() {
    let mut session = session_with(Player::PlayerOne, PlayMode::SinglePlayer);
    session.play(Cell::new(0, 0));
    let scheduled = ScheduledMove::new(session.generation());
    assert!(session.accepts(scheduled));

    for (row, col) in [(1, 0), (0, 1), (1, 1), (0, 2)] {
        session.play(Cell::new(row, col));
    }
    assert_eq!(session.state(), WinState::PlayerOneWins);
    assert!(!session.accepts(scheduled));
    assert!(!session.accepts(ScheduledMove::new(session.generation())));
}
