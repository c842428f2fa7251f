//! Plain-text rendering of a session.

use crate::session::GameSession;
use strictly_grid::{Cell, WinState};

/// Formats the board as a human-readable grid.
///
/// Column numbers run along the top and row numbers down the side so
/// players can type coordinates straight from the screen.
pub fn board(session: &GameSession) -> String {
    let engine = session.engine();
    let dimension = engine.dimension();
    let ledger = engine.ledger();

    let mut result = String::from("  ");
    for col in 0..dimension {
        result.push_str(&format!(" {}", col));
    }
    result.push('\n');

    for row in 0..dimension {
        result.push_str(&format!("{:>2}", row));
        for col in 0..dimension {
            let symbol = match ledger.position_of(Cell::new(row, col)) {
                Some(index) => session.mark_at(index).to_string(),
                None => ".".to_string(),
            };
            result.push(' ');
            result.push_str(&symbol);
        }
        result.push('\n');
    }
    result
}

/// One-line summary of whose turn it is or how the game ended.
pub fn status_line(session: &GameSession) -> String {
    let engine = session.engine();
    let order = session.turn_order();

    match session.state() {
        WinState::Pending => {
            let player = session.current_player();
            format!("{} ({}) to move", player, order.mark_of(player))
        }
        WinState::Draw => "Draw".to_string(),
        WinState::PlayerOneWins | WinState::PlayerTwoWins => {
            let mut line = session.state().to_string();
            if let (Some(direction), Some(cell)) = (engine.win_direction(), engine.winning_cell()) {
                line.push_str(&format!(" along the {} from {}", direction, cell));
            }
            line
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::settings::{GameSettings, PlayMode};
    use strictly_grid::{Mark, Player};

    fn session() -> GameSession {
        let mut settings = GameSettings::new();
        settings.set_mode(PlayMode::TwoPlayer);
        GameSession::new(settings).unwrap()
    }

    #[test]
    fn test_empty_board() {
        let session = session();
        assert_eq!(board(&session), "   0 1 2\n 0 . . .\n 1 . . .\n 2 . . .\n");
    }

    #[test]
    fn test_marks_follow_settings() {
        let mut settings = GameSettings::new();
        settings.set_mode(PlayMode::TwoPlayer);
        settings.set_player_one_mark(Mark::O);
        let mut session = GameSession::new(settings).unwrap();
        session.play(Cell::new(0, 0));
        session.play(Cell::new(1, 1));
        assert_eq!(board(&session), "   0 1 2\n 0 O . .\n 1 . X .\n 2 . . .\n");
    }

    #[test]
    fn test_status_line() {
        let mut session = session();
        assert_eq!(status_line(&session), "Player 1 (X) to move");
        for (row, col) in [(0, 0), (1, 1), (0, 1), (1, 0), (0, 2)] {
            session.play(Cell::new(row, col));
        }
        assert_eq!(status_line(&session), "Player 1 wins along the row from (0, 0)");
        assert_eq!(session.current_player(), Player::PlayerTwo);
    }
}
