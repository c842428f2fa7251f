//! Parsing of typed commands.

use strictly_grid::Cell;

/// A command typed at the prompt.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Place a mark at the cell.
    Play(Cell),
    /// Start a new game.
    Restart,
    /// Show the command summary.
    Help,
    /// Leave the game.
    Quit,
    /// Blank line.
    Empty,
    /// Anything that could not be understood.
    Invalid(String),
}

/// Help text for the prompt.
pub const HELP: &str = "Commands: <row> <col> | restart | help | quit";

/// Parses one input line.
///
/// Coordinates may be separated by spaces or a comma, e.g. `1 2` or `1,2`.
pub fn parse(line: &str) -> Command {
    let line = line.trim();
    match line.to_lowercase().as_str() {
        "" => return Command::Empty,
        "q" | "quit" | "exit" => return Command::Quit,
        "r" | "restart" | "new" => return Command::Restart,
        "h" | "help" | "?" => return Command::Help,
        _ => {}
    }

    let parts: Vec<&str> = line
        .split(|c: char| c.is_whitespace() || c == ',')
        .filter(|part| !part.is_empty())
        .collect();

    match parts.as_slice() {
        [row, col] => match (row.parse::<usize>(), col.parse::<usize>()) {
            (Ok(row), Ok(col)) => Command::Play(Cell::new(row, col)),
            _ => Command::Invalid(format!("Not a coordinate: {}", line)),
        },
        _ => Command::Invalid(format!("Unknown command: {}", line)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_coordinates() {
        assert_eq!(parse("1 2"), Command::Play(Cell::new(1, 2)));
        assert_eq!(parse(" 0,3 "), Command::Play(Cell::new(0, 3)));
        assert_eq!(parse("2, 2"), Command::Play(Cell::new(2, 2)));
    }

    #[test]
    fn test_keywords() {
        assert_eq!(parse("Quit"), Command::Quit);
        assert_eq!(parse("restart"), Command::Restart);
        assert_eq!(parse("?"), Command::Help);
        assert_eq!(parse("   "), Command::Empty);
    }

    #[test]
    fn test_invalid() {
        assert!(matches!(parse("a b"), Command::Invalid(_)));
        assert!(matches!(parse("-1 2"), Command::Invalid(_)));
        assert!(matches!(parse("1 2 3"), Command::Invalid(_)));
    }
}
