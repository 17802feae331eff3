use thiserror::Error;

/// Snapshot problems detected before a turn is planned.
///
/// The turn logic itself never fails; these only describe inputs that break
/// the engine's contract.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum TurnError {
    #[error("player index {index} is out of range for {count} players")]
    PlayerIndex { index: usize, count: usize },
    #[error("{what} at ({x}, {y}) is outside a {size}x{size} map")]
    OutOfBounds {
        what: &'static str,
        x: u16,
        y: u16,
        size: u16,
    },
    #[error("map of size {size} needs {expected} tiles but {actual} were given")]
    MapSize {
        size: u16,
        expected: usize,
        actual: usize,
    },
    #[error("unknown tile index {0}")]
    UnknownTile(i32),
}
