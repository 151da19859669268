//! Board representation for the 3×3×3 cube
//!
//! Cells are addressed by `(x, y, z)` triples and stored in a flat array
//! indexed `x * 9 + y * 3 + z`. A cell, once marked, keeps its mark until
//! the board is reset.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::EngineError;

/// Length of one cube edge
pub const SIZE: u8 = 3;

/// Total number of cells on the board
pub const CELLS: usize = 27;

/// A player symbol
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Player {
    X,
    O,
}

impl Player {
    /// The other player
    pub fn opponent(self) -> Self {
        match self {
            Player::X => Player::O,
            Player::O => Player::X,
        }
    }
}

impl fmt::Display for Player {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Player::X => write!(f, "X"),
            Player::O => write!(f, "O"),
        }
    }
}

/// A validated cell coordinate, every axis in `0..=2`
///
/// Deserialization goes through [`Coord::new`], so out-of-range axes are
/// rejected there too.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "RawCoord")]
pub struct Coord {
    x: u8,
    y: u8,
    z: u8,
}

/// Unchecked wire form of a coordinate
#[derive(Deserialize)]
struct RawCoord {
    x: u8,
    y: u8,
    z: u8,
}

impl TryFrom<RawCoord> for Coord {
    type Error = EngineError;

    fn try_from(raw: RawCoord) -> Result<Self, Self::Error> {
        Coord::new(raw.x, raw.y, raw.z)
    }
}

impl Coord {
    /// Create a coordinate, rejecting any axis outside `0..=2`
    pub fn new(x: u8, y: u8, z: u8) -> Result<Self, EngineError> {
        if x >= SIZE || y >= SIZE || z >= SIZE {
            return Err(EngineError::InvalidCoordinate { x, y, z });
        }
        Ok(Self { x, y, z })
    }

    /// Build a coordinate from trusted constants (line table construction)
    pub(crate) const fn from_parts(x: u8, y: u8, z: u8) -> Self {
        Self { x, y, z }
    }

    /// Rebuild a coordinate from its flat index
    pub fn from_index(index: usize) -> Option<Self> {
        if index >= CELLS {
            return None;
        }
        let i = index as u8;
        Some(Self {
            x: i / 9,
            y: (i / 3) % 3,
            z: i % 3,
        })
    }

    pub fn x(&self) -> u8 {
        self.x
    }

    pub fn y(&self) -> u8 {
        self.y
    }

    pub fn z(&self) -> u8 {
        self.z
    }

    /// Flat index into the board array
    pub fn index(&self) -> usize {
        (self.x as usize) * 9 + (self.y as usize) * 3 + self.z as usize
    }

    /// All 27 coordinates, x-major then y then z
    pub fn all() -> impl Iterator<Item = Coord> {
        (0..CELLS).filter_map(Coord::from_index)
    }
}

impl fmt::Display for Coord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {}, {})", self.x, self.y, self.z)
    }
}

impl FromStr for Coord {
    type Err = EngineError;

    /// Parses `"x y z"`, `"x,y,z"` or any mix of commas and whitespace
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let parts: Vec<&str> = s
            .split(|c: char| c == ',' || c.is_whitespace())
            .filter(|p| !p.is_empty())
            .collect();

        if parts.len() != 3 {
            return Err(EngineError::Parse(format!(
                "expected three axes, got {}",
                parts.len()
            )));
        }

        let mut axes = [0u8; 3];
        for (axis, part) in axes.iter_mut().zip(&parts) {
            *axis = part
                .parse()
                .map_err(|_| EngineError::Parse(format!("'{}' is not a small integer", part)))?;
        }

        Coord::new(axes[0], axes[1], axes[2])
    }
}

/// The 27-cell board plus its mark counter
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Board {
    cells: [Option<Player>; CELLS],
    marks: u8,
}

impl Board {
    /// Create an empty board
    pub fn new() -> Self {
        Self {
            cells: [None; CELLS],
            marks: 0,
        }
    }

    /// Occupancy of a cell
    pub fn get(&self, coord: Coord) -> Option<Player> {
        self.cells[coord.index()]
    }

    /// Occupancy of a cell addressed by raw axis values
    pub fn get_xyz(&self, x: u8, y: u8, z: u8) -> Result<Option<Player>, EngineError> {
        Coord::new(x, y, z).map(|coord| self.get(coord))
    }

    /// Mark an empty cell for `player`
    pub fn set(&mut self, coord: Coord, player: Player) -> Result<(), EngineError> {
        let cell = &mut self.cells[coord.index()];
        if cell.is_some() {
            return Err(EngineError::CellOccupied(coord));
        }
        *cell = Some(player);
        self.marks += 1;
        Ok(())
    }

    /// Clear every cell and the mark counter
    pub fn reset(&mut self) {
        self.cells = [None; CELLS];
        self.marks = 0;
    }

    pub fn is_empty_at(&self, coord: Coord) -> bool {
        self.get(coord).is_none()
    }

    /// Coordinates of all empty cells in board order
    pub fn empty_cells(&self) -> Vec<Coord> {
        Coord::all().filter(|&c| self.is_empty_at(c)).collect()
    }

    /// Number of marks placed since the last reset
    pub fn marks(&self) -> u8 {
        self.marks
    }

    /// Number of empty cells
    pub fn remaining(&self) -> u8 {
        CELLS as u8 - self.marks
    }

    pub fn is_full(&self) -> bool {
        self.marks as usize == CELLS
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for Board {
    /// Renders the three z-layers side by side, y rows top to bottom
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "  z=0     z=1     z=2")?;
        for y in 0..SIZE {
            let mut row = String::new();
            for z in 0..SIZE {
                if z > 0 {
                    row.push_str("   ");
                }
                row.push_str("  ");
                for x in 0..SIZE {
                    let symbol = match self.get(Coord::from_parts(x, y, z)) {
                        Some(Player::X) => 'X',
                        Some(Player::O) => 'O',
                        None => '.',
                    };
                    row.push(symbol);
                    if x < SIZE - 1 {
                        row.push(' ');
                    }
                }
            }
            writeln!(f, "{}", row.trim_end())?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn c(x: u8, y: u8, z: u8) -> Coord {
        Coord::new(x, y, z).unwrap()
    }

    #[test]
    fn test_coord_validation() {
        assert!(Coord::new(2, 2, 2).is_ok());
        assert_eq!(
            Coord::new(3, 0, 1),
            Err(EngineError::InvalidCoordinate { x: 3, y: 0, z: 1 })
        );
        assert!(Coord::new(0, 0, 7).is_err());
    }

    #[test]
    fn test_coord_index_mapping() {
        assert_eq!(c(0, 0, 0).index(), 0);
        assert_eq!(c(1, 2, 0).index(), 15);
        assert_eq!(c(2, 2, 2).index(), 26);

        for (i, coord) in Coord::all().enumerate() {
            assert_eq!(coord.index(), i);
        }
        assert_eq!(Coord::all().count(), CELLS);
        assert_eq!(Coord::from_index(27), None);
    }

    #[test]
    fn test_coord_parsing() {
        assert_eq!("0 1 2".parse::<Coord>(), Ok(c(0, 1, 2)));
        assert_eq!("2,2,0".parse::<Coord>(), Ok(c(2, 2, 0)));
        assert_eq!(" 1, 1 ,1 ".parse::<Coord>(), Ok(c(1, 1, 1)));

        assert!(matches!("1 2".parse::<Coord>(), Err(EngineError::Parse(_))));
        assert!(matches!("a b c".parse::<Coord>(), Err(EngineError::Parse(_))));
        assert!(matches!(
            "0 0 3".parse::<Coord>(),
            Err(EngineError::InvalidCoordinate { .. })
        ));
    }

    #[test]
    fn test_coord_deserialization_validates_axes() {
        let coord: Coord = serde_json::from_str(r#"{"x":1,"y":2,"z":0}"#).unwrap();
        assert_eq!(coord, c(1, 2, 0));
        assert_eq!(serde_json::to_string(&coord).unwrap(), r#"{"x":1,"y":2,"z":0}"#);

        let err = serde_json::from_str::<Coord>(r#"{"x":5,"y":0,"z":0}"#).unwrap_err();
        assert!(err.to_string().contains("Invalid coordinate"), "{}", err);
        assert!(serde_json::from_str::<Coord>(r#"{"x":0,"y":0,"z":3}"#).is_err());
    }

    #[test]
    fn test_new_board_is_empty() {
        let board = Board::new();
        assert_eq!(board.marks(), 0);
        assert_eq!(board.remaining(), 27);
        assert_eq!(board.empty_cells().len(), 27);
        assert!(!board.is_full());
    }

    #[test]
    fn test_set_and_get() {
        let mut board = Board::new();
        board.set(c(1, 1, 1), Player::X).unwrap();

        assert_eq!(board.get(c(1, 1, 1)), Some(Player::X));
        assert_eq!(board.get(c(0, 0, 0)), None);
        assert_eq!(board.marks(), 1);
        assert_eq!(board.get_xyz(1, 1, 1), Ok(Some(Player::X)));
        assert!(board.get_xyz(1, 5, 1).is_err());
    }

    #[test]
    fn test_set_occupied_cell_fails() {
        let mut board = Board::new();
        board.set(c(0, 2, 1), Player::O).unwrap();

        let before = board.clone();
        assert_eq!(
            board.set(c(0, 2, 1), Player::X),
            Err(EngineError::CellOccupied(c(0, 2, 1)))
        );
        assert_eq!(board, before);
    }

    #[test]
    fn test_reset_clears_board() {
        let mut board = Board::new();
        for coord in Coord::all().take(5) {
            board.set(coord, Player::X).unwrap();
        }
        board.reset();
        assert_eq!(board, Board::new());
    }

    #[test]
    fn test_fill_board() {
        let mut board = Board::new();
        let mut player = Player::X;
        for coord in Coord::all() {
            board.set(coord, player).unwrap();
            player = player.opponent();
        }
        assert!(board.is_full());
        assert_eq!(board.remaining(), 0);
        assert!(board.empty_cells().is_empty());
    }

    #[test]
    fn test_board_display() {
        let mut board = Board::new();
        board.set(c(0, 0, 0), Player::X).unwrap();
        board.set(c(2, 1, 2), Player::O).unwrap();

        let rendered = board.to_string();
        let lines: Vec<&str> = rendered.lines().collect();
        assert_eq!(lines.len(), 4);
        assert!(lines[1].starts_with("  X . ."));
        assert!(lines[2].ends_with(". . O"));
    }
}
