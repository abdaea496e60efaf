use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::error::ChessError;

/// Board coordinate. Row 0 is rank 8, row 7 is rank 1; column 0 is file a.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Square {
    row: u8,
    col: u8,
}

impl Square {
    /// Every square in row-major order (a8, b8, ..., h1).
    pub const ALL: [Square; 64] = {
        let mut all = [Square { row: 0, col: 0 }; 64];
        let mut i = 0;
        while i < 64 {
            all[i] = Square {
                row: (i / 8) as u8,
                col: (i % 8) as u8,
            };
            i += 1;
        }
        all
    };

    /// Panics if either coordinate is off the board.
    pub fn new(row: u8, col: u8) -> Self {
        assert!(
            row < 8 && col < 8,
            "Square ({}, {}) out of bounds (0-7)",
            row,
            col
        );
        Self { row, col }
    }

    /// Signed constructor used when stepping by offsets; `None` off the board.
    pub fn try_new(row: i8, col: i8) -> Option<Self> {
        if (0..8).contains(&row) && (0..8).contains(&col) {
            Some(Self {
                row: row as u8,
                col: col as u8,
            })
        } else {
            None
        }
    }

    pub fn row(self) -> u8 {
        self.row
    }

    pub fn col(self) -> u8 {
        self.col
    }

    /// Square reached by adding `(dr, dc)`, if it is still on the board.
    pub fn offset(self, dr: i8, dc: i8) -> Option<Self> {
        Self::try_new(self.row as i8 + dr, self.col as i8 + dc)
    }

    pub fn from_algebraic(text: &str) -> Result<Self, ChessError> {
        let bytes = text.as_bytes();
        if bytes.len() != 2 {
            return Err(ChessError::InvalidSquare(text.to_string()));
        }
        let file = bytes[0].to_ascii_lowercase();
        let rank = bytes[1];
        if !(b'a'..=b'h').contains(&file) || !(b'1'..=b'8').contains(&rank) {
            return Err(ChessError::InvalidSquare(text.to_string()));
        }
        Ok(Self {
            row: 8 - (rank - b'0'),
            col: file - b'a',
        })
    }

    pub fn to_algebraic(self) -> String {
        self.to_string()
    }
}

impl fmt::Display for Square {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let file = (b'a' + self.col) as char;
        let rank = (b'0' + 8 - self.row) as char;
        write!(f, "{}{}", file, rank)
    }
}

impl FromStr for Square {
    type Err = ChessError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_algebraic(s)
    }
}

// Saved games store squares in algebraic form.
impl Serialize for Square {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for Square {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let text = String::deserialize(deserializer)?;
        Square::from_algebraic(&text).map_err(serde::de::Error::custom)
    }
}
