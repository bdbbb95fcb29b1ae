use serde::{Deserialize, Serialize};
use serde_repr::{Deserialize_repr, Serialize_repr};
use std::fmt;
use std::ops::Neg;

/// The color of a player making a move.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Stone {
    Black,
    White,
}

impl Stone {
    pub fn opp(self) -> Self {
        match self {
            Stone::Black => Stone::White,
            Stone::White => Stone::Black,
        }
    }

    pub fn letter(self) -> &'static str {
        match self {
            Stone::Black => "B",
            Stone::White => "W",
        }
    }
}

impl Neg for Stone {
    type Output = Self;

    fn neg(self) -> Self {
        self.opp()
    }
}

impl fmt::Display for Stone {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Stone::Black => write!(f, "Black"),
            Stone::White => write!(f, "White"),
        }
    }
}

/// Content of a single grid cell. Serialized as `0`, `1` or `2`.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize_repr, Deserialize_repr,
)]
#[repr(u8)]
pub enum Color {
    #[default]
    Empty = 0,
    Black = 1,
    White = 2,
}

impl Color {
    pub fn from_int(v: u8) -> Option<Self> {
        match v {
            0 => Some(Color::Empty),
            1 => Some(Color::Black),
            2 => Some(Color::White),
            _ => None,
        }
    }

    pub fn to_int(self) -> u8 {
        self as u8
    }

    /// The stone occupying the cell, if any.
    pub fn stone(self) -> Option<Stone> {
        match self {
            Color::Empty => None,
            Color::Black => Some(Stone::Black),
            Color::White => Some(Stone::White),
        }
    }

    pub fn is_empty(self) -> bool {
        self == Color::Empty
    }
}

impl From<Stone> for Color {
    fn from(stone: Stone) -> Self {
        match stone {
            Stone::Black => Color::Black,
            Stone::White => Color::White,
        }
    }
}

impl From<Option<Stone>> for Color {
    fn from(stone: Option<Stone>) -> Self {
        stone.map_or(Color::Empty, Color::from)
    }
}
