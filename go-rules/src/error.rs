use std::fmt;

use serde::Serialize;

/// Why a placement was refused. The grid is unchanged whenever one is returned.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Rejection {
    OutOfBounds,
    Occupied,
    Ko,
    Suicide,
}

impl fmt::Display for Rejection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Rejection::OutOfBounds => write!(f, "out of bounds"),
            Rejection::Occupied => write!(f, "occupied"),
            Rejection::Ko => write!(f, "ko"),
            Rejection::Suicide => write!(f, "suicide"),
        }
    }
}

impl std::error::Error for Rejection {}

/// Answer of the non-mutating legality probe.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Reason {
    Legal,
    OutOfBounds,
    Occupied,
    Ko,
    Suicide,
}

impl Reason {
    pub fn is_legal(self) -> bool {
        self == Reason::Legal
    }
}

impl From<Rejection> for Reason {
    fn from(r: Rejection) -> Self {
        match r {
            Rejection::OutOfBounds => Reason::OutOfBounds,
            Rejection::Occupied => Reason::Occupied,
            Rejection::Ko => Reason::Ko,
            Rejection::Suicide => Reason::Suicide,
        }
    }
}

impl fmt::Display for Reason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let rejection = match self {
            Reason::Legal => return write!(f, "legal"),
            Reason::OutOfBounds => Rejection::OutOfBounds,
            Reason::Occupied => Rejection::Occupied,
            Reason::Ko => Rejection::Ko,
            Reason::Suicide => Rejection::Suicide,
        };
        write!(f, "{rejection}")
    }
}

/// Errors from the turn-tracking game layer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PlayError {
    OutOfTurn,
    GameOver,
    Rejected(Rejection),
}

impl fmt::Display for PlayError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PlayError::OutOfTurn => write!(f, "out of turn"),
            PlayError::GameOver => write!(f, "game is over"),
            PlayError::Rejected(r) => write!(f, "illegal move: {r}"),
        }
    }
}

impl std::error::Error for PlayError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            PlayError::Rejected(r) => Some(r),
            _ => None,
        }
    }
}

impl From<Rejection> for PlayError {
    fn from(r: Rejection) -> Self {
        PlayError::Rejected(r)
    }
}

#[derive(Debug)]
pub enum ConfigError {
    Parse(serde_json::Error),
    Invalid(String),
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::Parse(e) => write!(f, "invalid rules config: {e}"),
            ConfigError::Invalid(msg) => write!(f, "invalid rules config: {msg}"),
        }
    }
}

impl std::error::Error for ConfigError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ConfigError::Parse(e) => Some(e),
            ConfigError::Invalid(_) => None,
        }
    }
}

impl From<serde_json::Error> for ConfigError {
    fn from(e: serde_json::Error) -> Self {
        ConfigError::Parse(e)
    }
}
