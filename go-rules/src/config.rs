use serde::{Deserialize, Serialize};

use crate::error::ConfigError;

pub const MIN_BOARD_SIZE: u8 = 2;
pub const MAX_BOARD_SIZE: u8 = 19;

/// Thresholds behind the 0..=3 safety rating. These are heuristics, not theory.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SafetyThresholds {
    /// Eyes needed for a rating of 3.
    pub safe_eyes: u32,
    /// Eyes needed (together with `stable_liberties`) for a rating of 2.
    pub stable_eyes: u32,
    pub stable_liberties: u32,
    /// Liberties alone that earn a rating of 1.
    pub weak_liberties: u32,
    /// Liberties that, with `stable_eyes` eyes, earn a rating of 1.
    pub weak_eye_liberties: u32,
}

impl Default for SafetyThresholds {
    fn default() -> Self {
        SafetyThresholds {
            safe_eyes: 2,
            stable_eyes: 1,
            stable_liberties: 3,
            weak_liberties: 3,
            weak_eye_liberties: 2,
        }
    }
}

impl SafetyThresholds {
    pub fn rate(&self, eyes: u32, liberties: u32) -> u8 {
        if eyes >= self.safe_eyes {
            3
        } else if eyes == self.stable_eyes && liberties >= self.stable_liberties {
            2
        } else if liberties >= self.weak_liberties
            || (eyes == self.stable_eyes && liberties >= self.weak_eye_liberties)
        {
            1
        } else {
            0
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RulesConfig {
    pub board_size: u8,
    pub influence_radius: u8,
    pub capture_search_depth: u8,
    /// Bonus for White, applied only when the game layer compares totals.
    pub komi: f64,
    pub safety: SafetyThresholds,
}

impl Default for RulesConfig {
    fn default() -> Self {
        RulesConfig {
            board_size: 9,
            influence_radius: 2,
            capture_search_depth: 3,
            komi: 3.5,
            safety: SafetyThresholds::default(),
        }
    }
}

impl RulesConfig {
    pub fn with_board_size(board_size: u8) -> Self {
        RulesConfig {
            board_size,
            ..Default::default()
        }
    }

    /// Parse a JSON document. Missing fields fall back to their defaults.
    pub fn from_json(text: &str) -> Result<Self, ConfigError> {
        let config: RulesConfig = serde_json::from_str(text)?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if !(MIN_BOARD_SIZE..=MAX_BOARD_SIZE).contains(&self.board_size) {
            return Err(ConfigError::Invalid(format!(
                "board_size must be between {MIN_BOARD_SIZE} and {MAX_BOARD_SIZE}, got {}",
                self.board_size
            )));
        }
        if !self.komi.is_finite() {
            return Err(ConfigError::Invalid("komi must be finite".to_string()));
        }
        if self.safety.stable_eyes >= self.safety.safe_eyes {
            return Err(ConfigError::Invalid(
                "safety.stable_eyes must be below safety.safe_eyes".to_string(),
            ));
        }
        Ok(())
    }
}
