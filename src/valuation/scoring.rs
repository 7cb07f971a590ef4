// Scoring modes and the projected-points fallback chain.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::players::PlayerRecord;

/// League scoring mode: how receptions are credited.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ScoringMode {
    Standard,
    HalfPpr,
    Ppr,
}

impl ScoringMode {
    /// Parse a scoring mode string ("standard", "half-ppr"/"half_ppr", "ppr").
    pub fn from_str_mode(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "standard" | "std" => Some(ScoringMode::Standard),
            "half-ppr" | "half_ppr" | "half" => Some(ScoringMode::HalfPpr),
            "ppr" => Some(ScoringMode::Ppr),
            _ => None,
        }
    }

    pub fn display_str(&self) -> &'static str {
        match self {
            ScoringMode::Standard => "standard",
            ScoringMode::HalfPpr => "half-ppr",
            ScoringMode::Ppr => "ppr",
        }
    }
}

impl fmt::Display for ScoringMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.display_str())
    }
}

/// Projected points for a player under a scoring mode.
///
/// Precedence, first present value wins:
/// 1. PPR mode -> `ppr`
/// 2. Half-PPR mode -> `half_ppr`
/// 3. `standard` (regardless of mode)
/// 4. PPR mode -> legacy `projected_points_ppr`
/// 5. Half-PPR mode -> legacy `projected_points_half_ppr`
/// 6. legacy `projected_points`
/// 7. 0.0
///
/// The ordering is deliberate: `standard` is the universal fallback and is
/// checked before the rarer mode-specific legacy columns.
pub fn projected_points(player: &PlayerRecord, mode: ScoringMode) -> f64 {
    if mode == ScoringMode::Ppr {
        if let Some(v) = player.ppr {
            return v;
        }
    }
    if mode == ScoringMode::HalfPpr {
        if let Some(v) = player.half_ppr {
            return v;
        }
    }
    if let Some(v) = player.standard {
        return v;
    }
    if mode == ScoringMode::Ppr {
        if let Some(v) = player.projected_points_ppr {
            return v;
        }
    }
    if mode == ScoringMode::HalfPpr {
        if let Some(v) = player.projected_points_half_ppr {
            return v;
        }
    }
    player.projected_points.unwrap_or(0.0)
}
