// Football positions and roster slot semantics.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Roster positions used for slot assignment and recommendations.
///
/// FLEX is a virtual slot fillable by any of RB/WR/TE; Bench accepts any
/// position. Neither has its own projection pool.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Position {
    #[serde(rename = "QB")]
    Quarterback,
    #[serde(rename = "RB")]
    RunningBack,
    #[serde(rename = "WR")]
    WideReceiver,
    #[serde(rename = "TE")]
    TightEnd,
    #[serde(rename = "K")]
    Kicker,
    #[serde(rename = "DST")]
    Defense,
    #[serde(rename = "FLEX")]
    Flex,
    #[serde(rename = "BN", alias = "Bench", alias = "BENCH")]
    Bench,
}

/// The six positions with their own projection pool, in file order.
pub const CONCRETE_POSITIONS: &[Position] = &[
    Position::Quarterback,
    Position::RunningBack,
    Position::WideReceiver,
    Position::TightEnd,
    Position::Kicker,
    Position::Defense,
];

/// Positions eligible to fill a FLEX slot.
pub const FLEX_ELIGIBLE: &[Position] = &[
    Position::RunningBack,
    Position::WideReceiver,
    Position::TightEnd,
];

/// The positions the predictor chooses between, in feature-vector order.
pub const MODEL_POSITIONS: &[Position] = &[
    Position::Quarterback,
    Position::RunningBack,
    Position::WideReceiver,
    Position::TightEnd,
    Position::Kicker,
    Position::Flex,
];

impl Position {
    /// Parse a position string into a Position enum.
    ///
    /// Accepts the standard abbreviations plus a few variants:
    /// - "DST"/"DEF" -> Defense
    /// - "BN"/"BE"/"BENCH" -> Bench
    pub fn from_str_pos(s: &str) -> Option<Self> {
        match s.to_uppercase().as_str() {
            "QB" => Some(Position::Quarterback),
            "RB" => Some(Position::RunningBack),
            "WR" => Some(Position::WideReceiver),
            "TE" => Some(Position::TightEnd),
            "K" => Some(Position::Kicker),
            "DST" | "DEF" => Some(Position::Defense),
            "FLEX" => Some(Position::Flex),
            "BN" | "BE" | "BENCH" => Some(Position::Bench),
            _ => None,
        }
    }

    /// Return the display string for this position.
    pub fn display_str(&self) -> &'static str {
        match self {
            Position::Quarterback => "QB",
            Position::RunningBack => "RB",
            Position::WideReceiver => "WR",
            Position::TightEnd => "TE",
            Position::Kicker => "K",
            Position::Defense => "DST",
            Position::Flex => "FLEX",
            Position::Bench => "BN",
        }
    }

    /// Whether this position has its own projection pool.
    pub fn is_concrete(&self) -> bool {
        !matches!(self, Position::Flex | Position::Bench)
    }

    /// Whether players at this position may occupy a FLEX slot.
    pub fn is_flex_eligible(&self) -> bool {
        matches!(
            self,
            Position::RunningBack | Position::WideReceiver | Position::TightEnd
        )
    }

    /// Projection CSV file name for this position, if it has one.
    pub fn projection_file(&self) -> Option<&'static str> {
        match self {
            Position::Quarterback => Some("qb_projections.csv"),
            Position::RunningBack => Some("rb_projections.csv"),
            Position::WideReceiver => Some("wr_projections.csv"),
            Position::TightEnd => Some("te_projections.csv"),
            Position::Kicker => Some("k_projections.csv"),
            Position::Defense => Some("dst_projections.csv"),
            Position::Flex | Position::Bench => None,
        }
    }

}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.display_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn from_str_pos_standard_positions() {
        assert_eq!(Position::from_str_pos("QB"), Some(Position::Quarterback));
        assert_eq!(Position::from_str_pos("RB"), Some(Position::RunningBack));
        assert_eq!(Position::from_str_pos("WR"), Some(Position::WideReceiver));
        assert_eq!(Position::from_str_pos("TE"), Some(Position::TightEnd));
        assert_eq!(Position::from_str_pos("K"), Some(Position::Kicker));
        assert_eq!(Position::from_str_pos("DST"), Some(Position::Defense));
    }

    #[test]
    fn from_str_pos_variants() {
        assert_eq!(Position::from_str_pos("DEF"), Some(Position::Defense));
        assert_eq!(Position::from_str_pos("BN"), Some(Position::Bench));
        assert_eq!(Position::from_str_pos("BE"), Some(Position::Bench));
        assert_eq!(Position::from_str_pos("BENCH"), Some(Position::Bench));
        assert_eq!(Position::from_str_pos("FLEX"), Some(Position::Flex));
    }

    #[test]
    fn from_str_pos_case_insensitive() {
        assert_eq!(Position::from_str_pos("qb"), Some(Position::Quarterback));
        assert_eq!(Position::from_str_pos("Flex"), Some(Position::Flex));
        assert_eq!(Position::from_str_pos("dst"), Some(Position::Defense));
    }

    #[test]
    fn from_str_pos_invalid() {
        assert_eq!(Position::from_str_pos("XX"), None);
        assert_eq!(Position::from_str_pos(""), None);
        assert_eq!(Position::from_str_pos("QB1"), None);
    }

    #[test]
    fn display_str_roundtrip() {
        let positions = [
            Position::Quarterback,
            Position::RunningBack,
            Position::WideReceiver,
            Position::TightEnd,
            Position::Kicker,
            Position::Defense,
            Position::Flex,
            Position::Bench,
        ];
        for pos in positions {
            let s = pos.display_str();
            assert_eq!(Position::from_str_pos(s), Some(pos), "roundtrip failed for {}", s);
        }
    }

    #[test]
    fn concrete_positions_exclude_virtual_slots() {
        assert_eq!(CONCRETE_POSITIONS.len(), 6);
        assert!(!CONCRETE_POSITIONS.contains(&Position::Flex));
        assert!(!CONCRETE_POSITIONS.contains(&Position::Bench));
        for pos in CONCRETE_POSITIONS {
            assert!(pos.is_concrete());
        }
    }

    #[test]
    fn flex_eligibility() {
        assert!(Position::RunningBack.is_flex_eligible());
        assert!(Position::WideReceiver.is_flex_eligible());
        assert!(Position::TightEnd.is_flex_eligible());
        assert!(!Position::Quarterback.is_flex_eligible());
        assert!(!Position::Kicker.is_flex_eligible());
        assert!(!Position::Defense.is_flex_eligible());
        assert!(!Position::Flex.is_flex_eligible());
        assert!(!Position::Bench.is_flex_eligible());
    }

    #[test]
    fn projection_files() {
        assert_eq!(
            Position::Quarterback.projection_file(),
            Some("qb_projections.csv")
        );
        assert_eq!(Position::Defense.projection_file(), Some("dst_projections.csv"));
        assert_eq!(Position::Flex.projection_file(), None);
        assert_eq!(Position::Bench.projection_file(), None);
    }

    #[test]
    fn model_positions_order() {
        // The predictor contract: QB, RB, WR, TE, K, FLEX.
        assert_eq!(
            MODEL_POSITIONS,
            &[
                Position::Quarterback,
                Position::RunningBack,
                Position::WideReceiver,
                Position::TightEnd,
                Position::Kicker,
                Position::Flex,
            ]
        );
    }

    #[test]
    fn serde_renames() {
        let json = serde_json::to_string(&Position::Quarterback).unwrap();
        assert_eq!(json, "\"QB\"");
        let pos: Position = serde_json::from_str("\"FLEX\"").unwrap();
        assert_eq!(pos, Position::Flex);
        let bench: Position = serde_json::from_str("\"Bench\"").unwrap();
        assert_eq!(bench, Position::Bench);
    }

    #[test]
    fn display_trait_works() {
        assert_eq!(format!("{}", Position::Defense), "DST");
        assert_eq!(format!("{}", Position::Flex), "FLEX");
    }
}
