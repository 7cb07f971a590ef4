// Draft assignment board: which player occupies which roster slot.
//
// The UI layer owns slot selection; the board is the plain-data view of it
// that the engine consumes. A player name occupies at most one slot across
// the whole league.

use std::collections::HashSet;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use tracing::warn;

use super::position::Position;

// ---------------------------------------------------------------------------
// Error type
// ---------------------------------------------------------------------------

#[derive(Debug, thiserror::Error)]
pub enum BoardError {
    #[error("failed to read board file {path}: {source}")]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("failed to parse board file {path}: {source}")]
    Json {
        path: PathBuf,
        source: serde_json::Error,
    },
}

// ---------------------------------------------------------------------------
// Payload structs
// ---------------------------------------------------------------------------

/// One roster slot's assignment, as supplied by the UI layer.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SlotAssignment {
    /// 1-based team number.
    pub team: usize,
    pub position: Position,
    /// 1-based slot index within the team's slots for this position.
    pub slot: usize,
    /// Occupying player, or `None` for an open slot.
    #[serde(default)]
    pub player: Option<String>,
}

/// Top-level board file payload.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct BoardPayload {
    #[serde(default)]
    pub assignments: Vec<SlotAssignment>,
}

/// A completed pick derived from the board, in board order.
#[derive(Debug, Clone, Serialize)]
pub struct PickEntry {
    /// Sequential pick number (1-indexed).
    pub pick: usize,
    /// Round computed as ceil(pick / num_teams).
    pub round: usize,
    pub team: usize,
    pub player: String,
    pub position: Position,
}

// ---------------------------------------------------------------------------
// Board
// ---------------------------------------------------------------------------

/// The league-wide assignment state. Filled entries keep their insertion
/// order, which doubles as the pick order for the board listing.
#[derive(Debug, Clone, Default)]
pub struct DraftBoard {
    assignments: Vec<SlotAssignment>,
}

impl DraftBoard {
    pub fn new() -> Self {
        DraftBoard::default()
    }

    /// Build a board from a payload. If a player name appears in more than
    /// one slot, the first occurrence wins and later ones are dropped with
    /// a warning; real enforcement belongs to the UI layer.
    pub fn from_payload(payload: BoardPayload) -> Self {
        let mut board = DraftBoard::new();
        let mut seen: HashSet<String> = HashSet::new();
        for mut entry in payload.assignments {
            if let Some(name) = &entry.player {
                if !seen.insert(name.clone()) {
                    warn!(
                        "duplicate assignment for '{}' (team {}, {} slot {}), ignoring",
                        name, entry.team, entry.position, entry.slot
                    );
                    entry.player = None;
                }
            }
            board.assignments.push(entry);
        }
        board
    }

    /// Load a board from a JSON file.
    pub fn load(path: &Path) -> Result<Self, BoardError> {
        let text = std::fs::read_to_string(path).map_err(|e| BoardError::Io {
            path: path.to_path_buf(),
            source: e,
        })?;
        let payload: BoardPayload =
            serde_json::from_str(&text).map_err(|e| BoardError::Json {
                path: path.to_path_buf(),
                source: e,
            })?;
        Ok(DraftBoard::from_payload(payload))
    }

    /// Put a player into a slot, mirroring the UI's change semantics: any
    /// slot currently holding the name is cleared first, and the target
    /// slot's previous occupant is replaced.
    pub fn assign(&mut self, team: usize, position: Position, slot: usize, player: &str) {
        for entry in &mut self.assignments {
            if entry.player.as_deref() == Some(player) {
                entry.player = None;
            }
        }
        if let Some(entry) = self
            .assignments
            .iter_mut()
            .find(|e| e.team == team && e.position == position && e.slot == slot)
        {
            entry.player = Some(player.to_string());
        } else {
            self.assignments.push(SlotAssignment {
                team,
                position,
                slot,
                player: Some(player.to_string()),
            });
        }
    }

    /// Empty a slot.
    pub fn clear(&mut self, team: usize, position: Position, slot: usize) {
        if let Some(entry) = self
            .assignments
            .iter_mut()
            .find(|e| e.team == team && e.position == position && e.slot == slot)
        {
            entry.player = None;
        }
    }

    /// Every drafted name across the league. Drafted is a global exclusion,
    /// not a per-team one.
    pub fn drafted_names(&self) -> HashSet<String> {
        self.assignments
            .iter()
            .filter_map(|e| e.player.clone())
            .collect()
    }

    /// Whether a player is drafted anywhere on the board.
    pub fn is_drafted(&self, name: &str) -> bool {
        self.assignments
            .iter()
            .any(|e| e.player.as_deref() == Some(name))
    }

    /// Number of filled slots of a position for one team.
    pub fn filled_count(&self, team: usize, position: Position) -> usize {
        self.assignments
            .iter()
            .filter(|e| e.team == team && e.position == position && e.player.is_some())
            .count()
    }

    /// Number of filled slots of any position for one team.
    pub fn total_filled(&self, team: usize) -> usize {
        self.assignments
            .iter()
            .filter(|e| e.team == team && e.player.is_some())
            .count()
    }

    /// Completed picks in board order, with pick numbers and rounds.
    pub fn picks(&self, num_teams: usize) -> Vec<PickEntry> {
        self.assignments
            .iter()
            .filter(|e| e.player.is_some())
            .enumerate()
            .map(|(i, e)| {
                let pick = i + 1;
                PickEntry {
                    pick,
                    round: (pick + num_teams - 1) / num_teams.max(1),
                    team: e.team,
                    player: e.player.clone().unwrap_or_default(),
                    position: e.position,
                }
            })
            .collect()
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
