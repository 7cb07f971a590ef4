// Recommendation policy: end-game overrides, model prediction, validity
// repair, best-player selection.

use serde::Serialize;
use tracing::warn;

use crate::config::LeagueSettings;
use crate::draft::board::DraftBoard;
use crate::draft::position::{Position, MODEL_POSITIONS};
use crate::draft::state::DraftState;
use crate::repository::{AvailablePlayers, PlayerRepository};
use crate::valuation::features::build_feature_vector;
use crate::valuation::scoring::{projected_points, ScoringMode};
use crate::valuation::vor::{compute_position_vor, highest_vor};

// ---------------------------------------------------------------------------
// Request / response types
// ---------------------------------------------------------------------------

/// A recommendation request as supplied by the UI layer.
#[derive(Debug, Clone, Copy)]
pub struct RecommendationRequest {
    /// 1-based team number.
    pub team: usize,
    pub round: usize,
    pub pick_number: usize,
    pub scoring: ScoringMode,
}

/// Why a position was recommended.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum Rationale {
    KickerRule,
    DefenseRule,
    Model,
}

impl Rationale {
    pub fn display_str(&self) -> &'static str {
        match self {
            Rationale::KickerRule => "2nd to last round - drafting best kicker",
            Rationale::DefenseRule => "last round - drafting best defense",
            Rationale::Model => "model prediction",
        }
    }
}

/// The best available player at the recommended position.
#[derive(Debug, Clone, Serialize)]
pub struct RecommendedPlayer {
    pub name: String,
    pub projected_points: f64,
}

/// The engine's answer to one recommendation request.
#[derive(Debug, Clone, Serialize)]
pub struct Recommendation {
    pub position: Position,
    /// `None` when the position's pool is empty. That is a displayable
    /// state, not an error; the position recommendation still stands.
    pub player: Option<RecommendedPlayer>,
    pub rationale: Rationale,
}

// ---------------------------------------------------------------------------
// Position predictor seam
// ---------------------------------------------------------------------------

/// Pluggable position predictor. A trained classifier can be substituted
/// here without touching the policy state machine; a failed or invalid
/// prediction is repaired by the validity fallback.
pub trait PositionPredictor {
    fn predict(&self, features: &[f64]) -> anyhow::Result<Position>;
}

/// Placeholder model: arg-max over the six trailing VOR-derived features,
/// ties broken by first occurrence in order QB, RB, WR, TE, K, FLEX.
#[derive(Debug, Default)]
pub struct VorArgmaxPredictor;

impl PositionPredictor for VorArgmaxPredictor {
    fn predict(&self, features: &[f64]) -> anyhow::Result<Position> {
        anyhow::ensure!(
            features.len() >= MODEL_POSITIONS.len(),
            "feature vector too short: {} values",
            features.len()
        );
        let tail = &features[features.len() - MODEL_POSITIONS.len()..];
        let mut best = 0;
        for i in 1..tail.len() {
            if tail[i] > tail[best] {
                best = i;
            }
        }
        Ok(MODEL_POSITIONS[best])
    }
}

// ---------------------------------------------------------------------------
// Round overrides
// ---------------------------------------------------------------------------

fn is_second_to_last_round(round: usize, settings: &LeagueSettings) -> bool {
    round + 1 == settings.total_rounds()
}

fn is_last_round(round: usize, settings: &LeagueSettings) -> bool {
    round == settings.total_rounds()
}

// ---------------------------------------------------------------------------
// Validity filter
// ---------------------------------------------------------------------------

/// Positions the team may validly draft right now, in priority order:
/// need-based concrete positions, then FLEX when any flex-eligible demand
/// remains, then the bench catch-all (any concrete position) while the
/// roster still has open slots.
pub fn valid_positions(state: &DraftState) -> Vec<Position> {
    let mut valid = Vec::new();

    if state.needs.qb > 0 {
        valid.push(Position::Quarterback);
    }
    if state.needs.rb > 0 {
        valid.push(Position::RunningBack);
    }
    if state.needs.wr > 0 {
        valid.push(Position::WideReceiver);
    }
    if state.needs.te > 0 {
        valid.push(Position::TightEnd);
    }
    if state.needs.k > 0 {
        valid.push(Position::Kicker);
    }
    if state.needs.dst > 0 {
        valid.push(Position::Defense);
    }

    if state.needs.rb > 0 || state.needs.wr > 0 || state.needs.te > 0 || state.needs.flex > 0 {
        valid.push(Position::Flex);
    }

    if state.filled_slots < state.roster_size {
        for &pos in &[
            Position::Quarterback,
            Position::RunningBack,
            Position::WideReceiver,
            Position::TightEnd,
            Position::Kicker,
            Position::Defense,
        ] {
            if !valid.contains(&pos) {
                valid.push(pos);
            }
        }
    }

    valid
}

/// The valid position with the highest VOR; first valid entry wins ties.
/// Each position's replacement depth is its configured slot count.
fn best_valid_by_vor(
    valid: &[Position],
    avail: &AvailablePlayers,
    settings: &LeagueSettings,
    mode: ScoringMode,
) -> Option<Position> {
    let mut best_pos = *valid.first()?;
    let mut best_vor = f64::NEG_INFINITY;
    for &pos in valid {
        let vor = highest_vor(avail.pool(pos), settings.roster.slot_count(pos), mode);
        if vor > best_vor {
            best_vor = vor;
            best_pos = pos;
        }
    }
    Some(best_pos)
}

// ---------------------------------------------------------------------------
// Policy entry point
// ---------------------------------------------------------------------------

/// Produce a recommendation for one pick.
///
/// All six position pools are loaded (at most once per session) before any
/// VOR computation; replacement indices are wrong on partial data. The
/// overrides run in strict priority order: kicker rule, defense rule, then
/// the model branch.
pub fn recommend(
    request: &RecommendationRequest,
    board: &DraftBoard,
    settings: &LeagueSettings,
    repository: &mut PlayerRepository,
    predictor: &dyn PositionPredictor,
) -> Recommendation {
    repository.load_all();

    let state = DraftState::build(
        request.team,
        request.round,
        request.pick_number,
        request.scoring,
        board,
        settings,
        repository,
    );
    let drafted = board.drafted_names();
    let avail = repository.available_players(request.scoring, &drafted);

    let (position, rationale) = if is_second_to_last_round(request.round, settings) {
        (Position::Kicker, Rationale::KickerRule)
    } else if is_last_round(request.round, settings) {
        (Position::Defense, Rationale::DefenseRule)
    } else {
        let vor = compute_position_vor(&avail, settings, request.scoring);
        let features = build_feature_vector(&state, &vor);

        let predicted = match predictor.predict(&features) {
            Ok(pos) => Some(pos),
            Err(e) => {
                warn!("position predictor failed: {}", e);
                None
            }
        };

        let valid = valid_positions(&state);
        let position = match predicted {
            Some(pos) if valid.contains(&pos) => pos,
            predicted => {
                if let Some(pos) = predicted {
                    warn!("predicted position {} is not currently valid, repairing", pos);
                }
                match best_valid_by_vor(&valid, &avail, settings, request.scoring) {
                    Some(pos) => pos,
                    // Roster already full: nothing is valid. Keep whatever
                    // the predictor said, or Bench as the inert default.
                    None => predicted.unwrap_or(Position::Bench),
                }
            }
        };
        (position, Rationale::Model)
    };

    let player = avail.pool(position).first().map(|p| RecommendedPlayer {
        name: p.name.clone(),
        projected_points: projected_points(p, request.scoring),
    });

    Recommendation {
        position,
        player,
        rationale,
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
