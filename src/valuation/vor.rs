// Value Over Replacement (VOR) computation.
//
// VOR approximates the marginal value of securing the best player at a
// position now versus waiting until the position's depth is exhausted at
// the roster requirement.

use serde::Serialize;

use crate::config::LeagueSettings;
use crate::draft::position::{Position, CONCRETE_POSITIONS};
use crate::players::PlayerRecord;
use crate::repository::AvailablePlayers;
use crate::valuation::scoring::{projected_points, ScoringMode};

// ---------------------------------------------------------------------------
// Replacement level and highest VOR
// ---------------------------------------------------------------------------

/// Projected points of the player at the replacement index of a sorted
/// available pool.
///
/// With `required` starters at the position, the replacement is the player
/// at 0-based index `required`. Returns 0 when the pool has no player at
/// that depth.
pub fn replacement_value(pool: &[&PlayerRecord], required: usize, mode: ScoringMode) -> f64 {
    pool.get(required)
        .map(|p| projected_points(p, mode))
        .unwrap_or(0.0)
}

/// Gap between the best available player and the replacement level.
/// Returns 0 when the pool is empty.
pub fn highest_vor(pool: &[&PlayerRecord], required: usize, mode: ScoringMode) -> f64 {
    match pool.first() {
        Some(top) => projected_points(top, mode) - replacement_value(pool, required, mode),
        None => 0.0,
    }
}

// ---------------------------------------------------------------------------
// Per-position VOR bundle for the model
// ---------------------------------------------------------------------------

/// Highest VOR for the six positions the predictor chooses between,
/// in feature-vector order.
#[derive(Debug, Clone, Copy, Default, Serialize)]
pub struct PositionVor {
    pub qb: f64,
    pub rb: f64,
    pub wr: f64,
    pub te: f64,
    pub k: f64,
    pub flex: f64,
}

/// Compute the VOR bundle from the current availability view. Each
/// position's replacement depth is its configured slot count.
pub fn compute_position_vor(
    avail: &AvailablePlayers,
    settings: &LeagueSettings,
    mode: ScoringMode,
) -> PositionVor {
    let roster = &settings.roster;
    PositionVor {
        qb: highest_vor(&avail.qb, roster.qb, mode),
        rb: highest_vor(&avail.rb, roster.rb, mode),
        wr: highest_vor(&avail.wr, roster.wr, mode),
        te: highest_vor(&avail.te, roster.te, mode),
        k: highest_vor(&avail.k, roster.k, mode),
        flex: highest_vor(&avail.flex, roster.flex, mode),
    }
}

// ---------------------------------------------------------------------------
// Player rankings
// ---------------------------------------------------------------------------

/// A player annotated with VOR for the rankings view.
#[derive(Debug, Clone, Serialize)]
pub struct RankedPlayer {
    pub name: String,
    pub position: Position,
    pub team: Option<String>,
    pub bye: Option<u32>,
    pub projected: f64,
    pub vor: f64,
}

/// Rank the available pool by value over replacement.
///
/// The baseline for each position is the projected points of the player at
/// index `slots * teams` of its sorted pool, or 0 when the pool is
/// shallower than the league's starter demand. A player's VOR is their own
/// projection minus that baseline. The result covers every concrete
/// position, sorted descending by VOR.
pub fn rank_players(
    avail: &AvailablePlayers,
    settings: &LeagueSettings,
    mode: ScoringMode,
) -> Vec<RankedPlayer> {
    let mut ranked = Vec::new();

    for &pos in CONCRETE_POSITIONS {
        let pool = avail.pool(pos);
        let starters = settings.roster.slot_count(pos) * settings.num_teams;
        let baseline = pool
            .get(starters)
            .map(|p| projected_points(p, mode))
            .unwrap_or(0.0);
        for player in pool {
            let projected = projected_points(player, mode);
            ranked.push(RankedPlayer {
                name: player.name.clone(),
                position: pos,
                team: player.team.clone(),
                bye: player.bye,
                projected,
                vor: projected - baseline,
            });
        }
    }

    ranked.sort_by(|a, b| b.vor.partial_cmp(&a.vor).unwrap_or(std::cmp::Ordering::Equal));
    ranked
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
