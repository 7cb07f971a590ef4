// Draft state snapshot: positional needs and availability at one pick.

use serde::Serialize;

use super::board::DraftBoard;
use super::position::Position;
use crate::config::LeagueSettings;
use crate::repository::PlayerRepository;
use crate::valuation::scoring::ScoringMode;

// ---------------------------------------------------------------------------
// Need and availability counters
// ---------------------------------------------------------------------------

/// Open-slot counts per position, for one team or summed across teams.
#[derive(Debug, Clone, Copy, Default, Serialize)]
pub struct PositionNeeds {
    pub qb: usize,
    pub rb: usize,
    pub wr: usize,
    pub te: usize,
    pub k: usize,
    pub dst: usize,
    /// Flex-eligible demand: the sum of the RB, WR and TE needs, not the
    /// configured FLEX slot count. FLEX-slot fills do not decrement it.
    pub flex: usize,
}

impl PositionNeeds {
    /// Open-slot count for a position. Bench is unconstrained and carries
    /// no need of its own.
    pub fn need(&self, pos: Position) -> usize {
        match pos {
            Position::Quarterback => self.qb,
            Position::RunningBack => self.rb,
            Position::WideReceiver => self.wr,
            Position::TightEnd => self.te,
            Position::Kicker => self.k,
            Position::Defense => self.dst,
            Position::Flex => self.flex,
            Position::Bench => 0,
        }
    }
}

/// Remaining undrafted player counts per position pool.
#[derive(Debug, Clone, Copy, Default, Serialize)]
pub struct AvailabilityCounts {
    pub qb: usize,
    pub rb: usize,
    pub wr: usize,
    pub te: usize,
    pub k: usize,
    pub dst: usize,
    pub flex: usize,
}

// ---------------------------------------------------------------------------
// Snapshot
// ---------------------------------------------------------------------------

/// The draft from one team's perspective at one pick.
///
/// Recomputed fresh on every recommendation request and discarded after
/// use; nothing here is persisted.
#[derive(Debug, Clone, Serialize)]
pub struct DraftState {
    pub pick_number: usize,
    pub round: usize,
    pub scoring: ScoringMode,
    /// The requesting team's open slots.
    pub needs: PositionNeeds,
    /// Open slots summed over every other team.
    pub other_needs: PositionNeeds,
    /// Undrafted player counts, independent of scoring mode.
    pub available: AvailabilityCounts,
    /// Filled slots for the requesting team, every position included.
    pub filled_slots: usize,
    /// Total roster size from the league settings.
    pub roster_size: usize,
}

/// Per-position need for one team: configured slot count minus filled
/// slots, floored at zero.
fn team_needs(team: usize, board: &DraftBoard, settings: &LeagueSettings) -> PositionNeeds {
    let need = |pos: Position| {
        settings
            .roster
            .slot_count(pos)
            .saturating_sub(board.filled_count(team, pos))
    };
    let qb = need(Position::Quarterback);
    let rb = need(Position::RunningBack);
    let wr = need(Position::WideReceiver);
    let te = need(Position::TightEnd);
    let k = need(Position::Kicker);
    let dst = need(Position::Defense);
    PositionNeeds {
        qb,
        rb,
        wr,
        te,
        k,
        dst,
        flex: rb + wr + te,
    }
}

impl DraftState {
    /// Build the snapshot for `team` at the given round and pick.
    ///
    /// The repository must have its position pools loaded; availability
    /// counts come from the name pools and the board's drafted set.
    pub fn build(
        team: usize,
        round: usize,
        pick_number: usize,
        scoring: ScoringMode,
        board: &DraftBoard,
        settings: &LeagueSettings,
        repository: &PlayerRepository,
    ) -> DraftState {
        let needs = team_needs(team, board, settings);

        let mut other_needs = PositionNeeds::default();
        for t in 1..=settings.num_teams {
            if t == team {
                continue;
            }
            let n = team_needs(t, board, settings);
            other_needs.qb += n.qb;
            other_needs.rb += n.rb;
            other_needs.wr += n.wr;
            other_needs.te += n.te;
            other_needs.k += n.k;
            other_needs.dst += n.dst;
            other_needs.flex += n.flex;
        }

        let drafted = board.drafted_names();
        let available = AvailabilityCounts {
            qb: repository.available_count(Position::Quarterback, &drafted),
            rb: repository.available_count(Position::RunningBack, &drafted),
            wr: repository.available_count(Position::WideReceiver, &drafted),
            te: repository.available_count(Position::TightEnd, &drafted),
            k: repository.available_count(Position::Kicker, &drafted),
            dst: repository.available_count(Position::Defense, &drafted),
            flex: repository.available_count(Position::Flex, &drafted),
        };

        DraftState {
            pick_number,
            round,
            scoring,
            needs,
            other_needs,
            available,
            filled_slots: board.total_filled(team),
            roster_size: settings.roster.total(),
        }
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
