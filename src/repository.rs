// Player repository: per-position projection cache and availability views.
//
// The repository owns the loaded projection pools and is passed explicitly
// to everything that reads them. Drafted-player exclusion comes in as a
// name set owned by the draft board; the repository never mutates it.

use std::collections::{HashMap, HashSet};
use std::path::PathBuf;

use tracing::warn;

use crate::draft::position::{Position, CONCRETE_POSITIONS, FLEX_ELIGIBLE};
use crate::players::{load_projections, PlayerRecord};
use crate::valuation::scoring::{projected_points, ScoringMode};

// ---------------------------------------------------------------------------
// Repository
// ---------------------------------------------------------------------------

pub struct PlayerRepository {
    data_dir: PathBuf,
    cache: HashMap<Position, Vec<PlayerRecord>>,
}

impl PlayerRepository {
    /// Create a repository reading projection CSVs from `data_dir`.
    pub fn new(data_dir: impl Into<PathBuf>) -> Self {
        PlayerRepository {
            data_dir: data_dir.into(),
            cache: HashMap::new(),
        }
    }

    /// Create a repository pre-filled with fixture data. Positions not in
    /// the map get an empty pool, so no file loads are attempted.
    pub fn with_players(players: HashMap<Position, Vec<PlayerRecord>>) -> Self {
        let mut cache = players;
        for &pos in CONCRETE_POSITIONS {
            cache.entry(pos).or_default();
        }
        PlayerRepository {
            data_dir: PathBuf::new(),
            cache,
        }
    }

    /// Load one position's pool, at most once per session.
    ///
    /// A missing, unreadable, or empty file degrades to an empty pool (with
    /// a warning); downstream VOR and availability computations treat an
    /// empty pool as zero rather than failing.
    pub fn load_position(&mut self, pos: Position) -> &[PlayerRecord] {
        if !self.cache.contains_key(&pos) {
            let rows = match pos.projection_file() {
                Some(file) => {
                    let path = self.data_dir.join(file);
                    match load_projections(&path) {
                        Ok(rows) => rows,
                        Err(e) => {
                            warn!("failed to load {} projections: {}", pos, e);
                            Vec::new()
                        }
                    }
                }
                // FLEX and Bench have no file of their own.
                None => Vec::new(),
            };
            self.cache.insert(pos, rows);
        }
        self.cache.get(&pos).map(Vec::as_slice).unwrap_or(&[])
    }

    /// Load all six concrete position pools. Recommendation entry points
    /// call this before computing VOR; repeat calls are no-ops.
    pub fn load_all(&mut self) {
        for &pos in CONCRETE_POSITIONS {
            self.load_position(pos);
        }
    }

    /// The cached pool for a position (empty if never loaded).
    pub fn pool(&self, pos: Position) -> &[PlayerRecord] {
        self.cache.get(&pos).map(Vec::as_slice).unwrap_or(&[])
    }

    /// Count of not-yet-drafted players at a position. For FLEX this is the
    /// combined RB+WR+TE count. Independent of scoring mode.
    pub fn available_count(&self, pos: Position, drafted: &HashSet<String>) -> usize {
        match pos {
            Position::Flex => FLEX_ELIGIBLE
                .iter()
                .map(|&p| self.available_count(p, drafted))
                .sum(),
            _ => self
                .pool(pos)
                .iter()
                .filter(|p| !drafted.contains(&p.name))
                .count(),
        }
    }

    /// Undrafted players per position, each pool sorted descending by
    /// projected points under the given mode. The sort is stable, so equal
    /// projections keep file order. FLEX is the RB+WR+TE pools concatenated
    /// before the sort, then sorted as one pool.
    pub fn available_players<'a>(
        &'a self,
        mode: ScoringMode,
        drafted: &HashSet<String>,
    ) -> AvailablePlayers<'a> {
        let flex_source: Vec<&PlayerRecord> = FLEX_ELIGIBLE
            .iter()
            .flat_map(|&p| self.pool(p).iter())
            .collect();

        AvailablePlayers {
            qb: filter_and_sort(self.pool(Position::Quarterback), mode, drafted),
            rb: filter_and_sort(self.pool(Position::RunningBack), mode, drafted),
            wr: filter_and_sort(self.pool(Position::WideReceiver), mode, drafted),
            te: filter_and_sort(self.pool(Position::TightEnd), mode, drafted),
            k: filter_and_sort(self.pool(Position::Kicker), mode, drafted),
            dst: filter_and_sort(self.pool(Position::Defense), mode, drafted),
            flex: filter_and_sort_refs(flex_source, mode, drafted),
        }
    }
}

fn filter_and_sort<'a>(
    pool: &'a [PlayerRecord],
    mode: ScoringMode,
    drafted: &HashSet<String>,
) -> Vec<&'a PlayerRecord> {
    filter_and_sort_refs(pool.iter().collect(), mode, drafted)
}

fn filter_and_sort_refs<'a>(
    pool: Vec<&'a PlayerRecord>,
    mode: ScoringMode,
    drafted: &HashSet<String>,
) -> Vec<&'a PlayerRecord> {
    let mut out: Vec<&PlayerRecord> = pool
        .into_iter()
        .filter(|p| !drafted.contains(&p.name))
        .collect();
    out.sort_by(|a, b| {
        projected_points(b, mode)
            .partial_cmp(&projected_points(a, mode))
            .unwrap_or(std::cmp::Ordering::Equal)
    });
    out
}

// ---------------------------------------------------------------------------
// Availability view
// ---------------------------------------------------------------------------

/// Undrafted players grouped by position, sorted for one scoring mode.
/// Recomputed per recommendation request and discarded after use.
pub struct AvailablePlayers<'a> {
    pub qb: Vec<&'a PlayerRecord>,
    pub rb: Vec<&'a PlayerRecord>,
    pub wr: Vec<&'a PlayerRecord>,
    pub te: Vec<&'a PlayerRecord>,
    pub k: Vec<&'a PlayerRecord>,
    pub dst: Vec<&'a PlayerRecord>,
    pub flex: Vec<&'a PlayerRecord>,
}

impl<'a> AvailablePlayers<'a> {
    /// The sorted pool for a position. FLEX maps to the combined pool;
    /// Bench has no pool of its own.
    pub fn pool(&self, pos: Position) -> &[&'a PlayerRecord] {
        match pos {
            Position::Quarterback => &self.qb,
            Position::RunningBack => &self.rb,
            Position::WideReceiver => &self.wr,
            Position::TightEnd => &self.te,
            Position::Kicker => &self.k,
            Position::Defense => &self.dst,
            Position::Flex => &self.flex,
            Position::Bench => &[],
        }
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
