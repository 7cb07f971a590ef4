// Feature scaling pipeline for the position predictor.
//
// The vector layout is a contract with the trained model: 17 min-max-scaled
// draft-state fields followed by 6 standard-scaled VOR values. Changing the
// order or the constants invalidates the model.

use crate::draft::state::DraftState;
use crate::valuation::vor::PositionVor;

/// Number of min-max-scaled fields at the front of the vector.
pub const BOUNDED_FEATURES: usize = 17;
/// Number of standard-scaled VOR fields at the tail.
pub const VOR_FEATURES: usize = 6;
/// Total feature vector length.
pub const FEATURE_LEN: usize = BOUNDED_FEATURES + VOR_FEATURES;

// ---------------------------------------------------------------------------
// Scaling primitives
// ---------------------------------------------------------------------------

/// Min-max scaling. Returns 0 when the bound is degenerate (max == min).
/// Values outside the bound are not clamped; the formula applies as-is.
pub fn min_max_scale(value: f64, min: f64, max: f64) -> f64 {
    if max == min {
        return 0.0;
    }
    (value - min) / (max - min)
}

/// Standard (z-score) scaling. Returns 0 when std is 0.
pub fn standard_scale(value: f64, mean: f64, std: f64) -> f64 {
    if std == 0.0 {
        return 0.0;
    }
    (value - mean) / std
}

// ---------------------------------------------------------------------------
// Field tables
// ---------------------------------------------------------------------------

/// Bounded fields in contract order, each with its hardcoded {min, max}
/// from the training data. K and DST needs/availability are tracked in the
/// draft state but intentionally not part of the vector.
fn bounded_fields(state: &DraftState) -> [(f64, f64, f64); BOUNDED_FEATURES] {
    [
        (state.pick_number as f64, 1.0, 150.0),     // pick_no
        (state.round as f64, 1.0, 15.0),            // round
        (state.needs.qb as f64, 0.0, 1.0),          // qb_need
        (state.needs.rb as f64, 0.0, 2.0),          // rb_need
        (state.needs.wr as f64, 0.0, 2.0),          // wr_need
        (state.needs.te as f64, 0.0, 1.0),          // te_need
        (state.needs.flex as f64, 0.0, 2.0),        // flex_need
        (state.other_needs.qb as f64, 0.0, 9.0),    // other_qb_need
        (state.other_needs.rb as f64, 0.0, 18.0),   // other_rb_need
        (state.other_needs.wr as f64, 0.0, 18.0),   // other_wr_need
        (state.other_needs.te as f64, 0.0, 9.0),    // other_te_need
        (state.other_needs.flex as f64, 0.0, 18.0), // other_flex_need
        (state.available.qb as f64, 4.0, 22.0),     // qb_available
        (state.available.rb as f64, 12.0, 48.0),    // rb_available
        (state.available.wr as f64, 23.0, 71.0),    // wr_available
        (state.available.te as f64, 17.0, 32.0),    // te_available
        (state.available.flex as f64, 52.0, 151.0), // flex_available
    ]
}

/// VOR fields with their {mean, std} statistics, in trailing order
/// QB, RB, WR, TE, K, FLEX.
fn vor_fields(vor: &PositionVor) -> [(f64, f64, f64); VOR_FEATURES] {
    [
        (vor.qb, 35.0, 25.0),
        (vor.rb, 90.0, 45.0),
        (vor.wr, 80.0, 35.0),
        (vor.te, 45.0, 25.0),
        (vor.k, 17.0, 5.0),
        (vor.flex, 95.0, 45.0),
    ]
}

// ---------------------------------------------------------------------------
// Vector assembly
// ---------------------------------------------------------------------------

/// Build the feature vector consumed by the position predictor.
pub fn build_feature_vector(state: &DraftState, vor: &PositionVor) -> Vec<f64> {
    let mut features = Vec::with_capacity(FEATURE_LEN);
    for (value, min, max) in bounded_fields(state) {
        features.push(min_max_scale(value, min, max));
    }
    for (value, mean, std) in vor_fields(vor) {
        features.push(standard_scale(value, mean, std));
    }
    features
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use crate::draft::state::{AvailabilityCounts, PositionNeeds};
    use crate::valuation::scoring::ScoringMode;

    fn approx_eq(a: f64, b: f64, epsilon: f64) -> bool {
        (a - b).abs() < epsilon
    }

    fn test_state() -> DraftState {
        DraftState {
            pick_number: 1,
            round: 1,
            scoring: ScoringMode::Standard,
            needs: PositionNeeds {
                qb: 1,
                rb: 2,
                wr: 2,
                te: 1,
                k: 1,
                dst: 1,
                flex: 5,
            },
            other_needs: PositionNeeds {
                qb: 9,
                rb: 18,
                wr: 18,
                te: 9,
                k: 9,
                dst: 9,
                flex: 45,
            },
            available: AvailabilityCounts {
                qb: 22,
                rb: 48,
                wr: 71,
                te: 32,
                k: 20,
                dst: 15,
                flex: 151,
            },
            filled_slots: 0,
            roster_size: 15,
        }
    }

    #[test]
    fn min_max_scale_edges() {
        assert_eq!(min_max_scale(5.0, 5.0, 5.0), 0.0);
        assert_eq!(min_max_scale(1.0, 1.0, 150.0), 0.0);
        assert_eq!(min_max_scale(150.0, 1.0, 150.0), 1.0);
        assert!(approx_eq(min_max_scale(75.5, 1.0, 150.0), 0.5, 1e-10));
    }

    #[test]
    fn min_max_scale_does_not_clamp() {
        assert!(min_max_scale(200.0, 1.0, 150.0) > 1.0);
        assert!(min_max_scale(0.0, 1.0, 150.0) < 0.0);
    }

    #[test]
    fn standard_scale_edges() {
        assert_eq!(standard_scale(10.0, 5.0, 0.0), 0.0);
        assert!(approx_eq(standard_scale(60.0, 35.0, 25.0), 1.0, 1e-10));
        assert!(approx_eq(standard_scale(35.0, 35.0, 25.0), 0.0, 1e-10));
        assert!(standard_scale(10.0, 35.0, 25.0) < 0.0);
    }

    #[test]
    fn vector_has_contract_length() {
        let state = test_state();
        let vor = PositionVor::default();
        let features = build_feature_vector(&state, &vor);
        assert_eq!(features.len(), FEATURE_LEN);
        assert_eq!(FEATURE_LEN, 23);
    }

    #[test]
    fn bounded_block_order_and_values() {
        let state = test_state();
        let vor = PositionVor::default();
        let features = build_feature_vector(&state, &vor);

        // pick_no and round sit at the minimum of their bounds.
        assert!(approx_eq(features[0], 0.0, 1e-10));
        assert!(approx_eq(features[1], 0.0, 1e-10));
        // qb_need 1 with bounds {0,1} -> 1.
        assert!(approx_eq(features[2], 1.0, 1e-10));
        // rb_need 2 with bounds {0,2} -> 1.
        assert!(approx_eq(features[3], 1.0, 1e-10));
        // flex_need 5 with bounds {0,2} -> 2.5 (unclamped).
        assert!(approx_eq(features[6], 2.5, 1e-10));
        // other_qb_need 9 with bounds {0,9} -> 1.
        assert!(approx_eq(features[7], 1.0, 1e-10));
        // qb_available 22 with bounds {4,22} -> 1.
        assert!(approx_eq(features[12], 1.0, 1e-10));
        // flex_available 151 with bounds {52,151} -> 1.
        assert!(approx_eq(features[16], 1.0, 1e-10));
    }

    #[test]
    fn vor_block_order_and_values() {
        let state = test_state();
        let vor = PositionVor {
            qb: 60.0,  // (60-35)/25 = 1.0
            rb: 90.0,  // 0.0
            wr: 45.0,  // (45-80)/35 = -1.0
            te: 70.0,  // (70-45)/25 = 1.0
            k: 22.0,   // (22-17)/5 = 1.0
            flex: 50.0, // (50-95)/45 = -1.0
        };
        let features = build_feature_vector(&state, &vor);
        let tail = &features[BOUNDED_FEATURES..];

        assert!(approx_eq(tail[0], 1.0, 1e-10));
        assert!(approx_eq(tail[1], 0.0, 1e-10));
        assert!(approx_eq(tail[2], -1.0, 1e-10));
        assert!(approx_eq(tail[3], 1.0, 1e-10));
        assert!(approx_eq(tail[4], 1.0, 1e-10));
        assert!(approx_eq(tail[5], -1.0, 1e-10));
    }

    #[test]
    fn kicker_and_defense_counts_not_in_vector() {
        // Two states differing only in K/DST needs and availability must
        // produce identical feature vectors.
        let mut a = test_state();
        let mut b = test_state();
        a.needs.k = 1;
        a.needs.dst = 1;
        a.available.k = 20;
        a.available.dst = 15;
        b.needs.k = 0;
        b.needs.dst = 0;
        b.available.k = 3;
        b.available.dst = 1;

        let vor = PositionVor::default();
        assert_eq!(build_feature_vector(&a, &vor), build_feature_vector(&b, &vor));
    }
}
