/// Gaps are bucketed per 100 ranking points and clamped to this range.
const GAP_LIMIT: i64 = 3;

/// Multipliers indexed by `[sum_gap + 3][individual_gap + 3]`.
///
/// Rows: pair-sum gap from -3 (own pair much weaker) to +3 (much stronger).
/// Columns: player-vs-partner gap from -3 to +3. Values are the federation's
/// fixed table; they up-weight upsets and down-weight should-have-won
/// matches.
const CORRECTION_MATRIX: [[f64; 7]; 7] = [
    [1.70, 1.50, 1.40, 1.00, 0.85, 0.70, 0.45],
    [1.65, 1.45, 1.35, 1.00, 0.80, 0.65, 0.40],
    [1.60, 1.40, 1.30, 1.00, 0.75, 0.60, 0.35],
    [1.55, 1.35, 1.25, 1.00, 0.70, 0.55, 0.30],
    [1.50, 1.30, 1.20, 1.00, 0.65, 0.50, 0.25],
    [1.45, 1.25, 1.15, 1.00, 0.60, 0.45, 0.20],
    [1.40, 1.20, 1.10, 1.00, 0.55, 0.40, 0.15],
];

/// Correction factor for a doubles match, from the four ranking levels.
///
/// Bucketing uses floor division (`div_euclid`), not truncation: a raw
/// difference of -50 lands in bucket -1, never 0. Pure and total, any
/// integer inputs are valid.
pub fn ranking_correction(player: i64, partner: i64, opp1: i64, opp2: i64) -> f64 {
    let sum_gap = bucket(player + partner - opp1 - opp2);
    let individual_gap = bucket(player - partner);

    CORRECTION_MATRIX[(sum_gap + GAP_LIMIT) as usize][(individual_gap + GAP_LIMIT) as usize]
}

fn bucket(points_diff: i64) -> i64 {
    points_diff.div_euclid(100).clamp(-GAP_LIMIT, GAP_LIMIT)
}
