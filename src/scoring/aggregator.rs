use anyhow::Result;
use log::info;

use crate::domain::{MatchRecord, Recommendation, ScoreResult};

use super::correction::ranking_correction;
use super::factors::{competition_factor, phase_factor};
use super::recommendation::recommend;

/// Score a table of matches and derive a progression verdict.
///
/// All rows are expected to share one category and gender; the first row's
/// values stand for the whole table. An unrecognized phase, result, or
/// competition type anywhere in the table fails the whole call rather than
/// silently skipping the row, which would skew both the total weight and
/// the sample size.
pub fn score_matches(matches: &[MatchRecord]) -> Result<ScoreResult> {
    let (total_points, total_weight) =
        matches
            .iter()
            .try_fold((0.0_f64, 0.0_f64), |(points, weight), record| {
                let match_weight = weight_for(record)?;
                let outcome = if record.is_victory() { 1.0 } else { 0.0 };
                anyhow::Ok((points + outcome * match_weight, weight + match_weight))
            })?;

    // Empty table, or degenerately all-zero weights should a zero factor
    // ever enter the tables.
    if total_weight == 0.0 {
        return Ok(ScoreResult {
            ratio: 0.0,
            recommendation: Recommendation::NoValidMatches,
        });
    }

    let ratio = round2(100.0 * total_points / total_weight);
    let first = &matches[0];
    let recommendation = recommend(ratio, matches.len(), &first.category, &first.gender);

    info!(
        "Scored {} matches for {} ({}): ratio {:.2}%",
        matches.len(),
        first.category,
        first.gender,
        ratio
    );

    Ok(ScoreResult {
        ratio,
        recommendation,
    })
}

fn weight_for(record: &MatchRecord) -> Result<f64> {
    let phase = phase_factor(&record.phase, &record.result)?;
    let competition = competition_factor(&record.competition_type)?;
    let rank = ranking_correction(
        record.player_rank,
        record.partner_rank,
        record.opponent1_rank,
        record.opponent2_rank,
    );
    Ok(phase * competition * rank)
}

// Round half away from zero to 2 decimals.
fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}
