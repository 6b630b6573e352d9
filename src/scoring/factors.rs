use anyhow::{Result, bail};

/// Outcome weighting per competition phase.
///
/// Pool play is neutral; bracket play amplifies the variance of the outcome
/// (a bracket win counts more, a bracket loss costs less weight). Lookups
/// are case-sensitive against the federation vocabulary, and an unknown
/// phase or result is a schema violation for the whole table, never a row
/// to skip.
pub fn phase_factor(phase: &str, result: &str) -> Result<f64> {
    let factor = match (phase, result) {
        ("Poule", "Victoire") | ("Poule", "Défaite") => 1.0,
        ("Tableau", "Victoire") => 1.25,
        ("Tableau", "Défaite") => 0.75,
        _ => bail!("unknown phase/result combination: {phase:?} / {result:?}"),
    };
    Ok(factor)
}

/// Weighting per competition type.
pub fn competition_factor(competition_type: &str) -> Result<f64> {
    let factor = match competition_type {
        "Tour" => 1.0,
        "Interclubs" => 0.9,
        "Mixte" => 0.8,
        "Masters" => 1.1,
        other => bail!("unknown competition type: {other:?}"),
    };
    Ok(factor)
}
