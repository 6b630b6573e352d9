/// Promotion/relegation thresholds for one tier, as win percentages.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TierThresholds {
    /// Below this ratio, relegation is recommended.
    pub drop: f64,
    /// Above this ratio, one-level promotion is possible.
    pub up1: f64,
    /// Above this ratio, two-level promotion is possible. Tiers where a
    /// two-level jump does not exist are defined with `up2 = 100`, which
    /// the recommendation rule can never exceed.
    pub up2: f64,
}

const fn tier(drop: f64, up1: f64, up2: f64) -> TierThresholds {
    TierThresholds { drop, up1, up2 }
}

static MEN: &[(&str, TierThresholds)] = &[
    ("P100", tier(40.0, 40.0, 90.0)),
    ("P200", tier(15.0, 50.0, 90.0)),
    ("P300", tier(20.0, 55.0, 90.0)),
    ("P400", tier(25.0, 60.0, 100.0)),
    ("P500", tier(30.0, 65.0, 100.0)),
    ("P700", tier(35.0, 70.0, 100.0)),
    ("P1000", tier(35.0, 35.0, 100.0)),
];

static WOMEN: &[(&str, TierThresholds)] = &[
    ("P50", tier(40.0, 40.0, 90.0)),
    ("P100", tier(15.0, 50.0, 90.0)),
    ("P200", tier(20.0, 60.0, 100.0)),
    ("P300", tier(25.0, 60.0, 100.0)),
    ("P400", tier(25.0, 75.0, 100.0)),
    ("P500", tier(25.0, 25.0, 100.0)),
];

/// The full threshold table for a gender. `Dames` (any ASCII casing)
/// selects the women's tiers, anything else the men's.
pub fn threshold_table(gender: &str) -> &'static [(&'static str, TierThresholds)] {
    if gender.eq_ignore_ascii_case("dames") {
        WOMEN
    } else {
        MEN
    }
}

/// Thresholds for one tier, or `None` when the category is not part of the
/// selected gender's ladder.
pub fn thresholds_for(gender: &str, category: &str) -> Option<TierThresholds> {
    threshold_table(gender)
        .iter()
        .find(|(name, _)| *name == category)
        .map(|(_, limits)| *limits)
}
