use crate::domain::Recommendation;

use super::thresholds::thresholds_for;

/// Below this sample size no numeric verdict is issued, whatever the ratio.
pub const MIN_MATCHES_FOR_ADVICE: usize = 10;

/// Map a weighted win ratio to a promotion/relegation verdict.
///
/// Total over all inputs, never fails: unknown categories and small samples
/// yield the `InsufficientData` sentinel before any threshold is compared.
pub fn recommend(ratio: f64, match_count: usize, category: &str, gender: &str) -> Recommendation {
    let Some(limits) = thresholds_for(gender, category) else {
        return Recommendation::InsufficientData;
    };
    if match_count < MIN_MATCHES_FOR_ADVICE {
        return Recommendation::InsufficientData;
    }

    if ratio < limits.drop {
        Recommendation::Relegation
    } else if limits.up2 <= 100.0 && ratio > limits.up2 {
        // Tiers with up2 = 100 keep the guard satisfied but can never win
        // the comparison, since the ratio is a percentage capped at 100.
        Recommendation::PromotionTwoLevels
    } else if ratio > limits.up1 {
        Recommendation::PromotionOneLevel
    } else {
        Recommendation::Hold
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn small_samples_are_never_scored() {
        assert_eq!(
            recommend(100.0, 9, "P200", "Messieurs"),
            Recommendation::InsufficientData
        );
        assert_eq!(
            recommend(0.0, 9, "P200", "Messieurs"),
            Recommendation::InsufficientData
        );
    }

    #[test]
    fn unknown_category_is_never_scored() {
        assert_eq!(
            recommend(100.0, 50, "P9000", "Messieurs"),
            Recommendation::InsufficientData
        );
        // P1000 does not exist on the women's ladder
        assert_eq!(
            recommend(100.0, 50, "P1000", "Dames"),
            Recommendation::InsufficientData
        );
    }

    #[test]
    fn branch_priority() {
        // men's P200: drop 15, up1 50, up2 90
        assert_eq!(recommend(10.0, 20, "P200", "Messieurs"), Recommendation::Relegation);
        assert_eq!(
            recommend(95.0, 20, "P200", "Messieurs"),
            Recommendation::PromotionTwoLevels
        );
        assert_eq!(
            recommend(60.0, 20, "P200", "Messieurs"),
            Recommendation::PromotionOneLevel
        );
        assert_eq!(recommend(30.0, 20, "P200", "Messieurs"), Recommendation::Hold);
    }

    #[test]
    fn thresholds_are_strict_comparisons() {
        // ratio == drop stays, ratio == up1 stays
        assert_eq!(recommend(15.0, 20, "P200", "Messieurs"), Recommendation::Hold);
        assert_eq!(recommend(50.0, 20, "P200", "Messieurs"), Recommendation::Hold);
        // ratio == up2 falls through to the one-level branch
        assert_eq!(
            recommend(90.0, 20, "P200", "Messieurs"),
            Recommendation::PromotionOneLevel
        );
    }

    #[test]
    fn up2_at_100_is_unreachable_even_at_a_perfect_ratio() {
        // men's P1000 and women's P500 are defined with up2 = 100
        assert_eq!(
            recommend(100.0, 20, "P1000", "Messieurs"),
            Recommendation::PromotionOneLevel
        );
        assert_eq!(
            recommend(100.0, 20, "P500", "Dames"),
            Recommendation::PromotionOneLevel
        );
    }

    #[test]
    fn womens_ladder_uses_its_own_thresholds() {
        // women's P400: drop 25, up1 75, up2 100
        assert_eq!(recommend(20.0, 15, "P400", "Dames"), Recommendation::Relegation);
        assert_eq!(recommend(70.0, 15, "P400", "Dames"), Recommendation::Hold);
        assert_eq!(
            recommend(80.0, 15, "P400", "Dames"),
            Recommendation::PromotionOneLevel
        );
    }
}
