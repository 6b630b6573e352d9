use serde::{Deserialize, Serialize};

/// One observed match, as supplied by the data source.
///
/// The string fields keep the raw vocabulary of the federation export
/// (`Victoire`/`Défaite`, `Poule`/`Tableau`, ...) because the factor lookups
/// are case-sensitive while outcome classification is not; parsing into
/// enums up front would erase that distinction.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MatchRecord {
    #[serde(rename = "resultat")]
    pub result: String,
    #[serde(rename = "type_competition")]
    pub competition_type: String,
    pub phase: String,
    #[serde(rename = "classement_joueur")]
    pub player_rank: i64,
    #[serde(rename = "classement_partenaire")]
    pub partner_rank: i64,
    #[serde(rename = "classement_adversaire_1")]
    pub opponent1_rank: i64,
    #[serde(rename = "classement_adversaire_2")]
    pub opponent2_rank: i64,
    #[serde(rename = "categorie")]
    pub category: String,
    #[serde(rename = "genre")]
    pub gender: String,
}

impl MatchRecord {
    /// Outcome classification is ASCII-case-insensitive, unlike the
    /// phase-factor lookup which requires the exact `Victoire` spelling.
    pub fn is_victory(&self) -> bool {
        self.result.eq_ignore_ascii_case("victoire")
    }
}

/// Result of one scoring run over a match table.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScoreResult {
    /// Weighted win percentage, rounded to 2 decimals.
    pub ratio: f64,
    pub recommendation: Recommendation,
}

/// Categorical verdict produced by the recommendation rule.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Recommendation {
    /// Empty table (or degenerate all-zero weights).
    NoValidMatches,
    /// Unknown category or fewer than 10 matches.
    InsufficientData,
    Relegation,
    PromotionTwoLevels,
    PromotionOneLevel,
    Hold,
}

impl Recommendation {
    /// The fixed display literal for this verdict, as worded in the
    /// federation tool.
    pub fn message(&self) -> &'static str {
        match self {
            Recommendation::NoValidMatches => "Pas de matchs valides.",
            Recommendation::InsufficientData => {
                "❕ Pas de recommandation (catégorie inconnue ou <10 matchs)."
            }
            Recommendation::Relegation => "🟥 Descente recommandée",
            Recommendation::PromotionTwoLevels => "🟩 Montée de 2 niveaux possible",
            Recommendation::PromotionOneLevel => "🟨 Montée de 1 niveau possible",
            Recommendation::Hold => "⬜ Maintien conseillé",
        }
    }
}

impl std::fmt::Display for Recommendation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.message())
    }
}
