use std::fs::File;
use std::path::Path;

use anyhow::{Context, Result, bail};
use log::{info, warn};

use crate::domain::MatchRecord;

/// Load a match table from a `.csv` or `.json` file.
///
/// CSV files carry the federation export headers (`resultat`,
/// `type_competition`, `phase`, `classement_joueur`, ...); JSON files are an
/// array of objects with the same keys. Loading validates nothing beyond
/// deserialization; schema checks on the values happen during scoring.
pub fn load_matches(path: &Path) -> Result<Vec<MatchRecord>> {
    let extension = path
        .extension()
        .and_then(|ext| ext.to_str())
        .map(|ext| ext.to_ascii_lowercase());

    let matches = match extension.as_deref() {
        Some("csv") => load_csv(path)?,
        Some("json") => load_json(path)?,
        _ => bail!("unsupported match table format: {}", path.display()),
    };

    info!("Loaded {} matches from {}", matches.len(), path.display());
    check_table_consistency(&matches);
    Ok(matches)
}

fn load_csv(path: &Path) -> Result<Vec<MatchRecord>> {
    let mut reader = csv::ReaderBuilder::new()
        .trim(csv::Trim::All)
        .from_path(path)
        .with_context(|| format!("Failed to open CSV file: {}", path.display()))?;

    let mut matches = Vec::new();
    for record in reader.deserialize() {
        let record: MatchRecord =
            record.with_context(|| format!("Failed to parse match row in {}", path.display()))?;
        matches.push(record);
    }
    Ok(matches)
}

fn load_json(path: &Path) -> Result<Vec<MatchRecord>> {
    let file =
        File::open(path).with_context(|| format!("Failed to open JSON file: {}", path.display()))?;
    serde_json::from_reader(file)
        .with_context(|| format!("Failed to parse match table in {}", path.display()))
}

/// The scoring run trusts the first row's category/gender for the whole
/// table; flag mixed tables early instead of silently misfiling them.
fn check_table_consistency(matches: &[MatchRecord]) {
    let Some(first) = matches.first() else {
        return;
    };
    for (row, record) in matches.iter().enumerate().skip(1) {
        if record.category != first.category || record.gender != first.gender {
            warn!(
                "Row {} ({}/{}) does not match the table's category {}/{}",
                row + 1,
                record.category,
                record.gender,
                first.category,
                first.gender
            );
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write as _;

    const CSV_TABLE: &str = "\
resultat,type_competition,phase,classement_joueur,classement_partenaire,classement_adversaire_1,classement_adversaire_2,categorie,genre
Victoire,Tour,Poule,500,500,500,500,P200,Messieurs
Défaite,Masters,Tableau,450,550,600,400,P200,Messieurs
";

    #[test]
    fn loads_a_csv_table() {
        let mut file = tempfile::Builder::new().suffix(".csv").tempfile().unwrap();
        file.write_all(CSV_TABLE.as_bytes()).unwrap();

        let matches = load_matches(file.path()).unwrap();
        assert_eq!(matches.len(), 2);
        assert_eq!(matches[0].result, "Victoire");
        assert_eq!(matches[1].competition_type, "Masters");
        assert_eq!(matches[1].opponent2_rank, 400);
        assert!(matches[0].is_victory());
        assert!(!matches[1].is_victory());
    }

    #[test]
    fn loads_a_json_table() {
        let table = r#"[{
            "resultat": "Victoire",
            "type_competition": "Interclubs",
            "phase": "Poule",
            "classement_joueur": 300,
            "classement_partenaire": 320,
            "classement_adversaire_1": 310,
            "classement_adversaire_2": 290,
            "categorie": "P100",
            "genre": "Dames"
        }]"#;

        let mut file = tempfile::Builder::new().suffix(".json").tempfile().unwrap();
        file.write_all(table.as_bytes()).unwrap();

        let matches = load_matches(file.path()).unwrap();
        assert_eq!(matches.len(), 1);
        assert_eq!(matches[0].category, "P100");
        assert_eq!(matches[0].gender, "Dames");
    }

    #[test]
    fn rejects_unknown_extensions() {
        let file = tempfile::Builder::new().suffix(".xlsx").tempfile().unwrap();
        assert!(load_matches(file.path()).is_err());
    }

    #[test]
    fn rejects_malformed_rows() {
        let mut file = tempfile::Builder::new().suffix(".csv").tempfile().unwrap();
        file.write_all(
            b"resultat,type_competition,phase,classement_joueur,classement_partenaire,classement_adversaire_1,classement_adversaire_2,categorie,genre\n\
              Victoire,Tour,Poule,not_a_number,500,500,500,P200,Messieurs\n",
        )
        .unwrap();

        assert!(load_matches(file.path()).is_err());
    }
}
