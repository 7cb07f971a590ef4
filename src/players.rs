// Projection data loading and normalization.
//
// Reads per-position projection CSVs: one file per position with `name`,
// `team`, `bye` and the scoring-point columns (`std`/`standard`,
// `half_ppr`, `ppr`, plus the legacy `projected_points*` trio).

use serde::Deserialize;
use std::collections::HashMap;
use std::io::Read;
use std::path::Path;
use tracing::warn;

// ---------------------------------------------------------------------------
// Public types
// ---------------------------------------------------------------------------

/// A single player's projection row.
///
/// Point fields are `None` when the column is absent or non-numeric; a
/// missing value is never treated as zero at parse time. The scoring
/// calculator applies its own final zero fallback.
#[derive(Debug, Clone)]
pub struct PlayerRecord {
    pub name: String,
    pub team: Option<String>,
    pub bye: Option<u32>,
    pub standard: Option<f64>,
    pub half_ppr: Option<f64>,
    pub ppr: Option<f64>,
    pub projected_points: Option<f64>,
    pub projected_points_half_ppr: Option<f64>,
    pub projected_points_ppr: Option<f64>,
}

// ---------------------------------------------------------------------------
// Error type
// ---------------------------------------------------------------------------

#[derive(Debug, thiserror::Error)]
pub enum ProjectionError {
    #[error("failed to read file {path}: {source}")]
    Io {
        path: String,
        source: std::io::Error,
    },

    #[error("CSV error in {path}: {source}")]
    Csv { path: String, source: csv::Error },
}

// ---------------------------------------------------------------------------
// Raw CSV serde structs (private)
// ---------------------------------------------------------------------------

/// Raw projection CSV row. All point columns parse leniently: an absent or
/// unparseable value is `None`, never 0. Extra columns are absorbed via
/// `#[serde(flatten)]`.
#[derive(Debug, Deserialize)]
#[allow(dead_code)]
struct RawProjectionRow {
    #[serde(default)]
    name: String,
    #[serde(default)]
    team: String,
    #[serde(default, deserialize_with = "lenient_f64")]
    bye: Option<f64>,
    #[serde(rename = "std", alias = "standard", default, deserialize_with = "lenient_f64")]
    standard: Option<f64>,
    #[serde(default, deserialize_with = "lenient_f64")]
    half_ppr: Option<f64>,
    #[serde(default, deserialize_with = "lenient_f64")]
    ppr: Option<f64>,
    #[serde(default, deserialize_with = "lenient_f64")]
    projected_points: Option<f64>,
    #[serde(default, deserialize_with = "lenient_f64")]
    projected_points_half_ppr: Option<f64>,
    #[serde(default, deserialize_with = "lenient_f64")]
    projected_points_ppr: Option<f64>,
    /// Absorb any extra columns the projection source includes.
    #[serde(flatten)]
    _extra: HashMap<String, serde_json::Value>,
}

/// Parse a numeric field, mapping empty/unparseable/non-finite values to
/// `None` instead of failing the row. Accepts both numeric and string
/// content: with `#[serde(flatten)]` in the row struct, values arrive as
/// already-inferred numbers rather than raw CSV text.
fn lenient_f64<'de, D>(de: D) -> Result<Option<f64>, D::Error>
where
    D: serde::Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Raw {
        Num(f64),
        Text(String),
    }

    Ok(match Option::<Raw>::deserialize(de)? {
        Some(Raw::Num(v)) => Some(v).filter(|v| v.is_finite()),
        Some(Raw::Text(s)) => s.trim().parse::<f64>().ok().filter(|v| v.is_finite()),
        None => None,
    })
}

// ---------------------------------------------------------------------------
// Bye week fallback
// ---------------------------------------------------------------------------

/// 2025 season bye week for a team abbreviation, used when a projection row
/// carries no `bye` column. Covers the alternate codes some sources use
/// (JAX, LVR, WSH).
pub fn team_bye(team_code: &str) -> Option<u32> {
    match team_code.to_uppercase().as_str() {
        "ARI" => Some(8),
        "ATL" => Some(5),
        "BAL" => Some(7),
        "BUF" => Some(7),
        "CAR" => Some(14),
        "CHI" => Some(5),
        "CIN" => Some(10),
        "CLE" => Some(9),
        "DAL" => Some(10),
        "DEN" => Some(12),
        "DET" => Some(8),
        "GB" => Some(5),
        "HOU" => Some(6),
        "IND" => Some(11),
        "JAC" | "JAX" => Some(8),
        "KC" => Some(10),
        "LV" | "LVR" => Some(8),
        "LAC" => Some(12),
        "LAR" => Some(8),
        "MIA" => Some(12),
        "MIN" => Some(6),
        "NE" => Some(14),
        "NO" => Some(11),
        "NYG" => Some(14),
        "NYJ" => Some(9),
        "PHI" => Some(9),
        "PIT" => Some(5),
        "SF" => Some(14),
        "SEA" => Some(8),
        "TB" => Some(9),
        "TEN" => Some(10),
        "WAS" | "WSH" => Some(12),
        _ => None,
    }
}

// ---------------------------------------------------------------------------
// Loaders
// ---------------------------------------------------------------------------

/// Reader-based loader (private, enables testing without temp files).
fn load_players_from_reader<R: Read>(rdr: R) -> Result<Vec<PlayerRecord>, csv::Error> {
    let mut reader = csv::Reader::from_reader(rdr);
    let mut players = Vec::new();
    for result in reader.deserialize::<RawProjectionRow>() {
        match result {
            Ok(raw) => {
                let name = raw.name.trim().to_string();
                if name.is_empty() {
                    warn!("skipping projection row without a name");
                    continue;
                }
                let team = Some(raw.team.trim().to_string()).filter(|t| !t.is_empty());
                let bye = raw
                    .bye
                    .map(|b| b.round() as u32)
                    .or_else(|| team.as_deref().and_then(team_bye));
                players.push(PlayerRecord {
                    name,
                    team,
                    bye,
                    standard: raw.standard,
                    half_ppr: raw.half_ppr,
                    ppr: raw.ppr,
                    projected_points: raw.projected_points,
                    projected_points_half_ppr: raw.projected_points_half_ppr,
                    projected_points_ppr: raw.projected_points_ppr,
                });
            }
            Err(e) => {
                warn!("skipping malformed projection row: {}", e);
            }
        }
    }
    Ok(players)
}

/// Load a position's projection rows from a CSV file.
pub fn load_projections(path: &Path) -> Result<Vec<PlayerRecord>, ProjectionError> {
    let file = std::fs::File::open(path).map_err(|e| ProjectionError::Io {
        path: path.display().to_string(),
        source: e,
    })?;
    load_players_from_reader(file).map_err(|e| ProjectionError::Csv {
        path: path.display().to_string(),
        source: e,
    })
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn csv_roundtrip() {
        let csv_data = "\
name,team,bye,std,half_ppr,ppr
Josh Allen,BUF,7,380.5,380.5,380.5
Lamar Jackson,BAL,7,370.2,370.2,370.2";

        let players = load_players_from_reader(csv_data.as_bytes()).unwrap();
        assert_eq!(players.len(), 2);

        assert_eq!(players[0].name, "Josh Allen");
        assert_eq!(players[0].team.as_deref(), Some("BUF"));
        assert_eq!(players[0].bye, Some(7));
        assert_eq!(players[0].standard, Some(380.5));
        assert_eq!(players[0].half_ppr, Some(380.5));
        assert_eq!(players[0].ppr, Some(380.5));
        assert!(players[0].projected_points.is_none());

        assert_eq!(players[1].name, "Lamar Jackson");
    }

    #[test]
    fn legacy_columns_parsed() {
        let csv_data = "\
name,team,bye,projected_points,projected_points_half_ppr,projected_points_ppr
Old Format,DAL,10,250.0,260.0,270.0";

        let players = load_players_from_reader(csv_data.as_bytes()).unwrap();
        assert_eq!(players[0].projected_points, Some(250.0));
        assert_eq!(players[0].projected_points_half_ppr, Some(260.0));
        assert_eq!(players[0].projected_points_ppr, Some(270.0));
        assert!(players[0].standard.is_none());
    }

    #[test]
    fn standard_alias_for_std() {
        let csv_data = "\
name,team,bye,standard
Alias Player,MIN,6,200.0";

        let players = load_players_from_reader(csv_data.as_bytes()).unwrap();
        assert_eq!(players[0].standard, Some(200.0));
    }

    #[test]
    fn non_numeric_points_are_none_not_zero() {
        let csv_data = "\
name,team,bye,std,half_ppr,ppr
Partial Data,SEA,8,150.0,,oops";

        let players = load_players_from_reader(csv_data.as_bytes()).unwrap();
        assert_eq!(players[0].standard, Some(150.0));
        assert!(players[0].half_ppr.is_none());
        assert!(players[0].ppr.is_none());
    }

    #[test]
    fn nan_value_treated_as_missing() {
        let csv_data = "\
name,team,bye,std,ppr
NaN Player,KC,10,120.0,NaN";

        let players = load_players_from_reader(csv_data.as_bytes()).unwrap();
        assert_eq!(players[0].standard, Some(120.0));
        assert!(players[0].ppr.is_none());
    }

    #[test]
    fn rows_without_name_discarded() {
        let csv_data = "\
name,team,bye,std
Valid Player,GB,5,180.0
,GB,5,170.0
   ,GB,5,160.0
Another Valid,CHI,5,150.0";

        let players = load_players_from_reader(csv_data.as_bytes()).unwrap();
        assert_eq!(players.len(), 2);
        assert_eq!(players[0].name, "Valid Player");
        assert_eq!(players[1].name, "Another Valid");
    }

    #[test]
    fn extra_columns_ignored() {
        let csv_data = "\
name,team,bye,std,half_ppr,ppr,rank,adp,notes
Extra Cols,PHI,9,300.0,310.0,320.0,1,1.5,elite";

        let players = load_players_from_reader(csv_data.as_bytes()).unwrap();
        assert_eq!(players.len(), 1);
        assert_eq!(players[0].ppr, Some(320.0));
    }

    #[test]
    fn names_and_teams_trimmed() {
        let csv_data = "\
name,team,bye,std
  Josh Allen  , BUF ,7,380.5";

        let players = load_players_from_reader(csv_data.as_bytes()).unwrap();
        assert_eq!(players[0].name, "Josh Allen");
        assert_eq!(players[0].team.as_deref(), Some("BUF"));
    }

    #[test]
    fn missing_team_is_none() {
        let csv_data = "\
name,team,bye,std
Free Agent,,7,100.0";

        let players = load_players_from_reader(csv_data.as_bytes()).unwrap();
        assert!(players[0].team.is_none());
    }

    #[test]
    fn bye_falls_back_to_team_table() {
        let csv_data = "\
name,team,std
No Bye Column,BUF,200.0
Unknown Team,XYZ,150.0";

        let players = load_players_from_reader(csv_data.as_bytes()).unwrap();
        assert_eq!(players[0].bye, Some(7));
        assert!(players[1].bye.is_none());
    }

    #[test]
    fn team_bye_alternate_codes() {
        assert_eq!(team_bye("JAX"), team_bye("JAC"));
        assert_eq!(team_bye("LVR"), team_bye("LV"));
        assert_eq!(team_bye("WSH"), team_bye("WAS"));
        assert_eq!(team_bye("gb"), Some(5));
        assert_eq!(team_bye(""), None);
    }

    #[test]
    fn empty_csv_returns_empty_vec() {
        let csv_data = "name,team,bye,std";
        let players = load_players_from_reader(csv_data.as_bytes()).unwrap();
        assert!(players.is_empty());
    }
}
