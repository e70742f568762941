//! Assemblage et écriture du document de résultats

use crate::error::Result;
use chrono::{DateTime, SecondsFormat, Utc};
use dna_etl_core::FeatureRecord;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::path::{Path, PathBuf};

/// Référence au participant
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ParticipantRef {
    #[serde(rename = "_id")]
    pub id: String,
}

/// Résultats d'un participant
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ParticipantResult {
    pub participant: ParticipantRef,
    /// Caractéristiques des séquences
    pub txt: FeatureRecord,
    /// Métadonnées nettoyées
    #[serde(rename = "JSON")]
    pub json: Value,
}

/// Métadonnées de l'exécution
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RunMetadata {
    pub start_at: String,
    pub end_at: String,
    pub context_path: String,
    pub results_path: String,
}

impl RunMetadata {
    pub fn new(start: DateTime<Utc>, end: DateTime<Utc>, context_path: &Path, results_path: &Path) -> Self {
        Self {
            start_at: format_timestamp(start),
            end_at: format_timestamp(end),
            context_path: context_path.display().to_string(),
            results_path: results_path.display().to_string(),
        }
    }
}

/// Document final écrit sur disque
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FinalOutput {
    pub metadata: RunMetadata,
    pub results: Vec<ParticipantResult>,
}

/// Horodatage RFC 3339 en UTC, microsecondes: `2024-05-01T13:37:39.000000+00:00`
pub fn format_timestamp(at: DateTime<Utc>) -> String {
    at.to_rfc3339_opts(SecondsFormat::Micros, false)
}

pub fn build_results_block(participant_id: &str, json: Value, txt: FeatureRecord) -> ParticipantResult {
    ParticipantResult {
        participant: ParticipantRef {
            id: participant_id.to_string(),
        },
        txt,
        json,
    }
}

pub fn build_final_output(metadata: RunMetadata, results: Vec<ParticipantResult>) -> FinalOutput {
    FinalOutput { metadata, results }
}

/// Écrit `<results_dir>/<participant_id>.json`, en écrasant un fichier existant
pub fn write_output<T: Serialize>(results_dir: &Path, participant_id: &str, data: &T, pretty: bool) -> Result<PathBuf> {
    std::fs::create_dir_all(results_dir)?;
    let path = results_dir.join(format!("{participant_id}.json"));

    let json = if pretty {
        serde_json::to_string_pretty(data)?
    } else {
        serde_json::to_string(data)?
    };
    std::fs::write(&path, json)?;

    tracing::info!(path = %path.display(), "Résultats écrits");
    Ok(path)
}
