//! Exécution complète du pipeline pour un participant

use crate::config::PipelineConfig;
use crate::error::Result;
use crate::input::resolve_input;
use crate::loader::load_sequences;
use crate::metadata::{remove_sensitive_data, validate_metadata};
use crate::output::{build_final_output, build_results_block, write_output, RunMetadata};
use chrono::{NaiveDate, Utc};
use dna_etl_core::analyze_participant;
use serde_json::Value;
use std::path::{Path, PathBuf};

/// Résumé d'une exécution réussie
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunSummary {
    pub participant_id: String,
    pub output_path: PathBuf,
    pub sequence_count: usize,
}

/// Lance le pipeline à partir d'un fichier `input.json`
///
/// `today` sert de référence pour l'âge et les dates des métadonnées.
pub fn run(input_file: &Path, cfg: &PipelineConfig, today: NaiveDate) -> Result<RunSummary> {
    let start = Utc::now();
    tracing::info!(input = %input_file.display(), "Démarrage du pipeline");

    // 1. Entrée et fichiers du participant
    let resolved = resolve_input(input_file)?;

    // 2. Métadonnées
    let metadata: Value = serde_json::from_str(&std::fs::read_to_string(&resolved.json_path)?)?;
    if let Err(e) = validate_metadata(&metadata, cfg, today) {
        tracing::error!(participant = %resolved.participant_id, error = %e, "Métadonnées rejetées");
        return Err(e);
    }
    let cleaned = remove_sensitive_data(&metadata, &cfg.sensitive_key_prefix);

    // 3. Séquences
    let sequences = load_sequences(&resolved.txt_path)?;

    // 4. Analyse
    let record = analyze_participant(&resolved.participant_id, &sequences)?;

    // 5. Assemblage et écriture
    let end = Utc::now();
    let run_metadata = RunMetadata::new(start, end, &resolved.context_path, &resolved.results_path);
    let item = build_results_block(&resolved.participant_id, cleaned, record);
    let output = build_final_output(run_metadata, vec![item]);
    let output_path = write_output(&resolved.results_path, &resolved.participant_id, &output, cfg.pretty_output)?;

    tracing::info!(
        participant = %resolved.participant_id,
        sequences = sequences.len(),
        elapsed_ms = (end - start).num_milliseconds(),
        "Pipeline terminé"
    );

    Ok(RunSummary {
        participant_id: resolved.participant_id,
        output_path,
        sequence_count: sequences.len(),
    })
}
