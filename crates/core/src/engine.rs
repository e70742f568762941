//! Moteur d'analyse d'un participant
//!
//! Séquences brutes → caractéristiques par séquence → agrégation des codons
//! et, indépendamment, comparaison par paires → rapport final.

use crate::codon::aggregate;
use crate::error::Result;
use crate::lcs::LcsEngine;
use crate::log_operation;
use crate::report::{FeatureRecord, FeatureReportBuilder};
use crate::sequence::extract_all;

/// Moteur d'analyse des séquences d'un participant
#[derive(Debug, Clone, Copy, Default)]
pub struct SequenceAnalyticsEngine {
    lcs: LcsEngine,
}

impl SequenceAnalyticsEngine {
    /// Crée un moteur avec comparaison parallèle des paires
    pub fn new() -> Self {
        Self::default()
    }

    /// Crée un moteur avec un moteur LCS donné
    pub fn with_lcs_engine(lcs: LcsEngine) -> Self {
        Self { lcs }
    }

    /// Analyse les séquences d'un participant
    ///
    /// La sous-chaîne commune n'est calculée qu'à partir de deux séquences;
    /// en dessous, le champ `lcs` du rapport reste vide.
    pub fn analyze<S: AsRef<str>>(&self, participant_id: &str, sequences: &[S]) -> Result<FeatureRecord> {
        log_operation!("analyze_participant", {
            tracing::info!(participant = participant_id, sequences = sequences.len(), "Analyse du participant");

            let features = extract_all(sequences);
            let codons = aggregate(features.iter().map(|f| &f.codon_frequency));

            let lcs = if sequences.len() >= 2 {
                Some(self.lcs.find(sequences)?)
            } else {
                tracing::warn!(
                    participant = participant_id,
                    "Moins de deux séquences, comparaison par paires ignorée"
                );
                None
            };

            FeatureReportBuilder::new()
                .sequences(features)
                .codons(codons)
                .lcs(lcs)
                .build()
        })
    }
}

/// Analyse avec le moteur par défaut
pub fn analyze_participant<S: AsRef<str>>(participant_id: &str, sequences: &[S]) -> Result<FeatureRecord> {
    SequenceAnalyticsEngine::default().analyze(participant_id, sequences)
}
