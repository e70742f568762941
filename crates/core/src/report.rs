//! Assemblage du rapport de caractéristiques d'un participant

use crate::codon::{CodonAggregate, CodonFrequencyTable, CODON_LENGTH, NO_CODON};
use crate::error::{DnaError, Result};
use crate::lcs::LcsResult;
use crate::sequence::SequenceFeatures;
use serde::{Deserialize, Serialize};

/// Rapport `txt` d'un participant
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FeatureRecord {
    /// Caractéristiques par séquence, dans l'ordre des index
    pub sequences: Vec<SequenceFeatures>,
    /// Codon le plus fréquent sur toutes les séquences
    pub most_common_codon: String,
    /// Absent lorsque le participant a moins de deux séquences
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub lcs: Option<LcsResult>,
}

impl FeatureRecord {
    /// Sérialise en JSON compact
    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string(self)?)
    }

    /// Sérialise en JSON indenté
    pub fn to_json_pretty(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}

/// Constructeur du [`FeatureRecord`]
///
/// Vérifie la cohérence des morceaux assemblés avant de produire le rapport.
#[derive(Debug, Default)]
pub struct FeatureReportBuilder {
    sequences: Vec<SequenceFeatures>,
    codons: Option<CodonAggregate>,
    lcs: Option<LcsResult>,
}

impl FeatureReportBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn sequences(mut self, sequences: Vec<SequenceFeatures>) -> Self {
        self.sequences = sequences;
        self
    }

    pub fn codons(mut self, codons: CodonAggregate) -> Self {
        self.codons = Some(codons);
        self
    }

    pub fn lcs(mut self, lcs: Option<LcsResult>) -> Self {
        self.lcs = lcs;
        self
    }

    /// Produit le rapport après vérification des invariants
    pub fn build(self) -> Result<FeatureRecord> {
        let codons = self
            .codons
            .ok_or_else(|| DnaError::InconsistentReport("statistiques de codons manquantes".to_string()))?;

        check_indices(&self.sequences)?;
        for features in &self.sequences {
            check_codon_lengths(&features.codon_frequency)?;
        }
        check_global_frequency(&self.sequences, &codons)?;
        if let Some(lcs) = &self.lcs {
            check_lcs(lcs, self.sequences.len())?;
        }

        Ok(FeatureRecord {
            sequences: self.sequences,
            most_common_codon: codons.most_common,
            lcs: self.lcs,
        })
    }
}

fn inconsistent(msg: String) -> DnaError {
    DnaError::InconsistentReport(msg)
}

fn check_indices(sequences: &[SequenceFeatures]) -> Result<()> {
    for (position, features) in sequences.iter().enumerate() {
        if features.index != position + 1 {
            return Err(inconsistent(format!(
                "index {} à la position {}",
                features.index,
                position + 1
            )));
        }
    }
    Ok(())
}

fn check_codon_lengths(table: &CodonFrequencyTable) -> Result<()> {
    match table.iter().find(|(codon, _)| codon.chars().count() != CODON_LENGTH) {
        Some((codon, _)) => Err(inconsistent(format!("codon de longueur invalide: {codon:?}"))),
        None => Ok(()),
    }
}

fn check_global_frequency(sequences: &[SequenceFeatures], codons: &CodonAggregate) -> Result<()> {
    check_codon_lengths(&codons.global_frequency)?;

    let per_sequence: usize = sequences.iter().map(|f| f.codon_frequency.total()).sum();
    let global = codons.global_frequency.total();
    if per_sequence != global {
        return Err(inconsistent(format!(
            "total global {global} différent de la somme par séquence {per_sequence}"
        )));
    }

    let known = if codons.most_common == NO_CODON {
        codons.global_frequency.is_empty()
    } else {
        codons.global_frequency.get(&codons.most_common) > 0
    };
    if !known {
        return Err(inconsistent(format!(
            "codon le plus fréquent {:?} absent de la table globale",
            codons.most_common
        )));
    }

    Ok(())
}

fn check_lcs(lcs: &LcsResult, sequence_count: usize) -> Result<()> {
    let (i, j) = lcs.sequences;
    if i == 0 || i >= j || j > sequence_count {
        return Err(inconsistent(format!(
            "paire ({i}, {j}) invalide pour {sequence_count} séquences"
        )));
    }
    if lcs.value.chars().count() != lcs.length {
        return Err(inconsistent(format!(
            "longueur {} différente de celle de {:?}",
            lcs.length, lcs.value
        )));
    }
    Ok(())
}
