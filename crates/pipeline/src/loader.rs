//! Chargement des séquences depuis le fichier texte du participant

use crate::error::Result;
use std::path::Path;

/// Une séquence par ligne, espaces de bord retirés, lignes vides ignorées
pub fn parse_sequences(text: &str) -> Vec<String> {
    text.lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .map(str::to_string)
        .collect()
}

/// Lit le fichier `.txt` d'un participant
pub fn load_sequences(path: &Path) -> Result<Vec<String>> {
    let text = std::fs::read_to_string(path)?;
    let sequences = parse_sequences(&text);
    tracing::debug!(path = %path.display(), count = sequences.len(), "Séquences chargées");
    Ok(sequences)
}
