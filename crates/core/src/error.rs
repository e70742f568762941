//! Types d'erreurs pour le moteur d'analyse de séquences

use thiserror::Error;

#[derive(Error, Debug)]
pub enum DnaError {
    #[error("Comparaison par paires impossible: besoin d'au moins 2 séquences, avons {have}")]
    InsufficientSequences { have: usize },

    #[error("Rapport incohérent: {0}")]
    InconsistentReport(String),

    #[error("Erreur de sérialisation: {0}")]
    Serialization(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, DnaError>;
