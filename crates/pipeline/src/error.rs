//! Gestion des erreurs pour le pipeline ETL

use dna_etl_core::DnaError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum EtlError {
    #[error("Fichier d'entrée invalide: {0}")]
    InvalidInput(String),

    #[error("Répertoire de contexte invalide: {0}")]
    InvalidContext(String),

    #[error("Chemin de résultats invalide: {0}")]
    InvalidResultsPath(String),

    #[error("Noms de fichiers différents: {json} / {txt}")]
    FileNameMismatch { json: String, txt: String },

    #[error("Champ de métadonnées manquant: {0}")]
    MissingField(String),

    #[error("Date invalide pour {field}: {value:?}")]
    InvalidDate { field: String, value: String },

    #[error("Participant trop jeune: {age} ans < {min}")]
    ParticipantTooYoung { age: i32, min: i32 },

    #[error("Dates incohérentes: {0}")]
    InconsistentDates(String),

    #[error("Valeur trop longue pour {path}: {len} > {max}")]
    ValueTooLong { path: String, len: usize, max: usize },

    #[error("Erreur IO: {0}")]
    Io(#[from] std::io::Error),

    #[error("Erreur de sérialisation: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Erreur de configuration: {0}")]
    Config(#[from] ::config::ConfigError),

    #[error(transparent)]
    Analysis(#[from] DnaError),
}

pub type Result<T> = std::result::Result<T, EtlError>;
