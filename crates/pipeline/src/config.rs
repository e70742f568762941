//! Configuration du pipeline

use crate::error::Result;
use serde::Deserialize;
use std::path::Path;

/// Préfixe des variables d'environnement (`DNA_ETL_MIN_PARTICIPANT_AGE`, ...)
pub const ENV_PREFIX: &str = "DNA_ETL";

/// Seuils de validation et options de sortie
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct PipelineConfig {
    /// Âge minimum du participant, en années révolues
    pub min_participant_age: i32,
    /// Longueur maximale de toute valeur texte des métadonnées
    pub max_value_length: usize,
    /// Délai maximal entre demande et réalisation du test
    pub max_turnaround_days: i64,
    /// Délai maximal entre prélèvement et demande du test
    pub max_sample_age_days: i64,
    /// Les clés commençant par ce préfixe sont retirées de la sortie
    pub sensitive_key_prefix: String,
    /// Sortie JSON indentée
    pub pretty_output: bool,
}

impl Default for PipelineConfig {
    fn default() -> Self {
        Self {
            min_participant_age: 40,
            max_value_length: 64,
            max_turnaround_days: 365,
            max_sample_age_days: 365,
            sensitive_key_prefix: "_".to_string(),
            pretty_output: true,
        }
    }
}

impl PipelineConfig {
    /// Charge la configuration: fichier optionnel puis variables d'environnement
    ///
    /// Le format du fichier est déduit de son extension (TOML, JSON, YAML).
    pub fn load(path: Option<&Path>) -> Result<Self> {
        let mut builder = ::config::Config::builder();

        if let Some(path) = path {
            builder = builder.add_source(::config::File::from(path).required(true));
        }

        let settings = builder
            .add_source(::config::Environment::with_prefix(ENV_PREFIX).try_parsing(true))
            .build()?;

        let cfg = settings.try_deserialize::<PipelineConfig>()?;
        tracing::debug!(?cfg, "Configuration chargée");
        Ok(cfg)
    }
}
