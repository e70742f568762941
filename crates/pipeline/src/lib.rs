//! Pipeline ETL d'un participant
//!
//! Valide le descripteur d'entrée et le répertoire de contexte, contrôle et
//! nettoie les métadonnées JSON, charge les séquences, appelle le moteur
//! d'analyse puis écrit le document de résultats.

pub mod config;
pub mod error;
pub mod input;
pub mod loader;
pub mod metadata;
pub mod output;
pub mod runner;

pub use crate::config::PipelineConfig;
pub use error::{EtlError, Result};
pub use input::{resolve_input, InputDescriptor, ResolvedInput};
pub use loader::{load_sequences, parse_sequences};
pub use metadata::{remove_sensitive_data, validate_metadata};
pub use output::{build_final_output, build_results_block, write_output, FinalOutput, ParticipantResult, RunMetadata};
pub use runner::{run, RunSummary};
