//! DNA ETL Core
//!
//! Moteur d'analyse des séquences d'un participant: contenu GC, fréquence
//! des codons, codon le plus fréquent et plus longue sous-chaîne commune
//! entre paires de séquences.

pub mod codon;
pub mod engine;
pub mod error;
pub mod lcs;
pub mod logging;
pub mod ordering;
pub mod report;
pub mod sequence;

// Réexportations principales
pub use codon::{aggregate, CodonAggregate, CodonFrequencyTable, CODON_LENGTH, NO_CODON};
pub use engine::{analyze_participant, SequenceAnalyticsEngine};
pub use error::{DnaError, Result};
pub use lcs::{longest_common_substring, pairwise_lcs, select_best, LcsEngine, LcsResult};
pub use logging::init_logging;
// La macro log_operation est exportée à la racine du crate
pub use ordering::{rank_score_then_value, Ranked};
pub use report::{FeatureRecord, FeatureReportBuilder};
pub use sequence::{extract_all, gc_content, Sequence, SequenceFeatures};
