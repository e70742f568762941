//! Sous-commandes de la CLI

pub mod analyze;
pub mod run;
