//! Affichage des résultats dans le terminal

pub mod stats;
