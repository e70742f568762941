//! Système de logging pour le moteur d'analyse

use tracing_subscriber::{fmt, EnvFilter};

/// Initialise le système de logging
///
/// `RUST_LOG` a priorité sur `default_level` lorsqu'il est défini.
/// Un second appel est sans effet.
pub fn init_logging(default_level: &str) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    let _ = fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_thread_ids(true)
        .with_thread_names(true)
        .try_init();
}

/// Exécute un bloc dans un span INFO et journalise sa durée
#[macro_export]
macro_rules! log_operation {
    ($name:expr, $block:block) => {{
        let span = tracing::info_span!($name);
        let _enter = span.enter();
        let started = std::time::Instant::now();
        tracing::debug!(operation = $name, "Début");
        let result = $block;
        tracing::info!(
            operation = $name,
            elapsed_us = started.elapsed().as_micros() as u64,
            "Terminé"
        );
        result
    }};
}
