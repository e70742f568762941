//! Commande d'exécution du pipeline

use crate::create_spinner;
use anyhow::{Context, Result};
use chrono::Local;
use console::style;
use dna_etl_pipeline::{runner, PipelineConfig};
use std::path::PathBuf;

pub fn run(input: PathBuf, config: Option<PathBuf>) -> Result<()> {
    println!("🧬 Pipeline: {}", input.display());

    let cfg = PipelineConfig::load(config.as_deref()).context("chargement de la configuration")?;

    let spinner = create_spinner("Traitement du participant...")?;
    spinner.enable_steady_tick(std::time::Duration::from_millis(100));
    let result = runner::run(&input, &cfg, Local::now().date_naive());
    spinner.finish_and_clear();

    let summary = result.with_context(|| format!("échec du pipeline pour {}", input.display()))?;

    println!(
        "{} Participant {} ({} séquences) → {}",
        style("✅").green(),
        style(&summary.participant_id).bold(),
        summary.sequence_count,
        summary.output_path.display()
    );

    Ok(())
}
