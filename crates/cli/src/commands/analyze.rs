//! Commande d'analyse d'un fichier de séquences

use crate::display::stats::display_record;
use crate::OutputFormat;
use anyhow::Result;
use dna_etl_core::analyze_participant;
use dna_etl_pipeline::load_sequences;
use std::path::PathBuf;

pub fn run(sequences: PathBuf, participant: String, format: OutputFormat) -> Result<()> {
    let loaded = load_sequences(&sequences)?;
    let record = analyze_participant(&participant, &loaded)?;

    match format {
        OutputFormat::Table => {
            println!("📊 {}: {} séquences", participant, loaded.len());
            display_record(&record);
        }
        OutputFormat::Json => println!("{}", record.to_json_pretty()?),
    }

    Ok(())
}
