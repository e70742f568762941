//! CLI du pipeline DNA ETL

use clap::{Parser, Subcommand};
use indicatif::{ProgressBar, ProgressStyle};
use std::path::PathBuf;

mod commands;
mod display;

use commands::{analyze, run};

#[derive(Parser)]
#[command(name = "dna-etl")]
#[command(about = "Fusion des métadonnées et des séquences d'un participant", long_about = None)]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Niveau de verbosité
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,
}

#[derive(Subcommand)]
enum Commands {
    /// Exécute le pipeline complet à partir d'un input.json
    Run {
        /// Fichier input.json (context_path, results_path)
        #[arg(short, long)]
        input: PathBuf,

        /// Fichier de configuration (TOML, JSON ou YAML)
        #[arg(short, long)]
        config: Option<PathBuf>,
    },

    /// Analyse un fichier de séquences sans métadonnées
    Analyze {
        /// Fichier texte, une séquence par ligne
        #[arg(short, long)]
        sequences: PathBuf,

        /// Identifiant du participant
        #[arg(short, long, default_value = "anonymous")]
        participant: String,

        /// Format d'affichage
        #[arg(short, long, value_enum, default_value = "table")]
        format: OutputFormat,
    },
}

#[derive(clap::ValueEnum, Clone, Copy)]
pub enum OutputFormat {
    Table,
    Json,
}

fn log_level(verbose: u8) -> &'static str {
    match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    }
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    dna_etl_core::init_logging(log_level(cli.verbose));

    match cli.command {
        Commands::Run { input, config } => {
            run::run(input, config)?;
        }
        Commands::Analyze {
            sequences,
            participant,
            format,
        } => {
            analyze::run(sequences, participant, format)?;
        }
    }

    Ok(())
}

/// Crée une barre de progression spinner
pub fn create_spinner(msg: &str) -> anyhow::Result<ProgressBar> {
    let pb = ProgressBar::new_spinner();
    pb.set_style(ProgressStyle::default_spinner().template("{spinner:.green} [{elapsed_precise}] {msg}")?);
    pb.set_message(msg.to_string());
    Ok(pb)
}
