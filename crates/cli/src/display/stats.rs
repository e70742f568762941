//! Affichage des caractéristiques d'un participant

use dna_etl_core::FeatureRecord;
use tabled::{Table, Tabled};

#[derive(Tabled)]
struct SequenceRow {
    #[tabled(rename = "#")]
    index: usize,
    #[tabled(rename = "GC%")]
    gc_percent: String,
    #[tabled(rename = "Codons")]
    codons: usize,
    #[tabled(rename = "Distinct")]
    distinct: usize,
    #[tabled(rename = "Top codon")]
    top_codon: String,
}

/// Affiche le tableau par séquence puis les statistiques globales
pub fn display_record(record: &FeatureRecord) {
    let rows: Vec<SequenceRow> = record
        .sequences
        .iter()
        .map(|f| SequenceRow {
            index: f.index,
            gc_percent: format!("{:.2}", f.gc_content),
            codons: f.codon_frequency.total(),
            distinct: f.codon_frequency.len(),
            top_codon: f
                .codon_frequency
                .most_common()
                .map(|(codon, count)| format!("{codon} ({count})"))
                .unwrap_or_else(|| "-".to_string()),
        })
        .collect();

    println!();
    println!("{}", Table::new(rows));

    let most_common = if record.most_common_codon.is_empty() {
        "-"
    } else {
        record.most_common_codon.as_str()
    };
    println!("Codon le plus fréquent : {most_common}");

    match &record.lcs {
        Some(lcs) => println!(
            "Sous-chaîne commune    : {:?} (longueur {}, séquences {} et {})",
            lcs.value, lcs.length, lcs.sequences.0, lcs.sequences.1
        ),
        None => println!("Sous-chaîne commune    : - (moins de deux séquences)"),
    }
}
