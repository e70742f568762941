//! Séquences brutes et extraction de caractéristiques par séquence

use crate::codon::CodonFrequencyTable;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Séquence nucléotidique d'un participant
///
/// L'index est 1-based et correspond à la position de la ligne dans le
/// fichier source. Les caractères sont conservés tels quels: aucune
/// normalisation de casse, aucun rejet de base hors alphabet.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Sequence {
    index: usize,
    residues: String,
}

impl Sequence {
    /// Crée une séquence à la position `index` (1-based)
    pub fn new(index: usize, residues: impl Into<String>) -> Self {
        Self {
            index,
            residues: residues.into(),
        }
    }

    /// Numérote une liste de séquences à partir de 1
    pub fn numbered<I, S>(sequences: I) -> Vec<Self>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        sequences
            .into_iter()
            .enumerate()
            .map(|(i, residues)| Self::new(i + 1, residues))
            .collect()
    }

    pub fn index(&self) -> usize {
        self.index
    }

    pub fn as_str(&self) -> &str {
        &self.residues
    }

    /// Longueur en caractères
    pub fn len(&self) -> usize {
        self.residues.chars().count()
    }

    pub fn is_empty(&self) -> bool {
        self.residues.is_empty()
    }

    /// Calcule GC% et table des codons
    pub fn features(&self) -> SequenceFeatures {
        SequenceFeatures::extract(self.index, &self.residues)
    }
}

impl AsRef<str> for Sequence {
    fn as_ref(&self) -> &str {
        &self.residues
    }
}

impl fmt::Display for Sequence {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.residues)
    }
}

/// Arrondi au centième, demi-valeurs exactes vers le pair
fn round_hundredths(value: f64) -> f64 {
    (value * 100.0).round_ties_even() / 100.0
}

/// Calcule le contenu GC (%) d'une séquence, arrondi à deux décimales
///
/// Seuls `G` et `C` comptent au numérateur; tous les caractères comptent
/// au dénominateur. Une séquence vide vaut `0.00`.
pub fn gc_content(sequence: &str) -> f64 {
    let mut gc_count = 0usize;
    let mut total = 0usize;

    for c in sequence.chars() {
        if c == 'G' || c == 'C' {
            gc_count += 1;
        }
        total += 1;
    }

    if total == 0 {
        return 0.0;
    }

    round_hundredths(gc_count as f64 * 100.0 / total as f64)
}

/// Caractéristiques d'une séquence
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SequenceFeatures {
    /// Position 1-based de la séquence
    pub index: usize,
    /// Contenu GC en pourcentage, deux décimales
    pub gc_content: f64,
    /// Codons non chevauchants de la séquence
    pub codon_frequency: CodonFrequencyTable,
}

impl SequenceFeatures {
    /// Extrait les caractéristiques d'une séquence brute
    pub fn extract(index: usize, sequence: &str) -> Self {
        Self {
            index,
            gc_content: gc_content(sequence),
            codon_frequency: CodonFrequencyTable::from_sequence(sequence),
        }
    }
}

/// Extrait les caractéristiques de chaque séquence, index à partir de 1
pub fn extract_all<S: AsRef<str>>(sequences: &[S]) -> Vec<SequenceFeatures> {
    sequences
        .iter()
        .enumerate()
        .map(|(i, seq)| SequenceFeatures::extract(i + 1, seq.as_ref()))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_gc_content() {
        assert_eq!(gc_content("ATCGATCG"), 50.0);
        assert_eq!(gc_content("GGCC"), 100.0);
        assert_eq!(gc_content("ATAT"), 0.0);
    }

    #[test]
    fn test_gc_content_rounding() {
        // 15/32 = 46.875, 9/22 = 40.909...
        assert_eq!(gc_content("ATCGATCGTAGCTAGCTAGCTGATCGATCGAT"), 46.88);
        assert_eq!(gc_content("ATCGGTAAATGCCTGAAAGATG"), 40.91);
        assert_eq!(gc_content("GAA"), 33.33);
        assert_eq!(gc_content("GGA"), 66.67);
    }

    #[test]
    fn test_gc_content_half_rounds_to_even() {
        // 1/32 = 3.125, 5/32 = 15.625
        let one = format!("G{}", "A".repeat(31));
        let five = format!("GGGGG{}", "A".repeat(27));
        assert_eq!(gc_content(&one), 3.12);
        assert_eq!(gc_content(&five), 15.62);
    }

    #[test]
    fn test_gc_content_empty_sequence() {
        assert_eq!(gc_content(""), 0.0);
    }

    #[test]
    fn test_gc_content_counts_other_characters_in_length() {
        assert_eq!(gc_content("GCNN"), 50.0);
        // minuscules conservées telles quelles
        assert_eq!(gc_content("gcGC"), 50.0);
    }

    #[test]
    fn test_gc_independent_of_codon_truncation() {
        let features = SequenceFeatures::extract(1, "GCGCG");
        assert_eq!(features.gc_content, 100.0);
        assert_eq!(features.codon_frequency.total(), 1);
    }

    #[test]
    fn test_short_sequence_features() {
        let features = SequenceFeatures::extract(3, "GA");
        assert_eq!(features.index, 3);
        assert_eq!(features.gc_content, 50.0);
        assert!(features.codon_frequency.is_empty());
    }

    #[test]
    fn test_numbered_sequences() {
        let sequences = Sequence::numbered(["AAA", "CCC"]);
        assert_eq!(sequences[0].index(), 1);
        assert_eq!(sequences[1].index(), 2);
        assert_eq!(sequences[1].to_string(), "CCC");
        assert_eq!(sequences[1].features().codon_frequency.get("CCC"), 1);
    }

    #[test]
    fn test_extract_all_indices() {
        let features = extract_all(&["ATG", "", "GGGCCC"]);
        let indices: Vec<usize> = features.iter().map(|f| f.index).collect();
        assert_eq!(indices, vec![1, 2, 3]);
        assert_eq!(features[1].gc_content, 0.0);
    }
}
