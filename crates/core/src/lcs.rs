//! Plus longue sous-chaîne commune sur toutes les paires de séquences
//!
//! Chaque paire `(i, j)`, `i < j`, produit un candidat. Le gagnant global
//! est le minimum selon l'ordre total: longueur décroissante, valeur
//! lexicographique croissante, puis `i`, puis `j` croissants. L'ordre
//! d'évaluation des paires n'a donc aucune influence sur le résultat.

use crate::error::{DnaError, Result};
use crate::ordering::rank_score_then_value;
use rayon::prelude::*;
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;

/// Sous-chaîne commune gagnante et la paire qui l'a produite
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct LcsResult {
    /// Sous-chaîne commune (vide si aucune base partagée)
    pub value: String,
    /// Indices 1-based `(i, j)` avec `i < j`
    pub sequences: (usize, usize),
    /// Longueur de `value` en caractères
    pub length: usize,
}

impl LcsResult {
    /// Compare deux candidats, `Ordering::Less` pour le meilleur
    pub fn rank_cmp(&self, other: &Self) -> Ordering {
        rank_score_then_value(self.length, &self.value, other.length, &other.value)
            .then_with(|| self.sequences.cmp(&other.sequences))
    }
}

/// Plus longue sous-chaîne commune de deux séquences
///
/// Programmation dynamique sur les suffixes communs, deux lignes de
/// `|b| + 1` cellules. Parmi plusieurs sous-chaînes de longueur maximale,
/// la plus petite lexicographiquement est retenue; la comparaison n'a lieu
/// qu'une fois par diagonale. Retourne `(début dans a, longueur)`.
pub fn longest_common_substring(a: &[char], b: &[char]) -> (usize, usize) {
    let mut prev = vec![0usize; b.len() + 1];
    let mut curr = vec![0usize; b.len() + 1];

    let mut best_start = 0;
    let mut best_len = 0;

    for i in 1..=a.len() {
        for j in 1..=b.len() {
            if a[i - 1] != b[j - 1] {
                curr[j] = 0;
                continue;
            }

            let len = prev[j - 1] + 1;
            curr[j] = len;
            let start = i - len;

            if len > best_len {
                best_len = len;
                best_start = start;
                continue;
            }

            // une égalité n'est comparée qu'en fin de diagonale
            let run_ends = i == a.len() || j == b.len() || a[i] != b[j];
            if run_ends && len == best_len && a[start..i] < a[best_start..best_start + best_len] {
                best_start = start;
            }
        }
        std::mem::swap(&mut prev, &mut curr);
    }

    (best_start, best_len)
}

/// Candidat pour la paire `(i, j)` (indices 0-based en entrée)
fn pair_candidate(sequences: &[Vec<char>], i: usize, j: usize) -> LcsResult {
    let a = &sequences[i];
    let (start, length) = longest_common_substring(a, &sequences[j]);
    let value: String = a[start..start + length].iter().collect();

    tracing::debug!(i = i + 1, j = j + 1, length, value = %value, "Paire comparée");

    LcsResult {
        value,
        sequences: (i + 1, j + 1),
        length,
    }
}

/// Sélectionne le meilleur candidat selon l'ordre total
pub fn select_best<I>(candidates: I) -> Option<LcsResult>
where
    I: IntoIterator<Item = LcsResult>,
{
    candidates.into_iter().min_by(LcsResult::rank_cmp)
}

/// Moteur de comparaison par paires
#[derive(Debug, Clone, Copy)]
pub struct LcsEngine {
    parallel: bool,
}

impl Default for LcsEngine {
    fn default() -> Self {
        Self { parallel: true }
    }
}

impl LcsEngine {
    /// Crée un moteur évaluant les paires en parallèle
    pub fn new() -> Self {
        Self::default()
    }

    /// Crée un moteur évaluant les paires dans l'ordre, sur un seul thread
    pub fn sequential() -> Self {
        Self { parallel: false }
    }

    pub fn is_parallel(&self) -> bool {
        self.parallel
    }

    /// Calcule le candidat de chaque paire `(i, j)`, `i < j`, dans l'ordre des indices
    pub fn pair_candidates<S: AsRef<str>>(&self, sequences: &[S]) -> Vec<LcsResult> {
        let chars = to_chars(sequences);
        let pairs = index_pairs(chars.len());

        if self.parallel {
            pairs
                .par_iter()
                .map(|&(i, j)| pair_candidate(&chars, i, j))
                .collect()
        } else {
            pairs
                .iter()
                .map(|&(i, j)| pair_candidate(&chars, i, j))
                .collect()
        }
    }

    /// Meilleure sous-chaîne commune sur toutes les paires
    ///
    /// Exige au moins deux séquences; sinon
    /// [`DnaError::InsufficientSequences`] est renvoyée.
    pub fn find<S: AsRef<str>>(&self, sequences: &[S]) -> Result<LcsResult> {
        let have = sequences.len();
        if have < 2 {
            return Err(DnaError::InsufficientSequences { have });
        }

        let chars = to_chars(sequences);
        let pairs = index_pairs(have);

        let best = if self.parallel {
            pairs
                .par_iter()
                .map(|&(i, j)| pair_candidate(&chars, i, j))
                .min_by(LcsResult::rank_cmp)
        } else {
            select_best(pairs.iter().map(|&(i, j)| pair_candidate(&chars, i, j)))
        };

        let best = best.ok_or(DnaError::InsufficientSequences { have })?;
        tracing::debug!(
            pairs = pairs.len(),
            length = best.length,
            i = best.sequences.0,
            j = best.sequences.1,
            "Sous-chaîne commune retenue"
        );
        Ok(best)
    }
}

/// Raccourci pour [`LcsEngine::find`] avec le moteur par défaut
pub fn pairwise_lcs<S: AsRef<str>>(sequences: &[S]) -> Result<LcsResult> {
    LcsEngine::default().find(sequences)
}

fn to_chars<S: AsRef<str>>(sequences: &[S]) -> Vec<Vec<char>> {
    sequences
        .iter()
        .map(|s| s.as_ref().chars().collect())
        .collect()
}

fn index_pairs(n: usize) -> Vec<(usize, usize)> {
    (0..n)
        .flat_map(|i| (i + 1..n).map(move |j| (i, j)))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn chars(s: &str) -> Vec<char> {
        s.chars().collect()
    }

    fn lcs_of(a: &str, b: &str) -> String {
        let a = chars(a);
        let (start, len) = longest_common_substring(&a, &chars(b));
        a[start..start + len].iter().collect()
    }

    #[test]
    fn test_two_strings() {
        assert_eq!(lcs_of("ATCGATCGTAGCTAGCTAGCTGATCGATCGAT", "ATCGGTAAATGCCTGAAAGATG"), "ATCG");
        assert_eq!(lcs_of("GATTACA", "TACAGAT"), "TACA");
        assert_eq!(lcs_of("AAAA", "CCCC"), "");
        assert_eq!(lcs_of("", "ACGT"), "");
    }

    #[test]
    fn test_two_strings_tie_is_lexicographic() {
        // "GG" et "AA" sont communes, "AA" arrive en second dans a
        assert_eq!(lcs_of("GGTAA", "AACGG"), "AA");
        assert_eq!(lcs_of("AACGG", "GGTAA"), "AA");
    }

    #[test]
    fn test_long_homopolymers() {
        let a = "A".repeat(400);
        let b = "A".repeat(300);
        assert_eq!(lcs_of(&a, &b), "A".repeat(300));
        assert_eq!(lcs_of(&b, &a), "A".repeat(300));
    }

    #[test]
    fn test_tandem_repeat_tie_inside_run() {
        // "CA" et "AC" sont les seules communes de longueur 2
        assert_eq!(lcs_of("CACACA", "TCATTACT"), "AC");
    }

    #[test]
    fn test_pair_candidates_order() {
        let engine = LcsEngine::sequential();
        let candidates = engine.pair_candidates(&["AC", "CA", "GA"]);
        let pairs: Vec<(usize, usize)> = candidates.iter().map(|c| c.sequences).collect();
        assert_eq!(pairs, vec![(1, 2), (1, 3), (2, 3)]);
    }

    #[test]
    fn test_longer_wins() {
        let result = pairwise_lcs(&["GATTACA", "TACAGAT", "ACAGATC"]).unwrap();
        assert_eq!(result.value, "ACAGAT");
        assert_eq!(result.sequences, (2, 3));
        assert_eq!(result.length, 6);
    }

    #[test]
    fn test_equal_length_lexicographic_value_wins() {
        // (1,2) -> "AB", (1,3) -> "AA", (2,3) -> rien
        let result = pairwise_lcs(&["ABXAA", "ABY", "ZAA"]).unwrap();
        assert_eq!(result.value, "AA");
        assert_eq!(result.sequences, (1, 3));
        assert_eq!(result.length, 2);
    }

    #[test]
    fn test_equal_value_lowest_pair_wins() {
        // les trois paires partagent "GAT"
        let result = pairwise_lcs(&["GATCC", "TTGAT", "GGATG"]).unwrap();
        assert_eq!(result.value, "GAT");
        assert_eq!(result.sequences, (1, 2));
    }

    #[test]
    fn test_empty_match_resolves_to_first_pair() {
        let result = pairwise_lcs(&["AAA", "CCC", "GGG"]).unwrap();
        assert_eq!(result.value, "");
        assert_eq!(result.length, 0);
        assert_eq!(result.sequences, (1, 2));
    }

    #[test]
    fn test_single_sequence_is_rejected() {
        let err = pairwise_lcs(&["ACGT"]).unwrap_err();
        assert!(matches!(err, DnaError::InsufficientSequences { have: 1 }));

        let none: [&str; 0] = [];
        assert!(matches!(
            pairwise_lcs(&none),
            Err(DnaError::InsufficientSequences { have: 0 })
        ));
    }

    #[test]
    fn test_parallel_matches_sequential() {
        let sequences = ["GATTACA", "TACAGAT", "ACAGATC", "CCGATTA", "TTTTGAT"];
        let parallel = LcsEngine::new().find(&sequences).unwrap();
        let sequential = LcsEngine::sequential().find(&sequences).unwrap();
        assert_eq!(parallel, sequential);
    }

    #[test]
    fn test_select_best_ignores_candidate_order() {
        let mut candidates = LcsEngine::sequential().pair_candidates(&["GATTACA", "TACAGAT", "ACAGATC"]);
        let forward = select_best(candidates.clone());
        candidates.reverse();
        assert_eq!(select_best(candidates), forward);
    }

    #[test]
    fn test_serialized_pair_is_array() {
        let result = LcsResult {
            value: "GATTACA".to_string(),
            sequences: (1, 3),
            length: 7,
        };
        let json = serde_json::to_value(&result).unwrap();
        assert_eq!(json, serde_json::json!({"value": "GATTACA", "sequences": [1, 3], "length": 7}));
    }
}
