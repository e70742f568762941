//! Ordre total de départage des égalités
//!
//! La même règle s'applique au codon le plus fréquent et à la plus longue
//! sous-chaîne commune: score décroissant, puis valeur lexicographique
//! croissante. Le gagnant est le minimum selon cet ordre.

use std::cmp::Ordering;

/// Compare deux candidats `(score, valeur)`.
///
/// `Ordering::Less` signifie que `a` l'emporte sur `b`.
pub fn rank_score_then_value(a_score: usize, a_value: &str, b_score: usize, b_value: &str) -> Ordering {
    b_score
        .cmp(&a_score)
        .then_with(|| a_value.cmp(b_value))
}

/// Candidat classé, le plus petit selon `Ord` est le gagnant
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Ranked<'a> {
    pub score: usize,
    pub value: &'a str,
}

impl<'a> Ranked<'a> {
    pub fn new(score: usize, value: &'a str) -> Self {
        Self { score, value }
    }
}

impl Ord for Ranked<'_> {
    fn cmp(&self, other: &Self) -> Ordering {
        rank_score_then_value(self.score, self.value, other.score, other.value)
    }
}

impl PartialOrd for Ranked<'_> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}
