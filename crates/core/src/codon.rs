//! Tables de fréquence des codons et agrégation globale

use crate::ordering::Ranked;
use serde::{Deserialize, Serialize};
use std::collections::btree_map;
use std::collections::BTreeMap;

/// Longueur d'un codon
pub const CODON_LENGTH: usize = 3;

/// Valeur renvoyée comme codon le plus fréquent lorsqu'aucun codon n'existe
pub const NO_CODON: &str = "";

/// Table codon → nombre d'occurrences
///
/// Portée par séquence ou globale. Les clés sont triées, ce qui rend la
/// sérialisation stable d'une exécution à l'autre.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CodonFrequencyTable(BTreeMap<String, usize>);

impl CodonFrequencyTable {
    /// Crée une table vide
    pub fn new() -> Self {
        Self::default()
    }

    /// Découpe une séquence en codons non chevauchants alignés sur le début
    ///
    /// Un reste final de 1 ou 2 caractères est ignoré.
    pub fn from_sequence(sequence: &str) -> Self {
        let chars: Vec<char> = sequence.chars().collect();
        let mut table = Self::new();

        for window in chars.chunks_exact(CODON_LENGTH) {
            table.add(window.iter().collect::<String>(), 1);
        }

        table
    }

    /// Ajoute `count` occurrences d'un codon
    pub fn add(&mut self, codon: impl Into<String>, count: usize) {
        *self.0.entry(codon.into()).or_insert(0) += count;
    }

    /// Nombre d'occurrences d'un codon (0 si absent)
    pub fn get(&self, codon: &str) -> usize {
        self.0.get(codon).copied().unwrap_or(0)
    }

    /// Nombre de codons distincts
    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Nombre total de codons comptés
    pub fn total(&self) -> usize {
        self.0.values().sum()
    }

    pub fn iter(&self) -> btree_map::Iter<'_, String, usize> {
        self.0.iter()
    }

    /// Somme de deux tables, sans modifier les entrées
    pub fn merged(mut self, other: &CodonFrequencyTable) -> Self {
        for (codon, count) in other.iter() {
            self.add(codon.as_str(), *count);
        }
        self
    }

    /// Codon le plus fréquent, égalités départagées par ordre lexicographique
    pub fn most_common(&self) -> Option<(&str, usize)> {
        self.0
            .iter()
            .map(|(codon, count)| Ranked::new(*count, codon.as_str()))
            .min()
            .map(|ranked| (ranked.value, ranked.score))
    }
}

impl<'a> IntoIterator for &'a CodonFrequencyTable {
    type Item = (&'a String, &'a usize);
    type IntoIter = btree_map::Iter<'a, String, usize>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<S: Into<String>> FromIterator<(S, usize)> for CodonFrequencyTable {
    fn from_iter<I: IntoIterator<Item = (S, usize)>>(iter: I) -> Self {
        let mut table = Self::new();
        for (codon, count) in iter {
            table.add(codon, count);
        }
        table
    }
}

/// Statistiques globales des codons d'un participant
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CodonAggregate {
    /// Somme des tables de toutes les séquences
    pub global_frequency: CodonFrequencyTable,
    /// Codon le plus fréquent, ou [`NO_CODON`] si aucune séquence n'en contient
    pub most_common: String,
}

/// Agrège les tables par séquence en une table globale
pub fn aggregate<'a, I>(tables: I) -> CodonAggregate
where
    I: IntoIterator<Item = &'a CodonFrequencyTable>,
{
    let global_frequency = tables
        .into_iter()
        .fold(CodonFrequencyTable::new(), |acc, table| acc.merged(table));

    let most_common = global_frequency
        .most_common()
        .map(|(codon, _)| codon.to_string())
        .unwrap_or_else(|| NO_CODON.to_string());

    tracing::debug!(
        distinct = global_frequency.len(),
        most_common = %most_common,
        "Codons agrégés"
    );

    CodonAggregate {
        global_frequency,
        most_common,
    }
}
