//! Benchmarks de la comparaison par paires
//!
//! Seul point de coût quadratique du moteur: mesure l'évolution avec la
//! longueur et le nombre de séquences.

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use dna_etl_core::{analyze_participant, LcsEngine};
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use std::time::Duration;

const BASES: [char; 4] = ['A', 'C', 'G', 'T'];

/// Génère une séquence aléatoire reproductible
fn generate_sequence(len: usize, seed: u64) -> String {
    let mut rng = ChaCha8Rng::seed_from_u64(seed);
    (0..len).map(|_| BASES[rng.gen_range(0..4)]).collect()
}

fn benchmark_pairwise_lcs(c: &mut Criterion) {
    let mut group = c.benchmark_group("Pairwise LCS");
    group.measurement_time(Duration::from_secs(10));
    group.sample_size(10);

    for &(count, len) in &[(4usize, 100usize), (8, 100), (4, 1000), (8, 1000)] {
        let sequences: Vec<String> = (0..count).map(|i| generate_sequence(len, i as u64 + 1)).collect();
        let id = format!("{count}x{len}");

        group.bench_with_input(BenchmarkId::new("sequential", &id), &sequences, |b, seqs| {
            let engine = LcsEngine::sequential();
            b.iter(|| engine.find(black_box(seqs)).unwrap());
        });

        group.bench_with_input(BenchmarkId::new("parallel", &id), &sequences, |b, seqs| {
            let engine = LcsEngine::new();
            b.iter(|| engine.find(black_box(seqs)).unwrap());
        });
    }

    group.finish();
}

fn benchmark_full_analysis(c: &mut Criterion) {
    let sequences: Vec<String> = (0..6).map(|i| generate_sequence(500, i + 10)).collect();

    c.bench_function("analyze_participant_6x500", |b| {
        b.iter(|| analyze_participant("bench", black_box(&sequences)).unwrap());
    });
}

criterion_group!(benches, benchmark_pairwise_lcs, benchmark_full_analysis);
criterion_main!(benches);
