//! Benchmarks for the cryptanalysis pipeline.
//!
//! The GCD vote is quadratic in the number of repeat distances, and highly
//! repetitive input makes that count explode, so the degenerate case is
//! benchmarked separately from realistic prose.

use criterion::{criterion_group, criterion_main, Criterion};
use rand::Rng;
use vigenere_analysis::{
    analyze, encrypt, find_probable_key_length, kasiski, ENGLISH_FREQUENCIES,
};

const PLAINTEXT: &str = "FARBEYONDTHERIDGETHEOLDOBSERVATORYKEPTITSSILENTWATCH\
    OVERTHEVALLEYANDEACHEVENINGTHEASTRONOMERCLIMBEDTHESPIRALSTAIRTOOPENTHE\
    GREATDOMEABOVETHETELESCOPETHEVILLAGERSBELOWRARELYWONDEREDWHATHESTUDIED\
    AMONGTHEDISTANTPOINTSOFLIGHTYETHISCAREFULJOURNALSRECORDEDEVERYCOMETAND\
    ECLIPSEWITHPATIENTDEVOTIONYEARSOFMEASUREMENTHADTAUGHTHIMTHATTHESKYREWA\
    RDSTHOSEWHORETURNTOITNIGHTLYANDPUNISHESTHOSEWHOGLANCEATITONLYONCE";

fn random_text(length: usize) -> String {
    let mut rng = rand::rng();
    (0..length)
        .map(|_| (b'A' + rng.random_range(0..26u8)) as char)
        .collect()
}

fn bench_kasiski(c: &mut Criterion) {
    let random = random_text(2000);
    let repetitive = "AB".repeat(150);

    c.bench_function("kasiski_random_2000", |b| b.iter(|| kasiski(&random)));
    c.bench_function("kasiski_periodic_300", |b| b.iter(|| kasiski(&repetitive)));
}

fn bench_key_length_vote(c: &mut Criterion) {
    // Even 300 characters of periodic text yield on the order of a
    // thousand distances, and the vote walks every pair of them.
    let distances = kasiski(&"AB".repeat(150));

    c.bench_function("gcd_vote_degenerate", |b| {
        b.iter(|| find_probable_key_length(&distances))
    });
}

fn bench_full_analysis(c: &mut Criterion) {
    let ciphertext = encrypt(PLAINTEXT, "CIPHER").unwrap();

    c.bench_function("analyze_prose_397", |b| {
        b.iter(|| analyze(&ciphertext, &ENGLISH_FREQUENCIES).unwrap())
    });
}

criterion_group!(
    benches,
    bench_kasiski,
    bench_key_length_vote,
    bench_full_analysis
);
criterion_main!(benches);
