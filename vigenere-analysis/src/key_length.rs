//! Probable key length from repeat distances via pairwise GCD voting.

use std::collections::HashMap;

/// Greatest common divisor (Euclid).
fn gcd(a: usize, b: usize) -> usize {
    let (mut a, mut b) = (a, b);
    while b != 0 {
        let remainder = a % b;
        a = b;
        b = remainder;
    }
    a
}

/// Derives the probable key length from Kasiski repeat distances.
///
/// Computes the GCD of every unordered pair of distances and returns the
/// GCD value that occurs most often. The scan keeps the pair order (i < j
/// over the input order) and uses a strict `>` comparison, so on a tie the
/// value encountered first in the scan wins - the tie-break is part of the
/// observable behavior and must not change. Occurrence counts are gathered
/// in one pass up front, which leaves the vote identical to recounting per
/// element.
///
/// # Arguments
///
/// * `distances` - Repeat distances from the Kasiski examination.
///
/// # Returns
///
/// The winning GCD value, or 0 when fewer than two distances exist. A zero
/// result means "no signal", never a usable key length; callers must treat
/// it as a failure.
pub fn find_probable_key_length(distances: &[usize]) -> usize {
    let mut common_divisors: Vec<usize> = Vec::new();
    for i in 0..distances.len() {
        for j in (i + 1)..distances.len() {
            common_divisors.push(gcd(distances[i], distances[j]));
        }
    }

    let mut counts: HashMap<usize, usize> = HashMap::new();
    for &divisor in &common_divisors {
        *counts.entry(divisor).or_insert(0) += 1;
    }

    let mut probable_key_length = 0;
    let mut max_count = 0;
    for &divisor in &common_divisors {
        let count = counts[&divisor];
        if count > max_count {
            max_count = count;
            probable_key_length = divisor;
        }
    }

    probable_key_length
}
