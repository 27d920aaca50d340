//! Kasiski examination: distances between repeated ciphertext substrings.

use std::collections::HashMap;

/// Scans the text for repeated substrings of length 3 to 8 and records the
/// gap between successive occurrences.
///
/// For every start offset and every substring length in `3..=8`, the most
/// recent offset of each distinct substring is remembered; re-encountering
/// a substring emits the distance to its previous occurrence and moves the
/// stored offset forward. Only chained gaps are recorded, not all pairwise
/// gaps - the gap statistics feed the GCD vote and must stay chained.
///
/// Short substrings recur by chance, so some of the emitted distances are
/// spurious; the voting step tolerates that noise.
///
/// # Arguments
///
/// * `text` - The ciphertext to examine (uppercase A-Z).
///
/// # Returns
///
/// The distances in discovery order (offset ascending, then length
/// ascending). Empty when no substring of length >= 3 repeats.
pub fn kasiski(text: &str) -> Vec<usize> {
    let mut distances: Vec<usize> = Vec::new();
    let mut last_offset: HashMap<&str, usize> = HashMap::new();

    for i in 0..text.len() {
        for length in 3..=8 {
            if i + length <= text.len() {
                let substring = &text[i..i + length];
                if let Some(&previous) = last_offset.get(substring) {
                    distances.push(i - previous);
                }
                last_offset.insert(substring, i);
            }
        }
    }

    distances
}
