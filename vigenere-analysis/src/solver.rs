//! Per-column key-letter recovery via frequency correlation.

use crate::columns::split_columns;
use crate::error::{AnalysisError, Result};
use crate::freq::{count_letters, letter_frequencies};

/// Shifts every letter of the text back by `amount` positions (mod 26).
///
/// # Arguments
///
/// * `text` - The text to shift (uppercase A-Z).
/// * `amount` - The trial shift, 0 to 25.
///
/// # Returns
///
/// A `String` with each letter replaced by `letter - amount (mod 26)`.
pub fn shift(text: &str, amount: u8) -> String {
    text.bytes()
        .map(|byte| (b'A' + (byte - b'A' + 26 - amount % 26) % 26) as char)
        .collect()
}

/// Correlation of a shifted column against the reference language table.
///
/// Sums `profile[c] * reference[c]` over the letters `c` of the shifted
/// text. The profile value is looked up by the letter's shifted identity
/// even though the profile was measured over the unshifted ciphertext -
/// that conflation is the reference algorithm's defined behavior and is
/// kept as-is rather than "corrected" (see [`find_key_letter_chi_squared`]
/// for the alternate scoring).
///
/// # Arguments
///
/// * `text` - The shifted column.
/// * `profile` - Relative letter frequencies of the full ciphertext.
/// * `reference` - Expected letter frequencies of the target language.
///
/// # Returns
///
/// The unnormalized correlation score; higher means better alignment.
pub fn correlation(text: &str, profile: &[f64; 26], reference: &[f64; 26]) -> f64 {
    text.bytes()
        .map(|byte| {
            let index = (byte - b'A') as usize;
            profile[index] * reference[index]
        })
        .sum()
}

/// Finds the key letter for one column by trying all 26 shifts.
///
/// Tracks the best correlation with a strict `>` against a running maximum
/// that starts at 0.0: the first maximum wins ties, and a column where no
/// shift scores above zero yields no letter at all.
///
/// # Arguments
///
/// * `column` - One interleaved column of the ciphertext.
/// * `profile` - Relative letter frequencies of the full ciphertext.
/// * `reference` - Expected letter frequencies of the target language.
///
/// # Returns
///
/// The winning key letter, or `None` when every shift scored zero (e.g.
/// an empty column).
pub fn find_key_letter(
    column: &str,
    profile: &[f64; 26],
    reference: &[f64; 26],
) -> Option<char> {
    let mut key_letter: Option<char> = None;
    let mut max: f64 = 0.0;

    for amount in 0..26u8 {
        let shifted = shift(column, amount);
        let score = correlation(&shifted, profile, reference);
        if score > max {
            max = score;
            key_letter = Some((b'A' + amount) as char);
        }
    }

    key_letter
}

/// Recovers the whole key from the ciphertext and an assumed key length.
///
/// The frequency profile is computed once over the entire ciphertext and
/// reused for every column's correlation scoring. A per-column profile
/// would be the statistically cleaner choice, but it would change the
/// scores and break parity with the reference algorithm; the cleaner
/// treatment is available as [`recover_key_chi_squared`].
///
/// # Arguments
///
/// * `text` - The full ciphertext (uppercase A-Z).
/// * `key_length` - The assumed key length (must be > 0).
/// * `reference` - Expected letter frequencies of the target language.
///
/// # Returns
///
/// The recovered key, `AnalysisError::InvalidKeyLength` for a zero key
/// length, or `AnalysisError::UnresolvedColumn` naming the first column
/// that produced no key letter.
pub fn recover_key(text: &str, key_length: usize, reference: &[f64; 26]) -> Result<String> {
    let profile = letter_frequencies(text);
    let columns = split_columns(text, key_length)?;

    let mut key = String::with_capacity(key_length);
    for (index, column) in columns.iter().enumerate() {
        let letter = find_key_letter(column, &profile, reference)
            .ok_or(AnalysisError::UnresolvedColumn(index))?;
        key.push(letter);
    }

    Ok(key)
}

/// Finds the key letter for one column with a chi-square test.
///
/// Scores each of the 26 shifts by comparing the column's observed letter
/// counts against the counts the reference table predicts, taking the
/// minimum chi-square (strict `<`, first minimum wins). Unlike the
/// correlation scoring this uses only the column's own statistics.
///
/// # Arguments
///
/// * `column` - One interleaved column of the ciphertext.
/// * `reference` - Expected letter frequencies of the target language.
///
/// # Returns
///
/// The winning key letter, or `None` for an empty column.
pub fn find_key_letter_chi_squared(column: &str, reference: &[f64; 26]) -> Option<char> {
    if column.is_empty() {
        return None;
    }

    let counts = count_letters(column);
    let length = column.len() as f64;
    let mut best_shift: u8 = 0;
    let mut best_score = f64::INFINITY;

    for amount in 0..26u8 {
        let mut score = 0.0;
        for index in 0..26 {
            let observed = counts[(index + amount as usize) % 26] as f64;
            let expected = reference[index] * length;
            if expected > 0.0 {
                score += (observed - expected).powi(2) / expected;
            }
        }
        if score < best_score {
            best_score = score;
            best_shift = amount;
        }
    }

    Some((b'A' + best_shift) as char)
}

/// Recovers the whole key using the per-column chi-square solver.
///
/// The corrected alternate to [`recover_key`]: every column is scored
/// against the reference table on its own, with no shared full-text
/// profile. Offered alongside the reference behavior, never replacing it.
///
/// # Arguments
///
/// * `text` - The full ciphertext (uppercase A-Z).
/// * `key_length` - The assumed key length (must be > 0).
/// * `reference` - Expected letter frequencies of the target language.
///
/// # Returns
///
/// The recovered key, or the same error conditions as [`recover_key`].
pub fn recover_key_chi_squared(
    text: &str,
    key_length: usize,
    reference: &[f64; 26],
) -> Result<String> {
    let columns = split_columns(text, key_length)?;

    let mut key = String::with_capacity(key_length);
    for (index, column) in columns.iter().enumerate() {
        let letter = find_key_letter_chi_squared(column, reference)
            .ok_or(AnalysisError::UnresolvedColumn(index))?;
        key.push(letter);
    }

    Ok(key)
}
