//! Splitting ciphertext into per-key-position columns.

use crate::error::{AnalysisError, Result};

/// Partitions the text into `key_length` interleaved columns.
///
/// Character `i` goes to column `i % key_length`; relative order within
/// each column is preserved. Round-robin interleaving of the returned
/// columns reproduces the input exactly, and every column holds either
/// `ceil(n / k)` or `floor(n / k)` characters.
///
/// # Arguments
///
/// * `text` - The ciphertext to split.
/// * `key_length` - The assumed key length (must be > 0).
///
/// # Returns
///
/// The `key_length` columns, or `AnalysisError::InvalidKeyLength` for a
/// zero key length (a failed estimate must not reach the modulo below).
pub fn split_columns(text: &str, key_length: usize) -> Result<Vec<String>> {
    if key_length == 0 {
        return Err(AnalysisError::InvalidKeyLength);
    }

    let mut columns: Vec<String> = vec![String::new(); key_length];
    for (i, c) in text.chars().enumerate() {
        columns[i % key_length].push(c);
    }

    Ok(columns)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_split_columns() {
        let columns = split_columns("ABCDEFGH", 3).unwrap();
        assert_eq!(columns[0], "ADG");
        assert_eq!(columns[1], "BEH");
        assert_eq!(columns[2], "CF");
    }

    #[test]
    fn test_zero_key_length_rejected() {
        assert_eq!(
            split_columns("ABC", 0),
            Err(AnalysisError::InvalidKeyLength)
        );
    }

    #[test]
    fn test_column_lengths() {
        let text = "ABCDEFGHIJK";
        let columns = split_columns(text, 4).unwrap();
        // 11 characters over 4 columns: lengths are ceil or floor of 11/4.
        assert_eq!(
            columns.iter().map(|c| c.len()).collect::<Vec<_>>(),
            vec![3, 3, 3, 2]
        );
    }

    #[test]
    fn test_round_robin_reconstruction() {
        let text = "THEQUICKBROWNFOX";
        for key_length in 1..=7 {
            let columns = split_columns(text, key_length).unwrap();
            let mut rebuilt = String::new();
            for i in 0..text.len() {
                let column = &columns[i % key_length];
                rebuilt.push(column.as_bytes()[i / key_length] as char);
            }
            assert_eq!(rebuilt, text);
        }
    }

    #[test]
    fn test_more_columns_than_characters() {
        let columns = split_columns("AB", 5).unwrap();
        assert_eq!(columns, vec!["A", "B", "", "", ""]);
    }
}
