//! Vigenère encryption and decryption over the uppercase A-Z alphabet.

use crate::error::{AnalysisError, Result};
use crate::freq::validate_letters;

/// Decrypts Vigenère ciphertext with the given key.
///
/// Letter `i` becomes `(cipher[i] - key[i % key_len] + 26) mod 26`. The
/// key is applied cyclically. If the key is wrong the output is still
/// well-formed A-Z text, just meaningless - no semantic validation is
/// attempted.
///
/// # Arguments
///
/// * `ciphertext` - The text to decrypt (uppercase A-Z).
/// * `key` - The key (non-empty, uppercase A-Z).
///
/// # Returns
///
/// The plaintext, `AnalysisError::EmptyKey` for an empty key, or
/// `AnalysisError::InvalidInput` when either string leaves the alphabet.
pub fn decrypt(ciphertext: &str, key: &str) -> Result<String> {
    if key.is_empty() {
        return Err(AnalysisError::EmptyKey);
    }
    validate_letters(ciphertext)?;
    validate_letters(key)?;

    let key_bytes: &[u8] = key.as_bytes();
    let mut plaintext = String::with_capacity(ciphertext.len());

    for (i, byte) in ciphertext.bytes().enumerate() {
        let key_shift = key_bytes[i % key_bytes.len()] - b'A';
        let decrypted = (byte - b'A' + 26 - key_shift) % 26 + b'A';
        plaintext.push(decrypted as char);
    }

    Ok(plaintext)
}

/// Encrypts plaintext with the given key (the inverse of [`decrypt`]).
///
/// # Arguments
///
/// * `plaintext` - The text to encrypt (uppercase A-Z).
/// * `key` - The key (non-empty, uppercase A-Z).
///
/// # Returns
///
/// The ciphertext, or the same error conditions as [`decrypt`].
pub fn encrypt(plaintext: &str, key: &str) -> Result<String> {
    if key.is_empty() {
        return Err(AnalysisError::EmptyKey);
    }
    validate_letters(plaintext)?;
    validate_letters(key)?;

    let key_bytes: &[u8] = key.as_bytes();
    let mut ciphertext = String::with_capacity(plaintext.len());

    for (i, byte) in plaintext.bytes().enumerate() {
        let key_shift = key_bytes[i % key_bytes.len()] - b'A';
        let encrypted = (byte - b'A' + key_shift) % 26 + b'A';
        ciphertext.push(encrypted as char);
    }

    Ok(ciphertext)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_decrypt() {
        let plaintext = decrypt("LXFOPVEFRNHR", "LEMON").unwrap();
        assert_eq!(plaintext, "ATTACKATDAWN");
    }

    #[test]
    fn test_encrypt() {
        let ciphertext = encrypt("ATTACKATDAWN", "LEMON").unwrap();
        assert_eq!(ciphertext, "LXFOPVEFRNHR");
    }

    #[test]
    fn test_round_trip() {
        let plaintext = "DEFENDTHEEASTWALLOFTHECASTLE";
        let ciphertext = encrypt(plaintext, "FORTIFY").unwrap();
        assert_eq!(decrypt(&ciphertext, "FORTIFY").unwrap(), plaintext);
    }

    #[test]
    fn test_key_cycles() {
        // Single-letter key degenerates to a Caesar shift.
        assert_eq!(encrypt("AAAA", "B").unwrap(), "BBBB");
        assert_eq!(decrypt("BBBB", "B").unwrap(), "AAAA");
    }

    #[test]
    fn test_empty_key_rejected() {
        assert_eq!(decrypt("ABC", ""), Err(AnalysisError::EmptyKey));
        assert_eq!(encrypt("ABC", ""), Err(AnalysisError::EmptyKey));
    }

    #[test]
    fn test_invalid_input_rejected() {
        assert!(matches!(
            decrypt("abc", "KEY"),
            Err(AnalysisError::InvalidInput { position: 0, .. })
        ));
        assert!(matches!(
            encrypt("ABC", "k e y"),
            Err(AnalysisError::InvalidInput { .. })
        ));
    }

    #[test]
    fn test_empty_text() {
        assert_eq!(decrypt("", "KEY").unwrap(), "");
        assert_eq!(encrypt("", "KEY").unwrap(), "");
    }
}
