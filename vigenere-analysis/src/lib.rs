//! # Vigenère Analysis Library
//!
//! This library breaks Vigenère-enciphered text without knowledge of the
//! key: it estimates the key length from the spacing of repeated
//! ciphertext substrings, recovers each key letter by frequency analysis
//! against a reference language table, and decrypts.
//!
//! ## Pipeline
//!
//! - **Kasiski examination** - distances between repeated substrings
//! - **GCD voting** - the probable key length
//! - **Column split** - one subsequence per key position
//! - **Key-letter solver** - frequency correlation (or chi-square) per column
//! - **Decryption** - the recovered key applied cyclically
//!
//! ## Usage
//!
//! ```rust
//! use vigenere_analysis::{decrypt, encrypt};
//!
//! let ciphertext = encrypt("ATTACKATDAWN", "LEMON")?;
//! assert_eq!(ciphertext, "LXFOPVEFRNHR");
//!
//! let plaintext = decrypt(&ciphertext, "LEMON")?;
//! assert_eq!(plaintext, "ATTACKATDAWN");
//! # Ok::<(), vigenere_analysis::AnalysisError>(())
//! ```
//!
//! For ciphertext with an unknown key, [`analyze`] runs the whole pipeline
//! and returns an [`AnalysisReport`] with the repeat distances, the
//! estimated key length, the per-column index of coincidence, the
//! recovered key and the plaintext. The method is statistical: short or
//! repeat-free ciphertext carries no signal and is rejected with an error
//! rather than a guess.

// Public modules
pub mod analysis;
pub mod columns;
pub mod error;
pub mod freq;
pub mod kasiski;
pub mod key_length;
pub mod solver;
pub mod transform;

// Re-exports for easy access
pub use analysis::{analyze, analyze_with, AnalysisReport, SolverMode};
pub use columns::split_columns;
pub use error::{AnalysisError, Result};
pub use freq::{calculate_ioc, letter_frequencies, validate_letters, ENGLISH_FREQUENCIES};
pub use kasiski::kasiski;
pub use key_length::find_probable_key_length;
pub use solver::{find_key_letter, find_key_letter_chi_squared, recover_key, recover_key_chi_squared};
pub use transform::{decrypt, encrypt};

/// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
