//! The full ciphertext-only analysis pipeline.

use crate::columns::split_columns;
use crate::error::{AnalysisError, Result};
use crate::freq::{calculate_ioc, validate_letters};
use crate::kasiski::kasiski;
use crate::key_length::find_probable_key_length;
use crate::solver::{recover_key, recover_key_chi_squared};
use crate::transform::decrypt;

/// Which per-column key-letter solver the pipeline uses.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SolverMode {
    /// The reference scoring: one frequency profile over the whole
    /// ciphertext, reused for every column's correlation.
    Correlation,
    /// Per-column chi-square scoring against the reference table.
    ChiSquared,
}

/// Everything one analysis run produces, in pipeline order.
#[derive(Debug, Clone)]
pub struct AnalysisReport {
    /// Raw repeat distances from the Kasiski examination.
    pub distances: Vec<usize>,
    /// Key length chosen by the GCD vote.
    pub key_length: usize,
    /// Index of coincidence per column (diagnostic only; nothing in the
    /// pipeline branches on these values).
    pub column_iocs: Vec<f64>,
    /// The recovered key.
    pub key: String,
    /// The ciphertext decrypted under the recovered key.
    pub plaintext: String,
}

/// Runs the full analysis with the reference correlation solver.
///
/// # Arguments
///
/// * `ciphertext` - The ciphertext (uppercase A-Z only).
/// * `reference` - Expected letter frequencies of the target language.
///
/// # Returns
///
/// The [`AnalysisReport`], or the first stage error (see [`analyze_with`]).
pub fn analyze(ciphertext: &str, reference: &[f64; 26]) -> Result<AnalysisReport> {
    analyze_with(ciphertext, reference, SolverMode::Correlation)
}

/// Runs the full analysis pipeline with the chosen solver.
///
/// Stages run strictly in sequence and the first failure aborts the run:
///
/// 1. validate the input alphabet (`InvalidInput`);
/// 2. Kasiski examination;
/// 3. key-length vote - no repeats degenerate to length 0, which is
///    rejected here as `InvalidKeyLength` instead of reaching a modulo;
/// 4. column split;
/// 5. per-column index of coincidence (diagnostic);
/// 6. key recovery (`UnresolvedColumn` on a dead column);
/// 7. decryption under the recovered key.
///
/// # Arguments
///
/// * `ciphertext` - The ciphertext (uppercase A-Z only).
/// * `reference` - Expected letter frequencies of the target language.
/// * `mode` - The per-column solver to use.
///
/// # Returns
///
/// The [`AnalysisReport`] with distances, key length, per-column IOC
/// values, key and plaintext, in that order.
pub fn analyze_with(
    ciphertext: &str,
    reference: &[f64; 26],
    mode: SolverMode,
) -> Result<AnalysisReport> {
    validate_letters(ciphertext)?;

    let distances = kasiski(ciphertext);
    let key_length = find_probable_key_length(&distances);
    if key_length == 0 {
        return Err(AnalysisError::InvalidKeyLength);
    }

    let columns = split_columns(ciphertext, key_length)?;
    let column_iocs: Vec<f64> = columns.iter().map(|column| calculate_ioc(column)).collect();

    let key = match mode {
        SolverMode::Correlation => recover_key(ciphertext, key_length, reference)?,
        SolverMode::ChiSquared => recover_key_chi_squared(ciphertext, key_length, reference)?,
    };
    let plaintext = decrypt(ciphertext, &key)?;

    Ok(AnalysisReport {
        distances,
        key_length,
        column_iocs,
        key,
        plaintext,
    })
}
