use clap::Parser;
use vigenere_analysis::{analyze_with, AnalysisReport, SolverMode, ENGLISH_FREQUENCIES};

/// Command-line arguments for the Vigenère breaker program.
#[derive(Parser, Debug)]
struct Cli {
    /// Path to the input file containing encrypted text
    #[arg(short, long, help = "Path to the input file containing encrypted text")]
    file: String,

    /// Path to the output file where decrypted text will be saved
    #[arg(short, long, help = "Path to the output file for decrypted text")]
    output: String,

    /// Use the per-column chi-square solver instead of the correlation solver
    #[arg(long, help = "Use the per-column chi-square solver")]
    chi_squared: bool,
}

/// Main entry point for the Vigenère breaker.
fn main() {
    let cli: Cli = Cli::parse();
    let content: String = std::fs::read_to_string(&cli.file)
        .expect("Failed to read input file");

    // Intake stops at the first blank line; whatever was read is
    // normalized to the uppercase A-Z alphabet the analysis expects
    let ciphertext: String = clean_text(&intake(&content));

    let mode = if cli.chi_squared {
        SolverMode::ChiSquared
    } else {
        SolverMode::Correlation
    };

    let report: AnalysisReport = match analyze_with(&ciphertext, &ENGLISH_FREQUENCIES, mode) {
        Ok(report) => report,
        Err(error) => {
            eprintln!("Cryptanalysis failed: {}", error);
            std::process::exit(1);
        }
    };

    // Diagnostics in pipeline order: distances, key length, per-column
    // IOC, key
    let distances: Vec<String> = report.distances.iter().map(|d| d.to_string()).collect();
    println!("{}", distances.join(" "));
    println!("Probable key length based on distances: {}", report.key_length);
    println!("Calculated IOC:");
    for ioc in &report.column_iocs {
        println!("{}", ioc);
    }
    println!("The possible key: {}", report.key);

    // Write decrypted text to file
    std::fs::write(&cli.output, &report.plaintext)
        .expect("Failed to write output file");
    println!("Decrypted message sent to: {}", cli.output);
}

/// Concatenates input lines, stopping at the first blank line.
fn intake(content: &str) -> String {
    content.lines().take_while(|line| !line.is_empty()).collect()
}

/// Cleans text by keeping only alphabetic characters and converting to uppercase
fn clean_text(text: &str) -> String {
    text.chars()
        .filter(|c| c.is_ascii_alphabetic())
        .map(|c| c.to_ascii_uppercase())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_intake_stops_at_blank_line() {
        assert_eq!(intake("ABC\nDEF\n\nGHI"), "ABCDEF");
        assert_eq!(intake("ABC\nDEF"), "ABCDEF");
        assert_eq!(intake(""), "");
    }

    #[test]
    fn test_clean_text() {
        assert_eq!(clean_text("Hello, World!"), "HELLOWORLD");
        assert_eq!(clean_text("A1B2 c3"), "ABC");
    }
}
