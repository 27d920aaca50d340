use clap::{Parser, ValueEnum};
use vigenere_analysis::{decrypt, encrypt};

/// Command-line arguments for the Vigenère cipher program.
#[derive(Parser, Debug)]
struct Cli {
    /// Path to the input file containing text to encrypt/decrypt
    #[arg(short, long, help = "Path to the input file")]
    file: String,

    /// Key string for the Vigenère cipher
    #[arg(short, long, help = "Key string for the cipher")]
    key: String,

    /// Path to the output file where result will be saved
    #[arg(short, long, help = "Path to the output file")]
    output: String,

    /// Mode of operation (encrypt or decrypt)
    #[arg(short, long, help = "Mode of operation (encrypt/decrypt)")]
    mode: OperationMode,
}

/// Enum representing the mode of operation for the cipher.
#[derive(Clone, Debug, ValueEnum)]
enum OperationMode {
    /// Encrypt mode
    Encrypt,
    /// Decrypt mode
    Decrypt,
}

/// Main entry point for the Vigenère cipher program.
fn main() {
    // Parse command-line arguments
    let cli: Cli = Cli::parse();

    // Read input file content; the cipher core works on uppercase A-Z
    // only, so both text and key are normalized here
    let content: String = std::fs::read_to_string(&cli.file)
        .expect("Failed to read input file");
    let text: String = clean_text(&content);
    let key: String = clean_text(&cli.key);

    // Process based on selected mode
    let result = match cli.mode {
        OperationMode::Encrypt => {
            println!("Encrypting with key: {}", key);
            encrypt(&text, &key)
        }
        OperationMode::Decrypt => {
            println!("Decrypting with key: {}", key);
            decrypt(&text, &key)
        }
    };

    match result {
        Ok(output) => {
            // Write result to output file
            std::fs::write(&cli.output, output)
                .expect("Failed to write output file");

            println!("Operation completed successfully! Output saved to: {}", cli.output);
        }
        Err(error) => {
            eprintln!("Cipher error: {}", error);
            std::process::exit(1);
        }
    }
}

/// Cleans text by keeping only alphabetic characters and converting to uppercase
fn clean_text(text: &str) -> String {
    text.chars()
        .filter(|c| c.is_ascii_alphabetic())
        .map(|c| c.to_ascii_uppercase())
        .collect()
}
