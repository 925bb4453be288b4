use std::io::{self, BufRead, Read, Write};

use anyhow::{Context, Result};
use clap::{Args, Parser, Subcommand};
use tracing::{info, warn, Level};
use vigenere_analysis::cipher::{apply_preserving_format, Direction};
use vigenere_analysis::{
    AnalysisConfig, CandidateValidator, DecryptionCandidate, EnglishFitness, Key, NormalizedText,
    Solver, VigenereError,
};

/// Command-line arguments for the Vigenère cipher program.
#[derive(Parser, Debug)]
#[command(name = "vigenere", author, version, about = "Vigenère cipher encryption, decryption and cryptanalysis")]
struct Cli {
    #[command(subcommand)]
    command: Command,

    /// Enable debug logging
    #[arg(short, long, global = true)]
    verbose: bool,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Encrypt text with a known key
    Encrypt(TransformArgs),
    /// Decrypt text with a known key
    Decrypt(TransformArgs),
    /// Recover key and plaintext from ciphertext alone
    Crack(CrackArgs),
}

/// Where text comes from and where the result goes
#[derive(Args, Debug)]
struct InputArgs {
    /// Text to process (reads stdin when neither --text nor --file is given)
    #[arg(short, long, conflicts_with = "file", help = "Text to process")]
    text: Option<String>,

    /// Path to the input file
    #[arg(short, long, help = "Path to the input file")]
    file: Option<String>,

    /// Path to the output file (stdout when omitted)
    #[arg(short, long, help = "Path to the output file")]
    output: Option<String>,

    /// Keep case, spaces and punctuation instead of emitting bare uppercase letters
    #[arg(long)]
    keep_format: bool,
}

#[derive(Args, Debug)]
struct TransformArgs {
    #[command(flatten)]
    io: InputArgs,

    /// Key string for the Vigenère cipher
    #[arg(short, long, help = "Key string for the cipher (letters only)")]
    key: String,
}

#[derive(Args, Debug)]
struct CrackArgs {
    #[command(flatten)]
    io: InputArgs,

    /// Accept candidates automatically by English letter-frequency fit instead of asking
    #[arg(long)]
    auto: bool,

    /// Largest chi-squared score accepted in --auto mode
    #[arg(long, default_value_t = EnglishFitness::DEFAULT_THRESHOLD)]
    threshold: f64,

    /// Shortest repeated sequence used by Kasiski examination
    #[arg(long, default_value_t = 3)]
    min_seq: usize,

    /// Longest repeated sequence used by Kasiski examination
    #[arg(long, default_value_t = 5)]
    max_seq: usize,

    /// Largest key length considered by Kasiski examination
    #[arg(long, default_value_t = 20)]
    max_factor: usize,

    /// Try at most this many key lengths
    #[arg(long)]
    max_candidates: Option<usize>,
}

impl CrackArgs {
    fn config(&self) -> AnalysisConfig {
        AnalysisConfig::new()
            .with_sequence_lengths(self.min_seq, self.max_seq)
            .with_max_factor(self.max_factor)
            .with_max_candidates(self.max_candidates)
    }
}

/// Main entry point for the Vigenère cipher program.
fn main() -> Result<()> {
    let cli = Cli::parse();

    // Logs go to stderr so stdout only carries results
    let level = if cli.verbose { Level::DEBUG } else { Level::INFO };
    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_writer(io::stderr)
        .init();

    match cli.command {
        Command::Encrypt(args) => transform(args, Direction::Encrypt),
        Command::Decrypt(args) => transform(args, Direction::Decrypt),
        Command::Crack(args) => crack(args),
    }
}

/// Encrypts or decrypts with a known key.
fn transform(args: TransformArgs, direction: Direction) -> Result<()> {
    let key = Key::parse(&args.key).context("Invalid keyword. Please enter letters only.")?;
    let content = read_input(&args.io)?;

    if content.trim().is_empty() {
        return Err(VigenereError::EmptyInput).context("Input text cannot be empty");
    }

    info!(key = %key, ?direction, "Processing text");
    let result = render(&content, &key, direction, args.io.keep_format);

    write_output(&args.io, &result)
}

/// Runs the ciphertext-only attack.
fn crack(args: CrackArgs) -> Result<()> {
    let solver = Solver::new(args.config())?;
    let content = read_input(&args.io)?;

    if NormalizedText::normalize(&content).is_empty() {
        return Err(VigenereError::EmptyInput)
            .context("Ciphertext must contain alphabetic characters");
    }

    let result = if args.auto {
        solver.solve(&content, &mut EnglishFitness::new(args.threshold))
    } else {
        if args.io.text.is_none() && args.io.file.is_none() {
            warn!("Ciphertext was read from stdin; confirmations will be read from the same stream");
        }
        let stdin = io::stdin();
        solver.solve(&content, &mut Prompt::new(stdin.lock(), io::stdout()))
    };

    let candidate = result.context("Auto-decryption unsuccessful")?;
    info!(key = %candidate.key, length = candidate.key_length.length, "Auto-decryption successful");

    let plaintext = render(&content, &candidate.key, Direction::Decrypt, args.io.keep_format);
    println!("Key: {}", candidate.key);
    write_output(&args.io, &plaintext)
}

/// Applies the key either to the normalized letters or in place of the original layout.
fn render(content: &str, key: &Key, direction: Direction, keep_format: bool) -> String {
    if keep_format {
        return apply_preserving_format(content, key, direction);
    }

    let text = NormalizedText::normalize(content);
    match direction {
        Direction::Encrypt => vigenere_analysis::encrypt(&text, key).to_string(),
        Direction::Decrypt => vigenere_analysis::decrypt(&text, key).to_string(),
    }
}

fn read_input(args: &InputArgs) -> Result<String> {
    if let Some(text) = &args.text {
        return Ok(text.clone());
    }

    if let Some(path) = &args.file {
        return std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read input file {}", path));
    }

    let mut content = String::new();
    io::stdin()
        .read_to_string(&mut content)
        .context("Failed to read stdin")?;
    Ok(content)
}

fn write_output(args: &InputArgs, result: &str) -> Result<()> {
    match &args.output {
        Some(path) => {
            std::fs::write(path, result)
                .with_context(|| format!("Failed to write output file {}", path))?;
            println!("Operation completed successfully! Output saved to: {}", path);
        }
        None => println!("{}", result),
    }
    Ok(())
}

/// Interactive "does this look right?" confirmation for each candidate.
struct Prompt<R, W> {
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> Prompt<R, W> {
    fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    fn ask(&mut self, candidate: &DecryptionCandidate) -> io::Result<bool> {
        writeln!(
            self.output,
            "\nAttempting with key length {}:",
            candidate.key_length
        )?;
        writeln!(self.output, "Possible key: {}", candidate.key)?;
        writeln!(self.output, "Decrypted text:\n{}", candidate.plaintext)?;

        loop {
            write!(self.output, "\nDoes the decrypted text make sense? (y/n) [n]: ")?;
            self.output.flush()?;

            let mut answer = String::new();
            if self.input.read_line(&mut answer)? == 0 {
                // End of input counts as "no"
                return Ok(false);
            }

            match answer.trim().to_ascii_lowercase().as_str() {
                "y" | "yes" => return Ok(true),
                "" | "n" | "no" => return Ok(false),
                _ => writeln!(self.output, "Please enter y or n.")?,
            }
        }
    }
}

impl<R: BufRead, W: Write> CandidateValidator for Prompt<R, W> {
    fn accept(&mut self, candidate: &DecryptionCandidate) -> bool {
        match self.ask(candidate) {
            Ok(accepted) => accepted,
            Err(err) => {
                warn!(error = %err, "Failed to read confirmation, treating as rejected");
                false
            }
        }
    }
}
