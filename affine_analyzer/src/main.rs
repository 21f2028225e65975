use anyhow::{Context, Result};
use clap::{ArgAction, Parser, Subcommand, ValueEnum};
use log::{info, LevelFilter};
use simple_logger::SimpleLogger;

use affine_analysis::{
    AffineKey, Alphabet, Analyzer, AnalyzerConfig, FrequencyTable, NgramReport,
    DEFAULT_NGRAM_LIMIT, UKRAINIAN_ALPHABET,
};

/// Command-line arguments for the affine analyzer.
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Alphabet symbols in index order
    #[arg(long, global = true, default_value = UKRAINIAN_ALPHABET, help = "Alphabet used for analysis and ciphering")]
    alphabet: String,

    #[arg(long, global = true, help = "Treat upper and lower case as different symbols")]
    case_sensitive: bool,

    #[arg(short, long, global = true, default_value_t = DEFAULT_NGRAM_LIMIT, help = "Number of bigrams/trigrams to show")]
    limit: usize,

    #[arg(short, long, global = true, action = ArgAction::Count, help = "Increase log verbosity")]
    verbose: u8,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Character, bigram and trigram frequencies of a text
    Analyze {
        #[arg(short, long, help = "Path to the input file")]
        file: String,

        #[arg(long, help = "Also print the bigram matrix")]
        matrix: bool,
    },

    /// Encrypt or decrypt a text with a known affine key
    Cipher {
        #[arg(short, long, help = "Path to the input file")]
        file: String,

        #[arg(short = 'a', long, allow_negative_numbers = true, help = "Affine multiplier (a)")]
        multiplier: i64,

        #[arg(short = 'b', long, allow_negative_numbers = true, help = "Affine shift (b)")]
        shift: i64,

        #[arg(short, long, help = "Mode of operation (encrypt/decrypt)")]
        mode: OperationMode,

        #[arg(short, long, help = "Path to the output file")]
        output: Option<String>,
    },

    /// Recover the affine key of a ciphertext and decrypt it
    Crack {
        #[arg(short, long, help = "Path to the input file containing encrypted text")]
        file: String,

        #[arg(long, help = "Path to a baseline text in the same language as the plaintext")]
        baseline: String,

        #[arg(short, long, help = "Path to the output file for decrypted text")]
        output: Option<String>,
    },
}

/// Enum representing the mode of operation for the cipher.
#[derive(Clone, Copy, Debug, ValueEnum)]
enum OperationMode {
    Encrypt,
    Decrypt,
}

/// Main entry point for the affine analyzer.
fn main() -> Result<()> {
    // Parse command-line arguments
    let cli: Cli = Cli::parse();

    // Log to stderr, -v raises the level
    SimpleLogger::new()
        .with_level(log_level(cli.verbose))
        .init()
        .context("Failed to initialize logging")?;

    // Build the alphabet from the global options
    let analyzer = Analyzer::new(AnalyzerConfig {
        alphabet: cli.alphabet.clone(),
        case_sensitive: cli.case_sensitive,
        ngram_limit: cli.limit,
    })
    .context("Invalid alphabet")?;
    info!("Alphabet: {}", analyzer.alphabet().as_string());

    // Run the selected command
    match cli.command {
        Command::Analyze { file, matrix } => {
            let content = read_input(&file)?;
            let analysis = analyzer.analyze(&content).context("Analysis failed")?;

            // Character table twice: alphabetical and by frequency, then n-gram tables
            print_table("Characters (alphabetical)", "Character", &analysis.characters_by_symbol);
            print_table("Characters (by frequency)", "Character", &analysis.characters);
            print_report("Bigrams", "Bigram", analysis.bigrams.as_ref());
            print_report("Trigrams", "Trigram", analysis.trigrams.as_ref());

            if matrix {
                if let Some(data) = &analysis.bigram_matrix {
                    print_matrix(&analyzer.alphabet(), data);
                }
            }
        }
        Command::Cipher {
            file,
            multiplier,
            shift,
            mode,
            output,
        } => {
            let content = read_input(&file)?;
            let key = AffineKey::new(multiplier, shift);

            // Apply the affine transform in the requested direction
            let result = match mode {
                OperationMode::Encrypt => analyzer.encrypt(&content, key),
                OperationMode::Decrypt => analyzer.decrypt(&content, key),
            }
            .with_context(|| format!("Failed to {:?} with a = {}, b = {}", mode, multiplier, shift))?;

            write_output(output.as_deref(), &result)?;
        }
        Command::Crack {
            file,
            baseline,
            output,
        } => {
            let ciphertext = read_input(&file)?;
            let baseline_text = read_input(&baseline)?;

            // Match the dominant symbols of both texts and decrypt with the found key
            let recovery = analyzer
                .crack(&baseline_text, &ciphertext)
                .context("Can't perform auto-decrypt")?;
            println!("Successfully decrypted: a = {}, b = {}", recovery.key.a, recovery.key.b);

            write_output(output.as_deref(), &recovery.plaintext)?;
        }
    }

    Ok(())
}

/// Maps the number of `-v` flags to a log level.
///
/// # Arguments
///
/// * `verbose` - How often `-v` was given.
///
/// # Returns
///
/// `Warn` by default, then `Info`, `Debug` and `Trace`.
fn log_level(verbose: u8) -> LevelFilter {
    match verbose {
        0 => LevelFilter::Warn,
        1 => LevelFilter::Info,
        2 => LevelFilter::Debug,
        _ => LevelFilter::Trace,
    }
}

/// Reads a whole text file.
///
/// # Arguments
///
/// * `path` - Path to the input file.
///
/// # Returns
///
/// The file content, or an error naming the file.
fn read_input(path: &str) -> Result<String> {
    std::fs::read_to_string(path).with_context(|| format!("Failed to read the input file {path}"))
}

/// Writes the result to a file, or to stdout when no file is given.
///
/// # Arguments
///
/// * `output` - Optional path to the output file.
/// * `content` - The text to write.
fn write_output(output: Option<&str>, content: &str) -> Result<()> {
    match output {
        Some(path) => {
            std::fs::write(path, content).with_context(|| format!("Failed to write the output file {path}"))?;
            println!("Output saved to: {}", path);
        }
        None => println!("{}", content),
    }
    Ok(())
}

/// Prints an n-gram report, or a placeholder when the section was skipped.
///
/// # Arguments
///
/// * `title` - Heading of the section.
/// * `column` - Name of the n-gram column.
/// * `report` - The ranked n-grams, `None` if the text had none.
fn print_report(title: &str, column: &str, report: Option<&NgramReport>) {
    match report {
        Some(report) => print_table(
            &format!("{} ({} counted)", title, report.total),
            column,
            &report.frequencies,
        ),
        None => println!("{}: none\n", title),
    }
}

/// Prints a frequency table with a heading and a header row.
///
/// # Arguments
///
/// * `title` - Heading of the table.
/// * `column` - Name of the symbol column.
/// * `table` - The entries to print, in order.
fn print_table(title: &str, column: &str, table: &FrequencyTable) {
    println!("{}", title);
    println!("{:<10} {:>10}", column, "Frequency");
    for line in format_rows(table) {
        println!("{}", line);
    }
    println!();
}

/// Formats each entry as an aligned `symbol  probability` row.
///
/// # Arguments
///
/// * `table` - The entries to format.
///
/// # Returns
///
/// One line per entry, probabilities with six decimals.
fn format_rows(table: &FrequencyTable) -> Vec<String> {
    table
        .iter()
        .map(|entry| format!("{:<10} {:>10.6}", entry.symbol, entry.probability))
        .collect()
}

/// Prints the bigram matrix.
///
/// Rows are the first letter of a bigram, columns the second.
///
/// # Arguments
///
/// * `alphabet` - The alphabet labelling rows and columns.
/// * `data` - Bigram counts scaled by the largest count.
fn print_matrix(alphabet: &Alphabet, data: &[Vec<f64>]) {
    println!("Bigram matrix (first letter \\ second letter)");
    let header: String = alphabet.symbols().iter().map(|s| format!("{:>5}", s)).collect();
    println!("  {}", header);
    for (symbol, row) in alphabet.symbols().iter().zip(data) {
        let cells: String = row.iter().map(|value| format!("{:>5.2}", value)).collect();
        println!("{} {}", symbol, cells);
    }
}
