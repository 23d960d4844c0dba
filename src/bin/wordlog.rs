//! Wordlog CLI - Command-line interface for the word-touch log pairer
//!
//! Commands:
//! - pair: Pair a whole log into a table of interactions (batch mode)
//! - run: Pair streaming input from stdin (streaming mode)
//! - validate: Decode every line and report what the pairer would see

use clap::{Parser, Subcommand, ValueEnum};
use std::fs;
use std::io::{self, BufRead, Read, Write};
use std::path::PathBuf;
use std::process::ExitCode;

use wordlog::encoder;
use wordlog::schema::{decode_line, decode_log, DecodedLine};
use wordlog::{PairError, TouchPairer, WORDLOG_VERSION};

/// Wordlog - pair word-touch log events into interaction durations
#[derive(Parser)]
#[command(name = "wordlog")]
#[command(version = WORDLOG_VERSION)]
#[command(about = "Pair word-touch log events into a table of durations", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Pair a whole log into a table of interactions (batch mode)
    Pair {
        /// Input file path (use - for stdin)
        #[arg(short, long)]
        input: PathBuf,

        /// Output file path (use - for stdout)
        #[arg(short, long)]
        output: PathBuf,

        /// Output format
        #[arg(long, default_value = "csv")]
        output_format: OutputFormat,
    },

    /// Pair streaming input from stdin (streaming mode)
    Run {
        /// Output format
        #[arg(long, default_value = "csv")]
        output_format: OutputFormat,

        /// Flush output after each row
        #[arg(long, default_value = "true")]
        flush: bool,
    },

    /// Decode every line and report what the pairer would see
    Validate {
        /// Input file path (use - for stdin)
        #[arg(short, long)]
        input: PathBuf,

        /// Output validation report as JSON
        #[arg(long)]
        json: bool,
    },
}

#[derive(Clone, ValueEnum)]
enum OutputFormat {
    /// Comma-separated table with a header row
    Csv,
    /// Newline-delimited JSON (one row per line)
    Ndjson,
    /// JSON array of rows
    Json,
    /// Pretty-printed JSON array
    JsonPretty,
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!(
                "{}",
                serde_json::to_string(&CliError::from(e))
                    .unwrap_or_else(|_| "Unknown error".to_string())
            );
            ExitCode::FAILURE
        }
    }
}

fn run(cli: Cli) -> Result<(), WordlogCliError> {
    match cli.command {
        Commands::Pair {
            input,
            output,
            output_format,
        } => cmd_pair(&input, &output, output_format),

        Commands::Run {
            output_format,
            flush,
        } => cmd_run(output_format, flush),

        Commands::Validate { input, json } => cmd_validate(&input, json),
    }
}

fn cmd_pair(
    input: &PathBuf,
    output: &PathBuf,
    output_format: OutputFormat,
) -> Result<(), WordlogCliError> {
    let input_data = read_input(input)?;

    let report = wordlog::pair_log(&input_data);

    // diagnostics are visible separately from the table and never fail the run
    for diagnostic in &report.diagnostics {
        eprintln!("{}", diagnostic);
    }

    let output_data = format_output(&report.interactions, &output_format)?;

    if output.to_string_lossy() == "-" {
        print!("{}", output_data);
    } else {
        fs::write(output, output_data)?;
    }

    Ok(())
}

fn cmd_run(output_format: OutputFormat, flush: bool) -> Result<(), WordlogCliError> {
    if atty::is(atty::Stream::Stdin) {
        eprintln!("reading log records from a TTY; pipe a word log or finish with Ctrl-D");
    }

    let stdin = io::stdin();
    let mut stdout = io::stdout();

    // JSON array forms cannot stream; buffer and emit on EOF
    let mut buffered: Vec<wordlog::Interaction> = Vec::new();

    if matches!(output_format, OutputFormat::Csv) {
        writeln!(stdout, "{}", encoder::csv_header())?;
    }

    let mut pairer = TouchPairer::new();

    for line in stdin.lock().lines() {
        let line = line?;

        let event = match decode_line(&line) {
            Ok(DecodedLine::Event(event)) => event,
            Ok(DecodedLine::Ignored) => continue,
            Err(e) => {
                eprintln!("{}", e);
                continue;
            }
        };

        let interaction = match pairer.apply(event) {
            Ok(Some(interaction)) => interaction,
            Ok(None) => continue,
            Err(e) => {
                eprintln!("{}", e);
                continue;
            }
        };

        match output_format {
            OutputFormat::Csv => writeln!(stdout, "{}", encoder::csv_row(&interaction))?,
            OutputFormat::Ndjson => {
                writeln!(stdout, "{}", serde_json::to_string(&interaction)?)?
            }
            OutputFormat::Json | OutputFormat::JsonPretty => {
                buffered.push(interaction);
                continue;
            }
        }
        if flush {
            stdout.flush()?;
        }
    }

    match output_format {
        OutputFormat::Json => write!(stdout, "{}", encoder::encode_json(&buffered)?)?,
        OutputFormat::JsonPretty => {
            write!(stdout, "{}", encoder::encode_json_pretty(&buffered)?)?
        }
        _ => {}
    }
    stdout.flush()?;

    Ok(())
}

fn cmd_validate(input: &PathBuf, json: bool) -> Result<(), WordlogCliError> {
    let input_data = read_input(input)?;

    let mut report = ValidationReport {
        total_lines: 0,
        touch_events: 0,
        ignored_records: 0,
        decode_failures: 0,
        malformed_records: 0,
        errors: Vec::new(),
    };

    for line in decode_log(&input_data) {
        report.total_lines += 1;
        match line.result {
            Ok(DecodedLine::Event(_)) => report.touch_events += 1,
            Ok(DecodedLine::Ignored) => report.ignored_records += 1,
            Err(e) => {
                match e {
                    PairError::Decode { .. } => report.decode_failures += 1,
                    _ => report.malformed_records += 1,
                }
                report.errors.push(ValidationErrorDetail {
                    line_no: line.line_no,
                    error: e.to_string(),
                });
            }
        }
    }

    if json {
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        println!("Validation Report");
        println!("=================");
        println!("Total lines:       {}", report.total_lines);
        println!("Touch events:      {}", report.touch_events);
        println!("Ignored records:   {}", report.ignored_records);
        println!("Decode failures:   {}", report.decode_failures);
        println!("Malformed records: {}", report.malformed_records);

        if !report.errors.is_empty() {
            println!("\nErrors:");
            for err in &report.errors {
                println!("  - line {}: {}", err.line_no, err.error);
            }
        }
    }

    let failed = report.decode_failures + report.malformed_records;
    if failed > 0 {
        Err(WordlogCliError::ValidationFailed(failed))
    } else {
        Ok(())
    }
}

// Helper functions

fn read_input(input: &PathBuf) -> Result<String, WordlogCliError> {
    if input.to_string_lossy() == "-" {
        let mut buffer = String::new();
        io::stdin().read_to_string(&mut buffer)?;
        Ok(buffer)
    } else {
        Ok(fs::read_to_string(input)?)
    }
}

fn format_output(
    rows: &[wordlog::Interaction],
    format: &OutputFormat,
) -> Result<String, WordlogCliError> {
    let out = match format {
        OutputFormat::Csv => encoder::encode_csv(rows),
        OutputFormat::Ndjson => encoder::encode_ndjson(rows)?,
        OutputFormat::Json => encoder::encode_json(rows)?,
        OutputFormat::JsonPretty => encoder::encode_json_pretty(rows)?,
    };
    Ok(out)
}

// Error types

#[derive(Debug)]
enum WordlogCliError {
    Io(io::Error),
    Pair(PairError),
    Json(serde_json::Error),
    ValidationFailed(usize),
}

impl From<io::Error> for WordlogCliError {
    fn from(e: io::Error) -> Self {
        WordlogCliError::Io(e)
    }
}

impl From<PairError> for WordlogCliError {
    fn from(e: PairError) -> Self {
        WordlogCliError::Pair(e)
    }
}

impl From<serde_json::Error> for WordlogCliError {
    fn from(e: serde_json::Error) -> Self {
        WordlogCliError::Json(e)
    }
}

#[derive(serde::Serialize)]
struct CliError {
    code: String,
    message: String,
    hint: Option<String>,
}

impl From<WordlogCliError> for CliError {
    fn from(e: WordlogCliError) -> Self {
        match e {
            WordlogCliError::Io(e) => CliError {
                code: "IO_ERROR".to_string(),
                message: e.to_string(),
                hint: Some("Check file paths and permissions".to_string()),
            },
            WordlogCliError::Pair(e) => CliError {
                code: "PAIR_ERROR".to_string(),
                message: e.to_string(),
                hint: Some("Run 'wordlog validate' for a per-line report".to_string()),
            },
            WordlogCliError::Json(e) => CliError {
                code: "JSON_ERROR".to_string(),
                message: e.to_string(),
                hint: Some("Check JSON syntax".to_string()),
            },
            WordlogCliError::ValidationFailed(count) => CliError {
                code: "VALIDATION_FAILED".to_string(),
                message: format!("{} lines failed validation", count),
                hint: Some("Fix or drop the reported lines and retry".to_string()),
            },
        }
    }
}

// Report types

#[derive(serde::Serialize)]
struct ValidationReport {
    total_lines: usize,
    touch_events: usize,
    ignored_records: usize,
    decode_failures: usize,
    malformed_records: usize,
    errors: Vec<ValidationErrorDetail>,
}

#[derive(serde::Serialize)]
struct ValidationErrorDetail {
    line_no: usize,
    error: String,
}
