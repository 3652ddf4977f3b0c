use std::{
    fs,
    io::{self, Read},
    path::PathBuf,
    process::ExitCode,
    time::Instant,
};

use anyhow::Context;
use clap::{Parser, ValueEnum};
use drc::{compile, format_error, Compilation};
use env_logger::Builder;
use log::{error, info, LevelFilter};

#[derive(Parser, Debug)]
#[command(name = "drc", version, about = "Compiles DR source into an annotated parse tree")]
struct Cli {
    /// Source file to compile. Reads stdin when omitted.
    input: Option<PathBuf>,

    /// Output format
    #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
    format: OutputFormat,

    /// Sections to print in text mode (default: all)
    #[arg(long, value_enum, value_delimiter = ',')]
    emit: Vec<Section>,

    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

#[derive(ValueEnum, Clone, Copy, Debug, PartialEq)]
enum OutputFormat {
    Text,
    Json,
}

#[derive(ValueEnum, Clone, Copy, Debug, PartialEq)]
enum Section {
    Tokens,
    Tree,
    Symbols,
    Errors,
}

const ALL_SECTIONS: [Section; 4] = [Section::Tokens, Section::Tree, Section::Symbols, Section::Errors];

fn main() -> anyhow::Result<ExitCode> {
    let cli = Cli::parse();

    let level = match cli.verbose {
        0 => LevelFilter::Warn,
        1 => LevelFilter::Info,
        2 => LevelFilter::Debug,
        _ => LevelFilter::Trace,
    };
    let mut builder = Builder::new();
    builder.filter_level(level);
    builder.parse_default_env();
    builder.init();

    let (source, file) = read_source(cli.input.as_ref())?;

    let start = Instant::now();
    let result = compile(&source);
    info!("compiled {} in {:?}", file.display(), start.elapsed());

    match result {
        Ok(compilation) => {
            match cli.format {
                OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&compilation)?),
                OutputFormat::Text => {
                    let sections = if cli.emit.is_empty() { &ALL_SECTIONS[..] } else { &cli.emit[..] };
                    print!("{}", render(&compilation, sections));
                }
            }

            if compilation.is_clean() {
                info!("compilation successful, no errors found");
                Ok(ExitCode::SUCCESS)
            } else {
                info!("compilation finished with {} error(s)", compilation.errors.len());
                Ok(ExitCode::from(1))
            }
        }
        Err(err) => {
            error!("{}", err);
            match cli.format {
                OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&err)?),
                OutputFormat::Text => eprint!("{}", format_error(&err, &source, &file)),
            }
            Ok(ExitCode::from(2))
        }
    }
}

fn read_source(input: Option<&PathBuf>) -> anyhow::Result<(String, PathBuf)> {
    match input {
        Some(path) => {
            let source = fs::read_to_string(path)
                .with_context(|| format!("failed to read {}", path.display()))?;
            Ok((source, path.clone()))
        }
        None => {
            let mut source = String::new();
            io::stdin()
                .read_to_string(&mut source)
                .context("failed to read source from stdin")?;
            Ok((source, PathBuf::from("<stdin>")))
        }
    }
}

fn render(compilation: &Compilation, sections: &[Section]) -> String {
    let mut out = String::new();

    for section in ALL_SECTIONS.iter().filter(|s| sections.contains(*s)) {
        match section {
            Section::Tokens => {
                out.push_str("=== Tokens ===\n");
                for token in &compilation.tokens {
                    out.push_str(&format!("{:>4}  {:<14} {}\n", token.line, token.kind.to_string(), token.value));
                }
            }
            Section::Tree => {
                out.push_str("=== Parse Tree ===\n");
                out.push_str(&compilation.tree.pretty());
            }
            Section::Symbols => {
                out.push_str("=== Symbol Table ===\n");
                for symbol in &compilation.symbols {
                    out.push_str(&format!("{}\n", symbol));
                }
            }
            Section::Errors => {
                if compilation.errors.is_empty() {
                    out.push_str("No semantic errors.\n");
                } else {
                    out.push_str("=== Semantic Errors ===\n");
                    for error in &compilation.errors {
                        out.push_str(&format!("{}\n", error));
                    }
                }
            }
        }
    }

    out
}
