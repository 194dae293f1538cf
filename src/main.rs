// src/main.rs
mod logger;

use std::path::{Path, PathBuf};
use std::time::Instant;

use anyhow::Context;
use clap::{ArgAction, Parser, Subcommand};
use huffpack::{display, files, journal, Session};

#[derive(Parser)]
#[command(name = "huffpack", version)]
#[command(about = "Huffman compressor for UTF-8 text files.", long_about = None)]
struct Cli {
    /// Raise log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = ArgAction::Count, global = true)]
    verbose: u8,
    /// Append a JSON line per compress/decompress run to this file
    #[arg(long, global = true)]
    journal: Option<PathBuf>,
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Print the character frequency table of a text file
    Freq { file: PathBuf },
    /// Print the Huffman tree built from a text file
    Tree { file: PathBuf },
    /// Print the Huffman code of every character in a text file
    Codes { file: PathBuf },
    /// Compress a text file into a .huff container
    Compress {
        file: PathBuf,
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
    /// Decompress a .huff container back into text
    Decompress {
        file: PathBuf,
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
    /// Show the runs recorded in a journal file
    History { journal: PathBuf },
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    logger::init(cli.verbose)?;

    let span = tracing::info_span!("command_execution", command = ?std::env::args().collect::<Vec<_>>());
    let _enter = span.enter();

    match cli.command {
        Commands::Freq { file } => {
            let mut session = load(&file)?;
            print!("{}", display::frequency_table(session.frequencies()?));
        }
        Commands::Tree { file } => {
            let mut session = load(&file)?;
            match session.tree()? {
                Some(tree) => print!("{}", display::tree_diagram(tree)),
                None => println!("(empty input, no tree)"),
            }
        }
        Commands::Codes { file } => {
            let mut session = load(&file)?;
            print!("{}", display::code_table(session.codes()?));
        }
        Commands::Compress { file, output } => {
            let output = output.unwrap_or_else(|| files::default_compressed_path(&file));
            run("compress", &file, &output, cli.journal.as_deref(), files::compress_file)?;
        }
        Commands::Decompress { file, output } => {
            let output = match output {
                Some(path) => path,
                None => files::default_recovered_path(&file)?,
            };
            run("decompress", &file, &output, cli.journal.as_deref(), files::decompress_file)?;
        }
        Commands::History { journal } => {
            for entry in journal::read_all(&journal)? {
                println!(
                    "{}  {:<10} {} -> {} ({} chars, {} -> {} bytes)",
                    entry.timestamp,
                    entry.action,
                    entry.input,
                    entry.output,
                    entry.chars,
                    entry.input_bytes,
                    entry.output_bytes
                );
            }
        }
    }

    Ok(())
}

fn load(file: &Path) -> anyhow::Result<Session> {
    let mut session = Session::new();
    session
        .load(file)
        .with_context(|| format!("could not load {}", file.display()))?;
    Ok(session)
}

fn run(
    action: &str,
    input: &Path,
    output: &Path,
    journal_path: Option<&Path>,
    op: fn(&Path, &Path) -> huffpack::Result<files::FileReport>,
) -> anyhow::Result<()> {
    let start = Instant::now();
    let report = op(input, output).with_context(|| format!("{action} failed for {}", input.display()))?;
    let elapsed = start.elapsed();

    println!("File '{}' written ({} -> {} bytes).", output.display(), report.input_bytes, report.output_bytes);
    println!("Elapsed: {:.4} s", elapsed.as_secs_f64());

    if let Some(path) = journal_path {
        journal::append(path, &journal::JournalEntry::new(action, input, output, &report))
            .with_context(|| format!("could not write journal {}", path.display()))?;
    }
    Ok(())
}
