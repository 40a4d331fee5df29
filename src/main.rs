mod config;
mod parser;
mod partition;
mod record;
mod writer;

use std::fs;
use std::path::{Path, PathBuf};
use std::time::Instant;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use indicatif::{ProgressBar, ProgressStyle};
use tracing::info;

use config::BankConfig;
use record::Question;

#[derive(Parser)]
#[command(name = "qbank_processor", about = "Quiz bank text-to-JSON processor")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Parse a raw question bank and write per-topic JSON files
    Convert {
        /// Raw question bank text file
        #[arg(short, long)]
        input: PathBuf,
        /// Output directory for topic JSON files
        #[arg(short, long, default_value = "questions")]
        out: PathBuf,
        /// Topic table JSON (default: built-in class 2 table)
        #[arg(short, long)]
        topics: Option<PathBuf>,
    },
    /// Parse only; print a summary table and audit warnings
    Stats {
        /// Raw question bank text file
        #[arg(short, long)]
        input: PathBuf,
        /// Topic table JSON (default: built-in class 2 table)
        #[arg(short, long)]
        topics: Option<PathBuf>,
    },
    /// Parse only; pretty-print the first records
    Preview {
        /// Raw question bank text file
        #[arg(short, long)]
        input: PathBuf,
        /// Max records to display
        #[arg(short = 'n', long, default_value = "5")]
        limit: usize,
        /// Topic table JSON (default: built-in class 2 table)
        #[arg(short, long)]
        topics: Option<PathBuf>,
    },
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info".into()),
        )
        .init();

    let t0 = Instant::now();
    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Convert { input, out, topics } => {
            let cfg = load_config(topics.as_deref())?;
            let text = read_input(&input)?;
            let blocks = parser::segment::split_blocks(&text);
            if blocks.is_empty() {
                println!("No question delimiters found in {}.", input.display());
                return Ok(());
            }

            println!("Parsing {} questions...", blocks.len());
            let questions = parse_with_progress(&blocks, &cfg.id_prefix);
            info!(questions = questions.len(), "parsed question bank");

            let groups = partition::partition(&questions, &cfg.topics);
            let written = writer::write_groups(&out, &groups)?;
            for (path, n) in &written {
                println!("Wrote {} questions to {}", n, path);
            }
            println!(
                "\nParsed {} questions into {} topic files.",
                questions.len(),
                written.len()
            );
            Ok(())
        }
        Commands::Stats { input, topics } => {
            let cfg = load_config(topics.as_deref())?;
            let text = read_input(&input)?;
            let questions = parser::parse_document(&text, &cfg.id_prefix);
            if questions.is_empty() {
                println!("No question delimiters found in {}.", input.display());
                return Ok(());
            }

            println!(
                "{:>3} | {:<14} | {:>7} | {:^3} | {:<40}",
                "#", "ID", "Choices", "Ans", "Question"
            );
            println!("{}", "-".repeat(80));
            for (i, q) in questions.iter().enumerate() {
                let stem = q.question.replace('\n', " ");
                println!(
                    "{:>3} | {:<14} | {:>7} | {:^3} | {:<40}",
                    i + 1,
                    q.id,
                    q.choices.len(),
                    q.answer_label,
                    truncate(&stem, 40)
                );
            }

            let groups = partition::partition(&questions, &cfg.topics);
            println!("\n--- Topics ---");
            for group in &groups {
                println!(
                    "  {:<16} {:<24} {:>3} questions",
                    group.file_stem,
                    group.label,
                    group.questions.len()
                );
            }

            let warnings: Vec<String> =
                questions.iter().flat_map(audit_warnings).collect();
            if !warnings.is_empty() {
                println!("\n--- Warnings ---");
                for w in &warnings {
                    println!("  {}", w);
                }
            }

            println!("\n{} questions total, {} warnings", questions.len(), warnings.len());
            Ok(())
        }
        Commands::Preview { input, limit, topics } => {
            let cfg = load_config(topics.as_deref())?;
            let text = read_input(&input)?;
            let questions = parser::parse_document(&text, &cfg.id_prefix);
            if questions.is_empty() {
                println!("No question delimiters found in {}.", input.display());
                return Ok(());
            }

            for q in questions.iter().take(limit) {
                println!("--- {} ---", q.id);
                if !q.question.is_empty() {
                    println!("{}", q.question);
                }
                for choice in &q.choices {
                    println!("  {}", choice);
                }
                println!("Answer: {} (index {})", q.answer_label, q.answer_index);
                if !q.explanation.is_empty() {
                    println!("Explanation: {}", q.explanation);
                }
                println!();
            }
            println!("Showing {} of {} questions.", limit.min(questions.len()), questions.len());
            Ok(())
        }
    };

    let elapsed = t0.elapsed();
    if elapsed.as_secs() >= 1 {
        println!("\nDone in {:.1}s", elapsed.as_secs_f64());
    }

    result
}

fn load_config(path: Option<&Path>) -> Result<BankConfig> {
    match path {
        Some(p) => BankConfig::load(p),
        None => Ok(BankConfig::default()),
    }
}

fn read_input(path: &Path) -> Result<String> {
    fs::read_to_string(path).with_context(|| format!("reading input {}", path.display()))
}

fn parse_with_progress(blocks: &[&str], id_prefix: &str) -> Vec<Question> {
    let pb = ProgressBar::new(blocks.len() as u64);
    pb.set_style(
        ProgressStyle::default_bar()
            .template("{spinner:.green} [{bar:40.cyan/blue}] {pos}/{len}")
            .unwrap()
            .progress_chars("#>-"),
    );

    let mut questions = Vec::with_capacity(blocks.len());
    for (i, body) in blocks.iter().enumerate() {
        questions.push(parser::build_question(i, body, id_prefix));
        pb.inc(1);
    }

    pb.finish_and_clear();
    questions
}

/// Records the downstream quiz app would reject or mis-render.
fn audit_warnings(q: &Question) -> Vec<String> {
    let mut warnings = Vec::new();
    if q.question.is_empty() {
        warnings.push(format!("{}: empty question text", q.id));
    }
    if q.choices.len() != 2 && q.choices.len() != 4 {
        warnings.push(format!(
            "{}: {} choices (quiz app expects 2 or 4)",
            q.id,
            q.choices.len()
        ));
    }
    if !q.choices.is_empty() && q.answer_index >= q.choices.len() {
        warnings.push(format!(
            "{}: answer {} points past the last choice",
            q.id, q.answer_label
        ));
    }
    warnings
}

fn truncate(s: &str, max: usize) -> String {
    if s.chars().count() <= max {
        s.to_string()
    } else {
        let truncated: String = s.chars().take(max).collect();
        format!("{}...", truncated)
    }
}
