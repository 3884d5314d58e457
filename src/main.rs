use std::path::{Path, PathBuf};
use std::time::Instant;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use tracing::{Level, info, warn};
use tracing_subscriber::FmtSubscriber;

use bechdel::{
    BechdelError, NameRegistry, ScoreRow, append_row, extract_cues, load_script, read_rows,
    score_script, summarize,
};

#[derive(Parser)]
#[command(name = "bechdel")]
#[command(author, version, about = "Heuristic Bechdel-test scoring for film scripts", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Score every script in a directory and append one CSV row each
    Score {
        /// Directory of script transcript files (*.html)
        #[arg(short, long)]
        scripts: PathBuf,

        /// Newline-delimited female given-name list
        #[arg(long)]
        female_names: PathBuf,

        /// Newline-delimited male given-name list
        #[arg(long)]
        male_names: PathBuf,

        /// Score file to append result rows to
        #[arg(short, long, default_value = "score_info.csv")]
        output: PathBuf,

        /// Verbose output
        #[arg(short, long)]
        verbose: bool,
    },

    /// Score a single script and print the audit view
    Analyze {
        /// Script transcript file
        #[arg(short, long)]
        input: PathBuf,

        /// Newline-delimited female given-name list
        #[arg(long)]
        female_names: PathBuf,

        /// Newline-delimited male given-name list
        #[arg(long)]
        male_names: PathBuf,

        /// Emit the result as JSON instead of text
        #[arg(long)]
        json: bool,

        /// Verbose output
        #[arg(short, long)]
        verbose: bool,
    },

    /// Summarize a score file into the 0-3 total-score histogram
    Summary {
        /// Score file produced by the score subcommand
        #[arg(short, long, default_value = "score_info.csv")]
        input: PathBuf,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Score {
            scripts,
            female_names,
            male_names,
            output,
            verbose,
        } => {
            setup_logging(verbose);
            score_batch(&scripts, &female_names, &male_names, &output)
        }
        Commands::Analyze {
            input,
            female_names,
            male_names,
            json,
            verbose,
        } => {
            setup_logging(verbose);
            analyze_script(&input, &female_names, &male_names, json)
        }
        Commands::Summary { input } => summarize_scores(&input),
    }
}

fn setup_logging(verbose: bool) {
    let level = if verbose { Level::DEBUG } else { Level::INFO };
    let subscriber = FmtSubscriber::builder().with_max_level(level).finish();
    tracing::subscriber::set_global_default(subscriber).ok();
}

fn score_batch(
    scripts: &Path,
    female_names: &Path,
    male_names: &Path,
    output: &Path,
) -> Result<()> {
    // Registry problems are fatal before any scoring starts.
    let registry =
        NameRegistry::load(female_names, male_names).context("Failed to load name lists")?;
    info!(
        "Loaded {} female and {} male name tokens",
        registry.female.len(),
        registry.male.len()
    );

    let paths = enumerate_scripts(scripts)?;
    info!("Found {} scripts in {:?}", paths.len(), scripts);

    let batch_start = Instant::now();
    let mut scored = 0usize;
    let mut skipped = 0usize;

    for path in &paths {
        let start = Instant::now();
        let doc = match load_script(path) {
            Ok(doc) => doc,
            // One bad script never aborts the batch.
            Err(err @ BechdelError::MarkupParse { .. }) => {
                warn!("Skipping script: {}", err);
                skipped += 1;
                continue;
            }
            Err(err) => return Err(err.into()),
        };

        let result = score_script(&doc, &registry);
        let row = ScoreRow::new(path.display().to_string(), &result);
        append_row(output, &row)
            .with_context(|| format!("Failed to persist result for {:?}", path))?;
        scored += 1;

        info!(
            "Scored {:?}: {}/{}/{} (total {}) in {:.1?}",
            path,
            result.two_women,
            result.women_converse,
            result.not_about_a_man,
            result.total(),
            start.elapsed()
        );
    }

    info!(
        "Batch complete: {} scored, {} skipped, {:.1?} elapsed",
        scored,
        skipped,
        batch_start.elapsed()
    );
    Ok(())
}

/// Enumerate *.html files in the script directory, sorted by name. An
/// unreadable directory is a configuration problem and aborts the run.
fn enumerate_scripts(dir: &Path) -> Result<Vec<PathBuf>> {
    let entries = std::fs::read_dir(dir)
        .map_err(|source| BechdelError::Configuration {
            path: dir.to_path_buf(),
            source,
        })?
        .collect::<std::io::Result<Vec<_>>>()
        .map_err(|source| BechdelError::Configuration {
            path: dir.to_path_buf(),
            source,
        })?;

    let mut paths: Vec<PathBuf> = entries
        .into_iter()
        .map(|entry| entry.path())
        .filter(|path| path.extension().is_some_and(|ext| ext == "html"))
        .collect();
    paths.sort();
    Ok(paths)
}

fn analyze_script(
    input: &Path,
    female_names: &Path,
    male_names: &Path,
    json: bool,
) -> Result<()> {
    let registry =
        NameRegistry::load(female_names, male_names).context("Failed to load name lists")?;
    let doc = load_script(input).context("Failed to load script")?;

    let cues = extract_cues(&doc);
    let result = score_script(&doc, &registry);

    if json {
        println!("{}", serde_json::to_string_pretty(&result)?);
        return Ok(());
    }

    println!("Script Analysis");
    println!("===============");
    println!("Script: {}", input.display());
    println!("Speaker cues: {}", cues.len());
    println!("Female cast: {:?}", result.female_cast);
    println!("Male cast: {:?}", result.male_cast);
    println!();
    println!("1. Two named women speak:       {}", result.two_women);
    println!("2. They speak back-to-back:     {}", result.women_converse);
    println!("3. An exchange avoids men:      {}", result.not_about_a_man);
    println!();
    println!("Total: {}/3", result.total());

    Ok(())
}

fn summarize_scores(input: &Path) -> Result<()> {
    let rows = read_rows(input)?;
    let buckets = summarize(&rows);
    let total = rows.len();
    let widest = buckets.iter().max().copied().unwrap_or(0);

    println!("Score Summary");
    println!("=============");
    println!("Scripts scored: {}", total);
    println!();

    for (score, count) in buckets.iter().enumerate() {
        let pct = if total > 0 {
            *count as f64 / total as f64 * 100.0
        } else {
            0.0
        };
        let bar_len = if widest > 0 { count * 40 / widest } else { 0 };
        println!(
            "{} points: {:>5} ({:>5.1}%) {}",
            score,
            count,
            pct,
            "#".repeat(bar_len)
        );
    }

    Ok(())
}
