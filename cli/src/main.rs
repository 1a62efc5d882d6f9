use std::path::PathBuf;

use anyhow::{bail, Context, Result};
use clap::{Parser, Subcommand};
use crucible_core::{load_records, validate_recipe, Recipe, RECIPE_KEYS};

#[derive(Parser)]
#[command(name = "crucible")]
#[command(about = "Crafting recipe validation", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Validate every record in one or more recipe files
    Check {
        /// Recipe files (JSON array or newline-delimited JSON)
        #[arg(required = true)]
        files: Vec<PathBuf>,
        /// Only print per-file summaries, not per-record reports
        #[arg(long)]
        quiet: bool,
        /// Print failing verdicts as JSON, one object per line
        #[arg(long)]
        json: bool,
    },
    /// Print the canonical key order recipe records must follow
    Keys,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Check { files, quiet, json } => check(&files, quiet, json),
        Commands::Keys => {
            keys();
            Ok(())
        }
    }
}

fn check(files: &[PathBuf], quiet: bool, json: bool) -> Result<()> {
    let mut failed_total = 0usize;

    for path in files {
        let records = load_records(path)
            .with_context(|| format!("Failed to load {}", path.display()))?;

        let total = records.len();
        let mut failed = 0usize;

        for record in &records {
            let verdict = validate_recipe(&record.value, &record.label);
            if verdict.is_valid() {
                if let Ok(recipe) = serde_json::from_value::<Recipe>(record.value.clone()) {
                    tracing::debug!("Recipe {} ({}) is valid", record.label, recipe.name);
                }
                continue;
            }

            failed += 1;
            if quiet {
                continue;
            }
            if json {
                println!("{}", serde_json::to_string(&verdict)?);
            } else {
                print!("{verdict}");
            }
        }

        println!(
            "{}: {} checked, {} passed, {} failed",
            path.display(),
            total,
            total - failed,
            failed
        );
        failed_total += failed;
    }

    if failed_total > 0 {
        bail!("{failed_total} recipe(s) failed validation");
    }
    Ok(())
}

fn keys() {
    for key in RECIPE_KEYS {
        if key.required {
            println!("{} (required)", key.name);
        } else {
            println!("{}", key.name);
        }
    }
}
