//! Vitae CLI - Extract contact details and work history from a folder of resumes.

use clap::Parser;
use std::env;
use std::io;
use tracing_subscriber::EnvFilter;
use vitae_cli::interactive::{prompt_for_folder, resolve_folder};
use vitae_cli::provider::COHERE_API_KEY_VAR;
use vitae_cli::{write_csv, Cli, Config, Formatter, Pipeline, SelectedProvider};
use vitae_extractor::Extractor;
use vitae_ingest::TextNormalizer;
use vitae_store::SqliteStore;

#[tokio::main]
async fn main() {
    if let Err(e) = run().await {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

async fn run() -> vitae_cli::Result<()> {
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with_writer(io::stderr)
        .init();

    let mut config = match &cli.config {
        Some(path) => Config::load_from(path)?,
        None => Config::load()?,
    };
    cli.apply_to(&mut config);
    config.validate()?;

    let formatter = Formatter::new(!cli.no_color && config.output.color);

    // Credentials are checked before asking for input
    let provider =
        SelectedProvider::from_settings(&config.provider, env::var(COHERE_API_KEY_VAR).ok()).await?;

    let folder = match &cli.folder {
        Some(folder) => resolve_folder(&folder.to_string_lossy())?,
        None => prompt_for_folder(&formatter)?,
    };

    let store = SqliteStore::new(&config.output.database_path)?;
    let extractor = Extractor::new(provider, config.extractor.clone());
    let mut pipeline = Pipeline::new(TextNormalizer::new(), extractor, store);

    println!(
        "{}",
        formatter.info(&format!("Processing resumes in {}", folder.display()))
    );

    let report = pipeline
        .process_folder_with(&folder, |outcome| {
            println!("{}", formatter.document_line(outcome));
        })
        .await?;

    println!("{}", formatter.summary_table(&report));

    if write_csv(&config.output.csv_path, &report.rows)? {
        println!(
            "{}",
            formatter.success(&format!(
                "Data saved to {} and {}",
                config.output.csv_path.display(),
                config.output.database_path.display()
            ))
        );
    } else {
        println!("{}", formatter.warning("No resumes were processed, CSV not written."));
    }

    Ok(())
}
