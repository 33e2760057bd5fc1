use image_downloader_lib::{cli, input_loader, logger};
use image_downloader_lib::{Downloader, Orchestrator, SearchEngine};

use std::error::Error;
use std::fs;
use clap::Parser;
use indicatif::{ProgressBar, ProgressStyle};
use log::info;

use cli::{resolve_keywords, Cli};

fn main() -> Result<(), Box<dyn Error>> {
    let args = Cli::parse();

    let progress = ProgressBar::new(0);
    progress.set_style(ProgressStyle::default_bar()
        .template("{spinner:.green} [{elapsed_precise}] [{wide_bar:.cyan/blue}] {pos}/{len} {msg}")
        .unwrap_or_else(|_| ProgressStyle::default_bar())
        .progress_chars("#>-"));
    logger::init(args.verbose, &progress);

    let config = args.to_config()?;

    let file_keywords = match &args.keywords_file {
        Some(path) => Some(input_loader::load_keywords(path)?),
        None => None,
    };
    let keywords = resolve_keywords(&args.keywords, file_keywords);

    fs::create_dir_all(&config.output_dir)
        .map_err(|e| format!("Cannot create output directory {:?}: {}", config.output_dir, e))?;

    info!("Starting download of {} images from Unsplash...", keywords.len());

    let search_engine = SearchEngine::new(&config)?;
    let downloader = Downloader::new(&config)?;
    let orchestrator = Orchestrator::new(&config, search_engine, downloader);

    progress.set_length(keywords.len() as u64);

    let summary = orchestrator.run(&keywords, &progress);
    progress.finish_and_clear();

    let output_dir = fs::canonicalize(&config.output_dir).unwrap_or_else(|_| config.output_dir.clone());
    info!(
        "Download complete! {} downloaded, {} failed, {} skipped. Images saved to {}",
        summary.downloaded(),
        summary.failed(),
        summary.skipped(),
        output_dir.display()
    );
    Ok(())
}
