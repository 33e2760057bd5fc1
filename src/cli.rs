use clap::Parser;
use log::warn;
use std::path::PathBuf;
use std::time::Duration;
use crate::config::{
    Config, ACCESS_KEY_ENV, DEFAULT_DELAY_SECS, DEFAULT_MAX_ATTEMPTS, DEFAULT_OUTPUT_DIR, DEFAULT_PER_PAGE,
};
use crate::defaults::DEFAULT_KEYWORDS;

/// Download one Unsplash photo per keyword, keeping numbered variants
/// of the same term (chair-1, chair-2) distinct.
#[derive(Parser, Debug)]
#[command(name = "image-downloader", version, about, long_about = None)]
pub struct Cli {
    /// Keywords to search for
    #[arg(long, num_args = 1..)]
    pub keywords: Vec<String>,

    /// File with more keywords (one per line, or a CSV with a `keyword` column)
    #[arg(long)]
    pub keywords_file: Option<PathBuf>,

    /// Output directory
    #[arg(long, default_value = DEFAULT_OUTPUT_DIR)]
    pub output_dir: PathBuf,

    /// Delay between requests in seconds
    #[arg(long, default_value_t = DEFAULT_DELAY_SECS)]
    pub delay: u64,

    /// Results requested per search page
    #[arg(long, default_value_t = DEFAULT_PER_PAGE, value_parser = clap::value_parser!(u32).range(1..=30))]
    pub per_page: u32,

    /// Consecutive pages tried before a keyword is skipped
    #[arg(long, default_value_t = DEFAULT_MAX_ATTEMPTS, value_parser = clap::value_parser!(u32).range(1..))]
    pub max_attempts: u32,

    /// Unsplash access key
    #[arg(long, env = ACCESS_KEY_ENV, hide_env_values = true)]
    pub access_key: Option<String>,

    /// Log request details
    #[arg(short, long)]
    pub verbose: bool,
}

impl Cli {
    /// Builds the run configuration; fails when no access key was given.
    pub fn to_config(&self) -> Result<Config, String> {
        let access_key = self
            .access_key
            .as_deref()
            .map(str::trim)
            .filter(|k| !k.is_empty())
            .ok_or_else(|| format!("No Unsplash access key. Pass --access-key or set {}.", ACCESS_KEY_ENV))?;

        let mut config = Config::new(access_key);
        config.output_dir = self.output_dir.clone();
        config.delay = Duration::from_secs(self.delay);
        config.per_page = self.per_page;
        config.max_attempts = self.max_attempts;
        Ok(config)
    }
}

/// Command-line keywords first, then file keywords; blanks dropped.
/// Falls back to the built-in list when nothing is left.
pub fn resolve_keywords(cli_keywords: &[String], file_keywords: Option<Vec<String>>) -> Vec<String> {
    let from_file = file_keywords.is_some();
    let keywords: Vec<String> = cli_keywords
        .iter()
        .cloned()
        .chain(file_keywords.unwrap_or_default())
        .map(|k| k.trim().to_string())
        .filter(|k| !k.is_empty())
        .collect();

    if keywords.is_empty() {
        if from_file {
            warn!(
                "Keyword file yielded no keywords; falling back to the {} built-in keywords",
                DEFAULT_KEYWORDS.len()
            );
        }
        return DEFAULT_KEYWORDS.iter().map(|k| k.to_string()).collect();
    }
    keywords
}
