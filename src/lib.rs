pub mod cli;
pub mod config;
pub mod defaults;
pub mod delay_manager;
pub mod downloader;
pub mod error;
pub mod input_loader;
pub mod keyword;
pub mod logger;
pub mod orchestrator;
pub mod search_engine;

// Exporting types for convenience
pub use config::{Config, UserAgentPool};
pub use delay_manager::{Pacer, ThreadSleep};
pub use downloader::{DownloadResult, Downloader, ImageFetcher};
pub use error::FetchError;
pub use keyword::{group_keywords, sanitize_filename, start_page, KeywordGroup, KeywordParser, ParsedKeyword};
pub use orchestrator::{KeywordOutcome, KeywordReport, Orchestrator, RunSummary};
pub use search_engine::{ImageCandidate, ImageSearch, SearchEngine};
