//! The per-keyword retrieval loop.
//!
//! Groups are processed in order; each group owns a used-id set so that
//! numbered variants of one search term (`chair-1`, `chair-2`) end up
//! with different photos. Everything runs on the calling thread, one
//! request at a time.

use indicatif::ProgressBar;
use log::{info, warn};
use std::collections::HashSet;
use std::path::PathBuf;
use std::time::Duration;
use crate::config::Config;
use crate::delay_manager::{Pacer, ThreadSleep};
use crate::downloader::{DownloadResult, ImageFetcher};
use crate::keyword::{group_keywords, output_filename, start_page};
use crate::search_engine::ImageSearch;

#[derive(Debug, Clone, PartialEq)]
pub enum KeywordOutcome {
    /// No unused candidate within the page budget.
    Skipped,
    Downloaded(DownloadResult),
}

#[derive(Debug, Clone, PartialEq)]
pub struct KeywordReport {
    pub keyword: String,
    pub base: String,
    pub image_id: Option<String>,
    pub outcome: KeywordOutcome,
}

#[derive(Debug, Default)]
pub struct RunSummary {
    pub reports: Vec<KeywordReport>,
}

impl RunSummary {
    pub fn downloaded(&self) -> usize {
        self.count(|o| matches!(o, KeywordOutcome::Downloaded(r) if r.is_success()))
    }

    pub fn failed(&self) -> usize {
        self.count(|o| matches!(o, KeywordOutcome::Downloaded(r) if !r.is_success()))
    }

    pub fn skipped(&self) -> usize {
        self.count(|o| matches!(o, KeywordOutcome::Skipped))
    }

    fn count(&self, pred: impl Fn(&KeywordOutcome) -> bool) -> usize {
        self.reports.iter().filter(|r| pred(&r.outcome)).count()
    }

    pub fn report(&self, keyword: &str) -> Option<&KeywordReport> {
        self.reports.iter().find(|r| r.keyword == keyword)
    }
}

pub struct Orchestrator<S, F> {
    search: S,
    fetcher: F,
    output_dir: PathBuf,
    delay: Duration,
    per_page: u32,
    max_attempts: u32,
    pacer: Box<dyn Pacer>,
}

impl<S: ImageSearch, F: ImageFetcher> Orchestrator<S, F> {
    pub fn new(config: &Config, search: S, fetcher: F) -> Self {
        Orchestrator {
            search,
            fetcher,
            output_dir: config.output_dir.clone(),
            delay: config.delay,
            per_page: config.per_page,
            max_attempts: config.max_attempts.max(1),
            pacer: Box::new(ThreadSleep),
        }
    }

    /// Replaces the default thread sleep between downloads.
    pub fn with_pacer(mut self, pacer: impl Pacer + 'static) -> Self {
        self.pacer = Box::new(pacer);
        self
    }

    pub fn run<K: AsRef<str>>(&self, keywords: &[K], progress: &ProgressBar) -> RunSummary {
        let groups = group_keywords(keywords);
        info!("Grouped {} keywords into {} base keyword groups", keywords.len(), groups.len());

        let mut summary = RunSummary::default();

        for group in groups {
            info!("Processing base keyword: {} with {} variations", group.base, group.entries.len());
            let mut used_ids: HashSet<String> = HashSet::new();

            for (keyword, index) in group.entries {
                progress.set_message(keyword.clone());
                let report = self.process_keyword(&group.base, keyword, index, &mut used_ids);
                let reached_download = matches!(report.outcome, KeywordOutcome::Downloaded(_));
                summary.reports.push(report);

                if reached_download {
                    self.pacer.pause(self.delay);
                }
                progress.inc(1);
            }
        }

        summary
    }

    fn process_keyword(
        &self,
        base: &str,
        keyword: String,
        index: Option<u32>,
        used_ids: &mut HashSet<String>,
    ) -> KeywordReport {
        info!("Processing: {}", keyword);
        let first_page = start_page(index, self.per_page);

        let mut found = None;
        for attempt in 1..=self.max_attempts {
            let page = first_page.saturating_add(attempt - 1);
            if let Some(candidate) = self.search.search(base, page, used_ids) {
                found = Some(candidate);
                break;
            }
            warn!("Attempt {} for '{}' (page {}) found nothing new", attempt, keyword, page);
        }

        let Some(candidate) = found else {
            warn!(
                "No suitable image found for '{}' after {} attempts. Skipping.",
                keyword, self.max_attempts
            );
            return KeywordReport {
                keyword,
                base: base.to_string(),
                image_id: None,
                outcome: KeywordOutcome::Skipped,
            };
        };

        used_ids.insert(candidate.id.clone());

        let destination = self.output_dir.join(output_filename(&keyword, &candidate.url));
        info!("Downloading image for '{}' to {:?}", keyword, destination);
        let result = self.fetcher.fetch_and_save(&candidate.url, &destination);

        if result.is_success() {
            info!("Successfully downloaded image for '{}'", keyword);
        } else {
            warn!("Failed to download image for '{}'", keyword);
        }

        KeywordReport {
            keyword,
            base: base.to_string(),
            image_id: Some(candidate.id),
            outcome: KeywordOutcome::Downloaded(result),
        }
    }
}
