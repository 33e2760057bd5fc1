use reqwest::blocking::Client;
use reqwest::header::{HeaderMap, HeaderValue, ACCEPT, ACCEPT_LANGUAGE, REFERER, USER_AGENT};
use std::fs::{self, File};
use std::io::{self, BufWriter, Write};
use std::path::{Path, PathBuf};
use log::{debug, error};
use crate::config::{Config, UserAgentPool};
use crate::error::FetchError;

const IMAGE_ACCEPT: &str = "image/webp,image/apng,image/*,*/*;q=0.8";

#[derive(Debug, Clone, PartialEq)]
pub enum DownloadResult {
    Saved { path: PathBuf, bytes: u64 },
    Failed { path: PathBuf, reason: String },
}

impl DownloadResult {
    pub fn is_success(&self) -> bool {
        matches!(self, DownloadResult::Saved { .. })
    }

    pub fn path(&self) -> &Path {
        match self {
            DownloadResult::Saved { path, .. } | DownloadResult::Failed { path, .. } => path,
        }
    }
}

/// Retrieves an image and writes it to disk. Failures come back as
/// [`DownloadResult::Failed`], never as a panic or an error that would
/// stop the run.
pub trait ImageFetcher {
    fn fetch_and_save(&self, url: &str, destination: &Path) -> DownloadResult;
}

impl<T: ImageFetcher + ?Sized> ImageFetcher for &T {
    fn fetch_and_save(&self, url: &str, destination: &Path) -> DownloadResult {
        (**self).fetch_and_save(url, destination)
    }
}

pub struct Downloader {
    client: Client,
    user_agents: UserAgentPool,
}

impl Downloader {
    pub fn new(config: &Config) -> Result<Self, FetchError> {
        let mut headers = HeaderMap::new();
        headers.insert(ACCEPT, HeaderValue::from_static(IMAGE_ACCEPT));
        headers.insert(ACCEPT_LANGUAGE, HeaderValue::from_static("en-US,en;q=0.9"));
        let referer = HeaderValue::from_str(&config.referer)
            .map_err(|_| FetchError::InvalidUrl(config.referer.clone()))?;
        headers.insert(REFERER, referer);

        let client = Client::builder()
            .timeout(config.download_timeout)
            .default_headers(headers)
            .build()
            .map_err(FetchError::Client)?;

        Ok(Downloader {
            client,
            user_agents: config.user_agents.clone(),
        })
    }

    fn try_fetch(&self, url: &str, destination: &Path) -> Result<u64, FetchError> {
        let mut resp = self.client.get(url)
            .header(USER_AGENT, self.user_agents.pick())
            .send()
            .map_err(|source| FetchError::Transport { url: url.to_string(), source })?;

        let status = resp.status();
        debug!("Download response status: {}", status);
        if !status.is_success() {
            return Err(FetchError::Status { url: url.to_string(), status: status.as_u16() });
        }

        let io_err = |source: io::Error| FetchError::Io { path: destination.to_path_buf(), source };

        if let Some(parent) = destination.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent).map_err(io_err)?;
        }

        let mut file = BufWriter::new(File::create(destination).map_err(io_err)?);
        // The blocking response is a `Read`, so this streams chunk by chunk.
        let bytes = io::copy(&mut resp, &mut file).map_err(io_err)?;
        file.flush().map_err(io_err)?;
        Ok(bytes)
    }
}

impl ImageFetcher for Downloader {
    fn fetch_and_save(&self, url: &str, destination: &Path) -> DownloadResult {
        debug!("Downloading {} -> {:?}", url, destination);
        match self.try_fetch(url, destination) {
            Ok(bytes) => {
                debug!("Saved {:?} ({:.2} KB)", destination, bytes as f64 / 1024.0);
                DownloadResult::Saved { path: destination.to_path_buf(), bytes }
            }
            Err(e) => {
                error!("Error downloading image: {}", e);
                DownloadResult::Failed { path: destination.to_path_buf(), reason: e.to_string() }
            }
        }
    }
}
