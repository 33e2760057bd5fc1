use rand::seq::SliceRandom;
use std::path::PathBuf;
use std::time::Duration;

pub const DEFAULT_API_BASE: &str = "https://api.unsplash.com";
pub const DEFAULT_REFERER: &str = "https://unsplash.com/";
pub const DEFAULT_OUTPUT_DIR: &str = "Products";
pub const DEFAULT_DELAY_SECS: u64 = 3;
pub const DEFAULT_PER_PAGE: u32 = 10;
pub const DEFAULT_MAX_ATTEMPTS: u32 = 3;
pub const ACCESS_KEY_ENV: &str = "UNSPLASH_ACCESS_KEY";

const DEFAULT_USER_AGENTS: [&str; 4] = [
    "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/120.0.0.0 Safari/537.36",
    "Mozilla/5.0 (Macintosh; Intel Mac OS X 10_15_7) AppleWebKit/605.1.15 (KHTML, like Gecko) Version/17.1 Safari/605.1.15",
    "Mozilla/5.0 (Windows NT 10.0; Win64; x64; rv:121.0) Gecko/20100101 Firefox/121.0",
    "Mozilla/5.0 (X11; Linux x86_64) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/120.0.0.0 Safari/537.36",
];

/// Browser identification strings rotated per request.
#[derive(Debug, Clone)]
pub struct UserAgentPool {
    agents: Vec<String>,
}

impl Default for UserAgentPool {
    fn default() -> Self {
        UserAgentPool {
            agents: DEFAULT_USER_AGENTS.iter().map(|s| s.to_string()).collect(),
        }
    }
}

impl UserAgentPool {
    /// Falls back to the built-in pool when `agents` is empty.
    pub fn new(agents: Vec<String>) -> Self {
        if agents.is_empty() {
            return Self::default();
        }
        UserAgentPool { agents }
    }

    pub fn agents(&self) -> &[String] {
        &self.agents
    }

    pub fn pick(&self) -> &str {
        let mut rng = rand::thread_rng();
        self.agents
            .choose(&mut rng)
            .map(String::as_str)
            .unwrap_or(DEFAULT_USER_AGENTS[0])
    }
}

/// Everything a run needs, passed explicitly to the search client, the
/// downloader and the orchestrator.
#[derive(Debug, Clone)]
pub struct Config {
    pub access_key: String,
    pub api_base: String,
    pub referer: String,
    pub output_dir: PathBuf,
    pub delay: Duration,
    pub per_page: u32,
    pub max_attempts: u32,
    pub search_timeout: Duration,
    pub download_timeout: Duration,
    pub user_agents: UserAgentPool,
}

impl Config {
    pub fn new(access_key: impl Into<String>) -> Self {
        Config {
            access_key: access_key.into(),
            api_base: DEFAULT_API_BASE.to_string(),
            referer: DEFAULT_REFERER.to_string(),
            output_dir: PathBuf::from(DEFAULT_OUTPUT_DIR),
            delay: Duration::from_secs(DEFAULT_DELAY_SECS),
            per_page: DEFAULT_PER_PAGE,
            max_attempts: DEFAULT_MAX_ATTEMPTS,
            search_timeout: Duration::from_secs(10),
            download_timeout: Duration::from_secs(30),
            user_agents: UserAgentPool::default(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pick_comes_from_pool() {
        let pool = UserAgentPool::new(vec!["agent-a".to_string(), "agent-b".to_string()]);
        for _ in 0..20 {
            let ua = pool.pick();
            assert!(ua == "agent-a" || ua == "agent-b");
        }
    }

    #[test]
    fn test_empty_pool_uses_builtin_agents() {
        let pool = UserAgentPool::new(Vec::new());
        assert_eq!(pool.agents().len(), DEFAULT_USER_AGENTS.len());
        assert!(pool.pick().starts_with("Mozilla/5.0"));
    }

    #[test]
    fn test_defaults() {
        let config = Config::new("key");
        assert_eq!(config.per_page, 10);
        assert_eq!(config.max_attempts, 3);
        assert_eq!(config.output_dir, PathBuf::from("Products"));
        assert!(config.search_timeout < config.download_timeout);
    }
}
