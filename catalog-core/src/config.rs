//! Client configuration

use std::time::Duration;

/// Default backend base URL
pub const DEFAULT_API_URL: &str = "http://localhost:8080/api/v2";
pub const DEFAULT_MAX_NAME_LENGTH: usize = 20;
pub const DEFAULT_MAX_CATEGORIES_PER_BOOK: usize = 5;
pub const DEFAULT_PAGE_SIZE: usize = 10;

/// What the mutation coordinator does after a successful write
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RefreshPolicy {
    /// Reload every collection and every selection projection
    #[default]
    Full,

    /// Leave the cache alone; the caller refreshes when it is done
    Manual,
}

/// Settings shared by the cache, the validators and the HTTP client
#[derive(Debug, Clone, PartialEq)]
pub struct ClientConfig {
    /// Base URL the entity paths are appended to
    pub base_url: String,

    /// Upper bound on any entity name
    pub max_name_length: usize,

    /// Upper bound on categories selected for one book
    pub max_categories_per_book: usize,

    /// Rows per table page
    pub page_size: usize,

    /// Per-request timeout
    pub timeout: Duration,

    pub refresh_policy: RefreshPolicy,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_API_URL.to_string(),
            max_name_length: DEFAULT_MAX_NAME_LENGTH,
            max_categories_per_book: DEFAULT_MAX_CATEGORIES_PER_BOOK,
            page_size: DEFAULT_PAGE_SIZE,
            timeout: Duration::from_secs(10),
            refresh_policy: RefreshPolicy::Full,
        }
    }
}

impl ClientConfig {
    /// Defaults overridden by `CATALOG_API_URL`, `CATALOG_MAX_NAME_LENGTH`
    /// and `CATALOG_PAGE_SIZE`. Unparseable numbers are ignored.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let mut config = Self::default();
        if let Some(url) = lookup("CATALOG_API_URL").filter(|u| !u.trim().is_empty()) {
            config.base_url = url;
        }
        if let Some(n) = parse_positive(lookup("CATALOG_MAX_NAME_LENGTH")) {
            config.max_name_length = n;
        }
        if let Some(n) = parse_positive(lookup("CATALOG_PAGE_SIZE")) {
            config.page_size = n;
        }
        config
    }

    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    /// Absolute URL for a path below the base
    pub fn url(&self, path: &str) -> String {
        format!(
            "{}/{}",
            self.base_url.trim_end_matches('/'),
            path.trim_start_matches('/')
        )
    }
}

fn parse_positive(value: Option<String>) -> Option<usize> {
    value?.trim().parse().ok().filter(|n| *n > 0)
}
