use std::collections::HashMap;
use std::time::{Duration, Instant};

use log::debug;

use crate::error::ScrapeError;

pub mod models;

use models::Config;

/// Return a full URL for a supplied path fragment
///
/// ie: /2015_LE_EECS/ ==> http://fides.ccs.yorku.ca/courseicals/2015_LE_EECS/
pub fn url_from_base(config: &Config, path: &str) -> String {
    let path = path.strip_prefix('/').unwrap_or(path);

    format!("{}{}", config.base_url, path)
}

/// HTTP layer: one client, one response cache
pub struct Fetcher {
    client: reqwest::Client,
    expiry: Duration,
    cache: HashMap<String, (Instant, String)>,
}

impl Fetcher {
    pub fn new(config: &Config) -> Result<Self, ScrapeError> {
        // Use custom User-Agent
        let user_agent = format!("yorkical/{}", env!("CARGO_PKG_VERSION"));
        let client = reqwest::Client::builder().user_agent(user_agent).build()?;

        Ok(Self {
            client,
            expiry: Duration::from_secs(config.cache_expiry),
            cache: HashMap::new(),
        })
    }

    /// Body of `url`, served from the cache while still fresh
    pub async fn text(&mut self, url: &str) -> Result<String, ScrapeError> {
        if let Some((fetched_at, body)) = self.cache.get(url) {
            if fetched_at.elapsed() < self.expiry {
                debug!("Cache hit for {url}");
                return Ok(body.clone());
            }
        }

        let body = self
            .client
            .get(url)
            .timeout(Duration::from_secs(30))
            .send()
            .await?
            .error_for_status()?
            .text()
            .await?;

        if !self.expiry.is_zero() {
            self.cache
                .insert(url.to_owned(), (Instant::now(), body.clone()));
        }

        Ok(body)
    }
}
