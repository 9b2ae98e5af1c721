/// Everything that can go wrong while scraping the calendar tree.
#[derive(Debug, thiserror::Error)]
pub enum ScrapeError {
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("malformed course filename: {0}")]
    MalformedFilename(String),

    #[error("invalid calendar data: {0}")]
    Calendar(String),
}
