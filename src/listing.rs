use log::info;
use regex::Regex;
use scraper::{Html, Selector};

use crate::course;
use crate::error::ScrapeError;
use crate::utils::{self, models::Config, Fetcher};

/// Anchor texts of a directory listing matching `pattern`, in document order
pub async fn links(
    fetcher: &mut Fetcher,
    url: &str,
    pattern: &Regex,
) -> Result<Vec<String>, ScrapeError> {
    let html = fetcher.text(url).await?;
    let document = Html::parse_document(&html);

    // Selectors
    let sel_a = Selector::parse("a").unwrap();

    Ok(document
        .select(&sel_a)
        .map(|element| element.text().collect::<String>())
        .filter(|text| pattern.is_match(text))
        .collect())
}

/// Get all subject folders published for the target year
pub async fn subjects(fetcher: &mut Fetcher, config: &Config) -> Result<Vec<String>, ScrapeError> {
    info!("Getting {}", config.target_year);

    let pattern = Regex::new(&format!(r"{}_[A-Z]{{2}}_[A-Z]+/", config.target_year)).unwrap();

    links(fetcher, &config.base_url, &pattern).await
}

/// Get all course calendar files found inside the supplied subject folder
pub async fn course_files(
    fetcher: &mut Fetcher,
    config: &Config,
    folder: &str,
) -> Result<Vec<String>, ScrapeError> {
    info!("Getting folder {folder}");

    let url = utils::url_from_base(config, folder);

    links(fetcher, &url, &course::filename_regex()).await
}
