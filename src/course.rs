use log::info;
use regex::Regex;

use crate::calendar;
use crate::error::ScrapeError;
use crate::utils::{self, models::Config, Fetcher};

pub mod models;

use models::CourseInfo;

/// Naming grammar of the published course calendar files
const FILENAME_GRAMMAR: &str = concat!(
    r"(?P<year>[0-9]{4})_(?P<faculty>[A-Z]{2})_(?P<department>[A-Z]+)_",
    r"(?P<term>[A-Z]+)_(?P<code>[0-9]{4})__(?P<credits>[0-9]+)_",
    r"(?P<section>[A-Z])_(?P<language>[A-Z]+)_A_(?P<type>[A-Z]+)_",
    r"(?P<version>[0-9]{2})\.ics"
);

pub fn filename_regex() -> Regex {
    Regex::new(FILENAME_GRAMMAR).unwrap()
}

/// Course metadata encoded in a calendar filename
pub fn fields(filename: &str) -> Result<CourseInfo, ScrapeError> {
    let caps = filename_regex()
        .captures(filename)
        .ok_or_else(|| ScrapeError::MalformedFilename(filename.to_owned()))?;

    Ok(CourseInfo {
        year: caps["year"].to_owned(),
        faculty: caps["faculty"].to_owned(),
        department: caps["department"].to_owned(),
        term: caps["term"].to_owned(),
        code: caps["code"].to_owned(),
        credits: caps["credits"].to_owned(),
        section: caps["section"].to_owned(),
        language: caps["language"].to_owned(),
        typee: caps["type"].to_owned(),
        version: caps["version"].to_owned(),
        raw: filename.to_owned(),
        calendar_data: None,
    })
}

/// Build the full course record: filename fields plus the first schedule event
pub async fn extract(
    fetcher: &mut Fetcher,
    config: &Config,
    filename: &str,
) -> Result<CourseInfo, ScrapeError> {
    let mut course = fields(filename)?;

    // The ics file is requested here
    info!("Getting ics {filename}");
    let path = format!(
        "{}_{}_{}/{}",
        course.year, course.faculty, course.department, filename
    );
    let body = fetcher.text(&utils::url_from_base(config, &path)).await?;

    course.calendar_data = calendar::first_event(&body)?;

    Ok(course)
}
