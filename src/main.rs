use clap::Parser;
use log::warn;

mod calendar;
mod course;
mod error;
mod listing;
mod utils;

use course::models::CourseInfo;
use error::ScrapeError;
use utils::{models::Config, Fetcher};

#[derive(Parser)]
#[clap(version, about, long_about = None)]
struct Args {
    /// The academic year to crawl, i.e.: 2015
    #[clap(value_parser)]
    year: i32,

    /// Root of the published course calendar tree
    #[clap(short, long, value_name = "URL", default_value = utils::models::DEFAULT_BASE_URL)]
    base_url: String,

    /// Seconds a fetched response stays cached, 0 disables the cache
    #[clap(short, long, value_name = "SECONDS", default_value_t = 3600)]
    cache_expiry: u64,
}

#[tokio::main]
async fn main() -> Result<(), ScrapeError> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"))
        .target(env_logger::Target::Stdout)
        .init();

    let args = Args::parse();
    let config = Config {
        target_year: args.year,
        base_url: args.base_url,
        cache_expiry: args.cache_expiry,
    };

    println!("Crawling course calendars for {}...", config.target_year);
    let courses = run(&config).await?;

    println!("{courses:#?}");

    Ok(())
}

/// Crawl every subject folder of the target year and collect its courses
///
/// A course that fails to extract is logged and skipped, same for a folder
/// whose listing cannot be fetched. Only the subject listing itself is fatal.
async fn run(config: &Config) -> Result<Vec<CourseInfo>, ScrapeError> {
    let mut fetcher = Fetcher::new(config)?;

    let subjects = listing::subjects(&mut fetcher, config).await?;

    let mut courses = Vec::new();
    for folder in &subjects {
        let files = match listing::course_files(&mut fetcher, config, folder).await {
            Ok(files) => files,
            Err(err) => {
                warn!("Skipping folder {folder}: {err}");
                continue;
            }
        };

        for file in files {
            match course::extract(&mut fetcher, config, &file).await {
                Ok(course) => courses.push(course),
                Err(err) => warn!("Skipping {file}: {err}"),
            }
        }
    }

    Ok(courses)
}

#[cfg(test)]
mod tests {
    use super::*;
    use mockito::Server;

    const SCHEDULED: &str = "2015_LE_EECS_FW_4000__6_A_EN_A_LEC_01.ics";
    const UNSCHEDULED: &str = "2015_LE_EECS_FW_4080__6_C_EN_A_ONLN_01.ics";
    const MISSING: &str = "2015_LE_EECS_FW_2030__3_B_EN_A_LEC_02.ics";

    const ROOT: &str = concat!(
        "<html><body><pre>",
        r#"<a href="../">Parent Directory</a>"#,
        r#"<a href="2015_LE_EECS/">2015_LE_EECS/</a>"#,
        r#"<a href="README">README</a>"#,
        "</pre></body></html>"
    );

    const EVENT_ICS: &str = "BEGIN:VCALENDAR
VERSION:2.0
BEGIN:VEVENT
UID:2015-LE-EECS-FW-4000-A
SUMMARY:EECS 4000 6.00 LECT
DTSTART;TZID=America/Toronto:20150908T143000
END:VEVENT
END:VCALENDAR";

    const EMPTY_ICS: &str = "BEGIN:VCALENDAR
VERSION:2.0
END:VCALENDAR";

    fn folder_listing() -> String {
        format!(
            concat!(
                r#"<a href="{s}">{s}</a>"#,
                r#"<a href="{m}">{m}</a>"#,
                r#"<a href="{u}">{u}</a>"#,
            ),
            s = SCHEDULED,
            m = MISSING,
            u = UNSCHEDULED
        )
    }

    #[tokio::test]
    async fn run_collects_every_course_and_skips_broken_ones() {
        let mut server = Server::new_async().await;

        let _root = server.mock("GET", "/").with_body(ROOT).create_async().await;
        let _folder = server
            .mock("GET", "/2015_LE_EECS/")
            .with_body(folder_listing())
            .create_async()
            .await;
        let _scheduled = server
            .mock("GET", format!("/2015_LE_EECS/{SCHEDULED}").as_str())
            .with_body(EVENT_ICS)
            .create_async()
            .await;
        let _unscheduled = server
            .mock("GET", format!("/2015_LE_EECS/{UNSCHEDULED}").as_str())
            .with_body(EMPTY_ICS)
            .create_async()
            .await;
        let _missing = server
            .mock("GET", format!("/2015_LE_EECS/{MISSING}").as_str())
            .with_status(404)
            .create_async()
            .await;

        let config = Config {
            target_year: 2015,
            base_url: format!("{}/", server.url()),
            cache_expiry: 3600,
        };

        let courses = run(&config).await.unwrap();

        // The 404 course is skipped, the other two survive in traversal order
        assert_eq!(courses.len(), 2);
        assert_eq!(courses[0].raw, SCHEDULED);
        assert_eq!(
            courses[0]
                .calendar_data
                .as_ref()
                .unwrap()
                .summary
                .as_deref(),
            Some("EECS 4000 6.00 LECT")
        );
        assert_eq!(courses[1].code, "4080");
        assert!(courses[1].calendar_data.is_none());
    }

    #[tokio::test]
    async fn empty_tree_yields_an_empty_run() {
        let mut server = Server::new_async().await;
        let _root = server
            .mock("GET", "/")
            .with_body("<html><body>No folders yet</body></html>")
            .create_async()
            .await;

        let config = Config {
            target_year: 2015,
            base_url: format!("{}/", server.url()),
            cache_expiry: 0,
        };

        assert!(run(&config).await.unwrap().is_empty());
    }
}
