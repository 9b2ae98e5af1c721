use chrono::{NaiveDate, NaiveDateTime};
use icalendar::{Calendar, CalendarComponent, Component, Event};

use crate::error::ScrapeError;

pub mod models;

use models::EventData;

/// Schedule of the first VEVENT in document order, if the calendar has one
///
/// Some course calendars carry no event at all (tutorials, online courses),
/// that is not an error.
pub fn first_event(ics: &str) -> Result<Option<EventData>, ScrapeError> {
    let calendar: Calendar = ics
        .parse()
        .map_err(|err| ScrapeError::Calendar(format!("{err}")))?;

    Ok(calendar
        .components
        .iter()
        .find_map(|component| match component {
            CalendarComponent::Event(event) => Some(event),
            _ => None,
        })
        .map(event_data))
}

/// Project the schedule fields out of an event
fn event_data(event: &Event) -> EventData {
    let property = |key: &str| {
        event
            .properties()
            .get(key)
            .map(|prop| prop.value().to_owned())
    };

    EventData {
        summary: event.get_summary().map(ToOwned::to_owned),
        description: event.get_description().map(ToOwned::to_owned),
        location: property("LOCATION"),
        dtstart: event
            .properties()
            .get("DTSTART")
            .and_then(|prop| parse_date_prop(prop.value())),
        dtend: event
            .properties()
            .get("DTEND")
            .and_then(|prop| parse_date_prop(prop.value())),
        rrule: property("RRULE"),
    }
}

/// Parse a date property value, both the date-only and the datetime forms
fn parse_date_prop(value: &str) -> Option<NaiveDateTime> {
    if value.len() == 8 {
        NaiveDate::parse_from_str(value, "%Y%m%d")
            .ok()
            .and_then(|date| date.and_hms_opt(0, 0, 0))
    } else {
        NaiveDateTime::parse_from_str(value.trim_end_matches('Z'), "%Y%m%dT%H%M%S").ok()
    }
}
