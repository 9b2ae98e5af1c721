use chrono::NaiveDateTime;

/// Schedule fields of a single calendar event
#[derive(Clone, Debug)]
pub struct EventData {
    /// Event title, e.g. "EECS 4000 6.00 LECT"
    pub summary: Option<String>,

    pub description: Option<String>,

    /// Room and building
    pub location: Option<String>,

    /// Start of the first occurrence, as published (no timezone conversion)
    pub dtstart: Option<NaiveDateTime>,

    /// End of the first occurrence
    pub dtend: Option<NaiveDateTime>,

    /// Raw recurrence rule, e.g. "FREQ=WEEKLY;UNTIL=..."
    pub rrule: Option<String>,
}
