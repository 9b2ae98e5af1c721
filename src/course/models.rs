use crate::calendar::models::EventData;

/// One course section, as encoded in its calendar filename
#[derive(Clone, Debug)]
pub struct CourseInfo {
    pub year: String,

    /// Faculty letter code, e.g. LE for Lassonde
    pub faculty: String,

    pub department: String,

    /// Term the section runs in (F, W, FW, SU)
    pub term: String,

    /// Four digit course number
    pub code: String,

    pub credits: String,

    pub section: String,

    /// Language of instruction
    pub language: String,

    /// Type of the meeting (LECT, TUTR, LAB, ONLN)
    pub typee: String,

    pub version: String,

    /// Original filename
    pub raw: String,

    /// First scheduled event of the section
    /// Missing for sections without a weekly slot (tutorials, online courses)
    pub calendar_data: Option<EventData>,
}
