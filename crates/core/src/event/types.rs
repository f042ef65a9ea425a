use serde::{Deserialize, Serialize};

/// A raw spreadsheet row: ordered cell strings, possibly shorter than a full record.
pub type RawRow = Vec<String>;

/// A single entry of the event log.
///
/// All text fields are kept exactly as the source supplied them. The only
/// field with structure is `original_index`, the record identity.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Event {
    /// Record creation time as written by the source. Displayed verbatim.
    pub timestamp: String,
    /// Day of participation. Only parsed when sorting.
    pub participation_date: String,
    pub title: String,
    /// Organizer, or several organizers joined with commas.
    pub organization: String,
    pub format: String,
    pub story: String,
    pub memorable_things: String,
    pub final_mystery: String,
    /// Zero-based position in the raw, unsorted source rows.
    pub original_index: usize,
}

impl Event {
    /// Returns true when every text field is empty.
    pub fn is_blank(&self) -> bool {
        [
            &self.timestamp,
            &self.participation_date,
            &self.title,
            &self.organization,
            &self.format,
            &self.story,
            &self.memorable_things,
            &self.final_mystery,
        ]
        .iter()
        .all(|field| field.is_empty())
    }
}
