use serde::Deserialize;

use crate::event::Event;

use super::sorting::sort_by_date_descending;

/// Optional constraints applied to an event listing.
///
/// Every present constraint must hold (logical AND). An absent or empty value
/// places no constraint on its dimension.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EventFilter {
    /// Exact match against `format`.
    pub format: Option<String>,
    /// Exact match against the whole `organization` string.
    pub organization: Option<String>,
    /// Case-insensitive substring of `title` or `organization`.
    pub search_text: Option<String>,
    /// Case-insensitive substring of `story`, `memorable_things` or `final_mystery`.
    pub content_search: Option<String>,
}

impl EventFilter {
    /// Returns true if the event satisfies every active constraint.
    pub fn matches(&self, event: &Event) -> bool {
        if let Some(format) = active(&self.format) {
            if event.format != format {
                return false;
            }
        }

        if let Some(organization) = active(&self.organization) {
            if event.organization != organization {
                return false;
            }
        }

        if let Some(text) = active(&self.search_text) {
            let needle = text.to_lowercase();
            if !contains_ignore_case(&event.title, &needle)
                && !contains_ignore_case(&event.organization, &needle)
            {
                return false;
            }
        }

        if let Some(text) = active(&self.content_search) {
            let needle = text.to_lowercase();
            if !contains_ignore_case(&event.story, &needle)
                && !contains_ignore_case(&event.memorable_things, &needle)
                && !contains_ignore_case(&event.final_mystery, &needle)
            {
                return false;
            }
        }

        true
    }
}

fn active(value: &Option<String>) -> Option<&str> {
    value.as_deref().filter(|v| !v.is_empty())
}

/// `needle` must already be lowercase.
fn contains_ignore_case(haystack: &str, needle: &str) -> bool {
    haystack.to_lowercase().contains(needle)
}

/// Returns the events matching `filter`, most recent participation first.
///
/// Survivors keep their relative input order; the date sort is re-applied so
/// the result is ordered even when the input was not.
pub fn filter_events<'a>(events: &'a [Event], filter: &EventFilter) -> Vec<&'a Event> {
    let mut matched: Vec<&Event> = events.iter().filter(|e| filter.matches(e)).collect();
    sort_by_date_descending(&mut matched);
    matched
}
