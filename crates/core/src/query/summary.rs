//! Aggregations over an event listing.

use std::collections::{BTreeMap, HashMap, HashSet};

use serde::Serialize;

use crate::event::Event;

/// Per-organization totals.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct OrganizationSummary {
    /// The trimmed `organization` string, joined organizers included as-is.
    pub name: String,
    pub total_events: usize,
    /// Event count per trimmed, non-empty format.
    pub format_counts: BTreeMap<String, usize>,
}

/// Returns the distinct non-empty formats in first-seen order.
pub fn unique_formats(events: &[Event]) -> Vec<String> {
    let mut seen = HashSet::new();
    events
        .iter()
        .map(|e| e.format.as_str())
        .filter(|format| !format.is_empty() && seen.insert(*format))
        .map(str::to_string)
        .collect()
}

/// Groups events by organization, in first-seen order.
///
/// Events without an organization are skipped.
pub fn summarize_organizations(events: &[Event]) -> Vec<OrganizationSummary> {
    let mut positions: HashMap<&str, usize> = HashMap::new();
    let mut summaries: Vec<OrganizationSummary> = Vec::new();

    for event in events {
        let name = event.organization.trim();
        if name.is_empty() {
            continue;
        }

        let position = *positions.entry(name).or_insert_with(|| {
            summaries.push(OrganizationSummary {
                name: name.to_string(),
                total_events: 0,
                format_counts: BTreeMap::new(),
            });
            summaries.len() - 1
        });

        let summary = &mut summaries[position];
        summary.total_events += 1;

        let format = event.format.trim();
        if !format.is_empty() {
            *summary.format_counts.entry(format.to_string()).or_default() += 1;
        }
    }

    summaries
}

#[cfg(test)]
mod tests {
    use super::*;

    fn event(organization: &str, format: &str) -> Event {
        Event {
            organization: organization.to_string(),
            format: format.to_string(),
            ..Default::default()
        }
    }

    #[test]
    fn test_unique_formats_first_seen_order() {
        let events = vec![
            event("a", "Room"),
            event("b", ""),
            event("c", "Live"),
            event("d", "Room"),
            event("e", "Online"),
        ];

        assert_eq!(unique_formats(&events), vec!["Room", "Live", "Online"]);
    }

    #[test]
    fn test_unique_formats_empty() {
        assert!(unique_formats(&[]).is_empty());
    }

    #[test]
    fn test_summarize_counts_events_and_formats() {
        let events = vec![
            event("OrgX", "Live"),
            event("OrgY", "Room"),
            event("OrgX", "Live"),
            event("OrgX", "Online"),
            event("OrgX", ""),
        ];

        let summaries = summarize_organizations(&events);

        assert_eq!(summaries.len(), 2);
        assert_eq!(summaries[0].name, "OrgX");
        assert_eq!(summaries[0].total_events, 4);
        assert_eq!(summaries[0].format_counts.get("Live"), Some(&2));
        assert_eq!(summaries[0].format_counts.get("Online"), Some(&1));
        assert_eq!(summaries[0].format_counts.len(), 2);
        assert_eq!(summaries[1].name, "OrgY");
        assert_eq!(summaries[1].total_events, 1);
    }

    #[test]
    fn test_summarize_trims_and_skips_empty() {
        let events = vec![
            event("  OrgX ", " Live "),
            event("OrgX", "Live"),
            event("   ", "Room"),
            event("", "Room"),
        ];

        let summaries = summarize_organizations(&events);

        assert_eq!(summaries.len(), 1);
        assert_eq!(summaries[0].name, "OrgX");
        assert_eq!(summaries[0].total_events, 2);
        assert_eq!(summaries[0].format_counts.get("Live"), Some(&2));
    }

    #[test]
    fn test_summarize_keeps_joined_organizers_together() {
        let events = vec![event("OrgX, OrgY", "Live"), event("OrgX", "Live")];

        let names: Vec<String> = summarize_organizations(&events)
            .into_iter()
            .map(|s| s.name)
            .collect();

        assert_eq!(names, vec!["OrgX, OrgY", "OrgX"]);
    }

    #[test]
    fn test_summary_serializes_with_camel_case_keys() {
        let summaries = summarize_organizations(&[event("OrgX", "Live")]);
        let json = serde_json::to_value(&summaries[0]).unwrap();

        assert_eq!(json["name"], "OrgX");
        assert_eq!(json["totalEvents"], 1);
        assert_eq!(json["formatCounts"]["Live"], 1);
    }
}
