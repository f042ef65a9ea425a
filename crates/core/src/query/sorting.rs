use std::borrow::Borrow;
use std::cmp::Reverse;

use chrono::{DateTime, NaiveDate, NaiveDateTime};

use crate::event::Event;

/// Date-time layouts accepted for `participation_date`, tried in order.
const DATE_TIME_FORMATS: &[&str] = &[
    "%Y-%m-%dT%H:%M:%S",
    "%Y-%m-%d %H:%M:%S",
    "%Y/%m/%d %H:%M:%S",
    "%Y-%m-%d %H:%M",
    "%Y/%m/%d %H:%M",
];

/// Date-only layouts accepted for `participation_date`, tried in order.
const DATE_FORMATS: &[&str] = &["%Y-%m-%d", "%Y/%m/%d", "%Y.%m.%d", "%Y年%m月%d日"];

/// Parses a participation date as written in the spreadsheet.
///
/// Accepts RFC 3339 timestamps and the common spreadsheet layouts with `-`,
/// `/` or `.` separators, with or without a time of day. Date-only values
/// resolve to midnight. Returns `None` for anything else.
pub fn parse_participation_date(value: &str) -> Option<NaiveDateTime> {
    let value = value.trim();
    if value.is_empty() {
        return None;
    }

    if let Ok(parsed) = DateTime::parse_from_rfc3339(value) {
        return Some(parsed.naive_utc());
    }

    DATE_TIME_FORMATS
        .iter()
        .find_map(|format| NaiveDateTime::parse_from_str(value, format).ok())
        .or_else(|| {
            DATE_FORMATS
                .iter()
                .find_map(|format| NaiveDate::parse_from_str(value, format).ok())
                .and_then(|date| date.and_hms_opt(0, 0, 0))
        })
}

/// Sorts events by participation date, most recent first.
///
/// Events whose date does not parse go after every dated event. The sort is
/// stable, so equal dates and undated events keep their input order.
pub fn sort_by_date_descending<E: Borrow<Event>>(events: &mut [E]) {
    events.sort_by_cached_key(|event| {
        let date = parse_participation_date(&event.borrow().participation_date);
        (date.is_none(), date.map(Reverse))
    });
}

#[cfg(test)]
mod tests {
    use super::*;

    fn event(index: usize, title: &str, date: &str) -> Event {
        Event {
            title: title.to_string(),
            participation_date: date.to_string(),
            original_index: index,
            ..Default::default()
        }
    }

    fn titles<E: Borrow<Event>>(events: &[E]) -> Vec<&str> {
        events.iter().map(|e| e.borrow().title.as_str()).collect()
    }

    fn make_date(year: i32, month: u32, day: u32) -> NaiveDateTime {
        NaiveDate::from_ymd_opt(year, month, day)
            .unwrap()
            .and_hms_opt(0, 0, 0)
            .unwrap()
    }

    #[test]
    fn test_parse_date_only_layouts() {
        let expected = make_date(2024, 3, 1);
        assert_eq!(parse_participation_date("2024-03-01"), Some(expected));
        assert_eq!(parse_participation_date("2024/03/01"), Some(expected));
        assert_eq!(parse_participation_date("2024/3/1"), Some(expected));
        assert_eq!(parse_participation_date("2024.03.01"), Some(expected));
        assert_eq!(parse_participation_date("2024年3月1日"), Some(expected));
        assert_eq!(parse_participation_date("  2024-03-01 "), Some(expected));
    }

    #[test]
    fn test_parse_date_time_layouts() {
        let expected = NaiveDate::from_ymd_opt(2024, 3, 1)
            .unwrap()
            .and_hms_opt(18, 30, 0)
            .unwrap();
        assert_eq!(
            parse_participation_date("2024/03/01 18:30:00"),
            Some(expected)
        );
        assert_eq!(parse_participation_date("2024-03-01 18:30"), Some(expected));
        assert_eq!(
            parse_participation_date("2024-03-01T18:30:00Z"),
            Some(expected)
        );
    }

    #[test]
    fn test_parse_invalid_dates() {
        assert_eq!(parse_participation_date(""), None);
        assert_eq!(parse_participation_date("invalid-date"), None);
        assert_eq!(parse_participation_date("sometime in spring"), None);
        assert_eq!(parse_participation_date("2024-02-30"), None);
    }

    #[test]
    fn test_sort_valid_dates_descending() {
        let mut events = vec![
            event(0, "Oldest", "2023-12-31"),
            event(1, "Newest", "2024-06-01"),
            event(2, "Middle", "2024/03/15"),
        ];

        sort_by_date_descending(&mut events);

        assert_eq!(titles(&events), vec!["Newest", "Middle", "Oldest"]);
    }

    #[test]
    fn test_sort_places_invalid_dates_last() {
        let mut events = vec![
            event(0, "Title A", "2024-03-01"),
            event(1, "Title B", "invalid-date"),
        ];

        sort_by_date_descending(&mut events);

        assert_eq!(titles(&events), vec!["Title A", "Title B"]);
        assert_eq!(events[0].original_index, 0);
        assert_eq!(events[1].original_index, 1);
    }

    #[test]
    fn test_sort_invalid_first_in_input_still_goes_last() {
        let mut events = vec![
            event(0, "Undated", ""),
            event(1, "Dated", "2020-01-01"),
        ];

        sort_by_date_descending(&mut events);

        assert_eq!(titles(&events), vec!["Dated", "Undated"]);
    }

    #[test]
    fn test_sort_is_stable_for_ties_and_invalid_dates() {
        let mut events = vec![
            event(0, "Bad 1", "???"),
            event(1, "Same A", "2024-01-01"),
            event(2, "Bad 2", ""),
            event(3, "Same B", "2024/01/01"),
            event(4, "Bad 3", "tomorrow"),
        ];

        sort_by_date_descending(&mut events);

        assert_eq!(
            titles(&events),
            vec!["Same A", "Same B", "Bad 1", "Bad 2", "Bad 3"]
        );
    }

    #[test]
    fn test_sort_references() {
        let owned = vec![
            event(0, "Old", "2020-01-01"),
            event(1, "New", "2022-01-01"),
        ];
        let mut refs: Vec<&Event> = owned.iter().collect();

        sort_by_date_descending(&mut refs);

        assert_eq!(titles(&refs), vec!["New", "Old"]);
    }

    #[test]
    fn test_sort_does_not_touch_identity() {
        let mut events = vec![
            event(0, "a", "2020-01-01"),
            event(1, "b", "2021-01-01"),
            event(2, "c", "2022-01-01"),
        ];

        sort_by_date_descending(&mut events);

        let indices: Vec<usize> = events.iter().map(|e| e.original_index).collect();
        assert_eq!(indices, vec![2, 1, 0]);
    }

    #[test]
    fn test_sorting_sorted_input_is_a_no_op() {
        let mut events = vec![
            event(0, "a", "2022-01-01"),
            event(1, "b", "nope"),
            event(2, "c", "2021-01-01"),
            event(3, "d", "2021-01-01"),
        ];
        sort_by_date_descending(&mut events);
        let once = events.clone();

        sort_by_date_descending(&mut events);

        assert_eq!(events, once);
    }
}
