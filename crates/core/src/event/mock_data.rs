use super::types::RawRow;

/// Returns a small set of raw rows (header excluded) for running without a
/// configured spreadsheet.
///
/// The rows are deliberately untidy: dates in several layouts, one invalid
/// date, one short row and a multi-organizer entry.
pub fn demo_rows() -> Vec<RawRow> {
    let rows: [&[&str]; 10] = [
        &[
            "2024/01/14 21:03:11",
            "2024-01-13",
            "Lantern Hall Mystery Night",
            "Nazotoki Works",
            "Live",
            "Teamed up with two strangers and solved the final puzzle with a minute left.",
            "The hidden message in the floor tiles.",
            "Who left the third lantern lit?",
        ],
        &[
            "2024/02/03 18:40:52",
            "2024/02/03",
            "The Clockmaker's Study",
            "Room Factory",
            "Room",
            "A cramped study full of gears.",
            "Opening the grandfather clock.",
            "",
        ],
        &[
            "2024/02/20 09:12:05",
            "2024-02-18",
            "Letters from the Lighthouse",
            "Nazotoki Works, Harbor Games",
            "Take-home",
            "Played over two evenings at the kitchen table.",
            "The map that only made sense folded.",
            "The keeper's real name.",
        ],
        &[
            "2024/03/02 10:00:00",
            "2024-03-01",
            "Midnight Express",
            "Harbor Games",
            "Online",
            "Played on a video call with friends abroad.",
            "Timetable cipher.",
            "",
        ],
        &[
            "2024/03/09 22:15:30",
            "sometime in spring",
            "Garden of Whispers",
            "Room Factory",
            "Live",
            "Outdoor walk-around event in the botanical garden.",
            "",
            "",
        ],
        &["2024/03/30 12:00:00", "2024-03-30", "Untitled Pop-up"],
        &[
            "2024/04/21 16:45:09",
            "2024-04-20",
            "The Vanishing Gallery",
            "Museum Puzzle Club",
            "Live",
            "Solved in a real museum after closing time.",
            "Reading the paintings backwards.",
            "Which portrait moved?",
        ],
        &[
            "2024/05/06 08:30:00",
            "2024/5/5",
            "Sky Station Escape",
            "Room Factory",
            "Room",
            "Zero-gravity themed room with a great soundtrack.",
            "The airlock sequence.",
            "",
        ],
        &[
            "2024/06/15 20:20:20",
            "2024-06-15",
            "Archive of Lost Songs",
            "Harbor Games",
            "Online",
            "Audio-only puzzles.",
            "The reversed chorus.",
            "The composer's last note.",
        ],
        &[
            "2024/07/01 11:11:11",
            "2024-06-30",
            "Detective Training Camp",
            "Museum Puzzle Club, Nazotoki Works",
            "Live",
            "A full-day event with several smaller cases.",
            "The fingerprint station.",
            "",
        ],
    ];

    rows.iter()
        .map(|cells| cells.iter().map(|c| c.to_string()).collect())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::event::{normalize_rows, COLUMN_COUNT};

    #[test]
    fn test_demo_rows_fit_the_record_width() {
        let rows = demo_rows();
        assert!(!rows.is_empty());
        assert!(rows.iter().all(|r| r.len() <= COLUMN_COUNT));
    }

    #[test]
    fn test_demo_rows_normalize_without_blanks() {
        let events = normalize_rows(demo_rows());
        assert!(events.iter().all(|e| !e.is_blank()));
    }
}
