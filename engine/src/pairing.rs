//! Fast-start / fast-end pairing walks
//!
//! A well-formed history alternates start, end, start, end... Real
//! histories occasionally contain two starts or two ends in a row. The two
//! walks here differ only in how they treat a run of consecutive starts:
//!
//! - [`adjacent_intervals`] pairs an end with the start directly before it and
//!   ignores anything else.
//! - [`spanning_intervals`] pairs the *first* start of a run with the next end,
//!   so a fast whose start was tapped twice still spans its full length.
//!
//! [`completed_fasts_newest_first`] is the backwards walk the legacy streak and
//! the completion rate share.

use crate::models::FastingEvent;

/// One interpretable fast: indices into the sorted slice plus its length
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FastInterval {
    pub start_index: usize,
    pub end_index: usize,
    pub minutes: i64,
}

/// Sort events oldest first without cloning them
pub fn sort_chronologically(events: &[FastingEvent]) -> Vec<&FastingEvent> {
    let mut sorted: Vec<&FastingEvent> = events.iter().collect();
    sorted.sort_by_key(|e| e.timestamp);
    sorted
}

/// Whole minutes between two events, truncated toward zero
pub fn minutes_between(start: &FastingEvent, end: &FastingEvent) -> i64 {
    end.timestamp
        .signed_duration_since(start.timestamp)
        .num_minutes()
}

/// Every start immediately followed by an end
pub fn adjacent_intervals(sorted: &[&FastingEvent]) -> Vec<FastInterval> {
    sorted
        .windows(2)
        .enumerate()
        .filter(|(_, pair)| pair[0].is_fast_start && pair[1].is_fast_end())
        .map(|(i, pair)| FastInterval {
            start_index: i,
            end_index: i + 1,
            minutes: minutes_between(pair[0], pair[1]),
        })
        .collect()
}

/// From each start, skip consecutive starts to the next end
///
/// The walk resumes after the end it found. A trailing start with no end
/// (a fast still in progress) yields nothing.
pub fn spanning_intervals(sorted: &[&FastingEvent]) -> Vec<FastInterval> {
    let mut intervals = Vec::new();
    let mut i = 0;

    while i + 1 < sorted.len() {
        if !sorted[i].is_fast_start {
            i += 1;
            continue;
        }

        let mut j = i + 1;
        while j < sorted.len() && sorted[j].is_fast_start {
            j += 1;
        }

        if j == sorted.len() {
            break;
        }

        intervals.push(FastInterval {
            start_index: i,
            end_index: j,
            minutes: minutes_between(sorted[i], sorted[j]),
        });
        i = j + 1;
    }

    intervals
}

/// Lengths in minutes of completed fasts, walking back from the newest event
///
/// A fast in progress (newest event is a start) is skipped. Two events with
/// the same state in a row step the walk by one; a start directly newer than
/// an end steps it by two without yielding anything.
pub fn completed_fasts_newest_first(events: &[FastingEvent]) -> Vec<i64> {
    let mut newest_first: Vec<&FastingEvent> = events.iter().collect();
    newest_first.sort_by(|a, b| b.timestamp.cmp(&a.timestamp));

    let Some(latest) = newest_first.first() else {
        return Vec::new();
    };

    let mut fasts = Vec::new();
    let mut index = usize::from(latest.is_fast_start);

    while index + 1 < newest_first.len() {
        let current = newest_first[index];
        let older = newest_first[index + 1];

        if current.is_fast_start == older.is_fast_start {
            index += 1;
            continue;
        }

        if current.is_fast_end() {
            fasts.push(minutes_between(older, current));
        }
        index += 2;
    }

    fasts
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{NaiveDate, NaiveDateTime};

    fn at(day: u32, hour: u32) -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2024, 1, day)
            .unwrap()
            .and_hms_opt(hour, 0, 0)
            .unwrap()
    }

    #[test]
    fn test_sort_chronologically() {
        let events = vec![
            FastingEvent::fast_end(at(2, 12)),
            FastingEvent::fast_start(at(1, 20)),
        ];
        let sorted = sort_chronologically(&events);
        assert!(sorted[0].is_fast_start);
        assert!(sorted[1].is_fast_end());
    }

    #[test]
    fn test_adjacent_well_formed() {
        let events = vec![
            FastingEvent::fast_start(at(1, 20)),
            FastingEvent::fast_end(at(2, 14)),
            FastingEvent::fast_start(at(2, 20)),
            FastingEvent::fast_end(at(3, 12)),
        ];
        let sorted = sort_chronologically(&events);
        let intervals = adjacent_intervals(&sorted);

        assert_eq!(intervals.len(), 2);
        assert_eq!(intervals[0].minutes, 18 * 60);
        assert_eq!(intervals[1].minutes, 16 * 60);
        assert_eq!(intervals[1].end_index, 3);
    }

    #[test]
    fn test_adjacent_pairs_latest_start_of_a_run() {
        let events = vec![
            FastingEvent::fast_start(at(1, 8)),
            FastingEvent::fast_start(at(1, 20)),
            FastingEvent::fast_end(at(2, 14)),
            FastingEvent::fast_end(at(2, 16)),
        ];
        let sorted = sort_chronologically(&events);
        let intervals = adjacent_intervals(&sorted);

        assert_eq!(intervals.len(), 1);
        assert_eq!(intervals[0].start_index, 1);
        assert_eq!(intervals[0].minutes, 18 * 60);
    }

    #[test]
    fn test_spanning_pairs_first_start_of_a_run() {
        let events = vec![
            FastingEvent::fast_start(at(1, 8)),
            FastingEvent::fast_start(at(1, 20)),
            FastingEvent::fast_end(at(2, 14)),
        ];
        let sorted = sort_chronologically(&events);
        let intervals = spanning_intervals(&sorted);

        assert_eq!(intervals.len(), 1);
        assert_eq!(intervals[0].start_index, 0);
        assert_eq!(intervals[0].end_index, 2);
        assert_eq!(intervals[0].minutes, 30 * 60);
    }

    #[test]
    fn test_spanning_ignores_open_fast_and_leading_end() {
        let events = vec![
            FastingEvent::fast_end(at(1, 6)),
            FastingEvent::fast_start(at(1, 20)),
            FastingEvent::fast_end(at(2, 14)),
            FastingEvent::fast_start(at(2, 20)),
        ];
        let sorted = sort_chronologically(&events);
        let intervals = spanning_intervals(&sorted);

        assert_eq!(intervals.len(), 1);
        assert_eq!(intervals[0].start_index, 1);
    }

    #[test]
    fn test_completed_fasts_skip_current_fast() {
        let events = vec![
            FastingEvent::fast_start(at(1, 20)),
            FastingEvent::fast_end(at(2, 14)),
            FastingEvent::fast_start(at(2, 20)),
            FastingEvent::fast_end(at(3, 12)),
            FastingEvent::fast_start(at(3, 20)),
        ];
        assert_eq!(completed_fasts_newest_first(&events), vec![16 * 60, 18 * 60]);
    }

    #[test]
    fn test_completed_fasts_step_over_duplicates() {
        let events = vec![
            FastingEvent::fast_start(at(1, 8)),
            FastingEvent::fast_start(at(1, 20)),
            FastingEvent::fast_end(at(2, 14)),
            FastingEvent::fast_end(at(2, 16)),
        ];
        // newest first: end 16, end 14, start 20, start 8
        assert_eq!(completed_fasts_newest_first(&events), vec![18 * 60]);
        assert!(completed_fasts_newest_first(&[]).is_empty());
    }

    #[test]
    fn test_empty_and_single() {
        assert!(adjacent_intervals(&[]).is_empty());
        assert!(spanning_intervals(&[]).is_empty());

        let events = vec![FastingEvent::fast_start(at(1, 20))];
        let sorted = sort_chronologically(&events);
        assert!(adjacent_intervals(&sorted).is_empty());
        assert!(spanning_intervals(&sorted).is_empty());
    }
}
