//! Week grouping for display.
//!
//! The key is the 7-day chunk of the month the event falls in
//! (`ceil(day_of_month / 7)`), not the campaign week, so keys restart every
//! month and a six-week campaign can show "Week 1" twice in a row of events.

use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};

use super::build::CalendarEvent;

/// Events sharing a week label, in input order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WeekBucket {
    /// e.g. `"Week 3"`.
    pub label: String,
    pub events: Vec<CalendarEvent>,
}

/// Label of the month chunk containing `date`.
pub fn week_label(date: NaiveDate) -> String {
    format!("Week {}", date.day().div_ceil(7))
}

/// Group events by [`week_label`].
///
/// Buckets appear in the order their label is first seen; events keep their
/// relative order. Events from different months that share a label land in
/// the same bucket.
pub fn bucket_events_by_week(events: &[CalendarEvent]) -> Vec<WeekBucket> {
    let mut buckets: Vec<WeekBucket> = Vec::new();
    for event in events {
        let label = week_label(event.date);
        match buckets.iter_mut().find(|b| b.label == label) {
            Some(bucket) => bucket.events.push(event.clone()),
            None => buckets.push(WeekBucket {
                label,
                events: vec![event.clone()],
            }),
        }
    }
    buckets
}
