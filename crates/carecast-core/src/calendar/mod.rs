//! Publishing calendar: per-platform weekly slots and week grouping.

pub mod buckets;
pub mod build;

pub use buckets::{WeekBucket, bucket_events_by_week, week_label};
pub use build::{CalendarEvent, build_calendar, format_date_label, publish_offset_days};
