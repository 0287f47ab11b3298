//! Calendar construction.
//!
//! Every platform gets one slot per campaign week. Slots are five days
//! apart, and platforms are staggered by their position in the plan modulo
//! five, so a sixth platform lands on the same day as the first.

use chrono::{Days, NaiveDate};
use serde::{Deserialize, Serialize};

use crate::brief::CampaignInput;
use crate::models::PublishStatus;
use crate::plan::CampaignPlan;
use crate::platforms::{self, FALLBACK_FORMAT};

/// Spacing between a platform's consecutive slots.
const DAYS_PER_WEEK_SLOT: i64 = 5;
/// Width of the stagger window across platforms.
const STAGGER_WINDOW: usize = 5;
/// Most events reserved up front; longer calendars grow as they fill.
const MAX_RESERVED_EVENTS: usize = 4096;

/// A single scheduled post.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CalendarEvent {
    /// Publish date, serialized as `YYYY-MM-DD`.
    pub date: NaiveDate,
    pub platform: String,
    pub angle: String,
    pub format: String,
    pub status: PublishStatus,
}

/// Days after the start date for `week` of the platform at `platform_index`.
pub fn publish_offset_days(week: i64, platform_index: usize) -> i64 {
    week.saturating_mul(DAYS_PER_WEEK_SLOT)
        .saturating_add((platform_index % STAGGER_WINDOW) as i64)
}

/// Build the publishing calendar for `plan`.
///
/// Returns `platforms × duration_weeks` events sorted by date. The sort is
/// stable, so events on the same day keep plan order. A non-positive
/// duration yields no events.
pub fn build_calendar(input: &CampaignInput, plan: &CampaignPlan) -> Vec<CalendarEvent> {
    let weeks = input.duration_weeks.max(0);
    let mut events = Vec::with_capacity(reserved_events(plan.platform_plans.len(), weeks));

    for (platform_index, platform_plan) in plan.platform_plans.iter().enumerate() {
        let fallback;
        let idea_loop: &[String] = if platform_plan.content_ideas.is_empty() {
            fallback = [platforms::fallback_idea(&platform_plan.platform)];
            &fallback
        } else {
            &platform_plan.content_ideas
        };
        let config = platforms::lookup(&platform_plan.platform);

        for week in 0..weeks {
            let slot = week as usize;
            let offset = publish_offset_days(week, platform_index);
            let format = match config {
                Some(config) => config.format_at(slot).to_owned(),
                None => FALLBACK_FORMAT.to_owned(),
            };

            events.push(CalendarEvent {
                date: add_days(input.start_date, offset),
                platform: platform_plan.platform.clone(),
                angle: idea_loop[slot % idea_loop.len()].clone(),
                format,
                status: PublishStatus::for_week(week),
            });
        }
    }

    events.sort_by_key(|event| event.date);
    tracing::trace!(events = events.len(), "calendar built");
    events
}

/// Up-front reservation for `platforms × weeks` events, capped at
/// [`MAX_RESERVED_EVENTS`].
fn reserved_events(platforms: usize, weeks: i64) -> usize {
    usize::try_from(weeks.max(0))
        .ok()
        .and_then(|weeks| weeks.checked_mul(platforms))
        .map_or(MAX_RESERVED_EVENTS, |n| n.min(MAX_RESERVED_EVENTS))
}

/// Calendar arithmetic across month and year boundaries. Saturates at the
/// last representable date instead of failing.
fn add_days(start: NaiveDate, days: i64) -> NaiveDate {
    start
        .checked_add_days(Days::new(days.max(0) as u64))
        .unwrap_or(NaiveDate::MAX)
}

/// Display label such as `"Monday, 1 Jan"`.
pub fn format_date_label(date: NaiveDate) -> String {
    date.format("%A, %-d %b").to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::plan::generate_plan;

    fn brief(start: (i32, u32, u32), weeks: i64, platforms: &[&str]) -> CampaignInput {
        let start = NaiveDate::from_ymd_opt(start.0, start.1, start.2).unwrap();
        let mut input = CampaignInput::default_brief(start);
        input.duration_weeks = weeks;
        input.platforms = platforms.iter().map(|p| (*p).to_owned()).collect();
        input
    }

    fn calendar_for(input: &CampaignInput) -> Vec<CalendarEvent> {
        build_calendar(input, &generate_plan(input))
    }

    #[test]
    fn offset_staggers_platforms_within_five_days() {
        assert_eq!(publish_offset_days(0, 0), 0);
        assert_eq!(publish_offset_days(0, 1), 1);
        assert_eq!(publish_offset_days(2, 3), 13);
        // The sixth platform wraps onto the first platform's day.
        assert_eq!(publish_offset_days(1, 5), publish_offset_days(1, 0));
    }

    #[test]
    fn dates_roll_over_months_and_years() {
        let input = brief((2024, 12, 28), 2, &["Instagram", "LinkedIn"]);
        let dates: Vec<String> = calendar_for(&input)
            .iter()
            .map(|e| e.date.to_string())
            .collect();
        assert_eq!(
            dates,
            vec!["2024-12-28", "2024-12-29", "2025-01-02", "2025-01-03"]
        );
    }

    #[test]
    fn leap_day_is_respected() {
        let input = brief((2024, 2, 25), 2, &["Instagram"]);
        let events = calendar_for(&input);
        assert_eq!(events[1].date.to_string(), "2024-03-01");
        let input = brief((2024, 2, 24), 2, &["Instagram"]);
        assert_eq!(calendar_for(&input)[1].date.to_string(), "2024-02-29");
    }

    #[test]
    fn formats_and_angles_cycle_by_week() {
        let input = brief((2024, 1, 1), 4, &["Instagram"]);
        let events = calendar_for(&input);
        let formats: Vec<&str> = events.iter().map(|e| e.format.as_str()).collect();
        assert_eq!(formats, vec!["Reel", "Story", "Carousel", "Reel"]);
        assert_eq!(events[3].angle, events[0].angle);
        assert_ne!(events[1].angle, events[0].angle);
    }

    #[test]
    fn unknown_platform_uses_content_drop_and_fallback_idea() {
        let input = brief((2024, 1, 1), 2, &["Threads"]);
        let events = calendar_for(&input);
        assert_eq!(events.len(), 2);
        for event in &events {
            assert_eq!(event.format, "Content Drop");
            assert_eq!(event.angle, "Threads deep dive on Bharat Life Care experience.");
        }
    }

    #[test]
    fn statuses_follow_week_rule() {
        let input = brief((2024, 1, 1), 5, &["Twitter"]);
        let statuses: Vec<PublishStatus> = calendar_for(&input).iter().map(|e| e.status).collect();
        assert_eq!(
            statuses,
            vec![
                PublishStatus::Draft,
                PublishStatus::Review,
                PublishStatus::Scheduled,
                PublishStatus::Draft,
                PublishStatus::Scheduled,
            ]
        );
    }

    #[test]
    fn non_positive_duration_yields_no_events() {
        assert!(calendar_for(&brief((2024, 1, 1), 0, &["Instagram"])).is_empty());
        assert!(calendar_for(&brief((2024, 1, 1), -4, &["Instagram"])).is_empty());
    }

    #[test]
    fn same_day_events_keep_plan_order() {
        // Platform indexes 0 and 5 share a stagger slot.
        let input = brief(
            (2024, 1, 1),
            1,
            &["Twitter", "LinkedIn", "Facebook", "YouTube", "WhatsApp", "Instagram"],
        );
        let events = calendar_for(&input);
        assert_eq!(events[0].platform, "Twitter");
        assert_eq!(events[1].platform, "Instagram");
        assert_eq!(events[0].date, events[1].date);
    }

    #[test]
    fn reservation_is_capped_for_huge_durations() {
        assert_eq!(reserved_events(1, i64::MAX), MAX_RESERVED_EVENTS);
        assert_eq!(reserved_events(6, i64::MAX), MAX_RESERVED_EVENTS);
        assert_eq!(reserved_events(usize::MAX, 2), MAX_RESERVED_EVENTS);
        assert_eq!(reserved_events(5, 6), 30);
        assert_eq!(reserved_events(3, -1), 0);
        let events: Vec<CalendarEvent> = Vec::with_capacity(reserved_events(1, i64::MAX));
        assert!(events.is_empty());
    }

    #[test]
    fn max_duration_without_platforms_yields_no_events() {
        assert!(calendar_for(&brief((2024, 1, 1), i64::MAX, &[])).is_empty());
    }

    #[test]
    fn offset_saturates_instead_of_overflowing() {
        assert_eq!(publish_offset_days(i64::MAX, 4), i64::MAX);
        assert_eq!(add_days(NaiveDate::MIN, publish_offset_days(i64::MAX, 0)), NaiveDate::MAX);
    }

    #[test]
    fn add_days_saturates() {
        assert_eq!(add_days(NaiveDate::MAX, 3), NaiveDate::MAX);
    }

    #[test]
    fn date_label_uses_weekday_day_month() {
        let date = NaiveDate::from_ymd_opt(2024, 1, 1).unwrap();
        assert_eq!(format_date_label(date), "Monday, 1 Jan");
        let date = NaiveDate::from_ymd_opt(2024, 3, 15).unwrap();
        assert_eq!(format_date_label(date), "Friday, 15 Mar");
    }
}
