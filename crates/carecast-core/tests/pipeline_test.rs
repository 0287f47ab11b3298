//! End-to-end tests for the brief → plan → calendar → buckets pipeline.
//!
//! Covers the structural guarantees (counts, ordering, fallbacks) across a
//! matrix of briefs, plus the concrete Founders/Instagram scenarios.

use carecast_core::calendar::{bucket_events_by_week, build_calendar, week_label};
use carecast_core::models::PublishStatus;
use carecast_core::plan::{assemble, generate_plan};
use carecast_core::platforms::{
    self, FALLBACK_CADENCE, FALLBACK_CALL_TO_ACTION, FALLBACK_POSITIONING,
};
use carecast_test_utils::{brief_matrix, brief_with, founders_brief};

// -----------------------------------------------------------------------
// Structural guarantees
// -----------------------------------------------------------------------

#[test]
fn calendar_has_one_event_per_platform_per_week() {
    for input in brief_matrix() {
        let plan = generate_plan(&input);
        let events = build_calendar(&input, &plan);
        let expected = input.platforms.len() * input.duration_weeks.max(0) as usize;
        assert_eq!(
            events.len(),
            expected,
            "wrong event count for {:?} over {} weeks",
            input.platforms,
            input.duration_weeks
        );
    }
}

#[test]
fn calendar_is_sorted_by_date() {
    for input in brief_matrix() {
        let events = build_calendar(&input, &generate_plan(&input));
        assert!(
            events.windows(2).all(|w| w[0].date <= w[1].date),
            "calendar out of order for {:?}",
            input.platforms
        );
        let as_strings: Vec<String> = events.iter().map(|e| e.date.to_string()).collect();
        let mut sorted = as_strings.clone();
        sorted.sort();
        assert_eq!(as_strings, sorted, "ISO strings should sort the same way");
    }
}

#[test]
fn platform_plans_mirror_brief_order() {
    for input in brief_matrix() {
        let plan = generate_plan(&input);
        let names: Vec<&str> = plan
            .platform_plans
            .iter()
            .map(|p| p.platform.as_str())
            .collect();
        let requested: Vec<&str> = input.platforms.iter().map(String::as_str).collect();
        assert_eq!(names, requested);
    }
}

#[test]
fn known_platforms_get_one_idea_per_angle() {
    let all: Vec<&str> = platforms::platform_names();
    let plan = generate_plan(&brief_with(6, &all));
    for platform_plan in &plan.platform_plans {
        let config = platforms::lookup(&platform_plan.platform).unwrap();
        assert_eq!(platform_plan.content_ideas.len(), config.focus_angles.len());
        assert_eq!(platform_plan.cadence, config.cadence);
        assert_eq!(platform_plan.call_to_action, config.call_to_action);
    }
}

#[test]
fn unknown_platforms_get_fallback_copy() {
    let plan = generate_plan(&brief_with(6, &["Threads"]));
    let threads = &plan.platform_plans[0];
    assert!(threads.content_ideas.is_empty());
    assert_eq!(threads.cadence, FALLBACK_CADENCE);
    assert_eq!(threads.positioning, FALLBACK_POSITIONING);
    assert_eq!(threads.call_to_action, FALLBACK_CALL_TO_ACTION);
}

#[test]
fn content_pillars_have_no_duplicates() {
    for input in brief_matrix() {
        let plan = generate_plan(&input);
        let mut pillars = plan.content_pillars.clone();
        pillars.sort();
        pillars.dedup();
        assert_eq!(pillars.len(), plan.content_pillars.len());
    }
}

#[test]
fn zero_weeks_means_empty_calendar() {
    let input = brief_with(0, &["Instagram", "LinkedIn", "Facebook"]);
    let bundle = assemble(&input);
    assert!(bundle.calendar.is_empty());
    assert!(bundle.week_buckets.is_empty());
    assert_eq!(bundle.plan.platform_plans.len(), 3);
}

#[test]
fn buckets_partition_the_calendar() {
    for input in brief_matrix() {
        let bundle = assemble(&input);
        let bucketed: usize = bundle.week_buckets.iter().map(|b| b.events.len()).sum();
        assert_eq!(bucketed, bundle.calendar.len());
        for bucket in &bundle.week_buckets {
            assert!(bucket.events.iter().all(|e| week_label(e.date) == bucket.label));
        }
    }
}

#[test]
fn assemble_is_deterministic() {
    for input in brief_matrix() {
        assert_eq!(assemble(&input), assemble(&input));
    }
}

// -----------------------------------------------------------------------
// Concrete scenarios
// -----------------------------------------------------------------------

#[test]
fn founders_single_week_instagram() {
    let input = founders_brief();
    let events = build_calendar(&input, &generate_plan(&input));
    assert_eq!(events.len(), 1);
    let event = &events[0];
    assert_eq!(event.platform, "Instagram");
    assert_eq!(event.status, PublishStatus::Draft);
    assert_eq!(event.date.to_string(), "2024-01-01");
    assert_eq!(event.format, "Reel");
}

#[test]
fn founders_two_weeks_two_platforms() {
    let mut input = founders_brief();
    input.platforms = vec!["Instagram".to_owned(), "LinkedIn".to_owned()];
    input.duration_weeks = 2;
    let events = build_calendar(&input, &generate_plan(&input));
    assert_eq!(events.len(), 4);

    let linkedin_first = events
        .iter()
        .find(|e| e.platform == "LinkedIn")
        .expect("LinkedIn should be scheduled");
    assert_eq!(linkedin_first.date.to_string(), "2024-01-02");
    assert_eq!(linkedin_first.status, PublishStatus::Draft);
    assert_eq!(linkedin_first.format, "Thought leadership post");

    let dates: Vec<String> = events.iter().map(|e| e.date.to_string()).collect();
    assert_eq!(
        dates,
        vec!["2024-01-01", "2024-01-02", "2024-01-06", "2024-01-07"]
    );
    assert_eq!(events[2].status, PublishStatus::Review);
}

#[test]
fn founders_plan_text() {
    let plan = generate_plan(&founders_brief());
    assert_eq!(
        plan.strategy_summary,
        "Deliver grow leads • Land Bharat Life Care as the default preventive partner for founders \
         • Bake plan a into every CTA with y storytelling"
    );
    assert_eq!(plan.content_pillars[0], "Lifestyle design for founders");
    assert_eq!(
        plan.content_pillars[4],
        "Micro-rituals that prime audiences for plan a"
    );
    // (1 + 10) mod 4 = 3
    assert_eq!(plan.actions[5].owner, "CX Desk");
}

#[test]
fn six_week_brief_with_ten_char_goal_goes_to_growth_team() {
    let mut input = founders_brief();
    input.duration_weeks = 6;
    assert_eq!(input.goal.chars().count(), 10);
    let plan = generate_plan(&input);
    assert_eq!(plan.actions[5].owner, "Growth Team");
}

#[test]
fn default_brief_fits_in_january() {
    // Six weeks of five platforms from 2024-01-01 ends on day 30.
    let bundle = assemble(&carecast_test_utils::default_brief());
    assert_eq!(bundle.calendar.len(), 30);
    assert_eq!(
        bundle.calendar.last().map(|e| e.date.to_string()).as_deref(),
        Some("2024-01-30")
    );
    let labels: Vec<&str> = bundle
        .week_buckets
        .iter()
        .map(|b| b.label.as_str())
        .collect();
    assert_eq!(labels, vec!["Week 1", "Week 2", "Week 3", "Week 4", "Week 5"]);
}

#[test]
fn long_campaign_buckets_reset_each_month() {
    let input = brief_with(12, &["Instagram", "LinkedIn", "Facebook", "YouTube", "WhatsApp"]);
    let calendar = build_calendar(&input, &generate_plan(&input));
    assert_eq!(
        calendar.last().map(|e| e.date.to_string()).as_deref(),
        Some("2024-02-29")
    );
    let week_one = bucket_events_by_week(&calendar)
        .into_iter()
        .find(|b| b.label == "Week 1")
        .unwrap();
    assert!(
        week_one.events.iter().any(|e| e.date.to_string() == "2024-01-01")
            && week_one
                .events
                .iter()
                .any(|e| e.date.to_string().starts_with("2024-02")),
        "Week 1 should hold events from both January and February"
    );
}
