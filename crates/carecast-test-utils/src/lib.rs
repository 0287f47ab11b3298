//! Shared fixtures for carecast tests.
//!
//! Briefs are built from the stock brief and then narrowed, so every fixture
//! is a complete, well-formed [`CampaignInput`].

use chrono::NaiveDate;

use carecast_core::CampaignInput;

/// Build a date, panicking on an impossible one.
pub fn date(year: i32, month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, day)
        .unwrap_or_else(|| panic!("invalid test date {year}-{month}-{day}"))
}

/// Stock brief starting on 2024-01-01.
pub fn default_brief() -> CampaignInput {
    CampaignInput::default_brief(date(2024, 1, 1))
}

/// Stock brief with the given duration and platform list.
pub fn brief_with(duration_weeks: i64, platforms: &[&str]) -> CampaignInput {
    let mut input = default_brief();
    input.duration_weeks = duration_weeks;
    input.platforms = platforms.iter().map(|p| (*p).to_owned()).collect();
    input
}

/// The "Grow leads / Founders / Plan A" brief on 2024-01-01, one week,
/// Instagram only.
pub fn founders_brief() -> CampaignInput {
    CampaignInput {
        goal: "Grow leads".to_owned(),
        audience: "Founders".to_owned(),
        focus: "x".to_owned(),
        tone: "y".to_owned(),
        key_offer: "Plan A".to_owned(),
        start_date: date(2024, 1, 1),
        duration_weeks: 1,
        platforms: vec!["Instagram".to_owned()],
    }
}

/// A spread of briefs covering short, long, empty, unknown-platform, and
/// month-boundary cases.
pub fn brief_matrix() -> Vec<CampaignInput> {
    let mut briefs = vec![
        default_brief(),
        founders_brief(),
        brief_with(0, &["Instagram", "LinkedIn"]),
        brief_with(-2, &["Instagram"]),
        brief_with(12, &[]),
        brief_with(
            12,
            &["Instagram", "LinkedIn", "Facebook", "YouTube", "WhatsApp", "Twitter", "Threads"],
        ),
        brief_with(3, &["Threads", "Instagram", "Threads"]),
    ];
    let mut year_end = brief_with(8, &["Twitter", "WhatsApp", "YouTube"]);
    year_end.start_date = date(2024, 12, 20);
    briefs.push(year_end);
    briefs
}
