//! TOML format types for campaign brief files.
//!
//! A brief file holds a single `[campaign]` table. Every key is optional;
//! missing keys fall back to the stock brief.

use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};
use toml::value::{Date, Datetime};

use super::input::CampaignInput;
use super::parser::BriefRenderError;

/// Latest year a TOML local date can hold.
const MAX_TOML_YEAR: u16 = 9999;

/// Top-level structure of a `brief.toml` file.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct BriefToml {
    #[serde(default)]
    pub campaign: CampaignSection,
}

/// The `[campaign]` table.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct CampaignSection {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub goal: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub audience: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub focus: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tone: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub key_offer: Option<String>,
    /// Native TOML local date, e.g. `start_date = 2024-01-01`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub start_date: Option<Datetime>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub duration_weeks: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub platforms: Option<Vec<String>>,
}

impl TryFrom<&CampaignInput> for BriefToml {
    type Error = BriefRenderError;

    fn try_from(input: &CampaignInput) -> Result<Self, Self::Error> {
        let start_date = toml_date(input.start_date)
            .ok_or(BriefRenderError::StartDateOutOfRange(input.start_date))?;
        Ok(Self {
            campaign: CampaignSection {
                goal: Some(input.goal.clone()),
                audience: Some(input.audience.clone()),
                focus: Some(input.focus.clone()),
                tone: Some(input.tone.clone()),
                key_offer: Some(input.key_offer.clone()),
                start_date: Some(start_date),
                duration_weeks: Some(input.duration_weeks),
                platforms: Some(input.platforms.clone()),
            },
        })
    }
}

/// Convert a calendar date into a TOML local date, or `None` when the year
/// falls outside `0..=9999`.
pub(crate) fn toml_date(date: NaiveDate) -> Option<Datetime> {
    let year = u16::try_from(date.year())
        .ok()
        .filter(|year| *year <= MAX_TOML_YEAR)?;
    Some(Datetime {
        date: Some(Date {
            year,
            month: date.month() as u8,
            day: date.day() as u8,
        }),
        time: None,
        offset: None,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn deserialize_empty_brief() {
        let brief: BriefToml = toml::from_str("").expect("should parse");
        assert_eq!(brief, BriefToml::default());
    }

    #[test]
    fn deserialize_partial_brief() {
        let toml_str = r#"
[campaign]
goal = "Grow leads"
duration_weeks = 4
platforms = ["Instagram", "Twitter"]
"#;
        let brief: BriefToml = toml::from_str(toml_str).expect("should parse");
        assert_eq!(brief.campaign.goal.as_deref(), Some("Grow leads"));
        assert_eq!(brief.campaign.duration_weeks, Some(4));
        assert_eq!(
            brief.campaign.platforms,
            Some(vec!["Instagram".to_owned(), "Twitter".to_owned()])
        );
        assert!(brief.campaign.start_date.is_none());
        assert!(brief.campaign.audience.is_none());
    }

    #[test]
    fn deserialize_native_date() {
        let toml_str = r#"
[campaign]
start_date = 2024-03-15
"#;
        let brief: BriefToml = toml::from_str(toml_str).expect("should parse");
        let date = brief.campaign.start_date.and_then(|d| d.date).unwrap();
        assert_eq!((date.year, date.month, date.day), (2024, 3, 15));
    }

    #[test]
    fn toml_date_has_no_time_component() {
        let date = toml_date(NaiveDate::from_ymd_opt(2025, 12, 31).unwrap()).unwrap();
        assert!(date.time.is_none());
        assert!(date.offset.is_none());
        assert_eq!(date.to_string(), "2025-12-31");
    }

    #[test]
    fn toml_date_covers_four_digit_years_only() {
        let last = NaiveDate::from_ymd_opt(9999, 12, 31).unwrap();
        assert_eq!(toml_date(last).unwrap().to_string(), "9999-12-31");
        let first = NaiveDate::from_ymd_opt(0, 1, 1).unwrap();
        assert_eq!(toml_date(first).unwrap().to_string(), "0000-01-01");

        assert!(toml_date(NaiveDate::from_ymd_opt(10000, 1, 1).unwrap()).is_none());
        assert!(toml_date(NaiveDate::from_ymd_opt(70000, 1, 1).unwrap()).is_none());
        assert!(toml_date(NaiveDate::from_ymd_opt(-1, 6, 1).unwrap()).is_none());
    }
}
