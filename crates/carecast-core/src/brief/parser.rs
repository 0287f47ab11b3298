//! Brief file parsing and advisory checks.
//!
//! Parsing only fails on malformed TOML or an unusable start date. Anything
//! that merely looks odd (a 40-week sprint, an unknown platform) is reported
//! by [`lint_brief`] and left for the caller to log; plan generation accepts
//! every well-formed brief.

use std::collections::HashSet;
use std::fmt;

use chrono::NaiveDate;
use thiserror::Error;

use super::input::{CampaignInput, MAX_DURATION_WEEKS, MIN_DURATION_WEEKS};
use super::toml_format::BriefToml;
use crate::platforms;

/// Errors that can occur while reading a brief file.
#[derive(Debug, Error)]
pub enum BriefParseError {
    #[error("TOML parse error: {0}")]
    TomlError(#[from] toml::de::Error),

    #[error("start_date {0} is not a calendar date (expected a TOML local date like 2024-01-01)")]
    InvalidStartDate(String),
}

/// Errors that can occur while writing a brief file.
#[derive(Debug, Error)]
pub enum BriefRenderError {
    #[error("start_date {0} cannot be written as a TOML local date (years 0000-9999 only)")]
    StartDateOutOfRange(NaiveDate),

    #[error("TOML serialize error: {0}")]
    TomlError(#[from] toml::ser::Error),
}

/// Parse a `brief.toml` string into a complete [`CampaignInput`].
///
/// Missing keys are filled from the stock brief; a missing `start_date`
/// becomes `today`.
pub fn parse_brief_toml(content: &str, today: NaiveDate) -> Result<CampaignInput, BriefParseError> {
    let brief: BriefToml = toml::from_str(content)?;
    let section = brief.campaign;
    let mut input = CampaignInput::default_brief(today);

    if let Some(raw) = section.start_date {
        input.start_date = raw
            .date
            .filter(|_| raw.time.is_none())
            .and_then(|d| NaiveDate::from_ymd_opt(d.year.into(), d.month.into(), d.day.into()))
            .ok_or_else(|| BriefParseError::InvalidStartDate(raw.to_string()))?;
    }
    if let Some(goal) = section.goal {
        input.goal = goal;
    }
    if let Some(audience) = section.audience {
        input.audience = audience;
    }
    if let Some(focus) = section.focus {
        input.focus = focus;
    }
    if let Some(tone) = section.tone {
        input.tone = tone;
    }
    if let Some(key_offer) = section.key_offer {
        input.key_offer = key_offer;
    }
    if let Some(weeks) = section.duration_weeks {
        input.duration_weeks = weeks;
    }
    if let Some(platforms) = section.platforms {
        input.platforms = platforms;
    }

    Ok(input)
}

/// Serialize a brief back into `brief.toml` form.
///
/// Fails rather than writing a different date when `start_date` has no
/// TOML representation.
pub fn render_brief_toml(input: &CampaignInput) -> Result<String, BriefRenderError> {
    let brief = BriefToml::try_from(input)?;
    Ok(toml::to_string_pretty(&brief)?)
}

// ---------------------------------------------------------------------------
// Advisory checks
// ---------------------------------------------------------------------------

/// Something about a brief worth flagging to the operator.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BriefWarning {
    /// Sprint length outside the range the dashboard offers.
    DurationOutOfRange(i64),
    /// Platform not in the playbook; it gets generic copy.
    UnknownPlatform(String),
    /// Platform listed more than once; it gets a calendar row per listing.
    DuplicatePlatform(String),
    /// No platforms selected, so the calendar will be empty.
    NoPlatforms,
}

impl fmt::Display for BriefWarning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::DurationOutOfRange(weeks) => write!(
                f,
                "duration of {weeks} weeks is outside the usual {MIN_DURATION_WEEKS}-{MAX_DURATION_WEEKS} week sprint"
            ),
            Self::UnknownPlatform(name) => {
                write!(f, "platform {name:?} has no playbook entry; generic copy will be used")
            }
            Self::DuplicatePlatform(name) => write!(f, "platform {name:?} is listed more than once"),
            Self::NoPlatforms => f.write_str("no platforms selected; the calendar will be empty"),
        }
    }
}

/// Collect advisory warnings for a brief. Never blocks generation.
pub fn lint_brief(input: &CampaignInput) -> Vec<BriefWarning> {
    let mut warnings = Vec::new();

    if !(MIN_DURATION_WEEKS..=MAX_DURATION_WEEKS).contains(&input.duration_weeks) {
        warnings.push(BriefWarning::DurationOutOfRange(input.duration_weeks));
    }

    if input.platforms.is_empty() {
        warnings.push(BriefWarning::NoPlatforms);
    }

    let mut seen = HashSet::new();
    let mut reported = HashSet::new();
    for platform in &input.platforms {
        if !seen.insert(platform.as_str()) {
            if reported.insert(platform.as_str()) {
                warnings.push(BriefWarning::DuplicatePlatform(platform.clone()));
            }
            continue;
        }
        if !platforms::is_known(platform) {
            warnings.push(BriefWarning::UnknownPlatform(platform.clone()));
        }
    }

    warnings
}
