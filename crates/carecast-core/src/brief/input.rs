//! The campaign brief: the handful of fields an operator edits before
//! asking the agent for a plan.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Shortest sprint the dashboard offers, in weeks.
pub const MIN_DURATION_WEEKS: i64 = 2;
/// Longest sprint the dashboard offers, in weeks.
pub const MAX_DURATION_WEEKS: i64 = 12;
/// Hard ceiling on `duration_weeks` accepted at the CLI and HTTP boundary
/// (ten years of weekly slots).
pub const MAX_PLAN_WEEKS: i64 = 520;

pub const DEFAULT_GOAL: &str =
    "Increase qualified leads for Bharat Life Care’s preventive health memberships.";
pub const DEFAULT_AUDIENCE: &str = "Working professionals in Tier-1 Indian cities (ages 28-45).";
pub const DEFAULT_FOCUS: &str =
    "Preventive diagnostics, at-home sample collection, and telemedicine advisory.";
pub const DEFAULT_TONE: &str = "Empathetic, authoritative, and culturally rooted in Bharat values.";
pub const DEFAULT_KEY_OFFER: &str = "Annual Health Guardian Plan with quarterly doctor consults.";
pub const DEFAULT_DURATION_WEEKS: i64 = 6;
pub const DEFAULT_PLATFORMS: [&str; 5] = ["Instagram", "LinkedIn", "Facebook", "YouTube", "WhatsApp"];

/// Input to plan generation.
///
/// `duration_weeks` is signed on purpose: a zero or negative duration is
/// accepted and simply produces an empty calendar.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CampaignInput {
    pub goal: String,
    pub audience: String,
    pub focus: String,
    pub tone: String,
    pub key_offer: String,
    /// Kick-off date, serialized as `YYYY-MM-DD`.
    pub start_date: NaiveDate,
    pub duration_weeks: i64,
    /// Requested platforms in the order they were switched on.
    pub platforms: Vec<String>,
}

impl CampaignInput {
    /// The stock Bharat Life Care brief, kicking off on `start_date`.
    pub fn default_brief(start_date: NaiveDate) -> Self {
        Self {
            goal: DEFAULT_GOAL.to_owned(),
            audience: DEFAULT_AUDIENCE.to_owned(),
            focus: DEFAULT_FOCUS.to_owned(),
            tone: DEFAULT_TONE.to_owned(),
            key_offer: DEFAULT_KEY_OFFER.to_owned(),
            start_date,
            duration_weeks: DEFAULT_DURATION_WEEKS,
            platforms: DEFAULT_PLATFORMS.iter().map(|p| (*p).to_owned()).collect(),
        }
    }

    /// Switch a platform on or off.
    ///
    /// Removes every occurrence of `platform` if present, otherwise appends
    /// it to the end of the list.
    pub fn toggle_platform(&mut self, platform: &str) {
        if self.has_platform(platform) {
            self.platforms.retain(|p| p != platform);
        } else {
            self.platforms.push(platform.to_owned());
        }
    }

    pub fn has_platform(&self, platform: &str) -> bool {
        self.platforms.iter().any(|p| p == platform)
    }

    /// Reject durations past [`MAX_PLAN_WEEKS`]. Non-positive durations pass.
    pub fn check_plan_limit(&self) -> Result<(), PlanLimitError> {
        if self.duration_weeks > MAX_PLAN_WEEKS {
            return Err(PlanLimitError::TooManyWeeks(self.duration_weeks));
        }
        Ok(())
    }
}

/// A brief too large to plan.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PlanLimitError {
    #[error("duration_weeks {0} exceeds the limit of {max} weeks", max = MAX_PLAN_WEEKS)]
    TooManyWeeks(i64),
}
