use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

// ---------------------------------------------------------------------------
// Enums
// ---------------------------------------------------------------------------

/// Lifecycle status of a calendar event.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PublishStatus {
    Draft,
    Review,
    Scheduled,
}

impl PublishStatus {
    /// Status assigned to the event published in `week` (0-based).
    ///
    /// Week 0 is a draft, week 1 is in review, and from then on even weeks
    /// are scheduled while odd weeks fall back to draft.
    pub fn for_week(week: i64) -> Self {
        match week {
            0 => Self::Draft,
            1 => Self::Review,
            w if w % 2 == 0 => Self::Scheduled,
            _ => Self::Draft,
        }
    }
}

impl fmt::Display for PublishStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Self::Draft => "draft",
            Self::Review => "review",
            Self::Scheduled => "scheduled",
        };
        f.write_str(s)
    }
}

impl FromStr for PublishStatus {
    type Err = PublishStatusParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "draft" => Ok(Self::Draft),
            "review" => Ok(Self::Review),
            "scheduled" => Ok(Self::Scheduled),
            other => Err(PublishStatusParseError(other.to_owned())),
        }
    }
}

/// Error returned when parsing an invalid [`PublishStatus`] string.
#[derive(Debug, Clone)]
pub struct PublishStatusParseError(pub String);

impl fmt::Display for PublishStatusParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "invalid publish status: {:?}", self.0)
    }
}

impl std::error::Error for PublishStatusParseError {}

// ---------------------------------------------------------------------------

/// Progress of an action item on the launch checklist.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ActionStatus {
    Queued,
    InProgress,
    Done,
}

impl fmt::Display for ActionStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Self::Queued => "queued",
            Self::InProgress => "in-progress",
            Self::Done => "done",
        };
        f.write_str(s)
    }
}

impl FromStr for ActionStatus {
    type Err = ActionStatusParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "queued" => Ok(Self::Queued),
            "in-progress" => Ok(Self::InProgress),
            "done" => Ok(Self::Done),
            other => Err(ActionStatusParseError(other.to_owned())),
        }
    }
}

/// Error returned when parsing an invalid [`ActionStatus`] string.
#[derive(Debug, Clone)]
pub struct ActionStatusParseError(pub String);

impl fmt::Display for ActionStatusParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "invalid action status: {:?}", self.0)
    }
}

impl std::error::Error for ActionStatusParseError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn publish_status_follows_week_rule() {
        assert_eq!(PublishStatus::for_week(0), PublishStatus::Draft);
        assert_eq!(PublishStatus::for_week(1), PublishStatus::Review);
        assert_eq!(PublishStatus::for_week(2), PublishStatus::Scheduled);
        assert_eq!(PublishStatus::for_week(3), PublishStatus::Draft);
        assert_eq!(PublishStatus::for_week(4), PublishStatus::Scheduled);
        assert_eq!(PublishStatus::for_week(11), PublishStatus::Draft);
    }

    #[test]
    fn publish_status_display_matches_from_str() {
        for status in [
            PublishStatus::Draft,
            PublishStatus::Review,
            PublishStatus::Scheduled,
        ] {
            let parsed: PublishStatus = status.to_string().parse().unwrap();
            assert_eq!(parsed, status);
        }
    }

    #[test]
    fn publish_status_rejects_unknown() {
        let err = "published".parse::<PublishStatus>().unwrap_err();
        assert_eq!(err.to_string(), "invalid publish status: \"published\"");
    }

    #[test]
    fn action_status_uses_kebab_case() {
        assert_eq!(ActionStatus::InProgress.to_string(), "in-progress");
        assert_eq!(
            "in-progress".parse::<ActionStatus>().unwrap(),
            ActionStatus::InProgress
        );
        assert!("in_progress".parse::<ActionStatus>().is_err());
    }

    #[test]
    fn serde_names_match_display() {
        let json = serde_json::to_string(&ActionStatus::InProgress).unwrap();
        assert_eq!(json, "\"in-progress\"");
        let json = serde_json::to_string(&PublishStatus::Scheduled).unwrap();
        assert_eq!(json, "\"scheduled\"");
    }
}
