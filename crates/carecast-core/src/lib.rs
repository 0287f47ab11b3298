//! Deterministic campaign planning for the Bharat Life Care social agent.
//!
//! A [`brief::CampaignInput`] flows one way through three pure stages:
//! [`plan::generate_plan`], [`calendar::build_calendar`], and
//! [`calendar::bucket_events_by_week`]. [`plan::assemble`] runs all three.

pub mod brief;
pub mod calendar;
pub mod models;
pub mod plan;
pub mod platforms;

pub use brief::CampaignInput;
pub use calendar::{CalendarEvent, WeekBucket};
pub use plan::{CampaignBundle, CampaignPlan, assemble};
