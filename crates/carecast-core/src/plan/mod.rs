//! Campaign planning: plan generation and request/response assembly.

pub mod generate;
pub mod service;
pub mod types;

pub use generate::{
    ACTION_OWNERS, PILLAR_LANE_OWNERS, build_platform_plan, generate_plan, pillar_lane_owner,
    webinar_owner,
};
pub use service::{CampaignBundle, assemble};
pub use types::{
    ActionItem, Automation, CampaignPlan, DashboardSummary, PlatformPlan, ReportingMetric,
};
