//! Request/response assembly.
//!
//! Runs the full pipeline for one brief: plan, then calendar, then week
//! buckets. Each stage only reads the output of the stages before it, and
//! the whole bundle is rebuilt from scratch on every call.

use serde::{Deserialize, Serialize};

use crate::brief::CampaignInput;
use crate::calendar::{CalendarEvent, WeekBucket, bucket_events_by_week, build_calendar};

use super::generate::generate_plan;
use super::types::{CampaignPlan, DashboardSummary};

/// Everything the dashboard renders for one brief.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CampaignBundle {
    pub summary: DashboardSummary,
    pub plan: CampaignPlan,
    /// Sorted by date.
    pub calendar: Vec<CalendarEvent>,
    pub week_buckets: Vec<WeekBucket>,
}

/// Generate the plan, calendar, and week buckets for `input`.
pub fn assemble(input: &CampaignInput) -> CampaignBundle {
    let plan = generate_plan(input);
    let calendar = build_calendar(input, &plan);
    let week_buckets = bucket_events_by_week(&calendar);
    let summary = DashboardSummary::from_plan(input, &plan);

    tracing::debug!(
        platforms = plan.platform_plans.len(),
        events = calendar.len(),
        buckets = week_buckets.len(),
        "campaign bundle assembled"
    );

    CampaignBundle {
        summary,
        plan,
        calendar,
        week_buckets,
    }
}
