//! Output shapes of plan generation.

use serde::{Deserialize, Serialize};

use crate::models::ActionStatus;

/// Everything the agent derives from a brief, apart from the calendar.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CampaignPlan {
    /// Three clauses joined with `" • "`.
    pub strategy_summary: String,
    pub voice_principles: Vec<String>,
    /// Deduplicated, in first-seen order.
    pub content_pillars: Vec<String>,
    pub narrative_hooks: Vec<String>,
    /// One entry per requested platform, in brief order.
    pub platform_plans: Vec<PlatformPlan>,
    pub automations: Vec<Automation>,
    pub reporting: Vec<ReportingMetric>,
    pub actions: Vec<ActionItem>,
}

/// Execution plan for a single platform.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlatformPlan {
    pub platform: String,
    pub cadence: String,
    pub positioning: String,
    pub call_to_action: String,
    /// One idea per focus angle; empty for platforms without a playbook entry.
    pub content_ideas: Vec<String>,
}

/// A background workflow the agent keeps running.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Automation {
    pub title: String,
    pub description: String,
    pub active: bool,
}

/// A KPI the campaign reports against.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReportingMetric {
    pub metric: String,
    pub baseline: String,
    pub target: String,
    pub note: String,
}

/// A launch checklist entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ActionItem {
    pub label: String,
    pub owner: String,
    pub due: String,
    pub status: ActionStatus,
}

/// Headline numbers shown above the plan.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DashboardSummary {
    pub primary_outcome: String,
    pub channels_live: usize,
    pub agent_automations: usize,
    /// e.g. `"6 weeks"`.
    pub campaign_sprint: String,
    pub compliance_reviews: String,
}
