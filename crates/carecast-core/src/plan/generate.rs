//! Plan generation: derive a [`CampaignPlan`] from a brief.
//!
//! Pure logic over the brief and the static platform playbook. Every input
//! produces a plan; unknown platforms get generic copy instead of an error.

use std::collections::HashSet;

use crate::brief::CampaignInput;
use crate::models::ActionStatus;
use crate::platforms::{self, FALLBACK_CADENCE, FALLBACK_CALL_TO_ACTION, FALLBACK_POSITIONING};

use super::types::{
    ActionItem, Automation, CampaignPlan, DashboardSummary, PlatformPlan, ReportingMetric,
};

/// Owner rotation for the webinar launch action.
pub const ACTION_OWNERS: [&str; 4] = ["Growth Team", "Medical Ops", "Creative Studio", "CX Desk"];

/// Lane owners for the ops-workflow board, assigned to pillars in order.
pub const PILLAR_LANE_OWNERS: [&str; 4] = ["Growth", "Creative", "Medical", "CX"];

const PRIMARY_OUTCOME: &str = "320+ preventive plan sign-ups / month";

// ---------------------------------------------------------------------------
// Entry point
// ---------------------------------------------------------------------------

/// Build the campaign plan for `input`.
pub fn generate_plan(input: &CampaignInput) -> CampaignPlan {
    let audience = input.audience.to_lowercase();

    let voice_principles = vec![
        "Lead every message with preventive empowerment over fear.".to_owned(),
        format!("Celebrate Bharat Life Care clinicians as guardians for {audience}."),
        "Keep CTA copy crisp with direct next-step prompts.".to_owned(),
    ];

    let content_pillars = dedup_first_seen(vec![
        format!("Lifestyle design for {audience}"),
        "Doctor-backed myth busting for preventive care hesitations".to_owned(),
        "Impact narratives from Bharat Life Care subscribers".to_owned(),
        "Operational excellence of Bharat Life Care labs & telemedicine".to_owned(),
        format!(
            "Micro-rituals that prime audiences for {}",
            input.key_offer.to_lowercase()
        ),
    ]);

    let narrative_hooks = vec![
        "“Healthy tomorrow starts with 30 minutes today” series anchored by Bharat Life Care experts."
            .to_owned(),
        "“Decoding preventive health reports” interactive breakdown leveraging Bharat Life Care diagnostics."
            .to_owned(),
        "“From alert to action” case files showing Bharat Life Care’s rapid concierge response."
            .to_owned(),
    ];

    let platform_plans = input
        .platforms
        .iter()
        .map(|name| build_platform_plan(name))
        .collect();

    let strategy_summary = [
        format!("Deliver {}", input.goal.to_lowercase()),
        format!("Land Bharat Life Care as the default preventive partner for {audience}"),
        format!(
            "Bake {} into every CTA with {} storytelling",
            input.key_offer.to_lowercase(),
            input.tone.to_lowercase()
        ),
    ]
    .join(" • ");

    CampaignPlan {
        strategy_summary,
        voice_principles,
        content_pillars,
        narrative_hooks,
        platform_plans,
        automations: automations(),
        reporting: reporting(),
        actions: actions(input),
    }
}

/// Plan for one platform, falling back to generic copy when the platform is
/// not in the playbook.
pub fn build_platform_plan(platform: &str) -> PlatformPlan {
    match platforms::lookup(platform) {
        Some(config) => PlatformPlan {
            platform: platform.to_owned(),
            cadence: config.cadence.clone(),
            positioning: config.positioning.clone(),
            call_to_action: config.call_to_action.clone(),
            content_ideas: config
                .focus_angles
                .iter()
                .enumerate()
                .map(|(i, angle)| {
                    format!(
                        "{}: {angle} • CTA → {}",
                        config.format_at(i),
                        config.call_to_action
                    )
                })
                .collect(),
        },
        None => PlatformPlan {
            platform: platform.to_owned(),
            cadence: FALLBACK_CADENCE.to_owned(),
            positioning: FALLBACK_POSITIONING.to_owned(),
            call_to_action: FALLBACK_CALL_TO_ACTION.to_owned(),
            content_ideas: Vec::new(),
        },
    }
}

/// Owner of the webinar launch action.
///
/// `(duration_weeks + goal length) mod 4` over [`ACTION_OWNERS`]. The goal
/// length is counted in UTF-16 code units so plans stay identical to the
/// ones the browser dashboard produced.
pub fn webinar_owner(input: &CampaignInput) -> &'static str {
    let goal_len = input.goal.encode_utf16().count() as i64;
    let slot = input
        .duration_weeks
        .wrapping_add(goal_len)
        .rem_euclid(ACTION_OWNERS.len() as i64);
    ACTION_OWNERS[slot as usize]
}

/// Lane owner shown next to the `index`-th content pillar.
pub fn pillar_lane_owner(index: usize) -> &'static str {
    PILLAR_LANE_OWNERS[index % PILLAR_LANE_OWNERS.len()]
}

impl DashboardSummary {
    pub fn from_plan(input: &CampaignInput, plan: &CampaignPlan) -> Self {
        Self {
            primary_outcome: PRIMARY_OUTCOME.to_owned(),
            channels_live: input.platforms.len(),
            agent_automations: plan.automations.len(),
            campaign_sprint: format!("{} weeks", input.duration_weeks),
            compliance_reviews: "Active".to_owned(),
        }
    }
}

// ---------------------------------------------------------------------------
// Fixed sections
// ---------------------------------------------------------------------------

fn dedup_first_seen(items: Vec<String>) -> Vec<String> {
    let mut seen = HashSet::new();
    items
        .into_iter()
        .filter(|item| seen.insert(item.clone()))
        .collect()
}

fn automation(title: &str, description: &str) -> Automation {
    Automation {
        title: title.to_owned(),
        description: description.to_owned(),
        active: true,
    }
}

fn automations() -> Vec<Automation> {
    vec![
        automation(
            "Sentiment-aware inbox triage",
            "Auto-tags inbound DMs and comments, routing medical questions to doctors and sales-ready leads to concierge within 15 minutes.",
        ),
        automation(
            "Creator co-pilot briefing",
            "Generates weekly creative briefs aligned to approved content pillars and pushes to Notion + Slack.",
        ),
        automation(
            "Compliance guardrails",
            "Scans all scheduled copies for medical compliance phrases and flags risky statements before publishing.",
        ),
        automation(
            "WhatsApp retention loop",
            "Triggers follow-up automations 48 hours after first consultation reminder with contextual nudges.",
        ),
    ]
}

fn metric(metric: &str, baseline: &str, target: &str, note: &str) -> ReportingMetric {
    ReportingMetric {
        metric: metric.to_owned(),
        baseline: baseline.to_owned(),
        target: target.to_owned(),
        note: note.to_owned(),
    }
}

fn reporting() -> Vec<ReportingMetric> {
    vec![
        metric(
            "Leads → Consultation Conversion",
            "18%",
            "28% within 6 weeks",
            "Measure uplift in WhatsApp concierge funnel.",
        ),
        metric(
            "Preventive Plan Sign-ups",
            "210 / month",
            "325 / month",
            "Track Instagram & LinkedIn assisted conversions.",
        ),
        metric(
            "Average Response Time",
            "2h 40m",
            "<45m across all social touchpoints",
            "Automations should handle triage + first reply.",
        ),
        metric(
            "Doctor-led Live Engagement",
            "8% attendance",
            "15% with improved reminder cadence",
            "Use WhatsApp + email synergy.",
        ),
    ]
}

fn action(label: &str, owner: &str, due: &str, status: ActionStatus) -> ActionItem {
    ActionItem {
        label: label.to_owned(),
        owner: owner.to_owned(),
        due: due.to_owned(),
        status,
    }
}

fn actions(input: &CampaignInput) -> Vec<ActionItem> {
    vec![
        action(
            "Finalize 6-week omnichannel narrative map",
            "Growth Team",
            "Day 2",
            ActionStatus::InProgress,
        ),
        action(
            "Record doctor myth-busting series batch",
            "Medical Ops",
            "Day 4",
            ActionStatus::Queued,
        ),
        action(
            "Deploy compliance guardrails checklist inside Asana",
            "Creative Studio",
            "Day 3",
            ActionStatus::InProgress,
        ),
        action(
            "Configure WhatsApp concierge routing tree",
            "CX Desk",
            "Day 5",
            ActionStatus::Queued,
        ),
        action(
            "Publish founding physician leadership story on LinkedIn",
            "Growth Team",
            "Day 7",
            ActionStatus::Queued,
        ),
        action(
            "Launch preventative health webinar funnel",
            webinar_owner(input),
            "Day 11",
            ActionStatus::Queued,
        ),
    ]
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
