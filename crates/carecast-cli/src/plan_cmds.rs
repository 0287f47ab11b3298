//! Handlers for `carecast plan`, `carecast calendar`, and `carecast platforms`.
//!
//! Text output is written to any `io::Write` so the handlers can be tested
//! against a buffer; `main` passes a locked stdout.

use std::io::Write;

use anyhow::Result;

use carecast_core::calendar::{CalendarEvent, format_date_label};
use carecast_core::plan::{assemble, pillar_lane_owner};
use carecast_core::{CampaignBundle, CampaignInput, platforms};

// -----------------------------------------------------------------------
// carecast plan
// -----------------------------------------------------------------------

/// Generate the plan for `input` and print it.
pub fn run_plan(input: &CampaignInput, json: bool, out: &mut impl Write) -> Result<()> {
    let bundle = assemble(input);
    if json {
        serde_json::to_writer_pretty(&mut *out, &bundle)?;
        writeln!(out)?;
        return Ok(());
    }
    write_plan(&bundle, out)
}

fn write_plan(bundle: &CampaignBundle, out: &mut impl Write) -> Result<()> {
    let plan = &bundle.plan;
    let summary = &bundle.summary;

    writeln!(out, "Agent summary")?;
    writeln!(out, "  {}", plan.strategy_summary)?;
    writeln!(out)?;
    writeln!(out, "  Primary outcome:    {}", summary.primary_outcome)?;
    writeln!(out, "  Channels live:      {}", summary.channels_live)?;
    writeln!(out, "  Agent automations:  {}", summary.agent_automations)?;
    writeln!(out, "  Campaign sprint:    {}", summary.campaign_sprint)?;
    writeln!(out, "  Compliance reviews: {}", summary.compliance_reviews)?;
    writeln!(out)?;

    writeln!(out, "Voice & tone anchors")?;
    for principle in &plan.voice_principles {
        writeln!(out, "  - {principle}")?;
    }
    writeln!(out)?;

    writeln!(out, "Narrative hooks")?;
    for hook in &plan.narrative_hooks {
        writeln!(out, "  - {hook}")?;
    }
    writeln!(out)?;

    writeln!(out, "Content pillars")?;
    for (i, pillar) in plan.content_pillars.iter().enumerate() {
        writeln!(out, "  - {pillar} [{}]", pillar_lane_owner(i))?;
    }
    writeln!(out)?;

    writeln!(out, "Platforms")?;
    for platform_plan in &plan.platform_plans {
        writeln!(out, "  {}", platform_plan.platform)?;
        writeln!(out, "    Positioning: {}", platform_plan.positioning)?;
        writeln!(out, "    Cadence:     {}", platform_plan.cadence)?;
        writeln!(out, "    CTA:         {}", platform_plan.call_to_action)?;
        for idea in &platform_plan.content_ideas {
            writeln!(out, "    * {idea}")?;
        }
    }
    writeln!(out)?;

    writeln!(out, "Automations")?;
    for automation in &plan.automations {
        let state = if automation.active { "on" } else { "off" };
        writeln!(out, "  [{state}] {}: {}", automation.title, automation.description)?;
    }
    writeln!(out)?;

    writeln!(out, "Reporting")?;
    for metric in &plan.reporting {
        writeln!(
            out,
            "  {}: {} -> {} ({})",
            metric.metric, metric.baseline, metric.target, metric.note
        )?;
    }
    writeln!(out)?;

    writeln!(out, "Actions")?;
    for action in &plan.actions {
        writeln!(
            out,
            "  {:<8} {:<12} {:<16} {}",
            action.due,
            action.status.to_string(),
            action.owner,
            action.label
        )?;
    }

    Ok(())
}

// -----------------------------------------------------------------------
// carecast calendar
// -----------------------------------------------------------------------

/// Print the publishing calendar, flat or grouped by week bucket.
pub fn run_calendar(
    input: &CampaignInput,
    by_week: bool,
    json: bool,
    out: &mut impl Write,
) -> Result<()> {
    let bundle = assemble(input);

    if json {
        if by_week {
            serde_json::to_writer_pretty(&mut *out, &bundle.week_buckets)?;
        } else {
            serde_json::to_writer_pretty(&mut *out, &bundle.calendar)?;
        }
        writeln!(out)?;
        return Ok(());
    }

    if bundle.calendar.is_empty() {
        writeln!(out, "No events scheduled.")?;
        return Ok(());
    }

    if by_week {
        for bucket in &bundle.week_buckets {
            writeln!(out, "{} ({} events)", bucket.label, bucket.events.len())?;
            for event in &bucket.events {
                write_event(event, out)?;
            }
            writeln!(out)?;
        }
    } else {
        for event in &bundle.calendar {
            write_event(event, out)?;
        }
    }

    Ok(())
}

fn write_event(event: &CalendarEvent, out: &mut impl Write) -> Result<()> {
    writeln!(
        out,
        "  {:<18} {:<10} {:<24} {:<10} {}",
        format_date_label(event.date),
        event.platform,
        event.format,
        event.status.to_string(),
        event.angle
    )?;
    Ok(())
}

// -----------------------------------------------------------------------
// carecast platforms
// -----------------------------------------------------------------------

/// List the platform playbook.
pub fn run_platforms(out: &mut impl Write) -> Result<()> {
    for platform in platforms::all() {
        writeln!(out, "{}", platform.name)?;
        writeln!(out, "  Cadence: {}", platform.cadence)?;
        writeln!(out, "  Formats: {}", platform.formats.join(", "))?;
        writeln!(out, "  CTA:     {}", platform.call_to_action)?;
    }
    Ok(())
}
