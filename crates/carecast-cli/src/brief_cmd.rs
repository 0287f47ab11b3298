//! Loading the campaign brief for a command, and `carecast brief`.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use chrono::NaiveDate;

use carecast_core::CampaignInput;
use carecast_core::brief::{MAX_PLAN_WEEKS, lint_brief, parse_brief_toml, render_brief_toml};

use crate::BriefArgs;

/// Today's date in local time; the default kick-off date.
pub fn today() -> NaiveDate {
    chrono::Local::now().date_naive()
}

/// Build the brief for a command.
///
/// Starts from `brief_path` (or the stock brief when `None`), applies the
/// `--start`, `--weeks`, and `--platform` overrides, and logs any advisory
/// warnings. Warnings never stop the command; a duration past
/// [`MAX_PLAN_WEEKS`] does.
pub fn load_input(args: &BriefArgs, brief_path: Option<&Path>, today: NaiveDate) -> Result<CampaignInput> {
    let mut input = match brief_path {
        Some(path) => {
            let content = std::fs::read_to_string(path)
                .with_context(|| format!("failed to read brief file: {}", path.display()))?;
            let input = parse_brief_toml(&content, today)
                .with_context(|| format!("failed to parse brief file: {}", path.display()))?;
            tracing::debug!(path = %path.display(), "loaded brief");
            input
        }
        None => CampaignInput::default_brief(today),
    };

    if let Some(start) = args.start {
        input.start_date = start;
    }
    if let Some(weeks) = args.weeks {
        input.duration_weeks = weeks;
    }
    if !args.platforms.is_empty() {
        input.platforms = args.platforms.clone();
    }

    input.check_plan_limit()?;

    for warning in lint_brief(&input) {
        tracing::warn!("{warning}");
    }

    Ok(input)
}

/// Execute `carecast brief`: print or write the brief as TOML.
pub fn run_brief(input: &CampaignInput, output: Option<&PathBuf>) -> Result<()> {
    let rendered = render_brief_toml(input).context("failed to serialize brief")?;
    match output {
        Some(path) => {
            std::fs::write(path, &rendered)
                .with_context(|| format!("cannot write brief file: {}", path.display()))?;
            println!("Brief written to {}", path.display());
        }
        None => print!("{rendered}"),
    }
    Ok(())
}
