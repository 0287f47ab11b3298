//! `carecast export`: publishing calendar as CSV.

use std::io::Write;

use anyhow::{Context, Result};
use serde::Serialize;

use carecast_core::CampaignInput;
use carecast_core::plan::assemble;

#[derive(Serialize)]
struct CalendarRow<'a> {
    date: String,
    platform: &'a str,
    format: &'a str,
    status: String,
    angle: &'a str,
}

/// Write the calendar for `input` as CSV to `output`, or stdout when `None`.
pub fn run_export_csv(input: &CampaignInput, output: Option<&str>) -> Result<()> {
    let writer: Box<dyn Write> = if let Some(path) = output {
        Box::new(
            std::fs::File::create(path)
                .with_context(|| format!("cannot create output file: {path}"))?,
        )
    } else {
        Box::new(std::io::stdout().lock())
    };

    let rows = write_calendar_csv(input, writer)?;

    if let Some(path) = output {
        println!("Exported {rows} events to {path}");
    }

    Ok(())
}

/// Write the CSV header and one row per calendar event. Returns the row count.
pub fn write_calendar_csv(input: &CampaignInput, writer: impl Write) -> Result<usize> {
    let bundle = assemble(input);
    let mut csv = csv::Writer::from_writer(writer);

    if bundle.calendar.is_empty() {
        // `serialize` only emits the header alongside the first record.
        csv.write_record(["date", "platform", "format", "status", "angle"])?;
    }

    for event in &bundle.calendar {
        csv.serialize(CalendarRow {
            date: event.date.to_string(),
            platform: &event.platform,
            format: &event.format,
            status: event.status.to_string(),
            angle: &event.angle,
        })?;
    }
    csv.flush().context("failed to flush CSV output")?;

    Ok(bundle.calendar.len())
}
