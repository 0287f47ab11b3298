//! Campaign brief: the input shape, its TOML file format, and advisory checks.

pub mod input;
pub mod parser;
pub mod toml_format;

pub use input::{
    CampaignInput, MAX_DURATION_WEEKS, MAX_PLAN_WEEKS, MIN_DURATION_WEEKS, PlanLimitError,
};
pub use parser::{
    BriefParseError, BriefRenderError, BriefWarning, lint_brief, parse_brief_toml,
    render_brief_toml,
};
pub use toml_format::{BriefToml, CampaignSection};
