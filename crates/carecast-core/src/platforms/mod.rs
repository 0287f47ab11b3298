//! Static platform playbook.
//!
//! Each supported social platform carries a cadence, a positioning line, a
//! call to action, and the formats and focus angles the agent rotates
//! through. The table is defined in `platforms.toml` and embedded in the
//! binary at compile time; it is parsed once and never mutated.

use std::sync::LazyLock;

use serde::{Deserialize, Serialize};

/// Cadence used when a requested platform is not in the table.
pub const FALLBACK_CADENCE: &str = "Custom cadence determined post discovery.";

/// Positioning used when a requested platform is not in the table.
pub const FALLBACK_POSITIONING: &str =
    "Craft hyper-relevant conversations that pull audiences into the Bharat Life Care ecosystem.";

/// Call to action used when a requested platform is not in the table.
pub const FALLBACK_CALL_TO_ACTION: &str =
    "Reach our care team to choose the right diagnostic pathway.";

/// Calendar format used for platforms without configured formats.
pub const FALLBACK_FORMAT: &str = "Content Drop";

/// Playbook entry for a single platform.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlatformConfig {
    /// Platform name as it appears in a brief (e.g. `Instagram`).
    pub name: String,
    /// Posting frequency and format mix.
    pub cadence: String,
    /// How the brand shows up on this platform.
    pub positioning: String,
    /// Call to action appended to every content idea.
    pub call_to_action: String,
    /// Content formats, reused cyclically. Never empty.
    pub formats: Vec<String>,
    /// Focus angles, one content idea each. Never empty.
    pub focus_angles: Vec<String>,
}

impl PlatformConfig {
    /// Format for the `index`-th slot, wrapping around the format list.
    pub fn format_at(&self, index: usize) -> &str {
        &self.formats[index % self.formats.len()]
    }
}

/// Container for deserializing the embedded TOML file.
#[derive(Debug, Deserialize)]
struct PlatformTable {
    platforms: Vec<PlatformConfig>,
}

/// The embedded platform playbook TOML.
static PLATFORMS_TOML: &str = include_str!("platforms.toml");

/// Parsed playbook, in file order.
///
/// # Panics
///
/// Panics on first access if the embedded TOML is malformed. The file is
/// compiled into the binary, so a successful test run proves it valid.
static TABLE: LazyLock<Vec<PlatformConfig>> = LazyLock::new(|| {
    let table: PlatformTable =
        toml::from_str(PLATFORMS_TOML).expect("embedded platforms.toml is invalid");
    table.platforms
});

/// All configured platforms in table order.
pub fn all() -> &'static [PlatformConfig] {
    &TABLE
}

/// Look up a platform by exact (case-sensitive) name.
pub fn lookup(name: &str) -> Option<&'static PlatformConfig> {
    TABLE.iter().find(|p| p.name == name)
}

/// Whether `name` is a configured platform.
pub fn is_known(name: &str) -> bool {
    lookup(name).is_some()
}

/// Names of all configured platforms, in table order.
pub fn platform_names() -> Vec<&'static str> {
    TABLE.iter().map(|p| p.name.as_str()).collect()
}

/// Calendar idea used when a platform has no content ideas of its own.
pub fn fallback_idea(platform: &str) -> String {
    format!("{platform} deep dive on Bharat Life Care experience.")
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
