use crate::error::{BoardError, Result};
use crate::types::config::CompetitionConfig;
use std::path::Path;
use toml::Value;

pub const DEFAULT_CONFIG_FILE: &str = "competition.toml";

/// Built-in schedule: the published dates of the November competition
/// instance. Any competition.toml is overlaid on top of this table, so a
/// partial file (say, only the critical-content pages) is enough.
const BASE_CONFIG: &str = r#"
[contest]
mode = "fixed"

[contest.week1]
start = "2025-11-19T16:00:00Z"
end = "2025-11-26T15:59:59.999Z"
prize = "Three $100 Prizes for Top Editors!"

[contest.week2]
start = "2025-11-26T16:00:00Z"
end = "2025-12-05T01:00:00Z"
prize = "Three $100 Prizes for Top Editors!"

[contest.overall]
start = "2025-11-19T16:00:00Z"
end = "2025-12-05T01:00:00Z"
prize = "$250 Grand Prize Drawing"

[critical_content]
page_ids = ["12345678", "87654321", "55555555"]
blitz_date = "2025-12-02"

[scoring]
min_character_delta = 0
"#;

/// Loads the competition configuration. An explicit path must exist; the
/// default path is optional and silently falls back to the built-ins.
pub fn load_config(explicit: Option<&Path>) -> Result<CompetitionConfig> {
    let mut merged = base_value()?;

    match explicit {
        Some(path) => {
            if !path.exists() {
                return Err(BoardError::ConfigNotFound(path.display().to_string()));
            }
            merge_file(&mut merged, path)?;
        }
        None => {
            let path = Path::new(DEFAULT_CONFIG_FILE);
            if path.exists() {
                merge_file(&mut merged, path)?;
            }
        }
    }

    merged
        .try_into()
        .map_err(|e: toml::de::Error| BoardError::ConfigParse(e.to_string()))
}

fn base_value() -> Result<Value> {
    Ok(toml::from_str(BASE_CONFIG)?)
}

fn merge_file(merged: &mut Value, path: &Path) -> Result<()> {
    let content = std::fs::read_to_string(path)?;
    let value: Value = toml::from_str(&content)
        .map_err(|e| BoardError::ConfigParse(format!("{}: {}", path.display(), e)))?;
    merge_toml(merged, value);
    Ok(())
}

fn merge_toml(base: &mut Value, overlay: Value) {
    match (base, overlay) {
        (Value::Table(base_table), Value::Table(overlay_table)) => {
            for (key, value) in overlay_table {
                match base_table.get_mut(&key) {
                    Some(existing) => merge_toml(existing, value),
                    None => {
                        base_table.insert(key, value);
                    }
                }
            }
        }
        (slot, value) => {
            *slot = value;
        }
    }
}
