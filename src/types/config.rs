use chrono::{DateTime, NaiveDate, Utc};
use serde::Deserialize;
use std::path::PathBuf;

#[derive(Debug, Clone, Deserialize)]
pub struct CompetitionConfig {
    pub contest: ContestConfig,
    pub critical_content: CriticalContentConfig,
    #[serde(default)]
    pub scoring: ScoringConfig,
    #[serde(default)]
    pub feeds: FeedsConfig,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CalendarMode {
    /// Literal pre-published contest dates.
    Fixed,
    /// Windows derived from the reference instant's UTC week.
    Rolling,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ContestConfig {
    pub mode: CalendarMode,
    pub week1: ContestWindow,
    pub week2: ContestWindow,
    pub overall: ContestWindow,
}

/// One fixed-mode contest window. Timestamps are RFC 3339 strings in the
/// TOML file.
#[derive(Debug, Clone, Deserialize)]
pub struct ContestWindow {
    pub start: DateTime<Utc>,
    pub end: DateTime<Utc>,
    #[serde(default)]
    pub prize: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct CriticalContentConfig {
    #[serde(default)]
    pub page_ids: Vec<String>,
    /// Blitz day for fixed mode; rolling mode derives its own.
    pub blitz_date: NaiveDate,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct ScoringConfig {
    /// Edits below this character delta do not qualify for scoring.
    #[serde(default)]
    pub min_character_delta: u64,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct FeedsConfig {
    pub edits: Option<PathBuf>,
    pub sessions: Option<PathBuf>,
}
