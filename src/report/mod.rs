pub mod json;
pub mod md;
pub mod table;

use crate::error::BoardError;
use crate::types::model::{Contest, LeaderboardRow};
use chrono::{DateTime, Utc};
use serde::Serialize;

#[derive(Debug, Clone, Copy)]
pub enum OutputFormat {
    Json,
    Md,
    Table,
}

/// One renderable leaderboard: a contest plus its (possibly truncated)
/// ranked rows.
#[derive(Debug, Serialize)]
pub struct BoardReport {
    pub contest: String,
    pub start: DateTime<Utc>,
    pub end: DateTime<Utc>,
    pub prize: String,
    /// Ranked size before any top-N truncation.
    pub total_participants: usize,
    pub rows: Vec<LeaderboardRow>,
}

impl BoardReport {
    pub fn new(contest: &Contest, rows: Vec<LeaderboardRow>, total_participants: usize) -> Self {
        Self {
            contest: contest.name.clone(),
            start: contest.start,
            end: contest.end,
            prize: contest.prize.clone(),
            total_participants,
            rows,
        }
    }
}

pub fn render(report: &BoardReport, format: OutputFormat) -> Result<String, BoardError> {
    match format {
        OutputFormat::Json => json::to_json(report).map_err(BoardError::Json),
        OutputFormat::Md => Ok(md::to_markdown(report)),
        OutputFormat::Table => Ok(table::to_table(report)),
    }
}
