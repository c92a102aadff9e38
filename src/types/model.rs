use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;

/// One scoring period of the competition. Periods may overlap: "Overall"
/// spans both weekly windows.
#[derive(Debug, Clone, Serialize)]
pub struct Contest {
    pub name: String,
    pub start: DateTime<Utc>,
    pub end: DateTime<Utc>,
    pub prize: String,
}

impl Contest {
    /// Window membership, inclusive at both ends.
    pub fn contains(&self, instant: DateTime<Utc>) -> bool {
        self.start <= instant && instant <= self.end
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EditAuthor {
    pub display_name: String,
    /// Stable platform identifier (account id or legacy username).
    pub user_key: String,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub avatar_url: String,
}

/// One content version transition on one page, as exported by the edit
/// collector. Page-creation versions never appear here: they have no
/// previous version to diff against.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RawEdit {
    pub id: String,
    pub page_id: String,
    pub page_title: String,
    #[serde(default)]
    pub page_url: String,
    pub author: EditAuthor,
    pub occurred_at: DateTime<Utc>,
    /// Absolute difference in HTML-stripped length between consecutive
    /// versions.
    pub character_delta: u64,
    /// Page version number, when the export carries it. Version 1 rows are
    /// dropped at feed load.
    #[serde(default)]
    pub version: Option<u32>,
}

/// One activated "Focused Flow" window: a 60-minute 2x stretch for one
/// sheet handle. At most one per handle per UTC day.
#[derive(Debug, Clone, Serialize)]
pub struct BonusSession {
    pub handle: String,
    pub start: DateTime<Utc>,
    pub end: DateTime<Utc>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Bonus {
    #[serde(rename = "Critical Content Blitz")]
    CriticalContentBlitz,
    #[serde(rename = "Focused Flow")]
    FocusedFlow,
}

impl Bonus {
    pub fn label(self) -> &'static str {
        match self {
            Bonus::CriticalContentBlitz => "Critical Content Blitz",
            Bonus::FocusedFlow => "Focused Flow",
        }
    }
}

/// Pages eligible for the 3x blitz bonus, on exactly one UTC calendar day.
#[derive(Debug, Clone)]
pub struct CriticalContentRule {
    pub page_ids: HashSet<String>,
    pub blitz_date: NaiveDate,
}

/// A raw edit with its multiplier resolved. Recomputed on every refresh,
/// never persisted.
#[derive(Debug, Clone, Serialize)]
pub struct ScoredEdit {
    #[serde(flatten)]
    pub edit: RawEdit,
    pub multiplier: u32,
    pub bonus: Option<Bonus>,
}

impl ScoredEdit {
    pub fn effective_points(&self) -> u64 {
        self.edit.character_delta * u64::from(self.multiplier)
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct LeaderboardRow {
    pub user_key: String,
    pub display_name: String,
    pub avatar_url: String,
    pub total_points: u64,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn instant(s: &str) -> DateTime<Utc> {
        s.parse().expect("test instant should parse")
    }

    #[test]
    fn contest_window_is_inclusive_at_both_ends() {
        let contest = Contest {
            name: "Week 1".to_string(),
            start: instant("2025-11-19T16:00:00Z"),
            end: instant("2025-11-26T15:59:59.999Z"),
            prize: String::new(),
        };

        assert!(contest.contains(contest.start));
        assert!(contest.contains(contest.end));
        assert!(!contest.contains(instant("2025-11-26T15:59:59.999001Z")));
        assert!(!contest.contains(instant("2025-11-19T15:59:59.999Z")));
    }

    #[test]
    fn effective_points_scale_with_multiplier() {
        let scored = ScoredEdit {
            edit: RawEdit {
                id: "p-2".to_string(),
                page_id: "p".to_string(),
                page_title: "Page".to_string(),
                page_url: String::new(),
                author: EditAuthor {
                    display_name: "Ada Lovelace".to_string(),
                    user_key: "alovelace".to_string(),
                    email: None,
                    avatar_url: String::new(),
                },
                occurred_at: instant("2025-12-02T10:00:00Z"),
                character_delta: 50,
                version: Some(2),
            },
            multiplier: 3,
            bonus: Some(Bonus::CriticalContentBlitz),
        };

        assert_eq!(scored.effective_points(), 150);
    }
}
