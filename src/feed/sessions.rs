use crate::calendar::Schedule;
use crate::error::Result;
use crate::feed::{SessionBatch, SessionSource};
use crate::types::model::BonusSession;
use chrono::{DateTime, Duration, NaiveDate, NaiveDateTime, Utc};
use std::collections::BTreeMap;
use std::path::PathBuf;
use tracing::warn;

pub const SESSION_MINUTES: i64 = 60;

/// Session store backed by the signup sheet export: one row per
/// activation, columns `handle,link,timestamp`, header included. Each row
/// opens a 60-minute window; only the earliest activation per handle per
/// UTC day counts.
pub struct FileSessionFeed {
    path: PathBuf,
}

impl FileSessionFeed {
    pub fn new(path: PathBuf) -> Self {
        Self { path }
    }
}

impl SessionSource for FileSessionFeed {
    fn collect(&self, _schedule: &Schedule) -> Result<SessionBatch> {
        let mut reader = csv::ReaderBuilder::new()
            .has_headers(true)
            .flexible(true)
            .trim(csv::Trim::All)
            .from_path(&self.path)?;

        let mut earliest: BTreeMap<(String, NaiveDate), DateTime<Utc>> = BTreeMap::new();
        let mut skipped_rows = 0usize;

        for record in reader.records() {
            let record = match record {
                Ok(record) => record,
                Err(e) => {
                    warn!(error = %e, "skipping unreadable session row");
                    skipped_rows += 1;
                    continue;
                }
            };

            let handle = record
                .get(0)
                .map(normalize_handle)
                .filter(|handle| !handle.is_empty());
            let timestamp = record.get(2).and_then(parse_timestamp);

            match (handle, timestamp) {
                (Some(handle), Some(start)) => {
                    let key = (handle, start.date_naive());
                    earliest
                        .entry(key)
                        .and_modify(|existing| {
                            if start < *existing {
                                *existing = start;
                            }
                        })
                        .or_insert(start);
                }
                _ => {
                    warn!(
                        row = ?record,
                        "skipping session row with missing handle or unparseable timestamp"
                    );
                    skipped_rows += 1;
                }
            }
        }

        let mut sessions: Vec<BonusSession> = earliest
            .into_iter()
            .map(|((handle, _day), start)| BonusSession {
                handle,
                start,
                end: start + Duration::minutes(SESSION_MINUTES),
            })
            .collect();
        sessions.sort_by(|a, b| a.start.cmp(&b.start).then_with(|| a.handle.cmp(&b.handle)));

        Ok(SessionBatch {
            sessions,
            skipped_rows,
        })
    }
}

/// Sheet handles arrive as typed, like `@AdaL ` with stray whitespace.
fn normalize_handle(raw: &str) -> String {
    raw.trim().trim_start_matches('@').to_string()
}

/// The sheet mixes RFC 3339 stamps with the spreadsheet's own
/// `YYYY-MM-DD HH:MM:SS` cells; the latter are taken as UTC.
fn parse_timestamp(raw: &str) -> Option<DateTime<Utc>> {
    let raw = raw.trim();
    if let Ok(ts) = DateTime::parse_from_rfc3339(raw) {
        return Some(ts.with_timezone(&Utc));
    }
    NaiveDateTime::parse_from_str(raw, "%Y-%m-%d %H:%M:%S")
        .ok()
        .map(|naive| naive.and_utc())
}
