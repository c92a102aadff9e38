use crate::calendar::Schedule;
use crate::error::Result;
use crate::feed::{EditSource, SessionBatch, SessionSource};
use crate::types::model::{BonusSession, EditAuthor, RawEdit};
use chrono::{Duration, NaiveTime};

use super::sessions::SESSION_MINUTES;

/// Built-in demo data for running the board without real exports. Fully
/// deterministic for a given schedule, so CLI output is assertable.
const SAMPLE_USERS: &[(&str, &str, &str)] = &[
    ("Ada Lovelace", "alovelace", "ada.lovelace@example.com"),
    ("Grace Hopper", "ghopper", "grace.hopper@example.com"),
    ("Margaret Hamilton", "mhamilton", "margaret.hamilton@example.com"),
    ("Katherine Johnson", "kjohnson", "katherine.johnson@example.com"),
    ("Dorothy Vaughan", "dvaughan", "dorothy.vaughan@example.com"),
    ("Mary Jackson", "mjackson", "mary.jackson@example.com"),
    ("Hedy Lamarr", "hlamarr", "hedy.lamarr@example.com"),
    ("Radia Perlman", "rperlman", "radia.perlman@example.com"),
    ("Annie Easley", "aeasley", "annie.easley@example.com"),
    ("Shafi Goldwasser", "sgoldwasser", "shafi.goldwasser@example.com"),
    ("John von Neumann", "jneumann", "john.neumann@example.com"),
    ("Vint Cerf", "vcerf", "vint.cerf@example.com"),
];

const SAMPLE_PAGES: &[(&str, &str)] = &[
    ("page-1", "How to Improve Your Workflow Skills"),
    ("page-2", "Documentation Best Practices"),
    ("page-3", "Advanced Coding Techniques"),
    ("page-4", "Onboarding New Support Engineers"),
    ("page-5", "How to Use the Ticketing API"),
    ("page-6", "Internal Tooling Guide"),
    ("page-7", "Customer Communication Guidelines"),
    ("page-8", "Incident Response Protocol"),
    ("page-9", "Product Troubleshooting"),
    ("page-10", "Performance Monitoring Runbook"),
];

/// (user index, sheet handle). The handles deliberately vary in shape so
/// the demo exercises the whole identity fallback chain: an exact key, a
/// squashed display name, a bare surname, and a first-initial form.
const SAMPLE_SESSIONS: &[(usize, &str)] = &[
    (1, "ghopper"),
    (0, "AdaLovelace"),
    (2, "Hamilton"),
    (3, "kjohnson"),
];

fn author(index: usize) -> EditAuthor {
    let (display_name, user_key, email) = SAMPLE_USERS[index % SAMPLE_USERS.len()];
    EditAuthor {
        display_name: display_name.to_string(),
        user_key: user_key.to_string(),
        email: Some(email.to_string()),
        avatar_url: format!("https://i.pravatar.cc/150?u={user_key}"),
    }
}

fn delta(seed: usize) -> u64 {
    ((seed * 37 + 13) % 391 + 10) as u64
}

fn sample_sessions(schedule: &Schedule) -> Vec<BonusSession> {
    let week2 = &schedule.contests[1];
    SAMPLE_SESSIONS
        .iter()
        .enumerate()
        .map(|(i, (_, handle))| {
            let start = week2.start + Duration::days(i as i64) + Duration::hours(9);
            BonusSession {
                handle: handle.to_string(),
                start,
                end: start + Duration::minutes(SESSION_MINUTES),
            }
        })
        .collect()
}

pub struct SampleSessionFeed;

impl SessionSource for SampleSessionFeed {
    fn collect(&self, schedule: &Schedule) -> Result<SessionBatch> {
        Ok(SessionBatch {
            sessions: sample_sessions(schedule),
            skipped_rows: 0,
        })
    }
}

pub struct SampleEditFeed {
    critical_pages: Vec<String>,
}

impl SampleEditFeed {
    pub fn new(critical_pages: Vec<String>) -> Self {
        Self { critical_pages }
    }
}

impl EditSource for SampleEditFeed {
    fn collect(&self, schedule: &Schedule) -> Result<Vec<RawEdit>> {
        let week1 = &schedule.contests[0];
        let week2 = &schedule.contests[1];
        let mut edits = Vec::new();

        for i in 0..30 {
            let (page_id, page_title) = SAMPLE_PAGES[i % SAMPLE_PAGES.len()];
            edits.push(RawEdit {
                id: format!("sample-week1-{i}"),
                page_id: page_id.to_string(),
                page_title: page_title.to_string(),
                page_url: format!("https://wiki.example.com/pages/{page_id}"),
                author: author(i),
                occurred_at: week1.start + Duration::minutes(i as i64 * 317),
                character_delta: delta(i),
                version: Some(2 + (i % 5) as u32),
            });
        }

        for i in 0..20 {
            let (page_id, page_title) = SAMPLE_PAGES[(i + 3) % SAMPLE_PAGES.len()];
            edits.push(RawEdit {
                id: format!("sample-week2-{i}"),
                page_id: page_id.to_string(),
                page_title: page_title.to_string(),
                page_url: format!("https://wiki.example.com/pages/{page_id}"),
                author: author(i + 5),
                occurred_at: week2.start + Duration::minutes(i as i64 * 211),
                character_delta: delta(i + 40),
                version: Some(2),
            });
        }

        // One edit fifteen minutes into every Focused Flow window.
        for (i, session) in sample_sessions(schedule).iter().enumerate() {
            let (user_index, _) = SAMPLE_SESSIONS[i];
            let (page_id, page_title) = SAMPLE_PAGES[i % SAMPLE_PAGES.len()];
            edits.push(RawEdit {
                id: format!("sample-flow-{i}"),
                page_id: page_id.to_string(),
                page_title: page_title.to_string(),
                page_url: format!("https://wiki.example.com/pages/{page_id}"),
                author: author(user_index),
                occurred_at: session.start + Duration::minutes(15),
                character_delta: delta(i + 70),
                version: Some(3),
            });
        }

        // Blitz-day edits on the critical pages.
        let mut critical: Vec<&String> = self.critical_pages.iter().collect();
        critical.sort();
        for (i, page_id) in critical.into_iter().enumerate() {
            let title = SAMPLE_PAGES
                .iter()
                .find(|(id, _)| *id == page_id.as_str())
                .map(|(_, title)| title.to_string())
                .unwrap_or_else(|| format!("Critical Page {page_id}"));
            let blitz_morning = schedule.blitz_date.and_time(NaiveTime::MIN).and_utc();
            edits.push(RawEdit {
                id: format!("sample-blitz-{i}"),
                page_id: page_id.clone(),
                page_title: title,
                page_url: format!("https://wiki.example.com/pages/{page_id}"),
                author: author(i),
                occurred_at: blitz_morning + Duration::hours(10 + i as i64),
                character_delta: delta(i + 100),
                version: Some(4),
            });
        }

        let overall = schedule.overall();
        edits.retain(|edit| overall.contains(edit.occurred_at));
        Ok(edits)
    }
}
