use crate::types::config::{CalendarMode, CompetitionConfig};
use crate::types::model::Contest;
use chrono::{DateTime, Datelike, Duration, NaiveDate, NaiveTime, Utc};

pub const WEEK_1: &str = "Week 1";
pub const WEEK_2: &str = "Week 2";
pub const OVERALL: &str = "Overall";

/// The three scoring periods plus the blitz day, resolved once per run.
#[derive(Debug, Clone)]
pub struct Schedule {
    pub contests: Vec<Contest>,
    pub blitz_date: NaiveDate,
}

impl Schedule {
    pub fn contest(&self, name: &str) -> Option<&Contest> {
        self.contests.iter().find(|contest| contest.name == name)
    }

    /// The period spanning the whole competition, used to bound feed
    /// collection.
    pub fn overall(&self) -> &Contest {
        &self.contests[2]
    }
}

/// Resolves the contest calendar for a reference instant. Deterministic:
/// the same instant and mode always produce the same schedule, and the
/// three contests always come out in Week 1, Week 2, Overall order.
pub fn schedule(config: &CompetitionConfig, reference: DateTime<Utc>) -> Schedule {
    match config.contest.mode {
        CalendarMode::Fixed => fixed_schedule(config),
        CalendarMode::Rolling => rolling_schedule(config, reference),
    }
}

fn fixed_schedule(config: &CompetitionConfig) -> Schedule {
    let windows = [
        (WEEK_1, &config.contest.week1),
        (WEEK_2, &config.contest.week2),
        (OVERALL, &config.contest.overall),
    ];
    let contests = windows
        .into_iter()
        .map(|(name, window)| Contest {
            name: name.to_string(),
            start: window.start,
            end: window.end,
            prize: window.prize.clone(),
        })
        .collect();

    Schedule {
        contests,
        blitz_date: config.critical_content.blitz_date,
    }
}

/// Week 2 is the UTC calendar week containing the reference instant
/// (Sunday 00:00:00.000 through Saturday 23:59:59.999), Week 1 the week
/// before, and Overall spans seventeen calendar days from Week 1's start.
/// The blitz lands on the day after Week 1 starts, its Monday.
fn rolling_schedule(config: &CompetitionConfig, reference: DateTime<Utc>) -> Schedule {
    let reference_date = reference.date_naive();
    let days_from_sunday = i64::from(reference_date.weekday().num_days_from_sunday());

    let week2_start = reference_date - Duration::days(days_from_sunday);
    let week1_start = week2_start - Duration::days(7);

    let contests = vec![
        Contest {
            name: WEEK_1.to_string(),
            start: start_of_day(week1_start),
            end: end_of_day(week1_start + Duration::days(6)),
            prize: config.contest.week1.prize.clone(),
        },
        Contest {
            name: WEEK_2.to_string(),
            start: start_of_day(week2_start),
            end: end_of_day(week2_start + Duration::days(6)),
            prize: config.contest.week2.prize.clone(),
        },
        Contest {
            name: OVERALL.to_string(),
            start: start_of_day(week1_start),
            end: end_of_day(week1_start + Duration::days(16)),
            prize: config.contest.overall.prize.clone(),
        },
    ];

    Schedule {
        contests,
        blitz_date: week1_start + Duration::days(1),
    }
}

fn start_of_day(date: NaiveDate) -> DateTime<Utc> {
    date.and_time(NaiveTime::MIN).and_utc()
}

fn end_of_day(date: NaiveDate) -> DateTime<Utc> {
    let last_milli = NaiveTime::from_hms_milli_opt(23, 59, 59, 999).unwrap_or(NaiveTime::MIN);
    date.and_time(last_milli).and_utc()
}
