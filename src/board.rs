use crate::calendar::{self, Schedule};
use crate::error::Result;
use crate::feed::{EditSource, SessionSource};
use crate::score;
use crate::types::config::CompetitionConfig;
use crate::types::model::{BonusSession, Contest, CriticalContentRule, LeaderboardRow, ScoredEdit};
use chrono::{DateTime, Utc};
use tracing::{debug, warn};

/// The query surface behind the CLI: owns the resolved schedule and the
/// two feeds, and holds the scored edits of the latest refresh.
pub struct Board {
    schedule: Schedule,
    rule: CriticalContentRule,
    min_character_delta: u64,
    edit_source: Box<dyn EditSource>,
    session_source: Option<Box<dyn SessionSource>>,
    scored: Vec<ScoredEdit>,
    sessions: Vec<BonusSession>,
    skipped_session_rows: usize,
}

impl Board {
    pub fn new(
        config: &CompetitionConfig,
        reference: DateTime<Utc>,
        edit_source: Box<dyn EditSource>,
        session_source: Option<Box<dyn SessionSource>>,
    ) -> Self {
        let schedule = calendar::schedule(config, reference);
        let rule = CriticalContentRule {
            page_ids: config.critical_content.page_ids.iter().cloned().collect(),
            blitz_date: schedule.blitz_date,
        };
        Self {
            schedule,
            rule,
            min_character_delta: config.scoring.min_character_delta,
            edit_source,
            session_source,
            scored: Vec::new(),
            sessions: Vec::new(),
            skipped_session_rows: 0,
        }
    }

    /// Re-pulls both feeds and re-reconciles. A broken edit feed is a hard
    /// error; a broken session feed only costs the Focused Flow bonuses,
    /// since edit scoring must not depend on session availability.
    pub fn refresh(&mut self) -> Result<()> {
        let mut edits = self.edit_source.collect(&self.schedule)?;
        if self.min_character_delta > 0 {
            edits.retain(|edit| edit.character_delta >= self.min_character_delta);
        }

        let batch = match &self.session_source {
            Some(source) => match source.collect(&self.schedule) {
                Ok(batch) => batch,
                Err(e) => {
                    warn!(error = %e, "session feed unavailable, scoring without bonuses");
                    Default::default()
                }
            },
            None => Default::default(),
        };

        debug!(
            edits = edits.len(),
            sessions = batch.sessions.len(),
            skipped = batch.skipped_rows,
            "reconciling"
        );
        self.scored = score::reconcile(&edits, &batch.sessions, &self.rule);
        self.sessions = batch.sessions;
        self.skipped_session_rows = batch.skipped_rows;
        Ok(())
    }

    pub fn contest(&self, name: &str) -> Option<&Contest> {
        self.schedule.contest(name)
    }

    pub fn standings(&self, contest: &Contest) -> Vec<LeaderboardRow> {
        score::aggregate::aggregate(&self.scored, contest)
    }

    pub fn scored_edits(&self) -> &[ScoredEdit] {
        &self.scored
    }

    pub fn sessions(&self) -> &[BonusSession] {
        &self.sessions
    }

    pub fn skipped_session_rows(&self) -> usize {
        self.skipped_session_rows
    }
}
