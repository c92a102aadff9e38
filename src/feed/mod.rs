pub mod edits;
pub mod sample;
pub mod sessions;

use crate::calendar::Schedule;
use crate::error::Result;
use crate::types::model::{BonusSession, RawEdit};

/// Produces normalized edits for the competition window. Implementations
/// exclude page-creation versions, which carry nothing to diff against.
pub trait EditSource {
    fn collect(&self, schedule: &Schedule) -> Result<Vec<RawEdit>>;
}

/// Produces the deduplicated Focused Flow windows.
pub trait SessionSource {
    fn collect(&self, schedule: &Schedule) -> Result<SessionBatch>;
}

/// Parsed sessions plus the number of sheet rows that had to be skipped.
#[derive(Debug, Default)]
pub struct SessionBatch {
    pub sessions: Vec<BonusSession>,
    pub skipped_rows: usize,
}
