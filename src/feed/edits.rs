use crate::calendar::Schedule;
use crate::error::{BoardError, Result};
use crate::feed::EditSource;
use crate::types::model::RawEdit;
use std::path::PathBuf;

/// Edit collector backed by a JSON export of page-version history, the
/// shape the Confluence-side collector writes. One object per version
/// transition.
pub struct FileEditFeed {
    path: PathBuf,
}

impl FileEditFeed {
    pub fn new(path: PathBuf) -> Self {
        Self { path }
    }
}

impl EditSource for FileEditFeed {
    fn collect(&self, schedule: &Schedule) -> Result<Vec<RawEdit>> {
        let content = std::fs::read_to_string(&self.path)
            .map_err(|e| BoardError::EditFeed(self.path.display().to_string(), e.to_string()))?;
        let edits: Vec<RawEdit> = serde_json::from_str(&content)
            .map_err(|e| BoardError::EditFeed(self.path.display().to_string(), e.to_string()))?;

        let overall = schedule.overall();
        let collected = edits
            .into_iter()
            .filter(|edit| edit.version != Some(1))
            .filter(|edit| overall.contains(edit.occurred_at))
            .collect();
        Ok(collected)
    }
}
