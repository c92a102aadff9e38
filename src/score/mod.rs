pub mod aggregate;
pub mod identity;

use crate::types::model::{Bonus, BonusSession, CriticalContentRule, RawEdit, ScoredEdit};

/// Resolves the multiplier for every raw edit. Pure: one output per input,
/// input order preserved, no hidden state.
///
/// An edit on a critical page on the blitz day scores 3x; an edit inside a
/// matching Focused Flow window scores 2x. Both bonuses are checked
/// independently and the higher multiplier is never downgraded. Anything
/// else, including a zero-delta edit, stays at 1x.
pub fn reconcile(
    edits: &[RawEdit],
    sessions: &[BonusSession],
    rule: &CriticalContentRule,
) -> Vec<ScoredEdit> {
    edits
        .iter()
        .map(|edit| {
            let mut multiplier = 1;
            let mut bonus = None;

            if rule.page_ids.contains(&edit.page_id)
                && edit.occurred_at.date_naive() == rule.blitz_date
            {
                multiplier = 3;
                bonus = Some(Bonus::CriticalContentBlitz);
            }

            let in_window = sessions.iter().any(|session| {
                session.start <= edit.occurred_at
                    && edit.occurred_at <= session.end
                    && identity::handle_matches_author(&session.handle, &edit.author)
            });
            if in_window && multiplier < 2 {
                multiplier = 2;
                bonus = Some(Bonus::FocusedFlow);
            }

            ScoredEdit {
                edit: edit.clone(),
                multiplier,
                bonus,
            }
        })
        .collect()
}
