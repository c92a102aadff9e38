use crate::types::model::{Contest, LeaderboardRow, ScoredEdit};
use std::collections::HashMap;

/// Ranks users for one contest period. Filters to edits inside the
/// contest window (inclusive at both ends), sums `delta * multiplier` per
/// stable author key, and sorts descending by total. The sort is stable,
/// so tied users keep first-seen order. Returns the full list; top-N
/// truncation is the caller's presentation concern.
///
/// The feeds can carry stale profile copies, so each group keeps the most
/// recently seen display name and avatar.
pub fn aggregate(scored: &[ScoredEdit], contest: &Contest) -> Vec<LeaderboardRow> {
    let mut rows: Vec<LeaderboardRow> = Vec::new();
    let mut index_by_key: HashMap<String, usize> = HashMap::new();

    for entry in scored {
        if !contest.contains(entry.edit.occurred_at) {
            continue;
        }

        let author = &entry.edit.author;
        let index = *index_by_key
            .entry(author.user_key.clone())
            .or_insert_with(|| {
                rows.push(LeaderboardRow {
                    user_key: author.user_key.clone(),
                    display_name: author.display_name.clone(),
                    avatar_url: author.avatar_url.clone(),
                    total_points: 0,
                });
                rows.len() - 1
            });

        let row = &mut rows[index];
        row.total_points += entry.effective_points();
        row.display_name.clone_from(&author.display_name);
        row.avatar_url.clone_from(&author.avatar_url);
    }

    rows.sort_by(|a, b| b.total_points.cmp(&a.total_points));
    rows
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::model::{EditAuthor, RawEdit};
    use chrono::{DateTime, Utc};

    fn instant(s: &str) -> DateTime<Utc> {
        s.parse().expect("test instant should parse")
    }

    fn contest() -> Contest {
        Contest {
            name: "Week 1".to_string(),
            start: instant("2024-12-01T00:00:00Z"),
            end: instant("2024-12-07T23:59:59.999Z"),
            prize: String::new(),
        }
    }

    fn scored(user_key: &str, name: &str, at: &str, delta: u64, multiplier: u32) -> ScoredEdit {
        ScoredEdit {
            edit: RawEdit {
                id: format!("{user_key}-{at}"),
                page_id: "P1".to_string(),
                page_title: "Page".to_string(),
                page_url: String::new(),
                author: EditAuthor {
                    display_name: name.to_string(),
                    user_key: user_key.to_string(),
                    email: None,
                    avatar_url: format!("https://example.invalid/{user_key}.png"),
                },
                occurred_at: instant(at),
                character_delta: delta,
                version: Some(2),
            },
            multiplier,
            bonus: None,
        }
    }

    #[test]
    fn totals_match_hand_computed_sums_per_user() {
        let edits = [
            scored("u1", "Ada", "2024-12-02T10:00:00Z", 50, 3),
            scored("u2", "Grace", "2024-12-02T11:00:00Z", 20, 2),
            scored("u1", "Ada", "2024-12-03T09:00:00Z", 30, 1),
        ];

        let rows = aggregate(&edits, &contest());
        assert_eq!(rows.len(), 2);
        assert_eq!(rows[0].user_key, "u1");
        assert_eq!(rows[0].total_points, 180);
        assert_eq!(rows[1].user_key, "u2");
        assert_eq!(rows[1].total_points, 40);
    }

    #[test]
    fn window_is_inclusive_and_a_microsecond_past_the_end_is_out() {
        let c = contest();
        let edits = [
            scored("u1", "Ada", "2024-12-01T00:00:00Z", 10, 1),
            scored("u2", "Grace", "2024-12-07T23:59:59.999Z", 10, 1),
            scored("u3", "Margaret", "2024-12-07T23:59:59.999001Z", 10, 1),
            scored("u4", "Vint", "2024-11-30T23:59:59.999Z", 10, 1),
        ];

        let rows = aggregate(&edits, &c);
        let keys: Vec<&str> = rows.iter().map(|row| row.user_key.as_str()).collect();
        assert_eq!(keys, ["u1", "u2"]);
    }

    #[test]
    fn ties_keep_first_seen_order() {
        let edits = [
            scored("u2", "Grace", "2024-12-02T10:00:00Z", 25, 1),
            scored("u1", "Ada", "2024-12-02T11:00:00Z", 25, 1),
            scored("u3", "Margaret", "2024-12-02T12:00:00Z", 40, 1),
        ];

        let rows = aggregate(&edits, &contest());
        let keys: Vec<&str> = rows.iter().map(|row| row.user_key.as_str()).collect();
        assert_eq!(keys, ["u3", "u2", "u1"]);
    }

    #[test]
    fn most_recently_seen_profile_wins_within_a_group() {
        let edits = [
            scored("u1", "A. Lovelace", "2024-12-02T10:00:00Z", 10, 1),
            scored("u1", "Ada Lovelace", "2024-12-03T10:00:00Z", 10, 1),
        ];

        let rows = aggregate(&edits, &contest());
        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0].display_name, "Ada Lovelace");
    }

    #[test]
    fn empty_input_yields_empty_board() {
        assert!(aggregate(&[], &contest()).is_empty());
    }
}
