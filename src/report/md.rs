use crate::report::BoardReport;

pub fn to_markdown(report: &BoardReport) -> String {
    let mut output = String::new();
    output.push_str(&format!("# Leaderboard: {}\n\n", report.contest));
    output.push_str(&format!(
        "{} to {}\n\n",
        report.start.format("%Y-%m-%d %H:%M UTC"),
        report.end.format("%Y-%m-%d %H:%M UTC")
    ));
    if !report.prize.is_empty() {
        output.push_str(&format!("Prize: {}\n\n", report.prize));
    }

    output.push_str("## Standings\n\n");
    if report.rows.is_empty() {
        output.push_str("- no qualifying edits yet\n");
    } else {
        for (rank, row) in report.rows.iter().enumerate() {
            output.push_str(&format!(
                "{}. {}: {} pts\n",
                rank + 1,
                row.display_name,
                row.total_points
            ));
        }
        if report.rows.len() < report.total_participants {
            output.push_str(&format!(
                "\n({} of {} participants shown)\n",
                report.rows.len(),
                report.total_participants
            ));
        }
    }

    output
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::model::{Contest, LeaderboardRow};

    fn report(rows: Vec<LeaderboardRow>, total: usize) -> BoardReport {
        let contest = Contest {
            name: "Overall".to_string(),
            start: "2025-11-19T16:00:00Z".parse().expect("valid instant"),
            end: "2025-12-05T01:00:00Z".parse().expect("valid instant"),
            prize: "$250 Grand Prize Drawing".to_string(),
        };
        BoardReport::new(&contest, rows, total)
    }

    #[test]
    fn markdown_report_lists_ranked_rows() {
        let rows = vec![
            LeaderboardRow {
                user_key: "u1".to_string(),
                display_name: "Ada Lovelace".to_string(),
                avatar_url: String::new(),
                total_points: 180,
            },
            LeaderboardRow {
                user_key: "u2".to_string(),
                display_name: "Grace Hopper".to_string(),
                avatar_url: String::new(),
                total_points: 40,
            },
        ];

        let rendered = to_markdown(&report(rows, 12));
        assert!(rendered.contains("# Leaderboard: Overall"));
        assert!(rendered.contains("1. Ada Lovelace: 180 pts"));
        assert!(rendered.contains("2. Grace Hopper: 40 pts"));
        assert!(rendered.contains("(2 of 12 participants shown)"));
    }

    #[test]
    fn markdown_report_handles_empty_board() {
        let rendered = to_markdown(&report(vec![], 0));
        assert!(rendered.contains("no qualifying edits yet"));
    }
}
