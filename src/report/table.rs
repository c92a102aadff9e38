use crate::report::BoardReport;

pub fn to_table(report: &BoardReport) -> String {
    let mut output = String::new();
    output.push_str(&format!(
        "{}  ({} to {})\n",
        report.contest,
        report.start.format("%Y-%m-%d %H:%M UTC"),
        report.end.format("%Y-%m-%d %H:%M UTC")
    ));
    if !report.prize.is_empty() {
        output.push_str(&format!("prize: {}\n", report.prize));
    }
    output.push('\n');

    if report.rows.is_empty() {
        output.push_str("no qualifying edits yet\n");
        return output;
    }

    let name_width = report
        .rows
        .iter()
        .map(|row| row.display_name.len())
        .max()
        .unwrap_or(0)
        .max("editor".len());

    output.push_str(&format!("{:>4}  {:<name_width$}  {:>8}\n", "rank", "editor", "points"));
    for (rank, row) in report.rows.iter().enumerate() {
        output.push_str(&format!(
            "{:>4}  {:<name_width$}  {:>8}\n",
            rank + 1,
            row.display_name,
            row.total_points
        ));
    }
    if report.rows.len() < report.total_participants {
        output.push_str(&format!(
            "\n{} of {} participants shown\n",
            report.rows.len(),
            report.total_participants
        ));
    }

    output
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::model::{Contest, LeaderboardRow};

    #[test]
    fn table_report_aligns_rank_and_points() {
        let contest = Contest {
            name: "Week 2".to_string(),
            start: "2025-11-26T16:00:00Z".parse().expect("valid instant"),
            end: "2025-12-05T01:00:00Z".parse().expect("valid instant"),
            prize: String::new(),
        };
        let rows = vec![LeaderboardRow {
            user_key: "u1".to_string(),
            display_name: "Ada Lovelace".to_string(),
            avatar_url: String::new(),
            total_points: 1234,
        }];

        let rendered = to_table(&BoardReport::new(&contest, rows, 1));
        assert!(rendered.starts_with("Week 2"));
        assert!(rendered.contains("rank"));
        assert!(rendered.contains("Ada Lovelace"));
        assert!(rendered.contains("1234"));
    }
}
