use crate::report::BoardReport;

pub fn to_json(report: &BoardReport) -> Result<String, serde_json::Error> {
    serde_json::to_string_pretty(report)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::model::{Contest, LeaderboardRow};

    #[test]
    fn json_report_carries_rows_and_contest_name() {
        let contest = Contest {
            name: "Week 1".to_string(),
            start: "2025-11-19T16:00:00Z".parse().expect("valid instant"),
            end: "2025-11-26T15:59:59.999Z".parse().expect("valid instant"),
            prize: "Three $100 Prizes for Top Editors!".to_string(),
        };
        let rows = vec![LeaderboardRow {
            user_key: "alovelace".to_string(),
            display_name: "Ada Lovelace".to_string(),
            avatar_url: String::new(),
            total_points: 150,
        }];

        let rendered =
            to_json(&BoardReport::new(&contest, rows, 1)).expect("json should serialize");
        assert!(rendered.contains("\"contest\": \"Week 1\""));
        assert!(rendered.contains("\"total_points\": 150"));
        assert!(rendered.contains("\"total_participants\": 1"));
    }
}
