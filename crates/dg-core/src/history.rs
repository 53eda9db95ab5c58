//! Round history and export.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::scoring::Category;

/// One played round.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RoundRecord {
    /// Round number, starting at 1.
    pub round: u32,
    /// Face values in die order.
    pub roll: Vec<i32>,
    /// Sum of the roll.
    pub sum: i64,
    /// The matched scoring category.
    pub category: Category,
    /// Points awarded for the round.
    pub points: i64,
}

impl std::fmt::Display for RoundRecord {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "Round {}: {} = {} ({}, {} points)",
            self.round,
            join_faces(&self.roll),
            self.sum,
            self.category,
            self.points
        )
    }
}

/// A chronological log of the rounds in one session.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct History {
    started_at: DateTime<Utc>,
    rounds: Vec<RoundRecord>,
}

impl Default for History {
    fn default() -> Self {
        Self::new()
    }
}

impl History {
    /// Create an empty history stamped with the current time.
    pub fn new() -> Self {
        Self {
            started_at: Utc::now(),
            rounds: Vec::new(),
        }
    }

    /// When the session started.
    pub fn started_at(&self) -> DateTime<Utc> {
        self.started_at
    }

    /// Append a round.
    pub fn append(&mut self, record: RoundRecord) {
        self.rounds.push(record);
    }

    /// All rounds, oldest first.
    pub fn rounds(&self) -> &[RoundRecord] {
        &self.rounds
    }

    /// The most recent round.
    pub fn last(&self) -> Option<&RoundRecord> {
        self.rounds.last()
    }

    /// Number of rounds.
    pub fn len(&self) -> usize {
        self.rounds.len()
    }

    /// Whether no rounds have been played.
    pub fn is_empty(&self) -> bool {
        self.rounds.is_empty()
    }

    /// Export the history as pretty-printed JSON.
    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }

    /// Export the rounds as a markdown table.
    pub fn to_markdown(&self) -> String {
        let mut out = String::from("# Dice Game History\n\n");
        if self.rounds.is_empty() {
            out.push_str("*No rounds played.*\n");
            return out;
        }
        out.push_str("| Round | Roll | Sum | Category | Points |\n");
        out.push_str("|---|---|---|---|---|\n");
        for r in &self.rounds {
            out.push_str(&format!(
                "| {} | {} | {} | {} | {} |\n",
                r.round,
                join_faces(&r.roll),
                r.sum,
                r.category,
                r.points
            ));
        }
        out
    }
}

fn join_faces(roll: &[i32]) -> String {
    roll.iter()
        .map(|v| v.to_string())
        .collect::<Vec<_>>()
        .join(", ")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(round: u32, roll: &[i32], category: Category, points: i64) -> RoundRecord {
        RoundRecord {
            round,
            roll: roll.to_vec(),
            sum: crate::scoring::roll_sum(roll),
            category,
            points,
        }
    }

    #[test]
    fn append_and_query() {
        let mut history = History::new();
        assert!(history.is_empty());
        assert!(history.last().is_none());

        history.append(record(1, &[4, 4, 4], Category::AllSame, 72));
        history.append(record(2, &[1, 3, 5], Category::AllDifferent, 9));

        assert_eq!(history.len(), 2);
        assert_eq!(history.last().map(|r| r.round), Some(2));
        assert_eq!(history.rounds()[0].points, 72);
    }

    #[test]
    fn record_display() {
        let r = record(3, &[2, 2, 5], Category::NMinusOne, 49);
        assert_eq!(r.to_string(), "Round 3: 2, 2, 5 = 9 (N Minus One, 49 points)");
    }

    #[test]
    fn markdown_export() {
        let mut history = History::new();
        history.append(record(1, &[4, 4, 4], Category::AllSame, 72));
        history.append(record(2, &[1, 1, 2, 3], Category::NoScore, 0));

        insta::assert_snapshot!(history.to_markdown(), @r"
        # Dice Game History

        | Round | Roll | Sum | Category | Points |
        |---|---|---|---|---|
        | 1 | 4, 4, 4 | 12 | All Same | 72 |
        | 2 | 1, 1, 2, 3 | 7 | No Score | 0 |
        ");
    }

    #[test]
    fn markdown_export_empty() {
        let md = History::new().to_markdown();
        assert!(md.contains("No rounds played"));
    }

    #[test]
    fn json_export_roundtrips() {
        let mut history = History::new();
        history.append(record(1, &[2, 3, 4], Category::Run, 29));

        let json = history.to_json().unwrap();
        assert!(json.contains("\"category\": \"run\""));

        let back: History = serde_json::from_str(&json).unwrap();
        assert_eq!(back.rounds(), history.rounds());
        assert_eq!(back.started_at(), history.started_at());
    }
}
