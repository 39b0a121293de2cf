// src/history.rs

use serde::Serialize;

use crate::outcome::EvaluationOutcome;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct HistoryEntry {
    pub input: String,
    pub outcome: EvaluationOutcome,
}

/// Append-only record of every evaluation attempt, oldest first.
/// Entries are never edited or removed one at a time; only `clear` empties it.
#[derive(Debug, Default, Clone)]
pub struct History {
    entries: Vec<HistoryEntry>,
}

impl History {
    pub fn new() -> Self {
        History { entries: Vec::new() }
    }

    pub fn record(&mut self, input: &str, outcome: EvaluationOutcome) {
        self.entries.push(HistoryEntry { input: input.to_string(), outcome });
    }

    /// The last `limit` entries in chronological order, or all of them.
    pub fn entries(&self, limit: Option<usize>) -> &[HistoryEntry] {
        match limit {
            Some(n) => &self.entries[self.entries.len().saturating_sub(n)..],
            None => &self.entries,
        }
    }

    pub fn clear(&mut self) {
        self.entries.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn filled() -> History {
        let mut history = History::new();
        history.record("1+1", EvaluationOutcome::Value(2.0));
        history.record("2+2", EvaluationOutcome::Value(4.0));
        history.record("3+3", EvaluationOutcome::Value(6.0));
        history
    }

    #[test]
    fn test_order_is_insertion_order() {
        let history = filled();
        let inputs: Vec<&str> = history.entries(None).iter().map(|e| e.input.as_str()).collect();
        assert_eq!(inputs, vec!["1+1", "2+2", "3+3"]);
    }

    #[test]
    fn test_limit() {
        let history = filled();
        let last_two: Vec<&str> =
            history.entries(Some(2)).iter().map(|e| e.input.as_str()).collect();
        assert_eq!(last_two, vec!["2+2", "3+3"]);
        assert_eq!(history.entries(Some(10)).len(), 3);
        assert!(history.entries(Some(0)).is_empty());
    }

    #[test]
    fn test_clear() {
        let mut history = filled();
        history.clear();
        assert!(history.entries(None).is_empty());
        assert!(history.entries(Some(1)).is_empty());
    }
}
