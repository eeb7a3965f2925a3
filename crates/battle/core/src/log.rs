//! Bounded, most-recent-first history of battle messages.

use arrayvec::ArrayVec;

use crate::config::BattleConfig;
use crate::engine::TurnOutcome;

/// Human-readable battle history.
///
/// Entries are ordered most-recent-first. The log holds at most
/// [`BattleConfig::LOG_CAPACITY`] lines; pushing into a full log evicts the
/// oldest line.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct BattleLog {
    entries: ArrayVec<String, { BattleConfig::LOG_CAPACITY }>,
}

impl BattleLog {
    pub fn new() -> Self {
        Self {
            entries: ArrayVec::new(),
        }
    }

    /// Adds one line as the most recent entry.
    pub fn push(&mut self, line: impl Into<String>) {
        if self.entries.is_full() {
            self.entries.pop();
        }
        self.entries.insert(0, line.into());
    }

    /// Appends every message of a resolved turn, in order.
    pub fn record(&mut self, outcome: &TurnOutcome) {
        for line in outcome.messages() {
            self.push(line);
        }
    }

    /// Entries, most recent first.
    pub fn entries(&self) -> &[String] {
        &self.entries
    }

    pub fn latest(&self) -> Option<&str> {
        self.entries.first().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn to_vec(&self) -> Vec<String> {
        self.entries.to_vec()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn newest_line_comes_first() {
        let mut log = BattleLog::new();
        log.push("first");
        log.push("second");
        assert_eq!(log.entries(), ["second", "first"]);
        assert_eq!(log.latest(), Some("second"));
    }

    #[test]
    fn oldest_lines_are_evicted_at_capacity() {
        let mut log = BattleLog::new();
        for i in 0..12 {
            log.push(format!("line {i}"));
        }
        assert_eq!(log.len(), BattleConfig::LOG_CAPACITY);
        assert_eq!(log.latest(), Some("line 11"));
        assert_eq!(log.entries().last().map(String::as_str), Some("line 4"));
    }
}
