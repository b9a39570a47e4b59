use std::fmt;
use serde::{Deserialize, Serialize};

// ---------------------------------------------------------------------------
// Table selection
// ---------------------------------------------------------------------------

/// The set of multiplication tables the learner has picked.
///
/// Values are unique. Insertion order is kept for display only; generation
/// treats the selection as an unordered set.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TableSelection {
    tables: Vec<u32>,
}

impl TableSelection {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add `table` if absent, remove it if present.
    /// Returns `true` when the table is selected afterwards.
    pub fn toggle(&mut self, table: u32) -> bool {
        match self.tables.iter().position(|&t| t == table) {
            Some(idx) => {
                self.tables.remove(idx);
                false
            }
            None => {
                self.tables.push(table);
                true
            }
        }
    }

    pub fn contains(&self, table: u32) -> bool {
        self.tables.contains(&table)
    }

    pub fn len(&self) -> usize {
        self.tables.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tables.is_empty()
    }

    /// Tables in the order they were selected.
    pub fn as_slice(&self) -> &[u32] {
        &self.tables
    }

    pub fn iter(&self) -> impl Iterator<Item = u32> + '_ {
        self.tables.iter().copied()
    }
}

impl FromIterator<u32> for TableSelection {
    /// Duplicates are collapsed; the first occurrence keeps its position.
    fn from_iter<I: IntoIterator<Item = u32>>(iter: I) -> Self {
        let mut selection = TableSelection::new();
        for table in iter {
            if !selection.contains(table) {
                selection.tables.push(table);
            }
        }
        selection
    }
}

// ---------------------------------------------------------------------------
// Multiplier range
// ---------------------------------------------------------------------------

/// Inclusive range the second factor is drawn from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct MultiplierRange {
    pub min: u32,
    pub max: u32,
}

impl MultiplierRange {
    pub const fn new(min: u32, max: u32) -> Self {
        Self { min, max }
    }

    pub fn contains(self, value: u32) -> bool {
        (self.min..=self.max).contains(&value)
    }

    /// Number of multipliers in the range (0 when `min > max`).
    pub fn len(self) -> usize {
        if self.min > self.max {
            0
        } else {
            (self.max - self.min) as usize + 1
        }
    }

    pub fn is_empty(self) -> bool {
        self.len() == 0
    }
}

impl Default for MultiplierRange {
    fn default() -> Self {
        Self::new(1, 10)
    }
}

// ---------------------------------------------------------------------------
// Question / answers
// ---------------------------------------------------------------------------

/// One multiplication question. Immutable once generated.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Question {
    pub factor1: u32,
    pub factor2: u32,
    pub answer: u32,
}

impl Question {
    pub fn new(factor1: u32, factor2: u32) -> Self {
        Self { factor1, factor2, answer: factor1 * factor2 }
    }

    pub fn is_correct(&self, value: u32) -> bool {
        value == self.answer
    }
}

impl fmt::Display for Question {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} x {} = ?", self.factor1, self.factor2)
    }
}

/// Shuffled, distinct candidate answers shown for a question.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct AnswerOptionSet {
    values: Vec<u32>,
}

impl AnswerOptionSet {
    pub(crate) fn from_vec(values: Vec<u32>) -> Self {
        Self { values }
    }

    pub fn as_slice(&self) -> &[u32] {
        &self.values
    }

    pub fn iter(&self) -> impl Iterator<Item = u32> + '_ {
        self.values.iter().copied()
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    pub fn contains(&self, value: u32) -> bool {
        self.values.contains(&value)
    }
}

// ---------------------------------------------------------------------------
// Session phase
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Feedback {
    Correct,
    Incorrect,
}

impl Feedback {
    pub fn is_correct(self) -> bool {
        matches!(self, Feedback::Correct)
    }
}

impl fmt::Display for Feedback {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Feedback::Correct   => write!(f, "Correct!"),
            Feedback::Incorrect => write!(f, "Try again..."),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SessionPhase {
    Selecting,
    AwaitingAnswer,
    ShowingFeedback(Feedback),
}

impl SessionPhase {
    /// True for every phase reached after `start_session`.
    pub fn is_practicing(self) -> bool {
        !matches!(self, SessionPhase::Selecting)
    }

    /// Answer input is disabled while feedback is on screen.
    pub fn input_locked(self) -> bool {
        matches!(self, SessionPhase::ShowingFeedback(_))
    }
}

impl fmt::Display for SessionPhase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SessionPhase::Selecting          => write!(f, "Selecting"),
            SessionPhase::AwaitingAnswer     => write!(f, "Awaiting answer"),
            SessionPhase::ShowingFeedback(fb) => write!(f, "Showing feedback ({fb:?})"),
        }
    }
}

/// Read-only view of a session handed to renderers.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionSnapshot {
    pub phase: SessionPhase,
    pub selection: TableSelection,
    pub question: Option<Question>,
    pub options: Option<AnswerOptionSet>,
    pub input_locked: bool,
    pub practice_label: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn toggle_adds_then_removes() {
        let mut sel = TableSelection::new();
        assert!(sel.toggle(12));
        assert!(sel.toggle(15));
        assert_eq!(sel.as_slice(), &[12, 15]);
        assert!(!sel.toggle(12));
        assert_eq!(sel.as_slice(), &[15]);
    }

    #[test]
    fn from_iter_collapses_duplicates() {
        let sel: TableSelection = [14, 11, 14, 20, 11].into_iter().collect();
        assert_eq!(sel.as_slice(), &[14, 11, 20]);
    }

    #[test]
    fn question_prompt_and_answer() {
        let q = Question::new(13, 7);
        assert_eq!(q.answer, 91);
        assert_eq!(q.to_string(), "13 x 7 = ?");
        assert!(q.is_correct(91));
        assert!(!q.is_correct(90));
    }

    #[test]
    fn multiplier_range_len() {
        assert_eq!(MultiplierRange::new(1, 10).len(), 10);
        assert_eq!(MultiplierRange::new(5, 5).len(), 1);
        assert!(MultiplierRange::new(6, 5).is_empty());
    }

    #[test]
    fn feedback_text() {
        assert_eq!(Feedback::Correct.to_string(), "Correct!");
        assert_eq!(Feedback::Incorrect.to_string(), "Try again...");
    }
}
