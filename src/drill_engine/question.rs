use rand::Rng;
use tracing::debug;

use crate::drill_engine::models::{MultiplierRange, Question, TableSelection};

/// Pick a random table from `selection` and a random multiplier from `range`.
///
/// # Panics
///
/// Panics if `selection` is empty or `range` is empty. Both are caller bugs:
/// the session refuses to start without a table and config validation
/// rejects inverted ranges.
pub fn generate_question<R: Rng>(
    rng: &mut R,
    selection: &TableSelection,
    range: MultiplierRange,
) -> Question {
    assert!(!selection.is_empty(), "cannot generate a question from an empty table selection");
    assert!(!range.is_empty(), "multiplier range {}..={} is empty", range.min, range.max);

    let tables = selection.as_slice();
    let factor1 = tables[rng.gen_range(0..tables.len())];
    let factor2 = rng.gen_range(range.min..=range.max);
    let question = Question::new(factor1, factor2);

    debug!(factor1, factor2, answer = question.answer, "new question");
    question
}
