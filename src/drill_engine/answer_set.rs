//! Multiple-choice answer sets.
//!
//! Options are drawn from every product the selected tables can produce over
//! the multiplier range, so distractors always look plausible for the tables
//! being practised. The generator guarantees:
//!
//! - values are distinct (two tables producing the same product share one option)
//! - the correct answer appears exactly once
//! - the set never exceeds the configured display maximum
//! - order is shuffled, so the correct answer has no positional bias

use std::collections::HashSet;

use rand::Rng;
use tracing::{debug, warn};

use crate::drill_engine::{
    models::{AnswerOptionSet, MultiplierRange, Question, TableSelection},
    shuffle::shuffle,
};

/// Every distinct `table * multiplier` product, in first-seen order.
///
/// First-seen order keeps seeded runs reproducible; callers shuffle afterwards.
pub fn all_products(selection: &TableSelection, range: MultiplierRange) -> Vec<u32> {
    let mut seen = HashSet::new();
    let mut products = Vec::with_capacity(selection.len() * range.len());
    for table in selection.iter() {
        for multiplier in range.min..=range.max {
            let product = table * multiplier;
            if seen.insert(product) {
                products.push(product);
            }
        }
    }
    products
}

/// Build the option set shown for `question`.
///
/// # Panics
///
/// Panics if `max_display` is zero.
pub fn generate_answer_options<R: Rng>(
    rng: &mut R,
    question: &Question,
    selection: &TableSelection,
    range: MultiplierRange,
    max_display: usize,
) -> AnswerOptionSet {
    assert!(max_display > 0, "max_display must allow at least one option");

    let mut options = all_products(selection, range);
    let distinct = options.len();
    shuffle(&mut options, rng);

    repair_missing_answer(rng, &mut options, question.answer);
    truncate_keeping_answer(rng, &mut options, question.answer, max_display);

    debug!(distinct, shown = options.len(), "generated answer options");
    AnswerOptionSet::from_vec(options)
}

/// Put `answer` into `options` when it is missing.
///
/// Products come from the same tables and range as the question, so this
/// should never fire. Returns `true` if a repair was made.
pub(crate) fn repair_missing_answer<R: Rng>(
    rng: &mut R,
    options: &mut Vec<u32>,
    answer: u32,
) -> bool {
    if options.contains(&answer) {
        return false;
    }
    warn!(answer, len = options.len(), "correct answer missing from option set, repairing");

    let mut replaced = false;
    for _ in 0..options.len() * 2 {
        let idx = rng.gen_range(0..options.len());
        if options[idx] != answer {
            options[idx] = answer;
            replaced = true;
            break;
        }
    }
    if !replaced {
        options.push(answer);
    }
    shuffle(options, rng);
    true
}

/// Cut `options` down to `max_display`, swapping the answer back in if the
/// cut dropped it.
fn truncate_keeping_answer<R: Rng>(
    rng: &mut R,
    options: &mut Vec<u32>,
    answer: u32,
    max_display: usize,
) {
    if options.len() <= max_display {
        return;
    }
    options.truncate(max_display);
    if !options.contains(&answer) {
        let idx = rng.gen_range(0..options.len());
        options[idx] = answer;
        shuffle(options, rng);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::drill_engine::question::generate_question;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    fn count(options: &AnswerOptionSet, value: u32) -> usize {
        options.iter().filter(|&v| v == value).count()
    }

    fn assert_no_duplicates(options: &AnswerOptionSet) {
        let unique: HashSet<u32> = options.iter().collect();
        assert_eq!(unique.len(), options.len(), "duplicate option in {:?}", options);
    }

    #[test]
    fn single_table_products_are_its_multiples() {
        let selection: TableSelection = [10].into_iter().collect();
        let mut products = all_products(&selection, MultiplierRange::new(1, 10));
        products.sort_unstable();
        assert_eq!(products, vec![10, 20, 30, 40, 50, 60, 70, 80, 90, 100]);
    }

    #[test]
    fn shared_products_collapse_to_one_value() {
        // 10x6 = 12x5 = 15x4 = 60, 20x3 = 60 too.
        let selection: TableSelection = [10, 12, 15, 20].into_iter().collect();
        let products = all_products(&selection, MultiplierRange::new(1, 10));
        assert_eq!(products.iter().filter(|&&p| p == 60).count(), 1);
        assert!(products.len() < 40);
    }

    #[test]
    fn single_table_shows_every_multiple() {
        let mut rng = StdRng::seed_from_u64(5);
        let selection: TableSelection = [10].into_iter().collect();
        let range = MultiplierRange::new(1, 10);
        let q = Question::new(10, 4);
        let options = generate_answer_options(&mut rng, &q, &selection, range, 16);
        assert_eq!(options.len(), 10);
        assert_eq!(count(&options, 40), 1);
        assert_no_duplicates(&options);
    }

    #[test]
    fn all_tables_truncate_to_display_maximum() {
        let selection: TableSelection = (10..=40).collect();
        let range = MultiplierRange::new(1, 10);
        assert!(all_products(&selection, range).len() > 16);

        for seed in 0..200u64 {
            let mut rng = StdRng::seed_from_u64(seed);
            let q = generate_question(&mut rng, &selection, range);
            let options = generate_answer_options(&mut rng, &q, &selection, range, 16);
            assert_eq!(options.len(), 16, "seed={seed}");
            assert_eq!(count(&options, q.answer), 1, "seed={seed} answer={}", q.answer);
            assert_no_duplicates(&options);
        }
    }

    #[test]
    fn every_option_is_a_valid_product() {
        let selection: TableSelection = [13, 27, 31].into_iter().collect();
        let range = MultiplierRange::new(1, 10);
        let valid: HashSet<u32> = all_products(&selection, range).into_iter().collect();
        for seed in 0..50u64 {
            let mut rng = StdRng::seed_from_u64(seed);
            let q = generate_question(&mut rng, &selection, range);
            let options = generate_answer_options(&mut rng, &q, &selection, range, 16);
            for v in options.iter() {
                assert!(valid.contains(&v), "{v} is not a product of the selection");
            }
        }
    }

    #[test]
    fn correct_answer_position_varies() {
        let selection: TableSelection = [11].into_iter().collect();
        let range = MultiplierRange::new(1, 10);
        let q = Question::new(11, 5);
        let mut positions = HashSet::new();
        for seed in 0..100u64 {
            let mut rng = StdRng::seed_from_u64(seed);
            let options = generate_answer_options(&mut rng, &q, &selection, range, 16);
            positions.insert(options.as_slice().iter().position(|&v| v == q.answer));
        }
        assert!(positions.len() > 5, "answer stuck in {} positions", positions.len());
    }

    #[test]
    fn same_seed_gives_same_options() {
        let selection: TableSelection = (10..=20).collect();
        let range = MultiplierRange::new(1, 10);
        let q = Question::new(14, 3);
        let make = |seed| {
            let mut rng = StdRng::seed_from_u64(seed);
            generate_answer_options(&mut rng, &q, &selection, range, 16)
        };
        assert_eq!(make(8), make(8));
    }

    #[test]
    fn repair_overwrites_a_wrong_entry() {
        let mut rng = StdRng::seed_from_u64(2);
        let mut options = vec![10, 20, 30, 40];
        assert!(repair_missing_answer(&mut rng, &mut options, 99));
        assert_eq!(options.len(), 4);
        assert_eq!(options.iter().filter(|&&v| v == 99).count(), 1);
    }

    #[test]
    fn repair_appends_to_an_empty_set() {
        let mut rng = StdRng::seed_from_u64(2);
        let mut options = Vec::new();
        assert!(repair_missing_answer(&mut rng, &mut options, 42));
        assert_eq!(options, vec![42]);
    }

    #[test]
    fn repair_is_a_noop_when_answer_present() {
        let mut rng = StdRng::seed_from_u64(2);
        let mut options = vec![10, 20, 30];
        assert!(!repair_missing_answer(&mut rng, &mut options, 20));
        assert_eq!(options, vec![10, 20, 30]);
    }

    #[test]
    fn generated_sets_never_need_repair() {
        let range = MultiplierRange::new(1, 10);
        for seed in 0..100u64 {
            let mut rng = StdRng::seed_from_u64(seed);
            let tables: TableSelection = (10..=40).filter(|t| (t + seed as u32) % 3 == 0).collect();
            let q = generate_question(&mut rng, &tables, range);
            let mut products = all_products(&tables, range);
            assert!(
                !repair_missing_answer(&mut rng, &mut products, q.answer),
                "repair path triggered for seed={seed}"
            );
        }
    }
}
