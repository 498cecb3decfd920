//! Property tests for the incremental sorting algorithms.
//!
//! For every variant and arbitrary input:
//!
//! 1. Stepping terminates within the variant's step bound.
//! 2. The array is non-decreasing once finished.
//! 3. Stepping after completion changes nothing.
//! 4. Highlighted indices always lie inside the array.
//! 5. Reset returns every cursor to its initial value.
//! 6. Switching variants never carries cursor state over.
//! 7. Sorting permutes the input (same multiset of values).

use proptest::prelude::*;
use rand::rngs::StdRng;
use rand::SeedableRng;
use sortty::session::SortingSession;
use sortty::sort::{Algorithm, AlgorithmKind, StepArray, Stepper};

// ── Helpers ─────────────────────────────────────────────────────────────

fn values_strategy() -> impl Strategy<Value = Vec<u32>> {
    prop::collection::vec(0u32..=50, 0..40)
}

fn kind_strategy() -> impl Strategy<Value = AlgorithmKind> {
    prop_oneof![Just(AlgorithmKind::Bubble), Just(AlgorithmKind::Selection)]
}

/// Upper bound on step calls before `is_finished`, counting the finishing call
fn step_bound(kind: AlgorithmKind, n: usize) -> usize {
    match kind {
        AlgorithmKind::Bubble => n * n.saturating_sub(1) / 2 + n,
        AlgorithmKind::Selection => n,
    }
}

/// Step to completion, checking highlight bounds along the way
fn run_checked(
    kind: AlgorithmKind,
    array: &mut StepArray,
) -> Result<(Algorithm, usize), TestCaseError> {
    let mut algorithm = Algorithm::new(kind, array);
    let bound = step_bound(kind, array.len());
    let mut steps = 0;

    while !algorithm.is_finished() {
        if let Some((i, j)) = algorithm.current_indices(array.len()) {
            prop_assert!(i < array.len() && j < array.len(), "({}, {}) out of bounds", i, j);
        }
        prop_assert!(steps < bound, "{:?} exceeded {} steps", kind, bound);
        algorithm.step(array);
        steps += 1;
    }
    Ok((algorithm, steps))
}

// ═════════════════════════════════════════════════════════════════════════
// 1-4. Termination, sortedness, idempotence, bounds
// ═════════════════════════════════════════════════════════════════════════

proptest! {
    #[test]
    fn terminates_sorted(kind in kind_strategy(), values in values_strategy()) {
        let mut array = StepArray::from_values(values.clone(), 50);
        let (_, steps) = run_checked(kind, &mut array)?;

        prop_assert!(steps <= step_bound(kind, values.len()));
        prop_assert!(array.is_sorted(), "{:?} left {:?}", kind, array.values());
    }

    #[test]
    fn step_after_finish_is_noop(kind in kind_strategy(), values in values_strategy()) {
        let mut array = StepArray::from_values(values, 50);
        let (mut algorithm, _) = run_checked(kind, &mut array)?;

        let before = (array.clone(), algorithm.clone());
        for _ in 0..3 {
            algorithm.step(&mut array);
        }

        prop_assert!(algorithm.is_finished());
        prop_assert_eq!(before, (array, algorithm));
    }

    #[test]
    fn sorting_is_a_permutation(kind in kind_strategy(), values in values_strategy()) {
        let mut array = StepArray::from_values(values.clone(), 50);
        run_checked(kind, &mut array)?;

        let mut expected = values;
        expected.sort_unstable();
        prop_assert_eq!(array.values(), expected.as_slice());
    }
}

// ═════════════════════════════════════════════════════════════════════════
// 5. Reset purity
// ═════════════════════════════════════════════════════════════════════════

proptest! {
    #[test]
    fn reset_restores_initial_cursors(
        kind in kind_strategy(),
        values in prop::collection::vec(0u32..=50, 1..40),
        partial in 0usize..200,
    ) {
        let mut array = StepArray::from_values(values, 50);
        let mut algorithm = Algorithm::new(kind, &array);
        for _ in 0..partial {
            algorithm.step(&mut array);
        }

        algorithm.reset(&array);

        prop_assert!(!algorithm.is_finished());
        prop_assert_eq!(algorithm, Algorithm::new(kind, &array));
    }
}

// ═════════════════════════════════════════════════════════════════════════
// 6. Switch isolation
// ═════════════════════════════════════════════════════════════════════════

proptest! {
    #[test]
    fn switch_starts_from_scratch(
        from in kind_strategy(),
        to in kind_strategy(),
        seed in any::<u64>(),
        partial in 0usize..100,
    ) {
        let array = StepArray::random(20, 30, &mut StdRng::seed_from_u64(seed));
        let mut session = SortingSession::with_array(from, array, seed);
        for _ in 0..partial {
            session.step();
        }

        session.switch_algorithm(to);

        prop_assert_eq!(session.kind(), to);
        prop_assert_eq!(session.steps(), 0);
        prop_assert!(!session.is_finished());
        prop_assert_eq!(session.algorithm(), &Algorithm::new(to, session.array()));
    }
}

// ── Scenarios ───────────────────────────────────────────────────────────

#[test]
fn bubble_first_step_scenario() {
    let mut array = StepArray::from_values(vec![5, 3, 4, 1, 2], 5);
    let mut algorithm = Algorithm::new(AlgorithmKind::Bubble, &array);

    algorithm.step(&mut array);

    assert_eq!(array.values(), &[3, 5, 4, 1, 2]);
    assert_eq!(algorithm.current_indices(array.len()), Some((1, 2)));
}

#[test]
fn selection_first_step_scenario() {
    let mut array = StepArray::from_values(vec![5, 3, 4, 1, 2], 5);
    let mut algorithm = Algorithm::new(AlgorithmKind::Selection, &array);

    algorithm.step(&mut array);

    assert_eq!(array.values(), &[1, 3, 4, 5, 2]);
    assert_eq!(algorithm.current_indices(array.len()), Some((1, 1)));
}

#[test]
fn empty_array_needs_no_steps() {
    for kind in AlgorithmKind::ALL {
        let array = StepArray::from_values(Vec::new(), 5);
        let algorithm = Algorithm::new(kind, &array);

        assert!(algorithm.is_finished(), "{:?}", kind);
        assert_eq!(algorithm.current_indices(0), None);
    }
}
