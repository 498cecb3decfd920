//! Incremental sorting algorithms
//!
//! Every algorithm here is a *stepper*: instead of sorting an array in one call,
//! it performs one bounded unit of work per [`Stepper::step`] and keeps its
//! progress in a handful of cursors. The run loop calls `step` once per tick,
//! which turns an O(n²) in-memory sort into an animation.
//!
//! - [`array`]: the [`StepArray`] being sorted
//! - [`bubble`]: one comparison (and possibly one swap) per step
//! - [`selection`]: one full minimum scan and swap per step
//!
//! The set of algorithms is closed: [`Algorithm`] is an enum over the variants
//! and dispatches with a `match`. Adding a variant means adding an
//! [`AlgorithmKind`] tag, a struct implementing [`Stepper`], and one arm per
//! method below.

pub mod array;
pub mod bubble;
pub mod selection;

pub use array::StepArray;
pub use bubble::BubbleSort;
pub use selection::SelectionSort;

use std::fmt;

/// The contract every algorithm variant implements
pub trait Stepper {
    /// Perform the smallest unit of progress. A no-op once finished.
    fn step(&mut self, array: &mut StepArray);

    fn is_finished(&self) -> bool;

    /// Return all cursors to the start of a fresh pass over `array`
    fn reset(&mut self, array: &StepArray);

    /// The pair of positions under consideration, for highlighting.
    ///
    /// Both indices are always `< len`; `None` when nothing is being compared.
    fn current_indices(&self, len: usize) -> Option<(usize, usize)>;
}

/// Tag naming an algorithm variant
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, clap::ValueEnum)]
pub enum AlgorithmKind {
    #[default]
    Bubble,
    Selection,
}

impl AlgorithmKind {
    pub const ALL: [AlgorithmKind; 2] = [AlgorithmKind::Bubble, AlgorithmKind::Selection];

    pub fn name(self) -> &'static str {
        match self {
            AlgorithmKind::Bubble => "Bubble",
            AlgorithmKind::Selection => "Selection",
        }
    }
}

impl fmt::Display for AlgorithmKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// One algorithm instance with its progress state
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Algorithm {
    Bubble(BubbleSort),
    Selection(SelectionSort),
}

impl Algorithm {
    /// Build a fresh instance of `kind`, reset against `array`
    pub fn new(kind: AlgorithmKind, array: &StepArray) -> Self {
        let mut algorithm = match kind {
            AlgorithmKind::Bubble => Algorithm::Bubble(BubbleSort::new()),
            AlgorithmKind::Selection => Algorithm::Selection(SelectionSort::new()),
        };
        algorithm.reset(array);
        algorithm
    }

    pub fn kind(&self) -> AlgorithmKind {
        match self {
            Algorithm::Bubble(_) => AlgorithmKind::Bubble,
            Algorithm::Selection(_) => AlgorithmKind::Selection,
        }
    }
}

impl Stepper for Algorithm {
    fn step(&mut self, array: &mut StepArray) {
        match self {
            Algorithm::Bubble(inner) => inner.step(array),
            Algorithm::Selection(inner) => inner.step(array),
        }
    }

    fn is_finished(&self) -> bool {
        match self {
            Algorithm::Bubble(inner) => inner.is_finished(),
            Algorithm::Selection(inner) => inner.is_finished(),
        }
    }

    fn reset(&mut self, array: &StepArray) {
        match self {
            Algorithm::Bubble(inner) => inner.reset(array),
            Algorithm::Selection(inner) => inner.reset(array),
        }
    }

    fn current_indices(&self, len: usize) -> Option<(usize, usize)> {
        match self {
            Algorithm::Bubble(inner) => inner.current_indices(len),
            Algorithm::Selection(inner) => inner.current_indices(len),
        }
    }
}
