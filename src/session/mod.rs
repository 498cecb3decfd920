//! Sorting session: one array bound to one algorithm
//!
//! A [`SortingSession`] owns the [`StepArray`] on screen, the [`Algorithm`]
//! working on it, and a step counter. Resetting or switching algorithm always
//! replaces the array with fresh random values and starts the counter at zero;
//! no cursor state survives either operation.
//!
//! The counter counts step requests, not productive steps: it keeps rising
//! after the algorithm has finished.

use crate::sort::{Algorithm, AlgorithmKind, StepArray, Stepper};
use rand::rngs::StdRng;
use rand::SeedableRng;

/// Array size and value bound for every array a session generates
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ArraySpec {
    pub size: usize,
    pub max_value: u32,
}

#[derive(Debug, Clone)]
pub struct SortingSession {
    array: StepArray,
    algorithm: Algorithm,
    steps: u64,
    spec: ArraySpec,
    rng: StdRng,
}

impl SortingSession {
    /// Create a session with a random array. `seed` makes every generated
    /// array reproducible; `None` seeds from the OS.
    pub fn new(kind: AlgorithmKind, spec: ArraySpec, seed: Option<u64>) -> Self {
        let mut rng = match seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };
        let array = StepArray::random(spec.size, spec.max_value, &mut rng);
        let algorithm = Algorithm::new(kind, &array);

        SortingSession {
            array,
            algorithm,
            steps: 0,
            spec,
            rng,
        }
    }

    /// Create a session over a fixed array. Resets still draw random arrays of
    /// the same size and bound.
    pub fn with_array(kind: AlgorithmKind, array: StepArray, seed: u64) -> Self {
        let spec = ArraySpec {
            size: array.len(),
            max_value: array.max_value(),
        };
        let algorithm = Algorithm::new(kind, &array);

        SortingSession {
            array,
            algorithm,
            steps: 0,
            spec,
            rng: StdRng::seed_from_u64(seed),
        }
    }

    /// Advance the algorithm by one step
    pub fn step(&mut self) {
        self.algorithm.step(&mut self.array);
        self.steps += 1;
    }

    pub fn is_finished(&self) -> bool {
        self.algorithm.is_finished()
    }

    /// Draw a new random array and restart the algorithm on it
    pub fn reset(&mut self) {
        self.array = StepArray::random(self.spec.size, self.spec.max_value, &mut self.rng);
        self.algorithm.reset(&self.array);
        self.steps = 0;
    }

    /// Replace the algorithm with a fresh instance of `kind` over a new array
    pub fn switch_algorithm(&mut self, kind: AlgorithmKind) {
        self.array = StepArray::random(self.spec.size, self.spec.max_value, &mut self.rng);
        self.algorithm = Algorithm::new(kind, &self.array);
        self.steps = 0;
    }

    pub fn kind(&self) -> AlgorithmKind {
        self.algorithm.kind()
    }

    pub fn array(&self) -> &StepArray {
        &self.array
    }

    pub fn algorithm(&self) -> &Algorithm {
        &self.algorithm
    }

    pub fn steps(&self) -> u64 {
        self.steps
    }

    /// Positions to highlight in the current frame
    pub fn current_indices(&self) -> Option<(usize, usize)> {
        self.algorithm.current_indices(self.array.len())
    }
}
