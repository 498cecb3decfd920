//! The array being sorted
//!
//! [`StepArray`] is a fixed-length sequence of bounded values. Its length never
//! changes after construction; algorithms mutate it only through [`StepArray::swap`].

use rand::Rng;
use std::ops::Index;

/// A fixed-length sequence of values in `0..=max_value`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StepArray {
    values: Vec<u32>,
    max_value: u32,
}

impl StepArray {
    /// Create an array of `size` values drawn uniformly from `0..=max_value`
    pub fn random<R: Rng + ?Sized>(size: usize, max_value: u32, rng: &mut R) -> Self {
        let values = (0..size).map(|_| rng.gen_range(0..=max_value)).collect();
        StepArray { values, max_value }
    }

    /// Wrap existing values. The bound is raised to the largest value if needed.
    pub fn from_values(values: Vec<u32>, max_value: u32) -> Self {
        let max_value = values.iter().copied().max().unwrap_or(0).max(max_value);
        StepArray { values, max_value }
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    pub fn max_value(&self) -> u32 {
        self.max_value
    }

    pub fn values(&self) -> &[u32] {
        &self.values
    }

    pub fn get(&self, index: usize) -> Option<u32> {
        self.values.get(index).copied()
    }

    /// Exchange two positions. Both indices must be in bounds.
    pub fn swap(&mut self, a: usize, b: usize) {
        self.values.swap(a, b);
    }

    /// Check the array is non-decreasing
    pub fn is_sorted(&self) -> bool {
        self.values.windows(2).all(|w| w[0] <= w[1])
    }
}

impl Index<usize> for StepArray {
    type Output = u32;

    fn index(&self, index: usize) -> &u32 {
        &self.values[index]
    }
}
