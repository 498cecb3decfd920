//! Bubble sort, one comparison per step

use super::array::StepArray;
use super::Stepper;

/// Bubble sort cursors
///
/// Each pass walks `inner` from 0 up to the unsorted boundary
/// `len - 1 - outer`. Reaching the boundary costs one step of its own: the pass
/// is closed, and if nothing was swapped during it the sort stops early.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BubbleSort {
    outer: usize,
    inner: usize,
    swapped: bool,
    finished: bool,
}

impl BubbleSort {
    pub fn new() -> Self {
        Self::default()
    }

    /// Completed passes
    pub fn outer(&self) -> usize {
        self.outer
    }

    /// Position of the next comparison within the current pass
    pub fn inner(&self) -> usize {
        self.inner
    }
}

impl Stepper for BubbleSort {
    fn step(&mut self, array: &mut StepArray) {
        if self.finished {
            return;
        }

        let len = array.len();
        if self.outer + 1 >= len {
            self.finished = true;
            return;
        }

        // outer + 1 < len, so the boundary is at least 1
        let boundary = len - 1 - self.outer;
        if self.inner >= boundary {
            if !self.swapped {
                self.finished = true;
            }
            self.outer += 1;
            self.inner = 0;
            self.swapped = false;
            return;
        }

        if array[self.inner] > array[self.inner + 1] {
            array.swap(self.inner, self.inner + 1);
            self.swapped = true;
        }
        self.inner += 1;
    }

    fn is_finished(&self) -> bool {
        self.finished
    }

    fn reset(&mut self, array: &StepArray) {
        // An empty array has nothing to compare and is finished from the start
        *self = BubbleSort {
            finished: array.is_empty(),
            ..Self::default()
        };
    }

    fn current_indices(&self, len: usize) -> Option<(usize, usize)> {
        if self.finished || self.inner + 1 >= len {
            return None;
        }
        Some((self.inner, self.inner + 1))
    }
}
