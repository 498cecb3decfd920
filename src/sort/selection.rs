//! Selection sort, one outer position per step
//!
//! Each step scans the unsorted suffix for its minimum and swaps it into
//! place, so a step here does a full linear scan where a bubble step does a
//! single comparison. The two variants therefore advance at different
//! visual speeds for the same tick rate.

use super::array::StepArray;
use super::Stepper;

/// Selection sort cursors
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SelectionSort {
    current: usize,
    min_index: usize,
    finished: bool,
}

impl SelectionSort {
    pub fn new() -> Self {
        Self::default()
    }

    /// First position of the unsorted suffix
    pub fn current(&self) -> usize {
        self.current
    }

    pub fn min_index(&self) -> usize {
        self.min_index
    }
}

impl Stepper for SelectionSort {
    fn step(&mut self, array: &mut StepArray) {
        if self.finished {
            return;
        }

        let len = array.len();
        if self.current + 1 >= len {
            self.finished = true;
            return;
        }

        self.min_index = self.current;
        for i in self.current + 1..len {
            if array[i] < array[self.min_index] {
                self.min_index = i;
            }
        }

        if self.min_index != self.current {
            array.swap(self.current, self.min_index);
        }

        self.current += 1;
        self.min_index = self.current;
    }

    fn is_finished(&self) -> bool {
        self.finished
    }

    fn reset(&mut self, array: &StepArray) {
        *self = SelectionSort {
            finished: array.is_empty(),
            ..Self::default()
        };
    }

    fn current_indices(&self, len: usize) -> Option<(usize, usize)> {
        if self.finished || self.current >= len || self.min_index >= len {
            return None;
        }
        Some((self.current, self.min_index))
    }
}
