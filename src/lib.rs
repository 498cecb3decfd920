//! # Introduction
//!
//! sortty animates sorting algorithms in the terminal. A random array is drawn
//! as vertical bars, and the chosen algorithm advances one small step per
//! clock tick so every comparison and swap is visible. The animation can be
//! paused, single-stepped, reset, or switched to another algorithm.
//!
//! ## Architecture
//!
//! ```text
//! input thread ─┐
//!               ├─> event channel ─> App (run loop) ─> SortingSession ─> Algorithm
//! clock thread ─┘                        │
//!                                        └─> panes ─> ratatui Terminal
//! ```
//!
//! 1. [`sort`]: the [`sort::StepArray`] and the incremental algorithms behind
//!    the [`sort::Stepper`] contract.
//! 2. [`session`]: one array bound to one algorithm, with a step counter.
//! 3. [`ui`]: run loop, event threads, terminal handling and rendering.
//! 4. [`config`], [`error`], [`logging`]: options, error taxonomy, tracing setup.
//!
//! ## Keys
//!
//! `s` start, `p` pause/resume, `space` single step while paused, `r` reset,
//! `1` bubble sort, `2` selection sort, `q` / `Esc` / `Ctrl-C` quit.

pub mod config;
pub mod error;
pub mod logging;
pub mod session;
pub mod sort;
pub mod ui;
