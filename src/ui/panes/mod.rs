//! TUI pane rendering
//!
//! - [`bars`]: the array as vertical bars, compared pair highlighted
//! - [`status`]: status bar with step counter, run state and keybindings
//!
//! Panes are stateless: each `render_*` function draws from borrowed data and
//! keeps nothing between frames.

pub mod bars;
pub mod status;

pub use bars::{render_bars_pane, ArrayBars};
pub use status::{render_status_bar, StatusRenderData};
