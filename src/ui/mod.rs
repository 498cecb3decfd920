//! Terminal user interface built on [ratatui](https://github.com/ratatui-org/ratatui).
//!
//! The UI is organized into these layers:
//!
//! - **[`app`]**: run-loop state machine: flags, key commands, tick handling
//! - **[`events`]**: input and clock threads feeding one event channel
//! - **[`terminal`]**: raw-mode / alternate-screen acquisition and guaranteed restore
//! - **[`panes`]**: stateless render functions (array bars, status bar)
//! - **[`theme`]**: centralized color palette used by all panes
//!
//! The entry point for consumers is [`App`]: construct it from a
//! [`Config`](crate::config::Config) and call [`App::run`] with a terminal and
//! the receiving end of an [`EventPump`](events::EventPump).
//!
//! [`App::run`]: app::App::run

pub mod app;
pub mod events;
pub mod panes;
pub mod terminal;
pub mod theme;

pub use app::App;
