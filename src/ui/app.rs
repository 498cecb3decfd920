//! Main TUI application state and run loop
//!
//! [`App`] is the single owner of all mutable state: the sorting session and
//! the run flags. It consumes [`AppEvent`]s from one channel, so the input and
//! clock threads never touch it.
//!
//! # State flags
//!
//! | Flag | Meaning |
//! |------|---------|
//! | `is_running` | cleared by quit; the loop exits and never restarts |
//! | `is_started` | set by `s`, cleared by reset / switch |
//! | `is_paused` | toggled by `p` once started |
//! | `is_ready` | ticks may animate; set with `is_started` |
//!
//! A tick advances the session only when started, ready and not paused.

use crate::config::Config;
use crate::error::AppError;
use crate::session::SortingSession;
use crate::sort::AlgorithmKind;
use crate::ui::events::AppEvent;
use crate::ui::panes::{render_bars_pane, render_status_bar, StatusRenderData};
use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use ratatui::{
    backend::Backend,
    layout::{Constraint, Direction, Layout},
    Frame, Terminal,
};
use std::sync::mpsc::Receiver;

/// A user command, decoded from a key press
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    Start,
    TogglePause,
    Reset,
    Step,
    Switch(AlgorithmKind),
    Quit,
}

impl Command {
    /// Map a key to its command. Keys without a binding and non-press events
    /// map to `None`.
    pub fn from_key(key: KeyEvent) -> Option<Self> {
        if key.kind != KeyEventKind::Press {
            return None;
        }
        match key.code {
            KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                Some(Command::Quit)
            }
            KeyCode::Char('q') | KeyCode::Esc => Some(Command::Quit),
            KeyCode::Char('s') => Some(Command::Start),
            KeyCode::Char('p') => Some(Command::TogglePause),
            KeyCode::Char('r') => Some(Command::Reset),
            KeyCode::Char(' ') => Some(Command::Step),
            KeyCode::Char('1') => Some(Command::Switch(AlgorithmKind::Bubble)),
            KeyCode::Char('2') => Some(Command::Switch(AlgorithmKind::Selection)),
            _ => None,
        }
    }
}

/// Run state derived from the flags, for display
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    NotStarted,
    Running,
    Paused,
    /// Started and the algorithm has completed; still on screen
    Finished,
    Quit,
}

/// The main application state
pub struct App {
    /// The array and algorithm being visualised
    pub session: SortingSession,

    /// Whether the loop should keep going
    pub is_running: bool,

    pub is_paused: bool,

    /// Whether `s` has been pressed since the last reset
    pub is_started: bool,

    /// Whether clock ticks may advance the session
    pub is_ready: bool,

    /// Status message to display
    pub status_message: String,

    /// Whether something visible changed since the last frame
    needs_redraw: bool,
}

impl App {
    /// Create an app with a fresh random session
    pub fn new(config: &Config) -> Self {
        let session = SortingSession::new(config.algorithm, config.array_spec(), config.seed);
        App::with_session(session)
    }

    pub fn with_session(session: SortingSession) -> Self {
        App {
            session,
            is_running: true,
            is_paused: true,
            is_started: false,
            is_ready: false,
            status_message: String::from("Press s to start"),
            needs_redraw: true,
        }
    }

    pub fn phase(&self) -> Phase {
        if !self.is_running {
            Phase::Quit
        } else if !self.is_started {
            Phase::NotStarted
        } else if self.session.is_finished() {
            Phase::Finished
        } else if self.is_paused {
            Phase::Paused
        } else {
            Phase::Running
        }
    }

    /// Run until quit, drawing to `terminal` and consuming `events`.
    ///
    /// `recv` on `events` is the only place this blocks. A disconnected
    /// channel ends the loop like a quit.
    pub fn run<B: Backend>(
        &mut self,
        terminal: &mut Terminal<B>,
        events: &Receiver<AppEvent>,
    ) -> Result<(), AppError> {
        tracing::info!(
            target: "sortty::app",
            algorithm = %self.session.kind(),
            size = self.session.array().len(),
            "run loop started"
        );

        while self.is_running {
            if self.take_redraw() {
                terminal
                    .draw(|f| self.render(f))
                    .map_err(AppError::Terminal)?;
            }

            match events.recv() {
                Ok(AppEvent::SourceFailed(source)) => {
                    self.handle_event(AppEvent::SourceFailed(source));
                    return Err(AppError::SourceLost(source));
                }
                Ok(event) => self.handle_event(event),
                Err(_) => {
                    tracing::debug!(target: "sortty::app", "event channel disconnected");
                    self.is_running = false;
                }
            }
        }

        tracing::info!(
            target: "sortty::app",
            steps = self.session.steps(),
            "run loop finished"
        );
        Ok(())
    }

    /// Apply one event to the state
    pub fn handle_event(&mut self, event: AppEvent) {
        match event {
            AppEvent::Key(key) => {
                if let Some(command) = Command::from_key(key) {
                    self.apply(command);
                }
            }
            AppEvent::Resize(cols, rows) => {
                tracing::trace!(target: "sortty::app", cols, rows, "resize");
                self.needs_redraw = true;
            }
            AppEvent::Tick => self.on_tick(),
            AppEvent::InputClosed => {
                tracing::warn!(target: "sortty::app", "input closed, quitting");
                self.is_running = false;
            }
            AppEvent::SourceFailed(source) => {
                tracing::error!(target: "sortty::app", source, "event thread panicked, quitting");
                self.is_running = false;
            }
        }
    }

    /// One clock tick: advance if animating, redraw regardless
    pub fn on_tick(&mut self) {
        if !self.is_running {
            return;
        }
        if self.is_started && self.is_ready && !self.is_paused {
            self.advance();
        }
        self.needs_redraw = true;
    }

    /// Apply a command if its precondition holds. Nothing applies after quit.
    pub fn apply(&mut self, command: Command) {
        if !self.is_running {
            return;
        }
        tracing::debug!(target: "sortty::app", ?command, phase = ?self.phase(), "command");

        match command {
            Command::Start => {
                if !self.is_started {
                    self.is_started = true;
                    self.is_paused = false;
                    self.is_ready = true;
                    self.status_message = "Sorting...".to_string();
                    self.needs_redraw = true;
                }
            }
            Command::TogglePause => {
                if self.is_started {
                    self.is_paused = !self.is_paused;
                    self.status_message = if self.is_paused {
                        "Paused".to_string()
                    } else {
                        "Sorting...".to_string()
                    };
                    self.needs_redraw = true;
                }
            }
            Command::Reset => {
                self.session.reset();
                self.stop();
                self.status_message = "Reset".to_string();
            }
            Command::Step => {
                if self.is_started && self.is_paused {
                    self.advance();
                    self.needs_redraw = true;
                }
            }
            Command::Switch(kind) => {
                if kind != self.session.kind() {
                    self.session.switch_algorithm(kind);
                    self.stop();
                    self.status_message = format!("Switched to {}", kind);
                }
            }
            Command::Quit => {
                self.is_running = false;
            }
        }
    }

    /// Whether a frame is due; clears the request
    pub fn take_redraw(&mut self) -> bool {
        std::mem::take(&mut self.needs_redraw)
    }

    fn stop(&mut self) {
        self.is_started = false;
        self.is_paused = true;
        self.is_ready = false;
        self.needs_redraw = true;
    }

    fn advance(&mut self) {
        let was_finished = self.session.is_finished();
        self.session.step();

        if !was_finished && self.session.is_finished() {
            tracing::info!(
                target: "sortty::app",
                algorithm = %self.session.kind(),
                steps = self.session.steps(),
                "sort finished"
            );
            self.status_message = format!("Sorted in {} steps", self.session.steps());
        }
    }

    /// Render the UI
    pub fn render(&self, frame: &mut Frame) {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Min(0), Constraint::Length(1)])
            .split(frame.area());

        let sorted = self.is_started && self.session.is_finished();
        render_bars_pane(
            frame,
            chunks[0],
            self.session.array(),
            self.session.current_indices(),
            sorted,
        );

        render_status_bar(
            frame,
            chunks[1],
            &StatusRenderData {
                message: &self.status_message,
                steps: self.session.steps(),
                algorithm: self.session.kind(),
                phase: self.phase(),
                is_paused: self.is_paused,
            },
        );
    }
}
