//! Event producers for the run loop
//!
//! Two background threads feed a single bounded channel of [`AppEvent`]s:
//!
//! - the **input reader** polls crossterm for key and resize events
//! - the **ticker** emits [`AppEvent::Tick`] at the animation rate
//!
//! Neither thread touches application state; they only forward events. The
//! main thread owns all state and waits on the receiving end with a single
//! blocking `recv`, which multiplexes both sources in arrival order.
//!
//! Both threads watch a shared [`StopSignal`]. [`EventPump::shutdown`] triggers
//! it, drops the receiver so a producer blocked on a full channel wakes up,
//! and joins the threads.
//!
//! A producer that panics reports [`AppEvent::SourceFailed`] while unwinding.
//! The other producer still holds a sender, so without that report the run
//! loop would keep waiting on a channel that never disconnects.

use crate::error::AppError;
use crossterm::event::{self, Event, KeyEvent};
use std::sync::mpsc::{self, Receiver, SyncSender};
use std::sync::{Arc, Condvar, Mutex, PoisonError};
use std::thread::{self, JoinHandle};
use std::time::{Duration, Instant};

/// Capacity of the hand-off channel between producers and the run loop
pub const EVENT_CHANNEL_CAPACITY: usize = 64;

/// How long one crossterm poll may block before the stop signal is rechecked
const INPUT_POLL_INTERVAL: Duration = Duration::from_millis(50);

/// Everything the run loop reacts to
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AppEvent {
    Key(KeyEvent),
    Resize(u16, u16),
    Tick,
    /// The input source failed or was closed; no more input will arrive
    InputClosed,
    /// The named producer thread panicked
    SourceFailed(&'static str),
}

const INPUT_THREAD: &str = "sortty-input";
const TICKER_THREAD: &str = "sortty-ticker";

/// Sends [`AppEvent::SourceFailed`] if dropped during a panic
pub struct UnwindNotice {
    sender: SyncSender<AppEvent>,
    source: &'static str,
}

impl UnwindNotice {
    pub fn new(sender: SyncSender<AppEvent>, source: &'static str) -> Self {
        UnwindNotice { sender, source }
    }
}

impl Drop for UnwindNotice {
    fn drop(&mut self) {
        if thread::panicking() {
            let _ = self.sender.send(AppEvent::SourceFailed(self.source));
        }
    }
}

/// Shared cancellation flag with a blocking wait
#[derive(Debug, Clone, Default)]
pub struct StopSignal {
    inner: Arc<(Mutex<bool>, Condvar)>,
}

impl StopSignal {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn stop(&self) {
        let (lock, cvar) = &*self.inner;
        let mut stopped = lock.lock().unwrap_or_else(PoisonError::into_inner);
        *stopped = true;
        cvar.notify_all();
    }

    pub fn is_stopped(&self) -> bool {
        let (lock, _) = &*self.inner;
        *lock.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// Block until stopped or until `duration` elapses.
    ///
    /// Returns `true` if the signal was triggered.
    pub fn wait_timeout(&self, duration: Duration) -> bool {
        let (lock, cvar) = &*self.inner;
        let mut stopped = lock.lock().unwrap_or_else(PoisonError::into_inner);
        let deadline = Instant::now() + duration;

        while !*stopped {
            let now = Instant::now();
            if now >= deadline {
                return false;
            }
            let (guard, _) = cvar
                .wait_timeout(stopped, deadline - now)
                .unwrap_or_else(PoisonError::into_inner);
            stopped = guard;
        }
        true
    }
}

/// Spawn the thread that forwards terminal input.
///
/// A poll or read error is treated as the input source closing: the thread
/// sends [`AppEvent::InputClosed`] and exits.
pub fn spawn_input_reader(
    sender: SyncSender<AppEvent>,
    stop: StopSignal,
) -> std::io::Result<JoinHandle<()>> {
    thread::Builder::new()
        .name(INPUT_THREAD.to_string())
        .spawn(move || {
            let _notice = UnwindNotice::new(sender.clone(), INPUT_THREAD);
            tracing::trace!(target: "sortty::events", "input reader started");
            while !stop.is_stopped() {
                let next = match event::poll(INPUT_POLL_INTERVAL) {
                    Ok(false) => continue,
                    Ok(true) => event::read(),
                    Err(e) => Err(e),
                };

                let forwarded = match next {
                    Ok(Event::Key(key)) => AppEvent::Key(key),
                    Ok(Event::Resize(cols, rows)) => AppEvent::Resize(cols, rows),
                    Ok(_) => continue,
                    Err(e) => {
                        tracing::warn!(target: "sortty::events", error = %e, "input source closed");
                        let _ = sender.send(AppEvent::InputClosed);
                        break;
                    }
                };

                if sender.send(forwarded).is_err() {
                    break;
                }
            }
            tracing::trace!(target: "sortty::events", "input reader stopped");
        })
}

/// Spawn the thread that emits one [`AppEvent::Tick`] per `period`
pub fn spawn_ticker(
    period: Duration,
    sender: SyncSender<AppEvent>,
    stop: StopSignal,
) -> std::io::Result<JoinHandle<()>> {
    thread::Builder::new()
        .name(TICKER_THREAD.to_string())
        .spawn(move || {
            let _notice = UnwindNotice::new(sender.clone(), TICKER_THREAD);
            let mut ticks: u64 = 0;
            while !stop.wait_timeout(period) {
                if sender.send(AppEvent::Tick).is_err() {
                    break;
                }
                ticks += 1;
            }
            tracing::trace!(target: "sortty::events", ticks, "ticker stopped");
        })
}

/// Owns the event channel and the producer threads feeding it
pub struct EventPump {
    sender: Option<SyncSender<AppEvent>>,
    receiver: Option<Receiver<AppEvent>>,
    stop: StopSignal,
    handles: Vec<JoinHandle<()>>,
}

impl EventPump {
    /// Create an empty pump with a bounded channel of `capacity` events
    pub fn new(capacity: usize) -> Self {
        let (sender, receiver) = mpsc::sync_channel(capacity);
        EventPump {
            sender: Some(sender),
            receiver: Some(receiver),
            stop: StopSignal::new(),
            handles: Vec::new(),
        }
    }

    /// Attach the terminal input reader
    pub fn with_input_reader(mut self) -> Result<Self, AppError> {
        let sender = self.producer_sender()?;
        let handle =
            spawn_input_reader(sender, self.stop.clone()).map_err(AppError::EventSource)?;
        self.handles.push(handle);
        Ok(self)
    }

    /// Attach the animation clock
    pub fn with_ticker(mut self, period: Duration) -> Result<Self, AppError> {
        let sender = self.producer_sender()?;
        let handle =
            spawn_ticker(period, sender, self.stop.clone()).map_err(AppError::EventSource)?;
        self.handles.push(handle);
        Ok(self)
    }

    /// Drop the pump's own sender so the channel disconnects once every
    /// producer thread has exited. No producer can be attached afterwards.
    pub fn seal(mut self) -> Self {
        self.sender = None;
        self
    }

    /// The receiving end. `None` after shutdown.
    pub fn receiver(&self) -> Option<&Receiver<AppEvent>> {
        self.receiver.as_ref()
    }

    pub fn stop_signal(&self) -> &StopSignal {
        &self.stop
    }

    /// Stop and join every producer. Safe to call more than once.
    pub fn shutdown(&mut self) {
        self.stop.stop();
        self.sender = None;
        self.receiver = None;
        for handle in self.handles.drain(..) {
            if handle.join().is_err() {
                tracing::error!(target: "sortty::events", "event thread panicked");
            }
        }
    }

    fn producer_sender(&self) -> Result<SyncSender<AppEvent>, AppError> {
        self.sender.clone().ok_or_else(|| {
            AppError::EventSource(std::io::Error::new(
                std::io::ErrorKind::BrokenPipe,
                "event pump is sealed",
            ))
        })
    }
}

impl Drop for EventPump {
    fn drop(&mut self) {
        self.shutdown();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_stop_signal_wakes_waiter() {
        let signal = StopSignal::new();
        let waiter = signal.clone();
        let handle = thread::spawn(move || waiter.wait_timeout(Duration::from_secs(10)));

        thread::sleep(Duration::from_millis(20));
        signal.stop();

        assert!(handle.join().unwrap());
        assert!(signal.is_stopped());
    }

    #[test]
    fn test_stop_signal_times_out() {
        let signal = StopSignal::new();
        assert!(!signal.wait_timeout(Duration::from_millis(10)));
        assert!(!signal.is_stopped());
    }

    #[test]
    fn test_ticker_emits_ticks() {
        let pump = EventPump::new(EVENT_CHANNEL_CAPACITY)
            .with_ticker(Duration::from_millis(5))
            .unwrap();
        let receiver = pump.receiver().unwrap();

        for _ in 0..3 {
            let event = receiver.recv_timeout(Duration::from_secs(2)).unwrap();
            assert_eq!(event, AppEvent::Tick);
        }
    }

    #[test]
    fn test_shutdown_joins_blocked_ticker() {
        // Capacity 1 so the ticker ends up blocked on a full channel
        let mut pump = EventPump::new(1)
            .with_ticker(Duration::from_millis(1))
            .unwrap();
        thread::sleep(Duration::from_millis(30));

        pump.shutdown();
        assert!(pump.receiver().is_none());
        assert!(pump.stop_signal().is_stopped());

        // Second call is a no-op
        pump.shutdown();
    }

    #[test]
    fn test_sealed_pump_disconnects_without_producers() {
        let pump = EventPump::new(4).seal();
        assert!(pump.receiver().unwrap().recv().is_err());
    }

    #[test]
    fn test_panicking_producer_reports_failure() {
        let (sender, receiver) = mpsc::sync_channel(1);
        let handle = thread::spawn(move || {
            let _notice = UnwindNotice::new(sender, "worker");
            panic!("worker died");
        });

        assert!(handle.join().is_err());
        assert_eq!(
            receiver.recv_timeout(Duration::from_secs(2)).unwrap(),
            AppEvent::SourceFailed("worker")
        );
    }

    #[test]
    fn test_clean_exit_sends_no_failure() {
        let (sender, receiver) = mpsc::sync_channel(1);
        let handle = thread::spawn(move || {
            let _notice = UnwindNotice::new(sender, "worker");
        });

        handle.join().unwrap();
        // Sender dropped without a message
        assert!(receiver.recv().is_err());
    }

    #[test]
    fn test_attach_after_seal_fails() {
        let pump = EventPump::new(4).seal();
        assert!(matches!(
            pump.with_ticker(Duration::from_millis(5)),
            Err(AppError::EventSource(_))
        ));
    }
}
