//! # Render Debouncing
//!
//! Coalesces bursts of input events into a single render: an explicit
//! trailing-edge state machine rather than an ad-hoc timer callback.
//!
//! The machine is either `Idle` or `Waiting` on a deadline with the latest
//! request. A new submission while waiting replaces the pending request and
//! restarts the quiet window, so only the last request of a burst fires.
//! Time is passed in by the caller, which keeps the machine synchronous and
//! testable without sleeping.
//!
//! ## Example
//!
//! ```
//! use std::time::{Duration, Instant};
//! use sello::debounce::Debouncer;
//! use sello::stamp::StampRequest;
//!
//! let mut debouncer = Debouncer::new(Duration::from_millis(300));
//! let t0 = Instant::now();
//!
//! debouncer.submit(StampRequest::new("A"), t0);
//! debouncer.submit(StampRequest::new("AC"), t0 + Duration::from_millis(100));
//!
//! // Still inside the quiet window: nothing fires
//! assert!(debouncer.poll(t0 + Duration::from_millis(200)).is_none());
//!
//! // Window elapsed: the latest request fires once
//! let fired = debouncer.poll(t0 + Duration::from_millis(450)).unwrap();
//! assert_eq!(fired.primary_text, "AC");
//! ```

use std::time::{Duration, Instant};

use crate::stamp::StampRequest;

/// Default quiet window between the last keystroke and the render.
pub const DEFAULT_QUIET_WINDOW: Duration = Duration::from_millis(300);

#[derive(Debug, Clone, PartialEq)]
enum State {
    Idle,
    Waiting {
        deadline: Instant,
        latest: StampRequest,
    },
}

/// Trailing-edge debouncer for stamp render requests.
#[derive(Debug, Clone)]
pub struct Debouncer {
    quiet_window: Duration,
    state: State,
}

impl Default for Debouncer {
    fn default() -> Self {
        Self::new(DEFAULT_QUIET_WINDOW)
    }
}

impl Debouncer {
    pub fn new(quiet_window: Duration) -> Self {
        Self {
            quiet_window,
            state: State::Idle,
        }
    }

    /// Record an input event at `now`.
    ///
    /// Replaces any pending request and restarts the quiet window; stale
    /// scheduled requests are simply superseded.
    pub fn submit(&mut self, request: StampRequest, now: Instant) {
        self.state = State::Waiting {
            deadline: now + self.quiet_window,
            latest: request,
        };
    }

    /// Fire the pending request if its quiet window has elapsed at `now`.
    ///
    /// Returns the request at most once; the machine transitions back to
    /// idle when it fires.
    pub fn poll(&mut self, now: Instant) -> Option<StampRequest> {
        match &self.state {
            State::Waiting { deadline, latest } if now >= *deadline => {
                let request = latest.clone();
                self.state = State::Idle;
                Some(request)
            }
            _ => None,
        }
    }

    /// Deadline of the pending request, if any. Callers can sleep until
    /// this instant instead of spinning.
    pub fn deadline(&self) -> Option<Instant> {
        match &self.state {
            State::Waiting { deadline, .. } => Some(*deadline),
            State::Idle => None,
        }
    }

    pub fn is_idle(&self) -> bool {
        self.state == State::Idle
    }
}
