/// A time-windowed gate: at most one call is admitted per window.
///
/// The first call fires immediately and opens a window of `window_ms`. Calls inside an open
/// window are suppressed. With `trailing` enabled, a suppressed call arms one extra fire that
/// [`Throttle::poll`] releases once the window has elapsed.
///
/// The gate never reads a clock; callers pass `now_ms` from whatever time source they use.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Throttle {
    window_ms: u64,
    trailing: bool,
    window_start_ms: Option<u64>,
    trailing_pending: bool,
}

impl Throttle {
    pub fn new(window_ms: u64) -> Self {
        Self {
            window_ms: window_ms.max(1),
            trailing: false,
            window_start_ms: None,
            trailing_pending: false,
        }
    }

    pub fn with_trailing(mut self, trailing: bool) -> Self {
        self.trailing = trailing;
        self
    }

    pub fn window_ms(&self) -> u64 {
        self.window_ms
    }

    pub fn trailing(&self) -> bool {
        self.trailing
    }

    /// Returns `true` if a window opened at or before `now_ms` is still active.
    pub fn is_throttled(&self, now_ms: u64) -> bool {
        self.window_start_ms
            .is_some_and(|start| now_ms.saturating_sub(start) < self.window_ms)
    }

    /// Offers a call to the gate. Returns `true` when the call should run now.
    ///
    /// A call admitted after the window elapsed supersedes a pending trailing fire.
    pub fn call(&mut self, now_ms: u64) -> bool {
        if self.is_throttled(now_ms) {
            if self.trailing {
                self.trailing_pending = true;
            }
            return false;
        }
        self.window_start_ms = Some(now_ms);
        self.trailing_pending = false;
        true
    }

    /// Releases the trailing fire once its window has elapsed.
    ///
    /// The trailing fire opens a new window starting at `now_ms`.
    pub fn poll(&mut self, now_ms: u64) -> bool {
        let Some(deadline) = self.trailing_deadline_ms() else {
            return false;
        };
        if now_ms < deadline {
            return false;
        }
        self.trailing_pending = false;
        self.window_start_ms = Some(now_ms);
        true
    }

    pub fn has_pending_trailing(&self) -> bool {
        self.trailing_pending
    }

    /// When the armed trailing fire becomes due, if any.
    ///
    /// Adapters can use this to schedule a single timer instead of polling every frame.
    pub fn trailing_deadline_ms(&self) -> Option<u64> {
        if !self.trailing_pending {
            return None;
        }
        self.window_start_ms
            .map(|start| start.saturating_add(self.window_ms))
    }

    /// Forgets the open window and any armed trailing fire.
    pub fn reset(&mut self) {
        self.window_start_ms = None;
        self.trailing_pending = false;
    }
}
