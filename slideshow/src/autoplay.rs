use crate::AutoplayOptions;

/// Autoplay state as seen by the host.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum PlaybackState {
    /// Autoplay is not configured, or has not been started yet.
    #[default]
    Off,
    /// A periodic timer is active.
    Running,
    /// Started, but the timer is currently cleared (pointer over the container).
    Paused,
}

/// A periodic timer, polled by the host with its own clock.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Interval {
    pub period_ms: u64,
    pub next_due_ms: u64,
}

impl Interval {
    pub fn new(now_ms: u64, period_ms: u64) -> Self {
        let period_ms = period_ms.max(1);
        Self {
            period_ms,
            next_due_ms: now_ms.saturating_add(period_ms),
        }
    }

    /// Returns how many periods elapsed up to `now_ms` and reschedules past them.
    pub fn poll(&mut self, now_ms: u64) -> u64 {
        if now_ms < self.next_due_ms {
            return 0;
        }
        let fired = (now_ms - self.next_due_ms) / self.period_ms + 1;
        self.next_due_ms = self
            .next_due_ms
            .saturating_add(fired.saturating_mul(self.period_ms));
        fired
    }
}

/// Owns the (optional) autoplay timer of one slideshow instance.
///
/// At most one [`Interval`] exists at any time: `resume` only creates one when none is active,
/// and `pause` drops the current one.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Autoplay {
    options: Option<AutoplayOptions>,
    interval: Option<Interval>,
    started: bool,
}

impl Autoplay {
    pub fn new(options: Option<AutoplayOptions>) -> Self {
        Self {
            options,
            interval: None,
            started: false,
        }
    }

    pub fn options(&self) -> Option<AutoplayOptions> {
        self.options
    }

    pub fn is_configured(&self) -> bool {
        self.options.is_some()
    }

    pub fn pause_on_hover(&self) -> bool {
        self.options.is_some_and(|o| o.pause_on_hover)
    }

    pub fn interval(&self) -> Option<Interval> {
        self.interval
    }

    pub fn state(&self) -> PlaybackState {
        match (self.started, self.interval) {
            (false, _) => PlaybackState::Off,
            (true, Some(_)) => PlaybackState::Running,
            (true, None) => PlaybackState::Paused,
        }
    }

    /// Number of live timers: always 0 or 1.
    pub fn active_timers(&self) -> usize {
        usize::from(self.interval.is_some())
    }

    /// Starts the timer. Only the first call on a configured autoplay has any effect.
    pub fn start(&mut self, now_ms: u64) -> bool {
        let Some(options) = self.options else {
            return false;
        };
        if self.started {
            return false;
        }
        self.started = true;
        self.interval = Some(Interval::new(now_ms, options.period_ms()));
        true
    }

    /// Clears the active timer. Returns `false` if there was none.
    pub fn pause(&mut self) -> bool {
        self.interval.take().is_some()
    }

    /// Starts a fresh timer unless one is already active or autoplay was never started.
    pub fn resume(&mut self, now_ms: u64) -> bool {
        if !self.started || self.interval.is_some() {
            return false;
        }
        let Some(options) = self.options else {
            return false;
        };
        self.interval = Some(Interval::new(now_ms, options.period_ms()));
        true
    }

    /// Returns how many advances are due at `now_ms`; 0 when no timer is active.
    pub fn due(&mut self, now_ms: u64) -> u64 {
        match self.interval.as_mut() {
            Some(interval) => interval.poll(now_ms),
            None => 0,
        }
    }
}
