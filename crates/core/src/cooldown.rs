use std::time::{Duration, Instant};

/// Submit suppression window for a single client.
#[derive(Debug, Clone, Copy)]
pub struct Cooldown {
    window: Duration,
    until: Option<Instant>,
}

impl Cooldown {
    #[must_use]
    pub const fn new(window: Duration) -> Self {
        Self { window, until: None }
    }

    #[must_use]
    pub const fn window(&self) -> Duration {
        self.window
    }

    pub fn arm(&mut self, now: Instant) {
        self.until = Some(now + self.window);
    }

    /// Time left before submits are accepted again; zero when inactive.
    #[must_use]
    pub fn remaining(&self, now: Instant) -> Duration {
        self.until.map_or(Duration::ZERO, |until| until.saturating_duration_since(now))
    }

    #[must_use]
    pub fn is_active(&self, now: Instant) -> bool {
        !self.remaining(now).is_zero()
    }
}
