//! Transient user-visible notices raised from recovered failures.

use chrono::{DateTime, TimeDelta, Utc};
use mockable::Clock;

/// Seconds a notice stays visible before auto-dismissing.
const NOTICE_LIFETIME_SECONDS: i64 = 3;

/// Transient board message shown after a recovered failure.
///
/// A notice carries no severity and no retry affordance; the view shows
/// its text until [`is_expired`](Self::is_expired) reports true.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notice {
    message: String,
    raised_at: DateTime<Utc>,
}

impl Notice {
    /// Raises a notice at the clock's current time.
    #[must_use]
    pub fn raise(message: impl Into<String>, clock: &impl Clock) -> Self {
        Self {
            message: message.into(),
            raised_at: clock.utc(),
        }
    }

    /// Returns the message text.
    #[must_use]
    pub fn message(&self) -> &str {
        &self.message
    }

    /// Returns the time the notice was raised.
    #[must_use]
    pub const fn raised_at(&self) -> DateTime<Utc> {
        self.raised_at
    }

    /// Reports whether the notice has outlived its display window.
    #[must_use]
    pub fn is_expired(&self, clock: &impl Clock) -> bool {
        clock.utc() - self.raised_at >= TimeDelta::seconds(NOTICE_LIFETIME_SECONDS)
    }
}
