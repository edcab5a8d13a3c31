//! Activity Indicator
//!
//! A millisecond countdown that keeps an LED lit for a while after the IR
//! link receives something. The receive interrupt resets the countdown,
//! the periodic tick runs it down and switches the LED off at zero.

use core::sync::atomic::{AtomicU32, Ordering};

/// Anything that can show link activity
pub trait Indicator {
    /// Switch the indicator on or off
    fn set_active(&mut self, active: bool);
}

/// Shared activity countdown
///
/// Both writers run at interrupt level. The reset is a single store; the
/// tick's read-modify-write runs in a critical section because the
/// Cortex-M0+ has no atomic read-modify-write instructions.
pub struct ActivityTimer {
    remaining_ms: AtomicU32,
    hold_ms: u32,
}

impl ActivityTimer {
    /// Create an idle timer that holds for `hold_ms` after each pulse
    #[must_use]
    pub const fn new(hold_ms: u32) -> Self {
        Self {
            remaining_ms: AtomicU32::new(0),
            hold_ms,
        }
    }

    /// Light the indicator and restart the countdown
    pub fn pulse(&self, indicator: &mut impl Indicator) {
        indicator.set_active(true);
        self.remaining_ms.store(self.hold_ms, Ordering::Relaxed);
    }

    /// Advance the countdown by one tick
    ///
    /// Returns true while the hold is still running. The indicator is
    /// switched off on every tick that finds the countdown at zero.
    pub fn tick(&self, indicator: &mut impl Indicator) -> bool {
        let remaining = critical_section::with(|_| {
            let next = self.remaining_ms.load(Ordering::Relaxed).saturating_sub(1);
            self.remaining_ms.store(next, Ordering::Relaxed);
            next
        });

        if remaining == 0 {
            indicator.set_active(false);
        }
        remaining > 0
    }

    /// Milliseconds left in the current hold
    #[must_use]
    pub fn remaining_ms(&self) -> u32 {
        self.remaining_ms.load(Ordering::Relaxed)
    }

    /// Hold duration applied by each pulse
    #[must_use]
    pub const fn hold_ms(&self) -> u32 {
        self.hold_ms
    }

    /// Check whether a hold is in progress
    #[must_use]
    pub fn is_active(&self) -> bool {
        self.remaining_ms() > 0
    }
}

impl Default for ActivityTimer {
    fn default() -> Self {
        Self::new(crate::config::ACTIVITY_HOLD_MS)
    }
}
