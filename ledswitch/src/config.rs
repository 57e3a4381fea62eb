use crate::clock::Millis;

/// After the button is released, the time allowed for the next press to count towards a
/// multi-tap.
///
/// Taps are only reported once this window has passed after the last release, so a longer window
/// makes multi-tapping easier at the cost of latency.
pub const INTER_TAP_MAX_MS: Millis = 500;

/// How long the button must be held to register a long press.
pub const LONG_PRESS_MS: Millis = 3000;

/// How long the button must be held to register a very long press.
pub const VERY_LONG_PRESS_MS: Millis = 10_000;

/// Timing thresholds used by the gesture classifier.
///
/// A `very_long_press_ms` shorter than `long_press_ms` is accepted; the very long press then
/// follows on the poll right after the long press starts.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Timing {
    pub inter_tap_max_ms: Millis,
    pub long_press_ms: Millis,
    pub very_long_press_ms: Millis,
}

impl Timing {
    /// [`INTER_TAP_MAX_MS`], [`LONG_PRESS_MS`] and [`VERY_LONG_PRESS_MS`].
    pub const DEFAULT: Self = Self::new(INTER_TAP_MAX_MS, LONG_PRESS_MS, VERY_LONG_PRESS_MS);

    /// Thresholds with every field given explicitly.
    pub const fn new(
        inter_tap_max_ms: Millis,
        long_press_ms: Millis,
        very_long_press_ms: Millis,
    ) -> Self {
        Self {
            inter_tap_max_ms,
            long_press_ms,
            very_long_press_ms,
        }
    }

    /// Replaces the inter-tap window.
    pub const fn with_inter_tap_max(self, ms: Millis) -> Self {
        Self { inter_tap_max_ms: ms, ..self }
    }

    /// Replaces the long press threshold.
    pub const fn with_long_press(self, ms: Millis) -> Self {
        Self { long_press_ms: ms, ..self }
    }

    /// Replaces the very long press threshold.
    pub const fn with_very_long_press(self, ms: Millis) -> Self {
        Self { very_long_press_ms: ms, ..self }
    }
}

impl Default for Timing {
    fn default() -> Self {
        Self::DEFAULT
    }
}
