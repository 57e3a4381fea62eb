//! Multi-tap and long press classification.
//!
//! [`MultiTap`] is a state machine fed once per poll with the edge seen during that poll (if any)
//! and the current time. It distinguishes:
//!
//! | Gesture         | Condition                                         | Reported             |
//! |-----------------|---------------------------------------------------|----------------------|
//! | Tap (1 to 3)    | Each press follows a release within the window    | once the window ends |
//! | Long press      | Held past the long press threshold                | on release           |
//! | Very long press | Held past the very long press threshold           | while still held     |
//!
//! [`Gesture::PressStarted`] is reported as soon as a new press begins, before its final
//! classification is known.

use crate::clock::{elapsed, Millis};
use crate::config::Timing;
use crate::switch::Edge;

/// Result of a single [`MultiTap::poll`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Gesture {
    /// The button is not being pressed.
    NotPressed,

    /// A new press began. It is not known yet whether this will be a tap or a long press.
    PressStarted,

    /// Single tap, reported once the inter-tap window after the release has passed.
    Tap1,

    /// Double tap. No [`Tap1`](Self::Tap1) is reported for the same sequence.
    Tap2,

    /// Triple tap, or more. Taps beyond the third are counted as part of the triple tap.
    Tap3,

    /// The button has been held long enough for a long press. Either [`Long`](Self::Long) or
    /// [`VeryLong`](Self::VeryLong) follows.
    LongStarted,

    /// A long press that was released before becoming a very long press.
    Long,

    /// The button is still held, past the very long press threshold. Releasing it afterwards
    /// reports [`NotPressed`](Self::NotPressed).
    VeryLong,

    /// A press is in progress but its outcome is not known yet.
    InProgress,
}

impl Gesture {
    /// Stable numeric code for this result.
    ///
    /// The gaps (3, 5 and 7) are reserved for the internal waiting states and are never produced.
    pub fn code(self) -> u8 {
        match self {
            Self::NotPressed => 0,
            Self::PressStarted => 1,
            Self::Tap1 => 2,
            Self::Tap2 => 4,
            Self::Tap3 => 6,
            Self::LongStarted => 8,
            Self::Long => 9,
            Self::VeryLong => 10,
            Self::InProgress => 11,
        }
    }

    /// The gesture with the given numeric code, if any.
    pub fn from_code(code: u8) -> Option<Self> {
        let gesture = match code {
            0 => Self::NotPressed,
            1 => Self::PressStarted,
            2 => Self::Tap1,
            4 => Self::Tap2,
            6 => Self::Tap3,
            8 => Self::LongStarted,
            9 => Self::Long,
            10 => Self::VeryLong,
            11 => Self::InProgress,
            _ => return None,
        };
        Some(gesture)
    }

    /// Number of taps, for the tap results.
    pub fn taps(self) -> Option<u8> {
        match self {
            Self::Tap1 => Some(1),
            Self::Tap2 => Some(2),
            Self::Tap3 => Some(3),
            _ => None,
        }
    }

    /// True for results that complete a gesture or reclassify it: taps, long and very long
    /// presses.
    pub fn is_final(self) -> bool {
        matches!(
            self,
            Self::Tap1 | Self::Tap2 | Self::Tap3 | Self::Long | Self::VeryLong
        )
    }
}

/// Number of taps counted so far in a multi-tap sequence.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Taps {
    One,
    Two,
    Three,
}

impl Taps {
    /// The count after one more press. Saturates at three.
    fn next(self) -> Self {
        match self {
            Self::One => Self::Two,
            Self::Two | Self::Three => Self::Three,
        }
    }

    fn gesture(self) -> Gesture {
        match self {
            Self::One => Gesture::Tap1,
            Self::Two => Gesture::Tap2,
            Self::Three => Gesture::Tap3,
        }
    }
}

/// Internal state of the classifier. Each variant carries the timestamp of the edge its timing
/// window is measured from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum State {
    NotPressed,
    /// Button down, counting taps.
    Pressed { taps: Taps, fell_at: Millis },
    /// Button up, waiting to see whether another tap follows.
    Released { taps: Taps, rose_at: Millis },
    Long { fell_at: Millis },
    VeryLong { fell_at: Millis },
}

/// Gesture classifier for a single button.
#[derive(Debug, Clone)]
pub struct MultiTap {
    state: State,
    timing: Timing,
}

impl MultiTap {
    /// Creates an idle classifier with the default [`Timing`].
    pub fn new() -> Self {
        Self::with_timing(Timing::DEFAULT)
    }

    /// Creates an idle classifier with the given thresholds.
    pub fn with_timing(timing: Timing) -> Self {
        Self {
            state: State::NotPressed,
            timing,
        }
    }

    /// The thresholds in use.
    pub fn timing(&self) -> &Timing {
        &self.timing
    }

    /// Replaces the timing thresholds. Takes effect on the next poll, including for a gesture
    /// already in progress.
    pub fn set_timing(&mut self, timing: Timing) {
        self.timing = timing;
    }

    /// Abandons any gesture in progress.
    pub fn reset(&mut self) {
        self.state = State::NotPressed;
    }

    /// True if no gesture is in progress.
    pub fn is_idle(&self) -> bool {
        self.state == State::NotPressed
    }

    /// Time of the press that the current timing window is measured from.
    pub fn last_fell(&self) -> Option<Millis> {
        match self.state {
            State::Pressed { fell_at, .. }
            | State::Long { fell_at }
            | State::VeryLong { fell_at } => Some(fell_at),
            State::NotPressed | State::Released { .. } => None,
        }
    }

    /// Time of the release that the current inter-tap window is measured from.
    pub fn last_rose(&self) -> Option<Millis> {
        match self.state {
            State::Released { rose_at, .. } => Some(rose_at),
            _ => None,
        }
    }

    /// Advances the state machine by one poll.
    ///
    /// `edge` is the edge reported by the switch during this poll, and `now` the current time.
    /// Exactly one result is returned per call.
    pub fn poll(&mut self, edge: Option<Edge>, now: Millis) -> Gesture {
        let (next, result) = self.step(edge, now);
        if next != self.state {
            log::trace!("{:?} -> {:?} at {} ms", self.state, next, now);
            self.state = next;
        }
        if result.is_final() {
            log::debug!("{:?}", result);
        }
        result
    }

    fn step(&self, edge: Option<Edge>, now: Millis) -> (State, Gesture) {
        let timing = &self.timing;
        match (self.state, edge) {
            (State::NotPressed, Some(Edge::Fell)) => (
                State::Pressed {
                    taps: Taps::One,
                    fell_at: now,
                },
                Gesture::PressStarted,
            ),
            (State::NotPressed, None) => (State::NotPressed, Gesture::NotPressed),

            (State::Pressed { taps, .. }, Some(Edge::Rose)) => {
                (State::Released { taps, rose_at: now }, Gesture::InProgress)
            }
            (State::Pressed { fell_at, .. }, None)
                if elapsed(fell_at, now) >= timing.long_press_ms =>
            {
                (State::Long { fell_at }, Gesture::LongStarted)
            }

            (State::Released { taps, .. }, Some(Edge::Fell)) => (
                State::Pressed {
                    taps: taps.next(),
                    fell_at: now,
                },
                Gesture::InProgress,
            ),
            (State::Released { taps, rose_at }, None)
                if elapsed(rose_at, now) >= timing.inter_tap_max_ms =>
            {
                (State::NotPressed, taps.gesture())
            }

            (State::Long { .. }, Some(Edge::Rose)) => (State::NotPressed, Gesture::Long),
            (State::Long { fell_at }, None)
                if elapsed(fell_at, now) >= timing.very_long_press_ms =>
            {
                (State::VeryLong { fell_at }, Gesture::VeryLong)
            }

            (State::VeryLong { .. }, Some(Edge::Rose)) => (State::NotPressed, Gesture::NotPressed),

            (state, _) => (state, Gesture::InProgress),
        }
    }
}

impl Default for MultiTap {
    fn default() -> Self {
        Self::new()
    }
}

/// Click detection: true if the edge seen during this poll is a new press.
///
/// Starting from an idle [`MultiTap`], this is true on exactly the polls where the classifier
/// reports [`Gesture::PressStarted`].
pub fn is_click(edge: Option<Edge>) -> bool {
    edge == Some(Edge::Fell)
}
