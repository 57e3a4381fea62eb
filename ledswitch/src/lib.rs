//! Gesture detection for momentary switches with a built-in indicator LED.
//!
//! A [`LedSwitch`] bundles the switch input, the LED output and a millisecond clock. Poll it once
//! per main loop iteration with either [`LedSwitch::pressed`] for plain click detection, or
//! [`LedSwitch::pressed2`] to classify taps, double taps, triple taps and long presses.

#![cfg_attr(not(test), no_std)]

pub mod button;
pub mod clock;
pub mod config;
pub mod gesture;
pub mod indicator;
pub mod led_switch;
pub mod switch;

pub use self::button::Button;
pub use self::clock::{Clock, Millis};
pub use self::config::Timing;
pub use self::gesture::{Gesture, MultiTap};
pub use self::indicator::Indicator;
pub use self::led_switch::LedSwitch;
pub use self::switch::{Edge, EdgeSource, Switch};
