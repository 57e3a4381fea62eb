use crate::clock::Clock;
use crate::config::Timing;
use crate::gesture::{self, Gesture, MultiTap};
use crate::indicator::Indicator;
use crate::switch::EdgeSource;

/// A momentary switch with its own LED, such as a lit tactile switch.
///
/// Typically one of these is created for each switch and polled on every iteration of the main
/// loop. Use either [`pressed`](Self::pressed) or [`pressed2`](Self::pressed2) for a given switch,
/// not both; each call consumes that poll's edge.
pub struct LedSwitch<S, I, C> {
    switch: S,
    indicator: I,
    clock: C,
    classifier: MultiTap,
}

impl<S, I, C> LedSwitch<S, I, C>
where
    S: EdgeSource,
    I: Indicator,
    C: Clock,
{
    pub fn new(switch: S, indicator: I, clock: C) -> Self {
        Self {
            switch,
            indicator,
            clock,
            classifier: MultiTap::new(),
        }
    }

    /// Overrides the gesture timing thresholds for this switch.
    pub fn with_timing(mut self, timing: Timing) -> Self {
        self.classifier.set_timing(timing);
        self
    }

    /// Returns `true` on the poll where the switch gets pressed.
    pub fn pressed(&mut self) -> Result<bool, S::Error> {
        Ok(gesture::is_click(self.switch.poll_edge()?))
    }

    /// Polls the switch and classifies its activity.
    ///
    /// Most callers are interested in the taps, [`Gesture::Long`] and [`Gesture::VeryLong`]; the
    /// other results describe a gesture still in progress.
    pub fn pressed2(&mut self) -> Result<Gesture, S::Error> {
        let edge = self.switch.poll_edge()?;
        let now = self.clock.now_ms();
        Ok(self.classifier.poll(edge, now))
    }

    pub fn led_on(&mut self) -> Result<(), I::Error> {
        self.indicator.turn_on()
    }

    pub fn led_off(&mut self) -> Result<(), I::Error> {
        self.indicator.turn_off()
    }

    /// Turns the LED off if it was on, and on if it was off.
    pub fn led_toggle(&mut self) -> Result<(), I::Error> {
        self.indicator.toggle()
    }

    /// True if the LED is on.
    pub fn led_state(&self) -> bool {
        self.indicator.is_on()
    }
}

impl<S, I, C> LedSwitch<S, I, C> {
    pub fn switch(&mut self) -> &mut S {
        &mut self.switch
    }

    pub fn indicator(&mut self) -> &mut I {
        &mut self.indicator
    }

    pub fn classifier(&self) -> &MultiTap {
        &self.classifier
    }

    pub fn classifier_mut(&mut self) -> &mut MultiTap {
        &mut self.classifier
    }
}
