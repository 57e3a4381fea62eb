use crate::button::Button;
use debouncr::{DebouncerStateful, Repeat8};

/// A level change reported by an [`EdgeSource`].
///
/// Named after the active-low wiring of a switch to ground: the input falls when the switch is
/// pressed and rises when it is released.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Edge {
    Fell,
    Rose,
}

/// A debounced input that reports press and release edges.
pub trait EdgeSource {
    type Error;

    /// Samples the input. Returns `true` if the input changed state since the last call.
    ///
    /// Call this exactly once per poll; [`fell`](Self::fell) and [`rose`](Self::rose) describe the
    /// most recent call.
    fn update(&mut self) -> Result<bool, Self::Error>;

    /// True if the last [`update`](Self::update) saw the switch get pressed.
    fn fell(&self) -> bool;

    /// True if the last [`update`](Self::update) saw the switch get released.
    fn rose(&self) -> bool;

    /// Updates the source and returns the edge seen during this poll, if any.
    fn poll_edge(&mut self) -> Result<Option<Edge>, Self::Error> {
        if !self.update()? {
            return Ok(None);
        }
        let edge = if self.fell() {
            Some(Edge::Fell)
        } else if self.rose() {
            Some(Edge::Rose)
        } else {
            None
        };
        Ok(edge)
    }
}

/// Number of consecutive polls a new level must be seen for before the switch reports it.
pub const DEBOUNCE_POLLS: u32 = 8;

type Filter = DebouncerStateful<u8, Repeat8>;

/// A switch or momentary button, reporting debounced edges.
///
/// A press or release is only reported once the button has read the same level for
/// [`DEBOUNCE_POLLS`] consecutive polls, so contact bounce shorter than that never produces an
/// edge. Polled at 1 kHz, that is 8 ms.
pub struct Switch<B> {
    button: B,
    filter: Filter,
    edge: Option<Edge>,
}

impl<B> Switch<B> {
    /// Creates a new switch from the given button. The switch starts out released.
    pub fn new(button: B) -> Self {
        Self {
            button,
            filter: debouncr::debounce_stateful_8(false),
            edge: None,
        }
    }

    /// True if the debounced switch state is pressed.
    pub fn is_pressed(&self) -> bool {
        self.filter.is_high()
    }

    pub fn button(&mut self) -> &mut B {
        &mut self.button
    }
}

impl<B> EdgeSource for Switch<B>
where
    B: Button,
{
    type Error = B::Error;

    fn update(&mut self) -> Result<bool, Self::Error> {
        let pressed = self.button.poll()?;

        self.edge = match self.filter.update(pressed) {
            Some(debouncr::Edge::Rising) => Some(Edge::Fell),
            Some(debouncr::Edge::Falling) => Some(Edge::Rose),
            None => None,
        };
        Ok(self.edge.is_some())
    }

    fn fell(&self) -> bool {
        self.edge == Some(Edge::Fell)
    }

    fn rose(&self) -> bool {
        self.edge == Some(Edge::Rose)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::button::ActiveLow;
    use embedded_hal_mock::pin::{Mock, State, Transaction};

    /// Pin reads for runs of `(level, polls)`.
    fn reads(runs: &[(State, u32)]) -> Vec<Transaction> {
        runs.iter()
            .flat_map(|(level, polls)| (0..*polls).map(move |_| Transaction::get(level.clone())))
            .collect()
    }

    fn edges<B: Button>(switch: &mut Switch<B>, polls: u32) -> Vec<(u32, Edge)>
    where
        B::Error: core::fmt::Debug,
    {
        (0..polls)
            .filter_map(|i| switch.poll_edge().unwrap().map(|edge| (i, edge)))
            .collect()
    }

    #[test]
    fn reports_press_and_release() {
        let mut pin = Mock::new(&reads(&[
            (State::High, 5),
            (State::Low, 20),
            (State::High, 20),
        ]));
        let mut switch = Switch::new(ActiveLow::new(pin.clone()));

        assert_eq!(edges(&mut switch, 5 + 20), [(12, Edge::Fell)]);
        assert!(switch.is_pressed());
        assert_eq!(edges(&mut switch, 20), [(7, Edge::Rose)]);
        assert!(!switch.is_pressed());
        pin.done();
    }

    #[test]
    fn ignores_bounce() {
        let mut pin = Mock::new(&reads(&[
            (State::Low, 1),
            (State::High, 1),
            (State::Low, 3),
            (State::High, 2),
            (State::Low, 20),
            (State::High, 1),
            (State::Low, 1),
            (State::High, 20),
        ]));
        let mut switch = Switch::new(ActiveLow::new(pin.clone()));

        // Each edge is reported on the eighth poll of the run that finally settles.
        assert_eq!(edges(&mut switch, 49), [(14, Edge::Fell), (36, Edge::Rose)]);
        pin.done();
    }

    #[test]
    fn edge_flags_follow_last_update() {
        let mut pin = Mock::new(&reads(&[(State::Low, 9)]));
        let mut switch = Switch::new(ActiveLow::new(pin.clone()));

        for _ in 0..7 {
            assert!(!switch.update().unwrap());
        }
        assert!(switch.update().unwrap());
        assert!(switch.fell());
        assert!(!switch.rose());
        assert!(!switch.update().unwrap());
        assert!(!switch.fell());
        assert!(!switch.rose());
        pin.done();
    }
}
