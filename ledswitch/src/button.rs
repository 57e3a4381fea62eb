use embedded_hal::digital::v2::InputPin;

/// A button that can be pressed or un-pressed.
pub trait Button {
    type Error;

    /// Samples the input, and returns `true` if the button is currently being pressed.
    fn poll(&mut self) -> Result<bool, Self::Error>;
}

/// An active-low button, wired between the pin and ground with a pull-up.
pub struct ActiveLow<P> {
    pin: P,
}

impl<P> ActiveLow<P> {
    /// Creates a new button from the given active-low input pin.
    pub fn new(pin: P) -> Self {
        Self { pin }
    }
}

impl<P> Button for ActiveLow<P>
where
    P: InputPin,
{
    type Error = P::Error;

    fn poll(&mut self) -> Result<bool, Self::Error> {
        self.pin.is_low()
    }
}
