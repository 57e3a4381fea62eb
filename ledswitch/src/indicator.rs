use core::convert::Infallible;
use embedded_hal::digital::v2::OutputPin;

/// An indicator output that can be switched on or off.
pub trait Indicator {
    type Error;

    /// Switches the indicator on.
    fn turn_on(&mut self) -> Result<(), Self::Error>;

    /// Switches the indicator off.
    fn turn_off(&mut self) -> Result<(), Self::Error>;

    /// True if the indicator was last switched on.
    fn is_on(&self) -> bool;

    /// Switches the indicator on if it was off, and off if it was on.
    fn toggle(&mut self) -> Result<(), Self::Error> {
        if self.is_on() {
            self.turn_off()
        } else {
            self.turn_on()
        }
    }

    fn set(&mut self, on: bool) -> Result<(), Self::Error> {
        if on {
            self.turn_on()
        } else {
            self.turn_off()
        }
    }
}

/// Active-low output LED.
pub struct ActiveLow<L> {
    pin: L,
    on: bool,
}

impl<L> ActiveLow<L>
where
    L: OutputPin,
{
    /// Create a new LED from the given output pin. The LED starts out off.
    pub fn new(mut pin: L) -> Self {
        pin.set_high().ok();
        Self { pin, on: false }
    }
}

impl<L> Indicator for ActiveLow<L>
where
    L: OutputPin,
{
    type Error = L::Error;

    fn turn_on(&mut self) -> Result<(), Self::Error> {
        self.pin.set_low()?;
        self.on = true;
        Ok(())
    }

    fn turn_off(&mut self) -> Result<(), Self::Error> {
        self.pin.set_high()?;
        self.on = false;
        Ok(())
    }

    fn is_on(&self) -> bool {
        self.on
    }
}

/// Active-high output LED, connected between the pin and ground.
pub struct ActiveHigh<L> {
    pin: L,
    on: bool,
}

impl<L> ActiveHigh<L>
where
    L: OutputPin,
{
    /// Create a new LED from the given output pin. The LED starts out off.
    pub fn new(mut pin: L) -> Self {
        pin.set_low().ok();
        Self { pin, on: false }
    }
}

impl<L> Indicator for ActiveHigh<L>
where
    L: OutputPin,
{
    type Error = L::Error;

    fn turn_on(&mut self) -> Result<(), Self::Error> {
        self.pin.set_high()?;
        self.on = true;
        Ok(())
    }

    fn turn_off(&mut self) -> Result<(), Self::Error> {
        self.pin.set_low()?;
        self.on = false;
        Ok(())
    }

    fn is_on(&self) -> bool {
        self.on
    }
}

#[derive(Default)]
pub struct Disabled;

impl Indicator for Disabled {
    type Error = Infallible;

    fn turn_on(&mut self) -> Result<(), Self::Error> {
        Ok(())
    }

    fn turn_off(&mut self) -> Result<(), Self::Error> {
        Ok(())
    }

    fn is_on(&self) -> bool {
        false
    }
}
