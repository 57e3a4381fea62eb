use core::cell::Cell;
use cortex_m::interrupt::{self, Mutex};
use cortex_m::peripheral::syst::SystClkSource;
use cortex_m::peripheral::SYST;
use cortex_m_rt::exception;
use ledswitch::{Clock, Millis};

/// Milliseconds since the SysTick timer was started. Only written by the SysTick handler.
static MILLIS: Mutex<Cell<Millis>> = Mutex::new(Cell::new(0));

/// Millisecond clock driven by the SysTick interrupt.
#[derive(Clone, Copy)]
pub struct SysTickClock {
    _private: (),
}

impl SysTickClock {
    /// Configures SysTick to interrupt once per millisecond.
    pub fn start(mut syst: SYST, sysclk_hz: u32) -> Self {
        syst.set_clock_source(SystClkSource::Core);
        syst.set_reload(sysclk_hz / 1000 - 1);
        syst.clear_current();
        syst.enable_counter();
        syst.enable_interrupt();
        Self { _private: () }
    }
}

impl Clock for SysTickClock {
    fn now_ms(&self) -> Millis {
        interrupt::free(|cs| MILLIS.borrow(cs).get())
    }
}

#[exception]
fn SysTick() {
    interrupt::free(|cs| {
        let millis = MILLIS.borrow(cs);
        millis.set(millis.get().wrapping_add(1));
    });
}
