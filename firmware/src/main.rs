#![no_std]
#![cfg_attr(not(test), no_main)]

extern crate panic_semihosting;

mod clock;
mod logger;
mod system;

use cortex_m::interrupt::free as interrupt_free;
use cortex_m_rt as rt;
use stm32f0xx_hal::stm32;
use system::System;

#[cfg(not(test))]
#[rt::entry]
fn main() -> ! {
    logger::init();

    let dp = stm32::Peripherals::take().unwrap();
    let cp = stm32::CorePeripherals::take().unwrap();

    let mut system = interrupt_free(|cs| System::new(dp, cp, cs));
    log::info!("ready");
    system.run()
}
