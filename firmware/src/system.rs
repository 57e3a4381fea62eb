use crate::clock::SysTickClock;
use cortex_m::interrupt::CriticalSection;
use ledswitch::{button, indicator, Gesture, Indicator, LedSwitch, Switch};
use stm32f0xx_hal::gpio::{Input, Output, Pin, PullUp, PushPull};
use stm32f0xx_hal::prelude::*;
use stm32f0xx_hal::stm32::{CorePeripherals, Peripherals};

const SYSCLK_HZ: u32 = 48_000_000;

/// A lit tactile switch: switch to ground with a pull-up, LED from the pin to ground.
pub type Channel = LedSwitch<
    Switch<button::ActiveLow<Pin<Input<PullUp>>>>,
    indicator::ActiveHigh<Pin<Output<PushPull>>>,
    SysTickClock,
>;

/// The switch panel: one channel demonstrating gestures, and three plain click-to-toggle
/// channels.
pub struct System {
    status_led: indicator::ActiveLow<Pin<Output<PushPull>>>,
    gesture_channel: Channel,
    click_channels: [Channel; 3],
    last_gesture: Gesture,
}

impl System {
    pub fn new(mut dp: Peripherals, cp: CorePeripherals, cs: &CriticalSection) -> Self {
        let mut rcc = dp
            .RCC
            .configure()
            .hsi48()
            .enable_crs(dp.CRS)
            .sysclk(SYSCLK_HZ.hz())
            .pclk(24.mhz())
            .freeze(&mut dp.FLASH);

        let gpioa = dp.GPIOA.split(&mut rcc);
        let gpiob = dp.GPIOB.split(&mut rcc);
        let gpiof = dp.GPIOF.split(&mut rcc);

        let clock = SysTickClock::start(cp.SYST, SYSCLK_HZ);
        let status_led = indicator::ActiveLow::new(gpiob.pb12.into_push_pull_output(cs).downgrade());

        // Channel I/Os have identical pin configurations, but each pin has its own type until it
        // is downgraded.
        macro_rules! channel {
            (sw: $sw:expr, led: $led:expr $(,)?) => {
                LedSwitch::new(
                    Switch::new(button::ActiveLow::new($sw.into_pull_up_input(cs).downgrade())),
                    indicator::ActiveHigh::new($led.into_push_pull_output(cs).downgrade()),
                    clock,
                )
            };
        }

        let gesture_channel = channel!(sw: gpiob.pb3, led: gpiob.pb4);
        let click_channels = [
            channel!(sw: gpioa.pa15, led: gpiob.pb5),
            channel!(sw: gpiof.pf1, led: gpioa.pa0),
            channel!(sw: gpiof.pf0, led: gpioa.pa1),
        ];

        System {
            status_led,
            gesture_channel,
            click_channels,
            last_gesture: Gesture::NotPressed,
        }
    }

    pub fn run(&mut self) -> ! {
        self.status_led.turn_on().ok();

        loop {
            if let Ok(gesture) = self.gesture_channel.pressed2() {
                self.on_gesture(gesture);
            }
            for channel in &mut self.click_channels {
                if let Ok(true) = channel.pressed() {
                    channel.led_toggle().ok();
                }
            }
            // Poll once per SysTick; switches debounce over 8 polls.
            cortex_m::asm::wfi();
        }
    }

    fn on_gesture(&mut self, gesture: Gesture) {
        let idle = matches!(gesture, Gesture::NotPressed | Gesture::InProgress);
        if !idle || gesture != self.last_gesture {
            log::info!("{:?} ({})", gesture, gesture.code());
        }
        self.last_gesture = gesture;

        let channel = &mut self.gesture_channel;
        let result = match gesture {
            Gesture::Tap1 => channel.led_toggle(),
            Gesture::Tap2 => channel.led_on(),
            Gesture::Tap3 => channel.led_off(),
            Gesture::Long => {
                for other in &mut self.click_channels {
                    other.led_toggle().ok();
                }
                Ok(())
            }
            Gesture::VeryLong => {
                for other in &mut self.click_channels {
                    other.led_off().ok();
                }
                channel.led_off()
            }
            _ => Ok(()),
        };
        if result.is_err() {
            log::warn!("failed to drive gesture LED");
        }
    }
}
