use cortex_m_semihosting::hprintln;
use log::{Level, LevelFilter, Metadata, Record};

pub struct Logger {
    level: Level,
}

static LOGGER: Logger = Logger { level: Level::Info };

/// Installs the semihosting logger. Must run before interrupts are enabled.
pub fn init() {
    // SAFETY: called once at boot, before any interrupt handler could log.
    unsafe { log::set_logger_racy(&LOGGER) }
        .map(|()| log::set_max_level(LevelFilter::Info))
        .ok();
}

impl log::Log for Logger {
    fn enabled(&self, metadata: &Metadata) -> bool {
        metadata.level() <= self.level
    }

    fn log(&self, record: &Record) {
        if self.enabled(record.metadata()) {
            hprintln!("{} - {}", record.level(), record.args()).ok();
        }
    }

    fn flush(&self) {}
}
