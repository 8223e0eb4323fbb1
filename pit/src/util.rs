//! Logging macros and the crate error type.

use core::fmt;
use spin::Mutex;

/// Destination for `pit_print!`/`pitln!` output, usually the board's UART writer.
pub type LogSink = fn(fmt::Arguments<'_>);

static SINK: Mutex<Option<LogSink>> = Mutex::new(None);

/// Routes driver log output to `sink`. Replaces any sink installed before.
pub fn set_log_sink(sink: LogSink) {
    *SINK.lock() = Some(sink);
}

/// Drops the installed sink; logging becomes a no-op.
pub fn clear_log_sink() {
    *SINK.lock() = None;
}

#[doc(hidden)]
pub fn _print(args: fmt::Arguments) {
    // Copy out so a sink that logs again doesn't spin on SINK.
    let sink = *SINK.lock();
    if let Some(sink) = sink {
        sink(args);
    }
}

#[macro_export]
macro_rules! pit_print {
    ($($arg:tt)*) => ({
        $crate::util::_print(format_args!($($arg)*));
    });
}

#[macro_export]
macro_rules! pitln {
    () => ($crate::pit_print!("\n"));
    ($fmt:expr) => ($crate::pit_print!(concat!($fmt, "\n")));
    ($fmt:expr, $($arg:tt)*) => ($crate::pit_print!(concat!($fmt, "\n"), $($arg)*));
}

/// Errors from channel lookups. Register access itself never fails.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PitError {
    /// Index outside `0..CHANNEL_COUNT`
    InvalidChannel(usize),
    /// Handles are built by the first `initialize`; asked for one before that
    NotInitialized,
}

impl PitError {
    pub fn description(&self) -> &'static str {
        match self {
            Self::InvalidChannel(_) => "no such PIT channel",
            Self::NotInitialized => "PIT channels not initialized",
        }
    }
}

pub type PitResult<T> = core::result::Result<T, PitError>;

impl fmt::Display for PitError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidChannel(index) => write!(
                f,
                "{}: index {} (have {})",
                self.description(),
                index,
                crate::register::CHANNEL_COUNT
            ),
            Self::NotInitialized => write!(f, "{}", self.description()),
        }
    }
}
