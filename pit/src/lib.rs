#![cfg_attr(not(test), no_std)]

//! i.MX RT periodic interrupt timer (PIT) driver.
//!
//! The PIT has four independent 32-bit countdown channels. Call
//! [`initialize_pit`] once at boot (or again, to reset) and poll the returned
//! handles:
//!
//! ```no_run
//! let [timer, ..] = imxrt_pit::initialize_pit();
//! timer.set_load_timer_value(24_000_000 / 4);
//! timer.enable();
//! loop {
//!     while !timer.is_elapsed() {}
//!     timer.clear_elapsed();
//! }
//! ```
//!
//! Register access goes through a [`Bus`]. On the part that is [`Mmio`]; host
//! tests build their own [`Pit`] over `sim::SimulatedBus` (feature `sim`).

pub mod util;

pub mod bus;
pub mod channel;
pub mod pit;
pub mod register;
#[cfg(any(test, feature = "sim"))]
pub mod sim;

pub use bus::{Bus, Mmio};
pub use channel::Channel;
pub use pit::{Channels, Pit};
pub use register::{CHANNEL_COUNT, PIT_BASE};
pub use util::{PitError, PitResult};

// SAFETY: this crate only targets the part whose PIT block is at `PIT_BASE`,
// and this is the crate's one `Mmio` and one `Pit<Mmio>`.
static PIT: Pit<Mmio> = Pit::new(unsafe { Mmio::new() });

/// Resets the PIT and returns the four channel handles in order.
///
/// Every call performs the reset; the handles are the same objects each time.
pub fn initialize_pit() -> Channels<Mmio> {
    PIT.initialize()
}

/// The controller behind [`initialize_pit`].
pub fn pit() -> &'static Pit<Mmio> {
    &PIT
}

/// Handle for one hardware channel, once [`initialize_pit`] has run.
pub fn channel(index: usize) -> PitResult<&'static Channel<Mmio>> {
    PIT.channel(index)
}
