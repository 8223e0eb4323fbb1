//! PIT controller: module reset and the four static channel handles.

use spin::Once;

use crate::bus::Bus;
use crate::channel::Channel;
use crate::register::{self, Mcr, Tctrl, CHANNEL_COUNT, MCR};
use crate::util::{PitError, PitResult};

/// Handles returned by `initialize`, in channel order.
pub type Channels<B> = [&'static Channel<B>; CHANNEL_COUNT];

pub struct Pit<B: Bus + 'static> {
    bus: B,
    channels: Once<[Channel<B>; CHANNEL_COUNT]>,
}

impl<B: Bus + 'static> Pit<B> {
    pub const fn new(bus: B) -> Self {
        Self {
            bus,
            channels: Once::new(),
        }
    }

    pub fn bus(&self) -> &B {
        &self.bus
    }

    /// Clears MCR (module on, not frozen) and stops every channel.
    pub fn reset(&self) {
        MCR.store(&self.bus, Mcr::empty().bits());
        for ch in 0..CHANNEL_COUNT {
            register::tctrl(ch).store(&self.bus, Tctrl::empty().bits());
        }
    }

    /// Resets the module and returns the channel handles.
    ///
    /// Handles are built on the first call and reused afterwards; the reset
    /// runs every time.
    pub fn initialize(&'static self) -> Channels<B> {
        self.reset();

        let channels = self.channels.call_once(|| {
            crate::pitln!("pit: {} channel handles created", CHANNEL_COUNT);
            core::array::from_fn(|index| Channel::new(index, &self.bus))
        });

        let [a, b, c, d] = channels;
        [a, b, c, d]
    }

    pub fn channels(&self) -> Option<&[Channel<B>; CHANNEL_COUNT]> {
        self.channels.get()
    }

    pub fn channel(&self, index: usize) -> PitResult<&Channel<B>> {
        if index >= CHANNEL_COUNT {
            return Err(PitError::InvalidChannel(index));
        }
        self.channels
            .get()
            .map(|channels| &channels[index])
            .ok_or(PitError::NotInitialized)
    }
}
