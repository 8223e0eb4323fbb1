//! PIT channel handles.
//!
//! A handle is an index plus the bus it talks to. Building one never touches
//! hardware; only the operations below do, each with a single register access.

use core::fmt;

use crate::bus::Bus;
use crate::register::{self, Tctrl, Tflag};

pub struct Channel<B: Bus + 'static> {
    index: usize,
    bus: &'static B,
}

impl<B: Bus + 'static> Channel<B> {
    pub(crate) const fn new(index: usize, bus: &'static B) -> Self {
        Self { index, bus }
    }

    /// Hardware channel this handle drives.
    pub const fn channel(&self) -> usize {
        self.index
    }

    /// Programs a countdown of `ticks` timer clocks.
    ///
    /// The counter runs from LDVAL down to zero inclusive, so LDVAL gets
    /// `ticks - 1`. Zero ticks loads 0. Does not start the timer.
    pub fn set_load_timer_value(&self, ticks: u32) {
        register::ldval(self.index).store(self.bus, ticks.saturating_sub(1));
    }

    /// Starts counting. TCTRL is overwritten, so TIE and CHN end up clear.
    pub fn enable(&self) {
        register::tctrl(self.index).store(self.bus, Tctrl::TEN.bits());
    }

    pub fn disable(&self) {
        register::tctrl(self.index).store(self.bus, Tctrl::empty().bits());
    }

    pub fn is_enabled(&self) -> bool {
        Tctrl::from_bits_truncate(register::tctrl(self.index).load(self.bus)).contains(Tctrl::TEN)
    }

    /// True once the countdown has reached zero, until `clear_elapsed`.
    ///
    /// Any nonzero TFLAG counts as elapsed.
    pub fn is_elapsed(&self) -> bool {
        register::tflag(self.index).load(self.bus) != 0
    }

    pub fn clear_elapsed(&self) {
        register::tflag(self.index).store(self.bus, Tflag::TIF.bits());
    }

    /// Ticks left in the running countdown.
    pub fn current_timer_value(&self) -> u32 {
        register::cval(self.index).load(self.bus)
    }
}

impl<B: Bus + 'static> fmt::Debug for Channel<B> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Channel").field("index", &self.index).finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::register::{cval, ldval, tctrl, tflag, CHANNEL_COUNT};
    use crate::sim::SimulatedBus;

    static BUS: SimulatedBus = SimulatedBus::new();

    fn channel(index: usize) -> Channel<SimulatedBus> {
        Channel::new(index, &BUS)
    }

    // Each test below works on its own channel of the shared BUS.

    #[test]
    fn test_load_value_off_by_one() {
        let ch = channel(0);
        ch.set_load_timer_value(0);
        assert_eq!(BUS.peek(ldval(0).address()), 0);

        ch.set_load_timer_value(1);
        assert_eq!(BUS.peek(ldval(0).address()), 0);

        ch.set_load_timer_value(24_000_000);
        assert_eq!(BUS.peek(ldval(0).address()), 23_999_999);

        ch.set_load_timer_value(u32::MAX);
        assert_eq!(BUS.peek(ldval(0).address()), u32::MAX - 1);
    }

    #[test]
    fn test_enable_overwrites_control() {
        let ch = channel(1);
        BUS.poke(tctrl(1).address(), 0xffff_fff6);
        assert!(!ch.is_enabled());

        ch.enable();
        assert_eq!(BUS.peek(tctrl(1).address()), 1);
        assert!(ch.is_enabled());

        ch.disable();
        assert_eq!(BUS.peek(tctrl(1).address()), 0);
        assert!(!ch.is_enabled());
    }

    #[test]
    fn test_elapsed_then_cleared() {
        let ch = channel(2);
        assert!(!ch.is_elapsed());

        BUS.expire(2);
        assert!(ch.is_elapsed());
        // Reading does not clear.
        assert!(ch.is_elapsed());

        ch.clear_elapsed();
        assert!(!ch.is_elapsed());
    }

    #[test]
    fn test_any_nonzero_flag_is_elapsed() {
        let ch = channel(3);
        BUS.poke(tflag(3).address(), 0b10);
        assert!(ch.is_elapsed());
        BUS.poke(tflag(3).address(), 0);
        assert!(!ch.is_elapsed());
    }

    #[test]
    fn test_current_timer_value_and_index() {
        let bus: &'static SimulatedBus = Box::leak(Box::new(SimulatedBus::new()));
        for index in 0..CHANNEL_COUNT {
            bus.poke(cval(index).address(), 100 + index as u32);
            let ch = Channel::new(index, bus);
            assert_eq!(ch.channel(), index);
            assert_eq!(ch.current_timer_value(), 100 + index as u32);
        }
        assert_eq!(bus.store_count(), 0);
    }
}
