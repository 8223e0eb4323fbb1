//! PIT register map.
//!
//! All registers are 32 bits wide. Channel `n` owns a 16-byte window at
//! `PIT_BASE + 0x100 + n * 0x10`:
//!
//! | offset | register | usage                                  |
//! +--------+----------+----------------------------------------|
//! | 0x00   | LDVAL    | countdown start value                  |
//! | 0x04   | CVAL     | current countdown value (read only)    |
//! | 0x08   | TCTRL    | timer enable, interrupt enable, chain  |
//! | 0x0C   | TFLAG    | timer elapsed, write 1 to clear        |
//!
//! MCR sits at the start of the block.

use crate::bus::Bus;

/// PIT register block base on this part.
pub const PIT_BASE: u32 = 0x4008_4000;

pub const CHANNEL_COUNT: usize = 4;

const CHANNEL_BLOCK: u32 = 0x100;
const CHANNEL_STRIDE: u32 = 0x10;

const MCR_OFFSET: u32 = 0x00;
const LDVAL_OFFSET: u32 = 0x00;
const CVAL_OFFSET: u32 = 0x04;
const TCTRL_OFFSET: u32 = 0x08;
const TFLAG_OFFSET: u32 = 0x0C;

/// Bytes from `PIT_BASE` to the end of the last channel window.
pub const BLOCK_SIZE: u32 = channel_base(CHANNEL_COUNT) - PIT_BASE;

/// One 32-bit register.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Register {
    address: u32,
}

impl Register {
    pub const fn at(address: u32) -> Self {
        Self { address }
    }

    pub const fn address(self) -> u32 {
        self.address
    }

    #[inline(always)]
    pub fn load<B: Bus + ?Sized>(self, bus: &B) -> u32 {
        bus.load(self.address)
    }

    #[inline(always)]
    pub fn store<B: Bus + ?Sized>(self, bus: &B, value: u32) {
        bus.store(self.address, value)
    }
}

pub const fn channel_base(channel: usize) -> u32 {
    PIT_BASE + CHANNEL_BLOCK + (channel as u32) * CHANNEL_STRIDE
}

pub const MCR: Register = Register::at(PIT_BASE + MCR_OFFSET);

pub const fn ldval(channel: usize) -> Register {
    Register::at(channel_base(channel) + LDVAL_OFFSET)
}

pub const fn cval(channel: usize) -> Register {
    Register::at(channel_base(channel) + CVAL_OFFSET)
}

pub const fn tctrl(channel: usize) -> Register {
    Register::at(channel_base(channel) + TCTRL_OFFSET)
}

pub const fn tflag(channel: usize) -> Register {
    Register::at(channel_base(channel) + TFLAG_OFFSET)
}

const _: () = assert!(channel_base(0) == PIT_BASE + 0x100);
const _: () = assert!(channel_base(2) == PIT_BASE + 0x120);
const _: () = assert!(tctrl(0).address() == 0x4008_4108);
const _: () = assert!(ldval(0).address() == 0x4008_4100);
const _: () = assert!(ldval(1).address() == 0x4008_4110);
const _: () = assert!(tflag(0).address() == PIT_BASE + 0x10C);
const _: () = assert!(tflag(3).address() == 0x4008_413C);
const _: () = assert!(BLOCK_SIZE == 0x140);

bitflags::bitflags! {
    /// Module control register.
    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    pub struct Mcr: u32 {
        /// Timers stop while the core is halted in debug
        const FRZ = 1 << 0;
        /// Module disable
        const MDIS = 1 << 1;
    }
}

bitflags::bitflags! {
    /// Channel timer control register.
    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    pub struct Tctrl: u32 {
        const TEN = 1 << 0;
        const TIE = 1 << 1;
        const CHN = 1 << 2;
    }
}

bitflags::bitflags! {
    /// Channel timer flag register.
    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    pub struct Tflag: u32 {
        const TIF = 1 << 0;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_channel_base_formula() {
        for ch in 0..CHANNEL_COUNT {
            assert_eq!(channel_base(ch), 0x4008_4000 + 0x100 + ch as u32 * 0x10);
        }
    }

    #[test]
    fn test_register_table() {
        assert_eq!(MCR.address(), 0x4008_4000);
        assert_eq!(ldval(0).address(), 0x4008_4100);
        assert_eq!(tctrl(0).address(), 0x4008_4108);
        assert_eq!(tflag(0).address(), 0x4008_410C);
        assert_eq!(ldval(1).address(), 0x4008_4110);
        assert_eq!(cval(2).address(), 0x4008_4124);
        assert_eq!(tflag(3).address(), 0x4008_413C);
    }

    #[test]
    fn test_channel_windows_disjoint() {
        for a in 0..CHANNEL_COUNT {
            for b in (a + 1)..CHANNEL_COUNT {
                assert!(tflag(a).address() < ldval(b).address());
            }
        }
    }

    #[test]
    fn test_control_bits() {
        assert_eq!(Tctrl::TEN.bits(), 1);
        assert_eq!(Tflag::TIF.bits(), 1);
        assert_eq!(Mcr::empty().bits(), 0);
        assert!(!Tctrl::from_bits_truncate(0b110).contains(Tctrl::TEN));
    }
}
