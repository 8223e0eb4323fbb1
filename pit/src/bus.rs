//! Memory behind the PIT registers.

use core::ptr::{read_volatile, write_volatile};

/// 32-bit word access at absolute addresses.
///
/// Every call is exactly one access of register width. Implementations must not
/// merge, reorder or skip them: PIT registers have side effects on store and
/// change on their own between loads.
pub trait Bus: Sync {
    fn load(&self, address: u32) -> u32;
    fn store(&self, address: u32, value: u32);
}

/// Volatile access to the physical register block.
#[derive(Debug)]
pub struct Mmio {
    _private: (),
}

impl Mmio {
    /// # Safety
    /// The PIT block must be mapped at [`PIT_BASE`](crate::register::PIT_BASE),
    /// i.e. this runs on the i.MX RT part the register map describes.
    ///
    /// At most one `Mmio`, and at most one `Pit<Mmio>`, may exist. The crate
    /// already owns both behind [`initialize_pit`](crate::initialize_pit);
    /// a second controller would hand out a second set of channel handles for
    /// the same hardware.
    pub const unsafe fn new() -> Self {
        Self { _private: () }
    }
}

impl Bus for Mmio {
    #[inline(always)]
    fn load(&self, address: u32) -> u32 {
        // SAFETY: an `Mmio` only exists where the block is mapped (see `new`).
        unsafe { read_volatile(address as usize as *const u32) }
    }

    #[inline(always)]
    fn store(&self, address: u32, value: u32) {
        // SAFETY: as above.
        unsafe { write_volatile(address as usize as *mut u32, value) }
    }
}
