//! Simulated PIT register file for host-side tests.
//!
//! Covers `PIT_BASE..PIT_BASE + BLOCK_SIZE`. Stores to TFLAG clear the bits
//! written as 1. Stores to CVAL are dropped, as on hardware. Anything
//! outside the block, or unaligned, panics the way a bus fault would trap.

use core::sync::atomic::{AtomicUsize, Ordering};
use spin::Mutex;

use crate::bus::Bus;
use crate::register::{self, Tflag, BLOCK_SIZE, CHANNEL_COUNT, PIT_BASE};

const WORDS: usize = (BLOCK_SIZE / 4) as usize;

pub struct SimulatedBus {
    cells: Mutex<[u32; WORDS]>,
    stores: AtomicUsize,
}

impl SimulatedBus {
    /// All registers read 0.
    pub const fn new() -> Self {
        Self {
            cells: Mutex::new([0; WORDS]),
            stores: AtomicUsize::new(0),
        }
    }

    /// Raw read that never changes state.
    pub fn peek(&self, address: u32) -> u32 {
        self.cells.lock()[index(address)]
    }

    /// Raw write that bypasses register semantics, e.g. to fake state left by a
    /// bootloader. Not counted as a store.
    pub fn poke(&self, address: u32, value: u32) {
        self.cells.lock()[index(address)] = value;
    }

    /// Hardware side of a countdown reaching zero: sets the channel's TIF.
    pub fn expire(&self, channel: usize) {
        let flag = register::tflag(channel).address();
        self.cells.lock()[index(flag)] |= Tflag::TIF.bits();
    }

    /// Number of `Bus::store` calls so far.
    pub fn store_count(&self) -> usize {
        self.stores.load(Ordering::Relaxed)
    }
}

impl Default for SimulatedBus {
    fn default() -> Self {
        Self::new()
    }
}

fn index(address: u32) -> usize {
    let offset = address.wrapping_sub(PIT_BASE);
    if offset >= BLOCK_SIZE || offset % 4 != 0 {
        panic!("sim: bus fault at {:#010x}", address);
    }
    (offset / 4) as usize
}

fn is_flag(address: u32) -> bool {
    (0..CHANNEL_COUNT).any(|ch| register::tflag(ch).address() == address)
}

fn is_current_value(address: u32) -> bool {
    (0..CHANNEL_COUNT).any(|ch| register::cval(ch).address() == address)
}

impl Bus for SimulatedBus {
    fn load(&self, address: u32) -> u32 {
        self.cells.lock()[index(address)]
    }

    fn store(&self, address: u32, value: u32) {
        let slot = index(address);
        self.stores.fetch_add(1, Ordering::Relaxed);
        let mut cells = self.cells.lock();
        if is_flag(address) {
            cells[slot] &= !value;
        } else if !is_current_value(address) {
            cells[slot] = value;
        }
    }
}
