use log::warn;

use crate::constants::{FONT_SPRITES, FONT_START, MEMORY_SIZE, PROGRAM_START};
use crate::error::Fault;

/// # Memory
/// The 4096 bytes of byte-addressable RAM.
///
/// The region below [`PROGRAM_START`] belongs to the interpreter and holds
/// the font sprite sheet at [`FONT_START`]; programs load at
/// [`PROGRAM_START`] and run to the end of the address space.
///
/// All accessors bounds-check: an address outside 0x000..=0xFFF is a
/// [`Fault::MemoryOutOfBounds`], never a wrap or a clamp.
pub struct Memory {
    bytes: [u8; MEMORY_SIZE],
}

impl Memory {
    pub fn new() -> Self {
        let mut memory = Memory {
            bytes: [0; MEMORY_SIZE],
        };
        memory.write_font();
        memory
    }

    /// Zeroes all of RAM and re-seeds the font sprite sheet.
    pub fn reset(&mut self) {
        self.bytes = [0; MEMORY_SIZE];
        self.write_font();
    }

    fn write_font(&mut self) {
        let start = FONT_START as usize;
        self.bytes[start..start + FONT_SPRITES.len()].copy_from_slice(&FONT_SPRITES);
    }

    pub fn read(&self, address: u16) -> Result<u8, Fault> {
        self.bytes
            .get(address as usize)
            .copied()
            .ok_or(Fault::MemoryOutOfBounds { address })
    }

    pub fn write(&mut self, address: u16, value: u8) -> Result<(), Fault> {
        match self.bytes.get_mut(address as usize) {
            Some(cell) => {
                *cell = value;
                Ok(())
            }
            None => Err(Fault::MemoryOutOfBounds { address }),
        }
    }

    /// Borrows `len` consecutive bytes starting at `address` (sprite rows,
    /// mostly). The reported fault address is the base of the access.
    pub fn read_bytes(&self, address: u16, len: usize) -> Result<&[u8], Fault> {
        let start = address as usize;
        self.bytes
            .get(start..start + len)
            .ok_or(Fault::MemoryOutOfBounds { address })
    }

    /// Copies a ROM image into RAM starting at [`PROGRAM_START`] and returns
    /// the number of bytes actually loaded. Images larger than the remaining
    /// address space are truncated; the load still succeeds.
    pub fn load_rom(&mut self, rom: &[u8]) -> usize {
        let capacity = MEMORY_SIZE - PROGRAM_START as usize;
        let len = rom.len().min(capacity);
        if len < rom.len() {
            warn!(
                "ROM is {} bytes but only {} fit in memory; truncating",
                rom.len(),
                capacity
            );
        }
        let start = PROGRAM_START as usize;
        self.bytes[start..start + len].copy_from_slice(&rom[..len]);
        len
    }
}

impl Default for Memory {
    fn default() -> Self {
        Self::new()
    }
}
