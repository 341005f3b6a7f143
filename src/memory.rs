//! # Memory Bus Abstraction
//!
//! The CPU reaches memory only through the `MemoryBus` trait. The crate ships
//! one implementation, `FlatMemory`, a single 64KB RAM array covering the whole
//! 16-bit address space.
//!
//! ## Layout Conventions
//!
//! - `0x0000-0x00FF`: zero page
//! - `0x8000-0xFFFF`: program code after `load_program`
//! - `0xFFFC-0xFFFD`: reset vector (little-endian entry point)

use log::{debug, warn};

use crate::image::ProgramImage;

/// Size of the address space in bytes.
pub const MEMORY_SIZE: usize = 0x1_0000;

/// Address at which `load_program` places the first program byte.
pub const PROGRAM_START: u16 = 0x8000;

/// Address of the little-endian reset vector.
pub const RESET_VECTOR: u16 = 0xFFFC;

/// Memory bus trait for CPU to read/write bytes.
///
/// Reads and writes never fail: the address type covers the whole space.
///
/// # Examples
///
/// ```
/// use tiny6502::{MemoryBus, FlatMemory};
///
/// let mut mem = FlatMemory::new();
/// mem.write(0x1234, 0x42);
/// assert_eq!(mem.read(0x1234), 0x42);
/// ```
///
/// ## Implementing Custom Memory
///
/// ```
/// use tiny6502::MemoryBus;
///
/// struct RomRamMemory {
///     ram: [u8; 0x8000],
///     rom: [u8; 0x8000],
/// }
///
/// impl MemoryBus for RomRamMemory {
///     fn read(&self, addr: u16) -> u8 {
///         if addr < 0x8000 {
///             self.ram[addr as usize]
///         } else {
///             self.rom[(addr - 0x8000) as usize]
///         }
///     }
///
///     fn write(&mut self, addr: u16, value: u8) {
///         if addr < 0x8000 {
///             self.ram[addr as usize] = value;
///         }
///     }
/// }
/// ```
pub trait MemoryBus {
    /// Reads a byte from the specified 16-bit address.
    fn read(&self, addr: u16) -> u8;

    /// Writes a byte to the specified 16-bit address.
    fn write(&mut self, addr: u16, value: u8);

    /// Reads a little-endian 16-bit word: `(read(addr + 1) << 8) | read(addr)`.
    ///
    /// The high-byte address wraps from 0xFFFF to 0x0000.
    fn read16_le(&self, addr: u16) -> u16 {
        let lo = self.read(addr) as u16;
        let hi = self.read(addr.wrapping_add(1)) as u16;
        (hi << 8) | lo
    }
}

/// Simple 64KB flat memory implementation.
///
/// All addresses are writable RAM initialized to 0x00.
///
/// # Examples
///
/// ```
/// use tiny6502::{Cpu, FlatMemory, MemoryBus};
///
/// let mut memory = FlatMemory::new();
/// memory.load_program(&[0xEA]);
/// memory.write(0xFFFC, 0x00);
/// memory.write(0xFFFD, 0x80);
///
/// let mut cpu = Cpu::new(memory);
/// cpu.bootstrap();
/// assert_eq!(cpu.pc(), 0x8000);
/// ```
pub struct FlatMemory {
    data: Box<[u8; MEMORY_SIZE]>,
}

impl FlatMemory {
    /// Creates a new FlatMemory instance with all bytes initialized to zero.
    pub fn new() -> Self {
        Self {
            data: Box::new([0; MEMORY_SIZE]),
        }
    }

    /// Copies `bytes` into memory starting at [`PROGRAM_START`].
    ///
    /// Every other location, including the reset vector, is left as it was;
    /// the loader sets the vector separately. Bytes that would run past
    /// 0xFFFF are dropped.
    pub fn load_program(&mut self, bytes: &[u8]) {
        let start = PROGRAM_START as usize;
        let room = MEMORY_SIZE - start;
        if bytes.len() > room {
            warn!(
                "program is {} bytes, only {} fit above 0x{:04X}; truncating",
                bytes.len(),
                room,
                PROGRAM_START
            );
        }
        let len = bytes.len().min(room);
        self.data[start..start + len].copy_from_slice(&bytes[..len]);
        debug!("loaded {} program bytes at 0x{:04X}", len, PROGRAM_START);
    }

    /// Maps a full program image onto `0x8000-0xFFFF`, vectors included.
    pub fn load_image(&mut self, image: &ProgramImage) {
        self.load_program(image.as_bytes());
    }

    /// Returns the whole address space as a slice.
    pub fn as_slice(&self) -> &[u8] {
        &self.data[..]
    }

    /// Returns up to `len` bytes starting at `start`, stopping at 0xFFFF.
    pub fn range(&self, start: u16, len: usize) -> &[u8] {
        let start = start as usize;
        let end = start.saturating_add(len).min(MEMORY_SIZE);
        &self.data[start..end]
    }
}

impl Default for FlatMemory {
    fn default() -> Self {
        Self::new()
    }
}

impl MemoryBus for FlatMemory {
    fn read(&self, addr: u16) -> u8 {
        self.data[addr as usize]
    }

    fn write(&mut self, addr: u16, value: u8) {
        self.data[addr as usize] = value;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_flat_memory_read_write() {
        let mut mem = FlatMemory::new();

        assert_eq!(mem.read(0x0000), 0x00);
        assert_eq!(mem.read(0xFFFF), 0x00);

        mem.write(0x1234, 0x42);
        assert_eq!(mem.read(0x1234), 0x42);
        assert_eq!(mem.read(0x1233), 0x00);
        assert_eq!(mem.read(0x1235), 0x00);
    }

    #[test]
    fn test_read16_le_combines_with_or() {
        let mut mem = FlatMemory::new();
        mem.write(0x0010, 0x34);
        mem.write(0x0011, 0x12);
        assert_eq!(mem.read16_le(0x0010), 0x1234);

        // An AND composition would yield 0x0000 here.
        mem.write(0x0020, 0x0F);
        mem.write(0x0021, 0xF0);
        assert_eq!(mem.read16_le(0x0020), 0xF00F);
    }

    #[test]
    fn test_read16_le_wraps_at_top_of_memory() {
        let mut mem = FlatMemory::new();
        mem.write(0xFFFF, 0xCD);
        mem.write(0x0000, 0xAB);
        assert_eq!(mem.read16_le(0xFFFF), 0xABCD);
    }

    #[test]
    fn test_load_program_places_bytes_at_program_start() {
        let mut mem = FlatMemory::new();
        mem.write(0x7FFF, 0x11);
        mem.load_program(&[0xA9, 0x03, 0xEA]);

        assert_eq!(mem.read(0x8000), 0xA9);
        assert_eq!(mem.read(0x8001), 0x03);
        assert_eq!(mem.read(0x8002), 0xEA);
        assert_eq!(mem.read(0x8003), 0x00);
        assert_eq!(mem.read(0x7FFF), 0x11);
        assert_eq!(mem.read16_le(RESET_VECTOR), 0x0000);
    }

    #[test]
    fn test_load_program_truncates_oversized_input() {
        let mut mem = FlatMemory::new();
        let bytes = vec![0xEA; 0x8001];
        mem.load_program(&bytes);

        assert_eq!(mem.read(0xFFFF), 0xEA);
        assert_eq!(mem.read(0x0000), 0x00);
    }

    #[test]
    fn test_range_clamps_at_top_of_memory() {
        let mut mem = FlatMemory::new();
        mem.write(0xFFFE, 0x11);
        mem.write(0xFFFF, 0x22);

        assert_eq!(mem.range(0xFFFE, 16), &[0x11, 0x22]);
        assert_eq!(mem.range(0xFFFF, usize::MAX), &[0x22]);
        assert_eq!(mem.range(0x0000, usize::MAX).len(), MEMORY_SIZE);
        assert!(mem.range(0x1234, 0).is_empty());
    }
}
