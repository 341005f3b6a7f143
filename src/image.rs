//! # Program Images
//!
//! A program image is the 32KB block that sits at `0x8000-0xFFFF`. The raw
//! program bytes start at offset 0 and the reset vector lives at offsets
//! `0x7FFC/0x7FFD`, which become `0xFFFC/0xFFFD` once the image is mapped.

use thiserror::Error;

use crate::memory::{PROGRAM_START, RESET_VECTOR};

/// Size of a program image in bytes.
pub const IMAGE_SIZE: usize = 0x8000;

/// Offset of the reset vector within an image.
const VECTOR_OFFSET: usize = (RESET_VECTOR - PROGRAM_START) as usize;

/// Program bytes may not reach the vector table (NMI, reset, IRQ).
const MAX_PROGRAM_LEN: usize = 0x7FFA;

/// Errors raised while building a program image.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ImageError {
    /// The raw program would overwrite the vector table.
    #[error("program is {len} bytes but at most {max} fit below the vector table")]
    ProgramTooLarge { len: usize, max: usize },
}

/// A 32KB ROM image ready to be mapped at [`PROGRAM_START`].
///
/// # Examples
///
/// ```
/// use tiny6502::{Cpu, FlatMemory, ProgramImage};
///
/// let image = ProgramImage::new(&[0xA9, 0x03]).unwrap();
/// let mut memory = FlatMemory::new();
/// memory.load_image(&image);
///
/// let mut cpu = Cpu::new(memory);
/// cpu.bootstrap();
/// assert_eq!(cpu.pc(), 0x8000);
/// cpu.step().unwrap();
/// assert_eq!(cpu.a(), 3);
/// ```
#[derive(Clone, PartialEq, Eq)]
pub struct ProgramImage {
    bytes: Box<[u8; IMAGE_SIZE]>,
}

impl ProgramImage {
    /// Builds an image whose reset vector points at the first program byte.
    pub fn new(program: &[u8]) -> Result<Self, ImageError> {
        Self::with_entry(program, PROGRAM_START)
    }

    /// Builds an image whose reset vector points at `entry`.
    pub fn with_entry(program: &[u8], entry: u16) -> Result<Self, ImageError> {
        if program.len() > MAX_PROGRAM_LEN {
            return Err(ImageError::ProgramTooLarge {
                len: program.len(),
                max: MAX_PROGRAM_LEN,
            });
        }

        let mut bytes = Box::new([0u8; IMAGE_SIZE]);
        bytes[..program.len()].copy_from_slice(program);
        let [lo, hi] = entry.to_le_bytes();
        bytes[VECTOR_OFFSET] = lo;
        bytes[VECTOR_OFFSET + 1] = hi;

        Ok(Self { bytes })
    }

    /// Returns the entry point stored in the reset vector.
    pub fn entry(&self) -> u16 {
        u16::from_le_bytes([self.bytes[VECTOR_OFFSET], self.bytes[VECTOR_OFFSET + 1]])
    }

    /// Returns the raw image.
    pub fn as_bytes(&self) -> &[u8] {
        &self.bytes[..]
    }
}

impl std::fmt::Debug for ProgramImage {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ProgramImage")
            .field("entry", &format_args!("0x{:04X}", self.entry()))
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_image_layout() {
        let image = ProgramImage::new(&[0xA9, 0x2A]).unwrap();
        let bytes = image.as_bytes();

        assert_eq!(bytes.len(), IMAGE_SIZE);
        assert_eq!(bytes[0], 0xA9);
        assert_eq!(bytes[1], 0x2A);
        assert_eq!(bytes[2], 0x00);
        assert_eq!(bytes[0x7FFC], 0x00);
        assert_eq!(bytes[0x7FFD], 0x80);
        assert_eq!(image.entry(), 0x8000);
    }

    #[test]
    fn test_custom_entry_point() {
        let image = ProgramImage::with_entry(&[0xEA], 0x9000).unwrap();
        assert_eq!(image.as_bytes()[0x7FFC], 0x00);
        assert_eq!(image.as_bytes()[0x7FFD], 0x90);
        assert_eq!(image.entry(), 0x9000);
    }

    #[test]
    fn test_program_reaching_vectors_is_rejected() {
        let program = vec![0xEA; MAX_PROGRAM_LEN + 1];
        assert_eq!(
            ProgramImage::new(&program),
            Err(ImageError::ProgramTooLarge {
                len: MAX_PROGRAM_LEN + 1,
                max: MAX_PROGRAM_LEN,
            })
        );
    }

    #[test]
    fn test_largest_program_fits() {
        let program = vec![0xEA; MAX_PROGRAM_LEN];
        let image = ProgramImage::new(&program).unwrap();
        assert_eq!(image.as_bytes()[MAX_PROGRAM_LEN - 1], 0xEA);
        assert_eq!(image.entry(), 0x8000);
    }
}
