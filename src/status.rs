//! # Processor Status Register
//!
//! The 6502 packs its seven processor flags into a single byte (P). Bit 5 has
//! no flag assigned and is never touched by [`StatusRegister::set`].
//!
//! ```text
//!  7  6  5  4  3  2  1  0
//!  N  V  -  B  D  I  Z  C
//! ```

/// One of the seven processor flags.
///
/// The enumeration is closed, so every flag lookup is valid by construction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Flag {
    /// Carry (bit 0): unsigned overflow out of bit 7.
    Carry,
    /// Zero (bit 1): last result was zero.
    Zero,
    /// Interrupt disable (bit 2).
    InterruptDisable,
    /// Decimal mode (bit 3). Stored but ignored by arithmetic.
    Decimal,
    /// Break (bit 4).
    Break,
    /// Overflow (bit 6): signed overflow.
    Overflow,
    /// Negative (bit 7): bit 7 of the last result.
    Negative,
}

impl Flag {
    /// All flags, from bit 0 upward.
    pub const ALL: [Flag; 7] = [
        Flag::Carry,
        Flag::Zero,
        Flag::InterruptDisable,
        Flag::Decimal,
        Flag::Break,
        Flag::Overflow,
        Flag::Negative,
    ];

    /// Returns the single-bit mask of this flag within P.
    pub const fn mask(self) -> u8 {
        match self {
            Flag::Carry => 1 << 0,
            Flag::Zero => 1 << 1,
            Flag::InterruptDisable => 1 << 2,
            Flag::Decimal => 1 << 3,
            Flag::Break => 1 << 4,
            Flag::Overflow => 1 << 6,
            Flag::Negative => 1 << 7,
        }
    }
}

/// The packed status register.
///
/// # Examples
///
/// ```
/// use tiny6502::{Flag, StatusRegister};
///
/// let mut p = StatusRegister::new();
/// p.set(Flag::Carry, true);
/// p.set(Flag::Negative, true);
/// assert!(p.get(Flag::Carry));
/// assert!(!p.get(Flag::Zero));
/// assert_eq!(p.bits(), 0b1000_0001);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct StatusRegister(u8);

impl StatusRegister {
    /// Creates a status register with every bit clear.
    pub const fn new() -> Self {
        Self(0)
    }

    /// Wraps a raw P byte.
    pub const fn from_bits(bits: u8) -> Self {
        Self(bits)
    }

    /// Returns the raw P byte.
    pub const fn bits(self) -> u8 {
        self.0
    }

    /// Returns true if `flag` is set.
    pub const fn get(self, flag: Flag) -> bool {
        self.0 & flag.mask() != 0
    }

    /// Sets or clears `flag`, leaving every other bit untouched.
    pub fn set(&mut self, flag: Flag, value: bool) {
        if value {
            self.0 |= flag.mask();
        } else {
            self.0 &= !flag.mask();
        }
    }

    /// Updates Z and N from a loaded or computed value.
    pub(crate) fn update_zero_negative(&mut self, value: u8) {
        self.set(Flag::Zero, value == 0);
        self.set(Flag::Negative, value & 0x80 != 0);
    }
}
