//! # Addressing Modes
//!
//! This module defines the ten addressing modes understood by the core and the
//! resolver that turns operand bytes into an immediate value or an effective
//! address.
//!
//! ## Cycle Model
//!
//! Every byte pulled from the instruction stream goes through
//! [`Cpu::fetch_byte`], which costs one cycle. Each mode then adds its own
//! surcharge on top:
//!
//! | Mode        | Operand bytes | Extra cycles                          |
//! |-------------|---------------|---------------------------------------|
//! | Implied     | 0             | 0                                     |
//! | Immediate   | 1             | 0                                     |
//! | ZeroPage    | 1             | 1                                     |
//! | ZeroPageX   | 1             | 2                                     |
//! | ZeroPageY   | 1             | 3                                     |
//! | Absolute    | 2             | 0                                     |
//! | AbsoluteX/Y | 2             | 1 on page cross, always for writes    |
//! | IndirectX   | 1             | 1 if `zp + X` wraps the zero page     |
//! | IndirectY   | 1             | 1 on page cross, always for writes    |

use crate::{Cpu, MemoryBus};

/// Addressing mode enumeration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AddressingMode {
    /// No operand, operation implied by instruction.
    ///
    /// Example: NOP
    Implied,

    /// 8-bit constant operand in instruction.
    ///
    /// Example: LDA #$10
    Immediate,

    /// 8-bit address in zero page (0x00-0xFF).
    ///
    /// Example: LDA $80
    ZeroPage,

    /// Zero page address indexed by X, wrapping within the zero page.
    ///
    /// Example: LDA $80,X
    ZeroPageX,

    /// Zero page address indexed by Y, wrapping within the zero page.
    ///
    /// Example: LDX $80,Y
    ZeroPageY,

    /// Full 16-bit address, low byte first.
    ///
    /// Example: LDA $1234
    Absolute,

    /// 16-bit address indexed by X.
    ///
    /// Example: LDA $1234,X
    AbsoluteX,

    /// 16-bit address indexed by Y.
    ///
    /// Example: LDA $1234,Y
    AbsoluteY,

    /// Indexed indirect: `(zp + X) & 0xFF` holds a little-endian pointer.
    ///
    /// Example: LDA ($40,X)
    IndirectX,

    /// Indirect indexed: `zp` holds a little-endian base, then Y is added.
    ///
    /// Example: LDA ($40),Y
    IndirectY,
}

impl AddressingMode {
    /// Number of operand bytes that follow the opcode.
    pub const fn operand_bytes(self) -> u8 {
        match self {
            AddressingMode::Implied => 0,
            AddressingMode::Immediate
            | AddressingMode::ZeroPage
            | AddressingMode::ZeroPageX
            | AddressingMode::ZeroPageY
            | AddressingMode::IndirectX
            | AddressingMode::IndirectY => 1,
            AddressingMode::Absolute | AddressingMode::AbsoluteX | AddressingMode::AbsoluteY => 2,
        }
    }
}

/// Whether an instruction reads its operand or writes to its target.
///
/// Writes cannot skip the indexed-addressing fixup cycle because the address
/// must be final before the bus write, so they always pay it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Access {
    Read,
    Write,
}

/// The resolved operand of an instruction.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operand {
    /// No operand (implied addressing).
    Implied,
    /// An immediate value taken from the instruction stream.
    Value(u8),
    /// An effective address in memory.
    Address(u16),
}

/// Builds a 16-bit address from its two bytes.
#[inline]
pub(crate) fn compose(lsb: u8, msb: u8) -> u16 {
    ((msb as u16) << 8) | lsb as u16
}

/// True if adding `offset` to an address with low byte `lsb` moves to the next page.
#[inline]
fn crosses_page(lsb: u8, offset: u8) -> bool {
    255 - offset < lsb
}

impl<M: MemoryBus> Cpu<M> {
    /// Reads the byte at PC, advances PC by one and charges one cycle.
    pub(crate) fn fetch_byte(&mut self) -> u8 {
        let value = self.memory.read(self.pc);
        self.pc = self.pc.wrapping_add(1);
        self.tick(1);
        value
    }

    /// Resolves `mode` into an operand, consuming operand bytes and cycles.
    pub(crate) fn resolve(&mut self, mode: AddressingMode, access: Access) -> Operand {
        match mode {
            AddressingMode::Implied => Operand::Implied,
            AddressingMode::Immediate => Operand::Value(self.fetch_byte()),
            AddressingMode::ZeroPage => {
                let zp = self.fetch_byte();
                self.tick(1);
                Operand::Address(zp as u16)
            }
            AddressingMode::ZeroPageX => {
                let zp = self.fetch_byte();
                self.tick(2);
                Operand::Address(zp.wrapping_add(self.x) as u16)
            }
            AddressingMode::ZeroPageY => {
                let zp = self.fetch_byte();
                self.tick(3);
                Operand::Address(zp.wrapping_add(self.y) as u16)
            }
            AddressingMode::Absolute => {
                let lsb = self.fetch_byte();
                let msb = self.fetch_byte();
                Operand::Address(compose(lsb, msb))
            }
            AddressingMode::AbsoluteX => Operand::Address(self.absolute_indexed(self.x, access)),
            AddressingMode::AbsoluteY => Operand::Address(self.absolute_indexed(self.y, access)),
            AddressingMode::IndirectX => {
                let zp = self.fetch_byte();
                if crosses_page(zp, self.x) {
                    self.tick(1);
                }
                Operand::Address(self.zero_page_pointer(zp.wrapping_add(self.x)))
            }
            AddressingMode::IndirectY => {
                let zp = self.fetch_byte();
                let base = self.zero_page_pointer(zp);
                let [lsb, _] = base.to_le_bytes();
                if access == Access::Write || crosses_page(lsb, self.y) {
                    self.tick(1);
                }
                Operand::Address(base.wrapping_add(self.y as u16))
            }
        }
    }

    fn absolute_indexed(&mut self, offset: u8, access: Access) -> u16 {
        let lsb = self.fetch_byte();
        let msb = self.fetch_byte();
        if access == Access::Write || crosses_page(lsb, offset) {
            self.tick(1);
        }
        compose(lsb, msb).wrapping_add(offset as u16)
    }

    /// Reads a little-endian pointer from the zero page; the high byte wraps to 0x00.
    fn zero_page_pointer(&self, zp: u8) -> u16 {
        let lsb = self.memory.read(zp as u16);
        let msb = self.memory.read(zp.wrapping_add(1) as u16);
        compose(lsb, msb)
    }
}
