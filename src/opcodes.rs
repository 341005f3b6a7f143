//! # Instruction Table
//!
//! A 256-entry table indexed by opcode byte. Each populated slot names the
//! instruction, its addressing mode and its base cycle cost; empty slots are
//! opcodes the core does not execute. The table is built once at compile time
//! and consulted on every dispatch, so extending the instruction set means
//! adding rows here and a handler in `instructions`.

use crate::addressing::{Access, AddressingMode};

/// Instruction mnemonics understood by the core.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Mnemonic {
    /// Add with carry.
    Adc,
    /// Load accumulator.
    Lda,
    /// Load X.
    Ldx,
    /// Load Y.
    Ldy,
    /// Store accumulator.
    Sta,
    /// Store X.
    Stx,
    /// No operation.
    Nop,
}

impl Mnemonic {
    /// Returns the three-letter assembler name.
    pub const fn as_str(self) -> &'static str {
        match self {
            Mnemonic::Adc => "ADC",
            Mnemonic::Lda => "LDA",
            Mnemonic::Ldx => "LDX",
            Mnemonic::Ldy => "LDY",
            Mnemonic::Sta => "STA",
            Mnemonic::Stx => "STX",
            Mnemonic::Nop => "NOP",
        }
    }

    /// Stores resolve a target address; everything else reads its operand.
    pub const fn access(self) -> Access {
        match self {
            Mnemonic::Sta | Mnemonic::Stx => Access::Write,
            _ => Access::Read,
        }
    }
}

impl std::fmt::Display for Mnemonic {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Static metadata for one opcode.
///
/// # Examples
///
/// ```
/// use tiny6502::{lookup, AddressingMode, Mnemonic};
///
/// let lda_imm = lookup(0xA9).unwrap();
/// assert_eq!(lda_imm.mnemonic, Mnemonic::Lda);
/// assert_eq!(lda_imm.addressing_mode, AddressingMode::Immediate);
/// assert_eq!(lda_imm.base_cycles, 2);
/// assert_eq!(lda_imm.size_bytes(), 2);
///
/// assert!(lookup(0x02).is_none());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Instruction {
    /// Which handler executes this opcode.
    pub mnemonic: Mnemonic,

    /// How the operand is resolved.
    pub addressing_mode: AddressingMode,

    /// Cycles charged when no page-cross or zero-page-wrap penalty applies,
    /// including the opcode fetch.
    pub base_cycles: u8,
}

impl Instruction {
    /// Total instruction size in bytes (opcode + operands).
    pub const fn size_bytes(&self) -> u8 {
        1 + self.addressing_mode.operand_bytes()
    }
}

/// Opcode-indexed instruction table; `None` marks an unsupported opcode.
pub static INSTRUCTION_TABLE: [Option<Instruction>; 256] = build_table();

/// Looks up the instruction for `opcode`.
#[inline]
pub fn lookup(opcode: u8) -> Option<&'static Instruction> {
    INSTRUCTION_TABLE[opcode as usize].as_ref()
}

const fn build_table() -> [Option<Instruction>; 256] {
    use AddressingMode::*;
    use Mnemonic::*;

    const ROWS: &[(u8, Mnemonic, AddressingMode, u8)] = &[
        // ADC
        (0x69, Adc, Immediate, 2),
        (0x65, Adc, ZeroPage, 3),
        (0x75, Adc, ZeroPageX, 4),
        (0x6D, Adc, Absolute, 3),
        (0x7D, Adc, AbsoluteX, 3),
        (0x79, Adc, AbsoluteY, 3),
        (0x61, Adc, IndirectX, 2),
        (0x71, Adc, IndirectY, 2),
        // LDA
        (0xA9, Lda, Immediate, 2),
        (0xA5, Lda, ZeroPage, 3),
        (0xB5, Lda, ZeroPageX, 4),
        (0xAD, Lda, Absolute, 3),
        (0xBD, Lda, AbsoluteX, 3),
        (0xB9, Lda, AbsoluteY, 3),
        (0xA1, Lda, IndirectX, 2),
        (0xB1, Lda, IndirectY, 2),
        // LDX
        (0xA2, Ldx, Immediate, 2),
        (0xA6, Ldx, ZeroPage, 3),
        (0xB6, Ldx, ZeroPageY, 5),
        (0xAE, Ldx, Absolute, 3),
        (0xBE, Ldx, AbsoluteY, 3),
        // LDY
        (0xA0, Ldy, Immediate, 2),
        (0xA4, Ldy, ZeroPage, 3),
        (0xB4, Ldy, ZeroPageX, 4),
        (0xAC, Ldy, Absolute, 3),
        (0xBC, Ldy, AbsoluteX, 3),
        // STA
        (0x85, Sta, ZeroPage, 3),
        (0x95, Sta, ZeroPageX, 4),
        (0x8D, Sta, Absolute, 3),
        (0x9D, Sta, AbsoluteX, 4),
        (0x99, Sta, AbsoluteY, 4),
        (0x81, Sta, IndirectX, 2),
        (0x91, Sta, IndirectY, 3),
        // STX
        (0x86, Stx, ZeroPage, 3),
        (0x96, Stx, ZeroPageY, 5),
        (0x8E, Stx, Absolute, 3),
        // NOP
        (0xEA, Nop, Implied, 2),
    ];

    let mut table: [Option<Instruction>; 256] = [None; 256];
    let mut i = 0;
    while i < ROWS.len() {
        let (opcode, mnemonic, addressing_mode, base_cycles) = ROWS[i];
        table[opcode as usize] = Some(Instruction {
            mnemonic,
            addressing_mode,
            base_cycles,
        });
        i += 1;
    }
    table
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_supported_opcode_count() {
        let count = INSTRUCTION_TABLE.iter().filter(|e| e.is_some()).count();
        assert_eq!(count, 37);
    }

    #[test]
    fn test_store_rows_are_write_class() {
        for entry in INSTRUCTION_TABLE.iter().flatten() {
            let expected = matches!(entry.mnemonic, Mnemonic::Sta | Mnemonic::Stx);
            assert_eq!(entry.mnemonic.access() == Access::Write, expected);
        }
    }

    #[test]
    fn test_no_store_uses_immediate() {
        for entry in INSTRUCTION_TABLE.iter().flatten() {
            if entry.mnemonic.access() == Access::Write {
                assert_ne!(entry.addressing_mode, AddressingMode::Immediate);
            }
        }
    }

    #[test]
    fn test_nop_metadata() {
        let nop = lookup(0xEA).unwrap();
        assert_eq!(nop.mnemonic, Mnemonic::Nop);
        assert_eq!(nop.addressing_mode, AddressingMode::Implied);
        assert_eq!(nop.base_cycles, 2);
        assert_eq!(nop.size_bytes(), 1);
    }

    #[test]
    fn test_mnemonic_display() {
        assert_eq!(Mnemonic::Adc.to_string(), "ADC");
        assert_eq!(Mnemonic::Stx.to_string(), "STX");
    }
}
