//! # Instruction Implementations
//!
//! Each handler receives the operand already resolved by the addressing-mode
//! resolver, so handlers only deal with register, flag and memory effects.
//!
//! ## Categories
//!
//! - **alu**: ADC
//! - **load_store**: LDA, LDX, LDY, STA, STX
//! - **control**: NOP

pub mod alu;
pub mod control;
pub mod load_store;

use crate::addressing::Operand;
use crate::opcodes::Mnemonic;
use crate::{Cpu, MemoryBus};

/// Runs the handler for `mnemonic` against a resolved operand.
pub(crate) fn execute<M: MemoryBus>(cpu: &mut Cpu<M>, mnemonic: Mnemonic, operand: Operand) {
    match mnemonic {
        Mnemonic::Adc => alu::execute_adc(cpu, operand),
        Mnemonic::Lda => load_store::execute_lda(cpu, operand),
        Mnemonic::Ldx => load_store::execute_ldx(cpu, operand),
        Mnemonic::Ldy => load_store::execute_ldy(cpu, operand),
        Mnemonic::Sta => load_store::execute_sta(cpu, operand),
        Mnemonic::Stx => load_store::execute_stx(cpu, operand),
        Mnemonic::Nop => control::execute_nop(cpu, operand),
    }
}

impl<M: MemoryBus> Cpu<M> {
    /// Reads the value an operand refers to; `None` for implied operands.
    pub(crate) fn operand_value(&self, operand: Operand) -> Option<u8> {
        match operand {
            Operand::Implied => None,
            Operand::Value(value) => Some(value),
            Operand::Address(addr) => Some(self.memory.read(addr)),
        }
    }
}
