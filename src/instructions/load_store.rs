//! # Load and Store Instructions
//!
//! - LDA: Load Accumulator
//! - LDX: Load X Register
//! - LDY: Load Y Register
//! - STA: Store Accumulator
//! - STX: Store X Register
//!
//! Loads set Z and N from the loaded value. Stores leave P untouched.

use crate::addressing::Operand;
use crate::{Cpu, MemoryBus};

/// Executes the LDA (Load Accumulator) instruction.
pub(crate) fn execute_lda<M: MemoryBus>(cpu: &mut Cpu<M>, operand: Operand) {
    if let Some(value) = cpu.operand_value(operand) {
        cpu.a = value;
        cpu.p.update_zero_negative(value);
    }
}

/// Executes the LDX (Load X Register) instruction.
pub(crate) fn execute_ldx<M: MemoryBus>(cpu: &mut Cpu<M>, operand: Operand) {
    if let Some(value) = cpu.operand_value(operand) {
        cpu.x = value;
        cpu.p.update_zero_negative(value);
    }
}

/// Executes the LDY (Load Y Register) instruction.
pub(crate) fn execute_ldy<M: MemoryBus>(cpu: &mut Cpu<M>, operand: Operand) {
    if let Some(value) = cpu.operand_value(operand) {
        cpu.y = value;
        cpu.p.update_zero_negative(value);
    }
}

/// Executes the STA (Store Accumulator) instruction.
pub(crate) fn execute_sta<M: MemoryBus>(cpu: &mut Cpu<M>, operand: Operand) {
    if let Operand::Address(addr) = operand {
        cpu.memory.write(addr, cpu.a);
    }
}

/// Executes the STX (Store X Register) instruction.
pub(crate) fn execute_stx<M: MemoryBus>(cpu: &mut Cpu<M>, operand: Operand) {
    if let Operand::Address(addr) = operand {
        cpu.memory.write(addr, cpu.x);
    }
}
