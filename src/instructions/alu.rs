//! # ALU Instructions
//!
//! - ADC: Add with Carry
//!
//! Decimal mode is not emulated; ADC always adds in binary.

use crate::addressing::Operand;
use crate::{Cpu, Flag, MemoryBus};

/// Executes the ADC (Add with Carry) instruction.
///
/// `A = A + M + C`, wrapping at 8 bits. Updates C, Z, V and N.
pub(crate) fn execute_adc<M: MemoryBus>(cpu: &mut Cpu<M>, operand: Operand) {
    let Some(value) = cpu.operand_value(operand) else {
        return;
    };

    let a = cpu.a;
    let carry_in = cpu.p.get(Flag::Carry) as u16;
    let sum = a as u16 + value as u16 + carry_in;
    let result = sum as u8;

    cpu.p.set(Flag::Carry, sum > 0xFF);
    // Signed overflow: both inputs share a sign the result does not.
    cpu.p.set(Flag::Overflow, (a ^ result) & (value ^ result) & 0x80 != 0);
    cpu.p.update_zero_negative(result);
    cpu.a = result;
}
