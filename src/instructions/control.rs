//! # Control Instructions
//!
//! - NOP: No Operation

use crate::addressing::Operand;
use crate::{Cpu, MemoryBus};

/// Executes the NOP (No Operation) instruction.
///
/// Burns one internal cycle on top of the opcode fetch; nothing else changes.
pub(crate) fn execute_nop<M: MemoryBus>(cpu: &mut Cpu<M>, _operand: Operand) {
    cpu.tick(1);
}
