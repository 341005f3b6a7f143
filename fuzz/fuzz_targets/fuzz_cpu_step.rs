//! Fuzz target for CPU step execution.
//!
//! Builds an arbitrary register state and memory contents, executes one
//! instruction, and checks that a failed dispatch left the registers alone.

#![no_main]

use arbitrary::Arbitrary;
use libfuzzer_sys::fuzz_target;
use tiny6502::{Cpu, ExecutionError, FlatMemory, MemoryBus, StatusRegister};

/// Arbitrary CPU initial state for fuzzing
#[derive(Debug, Arbitrary)]
struct FuzzCpuState {
    a: u8,
    x: u8,
    y: u8,
    sp: u8,
    status: u8,
}

/// Memory regions for fuzzing
#[derive(Debug, Arbitrary)]
struct FuzzMemory {
    /// Bytes at the PC location (instruction + operands)
    instruction_bytes: [u8; 3],
    /// Zero page contents, for indirect pointers
    zero_page: [u8; 256],
    /// Region targeted by absolute operands
    main_memory: [u8; 256],
}

#[derive(Debug, Arbitrary)]
struct FuzzInput {
    cpu_state: FuzzCpuState,
    memory: FuzzMemory,
}

fuzz_target!(|input: FuzzInput| {
    let mut memory = FlatMemory::new();
    memory.load_program(&input.memory.instruction_bytes);
    memory.write(0xFFFC, 0x00);
    memory.write(0xFFFD, 0x80);

    for (i, &byte) in input.memory.zero_page.iter().enumerate() {
        memory.write(i as u16, byte);
    }
    for (i, &byte) in input.memory.main_memory.iter().enumerate() {
        memory.write(0x4000 + i as u16, byte);
    }

    let mut cpu = Cpu::new(memory);
    cpu.bootstrap();
    cpu.set_a(input.cpu_state.a);
    cpu.set_x(input.cpu_state.x);
    cpu.set_y(input.cpu_state.y);
    cpu.set_sp(input.cpu_state.sp);
    cpu.set_status(StatusRegister::from_bits(input.cpu_state.status));

    match cpu.step() {
        Ok(cost) => {
            assert!(cost >= 2);
            assert!(cpu.pc() > 0x8000 && cpu.pc() <= 0x8003);
        }
        Err(ExecutionError::UnsupportedOpcode(_)) => {
            assert_eq!(cpu.pc(), 0x8001);
            assert_eq!(cpu.a(), input.cpu_state.a);
            assert_eq!(cpu.x(), input.cpu_state.x);
            assert_eq!(cpu.y(), input.cpu_state.y);
            assert_eq!(cpu.status().bits(), input.cpu_state.status);
        }
    }
});
