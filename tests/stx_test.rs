//! Tests for the STX (Store X Register) instruction.

use tiny6502::{Cpu, FlatMemory, MemoryBus};

/// Helper function to create a CPU running `program` from 0x8000
fn setup_cpu(program: &[u8]) -> Cpu<FlatMemory> {
    let mut memory = FlatMemory::new();
    memory.load_program(program);
    memory.write(0xFFFC, 0x00);
    memory.write(0xFFFD, 0x80);
    let mut cpu = Cpu::new(memory);
    cpu.bootstrap();
    cpu
}

#[test]
fn test_stx_zero_page() {
    let mut cpu = setup_cpu(&[0xA2, 0x77, 0x86, 0x30]);

    cpu.step().unwrap();
    let status = cpu.status();
    assert_eq!(cpu.step().unwrap(), 3);

    assert_eq!(cpu.memory().read(0x0030), 0x77);
    assert_eq!(cpu.status(), status);
}

#[test]
fn test_stx_zero_page_y_wraps() {
    let mut cpu = setup_cpu(&[0x96, 0xFF]);
    cpu.set_x(0x66);
    cpu.set_y(0x02);

    assert_eq!(cpu.step().unwrap(), 5);
    assert_eq!(cpu.memory().read(0x0001), 0x66);
    assert_eq!(cpu.memory().read(0x0101), 0x00);
}

#[test]
fn test_stx_absolute() {
    let mut cpu = setup_cpu(&[0x8E, 0x34, 0x12]);
    cpu.set_x(0x65);

    assert_eq!(cpu.step().unwrap(), 3);
    assert_eq!(cpu.memory().read(0x1234), 0x65);
    assert_eq!(cpu.pc(), 0x8003);
}
