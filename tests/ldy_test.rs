//! Tests for the LDY (Load Y Register) instruction.

use tiny6502::{Cpu, Flag, FlatMemory, MemoryBus};

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
fn test_ldy_immediate() {
    let mut cpu = setup_cpu(&[0xA0, 0x80]);

    assert_eq!(cpu.step().unwrap(), 2);
    assert_eq!(cpu.y(), 0x80);
    assert!(cpu.flag(Flag::Negative));
    assert!(!cpu.flag(Flag::Zero));
}

#[test]
fn test_ldy_zero_page() {
    let mut cpu = setup_cpu(&[0xA4, 0x20]);
    cpu.memory_mut().write(0x0020, 0x00);
    cpu.set_y(0x55);

    assert_eq!(cpu.step().unwrap(), 3);
    assert_eq!(cpu.y(), 0x00);
    assert!(cpu.flag(Flag::Zero));
}

#[test]
fn test_ldy_zero_page_x() {
    let mut cpu = setup_cpu(&[0xB4, 0x20]);
    cpu.set_x(0x05);
    cpu.memory_mut().write(0x0025, 0x19);

    assert_eq!(cpu.step().unwrap(), 4);
    assert_eq!(cpu.y(), 0x19);
}

#[test]
fn test_ldy_absolute() {
    let mut cpu = setup_cpu(&[0xAC, 0xCD, 0xAB]);
    cpu.memory_mut().write(0xABCD, 0x01);

    assert_eq!(cpu.step().unwrap(), 3);
    assert_eq!(cpu.y(), 0x01);
}

#[test]
fn test_ldy_absolute_x() {
    let mut cpu = setup_cpu(&[0xBC, 0xCD, 0xAB, 0xBC, 0xFF, 0xAB]);
    cpu.set_x(0x02);
    cpu.memory_mut().write(0xABCF, 0x02);
    cpu.memory_mut().write(0xAC01, 0x03);

    assert_eq!(cpu.step().unwrap(), 3);
    assert_eq!(cpu.y(), 0x02);
    assert_eq!(cpu.step().unwrap(), 4);
    assert_eq!(cpu.y(), 0x03);
}
