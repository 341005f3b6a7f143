//! CPU initialization tests
//!
//! Verifies construction state and reset-vector bootstrapping.

use tiny6502::{Cpu, Flag, FlatMemory, MemoryBus, ProgramImage};

#[test]
fn test_cpu_power_on_values() {
    let cpu = Cpu::new(FlatMemory::new());

    assert_eq!(cpu.a(), 0x00, "Accumulator should be 0x00");
    assert_eq!(cpu.x(), 0x00, "X register should be 0x00");
    assert_eq!(cpu.y(), 0x00, "Y register should be 0x00");
    assert_eq!(cpu.sp(), 0xFF, "Stack pointer should be 0xFF");
    assert_eq!(cpu.pc(), 0x0000, "PC should be 0 before bootstrap");
    assert_eq!(cpu.status().bits(), 0x00, "P should be clear");
    for flag in Flag::ALL {
        assert!(!cpu.flag(flag), "{:?} should be clear", flag);
    }
    assert_eq!(cpu.cycles(), 0, "Cycle counter should start at 0");
}

#[test]
fn test_bootstrap_after_load_program() {
    let mut memory = FlatMemory::new();
    memory.load_program(&[0xEA]);
    memory.write(0xFFFC, 0x00);
    memory.write(0xFFFD, 0x80);

    let mut cpu = Cpu::new(memory);
    cpu.bootstrap();

    assert_eq!(cpu.pc(), 0x8000);
}

#[test]
fn test_bootstrap_from_program_image() {
    let image = ProgramImage::new(&[0xEA]).unwrap();
    let mut memory = FlatMemory::new();
    memory.load_image(&image);

    let mut cpu = Cpu::new(memory);
    cpu.bootstrap();

    assert_eq!(cpu.pc(), 0x8000);
    assert_eq!(cpu.step(), Ok(2));
}

#[test]
fn test_bootstrap_uses_little_endian_vector() {
    let mut memory = FlatMemory::new();
    memory.write(0xFFFC, 0x34);
    memory.write(0xFFFD, 0x12);

    let mut cpu = Cpu::new(memory);
    cpu.bootstrap();

    assert_eq!(cpu.pc(), 0x1234);
}

#[test]
fn test_bootstrap_does_not_touch_registers() {
    let mut cpu = Cpu::new(FlatMemory::new());
    cpu.set_a(0x42);
    cpu.set_flag(Flag::Carry, true);

    cpu.bootstrap();

    assert_eq!(cpu.a(), 0x42);
    assert!(cpu.flag(Flag::Carry));
}
