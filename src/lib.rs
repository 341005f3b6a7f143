//! # 6502 Execution Core
//!
//! The instruction-execution core of an NMOS 6502: register file, status
//! flags, addressing-mode resolution, opcode dispatch and cycle accounting,
//! running against a flat 64KB address space.
//!
//! ## Quick Start
//!
//! ```rust
//! use tiny6502::{Cpu, Flag, FlatMemory, MemoryBus, ProgramImage};
//!
//! // LDA #$2A ; STA $24
//! let image = ProgramImage::new(&[0xA9, 0x2A, 0x85, 0x24]).unwrap();
//!
//! let mut memory = FlatMemory::new();
//! memory.load_image(&image);
//!
//! let mut cpu = Cpu::new(memory);
//! cpu.bootstrap();
//! assert_eq!(cpu.pc(), 0x8000);
//!
//! cpu.run_for_instructions(2).unwrap();
//! assert_eq!(cpu.memory().read(0x24), 0x2A);
//! assert!(!cpu.flag(Flag::Negative));
//! ```
//!
//! ## Modules
//!
//! - `cpu` - CPU state, dispatch and run loops
//! - `status` - Packed processor status register
//! - `memory` - MemoryBus trait and flat 64KB implementation
//! - `addressing` - Addressing modes and operand resolution
//! - `opcodes` - Static instruction table
//! - `image` - Program image construction
//!
//! ## Logging
//!
//! The crate logs through the `log` facade and never installs a logger.
//! Every dispatched instruction is reported at `trace` level.

pub mod addressing;
pub mod cpu;
pub mod error;
pub mod image;
pub mod memory;
pub mod opcodes;
pub mod status;

// Internal instruction implementations (not part of public API)
mod instructions;

#[cfg(feature = "wasm")]
pub mod wasm;

// Re-export public API
pub use addressing::{Access, AddressingMode, Operand};
pub use cpu::Cpu;
pub use error::ExecutionError;
pub use image::{ImageError, ProgramImage, IMAGE_SIZE};
pub use memory::{FlatMemory, MemoryBus, MEMORY_SIZE, PROGRAM_START, RESET_VECTOR};
pub use opcodes::{lookup, Instruction, Mnemonic, INSTRUCTION_TABLE};
pub use status::{Flag, StatusRegister};
