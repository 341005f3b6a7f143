//! # CPU State and Execution
//!
//! This module contains the `Cpu` struct representing processor state and the
//! fetch-decode-execute loop.
//!
//! ## CPU State
//!
//! The CPU maintains:
//! - **Registers**: Accumulator (A), index registers (X, Y)
//! - **Program counter** (PC): 16-bit address of next instruction
//! - **Stack pointer** (SP): 8-bit offset into stack page (0x0100-0x01FF)
//! - **Status register** (P): seven packed flags, see [`StatusRegister`]
//! - **Cycle counters**: the cost of the instruction in flight, and a
//!   monotonically increasing total
//! - **Memory**: owned exclusively by the CPU
//!
//! ## Execution Model
//!
//! - `bootstrap()`: load PC from the reset vector
//! - `execute_next()`: fetch, decode and execute one instruction
//! - `step()`: drain the previous cost, then `execute_next()`
//! - `run_for_instructions()`, `run_for_cycles()`, `run_until()`: run loops
//!   with a host-supplied stopping condition
//!
//! Nothing in the instruction set halts the machine, so every run loop needs
//! a budget or a predicate to come back.

use log::{debug, trace, warn};

use crate::memory::RESET_VECTOR;
use crate::opcodes::lookup;
use crate::{instructions, ExecutionError, Flag, FlatMemory, MemoryBus, StatusRegister};

/// CPU state and execution context.
///
/// Generic over the memory implementation via the `MemoryBus` trait.
///
/// # Examples
///
/// ```
/// use tiny6502::{Cpu, Flag, FlatMemory, MemoryBus};
///
/// let mut memory = FlatMemory::new();
/// memory.load_program(&[0xA9, 0x03]); // LDA #$03
/// memory.write(0xFFFC, 0x00);
/// memory.write(0xFFFD, 0x80);
///
/// let mut cpu = Cpu::new(memory);
/// cpu.bootstrap();
///
/// let cost = cpu.step().unwrap();
/// assert_eq!(cpu.a(), 3);
/// assert_eq!(cost, 2);
/// assert!(!cpu.flag(Flag::Zero));
/// ```
pub struct Cpu<M: MemoryBus = FlatMemory> {
    /// Accumulator register
    pub(crate) a: u8,

    /// X index register
    pub(crate) x: u8,

    /// Y index register
    pub(crate) y: u8,

    /// Program counter (address of next instruction)
    pub(crate) pc: u16,

    /// Stack pointer (0x0100 + sp gives full stack address)
    pub(crate) sp: u8,

    /// Processor status
    pub(crate) p: StatusRegister,

    /// Cycles accrued by the instruction currently being executed
    pub(crate) instruction_cycles: u32,

    /// Total cycles spent by completed steps
    pub(crate) cycles: u64,

    /// Memory bus implementation
    pub(crate) memory: M,
}

impl<M: MemoryBus> Cpu<M> {
    /// Creates a CPU that owns `memory`.
    ///
    /// Registers start at A = X = Y = 0, SP = 0xFF, PC = 0 and P = 0. PC is
    /// not meaningful until [`bootstrap`](Self::bootstrap) has run.
    pub fn new(memory: M) -> Self {
        Self {
            a: 0x00,
            x: 0x00,
            y: 0x00,
            pc: 0x0000,
            sp: 0xFF,
            p: StatusRegister::new(),
            instruction_cycles: 0,
            cycles: 0,
            memory,
        }
    }

    /// Loads PC from the little-endian reset vector at 0xFFFC/0xFFFD.
    ///
    /// Must be called once before the first `step`.
    pub fn bootstrap(&mut self) {
        self.pc = self.memory.read16_le(RESET_VECTOR);
        debug!("bootstrap: entry point 0x{:04X}", self.pc);
    }

    /// Fetches, decodes and executes one instruction.
    ///
    /// The opcode fetch costs one cycle and advances PC. If the opcode has no
    /// table entry the call fails with [`ExecutionError::UnsupportedOpcode`]
    /// and nothing else is mutated. Cycles accrue into
    /// [`instruction_cycles`](Self::instruction_cycles) without being drained;
    /// use [`step`](Self::step) to drive execution.
    pub fn execute_next(&mut self) -> Result<(), ExecutionError> {
        let pc = self.pc;
        let opcode = self.fetch_byte();

        let Some(instruction) = lookup(opcode) else {
            warn!("unsupported opcode 0x{:02X} at 0x{:04X}", opcode, pc);
            return Err(ExecutionError::UnsupportedOpcode(opcode));
        };

        let operand = self.resolve(
            instruction.addressing_mode,
            instruction.mnemonic.access(),
        );
        instructions::execute(self, instruction.mnemonic, operand);

        trace!(
            "0x{:04X}: {:02X} {} {:?} {:?} ({} cycles)",
            pc,
            opcode,
            instruction.mnemonic,
            instruction.addressing_mode,
            operand,
            self.instruction_cycles
        );
        Ok(())
    }

    /// Executes one instruction and returns the cycles it cost.
    ///
    /// The cost of the previous instruction is drained first, so
    /// `instruction_cycles()` afterwards reports this instruction alone. The
    /// cost is also added to the running total in `cycles()`, including the
    /// single fetch cycle of a failed step.
    ///
    /// # Examples
    ///
    /// ```
    /// use tiny6502::{Cpu, ExecutionError, FlatMemory};
    ///
    /// let mut mem = FlatMemory::new();
    /// mem.load_program(&[0x02]);
    ///
    /// let mut cpu = Cpu::new(mem);
    /// cpu.set_pc(0x8000);
    ///
    /// assert_eq!(cpu.step(), Err(ExecutionError::UnsupportedOpcode(0x02)));
    /// assert_eq!(cpu.pc(), 0x8001);
    /// ```
    pub fn step(&mut self) -> Result<u32, ExecutionError> {
        self.instruction_cycles = 0;
        let result = self.execute_next();
        self.cycles += self.instruction_cycles as u64;
        result.map(|()| self.instruction_cycles)
    }

    /// Runs at most `count` instructions.
    ///
    /// Returns the number of instructions executed, which is `count` unless
    /// an instruction failed.
    pub fn run_for_instructions(&mut self, count: u64) -> Result<u64, ExecutionError> {
        let mut executed = 0;
        while executed < count {
            self.step()?;
            executed += 1;
        }
        debug!("instruction budget of {} spent", count);
        Ok(executed)
    }

    /// Runs until at least `cycle_budget` cycles have been spent.
    ///
    /// Returns the cycles actually consumed, which may overshoot the budget by
    /// part of one instruction.
    ///
    /// # Examples
    ///
    /// ```
    /// use tiny6502::{Cpu, FlatMemory};
    ///
    /// let mut mem = FlatMemory::new();
    /// mem.load_program(&[0xEA; 16]); // NOP, 2 cycles each
    ///
    /// let mut cpu = Cpu::new(mem);
    /// cpu.set_pc(0x8000);
    ///
    /// assert_eq!(cpu.run_for_cycles(10).unwrap(), 10);
    /// assert_eq!(cpu.pc(), 0x8005);
    /// ```
    pub fn run_for_cycles(&mut self, cycle_budget: u64) -> Result<u64, ExecutionError> {
        let start_cycles = self.cycles;
        let target_cycles = start_cycles.saturating_add(cycle_budget);

        while self.cycles < target_cycles {
            self.step()?;
        }

        debug!("cycle budget of {} spent", cycle_budget);
        Ok(self.cycles - start_cycles)
    }

    /// Runs until `should_stop` returns true.
    ///
    /// The predicate is checked before every instruction, so a host can stop
    /// the loop between instructions, for example by polling an `AtomicBool`.
    /// Returns the number of instructions executed.
    ///
    /// # Examples
    ///
    /// ```
    /// use std::sync::atomic::{AtomicBool, Ordering};
    /// use tiny6502::{Cpu, FlatMemory};
    ///
    /// let mut mem = FlatMemory::new();
    /// mem.load_program(&[0xEA; 8]);
    ///
    /// let mut cpu = Cpu::new(mem);
    /// cpu.set_pc(0x8000);
    ///
    /// let stop = AtomicBool::new(false);
    /// let executed = cpu
    ///     .run_until(|cpu| {
    ///         if cpu.pc() == 0x8003 {
    ///             stop.store(true, Ordering::Relaxed);
    ///         }
    ///         stop.load(Ordering::Relaxed)
    ///     })
    ///     .unwrap();
    /// assert_eq!(executed, 3);
    /// ```
    pub fn run_until<F>(&mut self, mut should_stop: F) -> Result<u64, ExecutionError>
    where
        F: FnMut(&Self) -> bool,
    {
        let mut executed = 0;
        while !should_stop(self) {
            self.step()?;
            executed += 1;
        }
        debug!("run stopped by host after {} instructions", executed);
        Ok(executed)
    }

    /// Charges `n` cycles to the instruction in flight.
    #[inline]
    pub(crate) fn tick(&mut self, n: u32) {
        self.instruction_cycles += n;
    }

    // ========== Register Getters ==========

    /// Returns the accumulator register value.
    pub fn a(&self) -> u8 {
        self.a
    }

    /// Returns the X index register value.
    pub fn x(&self) -> u8 {
        self.x
    }

    /// Returns the Y index register value.
    pub fn y(&self) -> u8 {
        self.y
    }

    /// Returns the program counter value.
    pub fn pc(&self) -> u16 {
        self.pc
    }

    /// Returns the stack pointer value.
    pub fn sp(&self) -> u8 {
        self.sp
    }

    /// Returns the status register.
    pub fn status(&self) -> StatusRegister {
        self.p
    }

    /// Returns true if `flag` is set.
    pub fn flag(&self, flag: Flag) -> bool {
        self.p.get(flag)
    }

    /// Returns the cycles accrued by the most recent instruction.
    pub fn instruction_cycles(&self) -> u32 {
        self.instruction_cycles
    }

    /// Returns the total cycles spent since construction.
    pub fn cycles(&self) -> u64 {
        self.cycles
    }

    /// Returns a shared reference to memory.
    pub fn memory(&self) -> &M {
        &self.memory
    }

    /// Returns a mutable reference to memory.
    ///
    /// Only usable between steps; the CPU is the sole owner of memory.
    pub fn memory_mut(&mut self) -> &mut M {
        &mut self.memory
    }

    // ========== Register Setters ==========

    /// Sets the accumulator.
    pub fn set_a(&mut self, value: u8) {
        self.a = value;
    }

    /// Sets the X index register.
    pub fn set_x(&mut self, value: u8) {
        self.x = value;
    }

    /// Sets the Y index register.
    pub fn set_y(&mut self, value: u8) {
        self.y = value;
    }

    /// Sets the stack pointer.
    pub fn set_sp(&mut self, value: u8) {
        self.sp = value;
    }

    /// Sets the program counter.
    pub fn set_pc(&mut self, value: u16) {
        self.pc = value;
    }

    /// Sets or clears a single status flag.
    pub fn set_flag(&mut self, flag: Flag, value: bool) {
        self.p.set(flag, value);
    }

    /// Replaces the whole status register.
    pub fn set_status(&mut self, status: StatusRegister) {
        self.p = status;
    }
}

impl<M: MemoryBus> std::fmt::Debug for Cpu<M> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Cpu")
            .field("a", &format_args!("0x{:02X}", self.a))
            .field("x", &format_args!("0x{:02X}", self.x))
            .field("y", &format_args!("0x{:02X}", self.y))
            .field("pc", &format_args!("0x{:04X}", self.pc))
            .field("sp", &format_args!("0x{:02X}", self.sp))
            .field("p", &format_args!("0b{:08b}", self.p.bits()))
            .field("cycles", &self.cycles)
            .finish_non_exhaustive()
    }
}
