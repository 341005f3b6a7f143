//! WASM API for the execution core.

use crate::{Cpu, ExecutionError, Flag, FlatMemory, ImageError, MemoryBus, ProgramImage};
use wasm_bindgen::prelude::*;

/// JavaScript-compatible error wrapper
#[wasm_bindgen]
#[derive(Debug, Clone)]
pub struct JsError {
    message: String,
}

#[wasm_bindgen]
impl JsError {
    #[wasm_bindgen(constructor)]
    pub fn new(message: &str) -> JsError {
        JsError {
            message: message.to_string(),
        }
    }

    #[wasm_bindgen(getter)]
    pub fn message(&self) -> String {
        self.message.clone()
    }
}

impl From<ExecutionError> for JsError {
    fn from(err: ExecutionError) -> Self {
        JsError::new(&err.to_string())
    }
}

impl From<ImageError> for JsError {
    fn from(err: ImageError) -> Self {
        JsError::new(&err.to_string())
    }
}

/// A CPU with flat memory, driven from JavaScript.
#[wasm_bindgen]
pub struct Emulator {
    cpu: Cpu<FlatMemory>,
}

#[wasm_bindgen]
impl Emulator {
    /// Create an emulator with zeroed memory.
    #[wasm_bindgen(constructor)]
    pub fn new() -> Self {
        Emulator {
            cpu: Cpu::new(FlatMemory::new()),
        }
    }

    /// Build a program image from raw bytes, map it at $8000 and bootstrap.
    pub fn load_program(&mut self, program: &[u8]) -> Result<(), JsError> {
        let image = ProgramImage::new(program)?;
        self.cpu = Cpu::new(FlatMemory::new());
        self.cpu.memory_mut().load_image(&image);
        self.cpu.bootstrap();
        Ok(())
    }

    /// Reload PC from the reset vector.
    pub fn bootstrap(&mut self) {
        self.cpu.bootstrap();
    }

    /// Execute a single instruction and return its cycle cost.
    pub fn step(&mut self) -> Result<u32, JsError> {
        Ok(self.cpu.step()?)
    }

    /// Execute up to `count` instructions; returns how many ran.
    pub fn run_for_instructions(&mut self, count: u32) -> Result<u32, JsError> {
        Ok(self.cpu.run_for_instructions(count as u64)? as u32)
    }

    /// Read one byte of memory.
    pub fn read_memory(&self, addr: u16) -> u8 {
        self.cpu.memory().read(addr)
    }

    /// Copy `len` bytes starting at `start`, clamped to the top of memory.
    pub fn memory_range(&self, start: u16, len: u32) -> js_sys::Uint8Array {
        js_sys::Uint8Array::from(self.cpu.memory().range(start, len as usize))
    }

    // Register getters
    #[wasm_bindgen(getter)]
    pub fn a(&self) -> u8 {
        self.cpu.a()
    }

    #[wasm_bindgen(getter)]
    pub fn x(&self) -> u8 {
        self.cpu.x()
    }

    #[wasm_bindgen(getter)]
    pub fn y(&self) -> u8 {
        self.cpu.y()
    }

    #[wasm_bindgen(getter)]
    pub fn pc(&self) -> u16 {
        self.cpu.pc()
    }

    #[wasm_bindgen(getter)]
    pub fn sp(&self) -> u8 {
        self.cpu.sp()
    }

    #[wasm_bindgen(getter)]
    pub fn status(&self) -> u8 {
        self.cpu.status().bits()
    }

    #[wasm_bindgen(getter)]
    pub fn cycles(&self) -> f64 {
        self.cpu.cycles() as f64 // Convert u64 to f64 for JavaScript
    }

    // Flag getters
    #[wasm_bindgen(getter)]
    pub fn flag_n(&self) -> bool {
        self.cpu.flag(Flag::Negative)
    }

    #[wasm_bindgen(getter)]
    pub fn flag_v(&self) -> bool {
        self.cpu.flag(Flag::Overflow)
    }

    #[wasm_bindgen(getter)]
    pub fn flag_b(&self) -> bool {
        self.cpu.flag(Flag::Break)
    }

    #[wasm_bindgen(getter)]
    pub fn flag_d(&self) -> bool {
        self.cpu.flag(Flag::Decimal)
    }

    #[wasm_bindgen(getter)]
    pub fn flag_i(&self) -> bool {
        self.cpu.flag(Flag::InterruptDisable)
    }

    #[wasm_bindgen(getter)]
    pub fn flag_z(&self) -> bool {
        self.cpu.flag(Flag::Zero)
    }

    #[wasm_bindgen(getter)]
    pub fn flag_c(&self) -> bool {
        self.cpu.flag(Flag::Carry)
    }
}

impl Default for Emulator {
    fn default() -> Self {
        Self::new()
    }
}
