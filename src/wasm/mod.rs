//! WebAssembly bindings for the execution core.
//!
//! Exposes loading, stepping and state inspection to JavaScript.

pub mod api;

pub use api::Emulator;
