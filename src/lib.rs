//! RISC-V Test Generator Library
//!
//! This library provides two offline code generators: directed and random
//! assembly test vectors for integer ALU instructions, and C driver programs
//! for software floating-point conversion functions.

pub mod config;
pub mod error;
pub mod softfloat;
pub mod testgen;
