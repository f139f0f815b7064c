//! Types Module
//!
//! Instruction payloads and return-data types for the Swap Pool Program.

pub mod instructions;

pub use instructions::*;
