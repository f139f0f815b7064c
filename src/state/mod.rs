//! State Module
//!
//! Persistent account layouts owned by the program.

pub mod pool_state;

pub use pool_state::*;
