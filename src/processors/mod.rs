//! Processors Module
//!
//! One processor per instruction, grouped by concern.

pub mod liquidity;
pub mod pool_creation;
pub mod swap;
pub mod utilities;

pub use liquidity::*;
pub use pool_creation::*;
pub use swap::*;
pub use utilities::*;
