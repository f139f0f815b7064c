//! Utility Functions
//!
//! Shared helpers for authority derivation, account validation, token CPIs
//! and state serialization.

pub mod authority;
pub mod logging;
pub mod serialization;
pub mod token;
pub mod validation;

pub use authority::*;
pub use serialization::*;
pub use token::*;
pub use validation::*;
