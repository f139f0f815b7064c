//! Curve Module
//!
//! Pure pricing and share math. Nothing in here touches accounts; processors
//! feed reserve balances and share supply read from the token ledger and act
//! on the returned amounts.

pub mod constant_product;
pub mod fees;

pub use constant_product::*;
pub use fees::*;

use borsh::{BorshDeserialize, BorshSerialize};

/// Pricing curve a pool was created with.
///
/// Serialized as a single byte; only the constant product curve exists.
#[derive(BorshSerialize, BorshDeserialize, Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CurveType {
    /// x * y = k, fee charged on the input side
    #[default]
    ConstantProduct,
}
