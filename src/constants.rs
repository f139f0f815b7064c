//! Constants for the Swap Pool Program
//!
//! The default fee schedule handed out by the client SDK. Fee schedules are chosen per pool at creation and never change.

/// Default trade fee retained in the reserves: 0.25%
pub const DEFAULT_TRADE_FEE_NUMERATOR: u64 = 25;
pub const DEFAULT_TRADE_FEE_DENOMINATOR: u64 = 10_000;

/// Default protocol cut of the trade fee: 1/5
pub const DEFAULT_OWNER_TRADE_FEE_NUMERATOR: u64 = 1;
pub const DEFAULT_OWNER_TRADE_FEE_DENOMINATOR: u64 = 5;

/// Default share fee taken on withdrawals (disabled)
pub const DEFAULT_OWNER_WITHDRAW_FEE_NUMERATOR: u64 = 0;
pub const DEFAULT_OWNER_WITHDRAW_FEE_DENOMINATOR: u64 = 10_000;

/// Default host cut of the owner fee: 20%
pub const DEFAULT_HOST_FEE_NUMERATOR: u64 = 20;
pub const DEFAULT_HOST_FEE_DENOMINATOR: u64 = 100;
