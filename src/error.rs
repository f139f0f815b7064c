use num_derive::FromPrimitive;
use solana_program::{
    decode_error::DecodeError,
    msg,
    program_error::{PrintProgramError, ProgramError},
};
use thiserror::Error;

/// Error types for the Swap Pool Program.
///
/// Codes are stable and grouped: 1001-1019 validation, 1020-1029 arithmetic,
/// 1030-1039 pool invariants, 1040+ fatal configuration.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq, FromPrimitive)]
pub enum SwapError {
    /// A signer-required account did not sign
    #[error("Unauthorized: required signature missing")]
    Unauthorized = 1001,

    /// Account is owned by the wrong program, or a reserve / mint is not
    /// controlled by the pool authority
    #[error("Invalid account owner")]
    InvalidAccountOwner = 1002,

    /// Account address differs from the derived or registered address
    #[error("Account address mismatch")]
    AddressMismatch = 1003,

    /// Satellite account offered to BindReserves has the wrong owner or mint authority
    #[error("Satellite account ownership mismatch")]
    OwnershipMismatch = 1004,

    /// Caller token account carries the wrong mint
    #[error("Token account mint mismatch")]
    MintMismatch = 1005,

    /// Pool state account does not hold a pool
    #[error("Pool not found")]
    NotFound = 1006,

    /// Operation requires an active pool
    #[error("Pool is not active")]
    PoolNotActive = 1007,

    /// Both reserves use the same mint
    #[error("Reserves share the same mint")]
    RepeatedMint = 1008,

    /// Share mint has supply, a freeze authority, or the fee account is not a share account
    #[error("Invalid share mint configuration")]
    InvalidShareMint = 1009,

    /// Reserve account has a delegate or a close authority
    #[error("Invalid reserve account configuration")]
    InvalidReserveAccount = 1010,

    /// Checked arithmetic failed
    #[error("Arithmetic overflow")]
    ArithmeticOverflow = 1020,

    /// Swap input is zero
    #[error("Swap amount in must be greater than zero")]
    ZeroAmountIn = 1021,

    /// Deposit amount is zero or mints no shares
    #[error("Deposit amounts must be non-zero and mint at least one share")]
    ZeroDeposit = 1022,

    /// Withdrawal would return no tokens
    #[error("Withdrawal returns zero trading tokens")]
    ZeroTradingTokens = 1023,

    /// Fee denominator is zero or numerator exceeds denominator
    #[error("Invalid fee rate")]
    InvalidFeeRate = 1024,

    /// Output is below the caller's minimum
    #[error("Slippage tolerance exceeded")]
    SlippageExceeded = 1030,

    /// Reserves cannot satisfy the trade
    #[error("Insufficient liquidity")]
    InsufficientLiquidity = 1031,

    /// Deposit amounts are not proportional to the reserves
    #[error("Unbalanced deposit")]
    UnbalancedDeposit = 1032,

    /// Share amount exceeds the caller's holding or the total supply
    #[error("Insufficient shares")]
    InsufficientShares = 1033,

    /// Share supply is zero
    #[error("Pool has no outstanding shares")]
    EmptyPool = 1034,

    /// Constant product decreased across a swap
    #[error("Constant product invariant violated")]
    InvariantViolated = 1035,

    /// No valid bump exists for the pool identity
    #[error("Pool authority derivation exhausted")]
    AddressDerivationExhausted = 1040,

    /// Pool state account already holds a pool
    #[error("Pool already initialized")]
    AlreadyInitialized = 1041,
}

impl SwapError {
    /// Returns the stable error code reported to clients.
    pub fn error_code(&self) -> u32 {
        *self as u32
    }
}

impl From<SwapError> for ProgramError {
    fn from(e: SwapError) -> Self {
        ProgramError::Custom(e.error_code())
    }
}

impl<T> DecodeError<T> for SwapError {
    fn type_of() -> &'static str {
        "SwapError"
    }
}

impl PrintProgramError for SwapError {
    fn print<E>(&self)
    where
        E: 'static + std::error::Error + DecodeError<E> + PrintProgramError + num_traits::FromPrimitive,
    {
        msg!("❌ SwapError {}: {}", self.error_code(), self);
    }
}
