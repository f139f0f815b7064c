//! Fee Rates
//!
//! Every rate is a numerator / denominator pair applied with floor division,
//! so fees never exceed their exact rational value.

use borsh::{BorshDeserialize, BorshSerialize};

use crate::{constants::*, error::SwapError};

/// A fractional rate `numerator / denominator`.
#[derive(BorshSerialize, BorshDeserialize, Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct FeeRate {
    pub numerator: u64,
    pub denominator: u64,
}

impl FeeRate {
    pub const LEN: usize = 16;

    pub const fn new(numerator: u64, denominator: u64) -> Self {
        Self { numerator, denominator }
    }

    /// Rejects a zero denominator and rates above 100%.
    pub fn validate(&self) -> Result<(), SwapError> {
        if self.denominator == 0 || self.numerator > self.denominator {
            return Err(SwapError::InvalidFeeRate);
        }
        Ok(())
    }

    /// `floor(amount * numerator / denominator)`
    pub fn apply(&self, amount: u64) -> Result<u64, SwapError> {
        if self.numerator == 0 || amount == 0 {
            return Ok(0);
        }
        let fee = (amount as u128)
            .checked_mul(self.numerator as u128)
            .ok_or(SwapError::ArithmeticOverflow)?
            .checked_div(self.denominator as u128)
            .ok_or(SwapError::InvalidFeeRate)?;
        u64::try_from(fee).map_err(|_| SwapError::ArithmeticOverflow)
    }
}

/// Fee schedule fixed at pool creation.
#[derive(BorshSerialize, BorshDeserialize, Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Fees {
    /// Share of every swap input retained by the pool
    pub trade_fee: FeeRate,
    /// Protocol cut of the trade fee, paid in share tokens to the fee account
    pub owner_trade_fee: FeeRate,
    /// Share tokens diverted to the fee account on withdrawal
    pub owner_withdraw_fee: FeeRate,
    /// Portion of the owner's share-token cut paid to a host account when one is supplied
    pub host_fee: FeeRate,
}

impl Fees {
    pub const LEN: usize = FeeRate::LEN * 4;

    pub fn validate(&self) -> Result<(), SwapError> {
        self.trade_fee.validate()?;
        self.owner_trade_fee.validate()?;
        self.owner_withdraw_fee.validate()?;
        self.host_fee.validate()
    }

    pub fn trading_fee(&self, amount_in: u64) -> Result<u64, SwapError> {
        self.trade_fee.apply(amount_in)
    }

    pub fn owner_trading_fee(&self, trading_fee: u64) -> Result<u64, SwapError> {
        self.owner_trade_fee.apply(trading_fee)
    }

    pub fn owner_withdraw_fee(&self, share_amount: u64) -> Result<u64, SwapError> {
        self.owner_withdraw_fee.apply(share_amount)
    }

    pub fn host_fee(&self, owner_fee_shares: u64) -> Result<u64, SwapError> {
        self.host_fee.apply(owner_fee_shares)
    }
}

/// The schedule the client SDK proposes when the caller has no preference.
pub fn default_fees() -> Fees {
    Fees {
        trade_fee: FeeRate::new(DEFAULT_TRADE_FEE_NUMERATOR, DEFAULT_TRADE_FEE_DENOMINATOR),
        owner_trade_fee: FeeRate::new(
            DEFAULT_OWNER_TRADE_FEE_NUMERATOR,
            DEFAULT_OWNER_TRADE_FEE_DENOMINATOR,
        ),
        owner_withdraw_fee: FeeRate::new(
            DEFAULT_OWNER_WITHDRAW_FEE_NUMERATOR,
            DEFAULT_OWNER_WITHDRAW_FEE_DENOMINATOR,
        ),
        host_fee: FeeRate::new(DEFAULT_HOST_FEE_NUMERATOR, DEFAULT_HOST_FEE_DENOMINATOR),
    }
}
