//! Constant Product Curve
//!
//! Swap pricing, share issuance and share redemption for an x * y = k pool.
//! All intermediate math runs in u128 with checked operations and every
//! conversion rounds toward the pool: outputs are floored, amounts the pool
//! keeps are ceiled.

use crate::{curve::fees::Fees, error::SwapError};

/// Integer square root (floor) using Newton's method.
pub fn isqrt(n: u128) -> u128 {
    if n == 0 {
        return 0;
    }
    let mut x = n;
    let mut y = (x + 1) / 2;
    while y < x {
        x = y;
        y = (x + n / x) / 2;
    }
    x
}

fn ceil_div(numerator: u128, denominator: u128) -> Result<u128, SwapError> {
    if denominator == 0 {
        return Err(SwapError::ArithmeticOverflow);
    }
    let quotient = numerator / denominator;
    if numerator % denominator == 0 {
        Ok(quotient)
    } else {
        quotient.checked_add(1).ok_or(SwapError::ArithmeticOverflow)
    }
}

fn to_u64(value: u128) -> Result<u64, SwapError> {
    u64::try_from(value).map_err(|_| SwapError::ArithmeticOverflow)
}

/// Outcome of a single exact-input swap.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SwapResult {
    /// Trade fee charged on the input, in input tokens
    pub trade_fee: u64,
    /// Input traded against the curve after the trade fee
    pub net_amount_in: u64,
    /// Tokens leaving the output reserve
    pub amount_out: u64,
    /// Protocol cut of the trade fee, in input tokens
    pub owner_fee: u64,
    /// Input reserve after the full input (fee included) is added
    pub new_reserve_in: u64,
    /// Output reserve after `amount_out` leaves
    pub new_reserve_out: u64,
}

/// Prices an exact-input swap.
///
/// `amount_out = reserve_out - ceil(reserve_in * reserve_out / (reserve_in + net_in))`,
/// which equals `floor(reserve_out * net_in / (reserve_in + net_in))`. The trade
/// fee is not traded against the curve but still lands in the input reserve,
/// so the product of the reserves can only grow.
pub fn swap_exact_in(
    reserve_in: u64,
    reserve_out: u64,
    amount_in: u64,
    fees: &Fees,
) -> Result<SwapResult, SwapError> {
    if amount_in == 0 {
        return Err(SwapError::ZeroAmountIn);
    }
    if reserve_in == 0 || reserve_out == 0 {
        return Err(SwapError::InsufficientLiquidity);
    }

    let trade_fee = fees.trading_fee(amount_in)?;
    let net_amount_in = amount_in
        .checked_sub(trade_fee)
        .ok_or(SwapError::ArithmeticOverflow)?;

    let invariant = (reserve_in as u128)
        .checked_mul(reserve_out as u128)
        .ok_or(SwapError::ArithmeticOverflow)?;
    let curve_reserve_in = (reserve_in as u128)
        .checked_add(net_amount_in as u128)
        .ok_or(SwapError::ArithmeticOverflow)?;
    let curve_reserve_out = ceil_div(invariant, curve_reserve_in)?;
    let amount_out = (reserve_out as u128)
        .checked_sub(curve_reserve_out)
        .ok_or(SwapError::ArithmeticOverflow)?;
    let amount_out = to_u64(amount_out)?;

    if amount_out == 0 || amount_out >= reserve_out {
        return Err(SwapError::InsufficientLiquidity);
    }

    let owner_fee = fees.owner_trading_fee(trade_fee)?;

    let new_reserve_in = reserve_in
        .checked_add(amount_in)
        .ok_or(SwapError::ArithmeticOverflow)?;
    let new_reserve_out = reserve_out - amount_out;

    let new_invariant = (new_reserve_in as u128)
        .checked_mul(new_reserve_out as u128)
        .ok_or(SwapError::ArithmeticOverflow)?;
    if new_invariant < invariant {
        return Err(SwapError::InvariantViolated);
    }

    Ok(SwapResult {
        trade_fee,
        net_amount_in,
        amount_out,
        owner_fee,
        new_reserve_in,
        new_reserve_out,
    })
}

/// Share tokens worth a single-sided deposit of `owner_fee` into a reserve that
/// holds `new_reserve_in` after the swap (fee included).
///
/// `shares = floor(S * (sqrt(R * (R - fee)) - (R - fee)) / (R - fee))`, i.e. the
/// supply growth `S * (sqrt(1 + fee / base) - 1)` with `base = R - fee`.
pub fn owner_fee_to_shares(
    owner_fee: u64,
    new_reserve_in: u64,
    share_supply: u64,
) -> Result<u64, SwapError> {
    if owner_fee == 0 || share_supply == 0 {
        return Ok(0);
    }
    let base = new_reserve_in
        .checked_sub(owner_fee)
        .ok_or(SwapError::ArithmeticOverflow)? as u128;
    if base == 0 {
        return Ok(0);
    }
    let root = isqrt(
        (new_reserve_in as u128)
            .checked_mul(base)
            .ok_or(SwapError::ArithmeticOverflow)?,
    );
    let growth = root.saturating_sub(base);
    let shares = (share_supply as u128)
        .checked_mul(growth)
        .ok_or(SwapError::ArithmeticOverflow)?
        / base;
    to_u64(shares)
}

/// Shares issued for depositing `amount_x` and `amount_y`.
///
/// An empty pool issues `floor(sqrt(x * y))`, which fixes the opening price at
/// x:y. Otherwise each side is converted to shares at the current ratio; if the
/// two conversions disagree the larger side carries excess worth at least one
/// share and the deposit is rejected. Excess worth less than one share stays in
/// the pool.
pub fn deposit_shares(
    amount_x: u64,
    amount_y: u64,
    reserve_x: u64,
    reserve_y: u64,
    share_supply: u64,
) -> Result<u64, SwapError> {
    if amount_x == 0 || amount_y == 0 {
        return Err(SwapError::ZeroDeposit);
    }

    if share_supply == 0 {
        let product = (amount_x as u128)
            .checked_mul(amount_y as u128)
            .ok_or(SwapError::ArithmeticOverflow)?;
        let shares = to_u64(isqrt(product))?;
        if shares == 0 {
            return Err(SwapError::ZeroDeposit);
        }
        return Ok(shares);
    }

    if reserve_x == 0 || reserve_y == 0 {
        return Err(SwapError::InsufficientLiquidity);
    }

    let supply = share_supply as u128;
    let shares_x = (amount_x as u128)
        .checked_mul(supply)
        .ok_or(SwapError::ArithmeticOverflow)?
        / reserve_x as u128;
    let shares_y = (amount_y as u128)
        .checked_mul(supply)
        .ok_or(SwapError::ArithmeticOverflow)?
        / reserve_y as u128;

    if shares_x != shares_y {
        return Err(SwapError::UnbalancedDeposit);
    }
    if shares_x == 0 {
        return Err(SwapError::ZeroDeposit);
    }
    to_u64(shares_x)
}

/// Reserve tokens redeemed by burning shares.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WithdrawResult {
    pub amount_x: u64,
    pub amount_y: u64,
}

/// `amount = floor(shares * reserve / supply)` for each side.
pub fn withdraw_amounts(
    share_amount: u64,
    reserve_x: u64,
    reserve_y: u64,
    share_supply: u64,
) -> Result<WithdrawResult, SwapError> {
    if share_supply == 0 {
        return Err(SwapError::EmptyPool);
    }
    if share_amount == 0 {
        return Err(SwapError::ZeroTradingTokens);
    }
    if share_amount > share_supply {
        return Err(SwapError::InsufficientShares);
    }

    let shares = share_amount as u128;
    let supply = share_supply as u128;
    let amount_x = shares
        .checked_mul(reserve_x as u128)
        .ok_or(SwapError::ArithmeticOverflow)?
        / supply;
    let amount_y = shares
        .checked_mul(reserve_y as u128)
        .ok_or(SwapError::ArithmeticOverflow)?
        / supply;

    if amount_x == 0 && amount_y == 0 {
        return Err(SwapError::ZeroTradingTokens);
    }

    Ok(WithdrawResult {
        amount_x: to_u64(amount_x)?,
        amount_y: to_u64(amount_y)?,
    })
}
