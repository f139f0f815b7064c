//! Liquidity Processors
//!
//! Deposits mint shares against both reserves in proportion; withdrawals burn
//! shares and pay out the matching slice of each reserve. Balances and supply
//! come straight from the token ledger.

use borsh::BorshSerialize;
use solana_program::{
    account_info::{next_account_info, AccountInfo},
    entrypoint::ProgramResult,
    msg,
    program::set_return_data,
    pubkey::Pubkey,
};

use crate::{
    curve::{deposit_shares, withdraw_amounts},
    debug_msg,
    error::SwapError,
    types::WithdrawReturn,
    utils::{
        authority::authority_signer_seeds,
        serialization::serialize_to_account,
        token::{burn_tokens, mint_tokens_signed, transfer_tokens, transfer_tokens_signed},
        validation::{validate_token_program, validate_user_token_account, PoolAccounts},
    },
};

/// Processes a two-sided deposit.
///
/// # Account Order:
/// 0-6. Pool block (user signer, pool state, authority, reserve X, reserve Y,
///      share mint, fee account)
/// 7. **User Token X** (writable)
/// 8. **User Token Y** (writable)
/// 9. **User Share Account** (writable)
/// 10. **Token Program** (readable)
///
/// # Arguments
/// * `program_id` - This program's id
/// * `amount_x` - Reserve X tokens to deposit
/// * `amount_y` - Reserve Y tokens to deposit
/// * `minimum_shares_out` - Lower bound on shares issued
/// * `accounts` - Accounts in the order above
///
/// # Returns
/// * `ProgramResult` - Shares issued are set as return data
pub fn process_deposit(
    program_id: &Pubkey,
    amount_x: u64,
    amount_y: u64,
    minimum_shares_out: u64,
    accounts: &[AccountInfo],
) -> ProgramResult {
    msg!("🔄 Processing Deposit: {} X + {} Y", amount_x, amount_y);
    let account_info_iter = &mut accounts.iter();
    let pool = PoolAccounts::load(program_id, account_info_iter)?;
    let user_token_x = next_account_info(account_info_iter)?;
    let user_token_y = next_account_info(account_info_iter)?;
    let user_share_account = next_account_info(account_info_iter)?;
    let token_program = next_account_info(account_info_iter)?;

    validate_token_program(token_program)?;
    validate_user_token_account(user_token_x, &pool.state.reserve_x_mint, "User token X")?;
    validate_user_token_account(user_token_y, &pool.state.reserve_y_mint, "User token Y")?;
    validate_user_token_account(user_share_account, &pool.state.share_mint, "User share account")?;

    let shares = deposit_shares(
        amount_x,
        amount_y,
        pool.reserve_x_amount,
        pool.reserve_y_amount,
        pool.share_supply,
    )
    .map_err(|e| {
        msg!(
            "❌ Deposit rejected against reserves {} / {} and supply {}",
            pool.reserve_x_amount,
            pool.reserve_y_amount,
            pool.share_supply
        );
        e
    })?;

    if shares < minimum_shares_out {
        msg!("❌ Slippage: {} shares issued, minimum {}", shares, minimum_shares_out);
        return Err(SwapError::SlippageExceeded.into());
    }

    transfer_tokens(user_token_x, pool.reserve_x, pool.user, token_program, amount_x)?;
    transfer_tokens(user_token_y, pool.reserve_y, pool.user, token_program, amount_y)?;

    let bump_seed = [pool.state.authority_bump];
    let signer_seeds = authority_signer_seeds(pool.pool.key, &bump_seed);
    mint_tokens_signed(
        pool.share_mint,
        user_share_account,
        pool.authority,
        token_program,
        shares,
        &signer_seeds,
    )?;

    set_return_data(&shares.try_to_vec()?);
    msg!("✅ Deposit complete: {} shares issued", shares);
    msg!(
        "   Reserves now {} / {}, supply {}",
        pool.reserve_x_amount.saturating_add(amount_x),
        pool.reserve_y_amount.saturating_add(amount_y),
        pool.share_supply.saturating_add(shares)
    );
    Ok(())
}

/// Processes a withdrawal.
///
/// # Account Order:
/// Same as `process_deposit`.
///
/// # Arguments
/// * `program_id` - This program's id
/// * `share_amount` - Shares the user gives up, withdraw fee included
/// * `minimum_amount_x` - Lower bound on reserve X paid out
/// * `minimum_amount_y` - Lower bound on reserve Y paid out
/// * `accounts` - Accounts in the order above
///
/// # Returns
/// * `ProgramResult` - `WithdrawReturn` is set as return data
pub fn process_withdraw(
    program_id: &Pubkey,
    share_amount: u64,
    minimum_amount_x: u64,
    minimum_amount_y: u64,
    accounts: &[AccountInfo],
) -> ProgramResult {
    msg!("🔄 Processing Withdraw: {} shares", share_amount);
    let account_info_iter = &mut accounts.iter();
    let mut pool = PoolAccounts::load(program_id, account_info_iter)?;
    let user_token_x = next_account_info(account_info_iter)?;
    let user_token_y = next_account_info(account_info_iter)?;
    let user_share_account = next_account_info(account_info_iter)?;
    let token_program = next_account_info(account_info_iter)?;

    validate_token_program(token_program)?;
    validate_user_token_account(user_token_x, &pool.state.reserve_x_mint, "User token X")?;
    validate_user_token_account(user_token_y, &pool.state.reserve_y_mint, "User token Y")?;
    let user_shares =
        validate_user_token_account(user_share_account, &pool.state.share_mint, "User share account")?;

    if pool.share_supply == 0 {
        msg!("❌ Pool has no outstanding shares");
        return Err(SwapError::EmptyPool.into());
    }
    if share_amount == 0 {
        return Err(SwapError::ZeroTradingTokens.into());
    }
    if share_amount > user_shares.amount || share_amount > pool.share_supply {
        msg!(
            "❌ Withdrawing {} shares, holding {}, supply {}",
            share_amount,
            user_shares.amount,
            pool.share_supply
        );
        return Err(SwapError::InsufficientShares.into());
    }

    let withdraw_fee = if user_share_account.key == pool.fee_account.key {
        0
    } else {
        pool.state.fees.owner_withdraw_fee(share_amount)?
    };
    let burned = share_amount
        .checked_sub(withdraw_fee)
        .ok_or(SwapError::ArithmeticOverflow)?;
    debug_msg!("withdraw fee {} shares, burning {}", withdraw_fee, burned);

    let amounts = withdraw_amounts(burned, pool.reserve_x_amount, pool.reserve_y_amount, pool.share_supply)?;
    if amounts.amount_x < minimum_amount_x || amounts.amount_y < minimum_amount_y {
        msg!(
            "❌ Slippage: paying {} / {}, minimum {} / {}",
            amounts.amount_x,
            amounts.amount_y,
            minimum_amount_x,
            minimum_amount_y
        );
        return Err(SwapError::SlippageExceeded.into());
    }

    if withdraw_fee > 0 {
        pool.state.accrue_fee_shares(withdraw_fee)?;
        serialize_to_account(&pool.state, pool.pool)?;
        transfer_tokens(user_share_account, pool.fee_account, pool.user, token_program, withdraw_fee)?;
    }
    burn_tokens(user_share_account, pool.share_mint, pool.user, token_program, burned)?;

    let bump_seed = [pool.state.authority_bump];
    let signer_seeds = authority_signer_seeds(pool.pool.key, &bump_seed);
    if amounts.amount_x > 0 {
        transfer_tokens_signed(
            pool.reserve_x,
            user_token_x,
            pool.authority,
            token_program,
            amounts.amount_x,
            &signer_seeds,
        )?;
    }
    if amounts.amount_y > 0 {
        transfer_tokens_signed(
            pool.reserve_y,
            user_token_y,
            pool.authority,
            token_program,
            amounts.amount_y,
            &signer_seeds,
        )?;
    }

    let result = WithdrawReturn { amount_x: amounts.amount_x, amount_y: amounts.amount_y };
    set_return_data(&result.try_to_vec()?);
    msg!(
        "✅ Withdraw complete: {} X + {} Y for {} shares ({} to fee account)",
        amounts.amount_x,
        amounts.amount_y,
        share_amount,
        withdraw_fee
    );
    Ok(())
}
