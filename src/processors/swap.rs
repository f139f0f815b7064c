//! Swap Processor
//!
//! Exact-input swaps against the constant product curve. The trade fee stays
//! in the input reserve; the owner's cut of it is minted to the fee account as
//! share tokens, part of which goes to a host account when one is supplied.

use borsh::BorshSerialize;
use solana_program::{
    account_info::{next_account_info, AccountInfo},
    entrypoint::ProgramResult,
    msg,
    program::set_return_data,
    pubkey::Pubkey,
};

use crate::{
    curve::{owner_fee_to_shares, swap_exact_in},
    debug_msg,
    error::SwapError,
    types::SwapDirection,
    utils::{
        authority::authority_signer_seeds,
        serialization::serialize_to_account,
        token::{mint_tokens_signed, transfer_tokens, transfer_tokens_signed},
        validation::{validate_token_program, validate_user_token_account, PoolAccounts},
    },
};

/// Processes a swap.
///
/// # Account Order:
/// 0-6. Pool block (user signer, pool state, authority, reserve X, reserve Y,
///      share mint, fee account)
/// 7. **User Source** (writable) - Pays `amount_in`
/// 8. **User Destination** (writable) - Receives the output
/// 9. **Token Program** (readable)
/// 10. **Host Fee Account** (writable, optional) - Share account receiving the host cut
///
/// # Arguments
/// * `program_id` - This program's id
/// * `direction` - Which reserve receives `amount_in`
/// * `amount_in` - Exact input, trade fee included
/// * `minimum_amount_out` - Lower bound on the output
/// * `accounts` - Accounts in the order above
///
/// # Returns
/// * `ProgramResult` - Output amount is set as return data
pub fn process_swap(
    program_id: &Pubkey,
    direction: SwapDirection,
    amount_in: u64,
    minimum_amount_out: u64,
    accounts: &[AccountInfo],
) -> ProgramResult {
    msg!("🔄 Processing Swap {:?}: {} in, minimum {} out", direction, amount_in, minimum_amount_out);
    let account_info_iter = &mut accounts.iter();
    let mut pool = PoolAccounts::load(program_id, account_info_iter)?;
    let user_source = next_account_info(account_info_iter)?;
    let user_destination = next_account_info(account_info_iter)?;
    let token_program = next_account_info(account_info_iter)?;
    let host_fee_account = account_info_iter.next();

    validate_token_program(token_program)?;

    let (reserve_in, reserve_out, reserve_in_amount, reserve_out_amount, mint_in, mint_out) = match direction {
        SwapDirection::XToY => (
            pool.reserve_x,
            pool.reserve_y,
            pool.reserve_x_amount,
            pool.reserve_y_amount,
            pool.state.reserve_x_mint,
            pool.state.reserve_y_mint,
        ),
        SwapDirection::YToX => (
            pool.reserve_y,
            pool.reserve_x,
            pool.reserve_y_amount,
            pool.reserve_x_amount,
            pool.state.reserve_y_mint,
            pool.state.reserve_x_mint,
        ),
    };
    validate_user_token_account(user_source, &mint_in, "User source")?;
    validate_user_token_account(user_destination, &mint_out, "User destination")?;
    if let Some(host) = host_fee_account {
        validate_user_token_account(host, &pool.state.share_mint, "Host fee account")?;
    }
    // The fee account named as host takes the whole owner fee.
    let host_fee_account = host_fee_account.filter(|host| host.key != pool.fee_account.key);

    let result = swap_exact_in(reserve_in_amount, reserve_out_amount, amount_in, &pool.state.fees)?;
    debug_msg!(
        "trade fee {} net in {} out {} reserves {} / {}",
        result.trade_fee,
        result.net_amount_in,
        result.amount_out,
        result.new_reserve_in,
        result.new_reserve_out
    );

    if result.amount_out < minimum_amount_out {
        msg!("❌ Slippage: {} out, minimum {}", result.amount_out, minimum_amount_out);
        return Err(SwapError::SlippageExceeded.into());
    }

    let owner_shares = owner_fee_to_shares(result.owner_fee, result.new_reserve_in, pool.share_supply)?;
    let host_shares = match host_fee_account {
        Some(_) => pool.state.fees.host_fee(owner_shares)?,
        None => 0,
    };
    let fee_account_shares = owner_shares
        .checked_sub(host_shares)
        .ok_or(SwapError::ArithmeticOverflow)?;
    debug_msg!(
        "owner fee {} tokens -> {} shares ({} to host)",
        result.owner_fee,
        owner_shares,
        host_shares
    );

    if fee_account_shares > 0 {
        pool.state.accrue_fee_shares(fee_account_shares)?;
        serialize_to_account(&pool.state, pool.pool)?;
    }

    transfer_tokens(user_source, reserve_in, pool.user, token_program, amount_in)?;

    let bump_seed = [pool.state.authority_bump];
    let signer_seeds = authority_signer_seeds(pool.pool.key, &bump_seed);
    transfer_tokens_signed(
        reserve_out,
        user_destination,
        pool.authority,
        token_program,
        result.amount_out,
        &signer_seeds,
    )?;

    if fee_account_shares > 0 {
        mint_tokens_signed(
            pool.share_mint,
            pool.fee_account,
            pool.authority,
            token_program,
            fee_account_shares,
            &signer_seeds,
        )?;
    }
    if let Some(host) = host_fee_account {
        if host_shares > 0 {
            mint_tokens_signed(pool.share_mint, host, pool.authority, token_program, host_shares, &signer_seeds)?;
        }
    }

    set_return_data(&result.amount_out.try_to_vec()?);
    msg!(
        "✅ Swap complete: {} in, {} out, trade fee {}, owner fee {} ({} shares)",
        amount_in,
        result.amount_out,
        result.trade_fee,
        result.owner_fee,
        owner_shares
    );
    Ok(())
}
