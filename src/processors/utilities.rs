//! Utility Processors
//!
//! Read-only views over a pool. Nothing here writes state or moves tokens.

use borsh::BorshSerialize;
use solana_program::{
    account_info::{next_account_info, AccountInfo},
    entrypoint::ProgramResult,
    msg,
    program::set_return_data,
    pubkey::Pubkey,
};

use crate::{
    state::PoolState,
    types::PoolInfo,
    utils::{
        token::{unpack_mint, unpack_token_account},
        validation::validate_address,
    },
};

/// Returns a `PoolInfo` snapshot through return data.
///
/// # Account Order:
/// 0. **Pool State** (readable)
/// 1. **Reserve X** (readable)
/// 2. **Reserve Y** (readable)
/// 3. **Share Mint** (readable)
///
/// # Arguments
/// * `program_id` - This program's id
/// * `accounts` - Accounts in the order above
///
/// # Returns
/// * `ProgramResult` - Success or error
pub fn process_get_pool_info(program_id: &Pubkey, accounts: &[AccountInfo]) -> ProgramResult {
    let account_info_iter = &mut accounts.iter();
    let pool = next_account_info(account_info_iter)?;
    let reserve_x = next_account_info(account_info_iter)?;
    let reserve_y = next_account_info(account_info_iter)?;
    let share_mint = next_account_info(account_info_iter)?;

    let pool_state = PoolState::load(pool, program_id)?;
    pool_state.require_active()?;
    validate_address(reserve_x, &pool_state.reserve_x, "Reserve X")?;
    validate_address(reserve_y, &pool_state.reserve_y, "Reserve Y")?;
    validate_address(share_mint, &pool_state.share_mint, "Share mint")?;

    let info = PoolInfo {
        reserve_x_mint: pool_state.reserve_x_mint,
        reserve_y_mint: pool_state.reserve_y_mint,
        reserve_x_amount: unpack_token_account(reserve_x, "Reserve X")?.amount,
        reserve_y_amount: unpack_token_account(reserve_y, "Reserve Y")?.amount,
        share_supply: unpack_mint(share_mint, "Share mint")?.supply,
        total_fee_shares: pool_state.total_fee_shares,
        fees: pool_state.fees,
    };

    msg!("📊 Pool {}", pool.key);
    msg!("   Reserves: {} / {}", info.reserve_x_amount, info.reserve_y_amount);
    msg!("   Share supply: {}, fee shares credited: {}", info.share_supply, info.total_fee_shares);
    set_return_data(&info.try_to_vec()?);
    Ok(())
}
