//! Account Validation Utilities
//!
//! Every relationship between caller-supplied accounts and the pool registry is
//! checked here before a processor moves tokens or writes state. A failing
//! check logs the offending account with expected and actual keys and aborts
//! the instruction.

use solana_program::{
    account_info::{next_account_info, AccountInfo},
    msg,
    program_error::ProgramError,
    program_option::COption,
    pubkey::Pubkey,
    system_program,
};
use spl_token::state::Account as TokenAccount;

use crate::{
    debug_msg,
    error::SwapError,
    state::PoolState,
    utils::{
        authority::validate_pool_authority,
        token::{unpack_mint, unpack_token_account},
    },
};

/// Validates that an account signed the transaction.
///
/// # Arguments
/// * `account` - The account to validate
/// * `context` - Context string for error messages
pub fn validate_signer(account: &AccountInfo, context: &str) -> Result<(), ProgramError> {
    if !account.is_signer {
        msg!("❌ {} must be a signer: {}", context, account.key);
        return Err(SwapError::Unauthorized.into());
    }
    Ok(())
}

/// Validates that an account key equals the expected address.
pub fn validate_address(account: &AccountInfo, expected: &Pubkey, context: &str) -> Result<(), ProgramError> {
    if account.key != expected {
        msg!("❌ {}: address mismatch", context);
        msg!("   Expected: {}", expected);
        msg!("   Provided: {}", account.key);
        return Err(SwapError::AddressMismatch.into());
    }
    Ok(())
}

pub fn validate_token_program(account: &AccountInfo) -> Result<(), ProgramError> {
    validate_address(account, &spl_token::id(), "Token program")
}

pub fn validate_system_program(account: &AccountInfo) -> Result<(), ProgramError> {
    validate_address(account, &system_program::id(), "System program")
}

/// Unpacks a caller token account and checks it holds `expected_mint`.
///
/// # Returns
/// * `Result<TokenAccount, ProgramError>` - `InvalidAccountOwner` when the token
///   program does not own the account, `MintMismatch` for the wrong mint
pub fn validate_user_token_account(
    account: &AccountInfo,
    expected_mint: &Pubkey,
    context: &str,
) -> Result<TokenAccount, ProgramError> {
    let token_account = unpack_token_account(account, context)?;
    if token_account.mint != *expected_mint {
        msg!("❌ {}: mint mismatch", context);
        msg!("   Expected mint: {}", expected_mint);
        msg!("   Actual mint: {}", token_account.mint);
        return Err(SwapError::MintMismatch.into());
    }
    Ok(token_account)
}

/// Checks that a reserve token account is owned by the pool authority.
pub fn validate_reserve_owner(
    reserve: &TokenAccount,
    authority: &Pubkey,
    context: &str,
    error: SwapError,
) -> Result<(), ProgramError> {
    if reserve.owner != *authority {
        msg!("❌ {}: token owner is not the pool authority", context);
        msg!("   Expected owner: {}", authority);
        msg!("   Actual owner: {}", reserve.owner);
        return Err(error.into());
    }
    Ok(())
}

/// Checks that a mint is controlled by the pool authority.
pub fn validate_mint_authority(
    mint_authority: &COption<Pubkey>,
    authority: &Pubkey,
    context: &str,
    error: SwapError,
) -> Result<(), ProgramError> {
    match mint_authority {
        COption::Some(actual) if actual == authority => Ok(()),
        COption::Some(actual) => {
            msg!("❌ {}: mint authority is not the pool authority", context);
            msg!("   Expected authority: {}", authority);
            msg!("   Actual authority: {}", actual);
            Err(error.into())
        }
        COption::None => {
            msg!("❌ {}: mint has no mint authority", context);
            Err(error.into())
        }
    }
}

/// The seven accounts every Deposit, Withdraw and Swap starts with, validated
/// against the registry, plus the ledger readings taken while validating.
pub struct PoolAccounts<'a, 'b> {
    pub user: &'b AccountInfo<'a>,
    pub pool: &'b AccountInfo<'a>,
    pub authority: &'b AccountInfo<'a>,
    pub reserve_x: &'b AccountInfo<'a>,
    pub reserve_y: &'b AccountInfo<'a>,
    pub share_mint: &'b AccountInfo<'a>,
    pub fee_account: &'b AccountInfo<'a>,
    pub state: PoolState,
    pub reserve_x_amount: u64,
    pub reserve_y_amount: u64,
    pub share_supply: u64,
}

impl<'a, 'b> PoolAccounts<'a, 'b> {
    /// Pulls the pool block off the account iterator and validates it.
    ///
    /// Checks, in order: user signature, pool ownership and status, authority
    /// derivation, registry addresses, reserve and mint control by the
    /// authority. Nothing is written.
    pub fn load<I>(program_id: &Pubkey, account_info_iter: &mut I) -> Result<Self, ProgramError>
    where
        I: Iterator<Item = &'b AccountInfo<'a>>,
    {
        let user = next_account_info(account_info_iter)?;
        let pool = next_account_info(account_info_iter)?;
        let authority = next_account_info(account_info_iter)?;
        let reserve_x = next_account_info(account_info_iter)?;
        let reserve_y = next_account_info(account_info_iter)?;
        let share_mint = next_account_info(account_info_iter)?;
        let fee_account = next_account_info(account_info_iter)?;

        validate_signer(user, "User")?;

        let state = PoolState::load(pool, program_id)?;
        state.require_active()?;

        validate_pool_authority(authority.key, pool.key, state.authority_bump, program_id)?;

        validate_address(reserve_x, &state.reserve_x, "Reserve X")?;
        validate_address(reserve_y, &state.reserve_y, "Reserve Y")?;
        validate_address(share_mint, &state.share_mint, "Share mint")?;
        validate_address(fee_account, &state.fee_account, "Fee account")?;

        let reserve_x_data = unpack_token_account(reserve_x, "Reserve X")?;
        let reserve_y_data = unpack_token_account(reserve_y, "Reserve Y")?;
        validate_reserve_owner(&reserve_x_data, authority.key, "Reserve X", SwapError::InvalidAccountOwner)?;
        validate_reserve_owner(&reserve_y_data, authority.key, "Reserve Y", SwapError::InvalidAccountOwner)?;

        let share_mint_data = unpack_mint(share_mint, "Share mint")?;
        validate_mint_authority(
            &share_mint_data.mint_authority,
            authority.key,
            "Share mint",
            SwapError::InvalidAccountOwner,
        )?;
        unpack_token_account(fee_account, "Fee account")?;

        debug_msg!(
            "pool {} reserves {} / {} supply {}",
            pool.key,
            reserve_x_data.amount,
            reserve_y_data.amount,
            share_mint_data.supply
        );

        Ok(Self {
            user,
            pool,
            authority,
            reserve_x,
            reserve_y,
            share_mint,
            fee_account,
            state,
            reserve_x_amount: reserve_x_data.amount,
            reserve_y_amount: reserve_y_data.amount,
            share_supply: share_mint_data.supply,
        })
    }
}
