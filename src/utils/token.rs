//! Token Ledger Helpers
//!
//! Thin wrappers over SPL Token CPIs and account unpacking. Reserve balances
//! and share supply are always read through these helpers so every processor
//! sees the ledger the same way.

use solana_program::{
    account_info::AccountInfo,
    entrypoint::ProgramResult,
    msg,
    program::{invoke, invoke_signed},
    program_error::ProgramError,
    program_pack::Pack,
};
use spl_token::{
    instruction as token_instruction,
    state::{Account as TokenAccount, Mint},
};

use crate::error::SwapError;

/// Unpacks an SPL token account, rejecting accounts the token program does not own.
pub fn unpack_token_account(account: &AccountInfo, account_name: &str) -> Result<TokenAccount, ProgramError> {
    if account.owner != &spl_token::id() {
        msg!("❌ {}: not owned by the SPL Token program", account_name);
        msg!("   Expected owner: {}", spl_token::id());
        msg!("   Actual owner: {}", account.owner);
        return Err(SwapError::InvalidAccountOwner.into());
    }
    TokenAccount::unpack(&account.data.borrow()).map_err(|e| {
        msg!("❌ {}: failed to unpack token account: {:?}", account_name, e);
        ProgramError::InvalidAccountData
    })
}

/// Unpacks an SPL mint, rejecting accounts the token program does not own.
pub fn unpack_mint(account: &AccountInfo, account_name: &str) -> Result<Mint, ProgramError> {
    if account.owner != &spl_token::id() {
        msg!("❌ {}: not owned by the SPL Token program", account_name);
        msg!("   Expected owner: {}", spl_token::id());
        msg!("   Actual owner: {}", account.owner);
        return Err(SwapError::InvalidAccountOwner.into());
    }
    Mint::unpack(&account.data.borrow()).map_err(|e| {
        msg!("❌ {}: failed to unpack mint: {:?}", account_name, e);
        ProgramError::InvalidAccountData
    })
}

/// Transfers tokens the caller owns. The authority must have signed the transaction.
pub fn transfer_tokens<'a>(
    source: &AccountInfo<'a>,
    destination: &AccountInfo<'a>,
    authority: &AccountInfo<'a>,
    token_program: &AccountInfo<'a>,
    amount: u64,
) -> ProgramResult {
    invoke(
        &token_instruction::transfer(
            token_program.key,
            source.key,
            destination.key,
            authority.key,
            &[],
            amount,
        )?,
        &[source.clone(), destination.clone(), authority.clone(), token_program.clone()],
    )
}

/// Transfers tokens out of an account owned by the pool authority.
pub fn transfer_tokens_signed<'a>(
    source: &AccountInfo<'a>,
    destination: &AccountInfo<'a>,
    authority: &AccountInfo<'a>,
    token_program: &AccountInfo<'a>,
    amount: u64,
    signer_seeds: &[&[u8]],
) -> ProgramResult {
    invoke_signed(
        &token_instruction::transfer(
            token_program.key,
            source.key,
            destination.key,
            authority.key,
            &[],
            amount,
        )?,
        &[source.clone(), destination.clone(), authority.clone(), token_program.clone()],
        &[signer_seeds],
    )
}

/// Mints share tokens with the pool authority as mint authority.
pub fn mint_tokens_signed<'a>(
    mint: &AccountInfo<'a>,
    destination: &AccountInfo<'a>,
    mint_authority: &AccountInfo<'a>,
    token_program: &AccountInfo<'a>,
    amount: u64,
    signer_seeds: &[&[u8]],
) -> ProgramResult {
    invoke_signed(
        &token_instruction::mint_to(
            token_program.key,
            mint.key,
            destination.key,
            mint_authority.key,
            &[],
            amount,
        )?,
        &[mint.clone(), destination.clone(), mint_authority.clone(), token_program.clone()],
        &[signer_seeds],
    )
}

/// Burns tokens from an account the signing caller owns.
pub fn burn_tokens<'a>(
    token_account: &AccountInfo<'a>,
    mint: &AccountInfo<'a>,
    authority: &AccountInfo<'a>,
    token_program: &AccountInfo<'a>,
    amount: u64,
) -> ProgramResult {
    invoke(
        &token_instruction::burn(
            token_program.key,
            token_account.key,
            mint.key,
            authority.key,
            &[],
            amount,
        )?,
        &[token_account.clone(), mint.clone(), authority.clone(), token_program.clone()],
    )
}
