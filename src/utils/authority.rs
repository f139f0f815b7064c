//! Pool Authority Derivation
//!
//! Each pool has a program derived authority seeded with the pool state
//! account address. The authority owns the reserve accounts and controls the
//! share mint; only this program can sign for it.

use solana_program::{msg, pubkey::Pubkey};

use crate::error::SwapError;

/// Finds the pool authority and its canonical bump.
///
/// # Arguments
/// * `pool` - Pool state account address (the pool identity)
/// * `program_id` - This program's id
///
/// # Returns
/// * `Result<(Pubkey, u8), SwapError>` - Authority and bump, or
///   `AddressDerivationExhausted` when no bump yields an off-curve address
pub fn find_pool_authority(pool: &Pubkey, program_id: &Pubkey) -> Result<(Pubkey, u8), SwapError> {
    Pubkey::try_find_program_address(&[pool.as_ref()], program_id).ok_or_else(|| {
        msg!("❌ No valid authority bump for pool {}", pool);
        SwapError::AddressDerivationExhausted
    })
}

/// Recomputes the pool authority from a stored bump.
pub fn create_pool_authority(pool: &Pubkey, bump: u8, program_id: &Pubkey) -> Result<Pubkey, SwapError> {
    Pubkey::create_program_address(&[pool.as_ref(), &[bump]], program_id)
        .map_err(|_| SwapError::AddressMismatch)
}

/// Checks a caller-supplied authority against the derived one.
pub fn validate_pool_authority(
    authority: &Pubkey,
    pool: &Pubkey,
    bump: u8,
    program_id: &Pubkey,
) -> Result<(), SwapError> {
    let expected = create_pool_authority(pool, bump, program_id)?;
    if *authority != expected {
        msg!("❌ Pool authority mismatch");
        msg!("   Expected: {}", expected);
        msg!("   Provided: {}", authority);
        return Err(SwapError::AddressMismatch);
    }
    Ok(())
}

/// Seeds for `invoke_signed` on behalf of the pool authority.
///
/// The bump slice must outlive the returned seeds, so the caller owns it:
/// ```rust,ignore
/// let bump = [pool_state.authority_bump];
/// let seeds = authority_signer_seeds(pool_account.key, &bump);
/// invoke_signed(&ix, &accounts, &[&seeds])?;
/// ```
pub fn authority_signer_seeds<'a>(pool: &'a Pubkey, bump: &'a [u8; 1]) -> [&'a [u8]; 2] {
    [pool.as_ref(), bump]
}
