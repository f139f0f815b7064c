//! Serialization Utilities
//!
//! Buffer-then-copy writes for program-owned state accounts.

use borsh::BorshSerialize;
use solana_program::{account_info::AccountInfo, entrypoint::ProgramResult, msg, program_error::ProgramError};

use crate::debug_msg;

/// Serializes `data` into `account`.
///
/// The value is encoded into a temporary buffer first and only copied once the
/// encoding succeeded and fits, so a failure never leaves a half-written
/// account behind.
///
/// # Arguments
/// * `data` - The data to serialize (must implement BorshSerialize)
/// * `account` - The account to write the data to
///
/// # Returns
/// * `ProgramResult` - `AccountDataTooSmall` when the encoding does not fit
pub fn serialize_to_account<T: BorshSerialize>(data: &T, account: &AccountInfo) -> ProgramResult {
    let mut serialized_data = Vec::new();
    data.serialize(&mut serialized_data).map_err(|e| {
        msg!("❌ Serialization of {} failed: {:?}", account.key, e);
        ProgramError::InvalidAccountData
    })?;

    let account_data_len = account.data_len();
    if serialized_data.len() > account_data_len {
        msg!(
            "❌ Serialized data too large for {}. Need: {}, Have: {}",
            account.key,
            serialized_data.len(),
            account_data_len
        );
        return Err(ProgramError::AccountDataTooSmall);
    }

    account.data.borrow_mut()[..serialized_data.len()].copy_from_slice(&serialized_data);
    debug_msg!("wrote {} bytes to {}", serialized_data.len(), account.key);
    Ok(())
}
