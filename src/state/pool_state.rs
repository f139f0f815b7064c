//! Pool State Types and Structures
//!
//! The persistent registry record for a single pool. One `PoolState` lives in a
//! program-owned account per pool and names every satellite account the pool
//! controls, so the dispatcher can check caller-supplied addresses against it.

use borsh::{BorshDeserialize, BorshSerialize};
use solana_program::{account_info::AccountInfo, msg, program_error::ProgramError, pubkey::Pubkey};

use crate::{
    curve::{CurveType, Fees},
    error::SwapError,
};

/// Lifecycle of a pool account.
///
/// A freshly created (zeroed) account decodes as `Uninitialized`.
#[derive(BorshSerialize, BorshDeserialize, Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PoolStatus {
    #[default]
    Uninitialized,
    /// Fee schedule and authority recorded, reserves not yet bound
    AwaitingReserves,
    /// Reserves, share mint and fee account bound; open for trading
    Active,
}

/// Main pool state.
///
/// Reserve balances and share supply are not mirrored here; they are read
/// from the token accounts on every instruction.
#[derive(BorshSerialize, BorshDeserialize, Debug, Clone, PartialEq, Eq, Default)]
pub struct PoolState {
    pub status: PoolStatus,
    /// Signer of InitializePool, the only key allowed to bind reserves
    pub creator: Pubkey,
    pub pool_authority: Pubkey,
    pub authority_bump: u8,
    /// Required token owner of the fee account
    pub fee_owner: Pubkey,
    pub reserve_x: Pubkey,
    pub reserve_y: Pubkey,
    pub reserve_x_mint: Pubkey,
    pub reserve_y_mint: Pubkey,
    pub share_mint: Pubkey,
    pub fee_account: Pubkey,
    pub fees: Fees,
    pub curve_type: CurveType,
    /// Lifetime share units credited to the fee account (owner trade fees and
    /// withdraw fees). Never decreases.
    pub total_fee_shares: u64,
}

impl PoolState {
    pub const LEN: usize = 1 + // status
        32 + // creator
        32 + // pool_authority
        1 +  // authority_bump
        32 + // fee_owner
        32 + // reserve_x
        32 + // reserve_y
        32 + // reserve_x_mint
        32 + // reserve_y_mint
        32 + // share_mint
        32 + // fee_account
        Fees::LEN +
        1 +  // curve_type
        8; // total_fee_shares

    /// Loads the pool record from its account.
    ///
    /// # Arguments
    /// * `account` - The pool state account
    /// * `program_id` - Owner every pool account must carry
    ///
    /// # Returns
    /// * `Result<PoolState, ProgramError>` - `InvalidAccountOwner` for a foreign
    ///   account, `NotFound` when the account holds no pool
    pub fn load(account: &AccountInfo, program_id: &Pubkey) -> Result<Self, ProgramError> {
        if account.owner != program_id {
            msg!("❌ Pool account {} is owned by {}, expected {}", account.key, account.owner, program_id);
            return Err(SwapError::InvalidAccountOwner.into());
        }

        let data = account.data.borrow();
        if data.is_empty() {
            msg!("❌ Pool account {} is empty", account.key);
            return Err(SwapError::NotFound.into());
        }

        let state = Self::deserialize(&mut &data[..]).map_err(|e| {
            msg!("❌ Pool state deserialization failed: {:?}", e);
            ProgramError::from(SwapError::NotFound)
        })?;

        if state.status == PoolStatus::Uninitialized {
            msg!("❌ Pool account {} is not initialized", account.key);
            return Err(SwapError::NotFound.into());
        }
        Ok(state)
    }

    /// Decodes raw account data without owner checks. Used by clients and tests
    /// reading fetched accounts.
    pub fn unpack_unchecked(data: &[u8]) -> Result<Self, ProgramError> {
        Self::deserialize(&mut &data[..]).map_err(|_| ProgramError::InvalidAccountData)
    }

    pub fn is_active(&self) -> bool {
        self.status == PoolStatus::Active
    }

    /// Fails with `PoolNotActive` unless reserves are bound.
    pub fn require_active(&self) -> Result<(), SwapError> {
        if !self.is_active() {
            msg!("❌ Pool is {:?}, operation requires an active pool", self.status);
            return Err(SwapError::PoolNotActive);
        }
        Ok(())
    }

    /// Records share units credited to the fee account.
    pub fn accrue_fee_shares(&mut self, shares: u64) -> Result<(), SwapError> {
        self.total_fee_shares = self
            .total_fee_shares
            .checked_add(shares)
            .ok_or(SwapError::ArithmeticOverflow)?;
        Ok(())
    }
}
