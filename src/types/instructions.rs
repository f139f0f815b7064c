//! Pool Instructions
//!
//! Instruction payloads accepted by the program and the data it hands back
//! through return data. Every payload is borsh encoded; the first byte selects
//! the variant.

use borsh::{BorshDeserialize, BorshSerialize};
use solana_program::pubkey::Pubkey;

use crate::curve::{CurveType, Fees};

/// Which reserve the caller pays into.
#[derive(BorshSerialize, BorshDeserialize, Debug, Clone, Copy, PartialEq, Eq)]
pub enum SwapDirection {
    /// Pay X, receive Y
    XToY,
    /// Pay Y, receive X
    YToX,
}

/// All supported instructions for the Swap Pool Program.
#[derive(BorshSerialize, BorshDeserialize, Debug, Clone, PartialEq, Eq)]
pub enum PoolInstruction {
    /// Records the fee schedule and derives the pool authority.
    ///
    /// Accounts:
    /// 0. `[signer, writable]` Creator, pays for the pool account
    /// 1. `[signer, writable]` Pool state account
    /// 2. `[]` Pool authority
    /// 3. `[]` System program
    InitializePool {
        fee_owner: Pubkey,
        fees: Fees,
        curve_type: CurveType,
    },

    /// Binds the reserve accounts, share mint and fee account, then opens the
    /// pool. Mints the initial shares when the reserves arrive pre-funded.
    ///
    /// Accounts:
    /// 0. `[signer]` Creator
    /// 1. `[writable]` Pool state account
    /// 2. `[]` Pool authority
    /// 3. `[]` Reserve X token account
    /// 4. `[]` Reserve Y token account
    /// 5. `[writable]` Share mint
    /// 6. `[]` Fee account (share token account)
    /// 7. `[]` Token program
    /// 8. `[writable]` Optional destination for initial shares
    BindReserves { bump: u8 },

    /// Deposits both reserve tokens in proportion and mints shares.
    ///
    /// Accounts: the pool block (see `PoolInstruction::Swap`) followed by
    /// 7. `[writable]` User token X
    /// 8. `[writable]` User token Y
    /// 9. `[writable]` User share account
    /// 10. `[]` Token program
    Deposit {
        amount_x: u64,
        amount_y: u64,
        minimum_shares_out: u64,
    },

    /// Burns shares and returns the matching slice of both reserves.
    ///
    /// Accounts: same layout as `Deposit`.
    Withdraw {
        share_amount: u64,
        minimum_amount_x: u64,
        minimum_amount_y: u64,
    },

    /// Exact-input swap against the constant product curve.
    ///
    /// Accounts:
    /// 0. `[signer]` User
    /// 1. `[writable]` Pool state account
    /// 2. `[]` Pool authority
    /// 3. `[writable]` Reserve X
    /// 4. `[writable]` Reserve Y
    /// 5. `[writable]` Share mint
    /// 6. `[writable]` Fee account
    /// 7. `[writable]` User source token account
    /// 8. `[writable]` User destination token account
    /// 9. `[]` Token program
    /// 10. `[writable]` Optional host fee share account
    Swap {
        direction: SwapDirection,
        amount_in: u64,
        minimum_amount_out: u64,
    },

    /// Returns a `PoolInfo` snapshot through return data.
    ///
    /// Accounts:
    /// 0. `[]` Pool state account
    /// 1. `[]` Reserve X
    /// 2. `[]` Reserve Y
    /// 3. `[]` Share mint
    GetPoolInfo,
}

/// Snapshot returned by `GetPoolInfo`.
#[derive(BorshSerialize, BorshDeserialize, Debug, Clone, PartialEq, Eq)]
pub struct PoolInfo {
    pub reserve_x_mint: Pubkey,
    pub reserve_y_mint: Pubkey,
    pub reserve_x_amount: u64,
    pub reserve_y_amount: u64,
    pub share_supply: u64,
    pub total_fee_shares: u64,
    pub fees: Fees,
}

/// Amounts returned by `Withdraw`.
#[derive(BorshSerialize, BorshDeserialize, Debug, Clone, Copy, PartialEq, Eq)]
pub struct WithdrawReturn {
    pub amount_x: u64,
    pub amount_y: u64,
}
