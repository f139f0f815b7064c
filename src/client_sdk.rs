/*
MIT License

Copyright (c) 2024 Davinci

Permission is hereby granted, free of charge, to any person obtaining a copy
of this software and associated documentation files (the "Software"), to deal
in the Software without restriction, including without limitation the rights
to use, copy, modify, merge, publish, distribute, sublicense, and/or sell
copies of the Software, and to permit persons to whom the Software is
furnished to do so, subject to the following conditions:

The above copyright notice and this permission notice shall be included in all
copies or substantial portions of the Software.

THE SOFTWARE IS PROVIDED "AS IS", WITHOUT WARRANTY OF ANY KIND, EXPRESS OR
IMPLIED, INCLUDING BUT NOT LIMITED TO THE WARRANTIES OF MERCHANTABILITY,
FITNESS FOR A PARTICULAR PURPOSE AND NONINFRINGEMENT. IN NO EVENT SHALL THE
AUTHORS OR COPYRIGHT HOLDERS BE LIABLE FOR ANY CLAIM, DAMAGES OR OTHER
LIABILITY, WHETHER IN AN ACTION OF CONTRACT, TORT OR OTHERWISE, ARISING FROM,
OUT OF OR IN CONNECTION WITH THE SOFTWARE OR THE USE OR OTHER DEALINGS IN THE
SOFTWARE.
*/

//! # Swap Pool - Client SDK
//!
//! Builds every program instruction with the account layout the processors
//! expect, and derives the addresses a client needs before sending them.
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use solana_dex::client_sdk::{PoolAddresses, PoolClient};
//! use solana_dex::curve::default_fees;
//! use solana_program::pubkey::Pubkey;
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let client = PoolClient::new(solana_dex::id());
//! let creator = Pubkey::new_unique();
//! let pool = Pubkey::new_unique();
//! let fee_owner = Pubkey::new_unique();
//!
//! // Step 1: record the fee schedule
//! let init = client.initialize_pool(&creator, &pool, &fee_owner, default_fees())?;
//!
//! // Step 2: create reserves and a share mint under the authority, then bind them
//! let (authority, _bump) = client.derive_authority(&pool)?;
//! # let (reserve_x, reserve_y, share_mint, fee_account) =
//! #     (Pubkey::new_unique(), Pubkey::new_unique(), Pubkey::new_unique(), Pubkey::new_unique());
//! let addresses = client.pool_addresses(pool, reserve_x, reserve_y, share_mint, fee_account)?;
//! assert_eq!(addresses.authority, authority);
//! let bind = client.bind_reserves(&creator, &addresses, None)?;
//! # let _ = (init, bind);
//! # Ok(())
//! # }
//! ```

use borsh::BorshSerialize;
use solana_program::{
    instruction::{AccountMeta, Instruction},
    pubkey::Pubkey,
    system_program,
};

use crate::{
    curve::{CurveType, Fees},
    types::{PoolInstruction, SwapDirection},
    utils::authority::find_pool_authority,
};

/// Errors that can occur when using the pool client
#[derive(Debug)]
pub enum PoolClientError {
    /// Fee schedule would be rejected on chain
    InvalidFeeSchedule,
    /// No authority bump exists for the pool address
    AuthorityDerivation,
    /// Error during instruction serialization
    SerializationError,
}

impl From<std::io::Error> for PoolClientError {
    fn from(_error: std::io::Error) -> Self {
        Self::SerializationError
    }
}

impl std::fmt::Display for PoolClientError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            PoolClientError::InvalidFeeSchedule => {
                write!(f, "Invalid fee schedule: every denominator must be non-zero and cover its numerator")
            }
            PoolClientError::AuthorityDerivation => write!(f, "No valid pool authority bump"),
            PoolClientError::SerializationError => write!(f, "Failed to serialize instruction data"),
        }
    }
}

impl std::error::Error for PoolClientError {}

/// Registry addresses of a bound pool.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PoolAddresses {
    pub pool: Pubkey,
    pub authority: Pubkey,
    pub authority_bump: u8,
    pub reserve_x: Pubkey,
    pub reserve_y: Pubkey,
    pub share_mint: Pubkey,
    pub fee_account: Pubkey,
}

/// Caller token accounts for a two-sided deposit or withdrawal.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LiquidityAccounts {
    pub token_x: Pubkey,
    pub token_y: Pubkey,
    pub share_account: Pubkey,
}

/// Client for building pool instructions.
#[derive(Debug, Clone, Copy)]
pub struct PoolClient {
    program_id: Pubkey,
}

impl PoolClient {
    pub fn new(program_id: Pubkey) -> Self {
        Self { program_id }
    }

    pub fn program_id(&self) -> Pubkey {
        self.program_id
    }

    /// Derives the pool authority and its bump.
    pub fn derive_authority(&self, pool: &Pubkey) -> Result<(Pubkey, u8), PoolClientError> {
        find_pool_authority(pool, &self.program_id).map_err(|_| PoolClientError::AuthorityDerivation)
    }

    /// Groups the registry addresses, deriving the authority from the pool.
    pub fn pool_addresses(
        &self,
        pool: Pubkey,
        reserve_x: Pubkey,
        reserve_y: Pubkey,
        share_mint: Pubkey,
        fee_account: Pubkey,
    ) -> Result<PoolAddresses, PoolClientError> {
        let (authority, authority_bump) = self.derive_authority(&pool)?;
        Ok(PoolAddresses {
            pool,
            authority,
            authority_bump,
            reserve_x,
            reserve_y,
            share_mint,
            fee_account,
        })
    }

    fn build(&self, instruction: PoolInstruction, accounts: Vec<AccountMeta>) -> Result<Instruction, PoolClientError> {
        Ok(Instruction {
            program_id: self.program_id,
            accounts,
            data: instruction.try_to_vec()?,
        })
    }

    /// Builds `InitializePool`. Both the creator and the pool account sign.
    pub fn initialize_pool(
        &self,
        creator: &Pubkey,
        pool: &Pubkey,
        fee_owner: &Pubkey,
        fees: Fees,
    ) -> Result<Instruction, PoolClientError> {
        fees.validate().map_err(|_| PoolClientError::InvalidFeeSchedule)?;
        let (authority, _) = self.derive_authority(pool)?;
        self.build(
            PoolInstruction::InitializePool {
                fee_owner: *fee_owner,
                fees,
                curve_type: CurveType::ConstantProduct,
            },
            vec![
                AccountMeta::new(*creator, true),
                AccountMeta::new(*pool, true),
                AccountMeta::new_readonly(authority, false),
                AccountMeta::new_readonly(system_program::id(), false),
            ],
        )
    }

    /// Builds `BindReserves`. `initial_share_destination` is required when the
    /// reserves were funded before binding.
    pub fn bind_reserves(
        &self,
        creator: &Pubkey,
        addresses: &PoolAddresses,
        initial_share_destination: Option<&Pubkey>,
    ) -> Result<Instruction, PoolClientError> {
        let mut accounts = vec![
            AccountMeta::new_readonly(*creator, true),
            AccountMeta::new(addresses.pool, false),
            AccountMeta::new_readonly(addresses.authority, false),
            AccountMeta::new_readonly(addresses.reserve_x, false),
            AccountMeta::new_readonly(addresses.reserve_y, false),
            AccountMeta::new(addresses.share_mint, false),
            AccountMeta::new_readonly(addresses.fee_account, false),
            AccountMeta::new_readonly(spl_token::id(), false),
        ];
        if let Some(destination) = initial_share_destination {
            accounts.push(AccountMeta::new(*destination, false));
        }
        self.build(PoolInstruction::BindReserves { bump: addresses.authority_bump }, accounts)
    }

    fn pool_block(&self, user: &Pubkey, addresses: &PoolAddresses) -> Vec<AccountMeta> {
        vec![
            AccountMeta::new_readonly(*user, true),
            AccountMeta::new(addresses.pool, false),
            AccountMeta::new_readonly(addresses.authority, false),
            AccountMeta::new(addresses.reserve_x, false),
            AccountMeta::new(addresses.reserve_y, false),
            AccountMeta::new(addresses.share_mint, false),
            AccountMeta::new(addresses.fee_account, false),
        ]
    }

    fn liquidity_accounts(
        &self,
        user: &Pubkey,
        addresses: &PoolAddresses,
        user_accounts: &LiquidityAccounts,
    ) -> Vec<AccountMeta> {
        let mut accounts = self.pool_block(user, addresses);
        accounts.extend([
            AccountMeta::new(user_accounts.token_x, false),
            AccountMeta::new(user_accounts.token_y, false),
            AccountMeta::new(user_accounts.share_account, false),
            AccountMeta::new_readonly(spl_token::id(), false),
        ]);
        accounts
    }

    pub fn deposit(
        &self,
        user: &Pubkey,
        addresses: &PoolAddresses,
        user_accounts: &LiquidityAccounts,
        amount_x: u64,
        amount_y: u64,
        minimum_shares_out: u64,
    ) -> Result<Instruction, PoolClientError> {
        self.build(
            PoolInstruction::Deposit { amount_x, amount_y, minimum_shares_out },
            self.liquidity_accounts(user, addresses, user_accounts),
        )
    }

    pub fn withdraw(
        &self,
        user: &Pubkey,
        addresses: &PoolAddresses,
        user_accounts: &LiquidityAccounts,
        share_amount: u64,
        minimum_amount_x: u64,
        minimum_amount_y: u64,
    ) -> Result<Instruction, PoolClientError> {
        self.build(
            PoolInstruction::Withdraw { share_amount, minimum_amount_x, minimum_amount_y },
            self.liquidity_accounts(user, addresses, user_accounts),
        )
    }

    /// Builds `Swap`. `source` must hold the input mint for `direction`.
    #[allow(clippy::too_many_arguments)]
    pub fn swap(
        &self,
        user: &Pubkey,
        addresses: &PoolAddresses,
        direction: SwapDirection,
        source: &Pubkey,
        destination: &Pubkey,
        amount_in: u64,
        minimum_amount_out: u64,
        host_fee_account: Option<&Pubkey>,
    ) -> Result<Instruction, PoolClientError> {
        let mut accounts = self.pool_block(user, addresses);
        accounts.extend([
            AccountMeta::new(*source, false),
            AccountMeta::new(*destination, false),
            AccountMeta::new_readonly(spl_token::id(), false),
        ]);
        if let Some(host) = host_fee_account {
            accounts.push(AccountMeta::new(*host, false));
        }
        self.build(PoolInstruction::Swap { direction, amount_in, minimum_amount_out }, accounts)
    }

    pub fn get_pool_info(&self, addresses: &PoolAddresses) -> Result<Instruction, PoolClientError> {
        self.build(
            PoolInstruction::GetPoolInfo,
            vec![
                AccountMeta::new_readonly(addresses.pool, false),
                AccountMeta::new_readonly(addresses.reserve_x, false),
                AccountMeta::new_readonly(addresses.reserve_y, false),
                AccountMeta::new_readonly(addresses.share_mint, false),
            ],
        )
    }
}

/// Associated share token account of `wallet`.
pub fn associated_share_account(wallet: &Pubkey, share_mint: &Pubkey) -> Pubkey {
    spl_associated_token_account::get_associated_token_address(wallet, share_mint)
}

/// Instruction creating the associated share token account of `wallet`.
pub fn create_associated_share_account(payer: &Pubkey, wallet: &Pubkey, share_mint: &Pubkey) -> Instruction {
    spl_associated_token_account::instruction::create_associated_token_account(
        payer,
        wallet,
        share_mint,
        &spl_token::id(),
    )
}
