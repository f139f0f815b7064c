//! Constant Product Swap Pool Program
//!
//! A pool custodies two token reserves under a program derived authority,
//! issues share tokens for deposits and prices swaps on x * y = k with a fee
//! charged on the input side.

use borsh::BorshDeserialize;
use solana_program::{
    account_info::AccountInfo, entrypoint::ProgramResult, msg, program_error::PrintProgramError,
    program_error::ProgramError, pubkey::Pubkey,
};

pub mod client_sdk;
pub mod constants;
pub mod curve;
pub mod error;
pub mod processors;
pub mod state;
pub mod types;
pub mod utils;

pub use error::SwapError;
pub use state::{PoolState, PoolStatus};
pub use types::{PoolInfo, PoolInstruction, SwapDirection, WithdrawReturn};

use processors::*;

solana_program::declare_id!("SwapPoo111111111111111111111111111111111111");

#[cfg(not(feature = "no-entrypoint"))]
solana_program::entrypoint!(process_instruction);

/// Program entrypoint: decodes the instruction and routes it to its processor.
///
/// Errors are printed in decoded form before being returned.
pub fn process_instruction(
    program_id: &Pubkey,
    accounts: &[AccountInfo],
    instruction_data: &[u8],
) -> ProgramResult {
    let instruction = PoolInstruction::try_from_slice(instruction_data).map_err(|e| {
        msg!("❌ Invalid instruction data: {:?}", e);
        ProgramError::InvalidInstructionData
    })?;

    let result = match instruction {
        PoolInstruction::InitializePool { fee_owner, fees, curve_type } => {
            process_initialize_pool(program_id, fee_owner, fees, curve_type, accounts)
        }
        PoolInstruction::BindReserves { bump } => process_bind_reserves(program_id, bump, accounts),
        PoolInstruction::Deposit { amount_x, amount_y, minimum_shares_out } => {
            process_deposit(program_id, amount_x, amount_y, minimum_shares_out, accounts)
        }
        PoolInstruction::Withdraw { share_amount, minimum_amount_x, minimum_amount_y } => {
            process_withdraw(program_id, share_amount, minimum_amount_x, minimum_amount_y, accounts)
        }
        PoolInstruction::Swap { direction, amount_in, minimum_amount_out } => {
            process_swap(program_id, direction, amount_in, minimum_amount_out, accounts)
        }
        PoolInstruction::GetPoolInfo => process_get_pool_info(program_id, accounts),
    };

    if let Err(error) = &result {
        error.print::<SwapError>();
    }
    result
}
