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

//! # Common Test Utilities
//!
//! Shared helpers for the integration tests:
//!
//! - Test environment setup and transaction sending
//! - Token mint and account helpers
//! - Pool creation and binding
//! - Liquidity providers, deposits, withdrawals and swaps

pub mod pool_helpers;
pub mod setup;
pub mod tokens;

#[allow(unused_imports)]
pub use liquidity_helpers::*;
#[allow(unused_imports)]
pub use pool_helpers::*;
#[allow(unused_imports)]
pub use setup::*;
#[allow(unused_imports)]
pub use tokens::*;

#[allow(unused_imports)]
pub use borsh::{BorshDeserialize, BorshSerialize};
#[allow(unused_imports)]
pub use solana_program::{
    instruction::{AccountMeta, Instruction, InstructionError},
    pubkey::Pubkey,
};
#[allow(unused_imports)]
pub use solana_program_test::*;
#[allow(unused_imports)]
pub use solana_sdk::{
    signature::{Keypair, Signer},
    transaction::{Transaction, TransactionError},
};

#[allow(unused_imports)]
pub use solana_dex::{
    client_sdk::{LiquidityAccounts, PoolAddresses, PoolClient},
    curve::{FeeRate, Fees},
    process_instruction, PoolInfo, PoolInstruction, PoolState, PoolStatus, SwapDirection,
    SwapError, ID as PROGRAM_ID,
};

/// Test result type alias for convenience
pub type TestResult = Result<(), BanksClientError>;

/// Asserts that a transaction failed with the given program error.
#[allow(dead_code)]
pub fn assert_swap_error(result: TestResult, expected: SwapError) {
    match result {
        Ok(()) => panic!("Expected {:?} but the transaction succeeded", expected),
        Err(e) => match e.unwrap() {
            TransactionError::InstructionError(_, InstructionError::Custom(code)) => assert_eq!(
                code,
                expected as u32,
                "Expected {:?} ({}), got custom error {}",
                expected,
                expected as u32,
                code
            ),
            other => panic!("Expected {:?}, got {:?}", expected, other),
        },
    }
    println!("✅ Rejected with {:?}", expected);
}

/// Asserts that a transaction failed with a built-in instruction error.
#[allow(dead_code)]
pub fn assert_instruction_error(result: TestResult, expected: InstructionError) {
    match result {
        Ok(()) => panic!("Expected {:?} but the transaction succeeded", expected),
        Err(e) => match e.unwrap() {
            TransactionError::InstructionError(_, actual) => assert_eq!(actual, expected),
            other => panic!("Expected {:?}, got {:?}", expected, other),
        },
    }
    println!("✅ Rejected with {:?}", expected);
}

/// Common test constants
pub mod constants {
    /// Test token decimal places
    #[allow(dead_code)]
    pub const TOKEN_DECIMALS: u8 = 6;
}
