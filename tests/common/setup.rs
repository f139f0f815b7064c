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

//! # Test Environment Setup Utilities
//!
//! Program test creation, environment startup and transaction sending.

use solana_program::instruction::Instruction;
use solana_program_test::{processor, BanksClient, BanksClientError, ProgramTest};
use solana_sdk::{
    signature::{Keypair, Signer},
    transaction::Transaction,
};
use std::env;

use crate::common::{process_instruction, TestResult, PROGRAM_ID};

/// Test environment context
///
/// Contains all the basic components needed for a test environment
pub struct TestEnvironment {
    pub banks_client: BanksClient,
    pub payer: Keypair,
    pub recent_blockhash: solana_sdk::hash::Hash,
}

/// Create a basic program test environment with the swap pool program
///
/// # Returns
/// Configured ProgramTest instance
pub fn create_program_test() -> ProgramTest {
    ProgramTest::new("solana_dex", PROGRAM_ID, processor!(process_instruction))
}

/// Start a basic test environment
///
/// # Returns
/// TestEnvironment with banks client, payer, and recent blockhash
pub async fn start_test_environment() -> TestEnvironment {
    env::set_var("RUST_LOG", "error,solana_runtime::message_processor::stable_log=error");
    let _ = env_logger::try_init();

    let (banks_client, payer, recent_blockhash) = create_program_test().start().await;
    TestEnvironment {
        banks_client,
        payer,
        recent_blockhash,
    }
}

/// Signs with the payer plus `extra_signers` and processes the transaction.
///
/// Every extra signer must be a required signer of one of the instructions.
pub async fn send_transaction(
    env: &mut TestEnvironment,
    instructions: &[Instruction],
    extra_signers: &[&Keypair],
) -> TestResult {
    env.recent_blockhash = env.banks_client.get_latest_blockhash().await?;
    let mut signers: Vec<&Keypair> = vec![&env.payer];
    signers.extend_from_slice(extra_signers);

    let mut transaction = Transaction::new_with_payer(instructions, Some(&env.payer.pubkey()));
    transaction.sign(&signers, env.recent_blockhash);
    env.banks_client.process_transaction(transaction).await
}

/// Simulates the transaction and returns the program's return data.
#[allow(dead_code)]
pub async fn simulate_return_data(
    env: &mut TestEnvironment,
    instructions: &[Instruction],
    extra_signers: &[&Keypair],
) -> Result<Vec<u8>, BanksClientError> {
    env.recent_blockhash = env.banks_client.get_latest_blockhash().await?;
    let mut signers: Vec<&Keypair> = vec![&env.payer];
    signers.extend_from_slice(extra_signers);

    let mut transaction = Transaction::new_with_payer(instructions, Some(&env.payer.pubkey()));
    transaction.sign(&signers, env.recent_blockhash);
    let simulation = env.banks_client.simulate_transaction(transaction).await?;
    if let Some(Err(err)) = simulation.result {
        return Err(BanksClientError::TransactionError(err));
    }
    Ok(simulation
        .simulation_details
        .and_then(|details| details.return_data)
        .map(|return_data| return_data.data)
        .unwrap_or_default())
}
