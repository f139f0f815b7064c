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

//! # Token Creation and Management Utilities
//!
//! Mint creation, token account setup, minting and balance reads for
//! integration tests. The environment payer is the mint authority of every
//! test mint unless stated otherwise.

use solana_program::{program_pack::Pack, pubkey::Pubkey};
use solana_program_test::BanksClientError;
use solana_sdk::{signature::Keypair, signer::Signer, system_instruction};
use spl_token::{
    instruction as token_instruction,
    state::{Account as TokenAccount, Mint},
};

use crate::common::{constants, send_transaction, TestEnvironment, TestResult};

fn not_found(what: &str, key: &Pubkey) -> BanksClientError {
    BanksClientError::Io(std::io::Error::new(
        std::io::ErrorKind::NotFound,
        format!("{} {} not found", what, key),
    ))
}

/// Create a token mint
///
/// # Arguments
/// * `env` - Test environment; the payer funds the account
/// * `mint` - Keypair for the new mint account
/// * `mint_authority` - Mint authority of the new mint
/// * `freeze_authority` - Optional freeze authority
pub async fn create_mint_with_authority(
    env: &mut TestEnvironment,
    mint: &Keypair,
    mint_authority: &Pubkey,
    freeze_authority: Option<&Pubkey>,
) -> TestResult {
    let rent = env.banks_client.get_rent().await?;
    let instructions = [
        system_instruction::create_account(
            &env.payer.pubkey(),
            &mint.pubkey(),
            rent.minimum_balance(Mint::LEN),
            Mint::LEN as u64,
            &spl_token::id(),
        ),
        token_instruction::initialize_mint(
            &spl_token::id(),
            &mint.pubkey(),
            mint_authority,
            freeze_authority,
            constants::TOKEN_DECIMALS,
        )
        .unwrap(),
    ];
    send_transaction(env, &instructions, &[mint]).await
}

/// Create a token mint controlled by the payer
#[allow(dead_code)]
pub async fn create_mint(env: &mut TestEnvironment, mint: &Keypair) -> TestResult {
    let authority = env.payer.pubkey();
    create_mint_with_authority(env, mint, &authority, None).await
}

/// Create a token account for a specific mint and owner
pub async fn create_token_account(
    env: &mut TestEnvironment,
    token_account: &Keypair,
    mint: &Pubkey,
    owner: &Pubkey,
) -> TestResult {
    let rent = env.banks_client.get_rent().await?;
    let instructions = [
        system_instruction::create_account(
            &env.payer.pubkey(),
            &token_account.pubkey(),
            rent.minimum_balance(TokenAccount::LEN),
            TokenAccount::LEN as u64,
            &spl_token::id(),
        ),
        token_instruction::initialize_account(&spl_token::id(), &token_account.pubkey(), mint, owner).unwrap(),
    ];
    send_transaction(env, &instructions, &[token_account]).await
}

/// Mint tokens from a payer-controlled mint
pub async fn mint_tokens(env: &mut TestEnvironment, mint: &Pubkey, destination: &Pubkey, amount: u64) -> TestResult {
    let instruction = token_instruction::mint_to(
        &spl_token::id(),
        mint,
        destination,
        &env.payer.pubkey(),
        &[],
        amount,
    )
    .unwrap();
    send_transaction(env, &[instruction], &[]).await
}

/// Unpack a token account
pub async fn get_token_account(env: &mut TestEnvironment, account: &Pubkey) -> Result<TokenAccount, BanksClientError> {
    let data = env
        .banks_client
        .get_account(*account)
        .await?
        .ok_or_else(|| not_found("Token account", account))?;
    Ok(TokenAccount::unpack(&data.data).unwrap())
}

/// Get the token balance of an account
pub async fn get_token_balance(env: &mut TestEnvironment, account: &Pubkey) -> u64 {
    get_token_account(env, account).await.map(|a| a.amount).unwrap_or(0)
}

/// Get the circulating supply of a mint
pub async fn get_mint_supply(env: &mut TestEnvironment, mint: &Pubkey) -> u64 {
    match env.banks_client.get_account(*mint).await {
        Ok(Some(account)) => Mint::unpack(&account.data).unwrap().supply,
        _ => 0,
    }
}
