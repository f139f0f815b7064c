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

//! # Pool Creation Helpers
//!
//! Builds pools in each lifecycle stage: initialized only, satellites created
//! but unbound, and fully active.

use solana_program::pubkey::Pubkey;
use solana_program_test::BanksClientError;
use solana_sdk::signature::{Keypair, Signer};

use crate::common::{
    create_mint, create_mint_with_authority, create_token_account, send_transaction, FeeRate, Fees, PoolAddresses,
    PoolClient, PoolState, TestEnvironment, TestResult, PROGRAM_ID,
};

/// Fee schedule from `(numerator, denominator)` pairs.
pub fn fee_schedule(trade: (u64, u64), owner_trade: (u64, u64), owner_withdraw: (u64, u64), host: (u64, u64)) -> Fees {
    Fees {
        trade_fee: FeeRate::new(trade.0, trade.1),
        owner_trade_fee: FeeRate::new(owner_trade.0, owner_trade.1),
        owner_withdraw_fee: FeeRate::new(owner_withdraw.0, owner_withdraw.1),
        host_fee: FeeRate::new(host.0, host.1),
    }
}

/// 0.3% trade fee, nothing for the owner.
#[allow(dead_code)]
pub fn trade_fee_only() -> Fees {
    fee_schedule((3, 1000), (0, 1), (0, 1), (0, 1))
}

/// No fees at all.
#[allow(dead_code)]
pub fn no_fees() -> Fees {
    fee_schedule((0, 1), (0, 1), (0, 1), (0, 1))
}

/// Every account a pool owns or references.
///
/// The environment payer is the pool creator and the authority of both
/// reserve mints.
pub struct PoolFixture {
    pub client: PoolClient,
    pub pool: Keypair,
    pub mint_x: Keypair,
    pub mint_y: Keypair,
    pub share_mint: Keypair,
    pub reserve_x: Keypair,
    pub reserve_y: Keypair,
    pub fee_owner: Keypair,
    pub fee_account: Keypair,
    pub fees: Fees,
    pub addresses: PoolAddresses,
}

/// Send `InitializePool` with the payer as creator.
pub async fn initialize_pool(env: &mut TestEnvironment, pool: &Keypair, fee_owner: &Pubkey, fees: Fees) -> TestResult {
    let client = PoolClient::new(PROGRAM_ID);
    let instruction = client
        .initialize_pool(&env.payer.pubkey(), &pool.pubkey(), fee_owner, fees)
        .unwrap();
    send_transaction(env, &[instruction], &[pool]).await
}

/// Initializes a pool and creates its reserve mints, reserves, share mint and
/// fee account under the derived authority. Reserves are left unbound.
pub async fn setup_unbound_pool(env: &mut TestEnvironment, fees: Fees) -> Result<PoolFixture, BanksClientError> {
    let client = PoolClient::new(PROGRAM_ID);
    let pool = Keypair::new();
    let fee_owner = Keypair::new();

    initialize_pool(env, &pool, &fee_owner.pubkey(), fees).await?;
    let (authority, _) = client.derive_authority(&pool.pubkey()).unwrap();

    let mint_x = Keypair::new();
    let mint_y = Keypair::new();
    let share_mint = Keypair::new();
    create_mint(env, &mint_x).await?;
    create_mint(env, &mint_y).await?;
    create_mint_with_authority(env, &share_mint, &authority, None).await?;

    let reserve_x = Keypair::new();
    let reserve_y = Keypair::new();
    let fee_account = Keypair::new();
    create_token_account(env, &reserve_x, &mint_x.pubkey(), &authority).await?;
    create_token_account(env, &reserve_y, &mint_y.pubkey(), &authority).await?;
    create_token_account(env, &fee_account, &share_mint.pubkey(), &fee_owner.pubkey()).await?;

    let addresses = client
        .pool_addresses(
            pool.pubkey(),
            reserve_x.pubkey(),
            reserve_y.pubkey(),
            share_mint.pubkey(),
            fee_account.pubkey(),
        )
        .unwrap();

    Ok(PoolFixture {
        client,
        pool,
        mint_x,
        mint_y,
        share_mint,
        reserve_x,
        reserve_y,
        fee_owner,
        fee_account,
        fees,
        addresses,
    })
}

/// Send `BindReserves` for arbitrary addresses, signed by the payer as creator.
pub async fn bind_reserves_with(
    env: &mut TestEnvironment,
    addresses: &PoolAddresses,
    initial_share_destination: Option<&Pubkey>,
) -> TestResult {
    let client = PoolClient::new(PROGRAM_ID);
    let instruction = client
        .bind_reserves(&env.payer.pubkey(), addresses, initial_share_destination)
        .unwrap();
    send_transaction(env, &[instruction], &[]).await
}

/// Bind the fixture's own satellites.
pub async fn bind_reserves(
    env: &mut TestEnvironment,
    fixture: &PoolFixture,
    initial_share_destination: Option<&Pubkey>,
) -> TestResult {
    bind_reserves_with(env, &fixture.addresses, initial_share_destination).await
}

/// Active pool with empty reserves and no shares outstanding.
pub async fn create_active_pool(env: &mut TestEnvironment, fees: Fees) -> Result<PoolFixture, BanksClientError> {
    let fixture = setup_unbound_pool(env, fees).await?;
    bind_reserves(env, &fixture, None).await?;
    Ok(fixture)
}

/// Fetch and decode the pool state
pub async fn get_pool_state(env: &mut TestEnvironment, pool: &Pubkey) -> Option<PoolState> {
    let account = env.banks_client.get_account(*pool).await.ok()??;
    PoolState::unpack_unchecked(&account.data).ok()
}
