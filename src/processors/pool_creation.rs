//! Pool Creation Processors
//!
//! A pool comes to life in two instructions. `InitializePool` records the fee
//! schedule and the derived authority; the client then creates the reserve
//! accounts and share mint under that authority, and `BindReserves` checks
//! them and opens the pool for trading.

use solana_program::{
    account_info::{next_account_info, AccountInfo},
    entrypoint::ProgramResult,
    msg,
    program::invoke,
    program_error::ProgramError,
    pubkey::Pubkey,
    system_instruction, system_program,
    sysvar::{rent::Rent, Sysvar},
};

use crate::{
    curve::{deposit_shares, CurveType, Fees},
    debug_msg,
    error::SwapError,
    state::{PoolState, PoolStatus},
    utils::{
        authority::{authority_signer_seeds, find_pool_authority, validate_pool_authority},
        serialization::serialize_to_account,
        token::{mint_tokens_signed, unpack_mint, unpack_token_account},
        validation::{
            validate_address, validate_mint_authority, validate_reserve_owner, validate_signer,
            validate_system_program, validate_token_program, validate_user_token_account,
        },
    },
};

/// Processes pool initialization.
///
/// # Account Order:
/// 0. **Creator** (signer, writable) - Pays for the pool account
/// 1. **Pool State** (signer, writable) - System-owned and unfunded, or
///    pre-created, program-owned and zeroed. Signs in both cases
/// 2. **Pool Authority** (readable) - Derived from the pool state address
/// 3. **System Program** (readable)
///
/// # Arguments
/// * `program_id` - This program's id
/// * `fee_owner` - Required token owner of the fee account bound later
/// * `fees` - Fee schedule, immutable once recorded
/// * `curve_type` - Pricing curve
/// * `accounts` - Accounts in the order above
///
/// # Returns
/// * `ProgramResult` - Success or error
pub fn process_initialize_pool(
    program_id: &Pubkey,
    fee_owner: Pubkey,
    fees: Fees,
    curve_type: CurveType,
    accounts: &[AccountInfo],
) -> ProgramResult {
    msg!("🔄 Processing InitializePool");
    let account_info_iter = &mut accounts.iter();
    let creator = next_account_info(account_info_iter)?;
    let pool = next_account_info(account_info_iter)?;
    let authority = next_account_info(account_info_iter)?;
    let system_program_account = next_account_info(account_info_iter)?;

    validate_signer(creator, "Creator")?;
    validate_system_program(system_program_account)?;
    fees.validate().map_err(|e| {
        msg!("❌ Rejected fee schedule: {:?}", fees);
        e
    })?;

    let (expected_authority, bump) = find_pool_authority(pool.key, program_id)?;
    validate_address(authority, &expected_authority, "Pool authority")?;

    validate_signer(pool, "Pool state account")?;

    let needs_creation = *pool.owner == system_program::id();
    if !needs_creation {
        if pool.owner != program_id {
            msg!("❌ Pool account {} is owned by {}", pool.key, pool.owner);
            return Err(SwapError::InvalidAccountOwner.into());
        }
        let data = pool.data.borrow();
        if data.iter().any(|byte| *byte != 0) {
            msg!("❌ Pool account {} already holds a pool", pool.key);
            return Err(SwapError::AlreadyInitialized.into());
        }
        if data.len() < PoolState::LEN {
            msg!("❌ Pool account too small. Need: {}, Have: {}", PoolState::LEN, data.len());
            return Err(ProgramError::AccountDataTooSmall);
        }
    }

    if needs_creation {
        let lamports = Rent::get()?.minimum_balance(PoolState::LEN);
        invoke(
            &system_instruction::create_account(
                creator.key,
                pool.key,
                lamports,
                PoolState::LEN as u64,
                program_id,
            ),
            &[creator.clone(), pool.clone(), system_program_account.clone()],
        )?;
        debug_msg!("created pool account {} with {} lamports", pool.key, lamports);
    }

    let pool_state = PoolState {
        status: PoolStatus::AwaitingReserves,
        creator: *creator.key,
        pool_authority: expected_authority,
        authority_bump: bump,
        fee_owner,
        fees,
        curve_type,
        ..PoolState::default()
    };
    serialize_to_account(&pool_state, pool)?;

    msg!("✅ Pool {} initialized", pool.key);
    msg!("   Authority: {} (bump {})", expected_authority, bump);
    msg!("   Fee owner: {}", fee_owner);
    Ok(())
}

/// Binds the satellite accounts and activates the pool.
///
/// # Account Order:
/// 0. **Creator** (signer)
/// 1. **Pool State** (writable)
/// 2. **Pool Authority** (readable)
/// 3. **Reserve X** (readable) - Token account owned by the authority
/// 4. **Reserve Y** (readable) - Token account owned by the authority
/// 5. **Share Mint** (writable) - Mint authority is the pool authority, zero supply
/// 6. **Fee Account** (readable) - Share token account owned by the fee owner
/// 7. **Token Program** (readable)
/// 8. **Initial Share Destination** (writable, optional) - Required when the
///    reserves are pre-funded
///
/// # Arguments
/// * `program_id` - This program's id
/// * `bump` - Authority bump the client derived; must match the stored one
/// * `accounts` - Accounts in the order above
///
/// # Returns
/// * `ProgramResult` - Success or error
pub fn process_bind_reserves(program_id: &Pubkey, bump: u8, accounts: &[AccountInfo]) -> ProgramResult {
    msg!("🔄 Processing BindReserves");
    let account_info_iter = &mut accounts.iter();
    let creator = next_account_info(account_info_iter)?;
    let pool = next_account_info(account_info_iter)?;
    let authority = next_account_info(account_info_iter)?;
    let reserve_x = next_account_info(account_info_iter)?;
    let reserve_y = next_account_info(account_info_iter)?;
    let share_mint = next_account_info(account_info_iter)?;
    let fee_account = next_account_info(account_info_iter)?;
    let token_program = next_account_info(account_info_iter)?;
    let destination = account_info_iter.next();

    validate_signer(creator, "Creator")?;

    let mut pool_state = PoolState::load(pool, program_id)?;
    match pool_state.status {
        PoolStatus::AwaitingReserves => {}
        PoolStatus::Active => {
            msg!("❌ Pool {} already has reserves bound", pool.key);
            return Err(SwapError::AlreadyInitialized.into());
        }
        PoolStatus::Uninitialized => return Err(SwapError::NotFound.into()),
    }
    if *creator.key != pool_state.creator {
        msg!("❌ Only the pool creator may bind reserves");
        msg!("   Expected: {}", pool_state.creator);
        msg!("   Provided: {}", creator.key);
        return Err(SwapError::Unauthorized.into());
    }

    if bump != pool_state.authority_bump {
        msg!("❌ Bump mismatch. Stored: {}, Provided: {}", pool_state.authority_bump, bump);
        return Err(SwapError::AddressMismatch.into());
    }
    validate_pool_authority(authority.key, pool.key, bump, program_id)?;
    validate_token_program(token_program)?;

    let reserve_x_data = unpack_token_account(reserve_x, "Reserve X")?;
    let reserve_y_data = unpack_token_account(reserve_y, "Reserve Y")?;
    validate_reserve_owner(&reserve_x_data, authority.key, "Reserve X", SwapError::OwnershipMismatch)?;
    validate_reserve_owner(&reserve_y_data, authority.key, "Reserve Y", SwapError::OwnershipMismatch)?;
    if reserve_x_data.mint == reserve_y_data.mint {
        msg!("❌ Both reserves hold mint {}", reserve_x_data.mint);
        return Err(SwapError::RepeatedMint.into());
    }
    for (name, reserve) in [("Reserve X", &reserve_x_data), ("Reserve Y", &reserve_y_data)] {
        if reserve.delegate.is_some() || reserve.close_authority.is_some() {
            msg!("❌ {} has a delegate or close authority", name);
            return Err(SwapError::InvalidReserveAccount.into());
        }
    }

    let share_mint_data = unpack_mint(share_mint, "Share mint")?;
    validate_mint_authority(
        &share_mint_data.mint_authority,
        authority.key,
        "Share mint",
        SwapError::OwnershipMismatch,
    )?;
    if share_mint_data.supply != 0 {
        msg!("❌ Share mint already has supply {}", share_mint_data.supply);
        return Err(SwapError::InvalidShareMint.into());
    }
    if share_mint_data.freeze_authority.is_some() {
        msg!("❌ Share mint has a freeze authority");
        return Err(SwapError::InvalidShareMint.into());
    }
    if *share_mint.key == reserve_x_data.mint || *share_mint.key == reserve_y_data.mint {
        msg!("❌ Share mint {} doubles as a reserve mint", share_mint.key);
        return Err(SwapError::InvalidShareMint.into());
    }

    let fee_account_data = unpack_token_account(fee_account, "Fee account")?;
    if fee_account_data.mint != *share_mint.key {
        msg!("❌ Fee account holds mint {}, expected share mint {}", fee_account_data.mint, share_mint.key);
        return Err(SwapError::InvalidShareMint.into());
    }
    if fee_account_data.owner != pool_state.fee_owner {
        msg!("❌ Fee account owner mismatch");
        msg!("   Expected owner: {}", pool_state.fee_owner);
        msg!("   Actual owner: {}", fee_account_data.owner);
        return Err(SwapError::OwnershipMismatch.into());
    }

    // Pre-funded reserves fix the opening price; both sides or neither.
    let initial_shares = match (reserve_x_data.amount, reserve_y_data.amount) {
        (0, 0) => None,
        (x, y) if x == 0 || y == 0 => {
            msg!("❌ Only one reserve is funded: {} / {}", x, y);
            return Err(SwapError::UnbalancedDeposit.into());
        }
        (x, y) => {
            let destination = destination.ok_or_else(|| {
                msg!("❌ Reserves are funded but no initial share destination was supplied");
                ProgramError::NotEnoughAccountKeys
            })?;
            validate_user_token_account(destination, share_mint.key, "Initial share destination")?;
            Some((destination, deposit_shares(x, y, 0, 0, 0)?))
        }
    };

    pool_state.reserve_x = *reserve_x.key;
    pool_state.reserve_y = *reserve_y.key;
    pool_state.reserve_x_mint = reserve_x_data.mint;
    pool_state.reserve_y_mint = reserve_y_data.mint;
    pool_state.share_mint = *share_mint.key;
    pool_state.fee_account = *fee_account.key;
    pool_state.status = PoolStatus::Active;
    serialize_to_account(&pool_state, pool)?;

    if let Some((destination, shares)) = initial_shares {
        let bump_seed = [pool_state.authority_bump];
        let signer_seeds = authority_signer_seeds(pool.key, &bump_seed);
        mint_tokens_signed(share_mint, destination, authority, token_program, shares, &signer_seeds)?;
        msg!("   Minted {} initial shares to {}", shares, destination.key);
    }

    msg!("✅ Pool {} active", pool.key);
    msg!("   Reserve X: {} ({})", reserve_x.key, reserve_x_data.mint);
    msg!("   Reserve Y: {} ({})", reserve_y.key, reserve_y_data.mint);
    msg!("   Share mint: {}, fee account: {}", share_mint.key, fee_account.key);
    Ok(())
}
