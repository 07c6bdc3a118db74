use anchor_lang::prelude::*;
use anchor_spl::token::Mint;
use crate::constants::TOKEN_DECIMALS;
use crate::error::StakeError;
use crate::events::StakeAccountCreated;
use crate::state::StakeRecord;
use crate::store;
use crate::utils::current_time;

/// Opens the caller's stake record with zero balance and zero points.
/// The owner pays rent and the stake mint is pinned for the record's lifetime.
pub fn create_stake_account(ctx: Context<CreateStakeAccount>) -> Result<()> {
    let owner = ctx.accounts.owner.key();
    let (address, bump) = StakeRecord::derive_address(&owner)?;
    require_keys_eq!(
        ctx.accounts.stake_account.key(),
        address,
        StakeError::Unauthorized
    );

    let now = current_time()?;
    let record = StakeRecord::new(owner, ctx.accounts.mint.key(), bump, now);

    store::create(
        &ctx.accounts.stake_account.to_account_info(),
        &ctx.accounts.owner.to_account_info(),
        &ctx.accounts.system_program.to_account_info(),
        &record,
    )?;

    emit!(StakeAccountCreated {
        owner,
        stake_account: address,
        mint: record.mint,
        timestamp: now,
    });
    msg!("Stake account {} created for {}", address, owner);

    Ok(())
}

#[derive(Accounts)]
pub struct CreateStakeAccount<'info> {
    #[account(mut)]
    pub owner: Signer<'info>,

    /// CHECK: must equal the owner's derived address; allocated by `store::create`.
    #[account(mut)]
    pub stake_account: UncheckedAccount<'info>,

    #[account(constraint = mint.decimals == TOKEN_DECIMALS @ StakeError::UnsupportedMint)]
    pub mint: Account<'info, Mint>,

    pub system_program: Program<'info, System>,
}
