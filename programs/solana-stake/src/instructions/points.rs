use anchor_lang::prelude::*;
use crate::events::{PointsCheckpointed, PointsClaimed};
use crate::store;
use crate::utils::current_time;

/// Checkpoints accrual, persists it, and returns the unclaimed points.
pub fn get_points(ctx: Context<PointsAccess>) -> Result<u64> {
    let owner = ctx.accounts.owner.key();
    let record = store::get(&ctx.accounts.stake_account, &owner)?;

    let next = record.checkpoint(current_time()?)?;
    store::put(&ctx.accounts.stake_account, &next)?;

    emit!(PointsCheckpointed {
        owner,
        total_points: next.total_points,
        timestamp: next.last_updated_time,
    });
    msg!("Points: {}", next.total_points);

    Ok(next.total_points)
}

/// Checkpoints accrual and pays out every unclaimed point.
pub fn claim_points(ctx: Context<PointsAccess>) -> Result<()> {
    let owner = ctx.accounts.owner.key();
    let record = store::get(&ctx.accounts.stake_account, &owner)?;

    let (next, points) = record.claimed(current_time()?)?;
    store::put(&ctx.accounts.stake_account, &next)?;

    emit!(PointsClaimed {
        owner,
        points,
        timestamp: next.last_updated_time,
    });
    msg!("Claimed {} points", points);

    Ok(())
}

#[derive(Accounts)]
pub struct PointsAccess<'info> {
    pub owner: Signer<'info>,

    /// CHECK: address, ownership and owner field verified by `store::get`.
    #[account(mut)]
    pub stake_account: UncheckedAccount<'info>,
}
