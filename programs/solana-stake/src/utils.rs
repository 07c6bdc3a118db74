use anchor_lang::prelude::*;
use crate::constants::*;
use crate::error::StakeError;

/// Cluster time in unix seconds. Negative timestamps read as zero.
pub fn current_time() -> Result<u64> {
    let now = Clock::get()?.unix_timestamp;
    Ok(u64::try_from(now).unwrap_or_default())
}

/// Seconds between two checkpoints. A clock that moved backwards yields zero.
pub fn elapsed_seconds(last_updated_time: u64, now: u64) -> u64 {
    now.saturating_sub(last_updated_time)
}

/// points = last_points + staked_amount * elapsed_seconds * POINTS_PER_UNIT_SECOND
pub fn accrue_points(staked_amount: u64, elapsed_seconds: u64, last_points: u64) -> Result<u64> {
    let earned = u128::from(staked_amount)
        .checked_mul(u128::from(elapsed_seconds))
        .and_then(|v| v.checked_mul(u128::from(POINTS_PER_UNIT_SECOND)))
        .ok_or(StakeError::ArithmeticOverflow)?;
    let earned = u64::try_from(earned).map_err(|_| StakeError::ArithmeticOverflow)?;

    let points = last_points
        .checked_add(earned)
        .ok_or(StakeError::ArithmeticOverflow)?;
    Ok(points)
}
