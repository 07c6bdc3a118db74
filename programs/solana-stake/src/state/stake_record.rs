use anchor_lang::prelude::*;
use crate::constants::*;
use crate::error::StakeError;
use crate::utils::{accrue_points, elapsed_seconds};

/// Per-owner staking ledger entry. PDA: seeds = ["stake", owner]
#[account]
#[derive(Default, Debug, PartialEq, Eq, InitSpace)]
pub struct StakeRecord {
    pub owner: Pubkey,          // Only signer allowed to mutate this record
    pub staked_amount: u64,     // Custodied stake, mint base units
    pub total_points: u64,      // Unclaimed points, fixed-point x10^6
    pub last_updated_time: u64, // Unix seconds of the last checkpoint
    pub mint: Pubkey,           // Stake mint pinned at creation
    pub bump: u8,
}

impl StakeRecord {
    pub const SPACE: usize = 8 + Self::INIT_SPACE;

    /// Address of `owner`'s record and its bump.
    pub fn derive_address(owner: &Pubkey) -> Result<(Pubkey, u8)> {
        require_keys_neq!(*owner, Pubkey::default(), StakeError::InvalidOwner);
        Ok(Pubkey::find_program_address(
            &[STAKE_SEED, owner.as_ref()],
            &crate::ID,
        ))
    }

    pub fn new(owner: Pubkey, mint: Pubkey, bump: u8, now: u64) -> Self {
        Self {
            owner,
            staked_amount: 0,
            total_points: 0,
            last_updated_time: now,
            mint,
            bump,
        }
    }

    pub fn authorize(&self, caller: &Pubkey) -> Result<()> {
        require!(self.owner == *caller, StakeError::Unauthorized);
        Ok(())
    }

    /// Folds the points earned since `last_updated_time` into `total_points`.
    pub fn checkpoint(&self, now: u64) -> Result<Self> {
        let elapsed = elapsed_seconds(self.last_updated_time, now);
        let total_points = accrue_points(self.staked_amount, elapsed, self.total_points)?;

        Ok(Self {
            total_points,
            last_updated_time: self.last_updated_time.max(now),
            ..self.clone()
        })
    }

    pub fn staked(&self, amount: u64, now: u64) -> Result<Self> {
        require!(amount > 0, StakeError::InvalidAmount);

        let mut next = self.checkpoint(now)?;
        next.staked_amount = next
            .staked_amount
            .checked_add(amount)
            .ok_or(StakeError::ArithmeticOverflow)?;
        Ok(next)
    }

    pub fn unstaked(&self, amount: u64, now: u64) -> Result<Self> {
        require!(amount > 0, StakeError::InvalidAmount);
        require!(amount <= self.staked_amount, StakeError::InsufficientStake);

        let mut next = self.checkpoint(now)?;
        next.staked_amount = next
            .staked_amount
            .checked_sub(amount)
            .ok_or(StakeError::InsufficientStake)?;
        Ok(next)
    }

    /// Returns the checkpointed record with points zeroed, and the points paid out.
    pub fn claimed(&self, now: u64) -> Result<(Self, u64)> {
        let mut next = self.checkpoint(now)?;
        let points = next.total_points;
        next.total_points = 0;
        Ok((next, points))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const T0: u64 = 1_700_000_000;

    fn record() -> StakeRecord {
        StakeRecord::new(Pubkey::new_unique(), Pubkey::new_unique(), 255, T0)
    }

    fn err(e: StakeError) -> Error {
        e.into()
    }

    #[test]
    fn new_record_is_empty() {
        let r = record();
        assert_eq!(r.staked_amount, 0);
        assert_eq!(r.total_points, 0);
        assert_eq!(r.last_updated_time, T0);
    }

    #[test]
    fn derivation_is_deterministic_and_per_owner() {
        let a = Pubkey::new_unique();
        let b = Pubkey::new_unique();
        let (addr_a, bump_a) = StakeRecord::derive_address(&a).unwrap();
        assert_eq!(StakeRecord::derive_address(&a).unwrap(), (addr_a, bump_a));
        assert_ne!(StakeRecord::derive_address(&b).unwrap().0, addr_a);
        assert_eq!(
            Pubkey::create_program_address(&[STAKE_SEED, a.as_ref(), &[bump_a]], &crate::ID)
                .unwrap(),
            addr_a
        );
    }

    #[test]
    fn default_identity_cannot_derive() {
        assert_eq!(
            StakeRecord::derive_address(&Pubkey::default()).unwrap_err(),
            err(StakeError::InvalidOwner)
        );
    }

    #[test]
    fn only_owner_is_authorized() {
        let r = record();
        assert!(r.authorize(&r.owner).is_ok());
        assert_eq!(
            r.authorize(&Pubkey::new_unique()).unwrap_err(),
            err(StakeError::Unauthorized)
        );
    }

    #[test]
    fn stake_then_points_after_two_seconds() {
        let r = record().staked(1_000_000_000, T0).unwrap();
        let r = r.checkpoint(T0 + 2).unwrap();
        assert_eq!(r.staked_amount, 1_000_000_000);
        assert_eq!(r.total_points, 2_000_000_000);
        assert_eq!(r.last_updated_time, T0 + 2);
    }

    #[test]
    fn stakes_add_up() {
        let r = record()
            .staked(1_000_000_000, T0)
            .unwrap()
            .staked(500_000_000, T0 + 10)
            .unwrap();
        assert_eq!(r.staked_amount, 1_500_000_000);
    }

    #[test]
    fn stake_then_unstake_restores_balance() {
        let before = record().staked(42, T0).unwrap();
        for amount in [1u64, 7, 1_000_000_000, 1_000_000_000_000_000] {
            let after = before
                .staked(amount, T0 + 5)
                .unwrap()
                .unstaked(amount, T0 + 9)
                .unwrap();
            assert_eq!(after.staked_amount, before.staked_amount);
        }
    }

    #[test]
    fn zero_amounts_are_rejected() {
        for r in [record(), record().staked(10, T0).unwrap()] {
            assert_eq!(r.staked(0, T0 + 1).unwrap_err(), err(StakeError::InvalidAmount));
            assert_eq!(r.unstaked(0, T0 + 1).unwrap_err(), err(StakeError::InvalidAmount));
        }
    }

    #[test]
    fn unstake_more_than_staked_fails() {
        let r = record().staked(500_000_000, T0).unwrap();
        let snapshot = r.clone();
        assert_eq!(
            r.unstaked(10_000_000_000, T0 + 100).unwrap_err(),
            err(StakeError::InsufficientStake)
        );
        assert_eq!(r, snapshot);
        assert_eq!(r.staked_amount, 500_000_000);
    }

    #[test]
    fn stake_overflow_fails() {
        let r = record().staked(u64::MAX, T0).unwrap();
        assert_eq!(r.staked(1, T0).unwrap_err(), err(StakeError::ArithmeticOverflow));
    }

    #[test]
    fn unstake_checkpoints_at_old_balance() {
        let r = record().staked(2_000_000_000, T0).unwrap();
        let r = r.unstaked(2_000_000_000, T0 + SECONDS_PER_DAY).unwrap();
        assert_eq!(r.staked_amount, 0);
        assert_eq!(r.total_points, 2_000_000_000 * SECONDS_PER_DAY);

        let later = r.checkpoint(T0 + 10 * SECONDS_PER_DAY).unwrap();
        assert_eq!(later.total_points, 2_000_000_000 * SECONDS_PER_DAY);
    }

    #[test]
    fn claim_resets_points() {
        let r = record().staked(1_000_000_000, T0).unwrap();
        let (r, paid) = r.claimed(T0 + SECONDS_PER_DAY).unwrap();
        assert_eq!(paid, 1_000_000_000 * SECONDS_PER_DAY);
        assert_eq!(r.total_points, 0);
        assert_eq!(r.staked_amount, 1_000_000_000);
        assert_eq!(r.last_updated_time, T0 + SECONDS_PER_DAY);

        let (again, paid) = r.claimed(T0 + SECONDS_PER_DAY).unwrap();
        assert_eq!(paid, 0);
        assert_eq!(again.total_points, 0);
    }

    #[test]
    fn checkpoint_never_moves_time_backwards() {
        let r = record().staked(1_000_000_000, T0).unwrap();
        let r = r.checkpoint(T0 - 50).unwrap();
        assert_eq!(r.last_updated_time, T0);
        assert_eq!(r.total_points, 0);
    }

    #[test]
    fn repeated_queries_accrue_like_one() {
        let start = record().staked(1_000_000_000, T0).unwrap();
        let mut polled = start.clone();
        for t in 1..=120 {
            polled = polled.checkpoint(T0 + t).unwrap();
        }
        assert_eq!(polled, start.checkpoint(T0 + 120).unwrap());
    }

    #[test]
    fn every_second_of_the_smallest_stake_counts() {
        let mut r = record().staked(1, T0).unwrap();
        for t in 1..=10 {
            let next = r.checkpoint(T0 + t).unwrap();
            assert!(next.total_points > r.total_points);
            r = next;
        }
        assert_eq!(r.total_points, 10);
    }

    #[test]
    fn owner_mismatch_carries_no_key_pair() {
        let r = record();
        let intruder = Pubkey::new_unique();
        match r.authorize(&intruder).unwrap_err() {
            Error::AnchorError(e) => assert!(e.compared_values.is_none()),
            other => panic!("unexpected error: {other:?}"),
        }
    }
}
