use anchor_lang::prelude::*;

#[event]
pub struct VaultInitialized {
    pub mint: Pubkey,
    pub vault: Pubkey,
}

#[event]
pub struct StakeAccountCreated {
    pub owner: Pubkey,
    pub stake_account: Pubkey,
    pub mint: Pubkey,
    pub timestamp: u64,
}

#[event]
pub struct Staked {
    pub owner: Pubkey,
    pub amount: u64,
    pub staked_amount: u64,
    pub total_points: u64,
    pub timestamp: u64,
}

#[event]
pub struct Unstaked {
    pub owner: Pubkey,
    pub amount: u64,
    pub staked_amount: u64,
    pub total_points: u64,
    pub timestamp: u64,
}

#[event]
pub struct PointsCheckpointed {
    pub owner: Pubkey,
    pub total_points: u64,
    pub timestamp: u64,
}

/// Payout record for claimed points; settlement happens off-chain.
#[event]
pub struct PointsClaimed {
    pub owner: Pubkey,
    pub points: u64,
    pub timestamp: u64,
}
