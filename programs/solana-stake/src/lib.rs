use anchor_lang::prelude::*;

declare_id!("4DSyXGut8W6SqDzyYgssesk5d7599didy65vqyvmprbP");

pub mod constants;
pub mod error;
pub mod events;
pub mod instructions;
pub mod state;
pub mod store;
pub mod utils;

pub use instructions::*;

#[program]
pub mod solana_stake {
    use super::*;

    /// Creates the shared token vault for a stake mint.
    pub fn initialize_vault(ctx: Context<InitializeVault>) -> Result<()> {
        instructions::initialize_vault(ctx)
    }

    /// Opens the signer's stake record. Fails if one already exists.
    pub fn create_stake_account(ctx: Context<CreateStakeAccount>) -> Result<()> {
        instructions::create_stake_account(ctx)
    }

    pub fn stake(ctx: Context<StakeTokens>, amount: u64) -> Result<()> {
        instructions::stake_tokens(ctx, amount)
    }

    pub fn unstake(ctx: Context<UnstakeTokens>, amount: u64) -> Result<()> {
        instructions::unstake_tokens(ctx, amount)
    }

    /// Checkpoints accrued points and returns the unclaimed total.
    pub fn get_points(ctx: Context<PointsAccess>) -> Result<u64> {
        instructions::get_points(ctx)
    }

    pub fn claim_points(ctx: Context<PointsAccess>) -> Result<()> {
        instructions::claim_points(ctx)
    }
}
