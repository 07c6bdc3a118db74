use anchor_lang::prelude::*;
use anchor_spl::token::{self, Mint, Token, TokenAccount, Transfer};
use crate::constants::*;
use crate::error::StakeError;
use crate::events::Staked;
use crate::store;
use crate::utils::current_time;

/// --------------------------------------------
/// STAKE TOKENS
/// --------------------------------------------
pub fn stake_tokens(ctx: Context<StakeTokens>, amount: u64) -> Result<()> {
    let owner = ctx.accounts.owner.key();
    let record = store::get(&ctx.accounts.stake_account, &owner)?;
    require_keys_eq!(ctx.accounts.mint.key(), record.mint, StakeError::MintMismatch);

    let now = current_time()?;
    let next = record.staked(amount, now)?;

    require!(
        ctx.accounts.owner_token.amount >= amount,
        StakeError::InsufficientExternalFunds
    );

    // Transfer tokens from owner -> vault
    let cpi_ctx = CpiContext::new(
        ctx.accounts.token_program.to_account_info(),
        Transfer {
            from: ctx.accounts.owner_token.to_account_info(),
            to: ctx.accounts.vault.to_account_info(),
            authority: ctx.accounts.owner.to_account_info(),
        },
    );
    token::transfer(cpi_ctx, amount)?;

    store::put(&ctx.accounts.stake_account, &next)?;

    emit!(Staked {
        owner,
        amount,
        staked_amount: next.staked_amount,
        total_points: next.total_points,
        timestamp: next.last_updated_time,
    });
    msg!("Staked {} (total {})", amount, next.staked_amount);

    Ok(())
}

#[derive(Accounts)]
pub struct StakeTokens<'info> {
    #[account(mut)]
    pub owner: Signer<'info>,

    /// CHECK: address, ownership and owner field verified by `store::get`.
    #[account(mut)]
    pub stake_account: UncheckedAccount<'info>,

    pub mint: Account<'info, Mint>,

    /// Owner's token account (source of stake).
    #[account(
        mut,
        token::mint = mint,
        token::authority = owner,
    )]
    pub owner_token: Account<'info, TokenAccount>,

    #[account(
        mut,
        seeds = [VAULT_SEED, mint.key().as_ref()],
        bump
    )]
    pub vault: Account<'info, TokenAccount>,

    pub token_program: Program<'info, Token>,
}
