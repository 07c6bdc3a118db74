use anchor_lang::prelude::*;
use anchor_spl::token::{self, Mint, Token, TokenAccount, Transfer};
use crate::constants::*;
use crate::error::StakeError;
use crate::events::Unstaked;
use crate::store;
use crate::utils::current_time;

/// --------------------------------------------
/// UNSTAKE TOKENS (partial or full)
/// --------------------------------------------
pub fn unstake_tokens(ctx: Context<UnstakeTokens>, amount: u64) -> Result<()> {
    let owner = ctx.accounts.owner.key();
    let record = store::get(&ctx.accounts.stake_account, &owner)?;
    require_keys_eq!(ctx.accounts.mint.key(), record.mint, StakeError::MintMismatch);

    let now = current_time()?;
    let next = record.unstaked(amount, now)?;

    let mint_key = ctx.accounts.mint.key();
    let bump = [ctx.bumps.vault_authority];
    let signer_seeds: &[&[&[u8]]] = &[&[VAULT_AUTHORITY_SEED, mint_key.as_ref(), &bump]];

    // Release tokens from vault -> owner
    let cpi_ctx = CpiContext::new_with_signer(
        ctx.accounts.token_program.to_account_info(),
        Transfer {
            from: ctx.accounts.vault.to_account_info(),
            to: ctx.accounts.owner_token.to_account_info(),
            authority: ctx.accounts.vault_authority.to_account_info(),
        },
        signer_seeds,
    );
    token::transfer(cpi_ctx, amount)?;

    store::put(&ctx.accounts.stake_account, &next)?;

    emit!(Unstaked {
        owner,
        amount,
        staked_amount: next.staked_amount,
        total_points: next.total_points,
        timestamp: next.last_updated_time,
    });
    msg!("Unstaked {} (remaining {})", amount, next.staked_amount);

    Ok(())
}

#[derive(Accounts)]
pub struct UnstakeTokens<'info> {
    #[account(mut)]
    pub owner: Signer<'info>,

    /// CHECK: address, ownership and owner field verified by `store::get`.
    #[account(mut)]
    pub stake_account: UncheckedAccount<'info>,

    pub mint: Account<'info, Mint>,

    /// Owner's token account (destination).
    #[account(
        mut,
        token::mint = mint,
        token::authority = owner,
    )]
    pub owner_token: Account<'info, TokenAccount>,

    /// CHECK: PDA authority for the vault.
    #[account(
        seeds = [VAULT_AUTHORITY_SEED, mint.key().as_ref()],
        bump
    )]
    pub vault_authority: UncheckedAccount<'info>,

    #[account(
        mut,
        seeds = [VAULT_SEED, mint.key().as_ref()],
        bump,
        token::authority = vault_authority,
    )]
    pub vault: Account<'info, TokenAccount>,

    pub token_program: Program<'info, Token>,
}
