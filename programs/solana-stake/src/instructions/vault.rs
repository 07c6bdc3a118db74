use anchor_lang::prelude::*;
use anchor_spl::token::{Mint, Token, TokenAccount};
use crate::constants::*;
use crate::error::StakeError;
use crate::events::VaultInitialized;

/// Creates the shared custody account for `mint`. Permissionless; the vault is
/// owned by a program authority so only `unstake` can move funds out of it.
pub fn initialize_vault(ctx: Context<InitializeVault>) -> Result<()> {
    emit!(VaultInitialized {
        mint: ctx.accounts.mint.key(),
        vault: ctx.accounts.vault.key(),
    });
    msg!("Vault initialized for mint {}", ctx.accounts.mint.key());

    Ok(())
}

#[derive(Accounts)]
pub struct InitializeVault<'info> {
    #[account(mut)]
    pub payer: Signer<'info>,

    #[account(constraint = mint.decimals == TOKEN_DECIMALS @ StakeError::UnsupportedMint)]
    pub mint: Account<'info, Mint>,

    /// CHECK: PDA used as the vault's token authority only; holds no data.
    #[account(
        seeds = [VAULT_AUTHORITY_SEED, mint.key().as_ref()],
        bump
    )]
    pub vault_authority: UncheckedAccount<'info>,

    #[account(
        init,
        payer = payer,
        seeds = [VAULT_SEED, mint.key().as_ref()],
        bump,
        token::mint = mint,
        token::authority = vault_authority,
    )]
    pub vault: Account<'info, TokenAccount>,

    pub token_program: Program<'info, Token>,
    pub system_program: Program<'info, System>,
}
