//! Stake record persistence over raw account data.
//!
//! Records live at the PDA derived from their owner, so the account address is
//! the lookup key. Records are written with the Anchor discriminator and Borsh
//! layout and read back with the matching checks.

use anchor_lang::error::ErrorCode;
use anchor_lang::prelude::*;
use anchor_lang::solana_program::system_program::ID as SYSTEM_PROGRAM_ID;
use anchor_lang::system_program::{
    allocate, assign, create_account, transfer, Allocate, Assign, CreateAccount, Transfer,
};
use crate::constants::STAKE_SEED;
use crate::error::StakeError;
use crate::state::StakeRecord;

/// Fails with `AlreadyExists` unless `account` is an unallocated system account.
pub fn ensure_vacant(account: &AccountInfo) -> Result<()> {
    let vacant = account.owner == &SYSTEM_PROGRAM_ID && account.data_is_empty();
    require!(vacant, StakeError::AlreadyExists);
    Ok(())
}

/// Allocates `account` for the program and writes `record` into it.
///
/// `account` must be the record's derived address; the PDA seeds sign the
/// allocation. A pre-funded address is topped up to rent exemption instead of
/// being created.
pub fn create<'info>(
    account: &AccountInfo<'info>,
    payer: &AccountInfo<'info>,
    system_program: &AccountInfo<'info>,
    record: &StakeRecord,
) -> Result<()> {
    ensure_vacant(account)?;

    let owner = record.owner;
    let bump = [record.bump];
    let signer_seeds: &[&[&[u8]]] = &[&[STAKE_SEED, owner.as_ref(), &bump]];
    let space = StakeRecord::SPACE as u64;
    let rent = Rent::get()?.minimum_balance(StakeRecord::SPACE);
    let current_lamports = account.lamports();

    if current_lamports == 0 {
        create_account(
            CpiContext::new_with_signer(
                system_program.clone(),
                CreateAccount {
                    from: payer.clone(),
                    to: account.clone(),
                },
                signer_seeds,
            ),
            rent,
            space,
            &crate::ID,
        )?;
    } else {
        let top_up = rent.saturating_sub(current_lamports);
        if top_up > 0 {
            transfer(
                CpiContext::new(
                    system_program.clone(),
                    Transfer {
                        from: payer.clone(),
                        to: account.clone(),
                    },
                ),
                top_up,
            )?;
        }
        allocate(
            CpiContext::new_with_signer(
                system_program.clone(),
                Allocate {
                    account_to_allocate: account.clone(),
                },
                signer_seeds,
            ),
            space,
        )?;
        assign(
            CpiContext::new_with_signer(
                system_program.clone(),
                Assign {
                    account_to_assign: account.clone(),
                },
                signer_seeds,
            ),
            &crate::ID,
        )?;
    }

    put(account, record)
}

/// Loads the record at `account` on behalf of `caller`.
///
/// The address is checked against `caller`'s derivation before any data is
/// read, so a foreign record fails `Unauthorized` without being decoded.
pub fn get(account: &AccountInfo, caller: &Pubkey) -> Result<StakeRecord> {
    let (expected, _) = StakeRecord::derive_address(caller)?;
    require!(account.key() == expected, StakeError::Unauthorized);

    if account.owner != &crate::ID || account.data_is_empty() {
        return err!(StakeError::NotFound);
    }

    let data = account.try_borrow_data()?;
    let record = StakeRecord::try_deserialize(&mut &data[..])?;
    record.authorize(caller)?;

    Ok(record)
}

/// Overwrites the record at `account`.
///
/// The record is serialized in full before the account data is borrowed, so a
/// failure leaves the stored bytes untouched.
pub fn put(account: &AccountInfo, record: &StakeRecord) -> Result<()> {
    require_keys_eq!(*account.owner, crate::ID, StakeError::NotFound);

    let mut bytes = Vec::with_capacity(StakeRecord::SPACE);
    record.try_serialize(&mut bytes)?;

    let mut data = account.try_borrow_mut_data()?;
    if data.len() < bytes.len() {
        return Err(ErrorCode::AccountDidNotSerialize.into());
    }
    data[..bytes.len()].copy_from_slice(&bytes);

    Ok(())
}
