use anchor_lang::prelude::*;

use crate::admission;
use crate::constants::*;
use crate::events::{TicketConsumed, TokenMinted};
use crate::instructions::token_mint::collect_payment;
use crate::state::{CollectionConfig, TokenRecord};

#[derive(Accounts)]
#[instruction(token_id: u64)]
pub struct PresaleMint<'info> {
    /// Claimant; must match the allowlisted address in the proof leaf.
    #[account(mut)]
    pub payer: Signer<'info>,

    /// CHECK: collection authority, only used to derive the config PDA
    pub collection_authority: UncheckedAccount<'info>,

    #[account(
        mut,
        seeds = [COLLECTION_SEED, collection_authority.key().as_ref()],
        bump = collection.bump,
    )]
    pub collection: Account<'info, CollectionConfig>,

    #[account(
        init,
        payer = payer,
        space = 8 + TokenRecord::INIT_SPACE,
        seeds = [TOKEN_SEED, collection.key().as_ref(), &token_id.to_le_bytes()],
        bump
    )]
    pub token: Account<'info, TokenRecord>,

    #[account(
        mut,
        seeds = [TREASURY_SEED, collection.key().as_ref()],
        bump = collection.treasury_bump,
    )]
    pub treasury: SystemAccount<'info>,

    pub system_program: Program<'info, System>,
}

/// Presale mint at the discount price, gated by an allowlist proof and
/// a one-time ticket.
///
/// Admission, payment, and token creation happen in one transaction;
/// any failure rolls all of them back, so a ticket is never burned
/// without a token being issued.
pub fn presale_mint(
    ctx: Context<PresaleMint>,
    token_id: u64,
    ticket: u32,
    proof: Vec<[u8; 32]>,
    paid_lamports: u64,
) -> Result<()> {
    let claimant = ctx.accounts.payer.key();
    let collection = &mut ctx.accounts.collection;

    let merkle_root = collection.merkle_root;
    let presale_max_supply = collection.presale_max_supply;
    admission::admit_presale(
        &merkle_root,
        &mut collection.ticket_bitmap,
        presale_max_supply,
        &claimant,
        ticket,
        &proof,
        token_id,
        paid_lamports,
    )?;

    collect_payment(
        &ctx.accounts.payer,
        &ctx.accounts.treasury,
        &ctx.accounts.system_program,
        paid_lamports,
    )?;

    let clock = Clock::get()?;
    let token = &mut ctx.accounts.token;
    token.issue(
        collection.key(),
        token_id,
        claimant,
        clock.unix_timestamp,
        ctx.bumps.token,
    );
    collection.record_mint()?;

    msg!("Presale ticket {} consumed by {}", ticket, claimant);

    emit!(TicketConsumed {
        collection: collection.key(),
        ticket,
        claimant,
    });
    emit!(TokenMinted {
        collection: collection.key(),
        token_id,
        owner: claimant,
        price_paid: paid_lamports,
    });

    Ok(())
}
