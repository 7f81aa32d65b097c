use anchor_lang::prelude::*;

use crate::constants::*;
use crate::errors::TurnstileError;
use crate::events::TokenMinted;
use crate::instructions::token_mint::collect_payment;
use crate::state::{CollectionConfig, TokenRecord};

#[derive(Accounts)]
#[instruction(token_id: u64)]
pub struct SelfMint<'info> {
    /// Buyer; pays the mint price and becomes the token owner.
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

/// Self-directed mint at the open price.
pub fn self_mint(ctx: Context<SelfMint>, token_id: u64, paid_lamports: u64) -> Result<()> {
    let collection = &mut ctx.accounts.collection;

    require!(
        paid_lamports == MINT_PRICE_LAMPORTS,
        TurnstileError::WrongPayment
    );
    require!(
        collection.token_id_in_range(token_id),
        TurnstileError::TokenIdOutOfRange
    );

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
        ctx.accounts.payer.key(),
        clock.unix_timestamp,
        ctx.bumps.token,
    );
    collection.record_mint()?;

    emit!(TokenMinted {
        collection: collection.key(),
        token_id,
        owner: token.owner,
        price_paid: paid_lamports,
    });

    Ok(())
}
