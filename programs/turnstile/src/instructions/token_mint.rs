use anchor_lang::prelude::*;
use anchor_lang::system_program::{self, Transfer};

use crate::constants::*;
use crate::errors::TurnstileError;
use crate::events::TokenMinted;
use crate::state::{CollectionConfig, TokenRecord};

#[derive(Accounts)]
#[instruction(token_id: u64)]
pub struct MintTo<'info> {
    /// Pays the mint price and the rent for the token record.
    #[account(mut)]
    pub payer: Signer<'info>,

    /// CHECK: any address may receive the token
    pub recipient: UncheckedAccount<'info>,

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

/// Open mint: anyone may buy any unissued token id for the recipient.
pub fn mint_to(ctx: Context<MintTo>, token_id: u64, paid_lamports: u64) -> Result<()> {
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
        ctx.accounts.recipient.key(),
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

/// Move the exact mint payment from the payer into the treasury.
pub(crate) fn collect_payment<'info>(
    payer: &Signer<'info>,
    treasury: &SystemAccount<'info>,
    system_program: &Program<'info, System>,
    lamports: u64,
) -> Result<()> {
    system_program::transfer(
        CpiContext::new(
            system_program.to_account_info(),
            Transfer {
                from: payer.to_account_info(),
                to: treasury.to_account_info(),
            },
        ),
        lamports,
    )
}
