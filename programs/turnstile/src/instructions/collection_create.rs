use anchor_lang::prelude::*;

use crate::constants::*;
use crate::errors::TurnstileError;
use crate::events::CollectionCreated;
use crate::state::{CollectionConfig, TicketBitmap};

#[derive(Accounts)]
pub struct CreateCollection<'info> {
    #[account(mut)]
    pub authority: Signer<'info>,

    #[account(
        init,
        payer = authority,
        space = 8 + CollectionConfig::INIT_SPACE,
        seeds = [COLLECTION_SEED, authority.key().as_ref()],
        bump
    )]
    pub collection: Account<'info, CollectionConfig>,

    /// Receives mint payments for the collection.
    #[account(
        seeds = [TREASURY_SEED, collection.key().as_ref()],
        bump
    )]
    pub treasury: SystemAccount<'info>,

    pub system_program: Program<'info, System>,
}

/// Create a collection with its immutable presale configuration.
///
/// The allowlist is committed as a single Merkle root produced offline;
/// nothing can change it, the supply bound, or the prices afterwards.
pub fn create_collection(
    ctx: Context<CreateCollection>,
    name: String,
    symbol: String,
    presale_max_supply: u64,
    merkle_root: [u8; 32],
    royalty_receiver: Pubkey,
    royalty_fee_bps: u16,
) -> Result<()> {
    require!(presale_max_supply > 0, TurnstileError::InvalidSupply);
    require!(!name.is_empty(), TurnstileError::NameEmpty);
    require!(name.len() <= MAX_NAME_LEN, TurnstileError::NameTooLong);
    require!(!symbol.is_empty(), TurnstileError::SymbolEmpty);
    require!(symbol.len() <= MAX_SYMBOL_LEN, TurnstileError::SymbolTooLong);
    require!(
        royalty_fee_bps <= MAX_ROYALTY_FEE_BPS,
        TurnstileError::RoyaltyFeeTooHigh
    );

    let clock = Clock::get()?;

    let collection = &mut ctx.accounts.collection;
    collection.authority = ctx.accounts.authority.key();
    collection.name = name.clone();
    collection.symbol = symbol.clone();
    collection.presale_max_supply = presale_max_supply;
    collection.merkle_root = merkle_root;
    collection.royalty_receiver = royalty_receiver;
    collection.royalty_fee_bps = royalty_fee_bps;
    collection.total_minted = 0;
    collection.ticket_bitmap = TicketBitmap::new();
    collection.created_at = clock.unix_timestamp;
    collection.bump = ctx.bumps.collection;
    collection.treasury_bump = ctx.bumps.treasury;

    emit!(CollectionCreated {
        collection: collection.key(),
        authority: collection.authority,
        name,
        symbol,
        presale_max_supply,
        merkle_root,
        royalty_receiver,
        royalty_fee_bps,
    });

    Ok(())
}
