use anchor_lang::prelude::*;

use crate::constants::TOKEN_SEED;
use crate::state::{CollectionConfig, TokenRecord};

#[derive(Accounts)]
#[instruction(token_id: u64)]
pub struct QuoteRoyalty<'info> {
    pub collection: Account<'info, CollectionConfig>,

    #[account(
        seeds = [TOKEN_SEED, collection.key().as_ref(), &token_id.to_le_bytes()],
        bump = token.bump,
    )]
    pub token: Account<'info, TokenRecord>,
}

#[derive(AnchorSerialize, AnchorDeserialize, Clone, Debug, PartialEq, Eq)]
pub struct RoyaltyQuote {
    pub receiver: Pubkey,
    pub amount: u64,
}

/// Resolve the royalty owed on a sale of the token at `sale_price`.
pub fn royalty_of(
    ctx: Context<QuoteRoyalty>,
    _token_id: u64,
    sale_price: u64,
) -> Result<RoyaltyQuote> {
    let (receiver, amount) = ctx
        .accounts
        .token
        .royalty_for(&ctx.accounts.collection, sale_price);
    Ok(RoyaltyQuote { receiver, amount })
}
