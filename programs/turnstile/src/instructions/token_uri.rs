use anchor_lang::prelude::*;

use crate::constants::TOKEN_SEED;
use crate::state::{CollectionConfig, TokenRecord};

#[derive(Accounts)]
#[instruction(token_id: u64)]
pub struct QueryTokenUri<'info> {
    pub collection: Account<'info, CollectionConfig>,

    /// The token must exist for its metadata location to be defined.
    #[account(
        seeds = [TOKEN_SEED, collection.key().as_ref(), &token_id.to_le_bytes()],
        bump = token.bump,
    )]
    pub token: Account<'info, TokenRecord>,
}

pub fn token_uri(ctx: Context<QueryTokenUri>, token_id: u64) -> Result<String> {
    Ok(ctx.accounts.collection.token_uri(token_id))
}
