use anchor_lang::prelude::*;

use crate::constants::TOKEN_SEED;
use crate::errors::TurnstileError;
use crate::events::TokenApproved;
use crate::state::TokenRecord;

#[derive(Accounts)]
#[instruction(token_id: u64)]
pub struct ApproveToken<'info> {
    pub authority: Signer<'info>,

    #[account(
        mut,
        seeds = [TOKEN_SEED, token.collection.as_ref(), &token_id.to_le_bytes()],
        bump = token.bump,
    )]
    pub token: Account<'info, TokenRecord>,
}

/// Set or clear the token's approved delegate. Owner only.
pub fn approve_token(
    ctx: Context<ApproveToken>,
    _token_id: u64,
    delegate: Option<Pubkey>,
) -> Result<()> {
    let token = &mut ctx.accounts.token;
    require_keys_eq!(
        token.owner,
        ctx.accounts.authority.key(),
        TurnstileError::Unauthorized
    );

    token.approved = delegate;

    emit!(TokenApproved {
        collection: token.collection,
        token_id: token.token_id,
        delegate,
    });

    Ok(())
}
