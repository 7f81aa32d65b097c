use anchor_lang::prelude::*;

use crate::constants::TOKEN_SEED;
use crate::errors::TurnstileError;
use crate::events::TokenTransferred;
use crate::state::TokenRecord;

#[derive(Accounts)]
#[instruction(token_id: u64)]
pub struct TransferToken<'info> {
    pub authority: Signer<'info>,

    #[account(
        mut,
        seeds = [TOKEN_SEED, token.collection.as_ref(), &token_id.to_le_bytes()],
        bump = token.bump,
    )]
    pub token: Account<'info, TokenRecord>,
}

/// Reassign ownership. The per-token approval does not survive an
/// ownership change; the royalty override does.
pub fn transfer_token(
    ctx: Context<TransferToken>,
    _token_id: u64,
    new_owner: Pubkey,
) -> Result<()> {
    let token = &mut ctx.accounts.token;
    require!(
        token.is_authorized(&ctx.accounts.authority.key()),
        TurnstileError::Unauthorized
    );

    let from = token.owner;
    token.owner = new_owner;
    token.approved = None;

    emit!(TokenTransferred {
        collection: token.collection,
        token_id: token.token_id,
        from,
        to: new_owner,
    });

    Ok(())
}
