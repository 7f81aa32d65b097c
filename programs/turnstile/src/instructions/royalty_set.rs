use anchor_lang::prelude::*;

use crate::constants::{MAX_ROYALTY_FEE_BPS, TOKEN_SEED};
use crate::errors::TurnstileError;
use crate::events::RoyaltyOverrideSet;
use crate::state::{RoyaltyInfo, TokenRecord};

#[derive(Accounts)]
#[instruction(token_id: u64)]
pub struct SetTokenRoyalty<'info> {
    pub authority: Signer<'info>,

    #[account(
        mut,
        seeds = [TOKEN_SEED, token.collection.as_ref(), &token_id.to_le_bytes()],
        bump = token.bump,
    )]
    pub token: Account<'info, TokenRecord>,
}

/// Set the token's royalty override. Owner or approved delegate only.
pub fn set_token_royalty(
    ctx: Context<SetTokenRoyalty>,
    _token_id: u64,
    receiver: Pubkey,
    fee_bps: u16,
) -> Result<()> {
    require!(
        fee_bps <= MAX_ROYALTY_FEE_BPS,
        TurnstileError::RoyaltyFeeTooHigh
    );

    let token = &mut ctx.accounts.token;
    require!(
        token.is_authorized(&ctx.accounts.authority.key()),
        TurnstileError::Unauthorized
    );

    token.royalty_override = Some(RoyaltyInfo { receiver, fee_bps });

    emit!(RoyaltyOverrideSet {
        collection: token.collection,
        token_id: token.token_id,
        receiver,
        fee_bps,
    });

    Ok(())
}
