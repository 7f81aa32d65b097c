//! Presale admission control.
//!
//! Binds allowlist membership, one-time ticket consumption, exact
//! payment, and token-id validity into a single all-or-nothing check.

use anchor_lang::prelude::*;

use crate::constants::{DISCOUNT_PRICE_LAMPORTS, MAX_TICKETS};
use crate::errors::TurnstileError;
use crate::merkle;
use crate::state::TicketBitmap;

/// Admit one presale claim.
///
/// Availability is checked up front and the bit-clear happens only
/// after every other precondition has passed, so a rejected claim
/// leaves the bitmap untouched regardless of the host's rollback
/// behavior. The caller collects payment and creates the token record
/// in the same transaction; the runtime rolls the consumed bit back if
/// either of those fails.
pub fn admit_presale(
    merkle_root: &[u8; 32],
    bitmap: &mut TicketBitmap,
    presale_max_supply: u64,
    claimant: &Pubkey,
    ticket: u32,
    proof: &[[u8; 32]],
    token_id: u64,
    paid_lamports: u64,
) -> Result<()> {
    require!(
        merkle::verify(merkle_root, claimant, ticket, proof),
        TurnstileError::InvalidProof
    );
    require!(ticket < MAX_TICKETS, TurnstileError::TicketOutOfRange);
    require!(
        bitmap.is_available(ticket),
        TurnstileError::TicketAlreadyUsed
    );
    require!(
        paid_lamports == DISCOUNT_PRICE_LAMPORTS,
        TurnstileError::WrongPayment
    );
    require!(
        token_id >= 1 && token_id <= presale_max_supply,
        TurnstileError::TokenIdOutOfRange
    );
    bitmap.consume(ticket)
}
