use anchor_lang::prelude::*;

use crate::constants::BASE_TOKEN_URI;
use crate::errors::TurnstileError;
use crate::state::TicketBitmap;

/// Per-collection configuration.
///
/// The presale bundle (`presale_max_supply`, `merkle_root`, and the
/// price constants) is fixed at creation; no instruction mutates it.
#[account]
#[derive(InitSpace)]
pub struct CollectionConfig {
    pub authority: Pubkey,
    #[max_len(64)]
    pub name: String,
    #[max_len(16)]
    pub symbol: String,
    /// Token ids are valid in `[1, presale_max_supply]`.
    pub presale_max_supply: u64,
    /// Committed allowlist root.
    pub merkle_root: [u8; 32],
    pub royalty_receiver: Pubkey,
    pub royalty_fee_bps: u16,
    pub total_minted: u64,
    pub ticket_bitmap: TicketBitmap,
    pub created_at: i64,
    pub bump: u8,
    pub treasury_bump: u8,
}

impl CollectionConfig {
    pub fn token_id_in_range(&self, token_id: u64) -> bool {
        token_id >= 1 && token_id <= self.presale_max_supply
    }

    /// Metadata location for a token: fixed base plus the decimal id.
    pub fn token_uri(&self, token_id: u64) -> String {
        format!("{}{}", BASE_TOKEN_URI, token_id)
    }

    pub fn record_mint(&mut self) -> Result<()> {
        self.total_minted = self
            .total_minted
            .checked_add(1)
            .ok_or(TurnstileError::MathOverflow)?;
        Ok(())
    }
}
