use anchor_lang::prelude::*;

#[event]
pub struct CollectionCreated {
    pub collection: Pubkey,
    pub authority: Pubkey,
    pub name: String,
    pub symbol: String,
    pub presale_max_supply: u64,
    pub merkle_root: [u8; 32],
    pub royalty_receiver: Pubkey,
    pub royalty_fee_bps: u16,
}

#[event]
pub struct TokenMinted {
    pub collection: Pubkey,
    pub token_id: u64,
    pub owner: Pubkey,
    pub price_paid: u64,
}

#[event]
pub struct TicketConsumed {
    pub collection: Pubkey,
    pub ticket: u32,
    pub claimant: Pubkey,
}

#[event]
pub struct TokenTransferred {
    pub collection: Pubkey,
    pub token_id: u64,
    pub from: Pubkey,
    pub to: Pubkey,
}

#[event]
pub struct TokenApproved {
    pub collection: Pubkey,
    pub token_id: u64,
    pub delegate: Option<Pubkey>,
}

#[event]
pub struct RoyaltyOverrideSet {
    pub collection: Pubkey,
    pub token_id: u64,
    pub receiver: Pubkey,
    pub fee_bps: u16,
}
