use anchor_lang::prelude::*;

pub mod admission;
pub mod constants;
pub mod errors;
pub mod events;
pub mod instructions;
pub mod merkle;
pub mod state;

use instructions::*;

declare_id!("EoQorz7ihhLNCH9NQitqcagBrKgNjZtiCHJv9kKoF9e1");

#[program]
pub mod turnstile {
    use super::*;

    /// Create a collection with its immutable presale configuration.
    pub fn create_collection(
        ctx: Context<CreateCollection>,
        name: String,
        symbol: String,
        presale_max_supply: u64,
        merkle_root: [u8; 32],
        royalty_receiver: Pubkey,
        royalty_fee_bps: u16,
    ) -> Result<()> {
        instructions::create_collection(
            ctx,
            name,
            symbol,
            presale_max_supply,
            merkle_root,
            royalty_receiver,
            royalty_fee_bps,
        )
    }

    /// Open mint: buy a token for any recipient at the full price.
    pub fn mint_to(ctx: Context<MintTo>, token_id: u64, paid_lamports: u64) -> Result<()> {
        instructions::mint_to(ctx, token_id, paid_lamports)
    }

    /// Self-directed mint at the full price.
    pub fn self_mint(ctx: Context<SelfMint>, token_id: u64, paid_lamports: u64) -> Result<()> {
        instructions::self_mint(ctx, token_id, paid_lamports)
    }

    /// Presale mint at the discount price, gated by an allowlist proof
    /// and a one-time ticket.
    pub fn presale_mint(
        ctx: Context<PresaleMint>,
        token_id: u64,
        ticket: u32,
        proof: Vec<[u8; 32]>,
        paid_lamports: u64,
    ) -> Result<()> {
        instructions::presale_mint(ctx, token_id, ticket, proof, paid_lamports)
    }

    /// Reassign token ownership. Owner or approved delegate only.
    pub fn transfer_token(
        ctx: Context<TransferToken>,
        token_id: u64,
        new_owner: Pubkey,
    ) -> Result<()> {
        instructions::transfer_token(ctx, token_id, new_owner)
    }

    /// Set or clear the token's approved delegate. Owner only.
    pub fn approve_token(
        ctx: Context<ApproveToken>,
        token_id: u64,
        delegate: Option<Pubkey>,
    ) -> Result<()> {
        instructions::approve_token(ctx, token_id, delegate)
    }

    /// Set the token's royalty override. Owner or approved delegate only.
    pub fn set_token_royalty(
        ctx: Context<SetTokenRoyalty>,
        token_id: u64,
        receiver: Pubkey,
        fee_bps: u16,
    ) -> Result<()> {
        instructions::set_token_royalty(ctx, token_id, receiver, fee_bps)
    }

    /// Royalty owed on a sale of the token at `sale_price`.
    pub fn royalty_of(
        ctx: Context<QuoteRoyalty>,
        token_id: u64,
        sale_price: u64,
    ) -> Result<RoyaltyQuote> {
        instructions::royalty_of(ctx, token_id, sale_price)
    }

    /// Capability query against the fixed advertised set.
    pub fn supports_interface(
        ctx: Context<QueryInterface>,
        interface_id: [u8; 4],
    ) -> Result<bool> {
        instructions::supports_interface(ctx, interface_id)
    }

    /// Metadata location for a minted token.
    pub fn token_uri(ctx: Context<QueryTokenUri>, token_id: u64) -> Result<String> {
        instructions::token_uri(ctx, token_id)
    }
}
