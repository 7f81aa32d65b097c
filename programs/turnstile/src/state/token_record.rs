use anchor_lang::prelude::*;

use crate::constants::ROYALTY_DENOMINATOR;
use crate::state::CollectionConfig;

/// Resale royalty terms, parts-per-10000 of the sale price.
#[derive(AnchorSerialize, AnchorDeserialize, InitSpace, Clone, Copy, Debug, PartialEq, Eq)]
pub struct RoyaltyInfo {
    pub receiver: Pubkey,
    pub fee_bps: u16,
}

impl RoyaltyInfo {
    /// Truncating share of `sale_price`; the 128-bit intermediate keeps
    /// the product from overflowing.
    pub fn amount_for(&self, sale_price: u64) -> u64 {
        (sale_price as u128 * self.fee_bps as u128 / ROYALTY_DENOMINATOR as u128) as u64
    }
}

/// One issued token.
///
/// The account lives at the PDA `[TOKEN_SEED, collection, token_id]`,
/// so the runtime refuses a second mint of the same id no matter which
/// mint path asks for it.
#[account]
#[derive(InitSpace)]
pub struct TokenRecord {
    pub collection: Pubkey,
    pub token_id: u64,
    pub owner: Pubkey,
    /// Delegate allowed to act for the owner on this token.
    pub approved: Option<Pubkey>,
    /// Royalty override; the collection default applies while `None`.
    pub royalty_override: Option<RoyaltyInfo>,
    pub minted_at: i64,
    pub bump: u8,
}

impl TokenRecord {
    pub fn issue(
        &mut self,
        collection: Pubkey,
        token_id: u64,
        owner: Pubkey,
        now: i64,
        bump: u8,
    ) {
        self.collection = collection;
        self.token_id = token_id;
        self.owner = owner;
        self.approved = None;
        self.royalty_override = None;
        self.minted_at = now;
        self.bump = bump;
    }

    pub fn is_authorized(&self, key: &Pubkey) -> bool {
        self.owner == *key || self.approved == Some(*key)
    }

    /// Effective royalty terms for a sale: the per-token override if
    /// set, otherwise the collection default.
    pub fn royalty_for(&self, config: &CollectionConfig, sale_price: u64) -> (Pubkey, u64) {
        let terms = self.royalty_override.unwrap_or(RoyaltyInfo {
            receiver: config.royalty_receiver,
            fee_bps: config.royalty_fee_bps,
        });
        (terms.receiver, terms.amount_for(sale_price))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::TicketBitmap;

    fn pk(seed: u8) -> Pubkey {
        Pubkey::new_from_array([seed; 32])
    }

    fn config() -> CollectionConfig {
        CollectionConfig {
            authority: pk(1),
            name: "Backstage Pass".to_string(),
            symbol: "PASS".to_string(),
            presale_max_supply: 500,
            merkle_root: [0; 32],
            royalty_receiver: pk(2),
            royalty_fee_bps: 250,
            total_minted: 0,
            ticket_bitmap: TicketBitmap::new(),
            created_at: 1_700_000_000,
            bump: 255,
            treasury_bump: 254,
        }
    }

    fn token(owner: Pubkey) -> TokenRecord {
        let mut token = TokenRecord {
            collection: pk(3),
            token_id: 0,
            owner: Pubkey::default(),
            approved: None,
            royalty_override: None,
            minted_at: 0,
            bump: 0,
        };
        token.issue(pk(3), 7, owner, 1_700_000_000, 253);
        token
    }

    #[test]
    fn default_royalty_applies_until_overridden() {
        let config = config();
        let mut token = token(pk(4));

        assert_eq!(token.royalty_for(&config, 10_000), (pk(2), 250));

        token.royalty_override = Some(RoyaltyInfo {
            receiver: pk(5),
            fee_bps: 1_000,
        });
        assert_eq!(token.royalty_for(&config, 10_000), (pk(5), 1_000));
    }

    #[test]
    fn royalty_amount_truncates() {
        let terms = RoyaltyInfo {
            receiver: pk(2),
            fee_bps: 1,
        };
        assert_eq!(terms.amount_for(9_999), 0);
        assert_eq!(terms.amount_for(10_000), 1);
        assert_eq!(terms.amount_for(29_999), 2);
    }

    #[test]
    fn royalty_amount_has_no_overflow_at_the_extremes() {
        let full = RoyaltyInfo {
            receiver: pk(2),
            fee_bps: 10_000,
        };
        assert_eq!(full.amount_for(u64::MAX), u64::MAX);

        let zero = RoyaltyInfo {
            receiver: pk(2),
            fee_bps: 0,
        };
        assert_eq!(zero.amount_for(u64::MAX), 0);
    }

    #[test]
    fn owner_and_delegate_are_authorized() {
        let owner = pk(4);
        let delegate = pk(6);
        let mut token = token(owner);

        assert!(token.is_authorized(&owner));
        assert!(!token.is_authorized(&delegate));

        token.approved = Some(delegate);
        assert!(token.is_authorized(&delegate));
        assert!(!token.is_authorized(&pk(7)));
    }

    #[test]
    fn issue_resets_approval_and_override() {
        let mut token = token(pk(4));
        token.approved = Some(pk(6));
        token.royalty_override = Some(RoyaltyInfo {
            receiver: pk(5),
            fee_bps: 100,
        });

        token.issue(pk(3), 8, pk(9), 1_700_000_001, 252);
        assert_eq!(token.owner, pk(9));
        assert_eq!(token.approved, None);
        assert_eq!(token.royalty_override, None);
    }
}
