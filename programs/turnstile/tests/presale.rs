//! Scenario tests for the presale pipeline and royalty lookup, driven
//! directly against the state types the on-chain instructions mutate.

use anchor_lang::prelude::Pubkey;

use turnstile::admission::admit_presale;
use turnstile::constants::{
    BASE_TOKEN_URI, CAPABILITIES, CAP_INTROSPECTION, CAP_ROYALTIES, DISCOUNT_PRICE_LAMPORTS,
    MINT_PRICE_LAMPORTS,
};
use turnstile::errors::TurnstileError;
use turnstile::merkle::{hash_pair, leaf_hash, verify};
use turnstile::state::{CollectionConfig, RoyaltyInfo, TicketBitmap, TokenRecord};

fn test_pubkey(seed: u8) -> Pubkey {
    Pubkey::new_from_array([seed; 32])
}

fn test_time() -> i64 {
    1_700_000_000
}

fn build_root(mut level: Vec<[u8; 32]>) -> [u8; 32] {
    while level.len() > 1 {
        level = level
            .chunks(2)
            .map(|pair| match pair {
                [a, b] => hash_pair(a, b),
                [a] => *a,
                _ => unreachable!(),
            })
            .collect();
    }
    level[0]
}

fn proof_for(leaves: &[[u8; 32]], mut index: usize) -> Vec<[u8; 32]> {
    let mut proof = Vec::new();
    let mut level = leaves.to_vec();
    while level.len() > 1 {
        let sibling = if index % 2 == 0 { index + 1 } else { index - 1 };
        if sibling < level.len() {
            proof.push(level[sibling]);
        }
        level = level
            .chunks(2)
            .map(|pair| match pair {
                [a, b] => hash_pair(a, b),
                [a] => *a,
                _ => unreachable!(),
            })
            .collect();
        index /= 2;
    }
    proof
}

fn collection(merkle_root: [u8; 32]) -> CollectionConfig {
    CollectionConfig {
        authority: test_pubkey(1),
        name: "Backstage Pass".to_string(),
        symbol: "PASS".to_string(),
        presale_max_supply: 500,
        merkle_root,
        royalty_receiver: test_pubkey(2),
        royalty_fee_bps: 250,
        total_minted: 0,
        ticket_bitmap: TicketBitmap::new(),
        created_at: test_time(),
        bump: 255,
        treasury_bump: 254,
    }
}

fn blank_token() -> TokenRecord {
    TokenRecord {
        collection: Pubkey::default(),
        token_id: 0,
        owner: Pubkey::default(),
        approved: None,
        royalty_override: None,
        minted_at: 0,
        bump: 0,
    }
}

#[test]
fn presale_claim_succeeds_once_then_rejects_the_same_ticket() {
    // Allowlist with ticket 42 assigned to the claimant.
    let claimant = test_pubkey(10);
    let entries = [
        (test_pubkey(11), 3u32),
        (claimant, 42),
        (test_pubkey(12), 700),
    ];
    let leaves: Vec<[u8; 32]> = entries.iter().map(|(c, t)| leaf_hash(c, *t)).collect();
    let root = build_root(leaves.clone());
    let proof = proof_for(&leaves, 1);

    let mut config = collection(root);
    assert!(verify(&root, &claimant, 42, &proof));

    // Valid proof, exact discount payment, fresh in-range token id.
    admit_presale(
        &root,
        &mut config.ticket_bitmap,
        config.presale_max_supply,
        &claimant,
        42,
        &proof,
        7,
        DISCOUNT_PRICE_LAMPORTS,
    )
    .unwrap();

    let mut token = blank_token();
    token.issue(test_pubkey(1), 7, claimant, test_time(), 253);
    config.record_mint().unwrap();

    assert!(!config.ticket_bitmap.is_available(42));
    assert_eq!(token.owner, claimant);
    assert_eq!(config.total_minted, 1);

    // The identical retry fails and nothing else changes.
    let err = admit_presale(
        &root,
        &mut config.ticket_bitmap,
        config.presale_max_supply,
        &claimant,
        42,
        &proof,
        8,
        DISCOUNT_PRICE_LAMPORTS,
    )
    .unwrap_err();
    assert_eq!(err, TurnstileError::TicketAlreadyUsed.into());
    assert_eq!(config.total_minted, 1);
}

#[test]
fn rejected_claims_leave_the_collection_untouched() {
    let claimant = test_pubkey(10);
    let leaves = vec![leaf_hash(&claimant, 42), leaf_hash(&test_pubkey(11), 3)];
    let root = build_root(leaves.clone());
    let proof = proof_for(&leaves, 0);

    let mut config = collection(root);
    let bitmap_before = config.ticket_bitmap.clone();

    // Not on the allowlist.
    let err = admit_presale(
        &root,
        &mut config.ticket_bitmap,
        config.presale_max_supply,
        &test_pubkey(99),
        42,
        &proof,
        7,
        DISCOUNT_PRICE_LAMPORTS,
    )
    .unwrap_err();
    assert_eq!(err, TurnstileError::InvalidProof.into());

    // On the allowlist but paying the open-mint price.
    let err = admit_presale(
        &root,
        &mut config.ticket_bitmap,
        config.presale_max_supply,
        &claimant,
        42,
        &proof,
        7,
        MINT_PRICE_LAMPORTS,
    )
    .unwrap_err();
    assert_eq!(err, TurnstileError::WrongPayment.into());

    // On the allowlist but aiming at an unmintable id.
    let err = admit_presale(
        &root,
        &mut config.ticket_bitmap,
        config.presale_max_supply,
        &claimant,
        42,
        &proof,
        501,
        DISCOUNT_PRICE_LAMPORTS,
    )
    .unwrap_err();
    assert_eq!(err, TurnstileError::TokenIdOutOfRange.into());

    assert_eq!(config.ticket_bitmap, bitmap_before);
    assert_eq!(config.total_minted, 0);
}

#[test]
fn distinct_tickets_admit_independently() {
    let entries: Vec<(Pubkey, u32)> = (0..5u32).map(|i| (test_pubkey(20 + i as u8), i * 7)).collect();
    let leaves: Vec<[u8; 32]> = entries.iter().map(|(c, t)| leaf_hash(c, *t)).collect();
    let root = build_root(leaves.clone());
    let mut config = collection(root);

    for (index, (member, ticket)) in entries.iter().enumerate() {
        admit_presale(
            &root,
            &mut config.ticket_bitmap,
            config.presale_max_supply,
            member,
            *ticket,
            &proof_for(&leaves, index),
            index as u64 + 1,
            DISCOUNT_PRICE_LAMPORTS,
        )
        .unwrap();
        config.record_mint().unwrap();
    }

    assert_eq!(config.total_minted, 5);
    for (_, ticket) in &entries {
        assert!(!config.ticket_bitmap.is_available(*ticket));
    }
}

#[test]
fn royalty_lookup_follows_default_then_override() {
    let config = collection([0; 32]);
    let mut token = blank_token();
    token.issue(test_pubkey(1), 7, test_pubkey(10), test_time(), 253);

    // Collection default: 250 bps to the configured receiver.
    assert_eq!(
        token.royalty_for(&config, 1_000_000),
        (test_pubkey(2), 25_000)
    );

    // The owner's override replaces both receiver and rate.
    assert!(token.is_authorized(&test_pubkey(10)));
    token.royalty_override = Some(RoyaltyInfo {
        receiver: test_pubkey(30),
        fee_bps: 1_000,
    });
    assert_eq!(
        token.royalty_for(&config, 1_000_000),
        (test_pubkey(30), 100_000)
    );

    // A stranger is not allowed to write the override in the first place.
    assert!(!token.is_authorized(&test_pubkey(99)));
}

#[test]
fn capability_table_answers_membership() {
    assert!(CAPABILITIES.contains(&CAP_ROYALTIES));
    assert!(CAPABILITIES.contains(&CAP_INTROSPECTION));
    assert!(!CAPABILITIES.contains(&[0xde, 0xad, 0xbe, 0xef]));
}

#[test]
fn token_uri_is_base_plus_decimal_id() {
    let config = collection([0; 32]);
    assert_eq!(config.token_uri(7), format!("{BASE_TOKEN_URI}7"));
}
