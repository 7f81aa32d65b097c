//! Merkle membership verification for the presale allowlist.
//!
//! A leaf commits to one `(claimant, ticket)` pair and is hashed twice
//! so a leaf value can never be confused with an interior node.
//! Interior nodes hash their children smaller-value-first, so a proof
//! is just the sibling hashes bottom-up with no left/right markers.

use anchor_lang::prelude::*;
use anchor_lang::solana_program::keccak;

/// `keccak(keccak(claimant || ticket_le))`.
pub fn leaf_hash(claimant: &Pubkey, ticket: u32) -> [u8; 32] {
    let inner = keccak::hashv(&[claimant.as_ref(), &ticket.to_le_bytes()]);
    keccak::hashv(&[inner.as_ref()]).to_bytes()
}

/// Hash an unordered node pair, smaller value first.
pub fn hash_pair(a: &[u8; 32], b: &[u8; 32]) -> [u8; 32] {
    if a <= b {
        keccak::hashv(&[&a[..], &b[..]]).to_bytes()
    } else {
        keccak::hashv(&[&b[..], &a[..]]).to_bytes()
    }
}

/// True iff `(claimant, ticket)` is a leaf of the tree committed to by
/// `root`, as witnessed by `proof`. Pure; safe to call any number of
/// times with the same inputs.
pub fn verify(root: &[u8; 32], claimant: &Pubkey, ticket: u32, proof: &[[u8; 32]]) -> bool {
    let mut node = leaf_hash(claimant, ticket);
    for sibling in proof {
        node = hash_pair(&node, sibling);
    }
    node == *root
}
