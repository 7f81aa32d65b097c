use static_assertions::const_assert;

pub const COLLECTION_SEED: &[u8] = b"collection";
pub const TOKEN_SEED: &[u8] = b"token";
pub const TREASURY_SEED: &[u8] = b"treasury";

/// Number of presale allowlist slots; ticket numbers live in `[0, MAX_TICKETS)`.
pub const MAX_TICKETS: u32 = 1000;

pub const WORD_BITS: u32 = 64;
pub const BITMAP_WORDS: usize = 16;

// The bitmap must cover the whole ticket domain.
const_assert!(BITMAP_WORDS as u32 * WORD_BITS >= MAX_TICKETS);

/// Open and self mint price, in lamports.
pub const MINT_PRICE_LAMPORTS: u64 = 1_000_000;
/// Presale mint price, in lamports.
pub const DISCOUNT_PRICE_LAMPORTS: u64 = 500_000;

const_assert!(DISCOUNT_PRICE_LAMPORTS < MINT_PRICE_LAMPORTS);

pub const ROYALTY_DENOMINATOR: u64 = 10_000;
pub const MAX_ROYALTY_FEE_BPS: u16 = 10_000;

pub const MAX_NAME_LEN: usize = 64;
pub const MAX_SYMBOL_LEN: usize = 16;

/// Token metadata is served from this base location plus the decimal token id.
pub const BASE_TOKEN_URI: &str = "https://meta.turnstile.run/token/";

/// Advertised capability tags, queryable via `supports_interface`.
pub const CAP_MINTING: [u8; 4] = *b"mint";
pub const CAP_METADATA: [u8; 4] = *b"meta";
pub const CAP_ROYALTIES: [u8; 4] = *b"rylt";
pub const CAP_INTROSPECTION: [u8; 4] = *b"caps";

pub const CAPABILITIES: [[u8; 4]; 4] = [
    CAP_MINTING,
    CAP_METADATA,
    CAP_ROYALTIES,
    CAP_INTROSPECTION,
];
