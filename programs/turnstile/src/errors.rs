use anchor_lang::prelude::*;

#[error_code]
pub enum TurnstileError {
    #[msg("Payment does not match the required price exactly")]
    WrongPayment,

    #[msg("Token id is outside the mintable range")]
    TokenIdOutOfRange,

    #[msg("Merkle proof does not reconstruct the allowlist root")]
    InvalidProof,

    #[msg("Ticket number is outside the allowlist range")]
    TicketOutOfRange,

    #[msg("Ticket has already been consumed")]
    TicketAlreadyUsed,

    #[msg("Signer is not the token owner or its approved delegate")]
    Unauthorized,

    #[msg("Royalty fee exceeds the basis-point denominator")]
    RoyaltyFeeTooHigh,

    #[msg("Presale max supply must be greater than zero")]
    InvalidSupply,

    #[msg("Collection name cannot be empty")]
    NameEmpty,

    #[msg("Collection name exceeds maximum length")]
    NameTooLong,

    #[msg("Collection symbol cannot be empty")]
    SymbolEmpty,

    #[msg("Collection symbol exceeds maximum length")]
    SymbolTooLong,

    #[msg("Arithmetic overflow")]
    MathOverflow,
}
