pub mod collection_create;
pub mod interface_query;
pub mod royalty_quote;
pub mod royalty_set;
pub mod token_approve;
pub mod token_mint;
pub mod token_mint_presale;
pub mod token_mint_self;
pub mod token_transfer;
pub mod token_uri;

pub use collection_create::*;
pub use interface_query::*;
pub use royalty_quote::*;
pub use royalty_set::*;
pub use token_approve::*;
pub use token_mint::*;
pub use token_mint_presale::*;
pub use token_mint_self::*;
pub use token_transfer::*;
pub use token_uri::*;
