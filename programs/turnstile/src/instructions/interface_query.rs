use anchor_lang::prelude::*;

use crate::constants::CAPABILITIES;
use crate::state::CollectionConfig;

#[derive(Accounts)]
pub struct QueryInterface<'info> {
    pub collection: Account<'info, CollectionConfig>,
}

/// Capability query against the fixed advertised set.
pub fn supports_interface(
    _ctx: Context<QueryInterface>,
    interface_id: [u8; 4],
) -> Result<bool> {
    Ok(CAPABILITIES.contains(&interface_id))
}
