use anchor_lang::prelude::*;

use crate::constants::{BITMAP_WORDS, MAX_TICKETS, WORD_BITS};
use crate::errors::TurnstileError;

/// Packed availability flags for the presale allowlist.
///
/// Bit `t % WORD_BITS` of word `t / WORD_BITS` represents ticket `t`.
/// Every bit starts set ("available") and is cleared at most once;
/// a cleared bit never comes back for the lifetime of the collection.
/// Bits past `MAX_TICKETS` are unreachable slack.
#[derive(AnchorSerialize, AnchorDeserialize, InitSpace, Clone, Debug, PartialEq, Eq)]
pub struct TicketBitmap {
    pub words: [u64; BITMAP_WORDS],
}

impl TicketBitmap {
    pub fn new() -> Self {
        Self {
            words: [u64::MAX; BITMAP_WORDS],
        }
    }

    pub fn is_available(&self, ticket: u32) -> bool {
        if ticket >= MAX_TICKETS {
            return false;
        }
        let word = (ticket / WORD_BITS) as usize;
        let offset = ticket % WORD_BITS;
        self.words[word] >> offset & 1 == 1
    }

    /// Clear the ticket's bit. The only mutator.
    pub fn consume(&mut self, ticket: u32) -> Result<()> {
        require!(ticket < MAX_TICKETS, TurnstileError::TicketOutOfRange);
        let word = (ticket / WORD_BITS) as usize;
        let mask = 1u64 << (ticket % WORD_BITS);
        require!(
            self.words[word] & mask != 0,
            TurnstileError::TicketAlreadyUsed
        );
        self.words[word] &= !mask;
        Ok(())
    }
}

impl Default for TicketBitmap {
    fn default() -> Self {
        Self::new()
    }
}
