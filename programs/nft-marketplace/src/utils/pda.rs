use anchor_lang::prelude::*;
use crate::constants::{CUSTODY_SEED, LISTING_SEED, MARKETPLACE_SEED};

/// Address of the marketplace configuration singleton.
pub fn marketplace_address() -> (Pubkey, u8) {
    Pubkey::find_program_address(&[MARKETPLACE_SEED], &crate::ID)
}

/// Address of the listing record for an asset.
pub fn listing_address(asset_mint: &Pubkey) -> (Pubkey, u8) {
    Pubkey::find_program_address(&[LISTING_SEED, asset_mint.as_ref()], &crate::ID)
}

/// Address of the escrow token account for an asset.
pub fn custody_address(asset_mint: &Pubkey) -> (Pubkey, u8) {
    Pubkey::find_program_address(&[CUSTODY_SEED, asset_mint.as_ref()], &crate::ID)
}
