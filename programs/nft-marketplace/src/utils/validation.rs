use anchor_lang::prelude::*;
use crate::errors::MarketplaceError;
use crate::constants::*;

pub fn validate_fee_rate(fee_basis_points: u16) -> Result<()> {
    require!(
        fee_basis_points <= MAX_FEE_BASIS_POINTS,
        MarketplaceError::InvalidFeeRate
    );
    Ok(())
}

pub fn validate_price(price: u64) -> Result<()> {
    require!(price > 0, MarketplaceError::InvalidPrice);
    Ok(())
}

/// Only single-unit, zero-decimal mints can be listed.
pub fn validate_asset_mint(decimals: u8, supply: u64) -> Result<()> {
    require!(
        decimals == ASSET_DECIMALS && supply == ASSET_UNIT,
        MarketplaceError::InvalidAsset
    );
    Ok(())
}
