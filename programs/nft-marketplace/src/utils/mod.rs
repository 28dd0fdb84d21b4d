pub mod pda;
pub mod settlement;
pub mod validation;

pub use pda::*;
pub use settlement::*;

use anchor_lang::prelude::*;
use crate::constants::BASIS_POINTS_DENOMINATOR;
use crate::errors::MarketplaceError;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct FeeSplit {
    pub fee_amount: u64,
    pub seller_proceeds: u64,
}

/// Floor of `amount * fee_basis_points / 10_000`.
pub fn calculate_fee(amount: u64, fee_basis_points: u16) -> Result<u64> {
    let fee = (amount as u128)
        .checked_mul(fee_basis_points as u128)
        .ok_or(MarketplaceError::MathOverflow)?
        .checked_div(BASIS_POINTS_DENOMINATOR as u128)
        .ok_or(MarketplaceError::MathOverflow)?;
    u64::try_from(fee).map_err(|_| error!(MarketplaceError::MathOverflow))
}

/// Splits a sale price into platform fee and seller proceeds. The fee is
/// truncated, so any remainder stays with the seller. The rate is validated
/// once at initialization; a fee above the price is an overflow here.
pub fn split_price(price: u64, fee_basis_points: u16) -> Result<FeeSplit> {
    let fee_amount = calculate_fee(price, fee_basis_points)?;
    let seller_proceeds = price
        .checked_sub(fee_amount)
        .ok_or(MarketplaceError::MathOverflow)?;

    Ok(FeeSplit {
        fee_amount,
        seller_proceeds,
    })
}
