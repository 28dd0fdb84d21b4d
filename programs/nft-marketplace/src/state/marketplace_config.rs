use anchor_lang::prelude::*;
use crate::errors::MarketplaceError;
use crate::utils::validation::validate_fee_rate;

#[account]
#[derive(InitSpace)]
pub struct MarketplaceConfig {
    pub authority: Pubkey,          // 32 bytes - fee receiver, set once
    pub fee_basis_points: u16,      // 2 bytes
    pub bump: u8,                   // 1 byte
    pub total_listings: u64,        // 8 bytes
    pub total_sales: u64,           // 8 bytes
    pub total_volume: u64,          // 8 bytes - lamports
    pub total_fees: u64,            // 8 bytes - lamports
}

impl MarketplaceConfig {
    pub const AUTHORITY_OFFSET: usize = 8;
    pub const FEE_BASIS_POINTS_OFFSET: usize = 8 + 32;

    /// A freshly allocated config account is all zeroes, so a default
    /// authority means the handler has never run.
    pub fn is_initialized(&self) -> bool {
        self.authority != Pubkey::default()
    }

    pub fn initialize(&mut self, authority: Pubkey, fee_basis_points: u16, bump: u8) -> Result<()> {
        require!(!self.is_initialized(), MarketplaceError::AlreadyInitialized);
        validate_fee_rate(fee_basis_points)?;

        self.authority = authority;
        self.fee_basis_points = fee_basis_points;
        self.bump = bump;
        self.total_listings = 0;
        self.total_sales = 0;
        self.total_volume = 0;
        self.total_fees = 0;
        Ok(())
    }

    pub fn record_listing(&mut self) -> Result<()> {
        self.total_listings = self.total_listings
            .checked_add(1)
            .ok_or(MarketplaceError::MathOverflow)?;
        Ok(())
    }

    pub fn record_sale(&mut self, price: u64, fee_amount: u64) -> Result<()> {
        self.total_sales = self.total_sales
            .checked_add(1)
            .ok_or(MarketplaceError::MathOverflow)?;
        self.total_volume = self.total_volume
            .checked_add(price)
            .ok_or(MarketplaceError::MathOverflow)?;
        self.total_fees = self.total_fees
            .checked_add(fee_amount)
            .ok_or(MarketplaceError::MathOverflow)?;
        Ok(())
    }
}
