use anchor_lang::prelude::*;

pub mod constants;
pub mod errors;
pub mod instructions;
pub mod state;
pub mod utils;

use instructions::*;

declare_id!("7ErJPmj6qL4cbmLHq3L7cHFKvfMiSimcNHRqNSpAq4ze");

#[program]
pub mod nft_marketplace {
    use super::*;

    pub fn initialize_marketplace(
        ctx: Context<InitializeMarketplace>,
        fee_basis_points: u16,
    ) -> Result<()> {
        instructions::initialize_marketplace::initialize_marketplace(ctx, fee_basis_points)
    }

    pub fn create_listing(
        ctx: Context<CreateListing>,
        asset_id: Pubkey,
        price: u64,
    ) -> Result<()> {
        instructions::create_listing::create_listing(ctx, asset_id, price)
    }

    pub fn buy(ctx: Context<Buy>, asset_id: Pubkey) -> Result<()> {
        instructions::buy::buy(ctx, asset_id)
    }

    pub fn cancel_listing(ctx: Context<CancelListing>, asset_id: Pubkey) -> Result<()> {
        instructions::cancel_listing::cancel_listing(ctx, asset_id)
    }
}
