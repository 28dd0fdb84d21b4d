use anchor_lang::prelude::*;
use crate::constants::MARKETPLACE_SEED;
use crate::state::MarketplaceConfig;

#[derive(Accounts)]
pub struct InitializeMarketplace<'info> {
    #[account(mut)]
    pub authority: Signer<'info>,

    // init_if_needed so a repeat call reaches the handler and fails with
    // AlreadyInitialized instead of a system program error
    #[account(
        init_if_needed,
        payer = authority,
        seeds = [MARKETPLACE_SEED],
        bump,
        space = 8 + MarketplaceConfig::INIT_SPACE,
    )]
    pub marketplace: Account<'info, MarketplaceConfig>,

    pub system_program: Program<'info, System>,
}

pub fn initialize_marketplace(
    ctx: Context<InitializeMarketplace>,
    fee_basis_points: u16,
) -> Result<()> {
    let authority = ctx.accounts.authority.key();
    let marketplace = &mut ctx.accounts.marketplace;
    marketplace.initialize(authority, fee_basis_points, ctx.bumps.marketplace)?;

    emit!(MarketplaceInitialized {
        authority,
        fee_basis_points,
        timestamp: Clock::get()?.unix_timestamp,
    });

    msg!("Marketplace initialized with fee: {}bps", fee_basis_points);

    Ok(())
}

#[event]
pub struct MarketplaceInitialized {
    pub authority: Pubkey,
    pub fee_basis_points: u16,
    pub timestamp: i64,
}
