use anchor_lang::prelude::*;
use anchor_spl::token::{self, Mint, Token, TokenAccount, Transfer};
use crate::constants::*;
use crate::state::{CustodySnapshot, Listing, MarketplaceConfig, NewListing, TokenHolding};
use crate::utils::prepare_listing;
use crate::utils::validation::validate_asset_mint;

#[derive(Accounts)]
#[instruction(asset_id: Pubkey)]
pub struct CreateListing<'info> {
    #[account(mut)]
    pub seller: Signer<'info>,

    #[account(
        mut,
        seeds = [MARKETPLACE_SEED],
        bump = marketplace.bump,
    )]
    pub marketplace: Account<'info, MarketplaceConfig>,

    #[account(address = asset_id)]
    pub mint: Account<'info, Mint>,

    // Ownership is checked in the handler, after the active listing check
    #[account(mut)]
    pub seller_token_account: Account<'info, TokenAccount>,

    // Reused across cycles; the handler refuses to reopen an active one
    #[account(
        init_if_needed,
        payer = seller,
        seeds = [LISTING_SEED, asset_id.as_ref()],
        bump,
        space = 8 + Listing::INIT_SPACE,
    )]
    pub listing: Account<'info, Listing>,

    #[account(
        init_if_needed,
        payer = seller,
        seeds = [CUSTODY_SEED, asset_id.as_ref()],
        bump,
        token::mint = mint,
        token::authority = marketplace,
    )]
    pub custody: Account<'info, TokenAccount>,

    pub token_program: Program<'info, Token>,
    pub system_program: Program<'info, System>,
}

pub fn create_listing(
    ctx: Context<CreateListing>,
    asset_id: Pubkey,
    price: u64,
) -> Result<()> {
    let current_time = Clock::get()?.unix_timestamp;

    validate_asset_mint(ctx.accounts.mint.decimals, ctx.accounts.mint.supply)?;

    let custody = CustodySnapshot::of(ctx.accounts.custody.key(), &ctx.accounts.custody);
    let seller = ctx.accounts.seller.key();
    prepare_listing(
        &ctx.accounts.listing,
        &TokenHolding::of(&ctx.accounts.seller_token_account),
        &custody,
        &seller,
        &asset_id,
    )?;

    ctx.accounts.listing.open(
        NewListing {
            seller,
            asset_mint: asset_id,
            custody_account: custody.address,
            price,
            bump: ctx.bumps.listing,
            custody_bump: ctx.bumps.custody,
        },
        current_time,
    )?;

    // Move the asset into escrow
    token::transfer(
        CpiContext::new(
            ctx.accounts.token_program.to_account_info(),
            Transfer {
                from: ctx.accounts.seller_token_account.to_account_info(),
                to: ctx.accounts.custody.to_account_info(),
                authority: ctx.accounts.seller.to_account_info(),
            },
        ),
        ASSET_UNIT,
    )?;

    ctx.accounts.marketplace.record_listing()?;

    emit!(ListingCreated {
        seller,
        asset_id,
        custody_account: custody.address,
        price,
        cycle: ctx.accounts.listing.cycle,
        timestamp: current_time,
    });

    msg!("Listing created for asset {} at price {}", asset_id, price);

    Ok(())
}

#[event]
pub struct ListingCreated {
    pub seller: Pubkey,
    pub asset_id: Pubkey,
    pub custody_account: Pubkey,
    pub price: u64,
    pub cycle: u64,
    pub timestamp: i64,
}
