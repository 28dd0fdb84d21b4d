use anchor_lang::prelude::*;
use anchor_spl::associated_token::AssociatedToken;
use anchor_spl::token::{self, CloseAccount, Mint, Token, TokenAccount, Transfer};
use crate::constants::*;
use crate::state::MarketplaceConfig;
use crate::utils::prepare_cancel;

#[derive(Accounts)]
#[instruction(asset_id: Pubkey)]
pub struct CancelListing<'info> {
    #[account(mut)]
    pub seller: Signer<'info>,

    #[account(
        seeds = [MARKETPLACE_SEED],
        bump = marketplace.bump,
    )]
    pub marketplace: Account<'info, MarketplaceConfig>,

    #[account(address = asset_id)]
    pub mint: Account<'info, Mint>,

    /// CHECK: Address checked by seeds, contents loaded in the handler
    #[account(
        mut,
        seeds = [LISTING_SEED, asset_id.as_ref()],
        bump,
    )]
    pub listing: UncheckedAccount<'info>,

    /// CHECK: Address checked by seeds, contents loaded in the handler
    #[account(
        mut,
        seeds = [CUSTODY_SEED, asset_id.as_ref()],
        bump,
    )]
    pub custody: UncheckedAccount<'info>,

    #[account(
        init_if_needed,
        payer = seller,
        associated_token::mint = mint,
        associated_token::authority = seller,
    )]
    pub seller_token_account: Account<'info, TokenAccount>,

    pub token_program: Program<'info, Token>,
    pub associated_token_program: Program<'info, AssociatedToken>,
    pub system_program: Program<'info, System>,
}

pub fn cancel_listing(ctx: Context<CancelListing>, asset_id: Pubkey) -> Result<()> {
    let current_time = Clock::get()?.unix_timestamp;
    let seller = ctx.accounts.seller.key();

    let listing_info = ctx.accounts.listing.to_account_info();
    let mut listing = prepare_cancel(
        &listing_info,
        &ctx.accounts.custody.to_account_info(),
        &seller,
    )?;

    let bump = ctx.accounts.marketplace.bump;
    let signer_seeds: &[&[&[u8]]] = &[&[MARKETPLACE_SEED, &[bump]]];

    // Return the asset to the seller
    token::transfer(
        CpiContext::new_with_signer(
            ctx.accounts.token_program.to_account_info(),
            Transfer {
                from: ctx.accounts.custody.to_account_info(),
                to: ctx.accounts.seller_token_account.to_account_info(),
                authority: ctx.accounts.marketplace.to_account_info(),
            },
            signer_seeds,
        ),
        ASSET_UNIT,
    )?;

    token::close_account(CpiContext::new_with_signer(
        ctx.accounts.token_program.to_account_info(),
        CloseAccount {
            account: ctx.accounts.custody.to_account_info(),
            destination: ctx.accounts.seller.to_account_info(),
            authority: ctx.accounts.marketplace.to_account_info(),
        },
        signer_seeds,
    ))?;

    listing.cancel(&seller, current_time)?;
    listing.store(&listing_info)?;

    emit!(ListingCancelled {
        seller,
        asset_id,
        timestamp: current_time,
    });

    msg!("Listing cancelled for asset {}", asset_id);

    Ok(())
}

#[event]
pub struct ListingCancelled {
    pub seller: Pubkey,
    pub asset_id: Pubkey,
    pub timestamp: i64,
}
