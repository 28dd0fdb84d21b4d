use anchor_lang::prelude::*;
use anchor_lang::system_program;
use anchor_spl::associated_token::AssociatedToken;
use anchor_spl::token::{self, CloseAccount, Mint, Token, TokenAccount, Transfer};
use crate::constants::*;
use crate::errors::MarketplaceError;
use crate::state::MarketplaceConfig;
use crate::utils::PurchasePlan;

#[derive(Accounts)]
#[instruction(asset_id: Pubkey)]
pub struct Buy<'info> {
    #[account(mut)]
    pub buyer: Signer<'info>,

    #[account(
        mut,
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
        payer = buyer,
        associated_token::mint = mint,
        associated_token::authority = buyer,
    )]
    pub buyer_token_account: Account<'info, TokenAccount>,

    /// CHECK: Must be the listing's seller, checked in the handler
    #[account(mut)]
    pub seller: UncheckedAccount<'info>,

    /// CHECK: Must be the marketplace authority, checked in the handler
    #[account(mut)]
    pub authority: UncheckedAccount<'info>,

    pub token_program: Program<'info, Token>,
    pub associated_token_program: Program<'info, AssociatedToken>,
    pub system_program: Program<'info, System>,
}

pub fn buy(ctx: Context<Buy>, asset_id: Pubkey) -> Result<()> {
    let current_time = Clock::get()?.unix_timestamp;

    // Validate everything before moving anything
    let listing_info = ctx.accounts.listing.to_account_info();
    let (mut listing, plan) = PurchasePlan::from_accounts(
        &listing_info,
        &ctx.accounts.custody.to_account_info(),
        &ctx.accounts.marketplace,
        ctx.accounts.buyer.lamports(),
    )?;
    require_keys_eq!(
        ctx.accounts.seller.key(),
        plan.seller,
        MarketplaceError::SellerMismatch
    );
    require_keys_eq!(
        ctx.accounts.authority.key(),
        plan.fee_receiver,
        MarketplaceError::AuthorityMismatch
    );

    // Transfer marketplace fee
    if plan.split.fee_amount > 0 {
        system_program::transfer(
            CpiContext::new(
                ctx.accounts.system_program.to_account_info(),
                system_program::Transfer {
                    from: ctx.accounts.buyer.to_account_info(),
                    to: ctx.accounts.authority.to_account_info(),
                },
            ),
            plan.split.fee_amount,
        )?;
    }

    // Transfer to seller
    if plan.split.seller_proceeds > 0 {
        system_program::transfer(
            CpiContext::new(
                ctx.accounts.system_program.to_account_info(),
                system_program::Transfer {
                    from: ctx.accounts.buyer.to_account_info(),
                    to: ctx.accounts.seller.to_account_info(),
                },
            ),
            plan.split.seller_proceeds,
        )?;
    }

    // Release the asset from escrow, then return the escrow rent to the seller
    let bump = ctx.accounts.marketplace.bump;
    let signer_seeds: &[&[&[u8]]] = &[&[MARKETPLACE_SEED, &[bump]]];

    token::transfer(
        CpiContext::new_with_signer(
            ctx.accounts.token_program.to_account_info(),
            Transfer {
                from: ctx.accounts.custody.to_account_info(),
                to: ctx.accounts.buyer_token_account.to_account_info(),
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

    // Mark listing as sold
    listing.settle(current_time)?;
    listing.store(&listing_info)?;

    ctx.accounts.marketplace.record_sale(plan.price, plan.split.fee_amount)?;

    emit!(ListingSold {
        buyer: ctx.accounts.buyer.key(),
        seller: plan.seller,
        asset_id,
        price: plan.price,
        marketplace_fee: plan.split.fee_amount,
        seller_proceeds: plan.split.seller_proceeds,
        timestamp: current_time,
    });

    msg!("Listing sold for {} lamports", plan.price);

    Ok(())
}

#[event]
pub struct ListingSold {
    pub buyer: Pubkey,
    pub seller: Pubkey,
    pub asset_id: Pubkey,
    pub price: u64,
    pub marketplace_fee: u64,
    pub seller_proceeds: u64,
    pub timestamp: i64,
}
