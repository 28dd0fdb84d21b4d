use anchor_lang::prelude::*;
use crate::errors::MarketplaceError;
use crate::state::{CustodySnapshot, Listing, MarketplaceConfig, TokenHolding};
use super::{split_price, FeeSplit};

/// Everything a purchase will move, computed before any transfer is issued.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct PurchasePlan {
    pub seller: Pubkey,
    pub fee_receiver: Pubkey,
    pub price: u64,
    pub split: FeeSplit,
}

impl PurchasePlan {
    pub fn prepare(
        listing: &Listing,
        marketplace: &MarketplaceConfig,
        custody: &CustodySnapshot,
        buyer_lamports: u64,
    ) -> Result<Self> {
        listing.ensure_purchasable()?;
        custody.ensure_holds(&listing.custody_account, &listing.asset_mint)?;
        require!(
            buyer_lamports >= listing.price,
            MarketplaceError::InsufficientFunds
        );

        let split = split_price(listing.price, marketplace.fee_basis_points)?;

        Ok(Self {
            seller: listing.seller,
            fee_receiver: marketplace.authority,
            price: listing.price,
            split,
        })
    }

    /// Loads the buy accounts. Listing state is checked before custody is
    /// read, since custody is closed once a cycle resolves.
    pub fn from_accounts(
        listing_info: &AccountInfo,
        custody_info: &AccountInfo,
        marketplace: &MarketplaceConfig,
        buyer_lamports: u64,
    ) -> Result<(Listing, Self)> {
        let listing = Listing::load(listing_info)?;
        listing.ensure_purchasable()?;
        let custody = CustodySnapshot::load(custody_info)?;
        let plan = Self::prepare(&listing, marketplace, &custody, buyer_lamports)?;
        Ok((listing, plan))
    }
}

/// Loads the cancel accounts, checking listing state and caller before custody.
pub fn prepare_cancel(
    listing_info: &AccountInfo,
    custody_info: &AccountInfo,
    caller: &Pubkey,
) -> Result<Listing> {
    let listing = Listing::load(listing_info)?;
    listing.ensure_cancellable_by(caller)?;
    let custody = CustodySnapshot::load(custody_info)?;
    custody.ensure_holds(&listing.custody_account, &listing.asset_mint)?;
    Ok(listing)
}

/// Checks a new listing cycle. An active listing is reported first: while it
/// is active the unit sits in custody, so no seller holding can contain it.
pub fn prepare_listing(
    listing: &Listing,
    holding: &TokenHolding,
    custody: &CustodySnapshot,
    seller: &Pubkey,
    asset_mint: &Pubkey,
) -> Result<()> {
    listing.ensure_openable()?;
    holding.ensure_owned_by(seller, asset_mint)?;
    // A populated escrow means a previous cycle never released the asset
    require!(custody.is_empty(), MarketplaceError::CustodyMismatch);
    Ok(())
}
