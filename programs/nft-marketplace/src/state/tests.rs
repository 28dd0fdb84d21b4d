use crate::state::{Listing, ListingStatus, MarketplaceConfig, Resolution};
use anchor_lang::prelude::*;
use anchor_lang::Discriminator;

fn listing(seller: Pubkey, asset_mint: Pubkey) -> Listing {
    Listing {
        seller,
        asset_mint,
        custody_account: Pubkey::new_unique(),
        price: 500_000_000,
        is_active: true,
        bump: 254,
        custody_bump: 253,
        listed_at: 1_000,
        resolved_at: 0,
        cycle: 1,
        status: ListingStatus::Active,
    }
}

#[test]
fn test_marketplace_config_size() {
    // authority + fee_basis_points + bump + four u64 counters
    assert_eq!(MarketplaceConfig::INIT_SPACE, 32 + 2 + 1 + 8 * 4);
    assert_eq!(MarketplaceConfig::INIT_SPACE, 67);
}

#[test]
fn test_listing_size() {
    // Status reserves room for the largest variant: tag + resolution tag
    assert_eq!(ListingStatus::INIT_SPACE, 2);
    assert_eq!(Listing::INIT_SPACE, 32 * 3 + 8 + 1 + 1 + 1 + 8 + 8 + 8 + 2);
    assert_eq!(Listing::INIT_SPACE, 133);
}

#[test]
fn test_listing_offsets_are_stable() {
    let seller = Pubkey::new_unique();
    let asset_mint = Pubkey::new_unique();
    let record = listing(seller, asset_mint);

    let mut data = Vec::new();
    record.try_serialize(&mut data).unwrap();

    assert_eq!(&data[..8], &Listing::DISCRIMINATOR);
    assert_eq!(&data[Listing::SELLER_OFFSET..Listing::SELLER_OFFSET + 32], seller.as_ref());
    assert_eq!(
        &data[Listing::ASSET_MINT_OFFSET..Listing::ASSET_MINT_OFFSET + 32],
        asset_mint.as_ref()
    );
    assert_eq!(
        &data[Listing::CUSTODY_ACCOUNT_OFFSET..Listing::CUSTODY_ACCOUNT_OFFSET + 32],
        record.custody_account.as_ref()
    );
    assert_eq!(
        &data[Listing::PRICE_OFFSET..Listing::PRICE_OFFSET + 8],
        &500_000_000u64.to_le_bytes()
    );
    assert_eq!(data[Listing::IS_ACTIVE_OFFSET], 1);
}

#[test]
fn test_resolved_status_fits_allocation() {
    let mut record = listing(Pubkey::new_unique(), Pubkey::new_unique());
    record.status = ListingStatus::Resolved(Resolution::Cancelled);
    record.is_active = false;

    let mut data = Vec::new();
    record.try_serialize(&mut data).unwrap();

    assert_eq!(data.len(), 8 + Listing::INIT_SPACE);
    assert_eq!(data[Listing::IS_ACTIVE_OFFSET], 0);
}

#[test]
fn test_zeroed_record_is_unlisted() {
    let mut data = vec![0u8; 8 + Listing::INIT_SPACE];
    data[..8].copy_from_slice(&Listing::DISCRIMINATOR);

    let record = Listing::try_deserialize(&mut &data[..]).unwrap();
    assert_eq!(record.status, ListingStatus::Unlisted);
    assert!(!record.is_active);
    assert_eq!(record.cycle, 0);
}

#[test]
fn test_config_offsets_are_stable() {
    let authority = Pubkey::new_unique();
    let config = MarketplaceConfig {
        authority,
        fee_basis_points: 250,
        bump: 255,
        total_listings: 0,
        total_sales: 0,
        total_volume: 0,
        total_fees: 0,
    };

    let mut data = Vec::new();
    config.try_serialize(&mut data).unwrap();

    let offset = MarketplaceConfig::AUTHORITY_OFFSET;
    assert_eq!(&data[offset..offset + 32], authority.as_ref());
    let offset = MarketplaceConfig::FEE_BASIS_POINTS_OFFSET;
    assert_eq!(&data[offset..offset + 2], &250u16.to_le_bytes());
}
