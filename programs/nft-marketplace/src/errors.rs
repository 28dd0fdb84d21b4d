use anchor_lang::prelude::*;

#[error_code]
pub enum MarketplaceError {
    #[msg("Marketplace is already initialized")]
    AlreadyInitialized,

    #[msg("Fee rate must be between 0 and 10000 basis points")]
    InvalidFeeRate,

    #[msg("Price must be greater than zero")]
    InvalidPrice,

    #[msg("Asset already has an active listing")]
    ListingAlreadyActive,

    #[msg("Listing not found")]
    ListingNotFound,

    #[msg("Listing is not active")]
    ListingNotActive,

    #[msg("Listing is inactive")]
    ListingInactive,

    #[msg("Unauthorized access")]
    Unauthorized,

    #[msg("Seller does not hold the asset")]
    AssetNotOwnedBySeller,

    #[msg("Insufficient funds")]
    InsufficientFunds,

    #[msg("Custody account does not hold the listed asset")]
    CustodyMismatch,

    #[msg("Asset is not a non-fungible token")]
    InvalidAsset,

    #[msg("Seller account does not match the listing")]
    SellerMismatch,

    #[msg("Fee receiver does not match the marketplace authority")]
    AuthorityMismatch,

    #[msg("Math overflow")]
    MathOverflow,
}
