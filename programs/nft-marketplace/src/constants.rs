// Seeds
pub const MARKETPLACE_SEED: &[u8] = b"marketplace";
pub const LISTING_SEED: &[u8] = b"listing";
pub const CUSTODY_SEED: &[u8] = b"token_account";

// Financial constants
pub const BASIS_POINTS_DENOMINATOR: u64 = 10_000;
pub const MAX_FEE_BASIS_POINTS: u16 = 10_000;   // 100%

// A listed asset is a single unit of a zero-decimal mint
pub const ASSET_UNIT: u64 = 1;
pub const ASSET_DECIMALS: u8 = 0;
