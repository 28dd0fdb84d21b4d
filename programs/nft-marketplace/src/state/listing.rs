use crate::errors::MarketplaceError;
use crate::utils::validation::validate_price;
use anchor_lang::prelude::*;
use anchor_lang::Discriminator;

/// How a listing cycle ended.
#[derive(AnchorSerialize, AnchorDeserialize, Clone, Copy, Debug, PartialEq, Eq, InitSpace)]
pub enum Resolution {
    Sold,
    Cancelled,
}

/// Lifecycle of a listing record. A freshly allocated record deserializes
/// as `Unlisted` because its status byte is zero.
#[derive(AnchorSerialize, AnchorDeserialize, Clone, Copy, Debug, PartialEq, Eq, InitSpace)]
pub enum ListingStatus {
    Unlisted,
    Active,
    Resolved(Resolution),
}

impl ListingStatus {
    pub fn is_active(&self) -> bool {
        matches!(self, ListingStatus::Active)
    }
}

#[account]
#[derive(InitSpace)]
pub struct Listing {
    pub seller: Pubkey,            // 32 bytes - may cancel
    pub asset_mint: Pubkey,        // 32 bytes - asset identifier
    pub custody_account: Pubkey,   // 32 bytes - escrow token account
    pub price: u64,                // 8 bytes - lamports
    pub is_active: bool,           // 1 byte - mirrors status for memcmp filters
    pub bump: u8,                  // 1 byte
    pub custody_bump: u8,          // 1 byte
    pub listed_at: i64,            // 8 bytes - Unix timestamp
    pub resolved_at: i64,          // 8 bytes - Unix timestamp, 0 while active
    pub cycle: u64,                // 8 bytes - listing cycles opened on this record
    pub status: ListingStatus,     // 1-2 bytes, kept last
}

/// Terms of a new listing cycle.
pub struct NewListing {
    pub seller: Pubkey,
    pub asset_mint: Pubkey,
    pub custody_account: Pubkey,
    pub price: u64,
    pub bump: u8,
    pub custody_bump: u8,
}

impl Listing {
    // Offsets include the 8 byte discriminator. Indexers filter on these.
    pub const SELLER_OFFSET: usize = 8;
    pub const ASSET_MINT_OFFSET: usize = 8 + 32;
    pub const CUSTODY_ACCOUNT_OFFSET: usize = 8 + 32 + 32;
    pub const PRICE_OFFSET: usize = 8 + 32 + 32 + 32;
    pub const IS_ACTIVE_OFFSET: usize = 8 + 32 + 32 + 32 + 8;

    /// Opens a new cycle. Allowed on a fresh record or on one whose previous
    /// cycle has resolved.
    pub fn open(&mut self, terms: NewListing, now: i64) -> Result<()> {
        self.ensure_openable()?;
        validate_price(terms.price)?;

        self.cycle = self.cycle
            .checked_add(1)
            .ok_or(MarketplaceError::MathOverflow)?;
        self.seller = terms.seller;
        self.asset_mint = terms.asset_mint;
        self.custody_account = terms.custody_account;
        self.price = terms.price;
        self.bump = terms.bump;
        self.custody_bump = terms.custody_bump;
        self.listed_at = now;
        self.resolved_at = 0;
        self.status = ListingStatus::Active;
        self.is_active = true;
        Ok(())
    }

    pub fn ensure_openable(&self) -> Result<()> {
        require!(!self.status.is_active(), MarketplaceError::ListingAlreadyActive);
        Ok(())
    }

    pub fn ensure_purchasable(&self) -> Result<()> {
        require!(self.status.is_active(), MarketplaceError::ListingInactive);
        Ok(())
    }

    pub fn ensure_cancellable_by(&self, caller: &Pubkey) -> Result<()> {
        require!(self.status.is_active(), MarketplaceError::ListingNotActive);
        require_keys_eq!(self.seller, *caller, MarketplaceError::Unauthorized);
        Ok(())
    }

    pub fn settle(&mut self, now: i64) -> Result<()> {
        self.ensure_purchasable()?;
        self.resolve(Resolution::Sold, now);
        Ok(())
    }

    pub fn cancel(&mut self, caller: &Pubkey, now: i64) -> Result<()> {
        self.ensure_cancellable_by(caller)?;
        self.resolve(Resolution::Cancelled, now);
        Ok(())
    }

    fn resolve(&mut self, resolution: Resolution, now: i64) {
        self.status = ListingStatus::Resolved(resolution);
        self.is_active = false;
        self.resolved_at = now;
    }

    /// Reads a listing from an account that may not exist yet.
    pub fn load(info: &AccountInfo) -> Result<Listing> {
        if info.owner != &crate::ID || info.data_is_empty() {
            return err!(MarketplaceError::ListingNotFound);
        }
        let data = info.try_borrow_data()?;
        Listing::try_deserialize(&mut &data[..])
    }

    pub fn store(&self, info: &AccountInfo) -> Result<()> {
        let mut data = info.try_borrow_mut_data()?;
        let mut writer: &mut [u8] = &mut data[..];
        self.try_serialize(&mut writer)
    }
}

/// Account filters for enumerating listings over RPC.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ListingFilter {
    Active,
    Seller(Pubkey),
    Asset(Pubkey),
}

impl ListingFilter {
    /// `(offset, bytes)` pair for a memcmp filter.
    pub fn memcmp(&self) -> (usize, Vec<u8>) {
        match self {
            ListingFilter::Active => (Listing::IS_ACTIVE_OFFSET, vec![1]),
            ListingFilter::Seller(seller) => (Listing::SELLER_OFFSET, seller.to_bytes().to_vec()),
            ListingFilter::Asset(mint) => (Listing::ASSET_MINT_OFFSET, mint.to_bytes().to_vec()),
        }
    }

    pub fn matches(&self, data: &[u8]) -> bool {
        let (offset, bytes) = self.memcmp();
        data.get(offset..offset + bytes.len()) == Some(&bytes[..])
    }

    /// True when `data` is a listing account satisfying every filter.
    pub fn matches_all(filters: &[ListingFilter], data: &[u8]) -> bool {
        data.starts_with(&Listing::DISCRIMINATOR) && filters.iter().all(|f| f.matches(data))
    }
}
