use anchor_lang::prelude::*;
use anchor_spl::token::TokenAccount;
use crate::constants::ASSET_UNIT;
use crate::errors::MarketplaceError;

/// A seller's source token account.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct TokenHolding {
    pub owner: Pubkey,
    pub mint: Pubkey,
    pub amount: u64,
}

impl TokenHolding {
    pub fn of(account: &TokenAccount) -> Self {
        Self {
            owner: account.owner,
            mint: account.mint,
            amount: account.amount,
        }
    }

    pub fn ensure_owned_by(&self, seller: &Pubkey, asset_mint: &Pubkey) -> Result<()> {
        require_keys_eq!(self.owner, *seller, MarketplaceError::AssetNotOwnedBySeller);
        require_keys_eq!(self.mint, *asset_mint, MarketplaceError::AssetNotOwnedBySeller);
        require!(self.amount == ASSET_UNIT, MarketplaceError::AssetNotOwnedBySeller);
        Ok(())
    }
}

/// The parts of an escrow token account the program decides on.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct CustodySnapshot {
    pub address: Pubkey,
    pub mint: Pubkey,
    pub amount: u64,
}

impl CustodySnapshot {
    pub fn of(address: Pubkey, account: &TokenAccount) -> Self {
        Self {
            address,
            mint: account.mint,
            amount: account.amount,
        }
    }

    /// Reads the escrow account in the handler so that a missing listing is
    /// reported before a missing custody account.
    pub fn load(info: &AccountInfo) -> Result<Self> {
        if info.owner != &anchor_spl::token::ID || info.data_is_empty() {
            return err!(MarketplaceError::CustodyMismatch);
        }
        let data = info.try_borrow_data()?;
        let account = TokenAccount::try_deserialize(&mut &data[..])?;
        Ok(Self::of(*info.key, &account))
    }

    pub fn is_empty(&self) -> bool {
        self.amount == 0
    }

    /// Escrow must be the recorded account and hold exactly the listed unit.
    pub fn ensure_holds(&self, custody_account: &Pubkey, asset_mint: &Pubkey) -> Result<()> {
        require_keys_eq!(self.address, *custody_account, MarketplaceError::CustodyMismatch);
        require_keys_eq!(self.mint, *asset_mint, MarketplaceError::CustodyMismatch);
        require!(self.amount == ASSET_UNIT, MarketplaceError::CustodyMismatch);
        Ok(())
    }
}
