//! Shared account validation helpers

use anchor_lang::prelude::*;
use anchor_spl::token::Mint;

use crate::error::MarketError;

/// A unique asset is a mint with zero decimals and a supply of exactly one
pub fn validate_nft_mint(mint: &Account<Mint>) -> Result<()> {
    require!(
        mint.decimals == 0 && mint.supply == 1,
        MarketError::InvalidAssetMint
    );
    Ok(())
}
