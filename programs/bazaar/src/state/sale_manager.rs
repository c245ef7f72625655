use anchor_lang::prelude::*;

use crate::error::MarketError;

/// Per-(pool, asset) record tracking which sale mechanism is active.
///
/// At most one sale manager exists per asset per pool; uniqueness comes from
/// the PDA derivation, not from any registry scan.
#[account]
#[derive(InitSpace)]
pub struct SaleManager {
    /// Pool this manager belongs to
    pub pool: Pubkey,
    /// Mint of the asset managed here
    pub nft_mint: Pubkey,
    /// Custody token account holding the asset while a sale is active.
    /// Only meaningful while `state != Idle`.
    pub nft_vault: Pubkey,
    /// Monotonic listing counter, used as the PDA nonce for per-sale
    /// accounts so every listing gets a fresh escrow pot.
    pub sale_count: u64,
    /// Active mechanism plus the per-sale accounts it owns
    pub state: SaleState,
    /// Canonical bump
    pub bump: u8,
}

/// Active sale mechanism. The per-sale account references live inside the
/// variant, so an escrow pot without a mechanism (or an auction record
/// outside an auction) cannot be represented.
#[derive(AnchorSerialize, AnchorDeserialize, Clone, Copy, PartialEq, Eq, Debug)]
pub enum SaleState {
    Idle,
    FixedPrice { escrow_pot: Pubkey },
    Auction { escrow_pot: Pubkey, auction: Pubkey },
}

impl anchor_lang::Space for SaleState {
    // discriminant + worst-case variant (two pubkeys)
    const INIT_SPACE: usize = 1 + 32 + 32;
}

impl SaleState {
    pub fn is_idle(&self) -> bool {
        matches!(self, SaleState::Idle)
    }

    /// Escrow pot of the active fixed-price sale
    pub fn fixed_price_pot(&self) -> Result<Pubkey> {
        match self {
            SaleState::FixedPrice { escrow_pot } => Ok(*escrow_pot),
            _ => err!(MarketError::SaleNotActive),
        }
    }

    /// Escrow pot and auction record of the active auction
    pub fn auction_parts(&self) -> Result<(Pubkey, Pubkey)> {
        match self {
            SaleState::Auction {
                escrow_pot,
                auction,
            } => Ok((*escrow_pot, *auction)),
            _ => err!(MarketError::SaleNotActive),
        }
    }
}
