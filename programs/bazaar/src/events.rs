//! Event definitions

use anchor_lang::prelude::*;

/// Event emitted when a pool is created
#[event]
pub struct PoolCreated {
    pub pool: Pubkey,
    pub owner: Pubkey,
    pub sale_mint: Pubkey,
}

/// Event emitted when a sale manager is created for an asset
#[event]
pub struct SaleManagerCreated {
    pub sale_manager: Pubkey,
    pub pool: Pubkey,
    pub nft_mint: Pubkey,
}

/// Event emitted when an asset is listed at a fixed price
#[event]
pub struct NftListed {
    pub sale_manager: Pubkey,
    pub escrow_pot: Pubkey,
    pub price: u64,
    pub recipient_count: u8,
}

/// Event emitted when a fixed-price sale completes
#[event]
pub struct NftPurchased {
    pub sale_manager: Pubkey,
    pub escrow_pot: Pubkey,
    pub buyer: Pubkey,
    pub price: u64,
}

/// Event emitted when an unsold listing is returned to the seller
#[event]
pub struct NftRedeemed {
    pub sale_manager: Pubkey,
    pub escrow_pot: Pubkey,
}

/// Event emitted when an asset is listed by timed auction
#[event]
pub struct AuctionOpened {
    pub sale_manager: Pubkey,
    pub escrow_pot: Pubkey,
    pub auction: Pubkey,
    pub starting_price: u64,
    pub end_time: i64,
}

/// Event emitted on every accepted bid
#[event]
pub struct BidPlaced {
    pub auction: Pubkey,
    pub bidder_payment_account: Pubkey,
    pub bid_price: u64,
    pub refunded: u64,
    pub timestamp: i64,
}

/// Event emitted when the winner claims the asset after auction end
#[event]
pub struct NftClaimed {
    pub auction: Pubkey,
    pub winner_payment_account: Pubkey,
    pub final_price: u64,
    pub timestamp: i64,
}

/// Event emitted on each recipient payout from an escrow pot
#[event]
pub struct FundsWithdrawn {
    pub escrow_pot: Pubkey,
    pub payment_account: Pubkey,
    pub amount: u64,
}
