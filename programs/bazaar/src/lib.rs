#![allow(unexpected_cfgs)]
use anchor_lang::prelude::*;

pub mod constants;
pub mod error;
pub mod events;
pub mod instructions;
pub mod state;
pub mod utils;

use instructions::*;
use state::DistributionEntry;

#[cfg(test)]
mod tests;

declare_id!("9xn8cm2kiQHxNjdUT2r2PYNkd8dpprJ58nXB3hL7uZrK");

#[program]
pub mod bazaar {
    use super::*;

    /// Create a pool binding the owner to an accepted payment mint
    pub fn init_pool(ctx: Context<InitPool>) -> Result<()> {
        instructions::init_pool(ctx)
    }

    /// Create the sale manager for one asset under a pool
    pub fn init_sale_manager(ctx: Context<InitSaleManager>) -> Result<()> {
        instructions::init_sale_manager(ctx)
    }

    /// List an asset at a fixed price with a revenue distribution list
    pub fn sell_nft(
        ctx: Context<SellNft>,
        price: u64,
        distribution: Vec<DistributionEntry>,
    ) -> Result<()> {
        instructions::sell_nft(ctx, price, distribution)
    }

    /// Buy a fixed-price listing: pay into escrow, receive the asset
    pub fn buy_nft(ctx: Context<BuyNft>) -> Result<()> {
        instructions::buy_nft(ctx)
    }

    /// Take back an unsold listing and return the manager to idle
    pub fn redeem_nft(ctx: Context<RedeemNft>) -> Result<()> {
        instructions::redeem_nft(ctx)
    }

    /// Pay out one recipient's outstanding share of a funded escrow pot
    pub fn withdraw_fund(ctx: Context<WithdrawFund>) -> Result<()> {
        instructions::withdraw_fund(ctx)
    }

    /// List an asset by timed English auction
    pub fn sell_nft_by_auction(
        ctx: Context<SellNftByAuction>,
        starting_price: u64,
        duration: i64,
        distribution: Vec<DistributionEntry>,
    ) -> Result<()> {
        instructions::sell_nft_by_auction(ctx, starting_price, duration, distribution)
    }

    /// Outbid the current high bid, refunding the superseded bidder
    pub fn place_bid(ctx: Context<PlaceBid>, bid_price: u64) -> Result<()> {
        instructions::place_bid(ctx, bid_price)
    }

    /// After the auction ends, move the asset to the recorded winner
    pub fn claim_bid(ctx: Context<ClaimBid>) -> Result<()> {
        instructions::claim_bid(ctx)
    }
}
