use anchor_lang::prelude::*;
use anchor_spl::token::{Mint, Token, TokenAccount};

use crate::constants::*;
use crate::error::MarketError;
use crate::events::BidPlaced;
use crate::state::{AuctionRecord, EscrowPot, Pool, SaleManager};
use crate::utils::{transfer_from_user_to_vault, transfer_from_vault_to_user};

#[derive(Accounts)]
pub struct PlaceBid<'info> {
    #[account(
        seeds = [POOL_SEED, pool.owner.as_ref(), pool.sale_mint.as_ref()],
        bump = pool.bump
    )]
    pub pool: Account<'info, Pool>,

    pub nft_mint: Account<'info, Mint>,

    #[account(
        seeds = [SALE_MANAGER_SEED, pool.key().as_ref(), nft_mint.key().as_ref()],
        bump = sale_manager.bump
    )]
    pub sale_manager: Account<'info, SaleManager>,

    #[account(
        mut,
        constraint = escrow_pot.sale_manager == sale_manager.key() @ MarketError::SaleNotActive
    )]
    pub escrow_pot: Account<'info, EscrowPot>,

    #[account(
        mut,
        constraint = auction_record.sale_manager == sale_manager.key() @ MarketError::SaleNotActive
    )]
    pub auction_record: Account<'info, AuctionRecord>,

    #[account(mut, address = escrow_pot.payment_vault @ MarketError::InvalidVault)]
    pub pot_vault: Account<'info, TokenAccount>,

    #[account(
        mut,
        token::mint = pool.sale_mint,
        token::authority = bidder
    )]
    pub bidder_payment_account: Account<'info, TokenAccount>,

    /// Refund target for the superseded bid. Validated against the auction
    /// record; on the first bid there is nothing to refund and any account
    /// of the right mint may be supplied here.
    #[account(
        mut,
        token::mint = pool.sale_mint
    )]
    pub prev_bidder_payment_account: Account<'info, TokenAccount>,

    #[account(mut)]
    pub bidder: Signer<'info>,

    pub token_program: Program<'info, Token>,
}

pub fn place_bid(ctx: Context<PlaceBid>, bid_price: u64) -> Result<()> {
    let (pot_key, auction_key) = ctx.accounts.sale_manager.state.auction_parts()?;
    require_keys_eq!(
        ctx.accounts.escrow_pot.key(),
        pot_key,
        MarketError::SaleNotActive
    );
    require_keys_eq!(
        ctx.accounts.auction_record.key(),
        auction_key,
        MarketError::SaleNotActive
    );

    let now = Clock::get()?.unix_timestamp;
    let refund = ctx.accounts.auction_record.register_bid(
        now,
        bid_price,
        ctx.accounts.bidder_payment_account.key(),
    )?;

    // Lock the new bid before paying the old one back, so the vault always
    // covers the refund
    transfer_from_user_to_vault(
        &ctx.accounts.bidder_payment_account,
        &ctx.accounts.pot_vault,
        &ctx.accounts.bidder,
        &ctx.accounts.token_program,
        bid_price,
    )?;

    let refunded = if let Some(refund) = refund {
        require_keys_eq!(
            ctx.accounts.prev_bidder_payment_account.key(),
            refund.payment_account,
            MarketError::PreviousBidderMismatch
        );
        let pot = &ctx.accounts.escrow_pot;
        let pot_sale_manager = pot.sale_manager;
        let index_bytes = pot.index.to_le_bytes();
        let seeds: &[&[u8]] = &[
            ESCROW_POT_SEED,
            pot_sale_manager.as_ref(),
            index_bytes.as_ref(),
            &[pot.bump],
        ];
        transfer_from_vault_to_user(
            &ctx.accounts.pot_vault,
            &ctx.accounts.prev_bidder_payment_account,
            &pot.to_account_info(),
            &ctx.accounts.token_program,
            &[seeds],
            refund.amount,
        )?;
        refund.amount
    } else {
        0
    };

    emit!(BidPlaced {
        auction: ctx.accounts.auction_record.key(),
        bidder_payment_account: ctx.accounts.bidder_payment_account.key(),
        bid_price,
        refunded,
        timestamp: now,
    });

    Ok(())
}
