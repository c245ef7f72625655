use anchor_lang::prelude::*;
use anchor_spl::token::{Mint, Token, TokenAccount};

use crate::constants::*;
use crate::error::MarketError;
use crate::events::NftClaimed;
use crate::state::{AuctionRecord, EscrowPot, Pool, SaleManager};
use crate::utils::transfer_from_vault_to_user;

#[derive(Accounts)]
pub struct ClaimBid<'info> {
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

    #[account(mut, address = sale_manager.nft_vault @ MarketError::InvalidVault)]
    pub nft_vault: Account<'info, TokenAccount>,

    /// Asset destination; must belong to the wallet behind the recorded
    /// winning payment account
    #[account(
        mut,
        token::mint = nft_mint
    )]
    pub winner_nft_account: Account<'info, TokenAccount>,

    /// The payment account recorded for the winning bid
    pub winner_payment_account: Account<'info, TokenAccount>,

    /// Anyone may claim on the winner's behalf; the asset destination is
    /// fixed by the auction record either way
    pub claimant: Signer<'info>,

    pub token_program: Program<'info, Token>,
}

pub fn claim_bid(ctx: Context<ClaimBid>) -> Result<()> {
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
    let (winner_payment_key, final_price) = ctx.accounts.auction_record.finalize(now)?;

    require_keys_eq!(
        ctx.accounts.winner_payment_account.key(),
        winner_payment_key,
        MarketError::WinnerMismatch
    );
    require_keys_eq!(
        ctx.accounts.winner_nft_account.owner,
        ctx.accounts.winner_payment_account.owner,
        MarketError::WinnerMismatch
    );

    let pool_key = ctx.accounts.pool.key();
    let nft_mint_key = ctx.accounts.nft_mint.key();
    let seeds: &[&[u8]] = &[
        SALE_MANAGER_SEED,
        pool_key.as_ref(),
        nft_mint_key.as_ref(),
        &[ctx.accounts.sale_manager.bump],
    ];
    transfer_from_vault_to_user(
        &ctx.accounts.nft_vault,
        &ctx.accounts.winner_nft_account,
        &ctx.accounts.sale_manager.to_account_info(),
        &ctx.accounts.token_program,
        &[seeds],
        1,
    )?;

    // The vault already holds exactly the winning bid; record it as the
    // final price and open the pot for withdrawal
    let pot = &mut ctx.accounts.escrow_pot;
    pot.price = final_price;
    pot.funded = true;

    emit!(NftClaimed {
        auction: ctx.accounts.auction_record.key(),
        winner_payment_account: winner_payment_key,
        final_price,
        timestamp: now,
    });

    Ok(())
}
