use anchor_lang::prelude::*;
use anchor_spl::token::{Mint, Token, TokenAccount};

use crate::constants::*;
use crate::error::MarketError;
use crate::events::AuctionOpened;
use crate::state::{
    AuctionPhase, AuctionRecord, DistributionEntry, EscrowPot, Pool, SaleManager, SaleState,
};
use crate::utils::transfer_from_user_to_vault;

#[derive(Accounts)]
pub struct SellNftByAuction<'info> {
    #[account(
        seeds = [POOL_SEED, pool.owner.as_ref(), pool.sale_mint.as_ref()],
        bump = pool.bump,
        constraint = pool.owner == owner.key() @ MarketError::Unauthorized
    )]
    pub pool: Account<'info, Pool>,

    pub nft_mint: Account<'info, Mint>,

    #[account(address = pool.sale_mint @ MarketError::InvalidPaymentMint)]
    pub sale_mint: Account<'info, Mint>,

    #[account(
        mut,
        seeds = [SALE_MANAGER_SEED, pool.key().as_ref(), nft_mint.key().as_ref()],
        bump = sale_manager.bump
    )]
    pub sale_manager: Account<'info, SaleManager>,

    #[account(
        init,
        payer = owner,
        space = 8 + EscrowPot::INIT_SPACE,
        seeds = [
            ESCROW_POT_SEED,
            sale_manager.key().as_ref(),
            sale_manager.sale_count.to_le_bytes().as_ref()
        ],
        bump
    )]
    pub escrow_pot: Account<'info, EscrowPot>,

    #[account(
        init,
        payer = owner,
        space = 8 + AuctionRecord::INIT_SPACE,
        seeds = [
            AUCTION_SEED,
            sale_manager.key().as_ref(),
            sale_manager.sale_count.to_le_bytes().as_ref()
        ],
        bump
    )]
    pub auction_record: Account<'info, AuctionRecord>,

    /// Payment custody: locked bids during the auction, proceeds after claim
    #[account(
        init,
        payer = owner,
        token::mint = sale_mint,
        token::authority = escrow_pot,
        seeds = [POT_VAULT_SEED, escrow_pot.key().as_ref()],
        bump
    )]
    pub pot_vault: Account<'info, TokenAccount>,

    #[account(
        init_if_needed,
        payer = owner,
        token::mint = nft_mint,
        token::authority = sale_manager,
        seeds = [NFT_VAULT_SEED, sale_manager.key().as_ref()],
        bump
    )]
    pub nft_vault: Account<'info, TokenAccount>,

    #[account(
        mut,
        token::mint = nft_mint,
        token::authority = owner
    )]
    pub seller_nft_account: Account<'info, TokenAccount>,

    /// CHECK: canonical token-metadata account for the asset, enforced by
    /// derivation against the metadata program
    #[account(
        seeds = [METADATA_SEED, mpl_token_metadata::ID.as_ref(), nft_mint.key().as_ref()],
        seeds::program = mpl_token_metadata::ID,
        bump
    )]
    pub metadata: UncheckedAccount<'info>,

    #[account(mut)]
    pub owner: Signer<'info>,

    pub token_program: Program<'info, Token>,
    pub system_program: Program<'info, System>,
    pub rent: Sysvar<'info, Rent>,
}

pub fn sell_nft_by_auction(
    ctx: Context<SellNftByAuction>,
    starting_price: u64,
    duration: i64,
    distribution: Vec<DistributionEntry>,
) -> Result<()> {
    require!(
        ctx.accounts.sale_manager.state.is_idle(),
        MarketError::SaleNotActive
    );
    require!(duration > 0, MarketError::InvalidDuration);
    EscrowPot::validate_distribution(&distribution)?;

    let now = Clock::get()?.unix_timestamp;
    let end_time = now
        .checked_add(duration)
        .ok_or(MarketError::MathOverflow)?;

    transfer_from_user_to_vault(
        &ctx.accounts.seller_nft_account,
        &ctx.accounts.nft_vault,
        &ctx.accounts.owner,
        &ctx.accounts.token_program,
        1,
    )?;

    let sale_manager = &mut ctx.accounts.sale_manager;
    let pot = &mut ctx.accounts.escrow_pot;
    pot.sale_manager = sale_manager.key();
    pot.index = sale_manager.sale_count;
    pot.payment_vault = ctx.accounts.pot_vault.key();
    pot.price = starting_price;
    pot.funded = false;
    pot.bump = ctx.bumps.escrow_pot;
    pot.assign_distribution(&distribution);

    let record = &mut ctx.accounts.auction_record;
    record.sale_manager = sale_manager.key();
    record.end_time = end_time;
    record.phase = AuctionPhase::NotStarted;
    record.current_price = starting_price;
    record.last_bidder_token_account = None;
    record.bump = ctx.bumps.auction_record;

    sale_manager.nft_vault = ctx.accounts.nft_vault.key();
    sale_manager.state = SaleState::Auction {
        escrow_pot: pot.key(),
        auction: record.key(),
    };
    sale_manager.sale_count = sale_manager
        .sale_count
        .checked_add(1)
        .ok_or(MarketError::MathOverflow)?;

    emit!(AuctionOpened {
        sale_manager: sale_manager.key(),
        escrow_pot: pot.key(),
        auction: record.key(),
        starting_price,
        end_time,
    });

    Ok(())
}
