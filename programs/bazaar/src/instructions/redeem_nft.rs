use anchor_lang::prelude::*;
use anchor_spl::token::{Mint, Token, TokenAccount};

use crate::constants::*;
use crate::error::MarketError;
use crate::events::NftRedeemed;
use crate::state::{AuctionPhase, AuctionRecord, EscrowPot, Pool, SaleManager, SaleState};
use crate::utils::transfer_from_vault_to_user;

#[derive(Accounts)]
pub struct RedeemNft<'info> {
    #[account(
        seeds = [POOL_SEED, pool.owner.as_ref(), pool.sale_mint.as_ref()],
        bump = pool.bump,
        constraint = pool.owner == owner.key() @ MarketError::Unauthorized
    )]
    pub pool: Account<'info, Pool>,

    pub nft_mint: Account<'info, Mint>,

    #[account(
        mut,
        seeds = [SALE_MANAGER_SEED, pool.key().as_ref(), nft_mint.key().as_ref()],
        bump = sale_manager.bump
    )]
    pub sale_manager: Account<'info, SaleManager>,

    #[account(
        constraint = escrow_pot.sale_manager == sale_manager.key() @ MarketError::SaleNotActive
    )]
    pub escrow_pot: Account<'info, EscrowPot>,

    #[account(address = escrow_pot.payment_vault @ MarketError::InvalidVault)]
    pub pot_vault: Account<'info, TokenAccount>,

    /// Present only when abandoning an auction listing
    pub auction_record: Option<Account<'info, AuctionRecord>>,

    #[account(mut, address = sale_manager.nft_vault @ MarketError::InvalidVault)]
    pub nft_vault: Account<'info, TokenAccount>,

    #[account(
        mut,
        token::mint = nft_mint,
        token::authority = owner
    )]
    pub seller_nft_account: Account<'info, TokenAccount>,

    pub owner: Signer<'info>,

    pub token_program: Program<'info, Token>,
}

pub fn redeem_nft(ctx: Context<RedeemNft>) -> Result<()> {
    match ctx.accounts.sale_manager.state {
        SaleState::Idle => return err!(MarketError::SaleNotActive),
        SaleState::FixedPrice { escrow_pot } => {
            require_keys_eq!(
                ctx.accounts.escrow_pot.key(),
                escrow_pot,
                MarketError::SaleNotActive
            );
            // a purchase leaves funds in the vault and marks the pot funded
            require!(
                !ctx.accounts.escrow_pot.funded && ctx.accounts.pot_vault.amount == 0,
                MarketError::SaleAlreadyFilled
            );
        }
        SaleState::Auction {
            escrow_pot,
            auction,
        } => {
            require_keys_eq!(
                ctx.accounts.escrow_pot.key(),
                escrow_pot,
                MarketError::SaleNotActive
            );
            let record = ctx
                .accounts
                .auction_record
                .as_ref()
                .ok_or(MarketError::SaleNotActive)?;
            require_keys_eq!(record.key(), auction, MarketError::SaleNotActive);
            // once a bid is locked the listing can only resolve via claim
            require!(
                record.phase == AuctionPhase::NotStarted,
                MarketError::SaleAlreadyFilled
            );
        }
    }

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
        &ctx.accounts.seller_nft_account,
        &ctx.accounts.sale_manager.to_account_info(),
        &ctx.accounts.token_program,
        &[seeds],
        1,
    )?;

    let sale_manager = &mut ctx.accounts.sale_manager;
    sale_manager.state = SaleState::Idle;

    emit!(NftRedeemed {
        sale_manager: sale_manager.key(),
        escrow_pot: ctx.accounts.escrow_pot.key(),
    });

    Ok(())
}
