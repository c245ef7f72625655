use anchor_lang::prelude::*;
use anchor_spl::token::{Mint, Token, TokenAccount};

use crate::constants::*;
use crate::error::MarketError;
use crate::events::NftPurchased;
use crate::state::{EscrowPot, Pool, SaleManager};
use crate::utils::{transfer_from_user_to_vault, transfer_from_vault_to_user};

#[derive(Accounts)]
pub struct BuyNft<'info> {
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

    #[account(mut, address = escrow_pot.payment_vault @ MarketError::InvalidVault)]
    pub pot_vault: Account<'info, TokenAccount>,

    #[account(mut, address = sale_manager.nft_vault @ MarketError::InvalidVault)]
    pub nft_vault: Account<'info, TokenAccount>,

    #[account(
        mut,
        token::mint = pool.sale_mint,
        token::authority = buyer
    )]
    pub buyer_payment_account: Account<'info, TokenAccount>,

    #[account(
        mut,
        token::mint = nft_mint,
        token::authority = buyer
    )]
    pub buyer_nft_account: Account<'info, TokenAccount>,

    #[account(mut)]
    pub buyer: Signer<'info>,

    pub token_program: Program<'info, Token>,
}

pub fn buy_nft(ctx: Context<BuyNft>) -> Result<()> {
    let pot_key = ctx.accounts.sale_manager.state.fixed_price_pot()?;
    require_keys_eq!(
        ctx.accounts.escrow_pot.key(),
        pot_key,
        MarketError::SaleNotActive
    );
    require!(
        !ctx.accounts.escrow_pot.funded,
        MarketError::SaleAlreadyFilled
    );

    let price = ctx.accounts.escrow_pot.price;
    transfer_from_user_to_vault(
        &ctx.accounts.buyer_payment_account,
        &ctx.accounts.pot_vault,
        &ctx.accounts.buyer,
        &ctx.accounts.token_program,
        price,
    )?;

    // Release the asset, sale manager PDA signs
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
        &ctx.accounts.buyer_nft_account,
        &ctx.accounts.sale_manager.to_account_info(),
        &ctx.accounts.token_program,
        &[seeds],
        1,
    )?;

    // The funded pot is the completion record; the mechanism stays as-is
    let pot = &mut ctx.accounts.escrow_pot;
    pot.funded = true;

    emit!(NftPurchased {
        sale_manager: ctx.accounts.sale_manager.key(),
        escrow_pot: pot.key(),
        buyer: ctx.accounts.buyer.key(),
        price,
    });

    Ok(())
}
