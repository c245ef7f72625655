use anchor_lang::prelude::*;
use anchor_spl::token::Mint;

use crate::constants::{POOL_SEED, SALE_MANAGER_SEED};
use crate::error::MarketError;
use crate::events::SaleManagerCreated;
use crate::state::{Pool, SaleManager, SaleState};
use crate::utils::validate_nft_mint;

#[derive(Accounts)]
pub struct InitSaleManager<'info> {
    #[account(
        seeds = [POOL_SEED, pool.owner.as_ref(), pool.sale_mint.as_ref()],
        bump = pool.bump,
        constraint = pool.owner == owner.key() @ MarketError::Unauthorized
    )]
    pub pool: Account<'info, Pool>,

    pub nft_mint: Account<'info, Mint>,

    #[account(
        init,
        payer = owner,
        space = 8 + SaleManager::INIT_SPACE,
        seeds = [SALE_MANAGER_SEED, pool.key().as_ref(), nft_mint.key().as_ref()],
        bump
    )]
    pub sale_manager: Account<'info, SaleManager>,

    #[account(mut)]
    pub owner: Signer<'info>,

    pub system_program: Program<'info, System>,
}

pub fn init_sale_manager(ctx: Context<InitSaleManager>) -> Result<()> {
    validate_nft_mint(&ctx.accounts.nft_mint)?;

    let sale_manager = &mut ctx.accounts.sale_manager;
    sale_manager.pool = ctx.accounts.pool.key();
    sale_manager.nft_mint = ctx.accounts.nft_mint.key();
    sale_manager.nft_vault = Pubkey::default();
    sale_manager.sale_count = 0;
    sale_manager.state = SaleState::Idle;
    sale_manager.bump = ctx.bumps.sale_manager;

    emit!(SaleManagerCreated {
        sale_manager: sale_manager.key(),
        pool: sale_manager.pool,
        nft_mint: sale_manager.nft_mint,
    });

    Ok(())
}
