use anchor_lang::prelude::*;
use anchor_spl::token::Mint;

use crate::constants::POOL_SEED;
use crate::events::PoolCreated;
use crate::state::Pool;

#[derive(Accounts)]
pub struct InitPool<'info> {
    #[account(
        init,
        payer = owner,
        space = 8 + Pool::INIT_SPACE,
        seeds = [POOL_SEED, owner.key().as_ref(), sale_mint.key().as_ref()],
        bump
    )]
    pub pool: Account<'info, Pool>,

    /// Fungible mint accepted as payment for every sale under this pool
    pub sale_mint: Account<'info, Mint>,

    #[account(mut)]
    pub owner: Signer<'info>,

    pub system_program: Program<'info, System>,
}

pub fn init_pool(ctx: Context<InitPool>) -> Result<()> {
    let pool = &mut ctx.accounts.pool;
    pool.owner = ctx.accounts.owner.key();
    pool.sale_mint = ctx.accounts.sale_mint.key();
    pool.bump = ctx.bumps.pool;

    emit!(PoolCreated {
        pool: pool.key(),
        owner: pool.owner,
        sale_mint: pool.sale_mint,
    });

    Ok(())
}
