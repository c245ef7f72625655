use anchor_lang::prelude::*;
use anchor_spl::token::{Token, TokenAccount};

use crate::constants::ESCROW_POT_SEED;
use crate::error::MarketError;
use crate::events::FundsWithdrawn;
use crate::state::EscrowPot;
use crate::utils::transfer_from_vault_to_user;

#[derive(Accounts)]
pub struct WithdrawFund<'info> {
    #[account(mut)]
    pub escrow_pot: Account<'info, EscrowPot>,

    #[account(mut, address = escrow_pot.payment_vault @ MarketError::InvalidVault)]
    pub pot_vault: Account<'info, TokenAccount>,

    /// Payment account registered in the pot's distribution list; must be
    /// owned by the signing caller
    #[account(
        mut,
        token::authority = owner
    )]
    pub withdraw_account: Account<'info, TokenAccount>,

    pub owner: Signer<'info>,

    pub token_program: Program<'info, Token>,
}

pub fn withdraw_fund(ctx: Context<WithdrawFund>) -> Result<()> {
    // Settle the books first; the transfer only happens for a positive claim
    let pot = &mut ctx.accounts.escrow_pot;
    let amount = pot.settle_withdrawal(&ctx.accounts.withdraw_account.key())?;

    let sale_manager = pot.sale_manager;
    let index_bytes = pot.index.to_le_bytes();
    let seeds: &[&[u8]] = &[
        ESCROW_POT_SEED,
        sale_manager.as_ref(),
        index_bytes.as_ref(),
        &[pot.bump],
    ];
    transfer_from_vault_to_user(
        &ctx.accounts.pot_vault,
        &ctx.accounts.withdraw_account,
        &pot.to_account_info(),
        &ctx.accounts.token_program,
        &[seeds],
        amount,
    )?;

    emit!(FundsWithdrawn {
        escrow_pot: pot.key(),
        payment_account: ctx.accounts.withdraw_account.key(),
        amount,
    });

    Ok(())
}
