//! Token transfer utilities
//!
//! Helper functions for the two transfer patterns the protocol uses. Both
//! pre-check the source balance so shortfalls surface as a typed error
//! instead of a raw token-program failure.

use anchor_lang::prelude::*;
use anchor_spl::token::{self, Token, TokenAccount, Transfer};

use crate::error::MarketError;

/// Transfer tokens from a user-owned account into a custody vault
pub fn transfer_from_user_to_vault<'info>(
    user_token: &Account<'info, TokenAccount>,
    vault: &Account<'info, TokenAccount>,
    authority: &Signer<'info>,
    token_program: &Program<'info, Token>,
    amount: u64,
) -> Result<()> {
    require!(user_token.amount >= amount, MarketError::InsufficientFunds);
    let cpi_accounts = Transfer {
        from: user_token.to_account_info(),
        to: vault.to_account_info(),
        authority: authority.to_account_info(),
    };
    let cpi_ctx = CpiContext::new(token_program.to_account_info(), cpi_accounts);
    token::transfer(cpi_ctx, amount)
}

/// Transfer tokens out of a custody vault using PDA authority
pub fn transfer_from_vault_to_user<'info>(
    vault: &Account<'info, TokenAccount>,
    user_token: &Account<'info, TokenAccount>,
    vault_authority: &AccountInfo<'info>,
    token_program: &Program<'info, Token>,
    authority_seeds: &[&[&[u8]]],
    amount: u64,
) -> Result<()> {
    require!(vault.amount >= amount, MarketError::InsufficientFunds);
    let cpi_accounts = Transfer {
        from: vault.to_account_info(),
        to: user_token.to_account_info(),
        authority: vault_authority.to_account_info(),
    };
    let cpi_ctx = CpiContext::new_with_signer(
        token_program.to_account_info(),
        cpi_accounts,
        authority_seeds,
    );
    token::transfer(cpi_ctx, amount)
}
