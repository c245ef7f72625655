use anchor_lang::prelude::*;

/// Root registry binding an owner to the payment mint accepted for every
/// sale listed under it. Immutable after creation.
#[account]
#[derive(InitSpace)]
pub struct Pool {
    /// Account authorized to create sales under this pool
    pub owner: Pubkey,
    /// Fungible mint accepted as payment for every sale under this pool
    pub sale_mint: Pubkey,
    /// Canonical bump
    pub bump: u8,
}
