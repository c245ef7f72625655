//! Unified PDA derivation module.
//! Single source of truth for all derived addresses in the protocol; the
//! owning program id is always injected, never read from a global.

use anchor_lang::prelude::*;

use crate::constants::*;

/// Derive the pool PDA for an owner and payment mint
pub fn derive_pool(owner: &Pubkey, sale_mint: &Pubkey, program_id: &Pubkey) -> (Pubkey, u8) {
    Pubkey::find_program_address(
        &[POOL_SEED, owner.as_ref(), sale_mint.as_ref()],
        program_id,
    )
}

/// Derive the sale manager PDA for an asset under a pool
pub fn derive_sale_manager(pool: &Pubkey, nft_mint: &Pubkey, program_id: &Pubkey) -> (Pubkey, u8) {
    Pubkey::find_program_address(
        &[SALE_MANAGER_SEED, pool.as_ref(), nft_mint.as_ref()],
        program_id,
    )
}

/// Derive the escrow pot PDA for the `index`-th listing of a sale manager
pub fn derive_escrow_pot(sale_manager: &Pubkey, index: u64, program_id: &Pubkey) -> (Pubkey, u8) {
    Pubkey::find_program_address(
        &[
            ESCROW_POT_SEED,
            sale_manager.as_ref(),
            &index.to_le_bytes(),
        ],
        program_id,
    )
}

/// Derive the payment vault PDA of an escrow pot
pub fn derive_pot_vault(escrow_pot: &Pubkey, program_id: &Pubkey) -> (Pubkey, u8) {
    Pubkey::find_program_address(&[POT_VAULT_SEED, escrow_pot.as_ref()], program_id)
}

/// Derive the asset custody vault PDA of a sale manager
pub fn derive_nft_vault(sale_manager: &Pubkey, program_id: &Pubkey) -> (Pubkey, u8) {
    Pubkey::find_program_address(&[NFT_VAULT_SEED, sale_manager.as_ref()], program_id)
}

/// Derive the auction record PDA for the `index`-th listing of a sale manager
pub fn derive_auction(sale_manager: &Pubkey, index: u64, program_id: &Pubkey) -> (Pubkey, u8) {
    Pubkey::find_program_address(
        &[AUCTION_SEED, sale_manager.as_ref(), &index.to_le_bytes()],
        program_id,
    )
}

/// Derive the canonical token-metadata address for an asset mint
pub fn derive_metadata(nft_mint: &Pubkey) -> (Pubkey, u8) {
    Pubkey::find_program_address(
        &[
            METADATA_SEED,
            mpl_token_metadata::ID.as_ref(),
            nft_mint.as_ref(),
        ],
        &mpl_token_metadata::ID,
    )
}
