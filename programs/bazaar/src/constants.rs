//! Global constants for the bazaar protocol
//!
//! Centralized constants for PDA seeds and protocol parameters

// PDA seed constants
pub const POOL_SEED: &[u8] = b"pool";
pub const SALE_MANAGER_SEED: &[u8] = b"sale_manager";
pub const ESCROW_POT_SEED: &[u8] = b"escrow_pot";
pub const POT_VAULT_SEED: &[u8] = b"pot_vault";
pub const NFT_VAULT_SEED: &[u8] = b"nft_vault";
pub const AUCTION_SEED: &[u8] = b"auction";
pub const METADATA_SEED: &[u8] = b"metadata";

// Revenue distribution constants
/// Every distribution list partitions sale proceeds into exactly this many
/// parts, following the token-metadata creator-share convention.
pub const TOTAL_SHARE_PARTS: u64 = 100;

/// Maximum number of revenue recipients per listing
pub const MAX_RECIPIENTS: usize = 6;
