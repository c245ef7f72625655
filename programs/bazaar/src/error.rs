//! Error definitions

use anchor_lang::prelude::*;

#[error_code]
pub enum MarketError {
    // Creation errors
    #[msg("Account is already initialized")]
    AlreadyInitialized,

    #[msg("Caller lacks the required signature or role")]
    Unauthorized,

    #[msg("Asset mint must be a single-supply token with 0 decimals")]
    InvalidAssetMint,

    #[msg("Token account mint does not match the pool's sale mint")]
    InvalidPaymentMint,

    #[msg("Invalid custody vault")]
    InvalidVault,

    // Listing errors
    #[msg("Distribution shares do not sum to the fixed total")]
    InvalidDistribution,

    #[msg("No sale with the requested mechanism is active")]
    SaleNotActive,

    #[msg("Sale has already been filled")]
    SaleAlreadyFilled,

    #[msg("Insufficient funds")]
    InsufficientFunds,

    // Auction errors
    #[msg("Auction duration must be positive")]
    InvalidDuration,

    #[msg("Bid must be strictly greater than the current price")]
    BidTooLow,

    #[msg("Auction has already ended")]
    AuctionEnded,

    #[msg("Auction has not ended yet")]
    AuctionNotEnded,

    #[msg("Auction received no bids")]
    NoBids,

    #[msg("Supplied account does not match the recorded previous bidder")]
    PreviousBidderMismatch,

    #[msg("Supplied accounts do not belong to the recorded winner")]
    WinnerMismatch,

    // Withdrawal errors
    #[msg("Nothing left to withdraw for this recipient")]
    NothingToWithdraw,

    // Math errors
    #[msg("Math overflow")]
    MathOverflow,
}
