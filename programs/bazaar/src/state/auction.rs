use anchor_lang::prelude::*;

use crate::error::MarketError;

/// State machine for one timed English auction.
///
/// The phase only ever moves forward: `NotStarted -> Started` on the first
/// accepted bid, `Started -> Ended` once the winner claims after `end_time`.
/// `end_time` is fixed at creation; expiry is checked lazily at bid and
/// claim time against the ledger clock, never waited on.
#[account]
#[derive(InitSpace)]
pub struct AuctionRecord {
    /// Sale manager this auction belongs to
    pub sale_manager: Pubkey,
    /// Ledger timestamp after which no bid is accepted
    pub end_time: i64,
    /// Lifecycle phase, monotonically non-decreasing
    pub phase: AuctionPhase,
    /// Highest accepted bid so far, or the starting price before any bid.
    /// Non-decreasing across accepted bids.
    pub current_price: u64,
    /// Payment token account of the current high bidder; None until the
    /// first bid is accepted
    pub last_bidder_token_account: Option<Pubkey>,
    /// Canonical bump
    pub bump: u8,
}

#[derive(InitSpace, AnchorSerialize, AnchorDeserialize, Clone, Copy, PartialEq, Eq, Debug)]
pub enum AuctionPhase {
    NotStarted,
    Started,
    Ended,
}

/// Funds owed back to a superseded bidder, settled in the same transaction
/// as the superseding deposit
#[derive(Debug)]
pub struct Refund {
    pub payment_account: Pubkey,
    pub amount: u64,
}

impl AuctionRecord {
    /// Accept a bid, or reject it leaving the record untouched.
    ///
    /// Returns the refund obligation toward the previous high bidder, if
    /// one exists. The refund target is read from this record, never from
    /// anything the caller claims about prior state.
    pub fn register_bid(
        &mut self,
        now: i64,
        bid_price: u64,
        bidder_payment_account: Pubkey,
    ) -> Result<Option<Refund>> {
        require!(self.phase != AuctionPhase::Ended, MarketError::AuctionEnded);
        require!(now < self.end_time, MarketError::AuctionEnded);
        require!(bid_price > self.current_price, MarketError::BidTooLow);

        let refund = if self.phase == AuctionPhase::Started {
            let payment_account = self
                .last_bidder_token_account
                .ok_or(MarketError::NoBids)?;
            Some(Refund {
                payment_account,
                amount: self.current_price,
            })
        } else {
            None
        };

        self.current_price = bid_price;
        self.last_bidder_token_account = Some(bidder_payment_account);
        self.phase = AuctionPhase::Started;
        Ok(refund)
    }

    /// Close the auction at claim time and return the winning payment
    /// account together with the final price. Ends the auction lazily: the
    /// phase flips to `Ended` here, on the first claim past `end_time`.
    pub fn finalize(&mut self, now: i64) -> Result<(Pubkey, u64)> {
        require!(
            self.phase != AuctionPhase::Ended,
            MarketError::SaleAlreadyFilled
        );
        require!(now >= self.end_time, MarketError::AuctionNotEnded);
        require!(self.phase == AuctionPhase::Started, MarketError::NoBids);

        let winner = self
            .last_bidder_token_account
            .ok_or(MarketError::NoBids)?;
        self.phase = AuctionPhase::Ended;
        Ok((winner, self.current_price))
    }
}
