use anchor_lang::prelude::*;

use super::assert_market_err;
use crate::error::MarketError;
use crate::state::{AuctionPhase, AuctionRecord};

fn open_auction(starting_price: u64, end_time: i64) -> AuctionRecord {
    AuctionRecord {
        sale_manager: Pubkey::new_unique(),
        end_time,
        phase: AuctionPhase::NotStarted,
        current_price: starting_price,
        last_bidder_token_account: None,
        bump: 254,
    }
}

#[test]
fn first_bid_has_nothing_to_refund() {
    let mut record = open_auction(100, 1_000);
    let x = Pubkey::new_unique();

    let refund = record.register_bid(10, 110, x).unwrap();
    assert!(refund.is_none());
    assert_eq!(record.phase, AuctionPhase::Started);
    assert_eq!(record.current_price, 110);
    assert_eq!(record.last_bidder_token_account, Some(x));
}

#[test]
fn outbid_refunds_previous_bidder_exactly_once() {
    let mut record = open_auction(100, 1_000);
    let x = Pubkey::new_unique();
    let y = Pubkey::new_unique();

    record.register_bid(10, 110, x).unwrap();
    let refund = record.register_bid(20, 120, y).unwrap().unwrap();
    assert_eq!(refund.payment_account, x);
    assert_eq!(refund.amount, 110);
    assert_eq!(record.current_price, 120);
    assert_eq!(record.last_bidder_token_account, Some(y));
}

#[test]
fn equal_bid_rejected_and_record_unchanged() {
    let mut record = open_auction(100, 1_000);
    let x = Pubkey::new_unique();
    record.register_bid(10, 110, x).unwrap();

    assert_market_err(
        record.register_bid(20, 110, Pubkey::new_unique()),
        MarketError::BidTooLow,
    );
    assert_eq!(record.current_price, 110);
    assert_eq!(record.last_bidder_token_account, Some(x));
    assert_eq!(record.phase, AuctionPhase::Started);
}

#[test]
fn bid_below_starting_price_rejected() {
    let mut record = open_auction(100, 1_000);
    assert_market_err(
        record.register_bid(10, 90, Pubkey::new_unique()),
        MarketError::BidTooLow,
    );
    assert_eq!(record.phase, AuctionPhase::NotStarted);
}

#[test]
fn bid_at_or_after_end_time_rejected() {
    let mut record = open_auction(100, 1_000);
    assert_market_err(
        record.register_bid(1_000, 110, Pubkey::new_unique()),
        MarketError::AuctionEnded,
    );
    assert_market_err(
        record.register_bid(1_001, 110, Pubkey::new_unique()),
        MarketError::AuctionEnded,
    );
}

#[test]
fn accepted_bids_are_strictly_increasing() {
    let mut record = open_auction(100, 1_000);
    let mut last = record.current_price;
    for bid in [110, 115, 140, 141] {
        record.register_bid(10, bid, Pubkey::new_unique()).unwrap();
        assert!(record.current_price > last);
        last = record.current_price;
    }
}

#[test]
fn claim_before_end_time_rejected() {
    let mut record = open_auction(100, 1_000);
    record.register_bid(10, 110, Pubkey::new_unique()).unwrap();

    assert_market_err(record.finalize(999), MarketError::AuctionNotEnded);
    assert_eq!(record.phase, AuctionPhase::Started);
}

#[test]
fn claim_without_bids_rejected() {
    let mut record = open_auction(100, 1_000);
    assert_market_err(record.finalize(1_000), MarketError::NoBids);
    assert_eq!(record.phase, AuctionPhase::NotStarted);
}

#[test]
fn claim_moves_record_to_ended() {
    let mut record = open_auction(100, 1_000);
    let x = Pubkey::new_unique();
    record.register_bid(10, 110, x).unwrap();

    let (winner, final_price) = record.finalize(1_000).unwrap();
    assert_eq!(winner, x);
    assert_eq!(final_price, 110);
    assert_eq!(record.phase, AuctionPhase::Ended);
}

#[test]
fn second_claim_rejected() {
    let mut record = open_auction(100, 1_000);
    record.register_bid(10, 110, Pubkey::new_unique()).unwrap();
    record.finalize(1_000).unwrap();

    assert_market_err(record.finalize(1_001), MarketError::SaleAlreadyFilled);
}

#[test]
fn bid_after_claim_rejected() {
    let mut record = open_auction(100, 1_000);
    record.register_bid(10, 110, Pubkey::new_unique()).unwrap();
    record.finalize(1_000).unwrap();

    assert_market_err(
        record.register_bid(1_001, 200, Pubkey::new_unique()),
        MarketError::AuctionEnded,
    );
}

#[test]
fn auction_runs_end_to_end() {
    // starting price 100, duration 30: X bids 110 with no prior refund, Y's
    // 120 refunds X's 110, and after end time the claim resolves to Y at 120
    let opened_at = 50;
    let mut record = open_auction(100, opened_at + 30);
    let x = Pubkey::new_unique();
    let y = Pubkey::new_unique();

    assert!(record.register_bid(opened_at + 5, 110, x).unwrap().is_none());
    let refund = record
        .register_bid(opened_at + 10, 120, y)
        .unwrap()
        .unwrap();
    assert_eq!(refund.payment_account, x);
    assert_eq!(refund.amount, 110);

    let (winner, final_price) = record.finalize(opened_at + 30).unwrap();
    assert_eq!(winner, y);
    assert_eq!(final_price, 120);
}
