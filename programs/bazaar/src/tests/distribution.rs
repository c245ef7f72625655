use anchor_lang::prelude::*;
use proptest::prelude::*;

use super::assert_market_err;
use crate::error::MarketError;
use crate::state::{DistributionEntry, EscrowPot};

fn entries(shares: &[u8]) -> Vec<DistributionEntry> {
    shares
        .iter()
        .map(|&share| DistributionEntry {
            payment_account: Pubkey::new_unique(),
            share,
        })
        .collect()
}

fn funded_pot(price: u64, shares: &[u8]) -> EscrowPot {
    let mut pot = EscrowPot {
        sale_manager: Pubkey::new_unique(),
        index: 0,
        payment_vault: Pubkey::new_unique(),
        price,
        funded: true,
        recipients: vec![],
        bump: 255,
    };
    pot.assign_distribution(&entries(shares));
    pot
}

#[test]
fn accepts_shares_summing_to_total() {
    EscrowPot::validate_distribution(&entries(&[100])).unwrap();
    EscrowPot::validate_distribution(&entries(&[90, 10])).unwrap();
    EscrowPot::validate_distribution(&entries(&[20, 20, 20, 20, 10, 10])).unwrap();
}

#[test]
fn rejects_shares_not_summing_to_total() {
    assert_market_err(
        EscrowPot::validate_distribution(&entries(&[90, 9])),
        MarketError::InvalidDistribution,
    );
    assert_market_err(
        EscrowPot::validate_distribution(&entries(&[90, 11])),
        MarketError::InvalidDistribution,
    );
}

#[test]
fn rejects_empty_list() {
    assert_market_err(
        EscrowPot::validate_distribution(&[]),
        MarketError::InvalidDistribution,
    );
}

#[test]
fn rejects_more_recipients_than_allowed() {
    assert_market_err(
        EscrowPot::validate_distribution(&entries(&[20, 20, 20, 10, 10, 10, 10])),
        MarketError::InvalidDistribution,
    );
}

#[test]
fn rejects_zero_share() {
    assert_market_err(
        EscrowPot::validate_distribution(&entries(&[100, 0])),
        MarketError::InvalidDistribution,
    );
}

#[test]
fn rejects_duplicate_recipient() {
    let account = Pubkey::new_unique();
    let list = vec![
        DistributionEntry {
            payment_account: account,
            share: 50,
        },
        DistributionEntry {
            payment_account: account,
            share: 50,
        },
    ];
    assert_market_err(
        EscrowPot::validate_distribution(&list),
        MarketError::InvalidDistribution,
    );
}

#[test]
fn pays_each_recipient_its_share_once() {
    // sellNft for 100 with [(a, 90), (b, 10)]; after the purchase a draws
    // 90, b draws 10, and the pot is exhausted
    let mut pot = funded_pot(100, &[90, 10]);
    let a = pot.recipients[0].payment_account;
    let b = pot.recipients[1].payment_account;

    assert_eq!(pot.settle_withdrawal(&a).unwrap(), 90);
    assert_eq!(pot.settle_withdrawal(&b).unwrap(), 10);
    assert_eq!(pot.recipients[0].withdrawn, 90);
    assert_eq!(pot.recipients[1].withdrawn, 10);

    assert_market_err(pot.settle_withdrawal(&a), MarketError::NothingToWithdraw);
    assert_market_err(pot.settle_withdrawal(&b), MarketError::NothingToWithdraw);
}

#[test]
fn repeat_withdrawal_changes_nothing() {
    let mut pot = funded_pot(1_000, &[100]);
    let a = pot.recipients[0].payment_account;

    assert_eq!(pot.settle_withdrawal(&a).unwrap(), 1_000);
    let withdrawn = pot.recipients[0].withdrawn;
    assert_market_err(pot.settle_withdrawal(&a), MarketError::NothingToWithdraw);
    assert_eq!(pot.recipients[0].withdrawn, withdrawn);
}

#[test]
fn rejects_unregistered_account() {
    let mut pot = funded_pot(100, &[90, 10]);
    assert_market_err(
        pot.settle_withdrawal(&Pubkey::new_unique()),
        MarketError::Unauthorized,
    );
}

#[test]
fn rejects_withdrawal_before_funding() {
    let mut pot = funded_pot(100, &[90, 10]);
    pot.funded = false;
    let a = pot.recipients[0].payment_account;
    assert_market_err(pot.settle_withdrawal(&a), MarketError::NothingToWithdraw);
}

#[test]
fn floor_division_leaves_residue_in_vault() {
    let mut pot = funded_pot(99, &[90, 10]);
    let a = pot.recipients[0].payment_account;
    let b = pot.recipients[1].payment_account;

    assert_eq!(pot.settle_withdrawal(&a).unwrap(), 89);
    assert_eq!(pot.settle_withdrawal(&b).unwrap(), 9);
}

/// Split 100 parts into 1..=6 positive shares
fn share_split() -> impl Strategy<Value = Vec<u8>> {
    prop::collection::btree_set(1u8..100, 0..=5).prop_map(|cuts| {
        let mut shares = Vec::new();
        let mut prev = 0u8;
        for cut in cuts {
            shares.push(cut - prev);
            prev = cut;
        }
        shares.push(100 - prev);
        shares
    })
}

proptest! {
    #[test]
    fn settled_payouts_never_exceed_the_pot(
        price in 0u64..=1_000_000_000_000,
        shares in share_split(),
    ) {
        let mut pot = funded_pot(price, &shares);
        let accounts: Vec<Pubkey> =
            pot.recipients.iter().map(|r| r.payment_account).collect();

        let mut total = 0u64;
        for (account, share) in accounts.iter().zip(shares.iter()) {
            let expected = (price as u128) * (*share as u128) / 100;
            match pot.settle_withdrawal(account) {
                Ok(amount) => {
                    prop_assert_eq!(amount as u128, expected);
                    total += amount;
                }
                // a zero entitlement is reported as nothing to withdraw
                Err(_) => prop_assert_eq!(expected, 0),
            }
        }
        prop_assert!(total <= price);

        // settlement is final for every recipient
        for account in &accounts {
            prop_assert!(pot.settle_withdrawal(account).is_err());
        }
    }
}
