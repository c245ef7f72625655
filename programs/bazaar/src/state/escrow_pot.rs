use anchor_lang::prelude::*;

use crate::constants::{MAX_RECIPIENTS, TOTAL_SHARE_PARTS};
use crate::error::MarketError;

/// Custody record for the proceeds of one sale.
///
/// A fresh pot is created at every listing and never reused: its PDA is
/// seeded with the sale manager's listing counter. Funds become withdrawable
/// by the distribution list only once `funded` is set, which happens exactly
/// once — at purchase for a fixed-price sale, at claim for an auction.
#[account]
#[derive(InitSpace)]
pub struct EscrowPot {
    /// Sale manager this pot was created for
    pub sale_manager: Pubkey,
    /// Listing counter value at creation; PDA nonce
    pub index: u64,
    /// Token account holding the escrowed payment funds, authority = this pot
    pub payment_vault: Pubkey,
    /// Listing price. For auctions this starts at the reserve price and is
    /// overwritten with the final accepted bid at claim time.
    pub price: u64,
    /// Set once sale proceeds are final and withdrawable
    pub funded: bool,
    /// Revenue split, shares summing to `TOTAL_SHARE_PARTS`
    #[max_len(MAX_RECIPIENTS)]
    pub recipients: Vec<Recipient>,
    /// Canonical bump
    pub bump: u8,
}

/// One revenue recipient and its settlement progress
#[derive(AnchorSerialize, AnchorDeserialize, Clone, InitSpace)]
pub struct Recipient {
    /// Payment token account registered to receive this share
    pub payment_account: Pubkey,
    /// Share weight out of `TOTAL_SHARE_PARTS`
    pub share: u8,
    /// Amount already paid out to this recipient
    pub withdrawn: u64,
}

/// Instruction argument describing one entry of a distribution list
#[derive(AnchorSerialize, AnchorDeserialize, Clone)]
pub struct DistributionEntry {
    pub payment_account: Pubkey,
    pub share: u8,
}

impl EscrowPot {
    /// Check a caller-supplied distribution list: 1..=MAX_RECIPIENTS unique
    /// recipients with positive shares summing to exactly the fixed total.
    pub fn validate_distribution(entries: &[DistributionEntry]) -> Result<()> {
        require!(
            !entries.is_empty() && entries.len() <= MAX_RECIPIENTS,
            MarketError::InvalidDistribution
        );
        let mut total: u64 = 0;
        for (i, entry) in entries.iter().enumerate() {
            require!(entry.share > 0, MarketError::InvalidDistribution);
            let duplicate = entries[..i]
                .iter()
                .any(|prev| prev.payment_account == entry.payment_account);
            require!(!duplicate, MarketError::InvalidDistribution);
            total += entry.share as u64;
        }
        require!(total == TOTAL_SHARE_PARTS, MarketError::InvalidDistribution);
        Ok(())
    }

    /// Record a validated distribution list with zeroed settlement progress
    pub fn assign_distribution(&mut self, entries: &[DistributionEntry]) {
        self.recipients = entries
            .iter()
            .map(|entry| Recipient {
                payment_account: entry.payment_account,
                share: entry.share,
                withdrawn: 0,
            })
            .collect();
    }

    /// Total amount a share is entitled to out of `price`, floor division
    pub fn entitlement(price: u64, share: u8) -> Result<u64> {
        let amount = (price as u128)
            .checked_mul(share as u128)
            .ok_or(MarketError::MathOverflow)?
            .checked_div(TOTAL_SHARE_PARTS as u128)
            .ok_or(MarketError::MathOverflow)?;
        u64::try_from(amount).map_err(|_| error!(MarketError::MathOverflow))
    }

    /// Settle the next payout for `payment_account` and return the amount
    /// owed. The books are updated before any transfer happens, so a repeat
    /// call past full settlement fails with `NothingToWithdraw` and moves
    /// nothing.
    pub fn settle_withdrawal(&mut self, payment_account: &Pubkey) -> Result<u64> {
        require!(self.funded, MarketError::NothingToWithdraw);
        let price = self.price;
        let entry = self
            .recipients
            .iter_mut()
            .find(|r| r.payment_account == *payment_account)
            .ok_or(MarketError::Unauthorized)?;
        let entitled = Self::entitlement(price, entry.share)?;
        let payable = entitled.saturating_sub(entry.withdrawn);
        require!(payable > 0, MarketError::NothingToWithdraw);
        entry.withdrawn = entry
            .withdrawn
            .checked_add(payable)
            .ok_or(MarketError::MathOverflow)?;
        Ok(payable)
    }
}
