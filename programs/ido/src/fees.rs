use crate::{config::*, error::*};
use anchor_lang::prelude::*;

/// USDC routing of a single payment. `to_ido` is what is left for the
/// treasury once the referer shares that actually get paid are taken out.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct FeeSplit {
    pub to_ido: u64,
    pub to_referer: u64,
    pub to_referer2: u64,
}

impl FeeSplit {
    /// Drops the shares of referral levels beyond `depth`, leaving them with
    /// the treasury.
    pub fn routed(self, depth: usize) -> Self {
        let to_referer = if depth >= 1 { self.to_referer } else { 0 };
        let to_referer2 = if depth >= 2 { self.to_referer2 } else { 0 };

        Self {
            to_ido: self.to_ido + (self.to_referer - to_referer) + (self.to_referer2 - to_referer2),
            to_referer,
            to_referer2,
        }
    }

    pub fn total(&self) -> u64 {
        self.to_ido + self.to_referer + self.to_referer2
    }
}

/// Split of a primary sale payment: 5% and 3% to the buyer's referers, the
/// rest to the treasury.
pub fn sale_split(usdc_amount: u64) -> Result<FeeSplit> {
    let to_referer = usdc_amount / SALE_REFERER_DIVISOR;
    let to_referer2 = usdc_amount
        .checked_mul(SALE_REFERER2_PERCENT)
        .ok_or(IdoError::Overflow)?
        / 100;

    Ok(FeeSplit {
        to_ido: usdc_amount - to_referer - to_referer2,
        to_referer,
        to_referer2,
    })
}

/// Split of an order payment into the seller's part (95%) and the fee, which
/// goes half and half to the seller's referers.
pub fn trade_split(usdc_amount: u64) -> (u64, FeeSplit) {
    let fee = usdc_amount / TRADE_FEE_DIVISOR;
    let to_referer = fee / 2;
    let to_referer2 = fee - to_referer;

    (
        usdc_amount - fee,
        FeeSplit {
            to_ido: 0,
            to_referer,
            to_referer2,
        },
    )
}

pub fn usdc_cost(acdm_amount: u64, price: u64) -> Result<u64> {
    acdm_amount
        .checked_mul(price)
        .ok_or_else(|| error!(IdoError::Overflow))
}
