use crate::error::*;
use anchor_lang::prelude::*;

pub const INITIAL_ISSUE: u64 = 10_000;
pub const INITIAL_PRICE: u64 = 100_000;

/// Divisor of the sale cost paid to the buyer's first referer (5%).
pub const SALE_REFERER_DIVISOR: u64 = 20;
/// Share of the sale cost paid to the buyer's second referer, in percent.
pub const SALE_REFERER2_PERCENT: u64 = 3;
/// Divisor of the trade proceeds withheld from the seller (5%).
pub const TRADE_FEE_DIVISOR: u64 = 20;

/// Price of the next sale round: 3% growth plus a fixed step of 40% of the
/// initial price.
pub fn sale_price_formula(prev_price: u64) -> Result<u64> {
    let grown = prev_price
        .checked_mul(103)
        .ok_or(IdoError::Overflow)?
        / 100;

    grown
        .checked_add(INITIAL_PRICE * 2 / 5)
        .ok_or_else(|| error!(IdoError::Overflow))
}

/// Price for the sale round about to start, given how many have started.
pub fn next_sale_price(sale_rounds_started: u64, prev_price: u64) -> Result<u64> {
    if sale_rounds_started == 0 {
        Ok(INITIAL_PRICE)
    } else {
        sale_price_formula(prev_price)
    }
}

pub const fn sale_round_issue(usdc_traded: u64, acdm_price: u64) -> u64 {
    usdc_traded / acdm_price
}
