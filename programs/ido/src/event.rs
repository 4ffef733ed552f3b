use anchor_lang::prelude::*;

#[event]
pub struct InitializeEvent {
    pub ts: i64,
    pub authority: Pubkey,
    pub round_time: i64,
}

#[event]
pub struct RegisterMemberEvent {
    pub ts: i64,
    pub authority: Pubkey,
    pub referer: Option<Pubkey>,
}

#[event]
pub struct StartSaleRoundEvent {
    pub ts: i64,
    pub round: u64,
    pub acdm_price: u64,
    pub minted_amount: u64,
}

#[event]
pub struct BuyAcdmEvent {
    pub ts: i64,
    pub buyer: Pubkey,
    pub amount: u64,
    pub usdc_amount: u64,
}

#[event]
pub struct StartTradeRoundEvent {
    pub ts: i64,
    pub burned_amount: u64,
}

/// The `id` here is the one the order PDAs were derived from.
#[event]
pub struct AddOrderEvent {
    pub ts: i64,
    pub id: u64,
    pub seller: Pubkey,
    pub amount: u64,
    pub price: u64,
}

#[event]
pub struct RedeemOrderEvent {
    pub ts: i64,
    pub id: u64,
    pub buyer: Pubkey,
    pub amount: u64,
    pub usdc_amount: u64,
}

#[event]
pub struct RemoveOrderEvent {
    pub ts: i64,
    pub id: u64,
    pub returned_amount: u64,
}

#[event]
pub struct WithdrawIdoUsdcEvent {
    pub ts: i64,
    pub amount: u64,
}

#[event]
pub struct EndIdoEvent {
    pub ts: i64,
}
