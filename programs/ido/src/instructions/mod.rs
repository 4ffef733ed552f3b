mod add_order;
mod buy_acdm;
mod end_ido;
mod initialize;
mod redeem_order;
mod register_member;
mod remove_order;
mod start_sale_round;
mod start_trade_round;
mod withdraw_ido_usdc;

// admin
pub use self::{
    end_ido::*, initialize::*, start_sale_round::*, start_trade_round::*, withdraw_ido_usdc::*,
};
// members
pub use self::{add_order::*, buy_acdm::*, redeem_order::*, register_member::*, remove_order::*};
