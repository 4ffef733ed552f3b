use crate::{account::*, error::*};
use anchor_lang::prelude::*;

pub(crate) fn round_time_over(ido: &Ido, ts: i64) -> Result<()> {
    if ts.saturating_sub(ido.current_state_start_ts) < ido.round_time {
        err!(IdoError::CannotEndRound)
    } else {
        Ok(())
    }
}

/// Moves `ido` into `state`, starting its round clock at `ts`.
pub(crate) fn enter_state(ido: &mut Ido, state: IdoState, ts: i64) {
    ido.state = state;
    ido.current_state_start_ts = ts;

    if state == IdoState::TradeRound {
        ido.usdc_traded = 0;
    }
}

pub(crate) fn is_sale_round(ido: &Ido) -> Result<()> {
    match ido.state {
        IdoState::NotStarted => err!(IdoError::NotSaleRound),
        IdoState::SaleRound => Ok(()),
        IdoState::TradeRound => err!(IdoError::NotSaleRound),
        IdoState::Over => err!(IdoError::IdoIsOver),
    }
}

pub(crate) fn is_trade_round(ido: &Ido) -> Result<()> {
    match ido.state {
        IdoState::NotStarted => err!(IdoError::NotTradeRound),
        IdoState::SaleRound => err!(IdoError::NotTradeRound),
        IdoState::TradeRound => Ok(()),
        IdoState::Over => err!(IdoError::IdoIsOver),
    }
}

pub(crate) fn can_start_sale_round(ido: &Ido, ts: i64) -> Result<()> {
    match ido.state {
        IdoState::NotStarted => Ok(()),
        IdoState::SaleRound => err!(IdoError::RoundAlreadyStarted),
        IdoState::TradeRound => round_time_over(ido, ts),
        IdoState::Over => err!(IdoError::IdoIsOver),
    }
}

/// A sale round may end early once everything it issued is sold.
pub(crate) fn can_start_trade_round(ido: &Ido, ts: i64, sold_out: bool) -> Result<()> {
    match ido.state {
        IdoState::NotStarted => err!(IdoError::NotSaleRound),
        IdoState::SaleRound => {
            if sold_out {
                return Ok(());
            }

            round_time_over(ido, ts)
        }
        IdoState::TradeRound => err!(IdoError::RoundAlreadyStarted),
        IdoState::Over => err!(IdoError::IdoIsOver),
    }
}

pub(crate) fn can_end_ido(ido: &Ido, ts: i64) -> Result<()> {
    match ido.state {
        IdoState::NotStarted => err!(IdoError::NotTradeRound),
        IdoState::SaleRound => err!(IdoError::NotTradeRound),
        IdoState::TradeRound => round_time_over(ido, ts),
        IdoState::Over => err!(IdoError::IdoIsOver),
    }
}
