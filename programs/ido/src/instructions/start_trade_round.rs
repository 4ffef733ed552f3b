use crate::{account::*, event::*, helpers::*};
use anchor_lang::prelude::*;
use anchor_spl::token::{self, Burn, Mint, Token, TokenAccount};

#[derive(Accounts)]
pub struct StartTradeRound<'info> {
    #[account(mut, seeds = [b"ido"], bump = ido.bump)]
    ido: Account<'info, Ido>,
    #[account(address = ido.authority)]
    ido_authority: Signer<'info>,
    #[account(mut, address = ido.acdm_mint)]
    acdm_mint: Account<'info, Mint>,
    #[account(mut, seeds = [b"ido_acdm"], bump = ido.bump_acdm)]
    ido_acdm: Account<'info, TokenAccount>,
    token_program: Program<'info, Token>,
}
impl<'info> StartTradeRound<'info> {
    fn burn_acdm(&self) -> Result<()> {
        if self.ido_acdm.amount == 0 {
            return Ok(());
        }

        let signer: &[&[&[u8]]] = &[&[b"ido".as_ref(), &[self.ido.bump]]];
        let cpi_accounts = Burn {
            mint: self.acdm_mint.to_account_info(),
            from: self.ido_acdm.to_account_info(),
            authority: self.ido.to_account_info(),
        };
        let cpi_program = self.token_program.to_account_info();
        let cpi_ctx = CpiContext::new_with_signer(cpi_program, cpi_accounts, signer);
        token::burn(cpi_ctx, self.ido_acdm.amount)
    }
}

pub fn start_trade_round(ctx: Context<StartTradeRound>) -> Result<()> {
    let ts = Clock::get()?.unix_timestamp;
    let unsold = ctx.accounts.ido_acdm.amount;

    can_start_trade_round(&ctx.accounts.ido, ts, unsold == 0)?;

    enter_state(&mut ctx.accounts.ido, IdoState::TradeRound, ts);

    ctx.accounts.burn_acdm()?;

    emit!(StartTradeRoundEvent {
        ts,
        burned_amount: unsold,
    });

    Ok(())
}
