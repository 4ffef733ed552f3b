use crate::{account::*, event::*};
use anchor_lang::prelude::*;
use anchor_spl::token::{self, Token, TokenAccount, Transfer};

#[derive(Accounts)]
pub struct WithdrawIdoUsdc<'info> {
    #[account(seeds = [b"ido"], bump = ido.bump)]
    ido: Account<'info, Ido>,
    #[account(address = ido.authority)]
    ido_authority: Signer<'info>,
    #[account(mut, seeds = [b"ido_usdc"], bump = ido.bump_usdc)]
    ido_usdc: Account<'info, TokenAccount>,
    #[account(mut, token::mint = ido.usdc_mint)]
    to: Account<'info, TokenAccount>,
    token_program: Program<'info, Token>,
}
impl<'info> WithdrawIdoUsdc<'info> {
    fn transfer(&self, amount: u64) -> Result<()> {
        let signer: &[&[&[u8]]] = &[&[b"ido".as_ref(), &[self.ido.bump]]];
        let cpi_accounts = Transfer {
            from: self.ido_usdc.to_account_info(),
            to: self.to.to_account_info(),
            authority: self.ido.to_account_info(),
        };
        let cpi_program = self.token_program.to_account_info();
        let cpi_ctx = CpiContext::new_with_signer(cpi_program, cpi_accounts, signer);
        token::transfer(cpi_ctx, amount)
    }
}

pub fn withdraw_ido_usdc(ctx: Context<WithdrawIdoUsdc>) -> Result<()> {
    let amount = ctx.accounts.ido_usdc.amount;

    if amount != 0 {
        ctx.accounts.transfer(amount)?;
    }

    emit!(WithdrawIdoUsdcEvent {
        ts: Clock::get()?.unix_timestamp,
        amount,
    });

    Ok(())
}
