use crate::{account::*, error::*, event::*, fees::*, helpers::*, referral::*};
use anchor_lang::prelude::*;
use anchor_spl::token::{self, Token, TokenAccount, Transfer};

#[derive(Accounts)]
pub struct BuyAcdm<'info> {
    #[account(seeds = [b"ido"], bump = ido.bump)]
    ido: Account<'info, Ido>,
    #[account(mut, seeds = [b"ido_acdm"], bump = ido.bump_acdm)]
    ido_acdm: Account<'info, TokenAccount>,
    #[account(mut, seeds = [b"ido_usdc"], bump = ido.bump_usdc)]
    ido_usdc: Account<'info, TokenAccount>,
    buyer: Signer<'info>,
    #[account(seeds = [b"member", buyer.key().as_ref()], bump = buyer_member.bump)]
    buyer_member: Account<'info, Member>,
    #[account(mut, token::mint = ido.acdm_mint)]
    buyer_acdm: Account<'info, TokenAccount>,
    #[account(mut, token::mint = ido.usdc_mint, token::authority = buyer)]
    buyer_usdc: Account<'info, TokenAccount>,
    token_program: Program<'info, Token>,
}
impl<'info> BuyAcdm<'info> {
    fn transfer_acdm(&self, amount: u64) -> Result<()> {
        let signer: &[&[&[u8]]] = &[&[b"ido".as_ref(), &[self.ido.bump]]];
        let cpi_accounts = Transfer {
            from: self.ido_acdm.to_account_info(),
            to: self.buyer_acdm.to_account_info(),
            authority: self.ido.to_account_info(),
        };
        let cpi_program = self.token_program.to_account_info();
        let cpi_ctx = CpiContext::new_with_signer(cpi_program, cpi_accounts, signer);
        token::transfer(cpi_ctx, amount)
    }
}

pub fn buy_acdm<'info>(
    ctx: Context<'_, '_, 'info, 'info, BuyAcdm<'info>>,
    acdm_amount: u64,
) -> Result<()> {
    is_sale_round(&ctx.accounts.ido)?;

    require!(acdm_amount != 0, IdoError::ZeroAmount);
    require!(
        acdm_amount <= ctx.accounts.ido_acdm.amount,
        IdoError::InsufficientSupply
    );

    let usdc_amount = usdc_cost(acdm_amount, ctx.accounts.ido.acdm_price)?;

    send_to_referers_and_ido(
        sale_split(usdc_amount)?,
        &ctx.accounts.buyer_member,
        &ctx.accounts.buyer,
        &ctx.accounts.buyer_usdc,
        &ctx.accounts.ido_usdc,
        &ctx.accounts.token_program,
        ctx.remaining_accounts,
    )?;

    ctx.accounts.transfer_acdm(acdm_amount)?;

    emit!(BuyAcdmEvent {
        ts: Clock::get()?.unix_timestamp,
        buyer: ctx.accounts.buyer.key(),
        amount: acdm_amount,
        usdc_amount,
    });

    Ok(())
}
