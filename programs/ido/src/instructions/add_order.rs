use crate::{account::*, error::*, event::*, helpers::*};
use anchor_lang::prelude::*;
use anchor_spl::token::{self, Mint, Token, TokenAccount, Transfer};

#[derive(Accounts)]
pub struct AddOrder<'info> {
    #[account(mut, seeds = [b"ido"], bump = ido.bump)]
    ido: Account<'info, Ido>,
    #[account(
        init,
        payer = seller,
        seeds = [b"order", ido.orders.to_le_bytes().as_ref()],
        bump,
        space = 8 + Order::LEN,
    )]
    order: Account<'info, Order>,
    #[account(address = ido.acdm_mint)]
    acdm_mint: Account<'info, Mint>,
    #[account(
        init,
        payer = seller,
        seeds = [b"order_acdm", ido.orders.to_le_bytes().as_ref()],
        bump,
        token::authority = order,
        token::mint = acdm_mint,
    )]
    order_acdm: Account<'info, TokenAccount>,
    #[account(mut)]
    seller: Signer<'info>,
    #[account(seeds = [b"member", seller.key().as_ref()], bump = seller_member.bump)]
    seller_member: Account<'info, Member>,
    #[account(mut, token::mint = acdm_mint, token::authority = seller)]
    seller_acdm: Account<'info, TokenAccount>,
    rent: Sysvar<'info, Rent>,
    token_program: Program<'info, Token>,
    system_program: Program<'info, System>,
}
impl<'info> AddOrder<'info> {
    fn transfer_acdm(&self, amount: u64) -> Result<()> {
        let cpi_accounts = Transfer {
            from: self.seller_acdm.to_account_info(),
            to: self.order_acdm.to_account_info(),
            authority: self.seller.to_account_info(),
        };
        let cpi_program = self.token_program.to_account_info();
        let cpi_ctx = CpiContext::new(cpi_program, cpi_accounts);
        token::transfer(cpi_ctx, amount)
    }
}

/// The order lives at the PDAs of the id taken from `ido.orders`. A client
/// holding a stale counter fails the seeds check, so ids never collide; the
/// emitted event carries the id that was actually used.
pub fn add_order(ctx: Context<AddOrder>, acdm_amount: u64, acdm_price: u64) -> Result<()> {
    is_trade_round(&ctx.accounts.ido)?;

    require!(acdm_amount != 0, IdoError::ZeroAmount);
    require!(acdm_price != 0, IdoError::ZeroPrice);

    ctx.accounts.transfer_acdm(acdm_amount)?;

    ctx.accounts.order.bump = ctx.bumps.order;
    ctx.accounts.order.bump_acdm = ctx.bumps.order_acdm;
    ctx.accounts.order.authority = ctx.accounts.seller.key();
    ctx.accounts.order.price = acdm_price;

    let id = ctx.accounts.ido.orders;
    ctx.accounts.ido.orders = id.checked_add(1).ok_or(IdoError::Overflow)?;

    emit!(AddOrderEvent {
        ts: Clock::get()?.unix_timestamp,
        id,
        seller: ctx.accounts.seller.key(),
        amount: acdm_amount,
        price: acdm_price,
    });

    Ok(())
}
