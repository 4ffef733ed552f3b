use crate::{account::*, error::*, event::*, fees::*, helpers::*, referral::*};
use anchor_lang::prelude::*;
use anchor_spl::token::{self, Token, TokenAccount, Transfer};

#[derive(Accounts)]
#[instruction(id: u64)]
pub struct RedeemOrder<'info> {
    #[account(mut, seeds = [b"ido"], bump = ido.bump)]
    ido: Box<Account<'info, Ido>>,
    #[account(mut, seeds = [b"ido_usdc"], bump = ido.bump_usdc)]
    ido_usdc: Box<Account<'info, TokenAccount>>,
    #[account(seeds = [b"order", id.to_le_bytes().as_ref()], bump = order.bump)]
    order: Account<'info, Order>,
    #[account(mut, seeds = [b"order_acdm", id.to_le_bytes().as_ref()], bump = order.bump_acdm)]
    order_acdm: Box<Account<'info, TokenAccount>>,
    buyer: Signer<'info>,
    #[account(mut, token::mint = ido.acdm_mint)]
    buyer_acdm: Box<Account<'info, TokenAccount>>,
    #[account(mut, token::mint = ido.usdc_mint, token::authority = buyer)]
    buyer_usdc: Box<Account<'info, TokenAccount>>,
    /// CHECK: only used to find the seller's member record
    #[account(address = order.authority)]
    seller: UncheckedAccount<'info>,
    #[account(seeds = [b"member", seller.key().as_ref()], bump = seller_member.bump)]
    seller_member: Account<'info, Member>,
    #[account(mut, token::mint = ido.usdc_mint, token::authority = order.authority)]
    seller_usdc: Box<Account<'info, TokenAccount>>,
    token_program: Program<'info, Token>,
}
impl<'info> RedeemOrder<'info> {
    fn transfer_usdc_to_seller(&self, amount: u64) -> Result<()> {
        let cpi_accounts = Transfer {
            from: self.buyer_usdc.to_account_info(),
            to: self.seller_usdc.to_account_info(),
            authority: self.buyer.to_account_info(),
        };
        let cpi_program = self.token_program.to_account_info();
        let cpi_ctx = CpiContext::new(cpi_program, cpi_accounts);
        token::transfer(cpi_ctx, amount)
    }

    fn transfer_acdm_to_buyer(&self, id: u64, amount: u64) -> Result<()> {
        let signer: &[&[&[u8]]] = &[&[b"order".as_ref(), &id.to_le_bytes(), &[self.order.bump]]];
        let cpi_accounts = Transfer {
            from: self.order_acdm.to_account_info(),
            to: self.buyer_acdm.to_account_info(),
            authority: self.order.to_account_info(),
        };
        let cpi_program = self.token_program.to_account_info();
        let cpi_ctx = CpiContext::new_with_signer(cpi_program, cpi_accounts, signer);
        token::transfer(cpi_ctx, amount)
    }
}

/// Fills `acdm_amount` of the order. The order stays open even when its
/// escrow runs empty; only the seller closes it.
pub fn redeem_order<'info>(
    ctx: Context<'_, '_, 'info, 'info, RedeemOrder<'info>>,
    id: u64,
    acdm_amount: u64,
) -> Result<()> {
    is_trade_round(&ctx.accounts.ido)?;

    require!(acdm_amount != 0, IdoError::ZeroAmount);
    require!(
        acdm_amount <= ctx.accounts.order_acdm.amount,
        IdoError::InsufficientOrderAmount
    );

    let usdc_amount = usdc_cost(acdm_amount, ctx.accounts.order.price)?;
    ctx.accounts.ido.usdc_traded = ctx
        .accounts
        .ido
        .usdc_traded
        .checked_add(usdc_amount)
        .ok_or(IdoError::Overflow)?;

    let (usdc_amount_to_seller, fee) = trade_split(usdc_amount);

    send_to_referers_and_ido(
        fee,
        &ctx.accounts.seller_member,
        &ctx.accounts.buyer,
        &ctx.accounts.buyer_usdc,
        &ctx.accounts.ido_usdc,
        &ctx.accounts.token_program,
        ctx.remaining_accounts,
    )?;

    ctx.accounts.transfer_usdc_to_seller(usdc_amount_to_seller)?;

    ctx.accounts.transfer_acdm_to_buyer(id, acdm_amount)?;

    emit!(RedeemOrderEvent {
        ts: Clock::get()?.unix_timestamp,
        id,
        buyer: ctx.accounts.buyer.key(),
        amount: acdm_amount,
        usdc_amount,
    });

    Ok(())
}
