use crate::{account::*, config::*, error::*, event::*, helpers::*};
use anchor_lang::prelude::*;
use anchor_spl::token::{self, Mint, MintTo, Token, TokenAccount};

#[derive(Accounts)]
pub struct StartSaleRound<'info> {
    #[account(mut, seeds = [b"ido"], bump = ido.bump)]
    ido: Account<'info, Ido>,
    #[account(address = ido.authority)]
    ido_authority: Signer<'info>,
    acdm_mint_authority: Signer<'info>,
    #[account(mut, address = ido.acdm_mint, mint::authority = acdm_mint_authority)]
    acdm_mint: Account<'info, Mint>,
    #[account(mut, seeds = [b"ido_acdm"], bump = ido.bump_acdm)]
    ido_acdm: Account<'info, TokenAccount>,
    token_program: Program<'info, Token>,
}
impl<'info> StartSaleRound<'info> {
    fn mint_acdm(&self, amount: u64) -> Result<()> {
        if amount == 0 {
            return Ok(());
        }

        let cpi_accounts = MintTo {
            mint: self.acdm_mint.to_account_info(),
            to: self.ido_acdm.to_account_info(),
            authority: self.acdm_mint_authority.to_account_info(),
        };
        let cpi_program = self.token_program.to_account_info();
        let cpi_ctx = CpiContext::new(cpi_program, cpi_accounts);
        token::mint_to(cpi_ctx, amount)
    }
}

pub fn start_sale_round(ctx: Context<StartSaleRound>) -> Result<()> {
    let ts = Clock::get()?.unix_timestamp;

    can_start_sale_round(&ctx.accounts.ido, ts)?;

    let ido = &mut ctx.accounts.ido;
    enter_state(ido, IdoState::SaleRound, ts);
    ido.acdm_price = next_sale_price(ido.sale_rounds_started, ido.acdm_price)?;
    ido.sale_rounds_started = ido
        .sale_rounds_started
        .checked_add(1)
        .ok_or(IdoError::Overflow)?;

    let amount_to_mint = sale_round_issue(ido.usdc_traded, ido.acdm_price);
    let round = ido.sale_rounds_started;
    let acdm_price = ido.acdm_price;

    ctx.accounts.mint_acdm(amount_to_mint)?;

    msg!("sale round {} at price {}", round, acdm_price);

    emit!(StartSaleRoundEvent {
        ts,
        round,
        acdm_price,
        minted_amount: amount_to_mint,
    });

    Ok(())
}
