use crate::{account::*, config::*, error::*, event::*};
use anchor_lang::prelude::*;
use anchor_spl::token::{Mint, Token, TokenAccount};

#[derive(Accounts)]
pub struct Initialize<'info> {
    #[account(init, payer = ido_authority, seeds = [b"ido"], bump, space = 8 + Ido::LEN)]
    ido: Account<'info, Ido>,
    #[account(mut)]
    ido_authority: Signer<'info>,
    acdm_mint: Account<'info, Mint>,
    #[account(
        init,
        payer = ido_authority,
        seeds = [b"ido_acdm"],
        bump,
        token::authority = ido,
        token::mint = acdm_mint,
    )]
    ido_acdm: Account<'info, TokenAccount>,
    usdc_mint: Account<'info, Mint>,
    #[account(
        init,
        payer = ido_authority,
        seeds = [b"ido_usdc"],
        bump,
        token::authority = ido,
        token::mint = usdc_mint,
    )]
    ido_usdc: Account<'info, TokenAccount>,
    rent: Sysvar<'info, Rent>,
    token_program: Program<'info, Token>,
    system_program: Program<'info, System>,
}

pub fn initialize(ctx: Context<Initialize>, round_time: i64) -> Result<()> {
    if round_time < 0 {
        return err!(IdoError::RoundTimeInvalid);
    }

    let ts = Clock::get()?.unix_timestamp;

    let ido = &mut ctx.accounts.ido;
    ido.bump = ctx.bumps.ido;
    ido.bump_acdm = ctx.bumps.ido_acdm;
    ido.bump_usdc = ctx.bumps.ido_usdc;
    ido.authority = ctx.accounts.ido_authority.key();
    ido.state = IdoState::NotStarted;
    ido.acdm_mint = ctx.accounts.acdm_mint.key();
    ido.usdc_mint = ctx.accounts.usdc_mint.key();
    ido.usdc_traded = INITIAL_ISSUE * INITIAL_PRICE;
    ido.round_time = round_time;
    ido.current_state_start_ts = ts;

    emit!(InitializeEvent {
        ts,
        authority: ido.authority,
        round_time,
    });

    Ok(())
}
