use crate::{account::*, event::*, helpers::*};
use anchor_lang::prelude::*;

#[derive(Accounts)]
pub struct EndIdo<'info> {
    #[account(mut, seeds = [b"ido"], bump = ido.bump)]
    ido: Account<'info, Ido>,
    #[account(address = ido.authority)]
    ido_authority: Signer<'info>,
}

pub fn end_ido(ctx: Context<EndIdo>) -> Result<()> {
    let ts = Clock::get()?.unix_timestamp;

    can_end_ido(&ctx.accounts.ido, ts)?;

    enter_state(&mut ctx.accounts.ido, IdoState::Over, ts);

    emit!(EndIdoEvent { ts });

    Ok(())
}
