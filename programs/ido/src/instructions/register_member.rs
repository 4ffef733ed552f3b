use crate::{account::*, error::*, event::*, referral::*};
use anchor_lang::prelude::*;

#[derive(Accounts)]
pub struct RegisterMember<'info> {
    #[account(
        init,
        payer = authority,
        seeds = [b"member", authority.key().as_ref()],
        bump,
        space = 8 + Member::LEN,
    )]
    member: Account<'info, Member>,
    #[account(mut)]
    authority: Signer<'info>,
    system_program: Program<'info, System>,
}

/// The referer has to be registered already, so with member records never
/// changing afterwards no referral cycle can be formed.
pub fn register_member<'info>(
    ctx: Context<'_, '_, 'info, 'info, RegisterMember<'info>>,
    referer: Option<Pubkey>,
) -> Result<()> {
    if let Some(referer) = referer {
        if referer == ctx.accounts.authority.key() {
            return err!(IdoError::SelfReferral);
        }

        get_referer_member(ctx.remaining_accounts, referer)?;
    }

    ctx.accounts.member.bump = ctx.bumps.member;
    ctx.accounts.member.referer = referer;

    emit!(RegisterMemberEvent {
        ts: Clock::get()?.unix_timestamp,
        authority: ctx.accounts.authority.key(),
        referer,
    });

    Ok(())
}
