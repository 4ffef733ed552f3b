use crate::{account::*, error::*, fees::*, ID};
use anchor_lang::prelude::*;
use anchor_spl::token::{self, Token, TokenAccount, Transfer};

/// Loads the member record of `referer` from the first remaining account.
pub fn get_referer_member<'info>(
    remaining_accounts: &'info [AccountInfo<'info>],
    referer: Pubkey,
) -> Result<Account<'info, Member>> {
    let Some(referer_member_info) = remaining_accounts.first() else {
        return err!(IdoError::RefererMemberAccountNotProvided);
    };

    let referer_member = Account::<Member>::try_from(referer_member_info)?;

    let pda_key =
        Pubkey::create_program_address(&[b"member", referer.as_ref(), &[referer_member.bump]], &ID)
            .map_err(|_| IdoError::RefererPda)?;
    if referer_member.key() != pda_key {
        return err!(IdoError::RefererPda);
    }

    Ok(referer_member)
}

fn get_referer_usdc<'info>(
    remaining_accounts: &'info [AccountInfo<'info>],
    index: usize,
    referer: Pubkey,
) -> Result<AccountInfo<'info>> {
    let Some(referer_usdc_info) = remaining_accounts.get(index) else {
        return err!(IdoError::RefererTokenAccountNotProvided);
    };

    let referer_usdc = Account::<TokenAccount>::try_from(referer_usdc_info)?;
    if referer_usdc.owner != referer {
        return err!(IdoError::RefererOwner);
    }

    Ok(referer_usdc.to_account_info())
}

fn transfer_usdc<'info>(
    from: &Account<'info, TokenAccount>,
    to: AccountInfo<'info>,
    authority: &Signer<'info>,
    token_program: &Program<'info, Token>,
    amount: u64,
) -> Result<()> {
    let cpi_accounts = Transfer {
        from: from.to_account_info(),
        to,
        authority: authority.to_account_info(),
    };
    let cpi_program = token_program.to_account_info();
    let cpi_ctx = CpiContext::new(cpi_program, cpi_accounts);
    token::transfer(cpi_ctx, amount)
}

/// Pays the referral shares of `split` to the referers of `member` and the
/// rest to the ido. Remaining accounts are expected as
/// `[referer_member, referer_usdc, referer2_usdc]`, the tail only as far as the
/// referral chain goes.
pub fn send_to_referers_and_ido<'info>(
    split: FeeSplit,
    member: &Member,
    buyer: &Signer<'info>,
    buyer_usdc: &Account<'info, TokenAccount>,
    ido_usdc: &Account<'info, TokenAccount>,
    token_program: &Program<'info, Token>,
    remaining_accounts: &'info [AccountInfo<'info>],
) -> Result<()> {
    let mut referer_usdc = None;
    let mut referer2_usdc = None;

    if let Some(referer) = member.referer {
        let referer_member = get_referer_member(remaining_accounts, referer)?;
        referer_usdc = Some(get_referer_usdc(remaining_accounts, 1, referer)?);

        if let Some(referer2) = referer_member.referer {
            referer2_usdc = Some(get_referer_usdc(remaining_accounts, 2, referer2)?);
        }
    }

    let depth = usize::from(referer_usdc.is_some()) + usize::from(referer2_usdc.is_some());
    let split = split.routed(depth);

    if let Some(referer_usdc) = referer_usdc {
        msg!("sending fee to first referer");
        transfer_usdc(buyer_usdc, referer_usdc, buyer, token_program, split.to_referer)?;
    }

    if let Some(referer2_usdc) = referer2_usdc {
        msg!("sending fee to second referer");
        transfer_usdc(buyer_usdc, referer2_usdc, buyer, token_program, split.to_referer2)?;
    }

    if split.to_ido == 0 {
        return Ok(());
    }
    transfer_usdc(
        buyer_usdc,
        ido_usdc.to_account_info(),
        buyer,
        token_program,
        split.to_ido,
    )
}
