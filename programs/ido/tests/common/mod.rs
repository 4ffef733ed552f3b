#![allow(dead_code)]

use anchor_lang::{
    solana_program::{
        account_info::AccountInfo, clock::Clock, entrypoint::ProgramResult,
        program_pack::Pack, pubkey::Pubkey, system_instruction, system_program, sysvar,
    },
    AccountDeserialize, InstructionData, ToAccountMetas,
};
use ido::{
    account::{Ido, Member, Order},
    error::IdoError,
};
use solana_program_test::{processor, BanksClientError, ProgramTest, ProgramTestContext};
use solana_sdk::{
    compute_budget::ComputeBudgetInstruction,
    instruction::{AccountMeta, Instruction, InstructionError},
    signature::{Keypair, Signer},
    transaction::{Transaction, TransactionError},
};

pub const LAMPORTS_PER_USER: u64 = 1_000_000_000;

fn process_instruction(program_id: &Pubkey, accounts: &[AccountInfo], data: &[u8]) -> ProgramResult {
    // the generated entry ties the slice lifetime to the account data lifetime
    let accounts = Box::leak(Box::new(accounts.to_vec()));
    ido::entry(program_id, accounts, data)
}

pub fn ido_pda() -> Pubkey {
    Pubkey::find_program_address(&[b"ido"], &ido::ID).0
}

pub fn ido_acdm_pda() -> Pubkey {
    Pubkey::find_program_address(&[b"ido_acdm"], &ido::ID).0
}

pub fn ido_usdc_pda() -> Pubkey {
    Pubkey::find_program_address(&[b"ido_usdc"], &ido::ID).0
}

pub fn member_pda(owner: &Pubkey) -> Pubkey {
    Pubkey::find_program_address(&[b"member", owner.as_ref()], &ido::ID).0
}

pub fn order_pda(id: u64) -> Pubkey {
    Pubkey::find_program_address(&[b"order", id.to_le_bytes().as_ref()], &ido::ID).0
}

pub fn order_acdm_pda(id: u64) -> Pubkey {
    Pubkey::find_program_address(&[b"order_acdm", id.to_le_bytes().as_ref()], &ido::ID).0
}

fn instruction(
    accounts: impl ToAccountMetas,
    data: impl InstructionData,
    remaining_accounts: Vec<AccountMeta>,
) -> Instruction {
    let mut metas = accounts.to_account_metas(None);
    metas.extend(remaining_accounts);

    Instruction {
        program_id: ido::ID,
        accounts: metas,
        data: data.data(),
    }
}

pub fn assert_ido_error(result: Result<(), BanksClientError>, expected: IdoError) {
    assert_custom_error(result, expected.into());
}

pub fn assert_custom_error(result: Result<(), BanksClientError>, expected: u32) {
    match result.unwrap_err().unwrap() {
        TransactionError::InstructionError(_, InstructionError::Custom(code)) => {
            assert_eq!(code, expected)
        }
        err => panic!("unexpected error: {err:?}"),
    }
}

pub struct User {
    pub keypair: Keypair,
    pub acdm: Pubkey,
    pub usdc: Pubkey,
}

impl User {
    pub fn key(&self) -> Pubkey {
        self.keypair.pubkey()
    }

    pub fn member(&self) -> Pubkey {
        member_pda(&self.key())
    }
}

/// Remaining accounts of a referral chain: the first referer's member record
/// followed by the referers' USDC accounts.
pub fn referral_accounts(referer: &User, referer2: Option<&User>) -> Vec<AccountMeta> {
    let mut accounts = vec![
        AccountMeta::new_readonly(referer.member(), false),
        AccountMeta::new(referer.usdc, false),
    ];
    if let Some(referer2) = referer2 {
        accounts.push(AccountMeta::new(referer2.usdc, false));
    }
    accounts
}

pub struct Harness {
    pub context: ProgramTestContext,
    pub ido_authority: Keypair,
    pub acdm_mint_authority: Keypair,
    pub usdc_mint_authority: Keypair,
    pub acdm_mint: Pubkey,
    pub usdc_mint: Pubkey,
    sent: u32,
}

impl Harness {
    pub async fn new() -> Self {
        let program_test = ProgramTest::new("ido", ido::ID, processor!(process_instruction));
        let context = program_test.start_with_context().await;

        let mut harness = Self {
            context,
            ido_authority: Keypair::new(),
            acdm_mint_authority: Keypair::new(),
            usdc_mint_authority: Keypair::new(),
            acdm_mint: Pubkey::default(),
            usdc_mint: Pubkey::default(),
            sent: 0,
        };

        let ido_authority = harness.ido_authority.pubkey();
        harness.airdrop(&ido_authority).await;

        let acdm_mint_authority = harness.acdm_mint_authority.pubkey();
        harness.acdm_mint = harness.create_mint(&acdm_mint_authority, 2).await;
        let usdc_mint_authority = harness.usdc_mint_authority.pubkey();
        harness.usdc_mint = harness.create_mint(&usdc_mint_authority, 6).await;

        harness
    }

    /// Harness with the ido initialized and its first sale round open.
    pub async fn in_sale_round(round_time: i64) -> Self {
        let mut harness = Self::new().await;
        harness.initialize(round_time).await.unwrap();
        harness.start_sale_round().await.unwrap();
        harness
    }

    pub async fn process(
        &mut self,
        instructions: &[Instruction],
        signers: &[&Keypair],
    ) -> Result<(), BanksClientError> {
        // a distinct compute limit keeps repeated instructions from sharing a signature
        self.sent += 1;
        let mut all_instructions =
            vec![ComputeBudgetInstruction::set_compute_unit_limit(1_400_000 - self.sent)];
        all_instructions.extend_from_slice(instructions);

        let mut all_signers = vec![&self.context.payer];
        all_signers.extend_from_slice(signers);

        let blockhash = self.context.banks_client.get_latest_blockhash().await?;
        let tx = Transaction::new_signed_with_payer(
            &all_instructions,
            Some(&self.context.payer.pubkey()),
            all_signers.as_slice(),
            blockhash,
        );
        self.context.banks_client.process_transaction(tx).await
    }

    pub async fn airdrop(&mut self, to: &Pubkey) {
        let ix = system_instruction::transfer(&self.context.payer.pubkey(), to, LAMPORTS_PER_USER);
        self.process(&[ix], &[]).await.unwrap();
    }

    async fn create_mint(&mut self, authority: &Pubkey, decimals: u8) -> Pubkey {
        let mint = Keypair::new();
        let rent = self.context.banks_client.get_rent().await.unwrap();
        let ixs = [
            system_instruction::create_account(
                &self.context.payer.pubkey(),
                &mint.pubkey(),
                rent.minimum_balance(spl_token::state::Mint::LEN),
                spl_token::state::Mint::LEN as u64,
                &spl_token::ID,
            ),
            spl_token::instruction::initialize_mint(
                &spl_token::ID,
                &mint.pubkey(),
                authority,
                None,
                decimals,
            )
            .unwrap(),
        ];
        self.process(&ixs, &[&mint]).await.unwrap();
        mint.pubkey()
    }

    pub async fn create_token_account(&mut self, mint: &Pubkey, owner: &Pubkey) -> Pubkey {
        let account = Keypair::new();
        let rent = self.context.banks_client.get_rent().await.unwrap();
        let ixs = [
            system_instruction::create_account(
                &self.context.payer.pubkey(),
                &account.pubkey(),
                rent.minimum_balance(spl_token::state::Account::LEN),
                spl_token::state::Account::LEN as u64,
                &spl_token::ID,
            ),
            spl_token::instruction::initialize_account(
                &spl_token::ID,
                &account.pubkey(),
                mint,
                owner,
            )
            .unwrap(),
        ];
        self.process(&ixs, &[&account]).await.unwrap();
        account.pubkey()
    }

    pub async fn user(&mut self) -> User {
        let keypair = Keypair::new();
        let owner = keypair.pubkey();
        self.airdrop(&owner).await;

        let acdm_mint = self.acdm_mint;
        let usdc_mint = self.usdc_mint;
        let acdm = self.create_token_account(&acdm_mint, &owner).await;
        let usdc = self.create_token_account(&usdc_mint, &owner).await;

        User {
            keypair,
            acdm,
            usdc,
        }
    }

    pub async fn mint_usdc(&mut self, to: &Pubkey, amount: u64) {
        let ix = spl_token::instruction::mint_to(
            &spl_token::ID,
            &self.usdc_mint,
            to,
            &self.usdc_mint_authority.pubkey(),
            &[],
            amount,
        )
        .unwrap();
        let authority = self.usdc_mint_authority.insecure_clone();
        self.process(&[ix], &[&authority]).await.unwrap();
    }

    pub async fn advance_clock(&mut self, seconds: i64) {
        let mut clock: Clock = self.context.banks_client.get_sysvar().await.unwrap();
        clock.unix_timestamp += seconds;
        self.context.set_sysvar(&clock);
    }

    pub async fn token_balance(&mut self, address: &Pubkey) -> u64 {
        let account = self
            .context
            .banks_client
            .get_account(*address)
            .await
            .unwrap()
            .unwrap();
        spl_token::state::Account::unpack(&account.data).unwrap().amount
    }

    pub async fn is_closed(&mut self, address: &Pubkey) -> bool {
        match self.context.banks_client.get_account(*address).await.unwrap() {
            Some(account) => account.lamports == 0,
            None => true,
        }
    }

    async fn fetch<T: AccountDeserialize>(&mut self, address: &Pubkey) -> T {
        let account = self
            .context
            .banks_client
            .get_account(*address)
            .await
            .unwrap()
            .unwrap();
        T::try_deserialize(&mut account.data.as_slice()).unwrap()
    }

    pub async fn ido(&mut self) -> Ido {
        self.fetch(&ido_pda()).await
    }

    pub async fn member(&mut self, owner: &Pubkey) -> Member {
        self.fetch(&member_pda(owner)).await
    }

    pub async fn order(&mut self, id: u64) -> Order {
        self.fetch(&order_pda(id)).await
    }

    pub async fn initialize(&mut self, round_time: i64) -> Result<(), BanksClientError> {
        let ix = instruction(
            ido::accounts::Initialize {
                ido: ido_pda(),
                ido_authority: self.ido_authority.pubkey(),
                acdm_mint: self.acdm_mint,
                ido_acdm: ido_acdm_pda(),
                usdc_mint: self.usdc_mint,
                ido_usdc: ido_usdc_pda(),
                rent: sysvar::rent::ID,
                token_program: spl_token::ID,
                system_program: system_program::ID,
            },
            ido::instruction::Initialize { round_time },
            vec![],
        );
        let ido_authority = self.ido_authority.insecure_clone();
        self.process(&[ix], &[&ido_authority]).await
    }

    pub async fn register_member(
        &mut self,
        user: &User,
        referer: Option<Pubkey>,
        remaining_accounts: Vec<AccountMeta>,
    ) -> Result<(), BanksClientError> {
        let ix = instruction(
            ido::accounts::RegisterMember {
                member: user.member(),
                authority: user.key(),
                system_program: system_program::ID,
            },
            ido::instruction::RegisterMember { referer },
            remaining_accounts,
        );
        self.process(&[ix], &[&user.keypair]).await
    }

    pub async fn start_sale_round(&mut self) -> Result<(), BanksClientError> {
        let ido_authority = self.ido_authority.insecure_clone();
        self.start_sale_round_as(&ido_authority).await
    }

    pub async fn start_sale_round_as(&mut self, ido_authority: &Keypair) -> Result<(), BanksClientError> {
        let ix = instruction(
            ido::accounts::StartSaleRound {
                ido: ido_pda(),
                ido_authority: ido_authority.pubkey(),
                acdm_mint_authority: self.acdm_mint_authority.pubkey(),
                acdm_mint: self.acdm_mint,
                ido_acdm: ido_acdm_pda(),
                token_program: spl_token::ID,
            },
            ido::instruction::StartSaleRound {},
            vec![],
        );
        let acdm_mint_authority = self.acdm_mint_authority.insecure_clone();
        self.process(&[ix], &[ido_authority, &acdm_mint_authority]).await
    }

    pub async fn buy_acdm(
        &mut self,
        buyer: &User,
        acdm_amount: u64,
        remaining_accounts: Vec<AccountMeta>,
    ) -> Result<(), BanksClientError> {
        let ix = instruction(
            ido::accounts::BuyAcdm {
                ido: ido_pda(),
                ido_acdm: ido_acdm_pda(),
                ido_usdc: ido_usdc_pda(),
                buyer: buyer.key(),
                buyer_member: buyer.member(),
                buyer_acdm: buyer.acdm,
                buyer_usdc: buyer.usdc,
                token_program: spl_token::ID,
            },
            ido::instruction::BuyAcdm { acdm_amount },
            remaining_accounts,
        );
        self.process(&[ix], &[&buyer.keypair]).await
    }

    pub async fn start_trade_round(&mut self) -> Result<(), BanksClientError> {
        let ido_authority = self.ido_authority.insecure_clone();
        self.start_trade_round_as(&ido_authority).await
    }

    pub async fn start_trade_round_as(&mut self, ido_authority: &Keypair) -> Result<(), BanksClientError> {
        let ix = instruction(
            ido::accounts::StartTradeRound {
                ido: ido_pda(),
                ido_authority: ido_authority.pubkey(),
                acdm_mint: self.acdm_mint,
                ido_acdm: ido_acdm_pda(),
                token_program: spl_token::ID,
            },
            ido::instruction::StartTradeRound {},
            vec![],
        );
        self.process(&[ix], &[ido_authority]).await
    }

    /// Lists an order under the id the ido hands out next and returns it.
    pub async fn add_order(
        &mut self,
        seller: &User,
        acdm_amount: u64,
        acdm_price: u64,
    ) -> Result<u64, BanksClientError> {
        let id = self.ido().await.orders;
        self.add_order_at(seller, id, acdm_amount, acdm_price).await?;
        Ok(id)
    }

    pub async fn add_order_at(
        &mut self,
        seller: &User,
        id: u64,
        acdm_amount: u64,
        acdm_price: u64,
    ) -> Result<(), BanksClientError> {
        let ix = instruction(
            ido::accounts::AddOrder {
                ido: ido_pda(),
                order: order_pda(id),
                acdm_mint: self.acdm_mint,
                order_acdm: order_acdm_pda(id),
                seller: seller.key(),
                seller_member: seller.member(),
                seller_acdm: seller.acdm,
                rent: sysvar::rent::ID,
                token_program: spl_token::ID,
                system_program: system_program::ID,
            },
            ido::instruction::AddOrder {
                acdm_amount,
                acdm_price,
            },
            vec![],
        );
        self.process(&[ix], &[&seller.keypair]).await
    }

    pub async fn redeem_order(
        &mut self,
        buyer: &User,
        seller: &User,
        id: u64,
        acdm_amount: u64,
        remaining_accounts: Vec<AccountMeta>,
    ) -> Result<(), BanksClientError> {
        let ix = instruction(
            ido::accounts::RedeemOrder {
                ido: ido_pda(),
                ido_usdc: ido_usdc_pda(),
                order: order_pda(id),
                order_acdm: order_acdm_pda(id),
                buyer: buyer.key(),
                buyer_acdm: buyer.acdm,
                buyer_usdc: buyer.usdc,
                seller: seller.key(),
                seller_member: seller.member(),
                seller_usdc: seller.usdc,
                token_program: spl_token::ID,
            },
            ido::instruction::RedeemOrder { id, acdm_amount },
            remaining_accounts,
        );
        self.process(&[ix], &[&buyer.keypair]).await
    }

    pub async fn remove_order(&mut self, seller: &User, id: u64) -> Result<(), BanksClientError> {
        let ix = instruction(
            ido::accounts::RemoveOrder {
                order: order_pda(id),
                order_acdm: order_acdm_pda(id),
                seller: seller.key(),
                seller_acdm: seller.acdm,
                token_program: spl_token::ID,
            },
            ido::instruction::RemoveOrder { id },
            vec![],
        );
        self.process(&[ix], &[&seller.keypair]).await
    }

    pub async fn withdraw_ido_usdc(&mut self, to: &Pubkey) -> Result<(), BanksClientError> {
        let ido_authority = self.ido_authority.insecure_clone();
        self.withdraw_ido_usdc_as(&ido_authority, to).await
    }

    pub async fn withdraw_ido_usdc_as(
        &mut self,
        ido_authority: &Keypair,
        to: &Pubkey,
    ) -> Result<(), BanksClientError> {
        let ix = instruction(
            ido::accounts::WithdrawIdoUsdc {
                ido: ido_pda(),
                ido_authority: ido_authority.pubkey(),
                ido_usdc: ido_usdc_pda(),
                to: *to,
                token_program: spl_token::ID,
            },
            ido::instruction::WithdrawIdoUsdc {},
            vec![],
        );
        self.process(&[ix], &[ido_authority]).await
    }

    pub async fn end_ido(&mut self) -> Result<(), BanksClientError> {
        let ido_authority = self.ido_authority.insecure_clone();
        self.end_ido_as(&ido_authority).await
    }

    pub async fn end_ido_as(&mut self, ido_authority: &Keypair) -> Result<(), BanksClientError> {
        let ix = instruction(
            ido::accounts::EndIdo {
                ido: ido_pda(),
                ido_authority: ido_authority.pubkey(),
            },
            ido::instruction::EndIdo {},
            vec![],
        );
        self.process(&[ix], &[ido_authority]).await
    }
}
