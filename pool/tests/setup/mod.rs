use crate::constants::*;

use common_proxies::{proxy_pool, proxy_price_oracle};
use common_structs::{CollateralView, LiquidationCandidate};
use multiversx_sc::types::{
    BigUint, EgldOrEsdtTokenIdentifier, ManagedAddress, ReturnsNewManagedAddress, ReturnsResult,
    TestEsdtTransfer, TestTokenIdentifier,
};
use lending_pool::storage::Storage;
use multiversx_sc::contract_base::ContractBase;
use multiversx_sc_scenario::{
    api::StaticApi,
    imports::{ExpectMessage, TestAddress},
    ScenarioTxRun, ScenarioTxWhitebox, ScenarioWorld,
};

pub fn world() -> ScenarioWorld {
    let mut blockchain = ScenarioWorld::new();

    blockchain.register_contract(POOL_PATH, lending_pool::ContractBuilder);
    blockchain.register_contract(ORACLE_PATH, price_oracle::ContractBuilder);

    blockchain
}

pub fn asset(token: TestTokenIdentifier) -> EgldOrEsdtTokenIdentifier<StaticApi> {
    EgldOrEsdtTokenIdentifier::esdt(token.to_token_identifier())
}

pub fn big(amount: u64) -> BigUint<StaticApi> {
    BigUint::from(amount)
}

pub fn address(account: &TestAddress) -> ManagedAddress<StaticApi> {
    account.to_managed_address()
}

fn expect(error_message: &[u8]) -> ExpectMessage<'_> {
    ExpectMessage(core::str::from_utf8(error_message).unwrap())
}

pub struct LendingPoolTestState {
    pub world: ScenarioWorld,
    pub pool_sc: ManagedAddress<StaticApi>,
    pub oracle_sc: ManagedAddress<StaticApi>,
}

impl LendingPoolTestState {
    /// Pool and oracle deployed, penalties set, oracle unpaused with prices.
    /// No collateral is registered.
    pub fn new() -> Self {
        let mut world = world();
        setup_owner(&mut world);
        world.current_block().block_timestamp(0);

        let oracle_sc = setup_price_oracle(&mut world);
        let pool_sc = setup_lending_pool(&mut world, &oracle_sc);

        let mut state = Self {
            world,
            pool_sc,
            oracle_sc,
        };

        state.set_liquidation_penalty_protocol(PROTOCOL_PENALTY);
        state.set_liquidation_penalty_cleaner(CLEANER_PENALTY);
        setup_accounts(&mut state);

        state
    }

    /// Same as `new` with WEGLD and XEGLD registered as collateral.
    pub fn with_collaterals() -> Self {
        let mut state = Self::new();
        state.set_collateral(
            EGLD_TOKEN,
            HEALTH_FACTOR_THRESHOLD,
            LIQ_THRESHOLD,
            COLLATERAL_RATIO,
        );
        state.set_collateral(
            XEGLD_TOKEN,
            HEALTH_FACTOR_THRESHOLD,
            LIQ_THRESHOLD,
            XEGLD_COLLATERAL_RATIO,
        );
        state
    }

    pub fn change_timestamp(&mut self, timestamp: u64) {
        self.world.current_block().block_timestamp(timestamp);
    }

    // Oracle

    pub fn submit_price(&mut self, token: TestTokenIdentifier, price: u64) {
        self.world
            .tx()
            .from(OWNER_ADDRESS)
            .to(&self.oracle_sc)
            .typed(proxy_price_oracle::PriceOracleProxy)
            .set_price(asset(token), big(price))
            .run();
    }

    pub fn pause_oracle(&mut self) {
        self.world
            .tx()
            .from(OWNER_ADDRESS)
            .to(&self.oracle_sc)
            .typed(proxy_price_oracle::PriceOracleProxy)
            .pause_endpoint()
            .run();
    }

    pub fn unpause_oracle(&mut self) {
        self.world
            .tx()
            .from(OWNER_ADDRESS)
            .to(&self.oracle_sc)
            .typed(proxy_price_oracle::PriceOracleProxy)
            .unpause_endpoint()
            .run();
    }

    // Owner configuration

    pub fn set_collateral(
        &mut self,
        token: TestTokenIdentifier,
        health_factor_threshold: u64,
        liquidation_threshold: u64,
        collateralization_ratio: u64,
    ) {
        self.world
            .tx()
            .from(OWNER_ADDRESS)
            .to(&self.pool_sc)
            .typed(proxy_pool::LendingPoolProxy)
            .set_collateral(
                asset(token),
                big(health_factor_threshold),
                big(liquidation_threshold),
                big(collateralization_ratio),
            )
            .run();
    }

    pub fn set_collateral_error(
        &mut self,
        from: &TestAddress,
        token: TestTokenIdentifier,
        health_factor_threshold: u64,
        liquidation_threshold: u64,
        collateralization_ratio: u64,
        error_message: &[u8],
    ) {
        self.world
            .tx()
            .from(from.to_managed_address())
            .to(&self.pool_sc)
            .typed(proxy_pool::LendingPoolProxy)
            .set_collateral(
                asset(token),
                big(health_factor_threshold),
                big(liquidation_threshold),
                big(collateralization_ratio),
            )
            .returns(expect(error_message))
            .run();
    }

    pub fn set_interest_rate(&mut self, rate: u64) {
        self.world
            .tx()
            .from(OWNER_ADDRESS)
            .to(&self.pool_sc)
            .typed(proxy_pool::LendingPoolProxy)
            .set_interest_rate(big(rate))
            .run();
    }

    pub fn set_interest_rate_error(&mut self, from: &TestAddress, rate: u64, error_message: &[u8]) {
        self.world
            .tx()
            .from(from.to_managed_address())
            .to(&self.pool_sc)
            .typed(proxy_pool::LendingPoolProxy)
            .set_interest_rate(big(rate))
            .returns(expect(error_message))
            .run();
    }

    pub fn set_liquidation_penalty_protocol(&mut self, rate: u64) {
        self.world
            .tx()
            .from(OWNER_ADDRESS)
            .to(&self.pool_sc)
            .typed(proxy_pool::LendingPoolProxy)
            .set_liquidation_penalty_fee_rate_for_protocol(big(rate))
            .run();
    }

    pub fn set_liquidation_penalty_protocol_error(
        &mut self,
        from: &TestAddress,
        rate: u64,
        error_message: &[u8],
    ) {
        self.world
            .tx()
            .from(from.to_managed_address())
            .to(&self.pool_sc)
            .typed(proxy_pool::LendingPoolProxy)
            .set_liquidation_penalty_fee_rate_for_protocol(big(rate))
            .returns(expect(error_message))
            .run();
    }

    pub fn set_liquidation_penalty_cleaner(&mut self, rate: u64) {
        self.world
            .tx()
            .from(OWNER_ADDRESS)
            .to(&self.pool_sc)
            .typed(proxy_pool::LendingPoolProxy)
            .set_liquidation_penalty_fee_rate_for_cleaner(big(rate))
            .run();
    }

    pub fn set_liquidation_penalty_cleaner_error(
        &mut self,
        from: &TestAddress,
        rate: u64,
        error_message: &[u8],
    ) {
        self.world
            .tx()
            .from(from.to_managed_address())
            .to(&self.pool_sc)
            .typed(proxy_pool::LendingPoolProxy)
            .set_liquidation_penalty_fee_rate_for_cleaner(big(rate))
            .returns(expect(error_message))
            .run();
    }

    pub fn set_fee_receiver(&mut self, from: &TestAddress, receiver: ManagedAddress<StaticApi>) {
        self.world
            .tx()
            .from(from.to_managed_address())
            .to(&self.pool_sc)
            .typed(proxy_pool::LendingPoolProxy)
            .set_fee_receiver(receiver)
            .run();
    }

    pub fn set_fee_receiver_error(
        &mut self,
        from: &TestAddress,
        receiver: ManagedAddress<StaticApi>,
        error_message: &[u8],
    ) {
        self.world
            .tx()
            .from(from.to_managed_address())
            .to(&self.pool_sc)
            .typed(proxy_pool::LendingPoolProxy)
            .set_fee_receiver(receiver)
            .returns(expect(error_message))
            .run();
    }

    pub fn set_price_oracle_error(
        &mut self,
        from: &TestAddress,
        oracle: ManagedAddress<StaticApi>,
        error_message: &[u8],
    ) {
        self.world
            .tx()
            .from(from.to_managed_address())
            .to(&self.pool_sc)
            .typed(proxy_pool::LendingPoolProxy)
            .set_price_oracle(oracle)
            .returns(expect(error_message))
            .run();
    }

    // Lend side

    pub fn deposit_lend(&mut self, from: &TestAddress, amount: u64) {
        self.world
            .tx()
            .from(from.to_managed_address())
            .to(&self.pool_sc)
            .typed(proxy_pool::LendingPoolProxy)
            .deposit_lend(big(amount))
            .esdt(TestEsdtTransfer(USDC_TOKEN, 0, amount))
            .run();
    }

    /// Attaches `paid` of `token` while asking for `amount`.
    pub fn deposit_lend_error(
        &mut self,
        from: &TestAddress,
        amount: u64,
        token: TestTokenIdentifier,
        paid: u64,
        error_message: &[u8],
    ) {
        self.world
            .tx()
            .from(from.to_managed_address())
            .to(&self.pool_sc)
            .typed(proxy_pool::LendingPoolProxy)
            .deposit_lend(big(amount))
            .esdt(TestEsdtTransfer(token, 0, paid))
            .returns(expect(error_message))
            .run();
    }

    pub fn withdraw_lend(&mut self, from: &TestAddress, amount: u64) {
        self.world
            .tx()
            .from(from.to_managed_address())
            .to(&self.pool_sc)
            .typed(proxy_pool::LendingPoolProxy)
            .deposit_lend_withdraw(big(amount))
            .run();
    }

    pub fn withdraw_lend_error(&mut self, from: &TestAddress, amount: u64, error_message: &[u8]) {
        self.world
            .tx()
            .from(from.to_managed_address())
            .to(&self.pool_sc)
            .typed(proxy_pool::LendingPoolProxy)
            .deposit_lend_withdraw(big(amount))
            .returns(expect(error_message))
            .run();
    }

    // Borrow side

    pub fn deposit_borrow(&mut self, from: &TestAddress, token: TestTokenIdentifier, amount: u64) {
        self.world
            .tx()
            .from(from.to_managed_address())
            .to(&self.pool_sc)
            .typed(proxy_pool::LendingPoolProxy)
            .deposit_borrow(asset(token), big(amount))
            .esdt(TestEsdtTransfer(token, 0, amount))
            .run();
    }

    pub fn deposit_borrow_error(
        &mut self,
        from: &TestAddress,
        token: TestTokenIdentifier,
        amount: u64,
        error_message: &[u8],
    ) {
        self.world
            .tx()
            .from(from.to_managed_address())
            .to(&self.pool_sc)
            .typed(proxy_pool::LendingPoolProxy)
            .deposit_borrow(asset(token), big(amount))
            .esdt(TestEsdtTransfer(token, 0, amount))
            .returns(expect(error_message))
            .run();
    }

    /// Attaches `paid_token` while declaring `token` as the collateral.
    pub fn deposit_borrow_wrong_payment_error(
        &mut self,
        from: &TestAddress,
        token: TestTokenIdentifier,
        amount: u64,
        paid_token: TestTokenIdentifier,
        paid: u64,
        error_message: &[u8],
    ) {
        self.world
            .tx()
            .from(from.to_managed_address())
            .to(&self.pool_sc)
            .typed(proxy_pool::LendingPoolProxy)
            .deposit_borrow(asset(token), big(amount))
            .esdt(TestEsdtTransfer(paid_token, 0, paid))
            .returns(expect(error_message))
            .run();
    }

    pub fn repay(&mut self, from: &TestAddress, token: TestTokenIdentifier, amount: u64) {
        self.world
            .tx()
            .from(from.to_managed_address())
            .to(&self.pool_sc)
            .typed(proxy_pool::LendingPoolProxy)
            .deposit_borrow_withdraw(asset(token), big(amount))
            .esdt(TestEsdtTransfer(USDC_TOKEN, 0, amount))
            .run();
    }

    pub fn repay_error(
        &mut self,
        from: &TestAddress,
        token: TestTokenIdentifier,
        amount: u64,
        error_message: &[u8],
    ) {
        self.world
            .tx()
            .from(from.to_managed_address())
            .to(&self.pool_sc)
            .typed(proxy_pool::LendingPoolProxy)
            .deposit_borrow_withdraw(asset(token), big(amount))
            .esdt(TestEsdtTransfer(USDC_TOKEN, 0, amount))
            .returns(expect(error_message))
            .run();
    }

    pub fn claim_collateral(&mut self, from: &TestAddress, token: TestTokenIdentifier) {
        self.world
            .tx()
            .from(from.to_managed_address())
            .to(&self.pool_sc)
            .typed(proxy_pool::LendingPoolProxy)
            .claim_collateral(asset(token))
            .run();
    }

    pub fn claim_collateral_error(
        &mut self,
        from: &TestAddress,
        token: TestTokenIdentifier,
        error_message: &[u8],
    ) {
        self.world
            .tx()
            .from(from.to_managed_address())
            .to(&self.pool_sc)
            .typed(proxy_pool::LendingPoolProxy)
            .claim_collateral(asset(token))
            .returns(expect(error_message))
            .run();
    }

    // Liquidation

    pub fn liquidate(
        &mut self,
        from: &TestAddress,
        token: TestTokenIdentifier,
        borrower: &TestAddress,
        repay_amount: u64,
    ) {
        self.world
            .tx()
            .from(from.to_managed_address())
            .to(&self.pool_sc)
            .typed(proxy_pool::LendingPoolProxy)
            .liquidate(asset(token), address(borrower), big(repay_amount))
            .esdt(TestEsdtTransfer(USDC_TOKEN, 0, repay_amount))
            .run();
    }

    pub fn liquidate_error(
        &mut self,
        from: &TestAddress,
        token: TestTokenIdentifier,
        borrower: &TestAddress,
        repay_amount: u64,
        error_message: &[u8],
    ) {
        self.world
            .tx()
            .from(from.to_managed_address())
            .to(&self.pool_sc)
            .typed(proxy_pool::LendingPoolProxy)
            .liquidate(asset(token), address(borrower), big(repay_amount))
            .esdt(TestEsdtTransfer(USDC_TOKEN, 0, repay_amount))
            .returns(expect(error_message))
            .run();
    }

    pub fn check_liquidate(
        &mut self,
        token: TestTokenIdentifier,
    ) -> Vec<LiquidationCandidate<StaticApi>> {
        let candidates = self
            .world
            .query()
            .to(&self.pool_sc)
            .typed(proxy_pool::LendingPoolProxy)
            .check_liquidate(asset(token))
            .returns(ReturnsResult)
            .run();

        candidates.into_iter().collect()
    }

    pub fn check_liquidate_error(&mut self, token: TestTokenIdentifier, error_message: &[u8]) {
        self.world
            .query()
            .to(&self.pool_sc)
            .typed(proxy_pool::LendingPoolProxy)
            .check_liquidate(asset(token))
            .returns(expect(error_message))
            .run();
    }

    // Views

    pub fn total_lend(&mut self) -> BigUint<StaticApi> {
        self.world
            .query()
            .to(&self.pool_sc)
            .typed(proxy_pool::LendingPoolProxy)
            .total_lend()
            .returns(ReturnsResult)
            .run()
    }

    pub fn total_borrow(&mut self) -> BigUint<StaticApi> {
        self.world
            .query()
            .to(&self.pool_sc)
            .typed(proxy_pool::LendingPoolProxy)
            .total_borrow()
            .returns(ReturnsResult)
            .run()
    }

    pub fn utilization_rate(&mut self) -> BigUint<StaticApi> {
        self.world
            .query()
            .to(&self.pool_sc)
            .typed(proxy_pool::LendingPoolProxy)
            .get_utilization_rate()
            .returns(ReturnsResult)
            .run()
    }

    pub fn user_lend(&mut self, user: &TestAddress) -> BigUint<StaticApi> {
        self.world
            .query()
            .to(&self.pool_sc)
            .typed(proxy_pool::LendingPoolProxy)
            .get_user_lend(address(user))
            .returns(ReturnsResult)
            .run()
    }

    pub fn user_lend_last_time(&mut self, user: &TestAddress) -> u64 {
        self.world
            .query()
            .to(&self.pool_sc)
            .typed(proxy_pool::LendingPoolProxy)
            .get_user_lend_last_time(address(user))
            .returns(ReturnsResult)
            .run()
    }

    pub fn user_lend_interest(&mut self, user: &TestAddress) -> BigUint<StaticApi> {
        self.world
            .query()
            .to(&self.pool_sc)
            .typed(proxy_pool::LendingPoolProxy)
            .get_user_lend_interest(address(user))
            .returns(ReturnsResult)
            .run()
    }

    pub fn borrowable(&mut self, token: TestTokenIdentifier) -> BigUint<StaticApi> {
        self.world
            .query()
            .to(&self.pool_sc)
            .typed(proxy_pool::LendingPoolProxy)
            .get_borrowable(asset(token))
            .returns(ReturnsResult)
            .run()
    }

    pub fn collateral(&mut self, token: TestTokenIdentifier) -> CollateralView<StaticApi> {
        self.world
            .query()
            .to(&self.pool_sc)
            .typed(proxy_pool::LendingPoolProxy)
            .get_collateral(asset(token))
            .returns(ReturnsResult)
            .run()
    }

    pub fn collateral_error(&mut self, token: TestTokenIdentifier, error_message: &[u8]) {
        self.world
            .query()
            .to(&self.pool_sc)
            .typed(proxy_pool::LendingPoolProxy)
            .get_collateral(asset(token))
            .returns(expect(error_message))
            .run();
    }

    pub fn collateral_assets(&mut self) -> Vec<EgldOrEsdtTokenIdentifier<StaticApi>> {
        let assets = self
            .world
            .query()
            .to(&self.pool_sc)
            .typed(proxy_pool::LendingPoolProxy)
            .get_collateral_assets()
            .returns(ReturnsResult)
            .run();

        assets.into_iter().collect()
    }

    pub fn deposited_collateral(
        &mut self,
        token: TestTokenIdentifier,
        user: &TestAddress,
    ) -> BigUint<StaticApi> {
        self.world
            .query()
            .to(&self.pool_sc)
            .typed(proxy_pool::LendingPoolProxy)
            .get_user_deposited_borrow(asset(token), address(user))
            .returns(ReturnsResult)
            .run()
    }

    pub fn debt(&mut self, token: TestTokenIdentifier, user: &TestAddress) -> BigUint<StaticApi> {
        self.world
            .query()
            .to(&self.pool_sc)
            .typed(proxy_pool::LendingPoolProxy)
            .get_user_deposited_borrow_amount(asset(token), address(user))
            .returns(ReturnsResult)
            .run()
    }

    pub fn health_factor(
        &mut self,
        token: TestTokenIdentifier,
        user: &TestAddress,
    ) -> BigUint<StaticApi> {
        self.world
            .query()
            .to(&self.pool_sc)
            .typed(proxy_pool::LendingPoolProxy)
            .get_health_factor(asset(token), address(user))
            .returns(ReturnsResult)
            .run()
    }

    pub fn protocol_liquidation_fees(&mut self, token: TestTokenIdentifier) -> BigUint<StaticApi> {
        self.world
            .query()
            .to(&self.pool_sc)
            .typed(proxy_pool::LendingPoolProxy)
            .protocol_liquidation_fees(asset(token))
            .returns(ReturnsResult)
            .run()
    }

    pub fn interest_rate(&mut self) -> BigUint<StaticApi> {
        self.world
            .query()
            .to(&self.pool_sc)
            .typed(proxy_pool::LendingPoolProxy)
            .interest_rate()
            .returns(ReturnsResult)
            .run()
    }

    pub fn fee_receiver(&mut self) -> ManagedAddress<StaticApi> {
        self.world
            .query()
            .to(&self.pool_sc)
            .typed(proxy_pool::LendingPoolProxy)
            .fee_receiver()
            .returns(ReturnsResult)
            .run()
    }

    // Balances

    pub fn check_balance(&mut self, account: &TestAddress, token: TestTokenIdentifier, amount: u64) {
        self.world
            .check_account(account.to_managed_address())
            .esdt_balance(token, &big(amount));
    }

    pub fn check_pool_balance(&mut self, token: TestTokenIdentifier, amount: u64) {
        self.world
            .check_account(self.pool_sc.clone())
            .esdt_balance(token, &big(amount));
    }

    /// Asserts the lend-side invariants that must hold after every call.
    pub fn assert_pool_invariants(&mut self) {
        let total_lend = self.total_lend();
        let total_borrow = self.total_borrow();
        let utilization = self.utilization_rate();

        assert!(
            total_borrow <= total_lend,
            "total borrow {:?} above total lend {:?}",
            total_borrow,
            total_lend
        );
        assert!(utilization <= big(RATIO_SCALE));
    }

    /// Asserts the protocol fees booked for `token` are held by the pool.
    pub fn assert_protocol_fees_backed(&mut self, token: TestTokenIdentifier) {
        self.world
            .tx()
            .from(OWNER_ADDRESS)
            .to(POOL_ADDRESS)
            .whitebox(lending_pool::contract_obj, |sc| {
                let asset = EgldOrEsdtTokenIdentifier::esdt(token.to_token_identifier());
                let fees = sc.protocol_liquidation_fees(&asset).get();
                let balance = sc.blockchain().get_sc_balance(&asset, 0);

                assert!(
                    fees <= balance,
                    "protocol fees {:?} above pool balance {:?}",
                    fees,
                    balance
                );
            });
    }
}

pub fn setup_price_oracle(world: &mut ScenarioWorld) -> ManagedAddress<StaticApi> {
    let oracle_sc = world
        .tx()
        .from(OWNER_ADDRESS)
        .typed(proxy_price_oracle::PriceOracleProxy)
        .init()
        .code(ORACLE_PATH)
        .new_address(ORACLE_ADDRESS)
        .returns(ReturnsNewManagedAddress)
        .run();

    for (token, price) in [(EGLD_TOKEN, EGLD_PRICE), (XEGLD_TOKEN, XEGLD_PRICE)] {
        world
            .tx()
            .from(OWNER_ADDRESS)
            .to(&oracle_sc)
            .typed(proxy_price_oracle::PriceOracleProxy)
            .set_price(asset(token), big(price))
            .run();
    }

    world
        .tx()
        .from(OWNER_ADDRESS)
        .to(&oracle_sc)
        .typed(proxy_price_oracle::PriceOracleProxy)
        .unpause_endpoint()
        .run();

    oracle_sc
}

pub fn setup_lending_pool(
    world: &mut ScenarioWorld,
    oracle_sc: &ManagedAddress<StaticApi>,
) -> ManagedAddress<StaticApi> {
    world
        .tx()
        .from(OWNER_ADDRESS)
        .typed(proxy_pool::LendingPoolProxy)
        .init(
            address(&FEE_RECEIVER),
            asset(GOV_TOKEN),
            asset(USDC_TOKEN),
            oracle_sc,
        )
        .code(POOL_PATH)
        .new_address(POOL_ADDRESS)
        .returns(ReturnsNewManagedAddress)
        .run()
}

pub fn setup_owner(world: &mut ScenarioWorld) {
    world
        .account(OWNER_ADDRESS)
        .nonce(1)
        .esdt_balance(USDC_TOKEN, big(INITIAL_BALANCE))
        .esdt_balance(EGLD_TOKEN, big(INITIAL_BALANCE));
}

pub fn setup_accounts(state: &mut LendingPoolTestState) {
    state
        .world
        .account(LENDER)
        .nonce(1)
        .esdt_balance(USDC_TOKEN, big(INITIAL_BALANCE));

    state
        .world
        .account(BORROWER)
        .nonce(1)
        .esdt_balance(USDC_TOKEN, big(INITIAL_BALANCE))
        .esdt_balance(EGLD_TOKEN, big(INITIAL_BALANCE))
        .esdt_balance(XEGLD_TOKEN, big(INITIAL_BALANCE))
        .esdt_balance(UNPRICED_TOKEN, big(INITIAL_BALANCE));

    state
        .world
        .account(LIQUIDATOR)
        .nonce(1)
        .esdt_balance(USDC_TOKEN, big(INITIAL_BALANCE));
}
