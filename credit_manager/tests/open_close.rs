use common_constants::ZERO_DEBT_FLAG;
use common_errors::{
    ERROR_DEBT_OUT_OF_BOUNDS, ERROR_DEGEN_RESTRICTION, ERROR_FACADE_EXPIRED,
    ERROR_INSUFFICIENT_COLLATERAL, ERROR_NON_ZERO_DEBT_ON_CLOSE, ERROR_NOT_ACCOUNT_OWNER,
    ERROR_POSITION_NOT_FOUND, ERROR_POSITION_TOO_YOUNG,
};
use multiversx_sc_scenario::imports::BigUint;
pub mod constants;
pub mod setup;
use constants::*;
use setup::*;

fn open_basic(state: &mut CreditManagerTestState) -> u64 {
    state.open_account(
        &BORROWER_ADDRESS,
        usdc(1_000),
        vec![(USDC_TOKEN, usdc(500))],
        vec![add_collateral(USDC_TOKEN, usdc(500))],
    )
}

#[test]
fn open_then_close_returns_everything() {
    let mut state = CreditManagerTestState::new();

    let account_id = open_basic(&mut state);
    assert_eq!(account_id, 1);
    assert_eq!(state.accounts_of(&BORROWER_ADDRESS), vec![1]);
    assert_eq!(state.account_balance(account_id, USDC_TOKEN), usdc(1_500));
    assert_eq!(state.pool_borrowed(), usdc(1_000));
    state.check_credit_manager_balance(USDC_TOKEN, usdc(1_500));

    // 1500 * 0.9 / 1000
    assert_eq!(state.health_factor(account_id), 13_500);

    let account = state.credit_account(account_id);
    assert_eq!(account.debt, usdc(1_000));
    assert_eq!(account.since, state.block_nonce);
    assert!(!account.has_zero_debt());

    state.advance(0);
    state.close_account(
        &BORROWER_ADDRESS,
        account_id,
        &BORROWER_ADDRESS,
        vec![],
        vec![repay_all()],
    );

    assert!(state.accounts_of(&BORROWER_ADDRESS).is_empty());
    assert_eq!(state.free_account_ids(), vec![account_id]);
    assert_eq!(state.pool_borrowed(), BigUint::zero());
    state.check_credit_manager_balance(USDC_TOKEN, BigUint::zero());
    state.check_balance(BORROWER_ADDRESS, USDC_TOKEN, usdc(1_000_000));
}

#[test]
fn released_account_ids_are_reused() {
    let mut state = CreditManagerTestState::new();

    let first = open_basic(&mut state);
    state.advance(0);
    state.close_account(&BORROWER_ADDRESS, first, &BORROWER_ADDRESS, vec![], vec![repay_all()]);

    let reused = state.open_account(
        &OTHER_BORROWER_ADDRESS,
        usdc(1_000),
        vec![(USDC_TOKEN, usdc(500))],
        vec![add_collateral(USDC_TOKEN, usdc(500))],
    );
    assert_eq!(reused, first);
    assert!(state.free_account_ids().is_empty());
    assert_eq!(state.accounts_of(&OTHER_BORROWER_ADDRESS), vec![first]);

    let fresh = open_basic(&mut state);
    assert_eq!(fresh, 2);
}

#[test]
fn close_in_opening_block_fails() {
    let mut state = CreditManagerTestState::new();
    let account_id = open_basic(&mut state);

    state.close_account_error(
        &BORROWER_ADDRESS,
        account_id,
        vec![repay_all()],
        ERROR_POSITION_TOO_YOUNG,
    );

    state.advance(0);
    state.close_account(
        &BORROWER_ADDRESS,
        account_id,
        &BORROWER_ADDRESS,
        vec![],
        vec![repay_all()],
    );
}

#[test]
fn close_with_outstanding_debt_fails() {
    let mut state = CreditManagerTestState::new();
    let account_id = open_basic(&mut state);
    state.advance(0);

    state.close_account_error(&BORROWER_ADDRESS, account_id, vec![], ERROR_NON_ZERO_DEBT_ON_CLOSE);
}

#[test]
fn close_by_other_address_fails() {
    let mut state = CreditManagerTestState::new();
    let account_id = open_basic(&mut state);
    state.advance(0);

    state.close_account_error(
        &OTHER_BORROWER_ADDRESS,
        account_id,
        vec![repay_all()],
        ERROR_NOT_ACCOUNT_OWNER,
    );
}

#[test]
fn close_splits_balances_between_recipient_and_owner() {
    let mut state = CreditManagerTestState::new();
    let adapter = state.adapter.clone();

    let account_id = state.open_account(
        &BORROWER_ADDRESS,
        usdc(1_000),
        vec![(USDC_TOKEN, usdc(500)), (WBTC_TOKEN, units(1, 6))],
        vec![
            add_collateral(USDC_TOKEN, usdc(500)),
            add_collateral(WBTC_TOKEN, units(1, 6)),
            swap_call(&adapter, USDC_TOKEN, usdc(100), MEME_TOKEN, units(100, MEME_DECIMALS)),
        ],
    );
    assert_eq!(state.account_balance(account_id, USDC_TOKEN), usdc(1_400));
    assert_eq!(state.account_balance(account_id, MEME_TOKEN), units(100, MEME_DECIMALS));

    state.advance(0);
    state.close_account(
        &BORROWER_ADDRESS,
        account_id,
        &OTHER_BORROWER_ADDRESS,
        vec![WBTC_TOKEN],
        vec![repay_all()],
    );

    // Underlying and swept tokens go to the recipient, the rest to the owner
    state.check_balance(OTHER_BORROWER_ADDRESS, USDC_TOKEN, usdc(1_000_400));
    state.world
        .check_account(OTHER_BORROWER_ADDRESS)
        .esdt_balance(WBTC_TOKEN, units(1, 6));
    state.check_balance(BORROWER_ADDRESS, MEME_TOKEN, units(1_100, MEME_DECIMALS));
    state.check_credit_manager_balance(USDC_TOKEN, BigUint::zero());
    state.check_credit_manager_balance(MEME_TOKEN, BigUint::zero());
}

#[test]
fn zero_debt_account_round_trip() {
    let mut state = CreditManagerTestState::new();

    let account_id = state.open_account(
        &BORROWER_ADDRESS,
        BigUint::zero(),
        vec![(USDC_TOKEN, usdc(100))],
        vec![add_collateral(USDC_TOKEN, usdc(100))],
    );

    let account = state.credit_account(account_id);
    assert_eq!(account.flags & ZERO_DEBT_FLAG, ZERO_DEBT_FLAG);
    assert_eq!(state.health_factor(account_id), u64::MAX);
    assert_eq!(state.pool_borrowed(), BigUint::zero());
    assert!(!state.is_liquidatable(account_id));

    state.advance(0);
    state.close_account(&BORROWER_ADDRESS, account_id, &BORROWER_ADDRESS, vec![], vec![]);
    state.check_balance(BORROWER_ADDRESS, USDC_TOKEN, usdc(1_000_000));
}

#[test]
fn open_outside_debt_band_fails() {
    let mut state = CreditManagerTestState::new();

    state.open_account_error(
        &BORROWER_ADDRESS,
        usdc(MIN_DEBT - 1),
        vec![(USDC_TOKEN, usdc(500))],
        vec![add_collateral(USDC_TOKEN, usdc(500))],
        ERROR_DEBT_OUT_OF_BOUNDS,
    );
    state.open_account_error(
        &BORROWER_ADDRESS,
        usdc(MAX_DEBT + 1),
        vec![(USDC_TOKEN, usdc(500_000))],
        vec![add_collateral(USDC_TOKEN, usdc(500_000))],
        ERROR_DEBT_OUT_OF_BOUNDS,
    );
}

#[test]
fn open_without_enough_collateral_fails() {
    let mut state = CreditManagerTestState::new();

    // 1000 * 0.9 of weighted value against 1000 of debt
    state.open_account_error(
        &BORROWER_ADDRESS,
        usdc(1_000),
        vec![],
        vec![],
        ERROR_INSUFFICIENT_COLLATERAL,
    );

    assert_eq!(state.pool_borrowed(), BigUint::zero());
    assert!(state.accounts_of(&BORROWER_ADDRESS).is_empty());
}

#[test]
fn open_on_behalf_of_another_owner() {
    let mut state = CreditManagerTestState::new();

    let account_id = state.open_account_on_behalf(
        &BORROWER_ADDRESS,
        &OTHER_BORROWER_ADDRESS,
        usdc(1_000),
        vec![(USDC_TOKEN, usdc(500))],
        vec![add_collateral(USDC_TOKEN, usdc(500))],
    );

    assert!(state.accounts_of(&BORROWER_ADDRESS).is_empty());
    assert_eq!(state.accounts_of(&OTHER_BORROWER_ADDRESS), vec![account_id]);

    state.multicall_error(
        &BORROWER_ADDRESS,
        account_id,
        vec![],
        vec![increase_debt(usdc(100))],
        ERROR_NOT_ACCOUNT_OWNER,
    );
    state.multicall(&OTHER_BORROWER_ADDRESS, account_id, vec![], vec![increase_debt(usdc(100))]);
    assert_eq!(state.credit_account(account_id).debt, usdc(1_100));
}

#[test]
fn degen_mode_consumes_allowance() {
    let mut state = CreditManagerTestState::new();
    state.set_degen_mode(true);

    state.open_account_error(
        &BORROWER_ADDRESS,
        usdc(1_000),
        vec![(USDC_TOKEN, usdc(500))],
        vec![add_collateral(USDC_TOKEN, usdc(500))],
        ERROR_DEGEN_RESTRICTION,
    );

    state.set_degen_allowance(&BORROWER_ADDRESS, 1);
    open_basic(&mut state);

    state.open_account_error(
        &BORROWER_ADDRESS,
        usdc(1_000),
        vec![(USDC_TOKEN, usdc(500))],
        vec![add_collateral(USDC_TOKEN, usdc(500))],
        ERROR_DEGEN_RESTRICTION,
    );
}

#[test]
fn degen_mode_forbids_opening_for_someone_else() {
    let mut state = CreditManagerTestState::new();
    state.set_degen_mode(true);
    state.set_degen_allowance(&OTHER_BORROWER_ADDRESS, 5);

    state.open_account_on_behalf_error(
        &BORROWER_ADDRESS,
        &OTHER_BORROWER_ADDRESS,
        usdc(1_000),
        vec![(USDC_TOKEN, usdc(500))],
        vec![add_collateral(USDC_TOKEN, usdc(500))],
        ERROR_DEGEN_RESTRICTION,
    );
}

#[test]
fn expired_facade_rejects_new_accounts() {
    let mut state = CreditManagerTestState::new();
    state.set_expiration_timestamp(1_000);

    state.advance(1_000);
    state.open_account_error(
        &BORROWER_ADDRESS,
        usdc(1_000),
        vec![(USDC_TOKEN, usdc(500))],
        vec![add_collateral(USDC_TOKEN, usdc(500))],
        ERROR_FACADE_EXPIRED,
    );
}

#[test]
fn paused_manager_rejects_batches() {
    let mut state = CreditManagerTestState::new();
    let account_id = open_basic(&mut state);
    state.pause();

    state.open_account_error(
        &BORROWER_ADDRESS,
        usdc(1_000),
        vec![(USDC_TOKEN, usdc(500))],
        vec![add_collateral(USDC_TOKEN, usdc(500))],
        b"Contract is paused",
    );
    state.multicall_error(
        &BORROWER_ADDRESS,
        account_id,
        vec![],
        vec![],
        b"Contract is paused",
    );
}

#[test]
fn unknown_account_is_rejected() {
    let mut state = CreditManagerTestState::new();

    state.multicall_error(
        &BORROWER_ADDRESS,
        42,
        vec![],
        vec![increase_debt(usdc(100))],
        ERROR_POSITION_NOT_FOUND,
    );
}
