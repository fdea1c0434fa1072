use cosmwasm_std::{coin, coins, Coin, Uint128};
use cw_multi_test::Executor;
use omniflix_waitlist_minter::error::ContractError;
use omniflix_waitlist_minter::msg::{ExecuteMsg, QueryMsg, WaitlistMinterQueryExtension};
use omniflix_waitlist_minter::state::Config;
use sale_testing::stargate::{CREATION_FEE_AMOUNT, CREATION_FEE_DENOM};
use sale_types::{PaymentPolicy, SaleError, SalePhase};

use crate::helpers::mock_messages::waitlist_minter_mock_messages::{
    return_waitlist_minter_inst_msg, MINT_DENOM, PUBLIC_PRICE, WAITLIST_PRICE,
};
use crate::helpers::setup::setup;
use crate::helpers::utils::query_balance;

#[test]
fn waitlist_minter_accepting_overpayment() {
    let res = setup();
    let creator = res.test_accounts.creator;
    let collector = res.test_accounts.collector;
    let waitlist_minter_code_id = res.waitlist_minter_code_id;
    let mut app = res.app;

    // Exact payment unless told otherwise
    let minter_address = app
        .instantiate_contract(
            waitlist_minter_code_id,
            creator.clone(),
            &return_waitlist_minter_inst_msg(),
            &coins(CREATION_FEE_AMOUNT, CREATION_FEE_DENOM),
            "waitlist-minter",
            None,
        )
        .unwrap();
    let config: Config = app
        .wrap()
        .query_wasm_smart(
            &minter_address,
            &QueryMsg::Extension(WaitlistMinterQueryExtension::Config {}),
        )
        .unwrap();
    assert_eq!(config.payment_policy, PaymentPolicy::Exact);

    let mut inst_msg = return_waitlist_minter_inst_msg();
    inst_msg.init.payment_policy = Some(PaymentPolicy::AtLeast);
    let minter_address = app
        .instantiate_contract(
            waitlist_minter_code_id,
            creator.clone(),
            &inst_msg,
            &coins(CREATION_FEE_AMOUNT, CREATION_FEE_DENOM),
            "waitlist-minter-at-least",
            None,
        )
        .unwrap();
    let config: Config = app
        .wrap()
        .query_wasm_smart(
            &minter_address,
            &QueryMsg::Extension(WaitlistMinterQueryExtension::Config {}),
        )
        .unwrap();
    assert_eq!(config.payment_policy, PaymentPolicy::AtLeast);

    app.execute_contract(
        collector.clone(),
        minter_address.clone(),
        &ExecuteMsg::JoinWaitlist {},
        &[],
    )
    .unwrap();
    app.execute_contract(
        creator.clone(),
        minter_address.clone(),
        &ExecuteMsg::SetPhase {
            phase: SalePhase::Waitlist,
        },
        &[],
    )
    .unwrap();

    // Underpayment still fails
    let error = app
        .execute_contract(
            collector.clone(),
            minter_address.clone(),
            &ExecuteMsg::WaitlistMint { quantity: 2 },
            &coins(2 * WAITLIST_PRICE - 1, MINT_DENOM),
        )
        .unwrap_err();
    let res = error.source().unwrap();
    let error = res.downcast_ref::<ContractError>().unwrap();
    assert_eq!(
        error,
        &ContractError::Sale(SaleError::IncorrectPaymentAmount {
            expected: Uint128::new(2 * WAITLIST_PRICE),
            sent: Uint128::new(2 * WAITLIST_PRICE - 1)
        })
    );

    // 0.2 FLIX for two tokens at 0.075
    let collector_balance_before = query_balance(&app, &collector, MINT_DENOM);
    app.execute_contract(
        collector.clone(),
        minter_address.clone(),
        &ExecuteMsg::WaitlistMint { quantity: 2 },
        &coins(200_000, MINT_DENOM),
    )
    .unwrap();
    let collector_balance_after = query_balance(&app, &collector, MINT_DENOM);
    assert_eq!(
        collector_balance_before - collector_balance_after,
        Uint128::new(200_000)
    );

    // 0.3 FLIX for two tokens at 0.1
    app.execute_contract(
        creator.clone(),
        minter_address.clone(),
        &ExecuteMsg::SetPhase {
            phase: SalePhase::Public,
        },
        &[],
    )
    .unwrap();
    app.execute_contract(
        creator.clone(),
        minter_address.clone(),
        &ExecuteMsg::PublicMint { quantity: 2 },
        &coins(3 * PUBLIC_PRICE, MINT_DENOM),
    )
    .unwrap();

    let total_supply: u32 = app
        .wrap()
        .query_wasm_smart(&minter_address, &QueryMsg::TotalSupply {})
        .unwrap();
    assert_eq!(total_supply, 4);

    // The whole attached amount is kept
    let funds: Coin = app
        .wrap()
        .query_wasm_smart(&minter_address, &QueryMsg::Funds {})
        .unwrap();
    assert_eq!(funds, coin(200_000 + 3 * PUBLIC_PRICE, MINT_DENOM));
}
