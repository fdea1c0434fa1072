use cosmwasm_std::{coins, Coin, Uint128};
use cw_multi_test::Executor;
use cw_utils::PaymentError;
use omniflix_waitlist_minter::error::ContractError;
use omniflix_waitlist_minter::msg::{ExecuteMsg, QueryMsg};
use sale_testing::stargate::{CREATION_FEE_AMOUNT, CREATION_FEE_DENOM};
use sale_types::{SaleError, SalePhase, UserDetails};

use crate::helpers::mock_messages::waitlist_minter_mock_messages::{
    return_waitlist_minter_inst_msg, MINT_DENOM, PUBLIC_PRICE,
};
use crate::helpers::setup::setup;
use crate::helpers::utils::query_onft_collection;

#[test]
fn waitlist_minter_owner_minting() {
    let res = setup();
    let creator = res.test_accounts.creator;
    let collector = res.test_accounts.collector;
    let waitlist_minter_code_id = res.waitlist_minter_code_id;
    let mut app = res.app;

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

    // Non owner
    let error = app
        .execute_contract(
            collector.clone(),
            minter_address.clone(),
            &ExecuteMsg::OwnerMint {
                recipient: collector.to_string(),
                quantity: 1,
            },
            &[],
        )
        .unwrap_err();
    let res = error.source().unwrap();
    let error = res.downcast_ref::<ContractError>().unwrap();
    assert_eq!(error, &ContractError::Sale(SaleError::Unauthorized {}));

    // Gifts are free
    let error = app
        .execute_contract(
            creator.clone(),
            minter_address.clone(),
            &ExecuteMsg::OwnerMint {
                recipient: collector.to_string(),
                quantity: 1,
            },
            &coins(PUBLIC_PRICE, MINT_DENOM),
        )
        .unwrap_err();
    let res = error.source().unwrap();
    let error = res.downcast_ref::<ContractError>().unwrap();
    assert_eq!(error, &ContractError::PaymentError(PaymentError::NonPayable {}));

    // Six tokens out of a supply of five
    let error = app
        .execute_contract(
            creator.clone(),
            minter_address.clone(),
            &ExecuteMsg::OwnerMint {
                recipient: creator.to_string(),
                quantity: 6,
            },
            &[],
        )
        .unwrap_err();
    let res = error.source().unwrap();
    let error = res.downcast_ref::<ContractError>().unwrap();
    assert_eq!(error, &ContractError::Sale(SaleError::ExceedsMaxSupply {}));
    let total_supply: u32 = app
        .wrap()
        .query_wasm_smart(&minter_address, &QueryMsg::TotalSupply {})
        .unwrap();
    assert_eq!(total_supply, 0);

    // Owner mint ignores the phase and the wallet cap of two
    let res = app
        .execute_contract(
            creator.clone(),
            minter_address.clone(),
            &ExecuteMsg::OwnerMint {
                recipient: collector.to_string(),
                quantity: 3,
            },
            &[],
        )
        .unwrap();
    let wasm_event = res.events.iter().find(|e| e.ty == "wasm").unwrap();
    assert!(wasm_event
        .attributes
        .iter()
        .any(|a| a.key == "last_token_id" && a.value == "3"));

    let user_details: UserDetails = app
        .wrap()
        .query_wasm_smart(
            &minter_address,
            &QueryMsg::UserMintingDetails {
                address: collector.to_string(),
            },
        )
        .unwrap();
    assert_eq!(user_details.total_minted_count, 3);
    assert_eq!(user_details.gifted_count, 3);

    let collection = query_onft_collection(app.storage(), &minter_address);
    assert_eq!(collection.onfts.len(), 3);
    assert!(collection
        .onfts
        .iter()
        .all(|onft| onft.owner == collector.to_string()));

    // Gifted tokens count toward the recipient's own wallet cap
    app.execute_contract(
        creator.clone(),
        minter_address.clone(),
        &ExecuteMsg::SetPhase {
            phase: SalePhase::Public,
        },
        &[],
    )
    .unwrap();
    let error = app
        .execute_contract(
            collector.clone(),
            minter_address.clone(),
            &ExecuteMsg::PublicMint { quantity: 1 },
            &coins(PUBLIC_PRICE, MINT_DENOM),
        )
        .unwrap_err();
    let res = error.source().unwrap();
    let error = res.downcast_ref::<ContractError>().unwrap();
    assert_eq!(error, &ContractError::Sale(SaleError::ExceedsMaxPerWallet {}));

    app.execute_contract(
        creator.clone(),
        minter_address.clone(),
        &ExecuteMsg::OwnerMint {
            recipient: creator.to_string(),
            quantity: 2,
        },
        &[],
    )
    .unwrap();

    // Supply is exhausted
    let error = app
        .execute_contract(
            creator.clone(),
            minter_address.clone(),
            &ExecuteMsg::OwnerMint {
                recipient: creator.to_string(),
                quantity: 1,
            },
            &[],
        )
        .unwrap_err();
    let res = error.source().unwrap();
    let error = res.downcast_ref::<ContractError>().unwrap();
    assert_eq!(error, &ContractError::Sale(SaleError::ExceedsMaxSupply {}));

    let total_supply: u32 = app
        .wrap()
        .query_wasm_smart(&minter_address, &QueryMsg::TotalSupply {})
        .unwrap();
    assert_eq!(total_supply, 5);

    // Nothing was paid for gifts
    let funds: Coin = app
        .wrap()
        .query_wasm_smart(&minter_address, &QueryMsg::Funds {})
        .unwrap();
    assert_eq!(funds.amount, Uint128::zero());
}
