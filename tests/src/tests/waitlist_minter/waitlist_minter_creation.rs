use cosmwasm_std::{coin, coins, Addr, Coin, Uint128};
use cw_multi_test::Executor;
use cw_ownable::Ownership;
use cw_utils::PaymentError;
use omniflix_waitlist_minter::error::ContractError;
use omniflix_waitlist_minter::msg::{QueryMsg, WaitlistMinterQueryExtension};
use omniflix_waitlist_minter::state::Config;
use sale_testing::stargate::{CREATION_FEE_AMOUNT, CREATION_FEE_DENOM};
use sale_types::{CollectionDetails, ConfigurationError, RoyaltyInfoResponse, SalePhase};

use crate::helpers::mock_messages::waitlist_minter_mock_messages::{
    return_collection_details, return_waitlist_minter_inst_msg, BASE_URI, MINT_DENOM,
    PUBLIC_PRICE, WAITLIST_PRICE,
};
use crate::helpers::setup::setup;
use crate::helpers::utils::query_onft_collection;

#[test]
fn waitlist_minter_creation() {
    let res = setup();
    let admin = res.test_accounts.admin;
    let creator = res.test_accounts.creator;
    let waitlist_minter_code_id = res.waitlist_minter_code_id;
    let mut app = res.app;

    let inst_msg = return_waitlist_minter_inst_msg();

    // Creation fee is missing
    let error = app
        .instantiate_contract(
            waitlist_minter_code_id,
            creator.clone(),
            &inst_msg,
            &[],
            "waitlist-minter",
            None,
        )
        .unwrap_err();
    let res = error.source().unwrap();
    let error = res.downcast_ref::<ContractError>().unwrap();
    assert_eq!(error, &ContractError::PaymentError(PaymentError::NoFunds {}));

    // Creation fee is not exact
    let error = app
        .instantiate_contract(
            waitlist_minter_code_id,
            creator.clone(),
            &inst_msg,
            &[coin(CREATION_FEE_AMOUNT / 2, CREATION_FEE_DENOM)],
            "waitlist-minter",
            None,
        )
        .unwrap_err();
    let res = error.source().unwrap();
    let error = res.downcast_ref::<ContractError>().unwrap();
    assert_eq!(
        error,
        &ContractError::InvalidCreationFee {
            expected: Uint128::new(CREATION_FEE_AMOUNT),
            sent: Uint128::new(CREATION_FEE_AMOUNT / 2)
        }
    );

    // Max supply can not be zero
    let mut invalid_msg = inst_msg.clone();
    invalid_msg.init.max_supply = 0;
    let error = app
        .instantiate_contract(
            waitlist_minter_code_id,
            creator.clone(),
            &invalid_msg,
            &coins(CREATION_FEE_AMOUNT, CREATION_FEE_DENOM),
            "waitlist-minter",
            None,
        )
        .unwrap_err();
    let res = error.source().unwrap();
    let error = res.downcast_ref::<ContractError>().unwrap();
    assert_eq!(
        error,
        &ContractError::ConfigurationError(ConfigurationError::InvalidMaxSupply {})
    );

    // Per wallet limit can not be zero
    let mut invalid_msg = inst_msg.clone();
    invalid_msg.init.max_per_wallet = 0;
    let error = app
        .instantiate_contract(
            waitlist_minter_code_id,
            creator.clone(),
            &invalid_msg,
            &coins(CREATION_FEE_AMOUNT, CREATION_FEE_DENOM),
            "waitlist-minter",
            None,
        )
        .unwrap_err();
    let res = error.source().unwrap();
    let error = res.downcast_ref::<ContractError>().unwrap();
    assert_eq!(
        error,
        &ContractError::ConfigurationError(ConfigurationError::InvalidPerAddressLimit {})
    );

    // Mint denom can not be empty
    let mut invalid_msg = inst_msg.clone();
    invalid_msg.init.mint_denom = "".to_string();
    let error = app
        .instantiate_contract(
            waitlist_minter_code_id,
            creator.clone(),
            &invalid_msg,
            &coins(CREATION_FEE_AMOUNT, CREATION_FEE_DENOM),
            "waitlist-minter",
            None,
        )
        .unwrap_err();
    let res = error.source().unwrap();
    let error = res.downcast_ref::<ContractError>().unwrap();
    assert_eq!(
        error,
        &ContractError::ConfigurationError(ConfigurationError::InvalidMintDenom {})
    );

    let minter_address = app
        .instantiate_contract(
            waitlist_minter_code_id,
            creator.clone(),
            &inst_msg,
            &coins(CREATION_FEE_AMOUNT, CREATION_FEE_DENOM),
            "waitlist-minter",
            None,
        )
        .unwrap();

    // Collection is created on the ONFT module with the deployer as royalty receiver
    let collection = query_onft_collection(app.storage(), &minter_address);
    let denom = collection.denom.unwrap();
    assert_eq!(denom.id, "entitosidai");
    assert_eq!(denom.name, "Entito Sidai");
    assert_eq!(denom.symbol, "ESIDAI");
    assert_eq!(denom.creator, minter_address.to_string());
    assert_eq!(denom.royalty_receivers.len(), 1);
    assert_eq!(denom.royalty_receivers[0].address, creator.to_string());
    assert!(collection.onfts.is_empty());

    let collection_details: CollectionDetails = app
        .wrap()
        .query_wasm_smart(&minter_address, &QueryMsg::Collection {})
        .unwrap();
    assert_eq!(collection_details, return_collection_details());

    // Admin defaults to the instantiator
    let ownership: Ownership<Addr> = app
        .wrap()
        .query_wasm_smart(&minter_address, &QueryMsg::Ownership {})
        .unwrap();
    assert_eq!(ownership.owner, Some(creator.clone()));
    assert_eq!(ownership.pending_owner, None);

    let config: Config = app
        .wrap()
        .query_wasm_smart(
            &minter_address,
            &QueryMsg::Extension(WaitlistMinterQueryExtension::Config {}),
        )
        .unwrap();
    assert_eq!(config.mint_denom, MINT_DENOM);
    assert_eq!(config.waitlist_price, Uint128::new(WAITLIST_PRICE));
    assert_eq!(config.public_price, Uint128::new(PUBLIC_PRICE));
    assert_eq!(config.limits.max_supply, 5);
    assert_eq!(config.limits.max_per_wallet, 2);
    assert_eq!(config.base_uri, BASE_URI);

    let phase: SalePhase = app
        .wrap()
        .query_wasm_smart(
            &minter_address,
            &QueryMsg::Extension(WaitlistMinterQueryExtension::Phase {}),
        )
        .unwrap();
    assert_eq!(phase, SalePhase::Closed);

    let max_seats: u32 = app
        .wrap()
        .query_wasm_smart(
            &minter_address,
            &QueryMsg::Extension(WaitlistMinterQueryExtension::MaxSeats {}),
        )
        .unwrap();
    assert_eq!(max_seats, 4);

    let seats_filled: u32 = app
        .wrap()
        .query_wasm_smart(
            &minter_address,
            &QueryMsg::Extension(WaitlistMinterQueryExtension::SeatsFilled {}),
        )
        .unwrap();
    assert_eq!(seats_filled, 0);

    let total_supply: u32 = app
        .wrap()
        .query_wasm_smart(&minter_address, &QueryMsg::TotalSupply {})
        .unwrap();
    assert_eq!(total_supply, 0);

    let funds: Coin = app
        .wrap()
        .query_wasm_smart(&minter_address, &QueryMsg::Funds {})
        .unwrap();
    assert_eq!(funds, coin(0, MINT_DENOM));

    let royalty: RoyaltyInfoResponse = app
        .wrap()
        .query_wasm_smart(
            &minter_address,
            &QueryMsg::RoyaltyInfo {
                token_id: 1,
                sale_price: Uint128::new(100_000_000),
            },
        )
        .unwrap();
    assert_eq!(royalty.receiver, Some(creator.clone()));
    assert_eq!(royalty.royalty_amount, Uint128::new(2_500_000));

    // Unknown addresses have not minted anything
    let number_minted: u32 = app
        .wrap()
        .query_wasm_smart(
            &minter_address,
            &QueryMsg::NumberMinted {
                address: admin.to_string(),
            },
        )
        .unwrap();
    assert_eq!(number_minted, 0);

    // Explicit admin
    let mut inst_msg = return_waitlist_minter_inst_msg();
    inst_msg.admin = Some(admin.to_string());
    let minter_address = app
        .instantiate_contract(
            waitlist_minter_code_id,
            creator.clone(),
            &inst_msg,
            &coins(CREATION_FEE_AMOUNT, CREATION_FEE_DENOM),
            "waitlist-minter",
            None,
        )
        .unwrap();
    let ownership: Ownership<Addr> = app
        .wrap()
        .query_wasm_smart(&minter_address, &QueryMsg::Ownership {})
        .unwrap();
    assert_eq!(ownership.owner, Some(admin.clone()));
    let royalty: RoyaltyInfoResponse = app
        .wrap()
        .query_wasm_smart(
            &minter_address,
            &QueryMsg::RoyaltyInfo {
                token_id: 1,
                sale_price: Uint128::new(100_000_000),
            },
        )
        .unwrap();
    assert_eq!(royalty.receiver, Some(admin));
}
