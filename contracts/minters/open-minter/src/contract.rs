#[cfg(not(feature = "library"))]
use cosmwasm_std::entry_point;
use cosmwasm_std::{
    coins, to_json_binary, Addr, BankMsg, Binary, Coin, CosmosMsg, Deps, DepsMut, Env,
    MessageInfo, Response, StdResult, Storage, Uint128,
};
use cw2::set_contract_version;
use cw_ownable::{Action, Ownership};
use cw_utils::{may_pay, maybe_addr, must_pay, nonpayable};
use sale_types::config::{check_mint_denom, check_quantity};
use sale_types::msg::QueryMsg as SaleQueryMsg;
use sale_types::utils::{
    check_collection_creation_fee, generate_create_denom_msg, generate_mint_message,
    generate_update_royalty_msg, token_uri,
};
use sale_types::{
    assert_owner, CollectionDetails, MintKind, PaymentPolicy, RoyaltyInfo, RoyaltyInfoResponse,
    SaleError, SaleLimits, UserDetails,
};

use crate::error::ContractError;
use crate::msg::{ExecuteMsg, InstantiateMsg, OpenMinterQueryExtension};
use crate::state::{Config, ACCOUNTING, COLLECTION, CONFIG, FUNDS, MINTING, ROYALTY};

// version info for migration info
const CONTRACT_NAME: &str = "crates.io:omniflix-open-minter";
const CONTRACT_VERSION: &str = env!("CARGO_PKG_VERSION");

#[cfg_attr(not(feature = "library"), entry_point)]
pub fn instantiate(
    deps: DepsMut,
    env: Env,
    info: MessageInfo,
    msg: InstantiateMsg,
) -> Result<Response, ContractError> {
    set_contract_version(deps.storage, CONTRACT_NAME, CONTRACT_VERSION)?;

    let creation_fee = check_collection_creation_fee(deps.querier)?;
    let amount = must_pay(&info, &creation_fee.denom)?;
    // Exact amount must be paid
    if amount != creation_fee.amount {
        return Err(ContractError::InvalidCreationFee {
            expected: creation_fee.amount,
            sent: amount,
        });
    }

    check_mint_denom(&msg.init.mint_denom)?;
    let limits = SaleLimits {
        max_supply: msg.init.max_supply,
        max_per_wallet: msg.init.max_per_wallet,
    };
    limits.check_integrity()?;

    let admin = maybe_addr(deps.api, msg.admin)?.unwrap_or(info.sender);
    cw_ownable::initialize_owner(deps.storage, deps.api, Some(admin.as_str()))?;

    let config = Config {
        mint_denom: msg.init.mint_denom,
        public_price: msg.init.public_price.unwrap_or_default(),
        limits,
        payment_policy: msg.init.payment_policy.unwrap_or(PaymentPolicy::AtLeast),
        base_uri: msg.init.base_uri,
        policy_uri: msg.init.policy_uri,
    };
    CONFIG.save(deps.storage, &config)?;
    MINTING.save(deps.storage, &false)?;

    // No royalty until the owner sets one
    let royalty = RoyaltyInfo::none();
    ROYALTY.save(deps.storage, &royalty)?;

    let collection_details = msg.collection_details;
    COLLECTION.save(deps.storage, &collection_details)?;

    let collection_creation_msg: CosmosMsg = generate_create_denom_msg(
        &collection_details,
        env.contract.address,
        creation_fee,
        &royalty,
    )
    .into();

    let res = Response::new()
        .add_message(collection_creation_msg)
        .add_attribute("action", "instantiate")
        .add_attribute("owner", admin)
        .add_attribute("max_supply", config.limits.max_supply.to_string());
    Ok(res)
}

#[cfg_attr(not(feature = "library"), entry_point)]
pub fn execute(
    deps: DepsMut,
    env: Env,
    info: MessageInfo,
    msg: ExecuteMsg,
) -> Result<Response, ContractError> {
    match msg {
        ExecuteMsg::PublicMint { quantity } => execute_public_mint(deps, env, info, quantity),
        ExecuteMsg::OwnerMint {
            recipient,
            quantity,
        } => execute_owner_mint(deps, env, info, recipient, quantity),
        ExecuteMsg::SetMinting { minting } => execute_set_minting(deps, info, minting),
        ExecuteMsg::SetPublicPrice { price } => execute_set_public_price(deps, info, price),
        ExecuteMsg::SetBaseUri { base_uri } => execute_set_base_uri(deps, info, base_uri),
        ExecuteMsg::SetDefaultRoyalty {
            receiver,
            basis_points,
        } => execute_set_default_royalty(deps, env, info, receiver, basis_points),
        ExecuteMsg::Withdraw {} => execute_withdraw(deps, info),
        ExecuteMsg::UpdateOwnership(action) => execute_update_ownership(deps, env, info, action),
    }
}

fn check_minting(storage: &dyn Storage) -> Result<(), ContractError> {
    if !MINTING.load(storage)? {
        return Err(SaleError::Unauthorized {}.into());
    }
    Ok(())
}

pub fn execute_public_mint(
    deps: DepsMut,
    env: Env,
    info: MessageInfo,
    quantity: u32,
) -> Result<Response, ContractError> {
    check_quantity(quantity)?;
    check_minting(deps.storage)?;

    let config = CONFIG.load(deps.storage)?;
    let sent = may_pay(&info, &config.mint_denom)?;
    config.payment_policy.check_payment(config.public_price, quantity, sent)?;

    let already_minted = ACCOUNTING.number_minted(deps.storage, &info.sender)?;
    config.limits.check_wallet_cap(already_minted, quantity)?;
    let total_supply = ACCOUNTING.total_supply(deps.storage)?;
    config.limits.check_supply_cap(total_supply, quantity)?;

    let token_ids = ACCOUNTING.issue(deps.storage, &info.sender, MintKind::Public, quantity)?;
    // The whole payment is retained, any overpayment included
    FUNDS.deposit(deps.storage, sent)?;

    let mint_msgs = mint_messages(
        deps.storage,
        &config,
        &env.contract.address,
        &info.sender,
        &token_ids,
    )?;

    let res = Response::new()
        .add_messages(mint_msgs)
        .add_attribute("action", "public_mint")
        .add_attribute("minter", info.sender)
        .add_attribute("quantity", quantity.to_string())
        .add_attribute("first_token_id", token_ids[0].to_string())
        .add_attribute("last_token_id", token_ids[token_ids.len() - 1].to_string())
        .add_attribute("paid", sent.to_string());
    Ok(res)
}

pub fn execute_owner_mint(
    deps: DepsMut,
    env: Env,
    info: MessageInfo,
    recipient: String,
    quantity: u32,
) -> Result<Response, ContractError> {
    nonpayable(&info)?;
    assert_owner(deps.storage, &info.sender)?;
    check_minting(deps.storage)?;
    check_quantity(quantity)?;

    let recipient = deps.api.addr_validate(&recipient)?;
    let config = CONFIG.load(deps.storage)?;
    let total_supply = ACCOUNTING.total_supply(deps.storage)?;
    config.limits.check_supply_cap(total_supply, quantity)?;

    let token_ids = ACCOUNTING.issue(deps.storage, &recipient, MintKind::Owner, quantity)?;
    let mint_msgs = mint_messages(
        deps.storage,
        &config,
        &env.contract.address,
        &recipient,
        &token_ids,
    )?;

    let res = Response::new()
        .add_messages(mint_msgs)
        .add_attribute("action", "owner_mint")
        .add_attribute("recipient", recipient)
        .add_attribute("quantity", quantity.to_string())
        .add_attribute("first_token_id", token_ids[0].to_string())
        .add_attribute("last_token_id", token_ids[token_ids.len() - 1].to_string());
    Ok(res)
}

fn mint_messages(
    storage: &dyn Storage,
    config: &Config,
    minter_address: &Addr,
    recipient: &Addr,
    token_ids: &[u32],
) -> Result<Vec<CosmosMsg>, ContractError> {
    let collection = COLLECTION.load(storage)?;
    let royalty = ROYALTY.load(storage)?;
    Ok(token_ids
        .iter()
        .map(|token_id| {
            generate_mint_message(
                &collection,
                &config.base_uri,
                &royalty,
                *token_id,
                minter_address,
                recipient,
            )
            .into()
        })
        .collect())
}

pub fn execute_set_minting(
    deps: DepsMut,
    info: MessageInfo,
    minting: bool,
) -> Result<Response, ContractError> {
    nonpayable(&info)?;
    assert_owner(deps.storage, &info.sender)?;
    MINTING.save(deps.storage, &minting)?;

    let res = Response::new()
        .add_attribute("action", "set_minting")
        .add_attribute("minting", minting.to_string());
    Ok(res)
}

pub fn execute_set_public_price(
    deps: DepsMut,
    info: MessageInfo,
    price: Uint128,
) -> Result<Response, ContractError> {
    nonpayable(&info)?;
    assert_owner(deps.storage, &info.sender)?;
    let mut config = CONFIG.load(deps.storage)?;
    config.public_price = price;
    CONFIG.save(deps.storage, &config)?;

    let res = Response::new()
        .add_attribute("action", "set_public_price")
        .add_attribute("price", price.to_string())
        .add_attribute("denom", config.mint_denom);
    Ok(res)
}

pub fn execute_set_base_uri(
    deps: DepsMut,
    info: MessageInfo,
    base_uri: String,
) -> Result<Response, ContractError> {
    nonpayable(&info)?;
    assert_owner(deps.storage, &info.sender)?;
    CONFIG.update(deps.storage, |mut config| -> StdResult<_> {
        config.base_uri = base_uri.clone();
        Ok(config)
    })?;

    let res = Response::new()
        .add_attribute("action", "set_base_uri")
        .add_attribute("base_uri", base_uri);
    Ok(res)
}

pub fn execute_set_default_royalty(
    deps: DepsMut,
    env: Env,
    info: MessageInfo,
    receiver: String,
    basis_points: u16,
) -> Result<Response, ContractError> {
    nonpayable(&info)?;
    assert_owner(deps.storage, &info.sender)?;
    let receiver = deps.api.addr_validate(&receiver)?;
    let royalty = RoyaltyInfo::new(Some(receiver.clone()), basis_points)?;
    ROYALTY.save(deps.storage, &royalty)?;

    let collection = COLLECTION.load(deps.storage)?;
    let update_msg: CosmosMsg =
        generate_update_royalty_msg(&collection, &royalty, env.contract.address).into();

    let res = Response::new()
        .add_message(update_msg)
        .add_attribute("action", "set_default_royalty")
        .add_attribute("receiver", receiver)
        .add_attribute("basis_points", basis_points.to_string());
    Ok(res)
}

pub fn execute_withdraw(deps: DepsMut, info: MessageInfo) -> Result<Response, ContractError> {
    nonpayable(&info)?;
    assert_owner(deps.storage, &info.sender)?;
    let config = CONFIG.load(deps.storage)?;
    let amount = FUNDS.release_all(deps.storage)?;

    let mut messages: Vec<CosmosMsg> = vec![];
    if !amount.is_zero() {
        messages.push(CosmosMsg::Bank(BankMsg::Send {
            to_address: info.sender.to_string(),
            amount: coins(amount.u128(), config.mint_denom),
        }));
    }

    let res = Response::new()
        .add_messages(messages)
        .add_attribute("action", "withdraw")
        .add_attribute("recipient", info.sender)
        .add_attribute("amount", amount.to_string());
    Ok(res)
}

pub fn execute_update_ownership(
    deps: DepsMut,
    env: Env,
    info: MessageInfo,
    action: Action,
) -> Result<Response, ContractError> {
    nonpayable(&info)?;
    let ownership = cw_ownable::update_ownership(deps, &env.block, &info.sender, action)?;
    Ok(Response::new()
        .add_attribute("action", "update_ownership")
        .add_attributes(ownership.into_attributes()))
}

// Implement Queries
#[cfg_attr(not(feature = "library"), entry_point)]
pub fn query(
    deps: Deps,
    _env: Env,
    msg: SaleQueryMsg<OpenMinterQueryExtension>,
) -> StdResult<Binary> {
    match msg {
        SaleQueryMsg::Collection {} => to_json_binary(&query_collection(deps)?),
        SaleQueryMsg::Ownership {} => to_json_binary(&query_ownership(deps)?),
        SaleQueryMsg::UserMintingDetails { address } => {
            to_json_binary(&query_user_minting_details(deps, address)?)
        }
        SaleQueryMsg::NumberMinted { address } => {
            to_json_binary(&query_number_minted(deps, address)?)
        }
        SaleQueryMsg::TotalSupply {} => to_json_binary(&ACCOUNTING.total_supply(deps.storage)?),
        SaleQueryMsg::Funds {} => to_json_binary(&query_funds(deps)?),
        SaleQueryMsg::RoyaltyInfo { sale_price, .. } => {
            to_json_binary(&query_royalty_info(deps, sale_price)?)
        }
        SaleQueryMsg::TokenUri { token_id } => to_json_binary(&query_token_uri(deps, token_id)?),
        SaleQueryMsg::Extension(ext) => match ext {
            OpenMinterQueryExtension::Config {} => to_json_binary(&CONFIG.load(deps.storage)?),
            OpenMinterQueryExtension::Minting {} => to_json_binary(&MINTING.load(deps.storage)?),
            OpenMinterQueryExtension::PolicyUri {} => {
                to_json_binary(&CONFIG.load(deps.storage)?.policy_uri)
            }
        },
    }
}

fn query_collection(deps: Deps) -> Result<CollectionDetails, ContractError> {
    let collection = COLLECTION.load(deps.storage)?;
    Ok(collection)
}

fn query_ownership(deps: Deps) -> Result<Ownership<Addr>, ContractError> {
    Ok(cw_ownable::get_ownership(deps.storage)?)
}

fn query_user_minting_details(deps: Deps, address: String) -> Result<UserDetails, ContractError> {
    let address = deps.api.addr_validate(&address)?;
    let user_details = ACCOUNTING.user_details(deps.storage, &address)?;
    Ok(user_details)
}

fn query_number_minted(deps: Deps, address: String) -> Result<u32, ContractError> {
    let address = deps.api.addr_validate(&address)?;
    Ok(ACCOUNTING.number_minted(deps.storage, &address)?)
}

fn query_funds(deps: Deps) -> Result<Coin, ContractError> {
    let config = CONFIG.load(deps.storage)?;
    let amount = FUNDS.balance(deps.storage)?;
    Ok(Coin {
        denom: config.mint_denom,
        amount,
    })
}

fn query_royalty_info(
    deps: Deps,
    sale_price: Uint128,
) -> Result<RoyaltyInfoResponse, ContractError> {
    let royalty = ROYALTY.load(deps.storage)?;
    Ok(royalty.info(sale_price))
}

fn query_token_uri(deps: Deps, token_id: u32) -> Result<String, ContractError> {
    if !ACCOUNTING.exists(deps.storage, token_id)? {
        return Err(SaleError::NonexistentToken { token_id }.into());
    }
    let config = CONFIG.load(deps.storage)?;
    Ok(token_uri(&config.base_uri, token_id))
}
