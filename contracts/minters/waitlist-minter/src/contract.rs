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
use sale_types::royalty::DEFAULT_ROYALTY_BASIS_POINTS;
use sale_types::utils::{
    check_collection_creation_fee, generate_create_denom_msg, generate_mint_message,
    generate_update_royalty_msg, token_uri,
};
use sale_types::{
    assert_owner, CollectionDetails, MintKind, PaymentPolicy, RoyaltyInfo, RoyaltyInfoResponse,
    SaleError, SaleLimits, SalePhase, UserDetails,
};
use waitlist_types::MembersResponse;

use crate::error::ContractError;
use crate::msg::{ExecuteMsg, InstantiateMsg, WaitlistMinterQueryExtension};
use crate::state::{Config, ACCOUNTING, COLLECTION, CONFIG, FUNDS, PHASE, ROYALTY, WAITLIST};

// version info for migration info
const CONTRACT_NAME: &str = "crates.io:omniflix-waitlist-minter";
const CONTRACT_VERSION: &str = env!("CARGO_PKG_VERSION");

#[cfg_attr(not(feature = "library"), entry_point)]
pub fn instantiate(
    deps: DepsMut,
    env: Env,
    info: MessageInfo,
    msg: InstantiateMsg,
) -> Result<Response, ContractError> {
    set_contract_version(deps.storage, CONTRACT_NAME, CONTRACT_VERSION)?;

    // The collection creation fee is set by the ONFT module and must be paid exactly
    let creation_fee = check_collection_creation_fee(deps.querier)?;
    let amount = must_pay(&info, &creation_fee.denom)?;
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

    // The deployer receives royalties until the owner changes it
    let deployer = info.sender;
    let admin = maybe_addr(deps.api, msg.admin)?.unwrap_or_else(|| deployer.clone());
    cw_ownable::initialize_owner(deps.storage, deps.api, Some(admin.as_str()))?;

    let config = Config {
        mint_denom: msg.init.mint_denom,
        waitlist_price: msg.init.waitlist_price.unwrap_or_default(),
        public_price: msg.init.public_price.unwrap_or_default(),
        limits,
        payment_policy: msg.init.payment_policy.unwrap_or(PaymentPolicy::Exact),
        base_uri: msg.init.base_uri,
    };
    CONFIG.save(deps.storage, &config)?;
    PHASE.save(deps.storage, &SalePhase::Closed)?;
    WAITLIST.initialize(deps.storage, msg.init.max_seats)?;

    let royalty = RoyaltyInfo::new(Some(deployer), DEFAULT_ROYALTY_BASIS_POINTS)?;
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
        .add_attribute("max_supply", config.limits.max_supply.to_string())
        .add_attribute("max_seats", msg.init.max_seats.to_string());
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
        ExecuteMsg::JoinWaitlist {} => execute_join_waitlist(deps, info),
        ExecuteMsg::WaitlistMint { quantity } => {
            execute_mint(deps, env, info, MintKind::Waitlist, quantity)
        }
        ExecuteMsg::PublicMint { quantity } => {
            execute_mint(deps, env, info, MintKind::Public, quantity)
        }
        ExecuteMsg::OwnerMint {
            recipient,
            quantity,
        } => execute_owner_mint(deps, env, info, recipient, quantity),
        ExecuteMsg::SetPhase { phase } => execute_set_phase(deps, info, phase),
        ExecuteMsg::SetWaitlistPrice { price } => execute_set_waitlist_price(deps, info, price),
        ExecuteMsg::SetPublicPrice { price } => execute_set_public_price(deps, info, price),
        ExecuteMsg::SetMaxSeats { max_seats } => execute_set_max_seats(deps, info, max_seats),
        ExecuteMsg::SetBaseUri { base_uri } => execute_set_base_uri(deps, info, base_uri),
        ExecuteMsg::SetDefaultRoyalty {
            receiver,
            basis_points,
        } => execute_set_default_royalty(deps, env, info, receiver, basis_points),
        ExecuteMsg::Withdraw {} => execute_withdraw(deps, info),
        ExecuteMsg::UpdateOwnership(action) => execute_update_ownership(deps, env, info, action),
    }
}

pub fn execute_join_waitlist(
    deps: DepsMut,
    info: MessageInfo,
) -> Result<Response, ContractError> {
    nonpayable(&info)?;
    let seats_filled = WAITLIST.join(deps.storage, &info.sender)?;

    let res = Response::new()
        .add_attribute("action", "join_waitlist")
        .add_attribute("address", info.sender)
        .add_attribute("seats_filled", seats_filled.to_string());
    Ok(res)
}

/// Self-service mint. Gates run in a fixed order so the first failing one
/// decides the error: phase, membership, payment, wallet cap, supply cap.
pub fn execute_mint(
    deps: DepsMut,
    env: Env,
    info: MessageInfo,
    kind: MintKind,
    quantity: u32,
) -> Result<Response, ContractError> {
    check_quantity(quantity)?;

    let phase = PHASE.load(deps.storage)?;
    phase.check_open(kind)?;

    if kind == MintKind::Waitlist && !WAITLIST.is_member(deps.storage, &info.sender) {
        return Err(ContractError::NotOnWaitlist {});
    }

    let config = CONFIG.load(deps.storage)?;
    let price = match kind {
        MintKind::Waitlist => config.waitlist_price,
        _ => config.public_price,
    };
    let sent = may_pay(&info, &config.mint_denom)?;
    config.payment_policy.check_payment(price, quantity, sent)?;

    let already_minted = ACCOUNTING.number_minted(deps.storage, &info.sender)?;
    config.limits.check_wallet_cap(already_minted, quantity)?;
    let total_supply = ACCOUNTING.total_supply(deps.storage)?;
    config.limits.check_supply_cap(total_supply, quantity)?;

    let token_ids = ACCOUNTING.issue(deps.storage, &info.sender, kind, quantity)?;
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
        .add_attribute("action", format!("{}_mint", kind.as_str()))
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
    check_quantity(quantity)?;

    let recipient = deps.api.addr_validate(&recipient)?;
    let config = CONFIG.load(deps.storage)?;
    // Gifts skip the wallet cap but never the supply cap
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
    let msgs = token_ids
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
        .collect();
    Ok(msgs)
}

pub fn execute_set_phase(
    deps: DepsMut,
    info: MessageInfo,
    phase: SalePhase,
) -> Result<Response, ContractError> {
    nonpayable(&info)?;
    assert_owner(deps.storage, &info.sender)?;
    PHASE.save(deps.storage, &phase)?;

    let res = Response::new()
        .add_attribute("action", "set_phase")
        .add_attribute("phase", phase.to_string());
    Ok(res)
}

pub fn execute_set_waitlist_price(
    deps: DepsMut,
    info: MessageInfo,
    price: Uint128,
) -> Result<Response, ContractError> {
    nonpayable(&info)?;
    assert_owner(deps.storage, &info.sender)?;
    let mut config = CONFIG.load(deps.storage)?;
    config.waitlist_price = price;
    CONFIG.save(deps.storage, &config)?;

    let res = Response::new()
        .add_attribute("action", "set_waitlist_price")
        .add_attribute("price", price.to_string())
        .add_attribute("denom", config.mint_denom);
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

/// Not checked against the seats already taken. Shrinking below them
/// freezes the waitlist, existing members keep their seat.
pub fn execute_set_max_seats(
    deps: DepsMut,
    info: MessageInfo,
    max_seats: u32,
) -> Result<Response, ContractError> {
    nonpayable(&info)?;
    assert_owner(deps.storage, &info.sender)?;
    WAITLIST.set_max_seats(deps.storage, max_seats)?;

    let res = Response::new()
        .add_attribute("action", "set_max_seats")
        .add_attribute("max_seats", max_seats.to_string());
    Ok(res)
}

pub fn execute_set_base_uri(
    deps: DepsMut,
    info: MessageInfo,
    base_uri: String,
) -> Result<Response, ContractError> {
    nonpayable(&info)?;
    assert_owner(deps.storage, &info.sender)?;
    let mut config = CONFIG.load(deps.storage)?;
    config.base_uri = base_uri.clone();
    CONFIG.save(deps.storage, &config)?;

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

    let mut res = Response::new()
        .add_attribute("action", "withdraw")
        .add_attribute("recipient", info.sender.to_string())
        .add_attribute("amount", amount.to_string());
    if !amount.is_zero() {
        res = res.add_message(BankMsg::Send {
            to_address: info.sender.into_string(),
            amount: coins(amount.u128(), config.mint_denom),
        });
    }
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
    let res = Response::new()
        .add_attribute("action", "update_ownership")
        .add_attributes(ownership.into_attributes());
    Ok(res)
}

// Implement Queries
#[cfg_attr(not(feature = "library"), entry_point)]
pub fn query(
    deps: Deps,
    env: Env,
    msg: SaleQueryMsg<WaitlistMinterQueryExtension>,
) -> StdResult<Binary> {
    match msg {
        SaleQueryMsg::Collection {} => to_json_binary(&query_collection(deps, env)?),
        SaleQueryMsg::Ownership {} => to_json_binary(&query_ownership(deps)?),
        SaleQueryMsg::UserMintingDetails { address } => {
            to_json_binary(&query_user_minting_details(deps, address)?)
        }
        SaleQueryMsg::NumberMinted { address } => {
            to_json_binary(&query_number_minted(deps, address)?)
        }
        SaleQueryMsg::TotalSupply {} => to_json_binary(&query_total_supply(deps)?),
        SaleQueryMsg::Funds {} => to_json_binary(&query_funds(deps)?),
        SaleQueryMsg::RoyaltyInfo { sale_price, .. } => {
            to_json_binary(&query_royalty_info(deps, sale_price)?)
        }
        SaleQueryMsg::TokenUri { token_id } => to_json_binary(&query_token_uri(deps, token_id)?),
        SaleQueryMsg::Extension(ext) => match ext {
            WaitlistMinterQueryExtension::Config {} => to_json_binary(&query_config(deps)?),
            WaitlistMinterQueryExtension::Phase {} => to_json_binary(&PHASE.load(deps.storage)?),
            WaitlistMinterQueryExtension::SeatsFilled {} => {
                to_json_binary(&WAITLIST.seats_filled(deps.storage)?)
            }
            WaitlistMinterQueryExtension::MaxSeats {} => {
                to_json_binary(&WAITLIST.max_seats(deps.storage)?)
            }
            WaitlistMinterQueryExtension::IsWaitlisted { address } => {
                to_json_binary(&query_is_waitlisted(deps, address)?)
            }
            WaitlistMinterQueryExtension::WaitlistMembers { start_after, limit } => {
                to_json_binary(&query_waitlist_members(deps, start_after, limit)?)
            }
        },
    }
}

fn query_collection(deps: Deps, _env: Env) -> Result<CollectionDetails, ContractError> {
    let collection = COLLECTION.load(deps.storage)?;
    Ok(collection)
}

fn query_ownership(deps: Deps) -> Result<Ownership<Addr>, ContractError> {
    let ownership = cw_ownable::get_ownership(deps.storage)?;
    Ok(ownership)
}

fn query_config(deps: Deps) -> Result<Config, ContractError> {
    let config = CONFIG.load(deps.storage)?;
    Ok(config)
}

fn query_user_minting_details(deps: Deps, address: String) -> Result<UserDetails, ContractError> {
    let address = deps.api.addr_validate(&address)?;
    let user_details = ACCOUNTING.user_details(deps.storage, &address)?;
    Ok(user_details)
}

fn query_number_minted(deps: Deps, address: String) -> Result<u32, ContractError> {
    let address = deps.api.addr_validate(&address)?;
    let number_minted = ACCOUNTING.number_minted(deps.storage, &address)?;
    Ok(number_minted)
}

fn query_total_supply(deps: Deps) -> Result<u32, ContractError> {
    let total_supply = ACCOUNTING.total_supply(deps.storage)?;
    Ok(total_supply)
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

fn query_is_waitlisted(deps: Deps, address: String) -> Result<bool, ContractError> {
    let address = deps.api.addr_validate(&address)?;
    Ok(WAITLIST.is_member(deps.storage, &address))
}

fn query_waitlist_members(
    deps: Deps,
    start_after: Option<String>,
    limit: Option<u32>,
) -> Result<MembersResponse, ContractError> {
    let start_after = maybe_addr(deps.api, start_after)?;
    let members = WAITLIST
        .members(deps.storage, start_after, limit)?
        .into_iter()
        .map(|member| member.into_string())
        .collect();
    Ok(MembersResponse { members })
}
