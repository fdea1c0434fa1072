#[cfg(not(feature = "library"))]
use cosmwasm_std::entry_point;
use cosmwasm_std::{to_json_binary, Binary, Deps, DepsMut, Env, MessageInfo, Response, StdResult};
use cw2::set_contract_version;
use cw_ownable::Action;
use cw_utils::{maybe_addr, nonpayable};
use sale_types::assert_owner;
use waitlist_types::{IsMemberResponse, MembersResponse, WaitlistQueryMsg};

use crate::error::ContractError;
use crate::msg::{ExecuteMsg, InstantiateMsg};
use crate::state::WAITLIST;

// version info for migration info
const CONTRACT_NAME: &str = "crates.io:omniflix-waitlist";
const CONTRACT_VERSION: &str = env!("CARGO_PKG_VERSION");

#[cfg_attr(not(feature = "library"), entry_point)]
pub fn instantiate(
    deps: DepsMut,
    _env: Env,
    info: MessageInfo,
    msg: InstantiateMsg,
) -> Result<Response, ContractError> {
    nonpayable(&info)?;
    set_contract_version(deps.storage, CONTRACT_NAME, CONTRACT_VERSION)?;

    let admin = maybe_addr(deps.api, msg.admin)?.unwrap_or(info.sender);
    cw_ownable::initialize_owner(deps.storage, deps.api, Some(admin.as_str()))?;
    WAITLIST.initialize(deps.storage, msg.max_seats)?;

    Ok(Response::new()
        .add_attribute("action", "instantiate")
        .add_attribute("owner", admin)
        .add_attribute("max_seats", msg.max_seats.to_string()))
}

#[cfg_attr(not(feature = "library"), entry_point)]
pub fn execute(
    deps: DepsMut,
    env: Env,
    info: MessageInfo,
    msg: ExecuteMsg,
) -> Result<Response, ContractError> {
    nonpayable(&info)?;
    match msg {
        ExecuteMsg::JoinWaitlist {} => {
            let seats_filled = WAITLIST.join(deps.storage, &info.sender)?;
            Ok(Response::new()
                .add_attribute("action", "join_waitlist")
                .add_attribute("address", info.sender)
                .add_attribute("seats_filled", seats_filled.to_string()))
        }
        ExecuteMsg::SetMaxSeats { max_seats } => {
            assert_owner(deps.storage, &info.sender)?;
            // Shrinking below the seats already taken closes the waitlist
            WAITLIST.set_max_seats(deps.storage, max_seats)?;
            Ok(Response::new()
                .add_attribute("action", "set_max_seats")
                .add_attribute("max_seats", max_seats.to_string()))
        }
        ExecuteMsg::UpdateOwnership(action) => execute_update_ownership(deps, env, info, action),
    }
}

fn execute_update_ownership(
    deps: DepsMut,
    env: Env,
    info: MessageInfo,
    action: Action,
) -> Result<Response, ContractError> {
    let ownership = cw_ownable::update_ownership(deps, &env.block, &info.sender, action)?;
    Ok(Response::new()
        .add_attribute("action", "update_ownership")
        .add_attributes(ownership.into_attributes()))
}

#[cfg_attr(not(feature = "library"), entry_point)]
pub fn query(deps: Deps, _env: Env, msg: WaitlistQueryMsg) -> StdResult<Binary> {
    match msg {
        WaitlistQueryMsg::SeatsFilled {} => to_json_binary(&WAITLIST.seats_filled(deps.storage)?),
        WaitlistQueryMsg::MaxSeats {} => to_json_binary(&WAITLIST.max_seats(deps.storage)?),
        WaitlistQueryMsg::IsMember { address } => {
            let address = deps.api.addr_validate(&address)?;
            to_json_binary(&IsMemberResponse {
                is_member: WAITLIST.is_member(deps.storage, &address),
            })
        }
        WaitlistQueryMsg::Members { start_after, limit } => {
            let start_after = maybe_addr(deps.api, start_after)?;
            let members = WAITLIST
                .members(deps.storage, start_after, limit)?
                .into_iter()
                .map(|member| member.into_string())
                .collect();
            to_json_binary(&MembersResponse { members })
        }
        WaitlistQueryMsg::Ownership {} => to_json_binary(&cw_ownable::get_ownership(deps.storage)?),
    }
}
