use cosmwasm_schema::{cw_serde, QueryResponses};
use cosmwasm_std::Uint128;
use cw_ownable::Action;
use sale_types::msg::{QueryMsg as SaleQueryMsg, SaleInstantiateMsg};
use sale_types::{PaymentPolicy, SalePhase};
use waitlist_types::MembersResponse;

use crate::state::Config;

#[cw_serde]
pub struct WaitlistMinterInit {
    pub mint_denom: String,
    pub waitlist_price: Option<Uint128>,
    pub public_price: Option<Uint128>,
    pub max_supply: u32,
    pub max_per_wallet: u32,
    pub max_seats: u32,
    pub base_uri: String,
    // Defaults to exact payment
    pub payment_policy: Option<PaymentPolicy>,
}

pub type InstantiateMsg = SaleInstantiateMsg<WaitlistMinterInit>;

#[cw_serde]
pub enum ExecuteMsg {
    JoinWaitlist {},
    WaitlistMint {
        quantity: u32,
    },
    PublicMint {
        quantity: u32,
    },
    OwnerMint {
        recipient: String,
        quantity: u32,
    },
    SetPhase {
        phase: SalePhase,
    },
    SetWaitlistPrice {
        price: Uint128,
    },
    SetPublicPrice {
        price: Uint128,
    },
    SetMaxSeats {
        max_seats: u32,
    },
    SetBaseUri {
        base_uri: String,
    },
    SetDefaultRoyalty {
        receiver: String,
        basis_points: u16,
    },
    Withdraw {},
    UpdateOwnership(Action),
}

#[cw_serde]
#[derive(QueryResponses)]
pub enum WaitlistMinterQueryExtension {
    #[returns(Config)]
    Config {},
    #[returns(SalePhase)]
    Phase {},
    #[returns(u32)]
    SeatsFilled {},
    #[returns(u32)]
    MaxSeats {},
    #[returns(bool)]
    IsWaitlisted { address: String },
    #[returns(MembersResponse)]
    WaitlistMembers {
        start_after: Option<String>,
        limit: Option<u32>,
    },
}

pub type QueryMsg = SaleQueryMsg<WaitlistMinterQueryExtension>;
