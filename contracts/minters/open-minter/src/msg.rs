use cosmwasm_schema::{cw_serde, QueryResponses};
use cosmwasm_std::Uint128;
use cw_ownable::Action;
use sale_types::msg::{QueryMsg as SaleQueryMsg, SaleInstantiateMsg};
use sale_types::PaymentPolicy;

use crate::state::Config;

#[cw_serde]
pub struct OpenMinterInit {
    pub mint_denom: String,
    pub public_price: Option<Uint128>,
    pub max_supply: u32,
    pub max_per_wallet: u32,
    pub base_uri: String,
    // Fixed for the lifetime of the contract
    pub policy_uri: String,
    // Defaults to accepting overpayment
    pub payment_policy: Option<PaymentPolicy>,
}

pub type InstantiateMsg = SaleInstantiateMsg<OpenMinterInit>;

#[cw_serde]
pub enum ExecuteMsg {
    PublicMint { quantity: u32 },
    OwnerMint { recipient: String, quantity: u32 },
    SetMinting { minting: bool },
    SetPublicPrice { price: Uint128 },
    SetBaseUri { base_uri: String },
    SetDefaultRoyalty { receiver: String, basis_points: u16 },
    Withdraw {},
    UpdateOwnership(Action),
}

#[cw_serde]
#[derive(QueryResponses)]
pub enum OpenMinterQueryExtension {
    #[returns(Config)]
    Config {},
    #[returns(bool)]
    Minting {},
    #[returns(String)]
    PolicyUri {},
}

pub type QueryMsg = SaleQueryMsg<OpenMinterQueryExtension>;
