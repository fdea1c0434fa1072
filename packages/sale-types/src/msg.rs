use cosmwasm_schema::{cw_serde, QueryResponses};
use cosmwasm_std::{Addr, Binary, Coin, Uint128};
use cw_ownable::Ownership;

use crate::royalty::RoyaltyInfoResponse;
use crate::types::{CollectionDetails, UserDetails};

#[cw_serde]
pub struct SaleInstantiateMsg<T> {
    // Defaults to the instantiator
    pub admin: Option<String>,
    pub collection_details: CollectionDetails,
    pub init: T,
}

#[cw_serde]
#[derive(QueryResponses)]
pub enum QueryMsg<T> {
    #[returns(CollectionDetails)]
    Collection {},
    #[returns(Ownership<Addr>)]
    Ownership {},
    #[returns(UserDetails)]
    UserMintingDetails { address: String },
    #[returns(u32)]
    NumberMinted { address: String },
    #[returns(u32)]
    TotalSupply {},
    // Vault balance in the mint denom
    #[returns(Coin)]
    Funds {},
    #[returns(RoyaltyInfoResponse)]
    RoyaltyInfo { token_id: u32, sale_price: Uint128 },
    #[returns(String)]
    TokenUri { token_id: u32 },
    // Response type depends on the minter
    #[returns(Binary)]
    Extension(T),
}
