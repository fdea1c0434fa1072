use cosmwasm_schema::cw_serde;
use cosmwasm_std::Uint128;
use cw_storage_plus::Item;
use sale_types::state::{MintAccounting, Vault};
use sale_types::{CollectionDetails, PaymentPolicy, RoyaltyInfo, SaleLimits};

#[cw_serde]
pub struct Config {
    pub mint_denom: String,
    pub public_price: Uint128,
    pub limits: SaleLimits,
    pub payment_policy: PaymentPolicy,
    pub base_uri: String,
    pub policy_uri: String,
}

pub const CONFIG: Item<Config> = Item::new("config");
pub const COLLECTION: Item<CollectionDetails> = Item::new("collection");
pub const ROYALTY: Item<RoyaltyInfo> = Item::new("royalty");
pub const MINTING: Item<bool> = Item::new("minting");
pub const ACCOUNTING: MintAccounting = MintAccounting::new("minted_tokens", "total_supply");
pub const FUNDS: Vault = Vault::new("funds");
