use cosmwasm_std::Uint128;
use omniflix_waitlist_minter::msg::{InstantiateMsg, WaitlistMinterInit};
use sale_types::CollectionDetails;

// 0.075 FLIX
pub const WAITLIST_PRICE: u128 = 75_000;
// 0.1 FLIX
pub const PUBLIC_PRICE: u128 = 100_000;
pub const MINT_DENOM: &str = "uflix";
pub const BASE_URI: &str = "ipfs://entito-sidai/";

pub fn return_collection_details() -> CollectionDetails {
    CollectionDetails {
        collection_name: "Entito Sidai".to_string(),
        description: Some("description".to_string()),
        preview_uri: Some("preview_uri".to_string()),
        schema: Some("schema".to_string()),
        symbol: "ESIDAI".to_string(),
        id: "entitosidai".to_string(),
        uri: Some("uri".to_string()),
        uri_hash: Some("uri_hash".to_string()),
        data: Some("data".to_string()),
    }
}

pub fn return_waitlist_minter_inst_msg() -> InstantiateMsg {
    InstantiateMsg {
        admin: None,
        collection_details: return_collection_details(),
        init: WaitlistMinterInit {
            mint_denom: MINT_DENOM.to_string(),
            waitlist_price: Some(Uint128::new(WAITLIST_PRICE)),
            public_price: Some(Uint128::new(PUBLIC_PRICE)),
            max_supply: 5,
            max_per_wallet: 2,
            max_seats: 4,
            base_uri: BASE_URI.to_string(),
            payment_policy: None,
        },
    }
}
