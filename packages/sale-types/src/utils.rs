use std::str::FromStr;

use cosmwasm_std::{Addr, Coin, Decimal, QuerierWrapper, StdError, Storage, Uint128};
use cw_ownable::OwnershipError;
use omniflix_std::types::omniflix::onft::v1beta1::{
    Metadata, MsgCreateDenom, MsgMintOnft, MsgUpdateDenom, OnftQuerier, WeightedAddress,
};

use crate::error::SaleError;
use crate::royalty::RoyaltyInfo;
use crate::types::CollectionDetails;

const DO_NOT_MODIFY: &str = "[do-not-modify]";

/// Single capability check run at the top of every privileged operation.
pub fn assert_owner(storage: &dyn Storage, sender: &Addr) -> Result<(), SaleError> {
    match cw_ownable::assert_owner(storage, sender) {
        Ok(()) => Ok(()),
        Err(OwnershipError::Std(err)) => Err(SaleError::Std(err)),
        Err(_) => Err(SaleError::Unauthorized {}),
    }
}

pub fn token_uri(base_uri: &str, token_id: u32) -> String {
    if base_uri.is_empty() {
        return String::new();
    }
    format!("{}{}", base_uri, token_id)
}

pub fn royalty_receivers(royalty: &RoyaltyInfo) -> Vec<WeightedAddress> {
    match &royalty.receiver {
        Some(receiver) => vec![WeightedAddress {
            address: receiver.to_string(),
            weight: Decimal::one().atomics().to_string(),
        }],
        None => vec![],
    }
}

pub fn check_collection_creation_fee(querier: QuerierWrapper) -> Result<Coin, StdError> {
    let onft_querier = OnftQuerier::new(&querier);
    let creation_fee = onft_querier
        .params()?
        .params
        .and_then(|params| params.denom_creation_fee)
        .ok_or_else(|| StdError::generic_err("Denom creation fee not found"))?;
    Ok(Coin {
        denom: creation_fee.denom,
        amount: Uint128::from_str(&creation_fee.amount)?,
    })
}

pub fn generate_create_denom_msg(
    collection: &CollectionDetails,
    minter_address: Addr,
    creation_fee: Coin,
    royalty: &RoyaltyInfo,
) -> MsgCreateDenom {
    MsgCreateDenom {
        creation_fee: Some(creation_fee.into()),
        id: collection.id.clone(),
        symbol: collection.symbol.clone(),
        name: collection.collection_name.clone(),
        description: collection.description.clone().unwrap_or_default(),
        preview_uri: collection.preview_uri.clone().unwrap_or_default(),
        schema: collection.schema.clone().unwrap_or_default(),
        sender: minter_address.into_string(),
        uri: collection.uri.clone().unwrap_or_default(),
        uri_hash: collection.uri_hash.clone().unwrap_or_default(),
        data: collection.data.clone().unwrap_or_default(),
        royalty_receivers: royalty_receivers(royalty),
    }
}

pub fn generate_mint_message(
    collection: &CollectionDetails,
    base_uri: &str,
    royalty: &RoyaltyInfo,
    token_id: u32,
    minter_address: &Addr,
    recipient: &Addr,
) -> MsgMintOnft {
    let media_uri = token_uri(base_uri, token_id);
    let metadata = Metadata {
        name: format!("{} #{}", collection.collection_name, token_id),
        description: collection.description.clone().unwrap_or_default(),
        preview_uri: collection
            .preview_uri
            .clone()
            .unwrap_or_else(|| media_uri.clone()),
        media_uri,
        uri_hash: String::new(),
    };
    MsgMintOnft {
        data: String::new(),
        id: token_id.to_string(),
        metadata: Some(metadata),
        denom_id: collection.id.clone(),
        transferable: true,
        sender: minter_address.to_string(),
        extensible: false,
        nsfw: false,
        recipient: recipient.to_string(),
        royalty_share: royalty.share().atomics().to_string(),
    }
}

/// Pushes the new royalty receiver to the denom, leaving everything else untouched.
pub fn generate_update_royalty_msg(
    collection: &CollectionDetails,
    royalty: &RoyaltyInfo,
    minter_address: Addr,
) -> MsgUpdateDenom {
    MsgUpdateDenom {
        id: collection.id.clone(),
        sender: minter_address.into_string(),
        name: DO_NOT_MODIFY.to_string(),
        description: DO_NOT_MODIFY.to_string(),
        preview_uri: DO_NOT_MODIFY.to_string(),
        royalty_receivers: royalty_receivers(royalty),
    }
}
