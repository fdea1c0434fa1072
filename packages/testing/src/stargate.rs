use anyhow::{bail, Result};
use cosmwasm_std::{from_json, to_json_binary, Addr, Api, Binary, BlockInfo, Querier, Storage};
use cw_multi_test::{error::AnyResult, AppResponse, CosmosRouter, Stargate};
use omniflix_std::types::omniflix::onft::v1beta1::{
    Collection, Denom, MsgCreateDenom, MsgMintOnft, MsgUpdateDenom,
};
use omniflix_std::types::{
    cosmos::base::v1beta1::Coin,
    omniflix::onft::v1beta1::{Onft, Params, QueryParamsResponse},
};
use prost::Message;

const COLLECTION_PREFIX: &str = "collection";
pub const CREATION_FEE_DENOM: &str = "uflix";
pub const CREATION_FEE_AMOUNT: u128 = 1_000_000;

/// Stores one collection per creator address, enough to inspect minted ONFTs.
pub struct StargateKeeper {}

pub fn collection_key(creator: &str) -> String {
    format!("collections:{}:{}", COLLECTION_PREFIX, creator)
}

fn load_collection(storage: &dyn Storage, creator: &Addr) -> Result<Collection> {
    match storage.get(collection_key(creator.as_str()).as_bytes()) {
        Some(raw) => Ok(from_json(raw)?),
        None => bail!("no collection created by {}", creator),
    }
}

fn save_collection(storage: &mut dyn Storage, creator: &Addr, collection: &Collection) -> Result<()> {
    storage.set(
        collection_key(creator.as_str()).as_bytes(),
        &to_json_binary(collection)?,
    );
    Ok(())
}

impl Stargate for StargateKeeper {
    fn execute<ExecC, QueryC>(
        &self,
        _api: &dyn Api,
        storage: &mut dyn Storage,
        _router: &dyn CosmosRouter<ExecC = ExecC, QueryC = QueryC>,
        _block: &BlockInfo,
        sender: Addr,
        type_url: String,
        value: Binary,
    ) -> AnyResult<AppResponse> {
        if type_url == *"/OmniFlix.onft.v1beta1.MsgCreateDenom" {
            let msg = MsgCreateDenom::decode(value.as_slice())?;
            let collection = Collection {
                denom: Some(Denom {
                    creator: sender.to_string(),
                    data: msg.data,
                    name: msg.name,
                    id: msg.id,
                    preview_uri: msg.preview_uri,
                    description: msg.description,
                    schema: msg.schema,
                    symbol: msg.symbol,
                    uri: msg.uri,
                    uri_hash: msg.uri_hash,
                    royalty_receivers: msg.royalty_receivers,
                }),
                onfts: vec![],
            };
            save_collection(storage, &sender, &collection)?;
        } else if type_url == *"/OmniFlix.onft.v1beta1.MsgMintONFT" {
            let msg = MsgMintOnft::decode(value.as_slice())?;
            let mut collection = load_collection(storage, &sender)?;
            collection.onfts.push(Onft {
                id: msg.id,
                created_at: None,
                nsfw: msg.nsfw,
                owner: msg.recipient,
                data: msg.data,
                transferable: msg.transferable,
                extensible: msg.extensible,
                metadata: msg.metadata,
                royalty_share: msg.royalty_share,
            });
            save_collection(storage, &sender, &collection)?;
        } else if type_url == *"/OmniFlix.onft.v1beta1.MsgUpdateDenom" {
            let msg = MsgUpdateDenom::decode(value.as_slice())?;
            let mut collection = load_collection(storage, &sender)?;
            if let Some(denom) = collection.denom.as_mut() {
                denom.royalty_receivers = msg.royalty_receivers;
            }
            save_collection(storage, &sender, &collection)?;
        } else {
            bail!("unsupported stargate message {}", type_url);
        }
        Ok(AppResponse::default())
    }

    fn query(
        &self,
        _api: &dyn Api,
        _storage: &dyn Storage,
        _querier: &dyn Querier,
        _block: &BlockInfo,
        path: String,
        _data: Binary,
    ) -> AnyResult<Binary> {
        if path == *"/OmniFlix.onft.v1beta1.Query/Params" {
            let params = QueryParamsResponse {
                params: Some(Params {
                    denom_creation_fee: Some(Coin {
                        denom: CREATION_FEE_DENOM.to_string(),
                        amount: CREATION_FEE_AMOUNT.to_string(),
                    }),
                }),
            };
            return Ok(to_json_binary(&params)?);
        }
        bail!("unsupported stargate query {}", path)
    }
}
