use cosmwasm_schema::cw_serde;

use crate::phase::MintKind;

#[cw_serde]
pub struct CollectionDetails {
    pub collection_name: String,
    pub description: Option<String>,
    pub preview_uri: Option<String>,
    pub schema: Option<String>,
    pub symbol: String,
    pub id: String,
    pub uri: Option<String>,
    pub uri_hash: Option<String>,
    pub data: Option<String>,
}

#[cw_serde]
pub struct Token {
    pub token_id: String,
}

/// Per address mint accounting. Counters only ever grow.
#[cw_serde]
#[derive(Default)]
pub struct UserDetails {
    pub minted_tokens: Vec<Token>,
    // Every token issued to the address, owner gifts included
    pub total_minted_count: u32,
    pub waitlist_mint_count: u32,
    pub public_mint_count: u32,
    pub gifted_count: u32,
}

impl UserDetails {
    pub fn record(&mut self, kind: MintKind, token_ids: &[u32]) {
        let quantity = token_ids.len() as u32;
        self.minted_tokens
            .extend(token_ids.iter().map(|id| Token {
                token_id: id.to_string(),
            }));
        self.total_minted_count += quantity;
        match kind {
            MintKind::Waitlist => self.waitlist_mint_count += quantity,
            MintKind::Public => self.public_mint_count += quantity,
            MintKind::Owner => self.gifted_count += quantity,
        }
    }
}
