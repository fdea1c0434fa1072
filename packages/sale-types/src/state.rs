use cosmwasm_std::{Addr, StdError, StdResult, Storage, Uint128};
use cw_storage_plus::{Item, Map};

use crate::phase::MintKind;
use crate::types::UserDetails;

/// Supply counter and per address counters behind one choke point.
pub struct MintAccounting<'a> {
    users: Map<'a, Addr, UserDetails>,
    total_supply: Item<'a, u32>,
}

impl<'a> MintAccounting<'a> {
    pub const fn new(users_key: &'a str, total_supply_key: &'a str) -> Self {
        MintAccounting {
            users: Map::new(users_key),
            total_supply: Item::new(total_supply_key),
        }
    }

    pub fn total_supply(&self, store: &dyn Storage) -> StdResult<u32> {
        Ok(self.total_supply.may_load(store)?.unwrap_or_default())
    }

    pub fn user_details(&self, store: &dyn Storage, address: &Addr) -> StdResult<UserDetails> {
        Ok(self
            .users
            .may_load(store, address.clone())?
            .unwrap_or_default())
    }

    pub fn number_minted(&self, store: &dyn Storage, address: &Addr) -> StdResult<u32> {
        Ok(self.user_details(store, address)?.total_minted_count)
    }

    pub fn exists(&self, store: &dyn Storage, token_id: u32) -> StdResult<bool> {
        Ok(token_id >= 1 && token_id <= self.total_supply(store)?)
    }

    /// Allocates the next `quantity` sequential token ids to `recipient`.
    /// Caps are the caller's concern and must be checked before.
    pub fn issue(
        &self,
        store: &mut dyn Storage,
        recipient: &Addr,
        kind: MintKind,
        quantity: u32,
    ) -> StdResult<Vec<u32>> {
        let total_supply = self.total_supply(store)?;
        let new_supply = total_supply
            .checked_add(quantity)
            .ok_or_else(|| StdError::generic_err("total supply overflow"))?;
        let token_ids: Vec<u32> = (total_supply + 1..=new_supply).collect();

        let mut user_details = self.user_details(store, recipient)?;
        user_details.record(kind, &token_ids);

        self.users.save(store, recipient.clone(), &user_details)?;
        self.total_supply.save(store, &new_supply)?;
        Ok(token_ids)
    }
}

/// Payment retained by the contract until the owner withdraws it.
pub struct Vault<'a>(Item<'a, Uint128>);

impl<'a> Vault<'a> {
    pub const fn new(storage_key: &'a str) -> Self {
        Vault(Item::new(storage_key))
    }

    pub fn balance(&self, store: &dyn Storage) -> StdResult<Uint128> {
        Ok(self.0.may_load(store)?.unwrap_or_default())
    }

    pub fn deposit(&self, store: &mut dyn Storage, amount: Uint128) -> StdResult<Uint128> {
        let balance = self.balance(store)?.checked_add(amount)?;
        self.0.save(store, &balance)?;
        Ok(balance)
    }

    /// Empties the vault and returns what it held.
    pub fn release_all(&self, store: &mut dyn Storage) -> StdResult<Uint128> {
        let balance = self.balance(store)?;
        self.0.save(store, &Uint128::zero())?;
        Ok(balance)
    }
}
