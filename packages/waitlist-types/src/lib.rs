use cosmwasm_schema::{cw_serde, QueryResponses};
use cosmwasm_std::{Addr, Empty, Order, StdError, StdResult, Storage};
use cw_ownable::Ownership;
use cw_storage_plus::{Bound, Item, Map};
use thiserror::Error;

pub const DEFAULT_LIMIT: u32 = 10;
pub const MAX_LIMIT: u32 = 100;

#[derive(Error, Debug, PartialEq)]
pub enum WaitlistError {
    #[error(transparent)]
    Std(#[from] StdError),

    #[error("Already on the waitlist")]
    AlreadyListed {},

    #[error("Waitlist is full")]
    WaitlistFull {},
}

#[cw_serde]
#[derive(QueryResponses)]
pub enum WaitlistQueryMsg {
    #[returns(u32)]
    SeatsFilled {},
    #[returns(u32)]
    MaxSeats {},
    #[returns(IsMemberResponse)]
    IsMember { address: String },
    #[returns(MembersResponse)]
    Members {
        start_after: Option<String>,
        limit: Option<u32>,
    },
    #[returns(Ownership<Addr>)]
    Ownership {},
}

#[cw_serde]
pub struct IsMemberResponse {
    pub is_member: bool,
}

#[cw_serde]
pub struct MembersResponse {
    pub members: Vec<String>,
}

/// Bounded set of addresses. Membership is permanent and `seats_filled`
/// always equals the number of members.
pub struct Waitlist<'a> {
    members: Map<'a, Addr, Empty>,
    seats_filled: Item<'a, u32>,
    max_seats: Item<'a, u32>,
}

impl<'a> Waitlist<'a> {
    pub const fn new(
        members_key: &'a str,
        seats_filled_key: &'a str,
        max_seats_key: &'a str,
    ) -> Self {
        Waitlist {
            members: Map::new(members_key),
            seats_filled: Item::new(seats_filled_key),
            max_seats: Item::new(max_seats_key),
        }
    }

    pub fn initialize(&self, store: &mut dyn Storage, max_seats: u32) -> StdResult<()> {
        self.max_seats.save(store, &max_seats)?;
        self.seats_filled.save(store, &0)
    }

    /// Adds `address` and returns the new number of filled seats.
    pub fn join(&self, store: &mut dyn Storage, address: &Addr) -> Result<u32, WaitlistError> {
        if self.is_member(store, address) {
            return Err(WaitlistError::AlreadyListed {});
        }
        let seats_filled = self.seats_filled(store)?;
        // >= so a registry shrunk below its membership stays closed
        if seats_filled >= self.max_seats(store)? {
            return Err(WaitlistError::WaitlistFull {});
        }
        self.members.save(store, address.clone(), &Empty {})?;
        self.seats_filled.save(store, &(seats_filled + 1))?;
        Ok(seats_filled + 1)
    }

    pub fn is_member(&self, store: &dyn Storage, address: &Addr) -> bool {
        self.members.has(store, address.clone())
    }

    pub fn seats_filled(&self, store: &dyn Storage) -> StdResult<u32> {
        Ok(self.seats_filled.may_load(store)?.unwrap_or_default())
    }

    pub fn max_seats(&self, store: &dyn Storage) -> StdResult<u32> {
        Ok(self.max_seats.may_load(store)?.unwrap_or_default())
    }

    /// Not checked against `seats_filled`, shrinking freezes the registry.
    pub fn set_max_seats(&self, store: &mut dyn Storage, max_seats: u32) -> StdResult<()> {
        self.max_seats.save(store, &max_seats)
    }

    pub fn members(
        &self,
        store: &dyn Storage,
        start_after: Option<Addr>,
        limit: Option<u32>,
    ) -> StdResult<Vec<Addr>> {
        let limit = limit.unwrap_or(DEFAULT_LIMIT).min(MAX_LIMIT) as usize;
        let start = start_after.map(Bound::exclusive);
        self.members
            .keys(store, start, None, Order::Ascending)
            .take(limit)
            .collect()
    }
}
