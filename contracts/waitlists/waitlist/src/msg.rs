use cosmwasm_schema::cw_serde;
use cw_ownable::Action;

#[cw_serde]
pub struct InstantiateMsg {
    // Defaults to the instantiator
    pub admin: Option<String>,
    pub max_seats: u32,
}

#[cw_serde]
pub enum ExecuteMsg {
    JoinWaitlist {},
    SetMaxSeats { max_seats: u32 },
    UpdateOwnership(Action),
}
