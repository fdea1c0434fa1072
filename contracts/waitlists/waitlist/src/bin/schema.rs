use cosmwasm_schema::write_api;

use omniflix_waitlist::msg::{ExecuteMsg, InstantiateMsg};
use waitlist_types::WaitlistQueryMsg;

fn main() {
    write_api! {
        instantiate: InstantiateMsg,
        execute: ExecuteMsg,
        query: WaitlistQueryMsg,
    }
}
