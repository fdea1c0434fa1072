use cosmwasm_std::testing::{MockApi, MockStorage};
use cosmwasm_std::Empty;
use cw_multi_test::{
    App, AppBuilder, BankKeeper, DistributionKeeper, FailingModule, GovFailingModule,
    IbcFailingModule, StakeKeeper, WasmKeeper,
};

use crate::stargate::StargateKeeper;

pub type OmniflixApp = App<
    BankKeeper,
    MockApi,
    MockStorage,
    FailingModule<Empty, Empty, Empty>,
    WasmKeeper<Empty, Empty>,
    StakeKeeper,
    DistributionKeeper,
    IbcFailingModule,
    GovFailingModule,
    StargateKeeper,
>;

pub fn new_app() -> OmniflixApp {
    AppBuilder::new()
        .with_stargate(StargateKeeper {})
        .build(|_router, _api, _storage| {})
}
