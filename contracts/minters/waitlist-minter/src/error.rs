use cosmwasm_std::{StdError, Uint128};
use cw_ownable::OwnershipError;
use cw_utils::PaymentError;
use sale_types::{ConfigurationError, SaleError};
use thiserror::Error;
use waitlist_types::WaitlistError;

#[derive(Error, Debug, PartialEq)]
pub enum ContractError {
    #[error("{0}")]
    Std(#[from] StdError),

    #[error(transparent)]
    Sale(#[from] SaleError),

    #[error(transparent)]
    ConfigurationError(#[from] ConfigurationError),

    #[error(transparent)]
    Waitlist(#[from] WaitlistError),

    #[error(transparent)]
    Ownership(#[from] OwnershipError),

    #[error("Payment error")]
    PaymentError(#[from] PaymentError),

    #[error("Invalid creation fee")]
    InvalidCreationFee { expected: Uint128, sent: Uint128 },

    #[error("Not on the waitlist")]
    NotOnWaitlist {},
}

impl From<ContractError> for StdError {
    fn from(err: ContractError) -> StdError {
        StdError::generic_err(err.to_string())
    }
}
