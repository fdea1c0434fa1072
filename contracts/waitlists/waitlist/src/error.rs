use cosmwasm_std::StdError;
use cw_ownable::OwnershipError;
use cw_utils::PaymentError;
use sale_types::SaleError;
use thiserror::Error;
use waitlist_types::WaitlistError;

#[derive(Error, Debug, PartialEq)]
pub enum ContractError {
    #[error("{0}")]
    Std(#[from] StdError),

    #[error(transparent)]
    Sale(#[from] SaleError),

    #[error(transparent)]
    Waitlist(#[from] WaitlistError),

    #[error(transparent)]
    Ownership(#[from] OwnershipError),

    #[error("Payment error")]
    PaymentError(#[from] PaymentError),
}
