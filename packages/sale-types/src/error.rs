use cosmwasm_std::{OverflowError, StdError, Uint128};
use thiserror::Error;

/// Failures of the admission pipeline shared by every minter.
#[derive(Error, Debug, PartialEq)]
pub enum SaleError {
    #[error("{0}")]
    Std(#[from] StdError),

    #[error("Unauthorized")]
    Unauthorized {},

    #[error("Mint is not open")]
    MintIsNotOpen {},

    #[error("Incorrect payment amount")]
    IncorrectPaymentAmount { expected: Uint128, sent: Uint128 },

    #[error("Exceeds max per wallet")]
    ExceedsMaxPerWallet {},

    #[error("Exceeds max supply")]
    ExceedsMaxSupply {},

    #[error("Mint quantity must be greater than zero")]
    InvalidMintQuantity {},

    #[error("Royalty fee exceeds sale price")]
    InvalidRoyalty {},

    #[error("Token {token_id} does not exist")]
    NonexistentToken { token_id: u32 },

    #[error("Overflow error")]
    OverflowError {},
}

impl From<OverflowError> for SaleError {
    fn from(_err: OverflowError) -> Self {
        SaleError::OverflowError {}
    }
}
