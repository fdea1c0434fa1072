use cosmwasm_schema::cw_serde;
use cosmwasm_std::{Addr, Decimal, Uint128};

use crate::error::SaleError;

pub const ROYALTY_DENOMINATOR: u16 = 10_000;
// 2.5%
pub const DEFAULT_ROYALTY_BASIS_POINTS: u16 = 250;

/// Collection wide royalty, expressed in basis points of the sale price.
#[cw_serde]
pub struct RoyaltyInfo {
    pub receiver: Option<Addr>,
    pub basis_points: u16,
}

#[cw_serde]
pub struct RoyaltyInfoResponse {
    pub receiver: Option<Addr>,
    pub royalty_amount: Uint128,
}

impl RoyaltyInfo {
    pub fn new(receiver: Option<Addr>, basis_points: u16) -> Result<Self, SaleError> {
        let royalty = RoyaltyInfo {
            receiver,
            basis_points,
        };
        royalty.check_integrity()?;
        Ok(royalty)
    }

    /// No receiver and no fee.
    pub fn none() -> Self {
        RoyaltyInfo {
            receiver: None,
            basis_points: 0,
        }
    }

    pub fn check_integrity(&self) -> Result<(), SaleError> {
        if self.basis_points > ROYALTY_DENOMINATOR {
            return Err(SaleError::InvalidRoyalty {});
        }
        Ok(())
    }

    pub fn royalty_amount(&self, sale_price: Uint128) -> Uint128 {
        sale_price.multiply_ratio(self.basis_points as u128, ROYALTY_DENOMINATOR as u128)
    }

    pub fn info(&self, sale_price: Uint128) -> RoyaltyInfoResponse {
        RoyaltyInfoResponse {
            receiver: self.receiver.clone(),
            royalty_amount: self.royalty_amount(sale_price),
        }
    }

    /// Ratio handed to the ONFT module with every minted token.
    pub fn share(&self) -> Decimal {
        Decimal::from_ratio(self.basis_points as u128, ROYALTY_DENOMINATOR as u128)
    }
}
