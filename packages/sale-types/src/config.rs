use cosmwasm_schema::cw_serde;
use thiserror::Error;

use crate::error::SaleError;

#[derive(Error, Debug, PartialEq)]
pub enum ConfigurationError {
    #[error("Invalid max supply")]
    InvalidMaxSupply {},
    #[error("Invalid per address limit")]
    InvalidPerAddressLimit {},
    #[error("Invalid mint denom")]
    InvalidMintDenom {},
}

/// Caps fixed at instantiation.
#[cw_serde]
pub struct SaleLimits {
    pub max_supply: u32,
    pub max_per_wallet: u32,
}

impl SaleLimits {
    pub fn check_integrity(&self) -> Result<(), ConfigurationError> {
        if self.max_supply == 0 {
            return Err(ConfigurationError::InvalidMaxSupply {});
        }
        if self.max_per_wallet == 0 {
            return Err(ConfigurationError::InvalidPerAddressLimit {});
        }
        Ok(())
    }

    /// Cumulative across every self-service entry point of one address.
    pub fn check_wallet_cap(&self, already_minted: u32, quantity: u32) -> Result<(), SaleError> {
        match already_minted.checked_add(quantity) {
            Some(total) if total <= self.max_per_wallet => Ok(()),
            _ => Err(SaleError::ExceedsMaxPerWallet {}),
        }
    }

    pub fn check_supply_cap(&self, total_supply: u32, quantity: u32) -> Result<(), SaleError> {
        match total_supply.checked_add(quantity) {
            Some(total) if total <= self.max_supply => Ok(()),
            _ => Err(SaleError::ExceedsMaxSupply {}),
        }
    }
}

pub fn check_mint_denom(denom: &str) -> Result<(), ConfigurationError> {
    if denom.trim().is_empty() {
        return Err(ConfigurationError::InvalidMintDenom {});
    }
    Ok(())
}

pub fn check_quantity(quantity: u32) -> Result<(), SaleError> {
    if quantity == 0 {
        return Err(SaleError::InvalidMintQuantity {});
    }
    Ok(())
}
