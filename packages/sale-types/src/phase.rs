use std::fmt;

use cosmwasm_schema::cw_serde;
use cosmwasm_std::Uint128;

use crate::error::SaleError;

/// Owner controlled gate deciding which self-service mint is callable.
/// Any phase can be set from any other phase, backwards included.
#[cw_serde]
#[derive(Copy, Eq, Default)]
pub enum SalePhase {
    #[default]
    Closed,
    Waitlist,
    Public,
    Complete,
}

/// Entry point a mint arrived through.
#[cw_serde]
#[derive(Copy, Eq)]
pub enum MintKind {
    Waitlist,
    Public,
    Owner,
}

impl SalePhase {
    /// Owner mints are never gated by the phase.
    pub fn permits(&self, kind: MintKind) -> bool {
        matches!(
            (self, kind),
            (SalePhase::Waitlist, MintKind::Waitlist)
                | (SalePhase::Public, MintKind::Public)
                | (_, MintKind::Owner)
        )
    }

    pub fn check_open(&self, kind: MintKind) -> Result<(), SaleError> {
        if !self.permits(kind) {
            return Err(SaleError::MintIsNotOpen {});
        }
        Ok(())
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            SalePhase::Closed => "closed",
            SalePhase::Waitlist => "waitlist",
            SalePhase::Public => "public",
            SalePhase::Complete => "complete",
        }
    }
}

impl fmt::Display for SalePhase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl MintKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            MintKind::Waitlist => "waitlist",
            MintKind::Public => "public",
            MintKind::Owner => "owner",
        }
    }
}

/// How the attached payment is matched against `price * quantity`.
#[cw_serde]
#[derive(Copy, Eq)]
pub enum PaymentPolicy {
    /// Payment must equal the required amount.
    Exact,
    /// Overpayment is accepted and retained.
    AtLeast,
}

impl PaymentPolicy {
    pub fn accepts(&self, required: Uint128, sent: Uint128) -> bool {
        match self {
            PaymentPolicy::Exact => sent == required,
            PaymentPolicy::AtLeast => sent >= required,
        }
    }

    /// Checks `sent` against `price * quantity`.
    pub fn check_payment(
        &self,
        price: Uint128,
        quantity: u32,
        sent: Uint128,
    ) -> Result<(), SaleError> {
        let required = price.checked_mul(Uint128::from(quantity))?;
        if !self.accepts(required, sent) {
            return Err(SaleError::IncorrectPaymentAmount {
                expected: required,
                sent,
            });
        }
        Ok(())
    }
}
