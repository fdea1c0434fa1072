pub mod config;
pub mod error;
pub mod msg;
pub mod phase;
pub mod royalty;
pub mod state;
pub mod types;
pub mod utils;

pub use config::{ConfigurationError, SaleLimits};
pub use error::SaleError;
pub use phase::{MintKind, PaymentPolicy, SalePhase};
pub use royalty::{RoyaltyInfo, RoyaltyInfoResponse};
pub use types::{CollectionDetails, Token, UserDetails};
pub use utils::assert_owner;
