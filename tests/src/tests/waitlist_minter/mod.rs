mod owner_minting;
mod payment_policy;
mod waitlist_minter_creation;
