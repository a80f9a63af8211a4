#![no_std]

pub mod admin;
pub mod auction;
pub mod bid;
pub mod checks;
pub mod distribution;
pub mod errors;
pub mod escrow;
pub mod event;
pub mod external;
pub mod ledger;
pub mod traits;
pub mod types;
pub mod utils;

mod mocks;
