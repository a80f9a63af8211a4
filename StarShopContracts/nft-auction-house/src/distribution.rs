use soroban_sdk::{panic_with_error, Address, Env};

use crate::checks::check_cuts;
use crate::errors::ValidationError;
use crate::escrow::{CurrencyEscrow, SettlementEscrow};
use crate::types::{Split, BPS_DENOMINATOR};

/// Splits `total` into service, creator and seller shares.
///
/// Integer division rounds the two cuts down; whatever is left, rounding dust
/// included, goes to the seller so the shares always add back up to `total`.
pub fn split(env: &Env, total: i128, service_cut_bps: u32, creator_cut_bps: u32) -> Split {
    check_cuts(env, service_cut_bps, creator_cut_bps);

    if total < 0 {
        panic_with_error!(&env, ValidationError::InvalidAmount)
    }

    let cut = |bps: u32| -> i128 {
        total
            .checked_mul(bps as i128)
            .map(|scaled| scaled / BPS_DENOMINATOR as i128)
            .unwrap_or_else(|| panic_with_error!(env, ValidationError::InvalidAmount))
    };

    let service = cut(service_cut_bps);
    let creator = cut(creator_cut_bps);

    Split {
        service,
        creator,
        seller: total - service - creator,
    }
}

// Pay every share out of custody
pub fn disburse(
    env: &Env,
    escrow: &SettlementEscrow,
    split: &Split,
    marketplace: &Address,
    creator: &Address,
    seller: &Address,
) {
    escrow.transfer_out(env, marketplace, split.service);
    escrow.transfer_out(env, creator, split.creator);
    escrow.transfer_out(env, seller, split.seller);
}
