use soroban_sdk::{panic_with_error, Env};

use crate::errors::{AccessError, AuctionError};
use crate::types::{Auction, DataKey, MarketplaceConfig};

pub fn has_config(env: &Env) -> bool {
    env.storage().instance().has(&DataKey::Config)
}

pub fn get_config(env: &Env) -> MarketplaceConfig {
    env.storage()
        .instance()
        .get::<DataKey, MarketplaceConfig>(&DataKey::Config)
        .unwrap_or_else(|| panic_with_error!(env, AccessError::NotInitialized))
}

pub fn save_config(env: &Env, config: &MarketplaceConfig) {
    env.storage().instance().set(&DataKey::Config, config);
}

pub fn get_total_auctions(env: &Env) -> u32 {
    env.storage()
        .instance()
        .get::<DataKey, u32>(&DataKey::TotalAuctions)
        .unwrap_or(0) // Default to 0 if no auction exist
}

/// Hands out the next auction id. Ids start at 1 and are never reused.
pub fn next_auction_id(env: &Env) -> u32 {
    let auction_id = get_total_auctions(env) + 1;
    env.storage()
        .instance()
        .set(&DataKey::TotalAuctions, &auction_id);
    auction_id
}

pub fn find_auction(env: &Env, auction_id: u32) -> Option<Auction> {
    env.storage()
        .persistent()
        .get::<DataKey, Auction>(&DataKey::Auction(auction_id))
}

/// Fetches a live auction or aborts with `AuctionNotFound`.
pub fn load_auction(env: &Env, auction_id: u32) -> Auction {
    find_auction(env, auction_id)
        .unwrap_or_else(|| panic_with_error!(env, AuctionError::AuctionNotFound))
}

pub fn save_auction(env: &Env, auction: &Auction) {
    env.storage()
        .persistent()
        .set(&DataKey::Auction(auction.id), auction);
}

/// Drops the record entirely; later reads see no auction at all.
pub fn clear_auction(env: &Env, auction_id: u32) {
    env.storage()
        .persistent()
        .remove(&DataKey::Auction(auction_id));
}
