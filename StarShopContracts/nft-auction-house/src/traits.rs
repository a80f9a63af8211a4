use crate::types::*;
use soroban_sdk::{Address, Env};

/// Interface for the NFT auction house contract.
pub trait AuctionHouseTrait {
    /// One-time setup of the marketplace configuration.
    fn initialize(
        env: Env,
        owner: Address,
        service_cut_bps: u32,
        creator_cut_bps: u32,
        wrapped_native: Address,
        native_allowed: bool,
    );

    /// Escrows the asset and opens an auction for it. Returns the new auction id.
    fn create_auction(env: Env, caller: Address, params: AuctionParams) -> u32;

    fn set_reserve_price(env: Env, auction_id: u32, caller: Address, reserve_price: i128);

    /// Places a bid. Native auctions expect `attached_value` to carry the bid amount.
    ///
    /// `attached_value` is only compared against `amount`; it moves nothing.
    /// The bid itself is pulled from `bidder` through the wrapper's `deposit`
    /// (native) or the token's `transfer`, so a bidder without the funds fails there.
    fn create_bid(
        env: Env,
        auction_id: u32,
        bidder: Address,
        amount: i128,
        attached_value: Option<i128>,
    );

    /// Buys the asset at its instant-buy price and settles right away.
    /// `attached_value` follows the same rule as in `create_bid`.
    fn buy_now(env: Env, auction_id: u32, buyer: Address, attached_value: Option<i128>);

    fn cancel_auction(env: Env, auction_id: u32, caller: Address);

    fn end_auction(env: Env, auction_id: u32);

    fn get_service_cut(env: Env, caller: Address) -> u32;

    fn set_service_cut(env: Env, caller: Address, service_cut_bps: u32);

    fn get_creator_cut(env: Env, caller: Address) -> u32;

    fn set_creator_cut(env: Env, caller: Address, creator_cut_bps: u32);

    fn min_bid_increment_percent(env: Env) -> u32;

    fn time_extension_buffer(env: Env) -> u64;

    fn native_allowed(env: Env) -> bool;

    fn get_auction(env: Env, auction_id: u32) -> Option<Auction>;

    fn get_total_auctions(env: Env) -> u32;

    /// Amount of `currency` currently held in custody across all auctions.
    fn get_escrow_balance(env: Env, currency: Currency) -> i128;
}
