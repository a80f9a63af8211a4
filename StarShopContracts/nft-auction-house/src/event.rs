use soroban_sdk::{contracttype, Address};

use crate::types::Currency;

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct MarketplaceInitialized {
    pub owner: Address,
    pub service_cut_bps: u32,
    pub creator_cut_bps: u32,
    pub native_allowed: bool,
}

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct AuctionCreated {
    pub auction_id: u32,
    pub asset_id: u32,
    pub asset_registry: Address,
    pub seller: Address,
    pub start_time: u64,
    pub end_time: u64,
    pub reserve_price: i128,
    pub instant_buy_price: Option<i128>,
    pub currency: Currency,
}

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct ReservePriceUpdated {
    pub auction_id: u32,
    pub asset_id: u32,
    pub asset_registry: Address,
    pub reserve_price: i128,
}

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct BidPlaced {
    pub auction_id: u32,
    pub bidder: Address,
    pub amount: i128,
    pub first_bid: bool,
    pub extended: bool,
}

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct AuctionCanceled {
    pub auction_id: u32,
    pub asset_id: u32,
    pub seller: Address,
    pub asset_registry: Address,
}

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct AuctionEnded {
    pub auction_id: u32,
    pub asset_id: u32,
    pub asset_registry: Address,
    pub seller: Address,
    pub winner: Address,
    pub amount: i128,
    pub currency: Currency,
    pub service_amount: i128,
    pub creator_amount: i128,
    pub seller_amount: i128,
}

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct CutUpdated {
    pub previous_bps: u32,
    pub new_bps: u32,
}
