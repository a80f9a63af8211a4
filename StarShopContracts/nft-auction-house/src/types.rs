use soroban_sdk::{contracttype, Address};

/// Minimum raise over the standing bid, in percent.
pub const MIN_BID_INCREMENT_PERCENT: u32 = 5;

/// Window (seconds) before `end_time` in which a new bid pushes the deadline back.
pub const TIME_EXTENSION_BUFFER: u64 = 900;

pub const BPS_DENOMINATOR: u32 = 10_000;

#[contracttype]
#[derive(Clone, Eq, PartialEq, Debug)]
pub enum Currency {
    Native,         // Wrapped on the way in, unwrapped on the way out
    Token(Address), // Designated token contract
}

// Standing bid, assembled from the auction record
#[derive(Clone, Eq, PartialEq, Debug)]
pub struct Bid {
    pub bidder: Address,
    pub amount: i128,
}

#[contracttype]
#[derive(Clone, Eq, PartialEq, Debug)]
pub struct Auction {
    pub id: u32,
    pub asset_id: u32,
    pub asset_registry: Address,
    pub seller: Address,
    pub start_time: u64,
    pub end_time: u64,
    pub reserve_price: i128,
    pub instant_buy_price: Option<i128>,
    pub currency: Currency,
    pub curr_bidder: Option<Address>,
    pub curr_bid_amount: Option<i128>,
    pub first_bid_time: Option<u64>,
}

impl Auction {
    pub fn current_bid(&self) -> Option<Bid> {
        match (&self.curr_bidder, self.curr_bid_amount) {
            (Some(bidder), Some(amount)) => Some(Bid {
                bidder: bidder.clone(),
                amount,
            }),
            _ => None,
        }
    }

    /// Makes `bid` the standing bid and returns the one it displaced.
    pub fn replace_bid(&mut self, bid: Bid) -> Option<Bid> {
        let displaced = self.current_bid();
        self.curr_bidder = Some(bid.bidder);
        self.curr_bid_amount = Some(bid.amount);
        displaced
    }
}

// Everything needed to list an asset
#[contracttype]
#[derive(Clone, Eq, PartialEq, Debug)]
pub struct AuctionParams {
    pub asset_id: u32,
    pub asset_registry: Address,
    pub start_time: u64,
    pub end_time: u64,
    pub reserve_price: i128,
    pub instant_buy_price: Option<i128>,
    pub currency: Currency,
}

#[contracttype]
#[derive(Clone, Eq, PartialEq, Debug)]
pub struct MarketplaceConfig {
    pub owner: Address,
    pub service_cut_bps: u32,
    pub creator_cut_bps: u32,
    pub native_allowed: bool,
    pub wrapped_native: Address,
}

/// Settlement shares of a winning amount.
#[contracttype]
#[derive(Clone, Copy, Eq, PartialEq, Debug)]
pub struct Split {
    pub service: i128,
    pub creator: i128,
    pub seller: i128,
}

/// Enum representing keys used to store contract data in Soroban storage.
#[contracttype]
#[derive(Clone)]
pub enum DataKey {
    Config,        // Marketplace-wide configuration
    TotalAuctions, // Last auction id handed out
    Auction(u32),  // A live auction by id
}
