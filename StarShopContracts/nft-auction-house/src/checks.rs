use soroban_sdk::{panic_with_error, Address, Env, Symbol};

use crate::{
    errors::{AccessError, AuctionError, BidError, ValidationError},
    external::{AssetRegistryClient, NFT_INTERFACE},
    types::*,
};

impl AuctionParams {
    pub fn validate_params(&self, env: &Env, config: &MarketplaceConfig) {
        let current_time = env.ledger().timestamp();

        // Native settlement can be switched off for the whole marketplace
        if self.currency == Currency::Native && !config.native_allowed {
            panic_with_error!(&env, ValidationError::CurrencyNotAllowed)
        }

        if self.end_time <= self.start_time {
            panic_with_error!(&env, ValidationError::InvalidAuctionWindow)
        }

        if self.end_time < current_time {
            panic_with_error!(&env, ValidationError::EndTimeInPast)
        }

        if self.reserve_price < 0 {
            panic_with_error!(&env, ValidationError::InvalidReservePrice)
        }

        if let Some(instant_buy_price) = self.instant_buy_price {
            // An instant buy below the reserve could never be taken
            if instant_buy_price <= 0 || instant_buy_price < self.reserve_price {
                panic_with_error!(&env, ValidationError::InvalidInstantBuyPrice)
            }
        }
    }

    /// Checks the registry and returns the asset's current owner.
    pub fn validate_asset(&self, env: &Env, caller: &Address) -> Address {
        let registry = AssetRegistryClient::new(env, &self.asset_registry);

        // A registry that cannot even answer the probe is not an asset registry
        let supported = matches!(
            registry.try_supports_interface(&Symbol::new(env, NFT_INTERFACE)),
            Ok(Ok(true))
        );
        if !supported {
            panic_with_error!(&env, ValidationError::UnsupportedAssetInterface)
        }

        let owner = match registry.try_owner_of(&self.asset_id) {
            Ok(Ok(owner)) => owner,
            _ => panic_with_error!(&env, ValidationError::AssetNotFound),
        };

        if &owner != caller && !registry.is_approved(caller, &self.asset_id) {
            panic_with_error!(&env, ValidationError::NotOwnerOrApproved)
        }

        owner
    }
}

impl MarketplaceConfig {
    pub fn check_owner(&self, env: &Env, caller: &Address) {
        if caller != &self.owner {
            panic_with_error!(&env, AccessError::NotOwner)
        }
    }
}

pub fn check_cuts(env: &Env, service_cut_bps: u32, creator_cut_bps: u32) {
    if service_cut_bps as u64 + creator_cut_bps as u64 > BPS_DENOMINATOR as u64 {
        panic_with_error!(&env, ValidationError::InvalidCutConfiguration)
    }
}

impl Auction {
    pub fn has_started(&self) -> bool {
        self.first_bid_time.is_some()
    }

    pub fn check_seller(&self, env: &Env, caller: &Address) {
        if caller != &self.seller {
            panic_with_error!(&env, AccessError::NotSeller)
        }
    }

    pub fn check_can_set_reserve(&self, env: &Env, reserve_price: i128) {
        // The reserve is frozen once somebody has bid
        if self.has_started() {
            panic_with_error!(&env, AuctionError::AuctionAlreadyStarted)
        }

        if reserve_price < 0 {
            panic_with_error!(&env, ValidationError::InvalidReservePrice)
        }

        if let Some(instant_buy_price) = self.instant_buy_price {
            if reserve_price > instant_buy_price {
                panic_with_error!(&env, ValidationError::InvalidInstantBuyPrice)
            }
        }
    }

    pub fn check_can_cancel(&self, env: &Env) {
        if self.curr_bidder.is_some() {
            panic_with_error!(&env, AuctionError::AuctionHasBids)
        }
    }

    pub fn check_is_open(&self, env: &Env) {
        let current_time = env.ledger().timestamp();

        if current_time < self.start_time {
            panic_with_error!(&env, AuctionError::AuctionNotOpen)
        }

        if current_time >= self.end_time {
            panic_with_error!(&env, AuctionError::AuctionExpired)
        }
    }

    /// Smallest amount the next bid may carry.
    ///
    /// The raise over the standing bid is rounded up, so even the smallest
    /// standing bid needs a strictly larger amount to be displaced.
    pub fn minimum_next_bid(&self, env: &Env) -> i128 {
        match self.curr_bid_amount {
            Some(amount) => amount
                .checked_mul(MIN_BID_INCREMENT_PERCENT as i128)
                .and_then(|scaled| scaled.checked_add(99))
                .and_then(|scaled| amount.checked_add(scaled / 100))
                .unwrap_or_else(|| panic_with_error!(env, ValidationError::InvalidAmount)),
            None => self.reserve_price,
        }
    }

    pub fn check_bid_amount(&self, env: &Env, amount: i128) {
        if amount < self.minimum_next_bid(env) {
            match self.curr_bid_amount {
                Some(_) => panic_with_error!(&env, BidError::BidIncrementTooLow),
                None => panic_with_error!(&env, BidError::BidBelowReserve),
            }
        }

        if amount <= 0 {
            panic_with_error!(&env, ValidationError::InvalidAmount)
        }
    }

    /// Native auctions need the bid attached as native value; token auctions must attach nothing.
    pub fn check_attached_value(&self, env: &Env, amount: i128, attached_value: Option<i128>) {
        let matches = match self.currency {
            Currency::Native => attached_value == Some(amount),
            Currency::Token(_) => attached_value.unwrap_or(0) == 0,
        };

        if !matches {
            panic_with_error!(&env, ValidationError::AttachedValueMismatch)
        }
    }

    pub fn check_can_bid(&self, env: &Env, amount: i128, attached_value: Option<i128>) {
        self.check_is_open(env);
        self.check_bid_amount(env, amount);
        self.check_attached_value(env, amount, attached_value);
    }

    /// Returns the instant-buy price if the auction can still be bought outright.
    pub fn check_can_buy_now(&self, env: &Env, attached_value: Option<i128>) -> i128 {
        self.check_is_open(env);

        let price = match self.instant_buy_price {
            Some(price) => price,
            None => panic_with_error!(&env, AuctionError::InstantBuyUnavailable),
        };

        // Bidding already went past the instant-buy price
        if price < self.minimum_next_bid(env) {
            panic_with_error!(&env, AuctionError::InstantBuyUnavailable)
        }

        self.check_attached_value(env, price, attached_value);
        price
    }

    pub fn check_can_end(&self, env: &Env) {
        if !self.has_started() {
            panic_with_error!(&env, AuctionError::AuctionNotStarted)
        }

        if env.ledger().timestamp() < self.end_time {
            panic_with_error!(&env, AuctionError::AuctionNotComplete)
        }
    }
}
