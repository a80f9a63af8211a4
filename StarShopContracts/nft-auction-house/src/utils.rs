use soroban_sdk::Address;

use crate::types::*;

pub struct AuctionParamsBuilder {
    asset_id: u32,
    asset_registry: Address,
    start_time: u64,
    end_time: u64,
    reserve_price: i128,
    instant_buy_price: Option<i128>,
    currency: Currency,
}

impl AuctionParamsBuilder {
    /// Initialize the builder with required fields. Settles in native value by default.
    pub fn new(
        asset_registry: Address,
        asset_id: u32,
        start_time: u64,
        end_time: u64,
        reserve_price: i128,
    ) -> Self {
        Self {
            asset_id,
            asset_registry,
            start_time,
            end_time,
            reserve_price,
            instant_buy_price: None,
            currency: Currency::Native,
        }
    }

    // Set optional fields

    pub fn instant_buy_price(mut self, price: i128) -> Self {
        self.instant_buy_price = Some(price);
        self
    }

    pub fn token(mut self, token: Address) -> Self {
        self.currency = Currency::Token(token);
        self
    }

    pub fn build(self) -> AuctionParams {
        AuctionParams {
            asset_id: self.asset_id,
            asset_registry: self.asset_registry,
            start_time: self.start_time,
            end_time: self.end_time,
            reserve_price: self.reserve_price,
            instant_buy_price: self.instant_buy_price,
            currency: self.currency,
        }
    }
}
