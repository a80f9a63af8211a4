use crate::admin::AccessGuard;
use crate::bid::{record_bid, refund};
use crate::checks::check_cuts;
use crate::errors::{AccessError, AuctionError};
use crate::escrow::{self, CurrencyEscrow, SettlementEscrow};
use crate::event::{
    AuctionCanceled, AuctionCreated, AuctionEnded, BidPlaced, MarketplaceInitialized,
    ReservePriceUpdated,
};
use crate::external::AssetRegistryClient;
use crate::traits::AuctionHouseTrait;
use crate::{distribution, ledger, types::*};
use soroban_sdk::{contract, contractimpl, log, panic_with_error, Address, Env, Symbol};

#[contract]
pub struct AuctionHouseContract;

#[contractimpl]
impl AuctionHouseTrait for AuctionHouseContract {
    /// Stores the marketplace configuration. Can only run once.
    fn initialize(
        env: Env,
        owner: Address,
        service_cut_bps: u32,
        creator_cut_bps: u32,
        wrapped_native: Address,
        native_allowed: bool,
    ) {
        if ledger::has_config(&env) {
            panic_with_error!(&env, AccessError::AlreadyInitialized);
        }

        owner.require_auth();
        check_cuts(&env, service_cut_bps, creator_cut_bps);

        let config = MarketplaceConfig {
            owner: owner.clone(),
            service_cut_bps,
            creator_cut_bps,
            native_allowed,
            wrapped_native,
        };
        ledger::save_config(&env, &config);

        env.events().publish(
            (Symbol::new(&env, "marketplace_initialized"), owner.clone()),
            MarketplaceInitialized {
                owner,
                service_cut_bps,
                creator_cut_bps,
                native_allowed,
            },
        );
    }

    /// Validates the listing, takes the asset into custody and opens the auction.
    fn create_auction(env: Env, caller: Address, params: AuctionParams) -> u32 {
        caller.require_auth(); // Owner or an approved delegate

        let config = ledger::get_config(&env);

        params.validate_params(&env, &config);
        let seller = params.validate_asset(&env, &caller);

        let auction_id = ledger::next_auction_id(&env);

        let auction = Auction {
            id: auction_id,
            asset_id: params.asset_id,
            asset_registry: params.asset_registry.clone(),
            seller: seller.clone(),
            start_time: params.start_time,
            end_time: params.end_time,
            reserve_price: params.reserve_price,
            instant_buy_price: params.instant_buy_price,
            currency: params.currency.clone(),
            curr_bidder: None,
            curr_bid_amount: None,
            first_bid_time: None,
        };

        ledger::save_auction(&env, &auction);

        // Escrow the asset
        escrow::take_asset(
            &env,
            &params.asset_registry,
            &caller,
            &seller,
            params.asset_id,
        );

        env.events().publish(
            (Symbol::new(&env, "auction_created"), seller.clone()),
            AuctionCreated {
                auction_id,
                asset_id: params.asset_id,
                asset_registry: params.asset_registry,
                seller,
                start_time: params.start_time,
                end_time: params.end_time,
                reserve_price: params.reserve_price,
                instant_buy_price: params.instant_buy_price,
                currency: params.currency,
            },
        );

        auction_id
    }

    /// Changes the reserve price of an auction nobody has bid on yet.
    fn set_reserve_price(env: Env, auction_id: u32, caller: Address, reserve_price: i128) {
        caller.require_auth();

        let mut auction_data = ledger::load_auction(&env, auction_id);

        auction_data.check_seller(&env, &caller);
        auction_data.check_can_set_reserve(&env, reserve_price);

        auction_data.reserve_price = reserve_price;
        ledger::save_auction(&env, &auction_data);

        env.events().publish(
            (Symbol::new(&env, "reserve_price_updated"), caller),
            ReservePriceUpdated {
                auction_id,
                asset_id: auction_data.asset_id,
                asset_registry: auction_data.asset_registry,
                reserve_price,
            },
        );
    }

    /// Places a bid, refunding whoever held the standing bid.
    fn create_bid(
        env: Env,
        auction_id: u32,
        bidder: Address,
        amount: i128,
        attached_value: Option<i128>,
    ) {
        bidder.require_auth(); // Ensure bidder is authenticated

        let config = ledger::get_config(&env);
        let mut auction_data = ledger::load_auction(&env, auction_id);

        auction_data.check_can_bid(&env, amount, attached_value);

        let escrow = SettlementEscrow::for_currency(&config, &auction_data.currency);
        let outcome = record_bid(&env, &escrow, &mut auction_data, bidder.clone(), amount);

        // Persist before any value leaves the contract
        ledger::save_auction(&env, &auction_data);
        refund(&env, &escrow, &outcome.displaced);

        env.events().publish(
            (Symbol::new(&env, "bid_placed"), bidder.clone()),
            BidPlaced {
                auction_id,
                bidder,
                amount,
                first_bid: outcome.first_bid,
                extended: outcome.extended,
            },
        );
    }

    /// Takes the instant-buy offer and settles immediately.
    fn buy_now(env: Env, auction_id: u32, buyer: Address, attached_value: Option<i128>) {
        buyer.require_auth();

        let config = ledger::get_config(&env);
        let mut auction_data = ledger::load_auction(&env, auction_id);

        let price = auction_data.check_can_buy_now(&env, attached_value);

        let escrow = SettlementEscrow::for_currency(&config, &auction_data.currency);
        let outcome = record_bid(&env, &escrow, &mut auction_data, buyer, price);

        ledger::clear_auction(&env, auction_id);
        refund(&env, &escrow, &outcome.displaced);

        Self::_settle(&env, &config, &escrow, auction_data);
    }

    /// Cancels an auction without bids and hands the asset back to the seller.
    fn cancel_auction(env: Env, auction_id: u32, caller: Address) {
        caller.require_auth();

        let auction_data = ledger::load_auction(&env, auction_id);

        auction_data.check_seller(&env, &caller); // Only seller can cancel
        auction_data.check_can_cancel(&env);

        ledger::clear_auction(&env, auction_id);

        escrow::release_asset(
            &env,
            &auction_data.asset_registry,
            &auction_data.seller,
            auction_data.asset_id,
        );

        Self::_publish_canceled(&env, &auction_data);
    }

    /// Settles a finished auction. Anyone may call it.
    fn end_auction(env: Env, auction_id: u32) {
        let config = ledger::get_config(&env);
        let auction_data = ledger::load_auction(&env, auction_id);

        auction_data.check_can_end(&env);

        ledger::clear_auction(&env, auction_id);

        let escrow = SettlementEscrow::for_currency(&config, &auction_data.currency);
        Self::_settle(&env, &config, &escrow, auction_data);
    }

    fn get_service_cut(env: Env, caller: Address) -> u32 {
        AccessGuard::get_service_cut(&env, &caller)
    }

    fn set_service_cut(env: Env, caller: Address, service_cut_bps: u32) {
        AccessGuard::set_service_cut(&env, &caller, service_cut_bps)
    }

    fn get_creator_cut(env: Env, caller: Address) -> u32 {
        AccessGuard::get_creator_cut(&env, &caller)
    }

    fn set_creator_cut(env: Env, caller: Address, creator_cut_bps: u32) {
        AccessGuard::set_creator_cut(&env, &caller, creator_cut_bps)
    }

    fn min_bid_increment_percent(_env: Env) -> u32 {
        MIN_BID_INCREMENT_PERCENT
    }

    fn time_extension_buffer(_env: Env) -> u64 {
        TIME_EXTENSION_BUFFER
    }

    fn native_allowed(env: Env) -> bool {
        ledger::get_config(&env).native_allowed
    }

    fn get_auction(env: Env, auction_id: u32) -> Option<Auction> {
        ledger::find_auction(&env, auction_id)
    }

    fn get_total_auctions(env: Env) -> u32 {
        ledger::get_total_auctions(&env)
    }

    fn get_escrow_balance(env: Env, currency: Currency) -> i128 {
        let config = ledger::get_config(&env);
        SettlementEscrow::for_currency(&config, &currency).balance(&env)
    }
}

impl AuctionHouseContract {
    /// Internal helper that delivers the asset to the standing bidder and pays everyone out.
    ///
    /// The record must already be cleared. If the registry refuses delivery the
    /// sale is unwound instead: the asset returns to the seller and the bidder
    /// gets the full amount back.
    fn _settle(
        env: &Env,
        config: &MarketplaceConfig,
        escrow: &SettlementEscrow,
        auction: Auction,
    ) {
        let winning_bid = match auction.current_bid() {
            Some(bid) => bid,
            None => panic_with_error!(env, AuctionError::AuctionNotStarted),
        };

        let delivered = escrow::try_release_asset(
            env,
            &auction.asset_registry,
            &winning_bid.bidder,
            auction.asset_id,
        );

        if !delivered {
            log!(
                env,
                "auction {} winner cannot receive asset, unwinding sale",
                auction.id
            );

            escrow::release_asset(
                env,
                &auction.asset_registry,
                &auction.seller,
                auction.asset_id,
            );
            escrow.transfer_out(env, &winning_bid.bidder, winning_bid.amount);

            Self::_publish_canceled(env, &auction);
            return;
        }

        let split = distribution::split(
            env,
            winning_bid.amount,
            config.service_cut_bps,
            config.creator_cut_bps,
        );
        let creator =
            AssetRegistryClient::new(env, &auction.asset_registry).creator_of(&auction.asset_id);

        distribution::disburse(env, escrow, &split, &config.owner, &creator, &auction.seller);

        env.events().publish(
            (Symbol::new(env, "auction_ended"), winning_bid.bidder.clone()),
            AuctionEnded {
                auction_id: auction.id,
                asset_id: auction.asset_id,
                asset_registry: auction.asset_registry,
                seller: auction.seller,
                winner: winning_bid.bidder,
                amount: winning_bid.amount,
                currency: auction.currency,
                service_amount: split.service,
                creator_amount: split.creator,
                seller_amount: split.seller,
            },
        );
    }

    fn _publish_canceled(env: &Env, auction: &Auction) {
        env.events().publish(
            (Symbol::new(env, "auction_canceled"), auction.seller.clone()),
            AuctionCanceled {
                auction_id: auction.id,
                asset_id: auction.asset_id,
                seller: auction.seller.clone(),
                asset_registry: auction.asset_registry.clone(),
            },
        );
    }
}
