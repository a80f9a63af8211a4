use soroban_sdk::{log, Address, Env};

use crate::escrow::{CurrencyEscrow, SettlementEscrow};
use crate::types::*;

/// What accepting a bid did to the auction.
pub struct BidOutcome {
    pub displaced: Option<Bid>,
    pub first_bid: bool,
    pub extended: bool,
}

/// Takes the new bid into custody and makes it the standing bid.
///
/// The record is only updated in memory; the caller persists it before
/// refunding the displaced bidder.
pub fn record_bid(
    env: &Env,
    escrow: &SettlementEscrow,
    auction_data: &mut Auction,
    new_bidder: Address,
    new_bid_amount: i128,
) -> BidOutcome {
    // Transfer (and for native auctions, wrap) the bid into custody
    escrow.transfer_in(env, &new_bidder, new_bid_amount);

    let current_time = env.ledger().timestamp();

    let first_bid = auction_data.first_bid_time.is_none();
    if first_bid {
        auction_data.first_bid_time = Some(current_time);
    }

    let displaced = auction_data.replace_bid(Bid {
        bidder: new_bidder,
        amount: new_bid_amount,
    });

    // Anti-sniping: a bid close to the deadline buys everyone more time
    let extended = auction_data.end_time - current_time < TIME_EXTENSION_BUFFER;
    if extended {
        auction_data.end_time += TIME_EXTENSION_BUFFER;
        log!(
            env,
            "auction {} extended to {}",
            auction_data.id,
            auction_data.end_time
        );
    }

    BidOutcome {
        displaced,
        first_bid,
        extended,
    }
}

// Give the displaced bidder back exactly what they put in
pub fn refund(env: &Env, escrow: &SettlementEscrow, displaced: &Option<Bid>) {
    if let Some(prev_bid) = displaced {
        escrow.transfer_out(env, &prev_bid.bidder, prev_bid.amount);
    }
}
