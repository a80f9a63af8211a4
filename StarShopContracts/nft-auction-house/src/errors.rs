use soroban_sdk::contracterror;

#[contracterror]
#[derive(Copy, Clone, Debug, Eq, PartialEq, PartialOrd, Ord)]
#[repr(u32)]
pub enum ValidationError {
    UnsupportedAssetInterface = 101,
    AssetNotFound = 102,
    CurrencyNotAllowed = 103,
    NotOwnerOrApproved = 104,
    InvalidAuctionWindow = 105,
    EndTimeInPast = 106,
    InvalidReservePrice = 107,
    InvalidInstantBuyPrice = 108,
    AttachedValueMismatch = 109,
    InvalidAmount = 110,
    InvalidCutConfiguration = 111,
}

#[contracterror]
#[derive(Copy, Clone, Debug, Eq, PartialEq, PartialOrd, Ord)]
#[repr(u32)]
pub enum AuctionError {
    AuctionNotFound = 201,
    AuctionAlreadyStarted = 202,
    AuctionNotStarted = 203,
    AuctionNotComplete = 204,
    AuctionExpired = 205,
    AuctionHasBids = 206,
    AuctionNotOpen = 207,
    InstantBuyUnavailable = 208,
}

#[contracterror]
#[derive(Copy, Clone, Debug, Eq, PartialEq, PartialOrd, Ord)]
#[repr(u32)]
pub enum AccessError {
    NotOwner = 301,
    NotSeller = 302,
    AlreadyInitialized = 303,
    NotInitialized = 304,
}

#[contracterror]
#[derive(Copy, Clone, Debug, Eq, PartialEq, PartialOrd, Ord)]
#[repr(u32)]
pub enum BidError {
    BidBelowReserve = 401,
    BidIncrementTooLow = 402,
}
