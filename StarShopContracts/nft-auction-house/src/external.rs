use soroban_sdk::{contractclient, Address, Symbol};

/// Capability id a registry must report through `supports_interface`.
pub const NFT_INTERFACE: &str = "nft";

/// Interface of the contract that owns the traded assets.
#[allow(dead_code)]
#[contractclient(name = "AssetRegistryClient")]
pub trait AssetRegistry {
    /// Returns true when the registry implements the given capability.
    fn supports_interface(interface_id: Symbol) -> bool;

    /// Current owner of `token_id`. Fails for unknown tokens.
    fn owner_of(token_id: u32) -> Address;

    /// Whether `operator` may move `token_id` on behalf of its owner.
    fn is_approved(operator: Address, token_id: u32) -> bool;

    /// Moves `token_id` from `from` to `to`; `spender` must be the owner or approved.
    fn transfer_from(spender: Address, from: Address, to: Address, token_id: u32);

    /// Payee of the creator cut for `token_id`.
    fn creator_of(token_id: u32) -> Address;
}

/// Interface of the fungible wrapper used to hold native value in custody.
#[allow(dead_code)]
#[contractclient(name = "WrappedNativeClient")]
pub trait WrappedNative {
    /// Pulls `amount` of native value from `from` and credits `to` with the wrapped equivalent.
    fn deposit(from: Address, to: Address, amount: i128);

    /// Burns `amount` of `from`'s wrapped balance and sends the native value to `to`.
    fn withdraw(from: Address, to: Address, amount: i128);

    fn balance(id: Address) -> i128;
}
