use soroban_sdk::{token, Address, Env};

use crate::external::{AssetRegistryClient, WrappedNativeClient};
use crate::types::{Currency, MarketplaceConfig};

/// Moves settlement value in and out of contract custody.
pub trait CurrencyEscrow {
    /// Takes `amount` from `from` into custody.
    fn transfer_in(&self, env: &Env, from: &Address, amount: i128);

    /// Pays `amount` out of custody to `to`.
    fn transfer_out(&self, env: &Env, to: &Address, amount: i128);

    /// Amount currently held by the contract.
    fn balance(&self, env: &Env) -> i128;
}

/// Native value, held as its wrapped representation while in custody.
pub struct NativeEscrow {
    pub wrapped: Address,
}

/// A designated token, passed straight through.
pub struct TokenEscrow {
    pub token: Address,
}

impl CurrencyEscrow for NativeEscrow {
    fn transfer_in(&self, env: &Env, from: &Address, amount: i128) {
        WrappedNativeClient::new(env, &self.wrapped).deposit(
            from,
            &env.current_contract_address(),
            &amount,
        );
    }

    fn transfer_out(&self, env: &Env, to: &Address, amount: i128) {
        WrappedNativeClient::new(env, &self.wrapped).withdraw(
            &env.current_contract_address(),
            to,
            &amount,
        );
    }

    fn balance(&self, env: &Env) -> i128 {
        WrappedNativeClient::new(env, &self.wrapped).balance(&env.current_contract_address())
    }
}

impl CurrencyEscrow for TokenEscrow {
    fn transfer_in(&self, env: &Env, from: &Address, amount: i128) {
        token::Client::new(env, &self.token).transfer(
            from,
            &env.current_contract_address(),
            &amount,
        );
    }

    fn transfer_out(&self, env: &Env, to: &Address, amount: i128) {
        token::Client::new(env, &self.token).transfer(
            &env.current_contract_address(),
            to,
            &amount,
        );
    }

    fn balance(&self, env: &Env) -> i128 {
        token::Client::new(env, &self.token).balance(&env.current_contract_address())
    }
}

/// The escrow an auction settles through, picked from its currency.
pub enum SettlementEscrow {
    Native(NativeEscrow),
    Token(TokenEscrow),
}

impl SettlementEscrow {
    pub fn for_currency(config: &MarketplaceConfig, currency: &Currency) -> Self {
        match currency {
            Currency::Native => SettlementEscrow::Native(NativeEscrow {
                wrapped: config.wrapped_native.clone(),
            }),
            Currency::Token(token) => SettlementEscrow::Token(TokenEscrow {
                token: token.clone(),
            }),
        }
    }
}

impl CurrencyEscrow for SettlementEscrow {
    fn transfer_in(&self, env: &Env, from: &Address, amount: i128) {
        match self {
            SettlementEscrow::Native(escrow) => escrow.transfer_in(env, from, amount),
            SettlementEscrow::Token(escrow) => escrow.transfer_in(env, from, amount),
        }
    }

    fn transfer_out(&self, env: &Env, to: &Address, amount: i128) {
        // Nothing to move
        if amount == 0 {
            return;
        }

        match self {
            SettlementEscrow::Native(escrow) => escrow.transfer_out(env, to, amount),
            SettlementEscrow::Token(escrow) => escrow.transfer_out(env, to, amount),
        }
    }

    fn balance(&self, env: &Env) -> i128 {
        match self {
            SettlementEscrow::Native(escrow) => escrow.balance(env),
            SettlementEscrow::Token(escrow) => escrow.balance(env),
        }
    }
}

// Move an asset from its owner into contract custody
pub fn take_asset(env: &Env, registry: &Address, spender: &Address, owner: &Address, asset_id: u32) {
    AssetRegistryClient::new(env, registry).transfer_from(
        spender,
        owner,
        &env.current_contract_address(),
        &asset_id,
    );
}

// Release an asset held by the contract
pub fn release_asset(env: &Env, registry: &Address, to: &Address, asset_id: u32) {
    let contract = env.current_contract_address();
    AssetRegistryClient::new(env, registry).transfer_from(&contract, &contract, to, &asset_id);
}

/// Like `release_asset`, but reports a refused delivery instead of aborting.
pub fn try_release_asset(env: &Env, registry: &Address, to: &Address, asset_id: u32) -> bool {
    let contract = env.current_contract_address();
    matches!(
        AssetRegistryClient::new(env, registry).try_transfer_from(
            &contract,
            &contract,
            to,
            &asset_id
        ),
        Ok(Ok(()))
    )
}
