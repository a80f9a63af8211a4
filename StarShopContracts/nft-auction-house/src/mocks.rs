#![cfg(test)]

// Stand-ins for the contracts the auction house talks to.

pub mod registry {
    use soroban_sdk::{
        contract, contracterror, contractimpl, contracttype, panic_with_error, Address, Env,
        Symbol,
    };

    #[contracterror]
    #[derive(Copy, Clone, Debug, Eq, PartialEq)]
    #[repr(u32)]
    pub enum RegistryError {
        NonexistentToken = 1,
        NotTokenOwner = 2,
        NotApproved = 3,
        ReceiverRejected = 4,
    }

    #[contracttype]
    #[derive(Clone)]
    enum RegistryKey {
        NextTokenId,
        Owner(u32),
        Creator(u32),
        Approved(u32),
        Blocked(Address),
    }

    /// Minimal NFT registry with approvals and creator lookup.
    #[contract]
    pub struct MockAssetRegistry;

    #[contractimpl]
    impl MockAssetRegistry {
        pub fn mint(env: Env, creator: Address, to: Address) -> u32 {
            let token_id: u32 = env
                .storage()
                .instance()
                .get(&RegistryKey::NextTokenId)
                .unwrap_or(0);

            env.storage()
                .persistent()
                .set(&RegistryKey::Owner(token_id), &to);
            env.storage()
                .persistent()
                .set(&RegistryKey::Creator(token_id), &creator);
            env.storage()
                .instance()
                .set(&RegistryKey::NextTokenId, &(token_id + 1));

            token_id
        }

        pub fn supports_interface(env: Env, interface_id: Symbol) -> bool {
            interface_id == Symbol::new(&env, "nft")
        }

        pub fn owner_of(env: Env, token_id: u32) -> Address {
            env.storage()
                .persistent()
                .get(&RegistryKey::Owner(token_id))
                .unwrap_or_else(|| panic_with_error!(&env, RegistryError::NonexistentToken))
        }

        pub fn approve(env: Env, owner: Address, operator: Address, token_id: u32) {
            owner.require_auth();

            if Self::owner_of(env.clone(), token_id) != owner {
                panic_with_error!(&env, RegistryError::NotTokenOwner);
            }

            env.storage()
                .persistent()
                .set(&RegistryKey::Approved(token_id), &operator);
        }

        pub fn is_approved(env: Env, operator: Address, token_id: u32) -> bool {
            env.storage()
                .persistent()
                .get::<RegistryKey, Address>(&RegistryKey::Approved(token_id))
                == Some(operator)
        }

        pub fn transfer_from(env: Env, spender: Address, from: Address, to: Address, token_id: u32) {
            spender.require_auth();

            let owner = Self::owner_of(env.clone(), token_id);
            if owner != from {
                panic_with_error!(&env, RegistryError::NotTokenOwner);
            }

            if spender != owner && !Self::is_approved(env.clone(), spender, token_id) {
                panic_with_error!(&env, RegistryError::NotApproved);
            }

            if env
                .storage()
                .persistent()
                .has(&RegistryKey::Blocked(to.clone()))
            {
                panic_with_error!(&env, RegistryError::ReceiverRejected);
            }

            env.storage()
                .persistent()
                .set(&RegistryKey::Owner(token_id), &to);
            env.storage()
                .persistent()
                .remove(&RegistryKey::Approved(token_id));
        }

        pub fn creator_of(env: Env, token_id: u32) -> Address {
            env.storage()
                .persistent()
                .get(&RegistryKey::Creator(token_id))
                .unwrap_or_else(|| panic_with_error!(&env, RegistryError::NonexistentToken))
        }

        /// Makes every later transfer to `receiver` fail.
        pub fn block_receiver(env: Env, receiver: Address) {
            env.storage()
                .persistent()
                .set(&RegistryKey::Blocked(receiver), &true);
        }
    }

    /// A contract that knows nothing about assets.
    #[contract]
    pub struct MockPlainContract;

    #[contractimpl]
    impl MockPlainContract {
        pub fn version() -> u32 {
            1
        }
    }
}

pub mod wrapped {
    use soroban_sdk::{contract, contractimpl, contracttype, token, Address, Env};

    #[contracttype]
    #[derive(Clone)]
    enum WrappedKey {
        Native,
        Balance(Address),
    }

    /// Wraps the native asset one-to-one.
    #[contract]
    pub struct MockWrappedNative;

    #[contractimpl]
    impl MockWrappedNative {
        pub fn init(env: Env, native: Address) {
            env.storage().instance().set(&WrappedKey::Native, &native);
        }

        pub fn deposit(env: Env, from: Address, to: Address, amount: i128) {
            from.require_auth();

            token::Client::new(&env, &Self::native(&env)).transfer(
                &from,
                &env.current_contract_address(),
                &amount,
            );

            let balance = Self::balance(env.clone(), to.clone());
            Self::set_balance(&env, &to, balance + amount);
        }

        pub fn withdraw(env: Env, from: Address, to: Address, amount: i128) {
            from.require_auth();

            let balance = Self::balance(env.clone(), from.clone());
            if balance < amount {
                panic!("insufficient wrapped balance");
            }
            Self::set_balance(&env, &from, balance - amount);

            token::Client::new(&env, &Self::native(&env)).transfer(
                &env.current_contract_address(),
                &to,
                &amount,
            );
        }

        pub fn balance(env: Env, id: Address) -> i128 {
            env.storage()
                .persistent()
                .get(&WrappedKey::Balance(id))
                .unwrap_or(0)
        }
    }

    impl MockWrappedNative {
        fn native(env: &Env) -> Address {
            env.storage()
                .instance()
                .get(&WrappedKey::Native)
                .expect("wrapper not initialized")
        }

        fn set_balance(env: &Env, id: &Address, amount: i128) {
            env.storage()
                .persistent()
                .set(&WrappedKey::Balance(id.clone()), &amount);
        }
    }
}
