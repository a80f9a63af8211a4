use soroban_sdk::{Address, Env, Symbol};

use crate::checks::check_cuts;
use crate::event::CutUpdated;
use crate::ledger;
use crate::types::MarketplaceConfig;

pub struct AccessGuard;

impl AccessGuard {
    /// Loads the configuration after making sure `caller` is the marketplace owner.
    pub fn verify_owner(env: &Env, caller: &Address) -> MarketplaceConfig {
        caller.require_auth();

        let config = ledger::get_config(env);
        config.check_owner(env, caller);
        config
    }

    pub fn get_service_cut(env: &Env, caller: &Address) -> u32 {
        Self::verify_owner(env, caller).service_cut_bps
    }

    pub fn get_creator_cut(env: &Env, caller: &Address) -> u32 {
        Self::verify_owner(env, caller).creator_cut_bps
    }

    pub fn set_service_cut(env: &Env, caller: &Address, service_cut_bps: u32) {
        let mut config = Self::verify_owner(env, caller);
        check_cuts(env, service_cut_bps, config.creator_cut_bps);

        let previous_bps = config.service_cut_bps;
        config.service_cut_bps = service_cut_bps;
        ledger::save_config(env, &config);

        env.events().publish(
            (Symbol::new(env, "service_cut_updated"), caller.clone()),
            CutUpdated {
                previous_bps,
                new_bps: service_cut_bps,
            },
        );
    }

    pub fn set_creator_cut(env: &Env, caller: &Address, creator_cut_bps: u32) {
        let mut config = Self::verify_owner(env, caller);
        check_cuts(env, config.service_cut_bps, creator_cut_bps);

        let previous_bps = config.creator_cut_bps;
        config.creator_cut_bps = creator_cut_bps;
        ledger::save_config(env, &config);

        env.events().publish(
            (Symbol::new(env, "creator_cut_updated"), caller.clone()),
            CutUpdated {
                previous_bps,
                new_bps: creator_cut_bps,
            },
        );
    }
}
