use near_sdk::log;
use semver::Version;

use crate::*;

/// Whether state written at `stored` must be bumped to `current`.
/// Newer state than the running code is never downgraded.
pub(crate) fn needs_migration(stored: &str, current: &str) -> Result<bool, EditionsError> {
    let current = Version::parse(current)
        .map_err(|e| EditionsError::InvalidInput(format!("Bad code version: {}", e)))?;
    let stored = Version::parse(stored)
        .map_err(|e| EditionsError::InvalidInput(format!("Bad state version: {}", e)))?;
    Ok(stored < current)
}

#[near]
impl Contract {
    /// Deploys the wasm passed as raw input and chains `migrate`.
    #[payable]
    #[handle_result]
    pub fn update_contract(&mut self) -> Result<Promise, EditionsError> {
        self.check_admin(&env::predecessor_account_id())?;
        guards::check_one_yocto()?;

        let code = env::input()
            .filter(|input| !input.is_empty())
            .ok_or_else(|| EditionsError::InvalidInput("Missing contract code".into()))?
            .to_vec();
        log!("Upgrading contract by admin: {}", self.admin);

        Ok(Promise::new(env::current_account_id())
            .deploy_contract(code)
            .function_call(
                "migrate".to_string(),
                Vec::new(),
                NearToken::from_near(0),
                Gas::from_tgas(GAS_MIGRATE_TGAS),
            ))
    }

    #[private]
    #[init(ignore_state)]
    pub fn migrate() -> Self {
        const CURRENT_VERSION: &str = env!("CARGO_PKG_VERSION");

        let mut contract: Self =
            env::state_read().unwrap_or_else(|| env::panic_str("No state to migrate"));

        match needs_migration(&contract.version, CURRENT_VERSION) {
            Ok(true) => {
                let old_version = std::mem::replace(&mut contract.version, CURRENT_VERSION.to_string());
                events::emit_contract_upgraded(
                    &env::current_account_id(),
                    &old_version,
                    CURRENT_VERSION,
                );
            }
            Ok(false) => log!("State is at current or newer version, no migration needed"),
            Err(e) => env::panic_str(&e.to_string()),
        }
        contract
    }
}
