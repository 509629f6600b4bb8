use crate::tests::test_utils::*;
use crate::*;
use near_sdk::testing_env;

// --- new ---

#[test]
fn new_seeds_default_token_type() {
    let contract = new_contract();

    assert_eq!(contract.get_token_types_amount(), 1);
    let seed = contract.get_token_type(DEFAULT_TYPE_INDEX).unwrap();
    assert_eq!(seed.price_per_copy, U128(PRICE));
    assert_eq!(seed.max_supply, MAX_SUPPLY);
    assert_eq!(seed.current_supply, 0);
    assert_eq!(seed.metadata_uri, SEED_URI);
    assert_eq!(contract.get_accumulated_funds(), U128(0));
}

#[test]
fn new_defaults_admin_to_deployer() {
    testing_env!(context(collector()).build());
    let contract = Contract::new(None, 1, U128(0), String::new());
    assert_eq!(contract.get_admin(), collector());
}

#[test]
fn new_records_crate_version() {
    let contract = new_contract();
    assert_eq!(contract.get_version(), env!("CARGO_PKG_VERSION"));
}

// --- transfer_admin ---

#[test]
fn transfer_admin_hands_over_rights() {
    let mut contract = new_contract();

    testing_env!(admin_context().build());
    contract.transfer_admin(buyer()).unwrap();
    assert_eq!(contract.get_admin(), buyer());

    testing_env!(admin_context().build());
    let err = contract
        .create_token_type(1, U128(1), "ipfs://x".into())
        .unwrap_err();
    assert_eq!(err, EditionsError::Unauthorized);

    testing_env!(context_with_deposit(buyer(), ONE_YOCTO.as_yoctonear()).build());
    assert_eq!(contract.create_token_type(1, U128(1), "ipfs://x".into()).unwrap(), 1);
}

#[test]
fn transfer_admin_non_admin_fails() {
    let mut contract = new_contract();

    testing_env!(context(outsider()).build());
    let err = contract.transfer_admin(outsider()).unwrap_err();
    assert_eq!(err, EditionsError::Unauthorized);
    assert_eq!(contract.get_admin(), owner());
}

#[test]
fn transfer_admin_without_yocto_fails() {
    let mut contract = new_contract();

    testing_env!(context(owner()).build());
    let err = contract.transfer_admin(outsider()).unwrap_err();
    assert_eq!(err, EditionsError::InsufficientDeposit);
    assert_eq!(contract.get_admin(), owner());
}

#[test]
fn transfer_admin_non_admin_reported_before_deposit() {
    let mut contract = new_contract();

    testing_env!(context(outsider()).build());
    let err = contract.transfer_admin(outsider()).unwrap_err();
    assert_eq!(err, EditionsError::Unauthorized);
}

#[test]
fn transfer_admin_to_self_is_allowed() {
    let mut contract = new_contract();

    testing_env!(admin_context().build());
    contract.transfer_admin(owner()).unwrap();
    assert_eq!(contract.get_admin(), owner());
}
