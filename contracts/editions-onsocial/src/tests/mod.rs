
// --- Unit Tests ---
pub mod unit {
    pub mod admin_test;
    pub mod balances_test;
    pub mod events_test;
    pub mod mint_test;
    pub mod token_types_test;
    pub mod treasury_test;
    pub mod upgrade_test;
}
