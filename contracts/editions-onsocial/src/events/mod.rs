mod builder;
mod types;

mod contract;
mod edition;
mod nep245;

pub use contract::*;
pub use edition::*;

pub(crate) const STANDARD: &str = "onsocial";
pub(crate) const VERSION: &str = "1.0.0";
pub(crate) const PREFIX: &str = "EVENT_JSON:";

pub(crate) const EDITION: &str = "EDITION_UPDATE";
pub(crate) const CONTRACT: &str = "CONTRACT_UPDATE";
