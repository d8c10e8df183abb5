pub mod amount;
pub mod fare;
pub mod ledger;
pub mod selection;
