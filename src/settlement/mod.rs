pub mod aggregate;
pub mod engine;
pub mod instruction;
pub mod script;
pub mod snapshot;
