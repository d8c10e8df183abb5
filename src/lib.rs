//! # fare-settlement
//!
//! Fare splitting and cash settlement for a shared ride.
//!
//! One passenger in a row collects the fare from everyone in it (and from
//! the row behind, when there is one). This engine tracks what each seat
//! paid and took back as change, and derives how much is still owed.
//!
//! ## Architecture
//!
//! - **core** — Fare context, entered amounts, seat and back-row ledgers, selection
//! - **settlement** — The settlement engine, totals, snapshots, edit scripts
//! - **simulation** — Random ride generation for testing and benchmarks

pub mod core;
pub mod settlement;
pub mod simulation;

/// Convenience re-exports for common usage.
pub mod prelude {
    pub use crate::core::amount::{AmountInput, CountInput};
    pub use crate::core::fare::{ContextError, FareContext, RowPosition};
    pub use crate::core::ledger::{BackRowLedger, SeatLedger};
    pub use crate::core::selection::Selection;
    pub use crate::settlement::aggregate::Aggregate;
    pub use crate::settlement::engine::Settlement;
    pub use crate::settlement::instruction::HandoffInstruction;
    pub use crate::settlement::script::{Edit, SessionScript};
    pub use crate::settlement::snapshot::SettlementSnapshot;
}
