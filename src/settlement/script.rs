use crate::core::fare::{ContextError, FareContext, RowPosition};
use crate::settlement::engine::Settlement;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// One discrete input event from the surrounding application.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "op", rename_all = "snake_case")]
pub enum Edit {
    SelectSeat { index: usize },
    SelectBackRow,
    SetPaid { value: String },
    SetTaken { value: String },
    SetBackRowPassengerCount { value: String },
    Reset,
}

impl Edit {
    /// Apply this edit to a settlement.
    pub fn apply(&self, settlement: &mut Settlement) {
        match self {
            Edit::SelectSeat { index } => settlement.select_seat(*index),
            Edit::SelectBackRow => settlement.select_back_row(),
            Edit::SetPaid { value } => settlement.set_paid(value.as_str()),
            Edit::SetTaken { value } => settlement.set_taken(value.as_str()),
            Edit::SetBackRowPassengerCount { value } => {
                settlement.set_back_row_passenger_count(value.as_str())
            }
            Edit::Reset => settlement.reset(),
        }
    }
}

/// A recorded calculation round: the context inputs and every edit made.
///
/// # Examples
///
/// ```
/// use fare_settlement::settlement::script::SessionScript;
/// use rust_decimal_macros::dec;
///
/// let script: SessionScript = serde_json::from_str(r#"{
///     "fare": "10",
///     "row": "last",
///     "seats": 2,
///     "edits": [
///         { "op": "select_seat", "index": 0 },
///         { "op": "set_paid", "value": "20" },
///         { "op": "set_taken", "value": "5" }
///     ]
/// }"#).unwrap();
///
/// let settlement = script.run().unwrap();
/// assert_eq!(settlement.seat_remaining(0), Some(dec!(5)));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionScript {
    pub fare: Decimal,
    #[serde(default)]
    pub row: RowPosition,
    pub seats: usize,
    #[serde(default)]
    pub edits: Vec<Edit>,
}

impl SessionScript {
    pub fn context(&self) -> Result<FareContext, ContextError> {
        FareContext::new(self.fare, self.row, self.seats)
    }

    /// Initialize a settlement and replay every edit in order.
    pub fn run(&self) -> Result<Settlement, ContextError> {
        let mut settlement = Settlement::try_initialize(self.fare, self.row, self.seats)?;
        for edit in &self.edits {
            edit.apply(&mut settlement);
        }
        Ok(settlement)
    }
}
