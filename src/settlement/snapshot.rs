use crate::core::fare::FareContext;
use crate::core::ledger::{BackRowLedger, SeatLedger};
use crate::core::selection::Selection;
use crate::settlement::aggregate::Aggregate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Render-ready view of one regular seat.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SeatView {
    /// Entered text, possibly blank.
    pub paid: String,
    pub taken: String,
    pub paid_value: Decimal,
    pub taken_value: Decimal,
    /// Whether the fare has been charged to this seat yet.
    pub fare_charged: bool,
    pub remaining: Decimal,
}

impl SeatView {
    pub fn from_ledger(seat: &SeatLedger, fare: Decimal) -> Self {
        Self {
            paid: seat.paid.as_str().to_string(),
            taken: seat.taken.as_str().to_string(),
            paid_value: seat.paid.value(),
            taken_value: seat.taken.value(),
            fare_charged: seat.is_fare_charged(),
            remaining: seat.remaining(fare),
        }
    }
}

/// Render-ready view of the back row.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BackRowView {
    pub paid: String,
    pub taken: String,
    pub passenger_count: String,
    pub paid_value: Decimal,
    pub taken_value: Decimal,
    pub passengers: u32,
    pub within_recommended_range: bool,
    pub remaining: Decimal,
}

impl BackRowView {
    pub fn from_ledger(back: &BackRowLedger, fare: Decimal) -> Self {
        Self {
            paid: back.paid.as_str().to_string(),
            taken: back.taken.as_str().to_string(),
            passenger_count: back.passenger_count.as_str().to_string(),
            paid_value: back.paid.value(),
            taken_value: back.taken.value(),
            passengers: back.passengers(),
            within_recommended_range: back.is_within_recommended_range(),
            remaining: back.remaining(fare),
        }
    }
}

/// Everything the presentation layer needs to draw a settlement.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SettlementSnapshot {
    pub context: FareContext,
    pub selection: Selection,
    pub seats: Vec<SeatView>,
    pub back_row: Option<BackRowView>,
    pub aggregate: Aggregate,
}

impl std::fmt::Display for SettlementSnapshot {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "=== Settlement ===")?;
        writeln!(f, "Fare:           {}", self.context.fare_per_passenger())?;
        writeln!(f, "Row:            {}", self.context.row_position())?;
        writeln!(f, "Selected:       {}", self.selection)?;
        writeln!(f)?;
        writeln!(
            f,
            "  {:<10} {:>10} {:>10} {:>10}",
            "Seat", "Paid", "Taken", "Remaining"
        )?;
        for (i, seat) in self.seats.iter().enumerate() {
            writeln!(
                f,
                "  {:<10} {:>10} {:>10} {:>10}",
                format!("#{}", i + 1),
                seat.paid_value,
                seat.taken_value,
                seat.remaining
            )?;
        }
        if let Some(back) = &self.back_row {
            writeln!(
                f,
                "  {:<10} {:>10} {:>10} {:>10}",
                format!("back x{}", back.passengers),
                back.paid_value,
                back.taken_value,
                back.remaining
            )?;
        }
        writeln!(f)?;
        write!(f, "{}", self.aggregate)
    }
}
