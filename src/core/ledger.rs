use crate::core::amount::{AmountInput, CountInput};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::ops::RangeInclusive;

/// Back-row head counts the form suggests. Not enforced.
pub const RECOMMENDED_BACK_ROW_RANGE: RangeInclusive<u32> = 1..=5;

/// Money handed over and change taken back by one regular seat.
///
/// `remaining` is never stored; it is derived from the inputs on every
/// call. A positive remainder means the seat overpaid and is still owed
/// change, a negative one means the seat still owes money.
///
/// The fare is only charged once the seat has paid a non-zero amount, so an
/// untouched seat (or one whose paid field reads as zero) sits at zero
/// instead of showing a debt.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SeatLedger {
    pub paid: AmountInput,
    pub taken: AmountInput,
}

impl SeatLedger {
    pub fn new() -> Self {
        Self::default()
    }

    /// Physical cash held for this seat: paid minus taken.
    pub fn cash_balance(&self) -> Decimal {
        self.paid.value() - self.taken.value()
    }

    /// Whether the seat has paid anything yet.
    pub fn is_fare_charged(&self) -> bool {
        !self.paid.value().is_zero()
    }

    /// Fare charged to this seat so far.
    pub fn fare_due(&self, fare: Decimal) -> Decimal {
        if self.is_fare_charged() {
            fare
        } else {
            Decimal::ZERO
        }
    }

    pub fn remaining(&self, fare: Decimal) -> Decimal {
        self.cash_balance() - self.fare_due(fare)
    }

    pub fn is_empty(&self) -> bool {
        !self.paid.is_entered() && !self.taken.is_entered()
    }
}

/// Shared ledger for the passengers in the row behind the tracked one.
///
/// The whole group's fare is charged up front, whether or not anything has
/// been paid yet.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct BackRowLedger {
    pub paid: AmountInput,
    pub taken: AmountInput,
    pub passenger_count: CountInput,
}

impl BackRowLedger {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn passengers(&self) -> u32 {
        self.passenger_count.value()
    }

    pub fn cash_balance(&self) -> Decimal {
        self.paid.value() - self.taken.value()
    }

    pub fn fare_due(&self, fare: Decimal) -> Decimal {
        Decimal::from(self.passengers()) * fare
    }

    pub fn remaining(&self, fare: Decimal) -> Decimal {
        self.cash_balance() - self.fare_due(fare)
    }

    pub fn is_within_recommended_range(&self) -> bool {
        RECOMMENDED_BACK_ROW_RANGE.contains(&self.passengers())
    }

    pub fn is_empty(&self) -> bool {
        !self.paid.is_entered() && !self.taken.is_entered() && !self.passenger_count.is_entered()
    }
}
