use crate::core::amount::{AmountInput, CountInput};
use crate::core::fare::{ContextError, FareContext, RowPosition};
use crate::core::ledger::{BackRowLedger, SeatLedger};
use crate::core::selection::Selection;
use crate::settlement::aggregate::Aggregate;
use crate::settlement::snapshot::{BackRowView, SeatView, SettlementSnapshot};
use log::{debug, info, warn};
use rust_decimal::Decimal;

/// Live settlement state for one calculation round.
///
/// Holds one [`SeatLedger`] per regular seat, the optional back-row ledger
/// and the current [`Selection`]. Edits go to whichever ledger is selected;
/// edits with nothing selected are ignored.
///
/// # Examples
///
/// ```
/// use fare_settlement::prelude::*;
/// use rust_decimal_macros::dec;
///
/// let ctx = FareContext::new(dec!(10), RowPosition::Last, 2).unwrap();
/// let mut settlement = Settlement::initialize(ctx);
///
/// settlement.select_seat(0);
/// settlement.set_paid("20");
/// settlement.set_taken("5");
///
/// assert_eq!(settlement.seat_remaining(0), Some(dec!(5)));
/// assert_eq!(settlement.aggregate().total_balance, dec!(15));
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Settlement {
    context: FareContext,
    seats: Vec<SeatLedger>,
    back_row: Option<BackRowLedger>,
    selection: Selection,
}

impl Settlement {
    /// Start a round with empty ledgers and nothing selected.
    pub fn initialize(context: FareContext) -> Self {
        info!("initializing settlement: {}", context);
        Self {
            context,
            seats: vec![SeatLedger::new(); context.regular_seat_count()],
            back_row: context.has_back_row().then(BackRowLedger::new),
            selection: Selection::None,
        }
    }

    /// Validate raw context inputs and start a round.
    pub fn try_initialize(
        fare_per_passenger: Decimal,
        row_position: RowPosition,
        regular_seat_count: usize,
    ) -> Result<Self, ContextError> {
        let context = FareContext::new(fare_per_passenger, row_position, regular_seat_count)
            .inspect_err(|e| warn!("rejected fare context: {}", e))?;
        Ok(Self::initialize(context))
    }

    /// Discard every edit and selection, keeping the context.
    pub fn reset(&mut self) {
        info!("resetting settlement: {}", self.context);
        *self = Self::initialize(self.context);
    }

    // --- Selection ---

    /// Toggle a regular seat. Indexes past the last seat are ignored.
    pub fn select_seat(&mut self, index: usize) {
        if index >= self.seats.len() {
            debug!(
                "ignoring selection of seat {} (row has {} seats)",
                index,
                self.seats.len()
            );
            return;
        }
        self.selection = self.selection.toggle_seat(index);
        debug!("selection is now {}", self.selection);
    }

    /// Toggle the back row. Ignored when the row is the last one.
    pub fn select_back_row(&mut self) {
        if self.back_row.is_none() {
            debug!("ignoring back row selection: tracked row is the last row");
            return;
        }
        self.selection = self.selection.toggle_back_row();
        debug!("selection is now {}", self.selection);
    }

    // --- Edits ---

    /// Record the amount handed over by the selected seat or back row.
    pub fn set_paid(&mut self, value: impl Into<AmountInput>) {
        let value = value.into();
        match self.selection {
            Selection::RegularSeat(index) => {
                if let Some(seat) = self.seats.get_mut(index) {
                    debug!("seat {} paid '{}'", index + 1, value);
                    seat.paid = value;
                }
            }
            Selection::BackRow => {
                if let Some(back) = self.back_row.as_mut() {
                    debug!("back row paid '{}'", value);
                    back.paid = value;
                }
            }
            Selection::None => debug!("ignoring paid '{}': nothing selected", value),
        }
    }

    /// Record the change taken back by the selected seat or back row.
    pub fn set_taken(&mut self, value: impl Into<AmountInput>) {
        let value = value.into();
        match self.selection {
            Selection::RegularSeat(index) => {
                if let Some(seat) = self.seats.get_mut(index) {
                    debug!("seat {} took '{}'", index + 1, value);
                    seat.taken = value;
                }
            }
            Selection::BackRow => {
                if let Some(back) = self.back_row.as_mut() {
                    debug!("back row took '{}'", value);
                    back.taken = value;
                }
            }
            Selection::None => debug!("ignoring taken '{}': nothing selected", value),
        }
    }

    /// Set how many passengers share the back row.
    ///
    /// Only applies while the back row is selected.
    pub fn set_back_row_passenger_count(&mut self, value: impl Into<CountInput>) {
        let value = value.into();
        if !self.selection.is_back_row() {
            debug!("ignoring back row count '{}': back row not selected", value);
            return;
        }
        if let Some(back) = self.back_row.as_mut() {
            debug!("back row passenger count '{}'", value);
            back.passenger_count = value;
            if back.passenger_count.is_entered() && !back.is_within_recommended_range() {
                debug!(
                    "back row count {} is outside the recommended range",
                    back.passengers()
                );
            }
        }
    }

    // --- Accessors ---

    pub fn context(&self) -> &FareContext {
        &self.context
    }

    pub fn selection(&self) -> Selection {
        self.selection
    }

    pub fn seats(&self) -> &[SeatLedger] {
        &self.seats
    }

    pub fn back_row(&self) -> Option<&BackRowLedger> {
        self.back_row.as_ref()
    }

    pub fn seat_remaining(&self, index: usize) -> Option<Decimal> {
        self.seats
            .get(index)
            .map(|seat| seat.remaining(self.context.fare_per_passenger()))
    }

    pub fn back_row_remaining(&self) -> Option<Decimal> {
        self.back_row
            .as_ref()
            .map(|back| back.remaining(self.context.fare_per_passenger()))
    }

    /// Totals over all ledgers, computed fresh on every call.
    pub fn aggregate(&self) -> Aggregate {
        Aggregate::compute(self)
    }

    /// A read-only copy of everything the presentation layer renders.
    pub fn snapshot(&self) -> SettlementSnapshot {
        let fare = self.context.fare_per_passenger();
        SettlementSnapshot {
            context: self.context,
            selection: self.selection,
            seats: self
                .seats
                .iter()
                .map(|seat| SeatView::from_ledger(seat, fare))
                .collect(),
            back_row: self
                .back_row
                .as_ref()
                .map(|back| BackRowView::from_ledger(back, fare)),
            aggregate: self.aggregate(),
        }
    }
}
