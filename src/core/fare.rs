use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Upper bound (inclusive) on the per-passenger fare.
pub const MAX_FARE: Decimal = dec!(1000);

/// Fewest individually tracked seats in a row.
pub const MIN_SEATS: usize = 1;

/// Most individually tracked seats in a row.
pub const MAX_SEATS: usize = 5;

/// Errors raised when a calculation round is started with bad inputs.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ContextError {
    #[error("fare must be in (0, {max}], got {fare}")]
    FareOutOfRange { fare: Decimal, max: Decimal },
    #[error("seat count must be in [{min}, {max}], got {count}")]
    SeatCountOutOfRange {
        count: usize,
        min: usize,
        max: usize,
    },
    #[error("invalid fare '{0}'")]
    InvalidFare(String),
    #[error("invalid seat count '{0}'")]
    InvalidSeatCount(String),
    #[error("unknown row position '{0}', expected 'last' or 'not-last'")]
    UnknownRowPosition(String),
}

/// Where the tracked row sits in the car.
///
/// Any row other than the last has a shared back row behind it whose
/// occupants pay through the tracked row.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum RowPosition {
    Last,
    #[default]
    NotLast,
}

impl RowPosition {
    pub fn is_last(self) -> bool {
        matches!(self, RowPosition::Last)
    }

    pub fn has_back_row(self) -> bool {
        !self.is_last()
    }
}

impl fmt::Display for RowPosition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RowPosition::Last => write!(f, "last"),
            RowPosition::NotLast => write!(f, "not-last"),
        }
    }
}

impl FromStr for RowPosition {
    type Err = ContextError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "last" => Ok(RowPosition::Last),
            "not-last" | "notlast" | "not_last" => Ok(RowPosition::NotLast),
            other => Err(ContextError::UnknownRowPosition(other.to_string())),
        }
    }
}

/// The inputs of one calculation round: fare, row position and seat count.
///
/// A `FareContext` can only be built through [`FareContext::new`] (or
/// [`FareContext::parse`]), so every instance satisfies the range checks.
///
/// # Examples
///
/// ```
/// use fare_settlement::core::fare::{FareContext, RowPosition};
/// use rust_decimal_macros::dec;
///
/// let ctx = FareContext::new(dec!(12.5), RowPosition::NotLast, 3).unwrap();
/// assert_eq!(ctx.fare_per_passenger(), dec!(12.5));
/// assert!(ctx.row_position().has_back_row());
///
/// assert!(FareContext::new(dec!(0), RowPosition::Last, 3).is_err());
/// assert!(FareContext::new(dec!(10), RowPosition::Last, 6).is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct FareContext {
    fare_per_passenger: Decimal,
    row_position: RowPosition,
    regular_seat_count: usize,
}

impl FareContext {
    /// Validate and build a context.
    pub fn new(
        fare_per_passenger: Decimal,
        row_position: RowPosition,
        regular_seat_count: usize,
    ) -> Result<Self, ContextError> {
        if fare_per_passenger <= Decimal::ZERO || fare_per_passenger > MAX_FARE {
            return Err(ContextError::FareOutOfRange {
                fare: fare_per_passenger,
                max: MAX_FARE,
            });
        }
        if !(MIN_SEATS..=MAX_SEATS).contains(&regular_seat_count) {
            return Err(ContextError::SeatCountOutOfRange {
                count: regular_seat_count,
                min: MIN_SEATS,
                max: MAX_SEATS,
            });
        }
        Ok(Self {
            fare_per_passenger,
            row_position,
            regular_seat_count,
        })
    }

    /// Build a context from the text a user typed into the form.
    ///
    /// Unlike ledger edits, context inputs are strict: unparsable text is
    /// rejected rather than read as zero.
    pub fn parse(fare: &str, row_position: &str, seats: &str) -> Result<Self, ContextError> {
        let fare_value = Decimal::from_str(fare.trim())
            .map_err(|_| ContextError::InvalidFare(fare.to_string()))?;
        let row = row_position.parse::<RowPosition>()?;
        let count = seats
            .trim()
            .parse::<usize>()
            .map_err(|_| ContextError::InvalidSeatCount(seats.to_string()))?;
        Self::new(fare_value, row, count)
    }

    pub fn fare_per_passenger(&self) -> Decimal {
        self.fare_per_passenger
    }

    pub fn row_position(&self) -> RowPosition {
        self.row_position
    }

    pub fn regular_seat_count(&self) -> usize {
        self.regular_seat_count
    }

    pub fn has_back_row(&self) -> bool {
        self.row_position.has_back_row()
    }
}

impl fmt::Display for FareContext {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "fare {} x {} seats ({} row)",
            self.fare_per_passenger, self.regular_seat_count, self.row_position
        )
    }
}
